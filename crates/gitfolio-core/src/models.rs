use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project model - the star of the show
///
/// One repository from the portfolio owner's account, converted from the raw
/// API record once and never mutated afterwards. The name is the unique key
/// within a user's repository list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub watchers: u32,
    /// Canonical web URL of the repository
    pub url: String,
    pub homepage: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Text shown where a description is expected but absent
    pub fn description_or_placeholder(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or("No description provided.")
    }
}

/// A project bound to its resolved cover image, ready to render as a card.
///
/// The cover is looked up once per load. `None` means the repository has no
/// conventional cover.png (or the lookup failed) and the card shows the
/// first-letter placeholder instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectCard {
    pub project: Project,
    pub cover: Option<String>,
}

impl ProjectCard {
    pub fn new(project: Project, cover: Option<String>) -> Self {
        Self { project, cover }
    }

    /// Placeholder glyph when no cover image exists
    pub fn placeholder_letter(&self) -> char {
        self.project
            .name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn project(name: &str) -> Project {
        Project {
            name: name.to_string(),
            description: None,
            language: None,
            stars: 0,
            forks: 0,
            watchers: 0,
            url: format!("https://github.com/octocat/{}", name),
            homepage: None,
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_description_placeholder() {
        let mut p = project("alpha");
        assert_eq!(p.description_or_placeholder(), "No description provided.");

        p.description = Some("cli tool".to_string());
        assert_eq!(p.description_or_placeholder(), "cli tool");
    }

    #[test]
    fn test_placeholder_letter() {
        let card = ProjectCard::new(project("gitfolio"), None);
        assert_eq!(card.placeholder_letter(), 'G');
    }

    #[test]
    fn test_project_roundtrips_through_json() {
        let card = ProjectCard::new(project("alpha"), Some("https://img.example.com/c.png".into()));
        let json = serde_json::to_string(&card).unwrap();
        let back: ProjectCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
