//! Client-side filtering over the loaded project collection.
//!
//! Everything here is a pure function over (collection, search text, language
//! selector). No hidden state, no network: the filtered view is always
//! recomputable from the full collection plus the two current inputs.

use crate::models::ProjectCard;

/// Sentinel meaning "no language filter"
pub const ALL_LANGUAGES: &str = "all";

/// Compute the filtered view of the card collection.
///
/// A card matches when the search text is a case-insensitive substring of the
/// project name or of its description (when present), and the language
/// selector is either the "all" sentinel or an exact, case-sensitive match on
/// the primary language. Output preserves input order and is always a subset.
pub fn filter_cards(cards: &[ProjectCard], search: &str, language: &str) -> Vec<ProjectCard> {
    let needle = search.to_lowercase();

    cards
        .iter()
        .filter(|card| {
            let p = &card.project;

            let matches_search = p.name.to_lowercase().contains(&needle)
                || p.description
                    .as_ref()
                    .map(|d| d.to_lowercase().contains(&needle))
                    .unwrap_or(false);

            let matches_language =
                language == ALL_LANGUAGES || p.language.as_deref() == Some(language);

            matches_search && matches_language
        })
        .cloned()
        .collect()
}

/// Build the language selector's option list from the full collection:
/// the distinct non-null languages, sorted, behind a leading "all" sentinel.
pub fn language_options(cards: &[ProjectCard]) -> Vec<String> {
    let mut languages: Vec<String> = cards
        .iter()
        .filter_map(|card| card.project.language.clone())
        .collect();

    languages.sort();
    languages.dedup();

    let mut options = Vec::with_capacity(languages.len() + 1);
    options.push(ALL_LANGUAGES.to_string());
    options.extend(languages);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;
    use chrono::{TimeZone, Utc};

    fn card(name: &str, language: Option<&str>, description: Option<&str>) -> ProjectCard {
        ProjectCard::new(
            Project {
                name: name.to_string(),
                description: description.map(String::from),
                language: language.map(String::from),
                stars: 0,
                forks: 0,
                watchers: 0,
                url: format!("https://github.com/octocat/{}", name),
                homepage: None,
                updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            },
            None,
        )
    }

    fn sample() -> Vec<ProjectCard> {
        vec![
            card("alpha", Some("Go"), Some("cli tool")),
            card("beta", Some("Rust"), None),
        ]
    }

    #[test]
    fn test_search_matches_description() {
        let filtered = filter_cards(&sample(), "cli", ALL_LANGUAGES);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].project.name, "alpha");
    }

    #[test]
    fn test_language_filter_exact_match() {
        let filtered = filter_cards(&sample(), "", "Rust");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].project.name, "beta");
    }

    #[test]
    fn test_language_filter_is_case_sensitive() {
        // "rust" != "Rust": the selector holds values taken verbatim from the
        // collection, so a lowercased value must not match
        let filtered = filter_cards(&sample(), "", "rust");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filtered = filter_cards(&sample(), "ALPHA", ALL_LANGUAGES);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].project.name, "alpha");
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let filtered = filter_cards(&sample(), "", ALL_LANGUAGES);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_missing_description_never_matches_search() {
        // beta has no description, so only its name can match
        let filtered = filter_cards(&sample(), "tool", ALL_LANGUAGES);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].project.name, "alpha");
    }

    #[test]
    fn test_filtered_is_subset_in_input_order() {
        let cards = vec![
            card("zeta", Some("Rust"), Some("parser")),
            card("alpha", Some("Go"), Some("cli tool")),
            card("omega", Some("Rust"), Some("another cli")),
        ];
        let filtered = filter_cards(&cards, "", "Rust");

        assert!(filtered.len() <= cards.len());
        // Order preserved: zeta before omega
        let names: Vec<_> = filtered.iter().map(|c| c.project.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "omega"]);
        assert!(filtered.iter().all(|f| cards.contains(f)));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let cards = sample();
        let once = filter_cards(&cards, "cli", ALL_LANGUAGES);
        let twice = filter_cards(&cards, "cli", ALL_LANGUAGES);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_language_options_sorted_with_all_sentinel() {
        let cards = vec![
            card("a", Some("Rust"), None),
            card("b", Some("Go"), None),
            card("c", None, None),
            card("d", Some("Rust"), None),
            card("e", Some("JavaScript"), None),
        ];

        let options = language_options(&cards);
        assert_eq!(options, vec!["all", "Go", "JavaScript", "Rust"]);
    }

    #[test]
    fn test_language_options_empty_collection() {
        let options = language_options(&[]);
        assert_eq!(options, vec!["all"]);
    }
}
