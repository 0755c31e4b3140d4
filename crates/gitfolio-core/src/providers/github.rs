// GitHub provider implementation - bridges the API client with the
// ProjectSource trait
use async_trait::async_trait;
use gitfolio_api::{GitHubClient, GitHubError, GitHubRepo};
use tracing::debug;

use crate::{models::Project, source::ProjectSource, Result};

/// Wrapper around GitHubClient that implements ProjectSource
pub struct GitHubProjectSource {
    client: GitHubClient,
}

impl GitHubProjectSource {
    pub fn with_client(client: GitHubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectSource for GitHubProjectSource {
    async fn list_projects(&self, username: &str, limit: u32) -> Result<Vec<Project>> {
        let repos = self.client.list_repositories(username, limit).await?;
        Ok(repos.into_iter().map(github_to_project).collect())
    }

    async fn cover_image(&self, username: &str, repo: &str) -> Result<Option<String>> {
        // A missing cover is the normal case, not an error
        match self.client.get_cover_image(username, repo).await {
            Ok(url) => Ok(Some(url)),
            Err(GitHubError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn topics(&self, username: &str, repo: &str) -> Result<Vec<String>> {
        let topics = self.client.get_topics(username, repo).await?;
        debug!("{} topics for {}/{}", topics.len(), username, repo);
        Ok(topics)
    }
}

/// Convert a raw GitHub API record to our internal Project model
fn github_to_project(gh: GitHubRepo) -> Project {
    Project {
        name: gh.name,
        description: gh.description,
        language: gh.language,
        stars: gh.stargazers_count,
        forks: gh.forks_count,
        watchers: gh.watchers_count,
        url: gh.html_url,
        // The API hands back Some("") for a cleared homepage field
        homepage: gh.homepage.filter(|h| !h.is_empty()),
        updated_at: gh.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_conversion_normalizes_empty_homepage() {
        let gh = GitHubRepo {
            name: "alpha".into(),
            description: Some("cli tool".into()),
            language: Some("Go".into()),
            stargazers_count: 5,
            forks_count: 1,
            watchers_count: 5,
            html_url: "https://github.com/octocat/alpha".into(),
            homepage: Some(String::new()),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let project = github_to_project(gh);
        assert_eq!(project.name, "alpha");
        assert_eq!(project.stars, 5);
        assert!(project.homepage.is_none());
    }
}
