use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GITHUB_API_BASE: &str = "https://api.github.com";

/// Header GitHub uses to report remaining request quota
const RATELIMIT_REMAINING: &str = "X-RateLimit-Remaining";

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("GitHub API rate limit exceeded")]
    RateLimitExceeded,

    #[error("API request failed with status {status}")]
    ApiFailure { status: u16 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

pub struct GitHubClient {
    client: reqwest::Client,
    token: Option<String>,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(token, GITHUB_API_BASE.to_string())
    }

    /// For GitHub Enterprise instances (and tests)
    pub fn with_base_url(token: Option<String>, base_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("gitfolio/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            token,
            base_url,
        }
    }

    /// Whether a personal access token is configured.
    ///
    /// Unauthenticated callers get 60 requests per hour; a token raises that
    /// to 5000, which matters once every card resolves its own cover image.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref token) = self.token {
            request.header(reqwest::header::AUTHORIZATION, format!("token {}", token))
        } else {
            request
        }
    }

    /// List a user's public repositories, most recently updated first
    pub async fn list_repositories(&self, username: &str, per_page: u32) -> Result<Vec<GitHubRepo>> {
        let url = format!("{}/users/{}/repos", self.base_url, username);

        let request = self.authorize(self.client.get(&url)).query(&[
            ("sort", "updated"),
            ("direction", "desc"),
            ("per_page", &per_page.to_string()),
        ]);

        let response = request.send().await?;

        if response.status() == 404 {
            return Err(GitHubError::NotFound(username.to_string()));
        }

        if !response.status().is_success() {
            return Err(denial_from_response(&response));
        }

        let repos: Vec<GitHubRepo> = response.json().await?;
        debug!("Fetched {} repositories for {}", repos.len(), username);
        Ok(repos)
    }

    /// Look up the conventional `cover.png` at a repository root.
    ///
    /// Returns the direct download URL on success. Repositories without a
    /// cover answer 404, which callers downgrade to "no cover".
    pub async fn get_cover_image(&self, username: &str, repo: &str) -> Result<String> {
        let url = format!(
            "{}/repos/{}/{}/contents/cover.png",
            self.base_url, username, repo
        );

        let response = self.authorize(self.client.get(&url)).send().await?;

        if response.status() == 404 {
            return Err(GitHubError::NotFound(format!(
                "No cover image for {}/{}",
                username, repo
            )));
        }

        if !response.status().is_success() {
            return Err(denial_from_response(&response));
        }

        let content: RepoContent = response.json().await?;
        content.download_url.ok_or_else(|| {
            GitHubError::NotFound(format!("cover.png in {}/{} has no download URL", username, repo))
        })
    }

    /// Fetch the topic tags attached to a repository
    pub async fn get_topics(&self, username: &str, repo: &str) -> Result<Vec<String>> {
        let url = format!("{}/repos/{}/{}/topics", self.base_url, username, repo);

        let response = self
            .authorize(self.client.get(&url))
            // Topics are still behind the mercy preview media type
            .header(
                reqwest::header::ACCEPT,
                "application/vnd.github.mercy-preview+json",
            )
            .send()
            .await?;

        if response.status() == 404 {
            return Err(GitHubError::NotFound(format!("{}/{}", username, repo)));
        }

        if !response.status().is_success() {
            return Err(denial_from_response(&response));
        }

        let topics: TopicsResponse = response.json().await?;
        Ok(topics.names)
    }
}

/// Classify a non-2xx response.
///
/// GitHub signals a spent quota with 403 plus a zeroed remaining-quota header;
/// a 403 with quota left is an ordinary API failure (e.g. a blocked repo).
fn denial_from_response(response: &reqwest::Response) -> GitHubError {
    let remaining = response
        .headers()
        .get(RATELIMIT_REMAINING)
        .and_then(|v| v.to_str().ok());
    classify_denial(response.status(), remaining)
}

fn classify_denial(status: reqwest::StatusCode, remaining: Option<&str>) -> GitHubError {
    if status == reqwest::StatusCode::FORBIDDEN {
        if let Some(remaining) = remaining {
            if remaining.trim() == "0" {
                return GitHubError::RateLimitExceeded;
            }
        }
    }
    GitHubError::ApiFailure {
        status: status.as_u16(),
    }
}

/// Repository record as GitHub returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    pub html_url: String,
    pub homepage: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Subset of the contents API response we care about
#[derive(Debug, Clone, Deserialize)]
struct RepoContent {
    download_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct TopicsResponse {
    #[serde(default)]
    names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_authenticated_reflects_token_presence() {
        assert!(!GitHubClient::new(None).is_authenticated());
        assert!(GitHubClient::new(Some("ghp_test".to_string())).is_authenticated());
    }

    #[test]
    fn test_rate_limit_requires_exhausted_quota() {
        let err = classify_denial(reqwest::StatusCode::FORBIDDEN, Some("0"));
        assert!(matches!(err, GitHubError::RateLimitExceeded));

        // 403 with quota left is not a rate limit
        let err = classify_denial(reqwest::StatusCode::FORBIDDEN, Some("42"));
        assert!(matches!(err, GitHubError::ApiFailure { status: 403 }));

        // 403 without the header at all is not a rate limit either
        let err = classify_denial(reqwest::StatusCode::FORBIDDEN, None);
        assert!(matches!(err, GitHubError::ApiFailure { status: 403 }));
    }

    #[test]
    fn test_other_statuses_are_api_failures() {
        let err = classify_denial(reqwest::StatusCode::INTERNAL_SERVER_ERROR, Some("0"));
        assert!(matches!(err, GitHubError::ApiFailure { status: 500 }));

        let err = classify_denial(reqwest::StatusCode::BAD_GATEWAY, None);
        assert!(matches!(err, GitHubError::ApiFailure { status: 502 }));
    }

    #[test]
    fn test_parse_repo_record() {
        let json = r#"{
            "name": "alpha",
            "description": "cli tool",
            "language": "Go",
            "stargazers_count": 12,
            "forks_count": 3,
            "watchers_count": 12,
            "html_url": "https://github.com/octocat/alpha",
            "homepage": null,
            "updated_at": "2024-05-01T12:00:00Z"
        }"#;

        let repo: GitHubRepo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "alpha");
        assert_eq!(repo.language.as_deref(), Some("Go"));
        assert_eq!(repo.stargazers_count, 12);
        assert!(repo.homepage.is_none());
    }

    #[test]
    fn test_parse_repo_record_with_missing_counts() {
        // Counts default to zero when the API omits them
        let json = r#"{
            "name": "beta",
            "description": null,
            "language": null,
            "html_url": "https://github.com/octocat/beta",
            "homepage": "https://beta.example.com",
            "updated_at": "2024-05-01T12:00:00Z"
        }"#;

        let repo: GitHubRepo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.stargazers_count, 0);
        assert_eq!(repo.forks_count, 0);
        assert!(repo.description.is_none());
    }

    #[test]
    fn test_parse_topics_response() {
        let topics: TopicsResponse =
            serde_json::from_str(r#"{"names": ["rust", "tui", "portfolio"]}"#).unwrap();
        assert_eq!(topics.names, vec!["rust", "tui", "portfolio"]);

        let empty: TopicsResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.names.is_empty());
    }

    #[test]
    fn test_parse_cover_content() {
        let content: RepoContent = serde_json::from_str(
            r#"{"name": "cover.png", "download_url": "https://raw.example.com/cover.png"}"#,
        )
        .unwrap();
        assert_eq!(
            content.download_url.as_deref(),
            Some("https://raw.example.com/cover.png")
        );
    }
}
