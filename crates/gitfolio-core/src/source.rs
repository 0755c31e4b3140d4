use crate::{models::Project, Result};

/// Trait for project sources - makes testing easier and keeps things flexible
///
/// The panel only ever talks to this trait, so tests can drive the state
/// machine with a mock instead of a live API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProjectSource: Send + Sync {
    /// The user's repositories, most recently updated first
    async fn list_projects(&self, username: &str, limit: u32) -> Result<Vec<Project>>;

    /// Best-effort cover image lookup; `None` when the repo has no cover
    async fn cover_image(&self, username: &str, repo: &str) -> Result<Option<String>>;

    /// Topic tags for one repository
    async fn topics(&self, username: &str, repo: &str) -> Result<Vec<String>>;
}
