// Provider implementations backing the ProjectSource trait
pub mod github;

pub use github::GitHubProjectSource;
