// API client implementations for the services gitfolio talks to
pub mod email;
pub mod github;

// Re-export common types
pub use email::{ContactMessage, EmailClient, EmailConfig, EmailError};
pub use github::{GitHubClient, GitHubError, GitHubRepo};
