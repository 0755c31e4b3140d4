use thiserror::Error;

/// All the ways things can go wrong in gitfolio
///
/// We use thiserror here because it generates the boilerplate for us.
/// Life's too short to manually implement Display and Error traits.
#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API rate limit exceeded. Authenticate to raise the quota")]
    RateLimitExceeded,

    #[error("API request failed with status {0}")]
    ApiError(u16),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<gitfolio_api::GitHubError> for Error {
    fn from(err: gitfolio_api::GitHubError) -> Self {
        use gitfolio_api::GitHubError;
        match err {
            GitHubError::RateLimitExceeded => Error::RateLimitExceeded,
            GitHubError::ApiFailure { status } => Error::ApiError(status),
            GitHubError::NotFound(what) => Error::NotFound(what),
            GitHubError::NetworkError(e) => Error::NetworkError(e.to_string()),
            GitHubError::ParseError(e) => Error::SerializationError(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_error_mapping_preserves_taxonomy() {
        let err: Error = gitfolio_api::GitHubError::RateLimitExceeded.into();
        assert!(matches!(err, Error::RateLimitExceeded));

        let err: Error = gitfolio_api::GitHubError::ApiFailure { status: 500 }.into();
        assert!(matches!(err, Error::ApiError(500)));
    }
}
