use gitfolio_api::EmailConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
///
/// Loaded from a TOML file in the platform config directory. A missing file
/// means defaults; the dark-mode flag is written back on every toggle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub github: GitHubConfig,
    /// Contact form stays hidden unless the email service is configured
    pub email: Option<EmailConfig>,
    pub ui: UiConfig,
}

impl Config {
    /// Load config from the default location, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)
                .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to disk
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, contents)?;
        Ok(())
    }

    /// The access token to authorize API calls with, if any.
    ///
    /// The config file wins; the `GITHUB_TOKEN` environment variable is the
    /// fallback. `None` means unauthenticated access at the lower quota.
    pub fn github_token(&self) -> Option<String> {
        self.token_from(std::env::var("GITHUB_TOKEN").ok())
    }

    // Env lookup injected so tests never touch process-wide state
    fn token_from(&self, env_token: Option<String>) -> Option<String> {
        self.github
            .token
            .clone()
            .or(env_token)
            .filter(|t| !t.is_empty())
    }

    fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("gitfolio");

        Ok(config_dir.join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Whose portfolio to render
    #[serde(default = "default_username")]
    pub username: String,

    /// GitHub personal access token
    /// Get one at https://github.com/settings/tokens
    pub token: Option<String>,

    /// API URL (for GitHub Enterprise)
    #[serde(default = "default_github_url")]
    pub api_url: String,

    /// How many repositories to show
    #[serde(default = "default_max_repos")]
    pub max_repos: u32,
}

fn default_username() -> String {
    "octocat".to_string()
}

fn default_github_url() -> String {
    "https://api.github.com".to_string()
}

fn default_max_repos() -> u32 {
    12
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            token: None,
            api_url: default_github_url(),
            max_repos: default_max_repos(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Dark mode preference, read once at startup, written on every toggle
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

fn default_dark_mode() -> bool {
    true // because who uses light theme in a terminal?
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.max_repos, 12);
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert!(config.ui.dark_mode);
        assert!(config.email.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.github.username = "someone".to_string();
        config.ui.dark_mode = false;

        let toml = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&toml).unwrap();
        assert_eq!(back.github.username, "someone");
        assert!(!back.ui.dark_mode);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [github]
            username = "someone"

            [ui]
            "#,
        )
        .unwrap();

        assert_eq!(config.github.username, "someone");
        assert_eq!(config.github.max_repos, 12);
        assert!(config.ui.dark_mode);
    }

    #[test]
    fn test_configured_token_wins_over_env() {
        let mut config = Config::default();
        config.github.token = Some("ghp_from_config".to_string());
        assert_eq!(
            config
                .token_from(Some("ghp_from_env".to_string()))
                .as_deref(),
            Some("ghp_from_config")
        );
    }

    #[test]
    fn test_env_token_is_the_fallback() {
        let config = Config::default();
        assert_eq!(
            config
                .token_from(Some("ghp_from_env".to_string()))
                .as_deref(),
            Some("ghp_from_env")
        );
    }

    #[test]
    fn test_empty_token_means_unauthenticated() {
        let mut config = Config::default();
        config.github.token = Some(String::new());
        // An empty string is not a token
        assert!(config.token_from(None).is_none());
    }
}
