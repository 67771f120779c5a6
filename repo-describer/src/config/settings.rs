//! Process-wide settings sourced from the environment.

use crate::config::ConfigError;
use std::fmt;

/// Environment variable holding the GitHub token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Environment variable holding the account whose repositories are processed.
pub const GITHUB_USERNAME_ENV: &str = "GITHUB_USERNAME";
/// Environment variable holding the hosted completion API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable naming the local model.
pub const OLLAMA_MODEL_ENV: &str = "OLLAMA_MODEL";

/// Model used by the local runner when `OLLAMA_MODEL` is unset.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2:latest";

/// Settings read once at startup and shared by reference for the whole run.
#[derive(Clone)]
pub struct Settings {
    github_token: String,
    github_username: String,
    openai_api_key: Option<String>,
    ollama_model: String,
}

impl Settings {
    /// Creates settings from explicit credentials, with default optional values.
    pub fn new(github_token: impl Into<String>, github_username: impl Into<String>) -> Self {
        Self {
            github_token: github_token.into(),
            github_username: github_username.into(),
            openai_api_key: None,
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
        }
    }

    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] if `GITHUB_TOKEN` or
    /// `GITHUB_USERNAME` is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let github_token = get(GITHUB_TOKEN_ENV).ok_or(ConfigError::MissingVariable {
            name: GITHUB_TOKEN_ENV,
        })?;
        let github_username = get(GITHUB_USERNAME_ENV).ok_or(ConfigError::MissingVariable {
            name: GITHUB_USERNAME_ENV,
        })?;

        Ok(Self {
            github_token,
            github_username,
            openai_api_key: get(OPENAI_API_KEY_ENV),
            ollama_model: get(OLLAMA_MODEL_ENV).unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
        })
    }

    /// Sets the hosted completion API key.
    pub fn with_openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    /// Returns the GitHub token.
    pub fn github_token(&self) -> &str {
        &self.github_token
    }

    /// Returns the GitHub account login.
    pub fn github_username(&self) -> &str {
        &self.github_username
    }

    /// Returns the hosted completion API key, if configured.
    pub fn openai_api_key(&self) -> Option<&str> {
        self.openai_api_key.as_deref()
    }

    /// Returns the local model name.
    pub fn ollama_model(&self) -> &str {
        &self.ollama_model
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("github_token", &"<redacted>")
            .field("github_username", &self.github_username)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("ollama_model", &self.ollama_model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_required_and_optional_variables() {
        temp_env::with_vars(
            [
                (GITHUB_TOKEN_ENV, Some("ghp_secret")),
                (GITHUB_USERNAME_ENV, Some("octocat")),
                (OPENAI_API_KEY_ENV, Some("sk-test")),
                (OLLAMA_MODEL_ENV, Some("mistral:7b")),
            ],
            || {
                let settings = Settings::from_env().unwrap();
                assert_eq!(settings.github_token(), "ghp_secret");
                assert_eq!(settings.github_username(), "octocat");
                assert_eq!(settings.openai_api_key(), Some("sk-test"));
                assert_eq!(settings.ollama_model(), "mistral:7b");
            },
        );
    }

    #[test]
    fn defaults_optional_variables() {
        temp_env::with_vars(
            [
                (GITHUB_TOKEN_ENV, Some("ghp_secret")),
                (GITHUB_USERNAME_ENV, Some("octocat")),
                (OPENAI_API_KEY_ENV, None),
                (OLLAMA_MODEL_ENV, None),
            ],
            || {
                let settings = Settings::from_env().unwrap();
                assert_eq!(settings.openai_api_key(), None);
                assert_eq!(settings.ollama_model(), DEFAULT_OLLAMA_MODEL);
            },
        );
    }

    #[test]
    fn missing_token_is_reported() {
        temp_env::with_vars(
            [
                (GITHUB_TOKEN_ENV, None::<&str>),
                (GITHUB_USERNAME_ENV, Some("octocat")),
            ],
            || {
                let error = Settings::from_env().unwrap_err();
                assert!(matches!(
                    error,
                    ConfigError::MissingVariable {
                        name: GITHUB_TOKEN_ENV
                    }
                ));
            },
        );
    }

    #[test]
    fn empty_username_counts_as_missing() {
        let result = Settings::from_lookup(|name| match name {
            GITHUB_TOKEN_ENV => Some("ghp_secret".to_string()),
            GITHUB_USERNAME_ENV => Some("   ".to_string()),
            _ => None,
        });
        assert!(matches!(
            result,
            Err(ConfigError::MissingVariable {
                name: GITHUB_USERNAME_ENV
            })
        ));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let settings = Settings::new("ghp_secret", "octocat").with_openai_api_key("sk-test");
        let debug = format!("{settings:?}");
        assert!(!debug.contains("ghp_secret"));
        assert!(!debug.contains("sk-test"));
        assert!(debug.contains("octocat"));
    }
}
