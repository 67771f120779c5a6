//! LLM backend configuration.

use crate::config::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Completion model used when none is configured.
pub const DEFAULT_HOSTED_MODEL: &str = "gpt-3.5-turbo-instruct";
/// Completion API root used when none is configured.
pub const DEFAULT_HOSTED_BASE_URL: &str = "https://api.openai.com/v1";
/// Request timeout for the hosted backend.
pub const DEFAULT_HOSTED_TIMEOUT_SECS: u64 = 60;
/// Executable of the local model runner.
pub const DEFAULT_LOCAL_COMMAND: &str = "ollama";

/// Backend settings parsed from the `[llm]` table of `config.toml`.
///
/// Every field is optional; a missing file yields [`LlmConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Hosted completion endpoint settings.
    pub hosted: HostedConfig,
    /// Local model runner settings.
    pub local: LocalConfig,
}

/// Hosted completion endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HostedConfig {
    /// Completion model name.
    pub model: String,
    /// API root; `/completions` is appended.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// API key (optional, falls back to OPENAI_API_KEY env var).
    pub api_key: Option<String>,
}

impl Default for HostedConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_HOSTED_MODEL.to_string(),
            base_url: DEFAULT_HOSTED_BASE_URL.to_string(),
            timeout_secs: DEFAULT_HOSTED_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

/// Local model runner settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LocalConfig {
    /// Runner executable, invoked as `<command> run <model>`.
    pub command: String,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_LOCAL_COMMAND.to_string(),
        }
    }
}

/// Top-level structure for `config.toml` with a single `[llm]` section.
#[derive(Debug, Clone, Default, Deserialize)]
struct LlmConfigFile {
    #[serde(default)]
    llm: LlmConfig,
}

impl LlmConfig {
    /// Loads the config file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        Ok(load_config(path)?.unwrap_or_default())
    }
}

/// Loads the LLM config file if it exists.
fn load_config(path: &Path) -> Result<Option<LlmConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    let parsed: LlmConfigFile =
        toml::from_str(&contents).map_err(|source| ConfigError::TomlError {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(parsed.llm))
}
