//! Text generation backends.
//!
//! Both backends implement [`TextGenerator`]; which one a run uses is decided
//! once, in [`build_generator`].

mod config;
mod error;
mod hosted;
mod local;

pub use config::{
    HostedConfig, LlmConfig, LocalConfig, DEFAULT_HOSTED_BASE_URL, DEFAULT_HOSTED_MODEL,
    DEFAULT_HOSTED_TIMEOUT_SECS, DEFAULT_LOCAL_COMMAND,
};
pub use error::GenerationError;
pub use hosted::{HostedGenerator, SamplingParams};
pub use local::LocalGenerator;

use crate::config::{ConfigError, Settings, OPENAI_API_KEY_ENV};
use crate::github::Languages;
use crate::prompt::{technologies_line, truncate_chars};
use async_trait::async_trait;

/// Maximum length of a repository description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 120;

/// Appended to descriptions that had to be shortened.
const ELLIPSIS: &str = "...";

/// Local runner timeout when generating descriptions.
pub const DESCRIPTION_TIMEOUT_SECS: u64 = 120;

/// Local runner timeout when generating summaries.
pub const SUMMARY_TIMEOUT_SECS: u64 = 180;

/// Turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the backend fails, times out, or
    /// produces no output.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Which text generation backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Hosted completion API.
    Hosted,
    /// Local model runner process.
    Local,
}

/// What the generated text is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// One-line repository description.
    Description,
    /// Portfolio summary paragraph(s).
    Summary,
}

impl GenerationMode {
    /// Local runner timeout for this mode.
    pub fn local_timeout_secs(self) -> u64 {
        match self {
            Self::Description => DESCRIPTION_TIMEOUT_SECS,
            Self::Summary => SUMMARY_TIMEOUT_SECS,
        }
    }
}

/// Builds the generator for `backend`.
///
/// # Errors
///
/// Returns [`ConfigError`] if the hosted backend has no API key or an
/// invalid base URL.
pub fn build_generator(
    backend: Backend,
    mode: GenerationMode,
    settings: &Settings,
    config: &LlmConfig,
) -> Result<Box<dyn TextGenerator>, ConfigError> {
    match backend {
        Backend::Hosted => {
            let api_key = config
                .hosted
                .api_key
                .as_deref()
                .or_else(|| settings.openai_api_key())
                .ok_or(ConfigError::MissingVariable {
                    name: OPENAI_API_KEY_ENV,
                })?;
            let generator =
                HostedGenerator::new(&config.hosted, api_key, SamplingParams::for_mode(mode))?;
            Ok(Box::new(generator))
        }
        Backend::Local => Ok(Box::new(LocalGenerator::new(
            config.local.command.clone(),
            settings.ollama_model(),
            mode.local_timeout_secs(),
        ))),
    }
}

/// Normalises generated text into a repository description.
///
/// Keeps only the first line; anything longer than
/// [`MAX_DESCRIPTION_CHARS`] is cut to 117 characters plus `...`.
#[must_use]
pub fn finalize_description(raw: &str) -> String {
    let line = raw.trim().lines().next().unwrap_or_default().trim();
    if line.chars().count() <= MAX_DESCRIPTION_CHARS {
        return line.to_string();
    }
    let keep = MAX_DESCRIPTION_CHARS - ELLIPSIS.len();
    format!("{}{ELLIPSIS}", truncate_chars(line, keep))
}

/// Summary used in a report when generation failed.
#[must_use]
pub fn fallback_summary(repo_name: &str, languages: &Languages) -> String {
    format!(
        "Repository: {repo_name}\nTechnologies: {}\n*Summary generation failed*",
        technologies_line(languages)
    )
}
