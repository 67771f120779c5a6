//! Runner configuration.

use crate::llm::{Backend, GenerationMode};
use crate::rate_limit::WRITE_DELAY;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Generate short descriptions and patch them onto repositories.
    Describe,
    /// Generate summaries and write a portfolio report.
    Summarize,
}

impl RunMode {
    /// Generation mode used by this run mode.
    pub fn generation_mode(self) -> GenerationMode {
        match self {
            Self::Describe => GenerationMode::Description,
            Self::Summarize => GenerationMode::Summary,
        }
    }
}

/// Configuration for a single run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Describe or summarize.
    mode: RunMode,
    /// Text generation backend.
    backend: Backend,
    /// Whether to skip all writes.
    dry_run: bool,
    /// GitHub API root override.
    api_base_uri: Option<String>,
    /// Path to the LLM config file.
    llm_config_path: PathBuf,
    /// Directory the report is written to.
    output_dir: PathBuf,
    /// Pause after each write.
    write_delay: Duration,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(mode: RunMode, backend: Backend, dry_run: bool) -> Self {
        Self {
            mode,
            backend,
            dry_run,
            api_base_uri: None,
            llm_config_path: PathBuf::from("config.toml"),
            output_dir: PathBuf::from("."),
            write_delay: WRITE_DELAY,
        }
    }

    /// Sets a custom GitHub API root.
    pub fn with_api_base_uri(mut self, api_base_uri: impl Into<String>) -> Self {
        self.api_base_uri = Some(api_base_uri.into());
        self
    }

    /// Sets a custom LLM config path.
    pub fn with_llm_config_path(mut self, llm_config_path: PathBuf) -> Self {
        self.llm_config_path = llm_config_path;
        self
    }

    /// Sets the report output directory.
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Sets the pause after each write.
    pub fn with_write_delay(mut self, write_delay: Duration) -> Self {
        self.write_delay = write_delay;
        self
    }

    /// Returns the run mode.
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Returns the text generation backend.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the GitHub API root override.
    pub fn api_base_uri(&self) -> Option<&str> {
        self.api_base_uri.as_deref()
    }

    /// Returns the LLM config file path.
    pub fn llm_config_path(&self) -> &Path {
        &self.llm_config_path
    }

    /// Returns the report output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the pause after each write.
    pub fn write_delay(&self) -> Duration {
        self.write_delay
    }
}
