//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration errors, raised before any network activity.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Listing, README or language fetch failures.
    #[error(transparent)]
    GitHub(#[from] crate::github::GitHubError),

    /// Report rendering or writing failures.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),
}
