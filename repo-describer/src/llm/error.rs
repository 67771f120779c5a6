//! LLM error types.

use thiserror::Error;

/// Errors a text generator can report for a single prompt.
///
/// These never abort a run; callers log them and skip or fall back.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The local model runner could not be started.
    #[error("Failed to start model runner '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the prompt or reading the output failed.
    #[error("Model runner I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// LLM operation timed out.
    #[error("LLM timed out after {0} seconds")]
    Timeout(u64),

    /// The local model runner exited unsuccessfully.
    #[error("Model runner exited with status {code:?}: {stderr}")]
    ExitStatus { code: Option<i32>, stderr: String },

    /// The completion request could not be sent or read.
    #[error("Completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The completion endpoint answered with an error status.
    #[error("Completion API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The completion endpoint answered without any choices.
    #[error("Completion API returned no choices")]
    EmptyResponse,
}
