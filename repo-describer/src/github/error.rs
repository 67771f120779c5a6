//! GitHub API error types.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub REST API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Transport or client error from octocrab.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The API answered with a status the caller cannot handle.
    #[error("GitHub API returned {status} for '{route}': {body}")]
    UnexpectedStatus {
        route: String,
        status: u16,
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("Failed to parse response from '{route}': {source}")]
    InvalidJson {
        route: String,
        #[source]
        source: serde_json::Error,
    },

    /// README content claimed to be base64 but was not.
    #[error("Failed to decode README of '{repo}': {source}")]
    InvalidBase64 {
        repo: String,
        #[source]
        source: base64::DecodeError,
    },
}
