//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading configuration.
///
/// All of these are raised before any network activity takes place.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: &'static str },

    /// A configuration value could not be used.
    #[error("Invalid value for '{name}': {message}")]
    InvalidValue { name: String, message: String },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
