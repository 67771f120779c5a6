//! Process configuration.
//!
//! Credentials and model selection come from the environment and are read
//! exactly once at startup into an immutable [`Settings`] value.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{
    Settings, DEFAULT_OLLAMA_MODEL, GITHUB_TOKEN_ENV, GITHUB_USERNAME_ENV, OLLAMA_MODEL_ENV,
    OPENAI_API_KEY_ENV,
};
