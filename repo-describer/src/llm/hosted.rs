//! Hosted completion backend.

use crate::config::ConfigError;
use crate::llm::{GenerationError, GenerationMode, HostedConfig, TextGenerator};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Fixed sampling parameters sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling mass.
    pub top_p: f32,
    /// Whether generation stops at the first newline.
    pub stop_at_newline: bool,
}

impl SamplingParams {
    /// One-line descriptions.
    pub const DESCRIPTION: Self = Self {
        max_tokens: 50,
        temperature: 0.7,
        top_p: 1.0,
        stop_at_newline: true,
    };

    /// Multi-paragraph summaries.
    pub const SUMMARY: Self = Self {
        max_tokens: 600,
        temperature: 0.7,
        top_p: 1.0,
        stop_at_newline: false,
    };

    /// Returns the parameters used for `mode`.
    pub fn for_mode(mode: GenerationMode) -> Self {
        match mode {
            GenerationMode::Description => Self::DESCRIPTION,
            GenerationMode::Summary => Self::SUMMARY,
        }
    }
}

/// Generator backed by an OpenAI-compatible `/completions` endpoint.
pub struct HostedGenerator {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
    params: SamplingParams,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stop: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

impl HostedGenerator {
    /// Creates a hosted generator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the base URL is not a valid
    /// URL or the HTTP client cannot be built.
    pub fn new(
        config: &HostedConfig,
        api_key: impl Into<String>,
        params: SamplingParams,
    ) -> Result<Self, ConfigError> {
        let endpoint = completions_endpoint(&config.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                name: "llm.hosted".to_string(),
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
            model: config.model.clone(),
            params,
        })
    }
}

#[async_trait]
impl TextGenerator for HostedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            top_p: self.params.top_p,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            stop: if self.params.stop_at_newline {
                vec!["\n"]
            } else {
                Vec::new()
            },
        };

        debug!(model = %self.model, "Calling completion API");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text.trim().to_string())
            .ok_or(GenerationError::EmptyResponse)
    }
}

/// Appends `completions` to the API root, keeping any path prefix.
fn completions_endpoint(base_url: &str) -> Result<Url, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        name: "llm.hosted.base-url".to_string(),
        message,
    };

    let mut root = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }
    root.join("completions").map_err(|e| invalid(e.to_string()))
}
