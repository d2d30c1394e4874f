//! LLM Client — the single point of entry for all completion calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Cohere API directly.
//! Everything goes through the `Completer` trait so handlers and tests can
//! swap the backend without touching the orchestrator.
//!
//! Model: command (hardcoded — do not make configurable to prevent drift)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ConfigError;

const GENERATE_PATH: &str = "/v1/generate";
/// The model used for every completion call.
pub const MODEL: &str = "command";

/// Per-call transport failures. Never retried; the caller sees the first one.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Completion service returned no generations")]
    NoGenerations,
}

/// A single text-completion request. Serialized verbatim as the request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    generations: Vec<Generation>,
}

#[derive(Debug, Deserialize)]
struct Generation {
    text: String,
}

#[derive(Debug, Deserialize)]
struct CohereError {
    message: String,
}

/// The completion seam. `LlmClient` talks to Cohere; tests plug in stubs.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

/// HTTP client for the Cohere generate endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    /// Builds the client. A blank credential is a startup error, never a per-call one.
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential {
                key: "COHERE_API_KEY".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::Invalid {
                key: "COMPLETION_TIMEOUT_SECS".to_string(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Completer for LlmClient {
    /// Single POST to the generate endpoint. Timeouts surface as `LlmError::Http`.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        debug!(
            "Completion request: model={} max_tokens={} temperature={} prompt_chars={}",
            request.model,
            request.max_tokens,
            request.temperature,
            request.prompt.len()
        );

        let response = self
            .client
            .post(format!("{}{}", self.base_url, GENERATE_PATH))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Completion API returned {}: {}", status, body);
            let message = serde_json::from_str::<CohereError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;

        body.generations
            .into_iter()
            .next()
            .map(|g| g.text)
            .ok_or(LlmError::NoGenerations)
    }
}
