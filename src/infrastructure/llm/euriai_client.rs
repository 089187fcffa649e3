use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionClient, CompletionError};

pub const DEFAULT_BASE_URL: &str = "https://api.euron.one/api/v1";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 800;

/// Client for the Euriai completion API.
pub struct EuriaiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct CompletionRequest {
    prompt: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

// Every level of the response is optional; extraction walks the chain
// explicitly so that any missing field surfaces as InvalidResponse rather
// than a deserialization failure.
#[derive(Deserialize)]
struct CompletionResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl EuriaiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionClient for EuriaiClient {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, CompletionError> {
        if self.api_key.trim().is_empty() {
            return Err(CompletionError::MissingApiKey);
        }

        let request_body = CompletionRequest {
            prompt: prompt.to_string(),
            model: model.to_string(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let endpoint = format!("{}/chat/completions", self.base_url);
        tracing::debug!(endpoint = %endpoint, model = %model, "Sending completion request");

        let response = self
            .client
            .post(&endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| CompletionError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CompletionError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .and_then(|mut choices| {
                if choices.is_empty() {
                    None
                } else {
                    Some(choices.remove(0))
                }
            })
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| {
                CompletionError::InvalidResponse(
                    "no valid text found in the API response".to_string(),
                )
            })?;

        tracing::info!(chars = content.len(), "Completion received");
        Ok(content.trim().to_string())
    }
}
