use async_trait::async_trait;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a prompt to the external completion service and return the text
    /// of the first choice.
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("API key not found. Please configure it in the application secrets.")]
    MissingApiKey,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
