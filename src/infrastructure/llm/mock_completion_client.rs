use crate::application::ports::{CompletionClient, CompletionError};

/// Canned completion for wiring checks without the external service.
pub struct MockCompletionClient;

#[async_trait::async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, _prompt: &str, _model: &str) -> Result<String, CompletionError> {
        Ok("## Mock Recipe\n\n1. Mix ingredients\n2. Serve".to_string())
    }
}
