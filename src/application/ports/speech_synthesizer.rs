use async_trait::async_trait;

use crate::domain::Voice;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` with the given voice and return MP3 bytes. `slow`
    /// selects the reduced speaking rate.
    async fn synthesize(
        &self,
        text: &str,
        voice: &Voice,
        slow: bool,
    ) -> Result<Vec<u8>, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("nothing to synthesize: text is empty")]
    EmptyText,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("synthesis returned no audio")]
    EmptyAudio,
}
