use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::Voice;

/// Returns a fixed byte payload instead of calling the external service.
pub struct MockSynthesizer;

#[async_trait::async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        _voice: &Voice,
        _slow: bool,
    ) -> Result<Vec<u8>, SynthesisError> {
        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }
        Ok(b"mock mp3 bytes".to_vec())
    }
}
