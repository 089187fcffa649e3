use std::sync::Arc;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::AudioArtifact;

/// The artifact bytes plus any non-fatal cleanup problem encountered while
/// releasing the backing file.
pub struct ConsumedAudio {
    pub bytes: Vec<u8>,
    pub cleanup_warning: Option<String>,
}

/// One-shot consumption of a voiceover artifact: read the whole file, then
/// delete it. Deletion failure does not invalidate the already-read audio,
/// so it is downgraded to a warning.
pub struct PlaybackService<A>
where
    A: AudioStore,
{
    audio_store: Arc<A>,
}

impl<A> PlaybackService<A>
where
    A: AudioStore,
{
    pub fn new(audio_store: Arc<A>) -> Self {
        Self { audio_store }
    }

    pub async fn consume(&self, artifact: &AudioArtifact) -> Result<ConsumedAudio, PlaybackError> {
        let bytes = self.audio_store.fetch(&artifact.path).await?;

        let cleanup_warning = match self.audio_store.delete(&artifact.path).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(path = %artifact.path, error = %e, "Failed to delete temporary audio file");
                Some(format!("Failed to delete temporary file: {}", e))
            }
        };

        Ok(ConsumedAudio {
            bytes,
            cleanup_warning,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("audio file unavailable: {0}")]
    Store(#[from] AudioStoreError),
}
