use std::sync::Arc;

use crate::application::ports::{
    AudioStore, AudioStoreError, SpeechSynthesizer, SynthesisError,
};
use crate::domain::{AccentSelector, ArtifactPath, AudioArtifact};
use crate::infrastructure::text_processing::clean_text_for_voiceover;

/// Produces a voiceover artifact for a formatted recipe: validates the
/// accent selector, cleans the text for speech, synthesizes, and stages the
/// MP3 in the scratch store.
pub struct VoiceoverService<S, A>
where
    S: SpeechSynthesizer,
    A: AudioStore,
{
    synthesizer: Arc<S>,
    audio_store: Arc<A>,
}

impl<S, A> VoiceoverService<S, A>
where
    S: SpeechSynthesizer,
    A: AudioStore,
{
    pub fn new(synthesizer: Arc<S>, audio_store: Arc<A>) -> Self {
        Self {
            synthesizer,
            audio_store,
        }
    }

    pub async fn generate(
        &self,
        text: &str,
        accent: &str,
    ) -> Result<AudioArtifact, VoiceoverError> {
        let accent = AccentSelector::try_from(accent)
            .map_err(|_| VoiceoverError::UnsupportedAccent(accent.to_string()))?;

        let cleaned = clean_text_for_voiceover(text);
        tracing::debug!(accent = %accent, chars = cleaned.len(), "Cleaned text for voiceover");

        let audio_bytes = self
            .synthesizer
            .synthesize(&cleaned, &accent.voice(), false)
            .await?;

        let path = ArtifactPath::new_mp3();
        let written = self.audio_store.store(&path, audio_bytes).await?;

        // The store reported success; still verify the artifact is readable
        // before handing its path to the session.
        if !self.audio_store.exists(&path).await? {
            return Err(VoiceoverError::VerificationFailed(path.to_string()));
        }

        tracing::info!(path = %path, bytes = written, accent = %accent, "Voiceover generated");
        Ok(AudioArtifact::new(path, accent))
    }

    /// Best-effort removal of a superseded artifact. Failure is logged as a
    /// warning only; the artifact reference has already been dropped.
    pub async fn discard(&self, artifact: &AudioArtifact) {
        if let Err(e) = self.audio_store.delete(&artifact.path).await {
            tracing::warn!(path = %artifact.path, error = %e, "Failed to delete superseded audio file");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceoverError {
    #[error("Unsupported language option: {0}")]
    UnsupportedAccent(String),
    #[error("synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("storing audio failed: {0}")]
    Store(#[from] AudioStoreError),
    #[error("failed to create audio file: {0}")]
    VerificationFailed(String),
}
