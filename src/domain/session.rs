use super::artifact::AudioArtifact;
use super::recipe::FormattedRecipe;

/// In-memory state of the single user session.
///
/// Lifecycle: Idle (nothing set) -> Formatted (recipe set, no audio) ->
/// AudioReady (recipe and audio set) -> back to Formatted when the audio is
/// consumed. Formatting a new recipe always drops any pending audio.
#[derive(Debug, Default)]
pub struct SessionState {
    formatted_recipe: Option<FormattedRecipe>,
    audio: Option<AudioArtifact>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn formatted_recipe(&self) -> Option<&FormattedRecipe> {
        self.formatted_recipe.as_ref()
    }

    pub fn audio(&self) -> Option<&AudioArtifact> {
        self.audio.as_ref()
    }

    /// Store a freshly formatted recipe, returning any superseded audio
    /// artifact so the caller can release its backing file.
    pub fn set_formatted(&mut self, recipe: FormattedRecipe) -> Option<AudioArtifact> {
        self.formatted_recipe = Some(recipe);
        self.audio.take()
    }

    pub fn set_audio(&mut self, artifact: AudioArtifact) -> Option<AudioArtifact> {
        self.audio.replace(artifact)
    }

    /// Transfer ownership of the pending audio to the caller (AudioReady ->
    /// Formatted). The caller becomes responsible for deleting the file.
    pub fn take_audio(&mut self) -> Option<AudioArtifact> {
        self.audio.take()
    }
}
