use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::ports::{AudioStore, CompletionClient, SpeechSynthesizer};
use crate::application::services::{FormatService, PlaybackService, VoiceoverService};
use crate::domain::SessionState;
use crate::presentation::config::Settings;

pub struct AppState<C, S, A>
where
    C: CompletionClient,
    S: SpeechSynthesizer,
    A: AudioStore,
{
    pub format_service: Arc<FormatService<C>>,
    pub voiceover_service: Arc<VoiceoverService<S, A>>,
    pub playback_service: Arc<PlaybackService<A>>,
    /// Single-user session. Handlers hold this lock for the whole action,
    /// which serializes Format/Generate/Consume exactly as the UI expects.
    pub session: Arc<Mutex<SessionState>>,
    pub settings: Settings,
}

impl<C, S, A> Clone for AppState<C, S, A>
where
    C: CompletionClient,
    S: SpeechSynthesizer,
    A: AudioStore,
{
    fn clone(&self) -> Self {
        Self {
            format_service: Arc::clone(&self.format_service),
            voiceover_service: Arc::clone(&self.voiceover_service),
            playback_service: Arc::clone(&self.playback_service),
            session: Arc::clone(&self.session),
            settings: self.settings.clone(),
        }
    }
}
