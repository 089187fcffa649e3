mod format_service;
mod playback_service;
mod voiceover_service;

pub use format_service::{FormatError, FormatService};
pub use playback_service::{ConsumedAudio, PlaybackError, PlaybackService};
pub use voiceover_service::{VoiceoverError, VoiceoverService};
