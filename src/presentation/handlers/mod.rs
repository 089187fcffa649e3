mod audio;
mod format;
mod health;
mod options;
mod page;
mod voiceover;

pub use audio::audio_handler;
pub use format::{SUPPORTED_MODELS, format_handler};
pub use health::health_handler;
pub use options::options_handler;
pub use page::page_handler;
pub use voiceover::voiceover_handler;
