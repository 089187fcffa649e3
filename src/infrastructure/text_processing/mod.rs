mod voiceover_cleaner;

pub use voiceover_cleaner::clean_text_for_voiceover;
