mod google_translate_tts;
mod mock_synthesizer;

pub use google_translate_tts::GoogleTranslateTts;
pub use mock_synthesizer::MockSynthesizer;
