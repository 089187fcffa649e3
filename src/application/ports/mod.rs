mod audio_store;
mod completion_client;
mod speech_synthesizer;

pub use audio_store::{AudioStore, AudioStoreError};
pub use completion_client::{CompletionClient, CompletionError};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
