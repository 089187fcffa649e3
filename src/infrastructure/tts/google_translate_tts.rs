use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::Voice;

// The unofficial endpoint rejects queries much beyond this length, so text
// is split into whitespace-aligned chunks and the MP3 payloads are
// concatenated (MP3 frames are self-contained, so concatenation is valid).
const MAX_CHUNK_CHARS: usize = 200;

/// Speech synthesis via the Google Translate `translate_tts` endpoint, the
/// same service the gTTS library wraps. The regional accent is selected by
/// the translate host's top-level domain.
pub struct GoogleTranslateTts {
    client: Client,
    host_override: Option<String>,
}

impl GoogleTranslateTts {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            host_override: None,
        }
    }

    /// Route every request to a fixed base URL instead of
    /// `translate.google.<tld>`. Used by tests.
    pub fn with_host(base_url: String) -> Self {
        Self {
            client: Client::new(),
            host_override: Some(base_url.trim_end_matches('/').to_string()),
        }
    }

    fn endpoint(&self, voice: &Voice) -> String {
        match &self.host_override {
            Some(base) => format!("{}/translate_tts", base),
            None => format!("https://translate.google.{}/translate_tts", voice.tld),
        }
    }
}

impl Default for GoogleTranslateTts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTts {
    async fn synthesize(
        &self,
        text: &str,
        voice: &Voice,
        slow: bool,
    ) -> Result<Vec<u8>, SynthesisError> {
        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let chunks = split_into_chunks(text, MAX_CHUNK_CHARS);
        let endpoint = self.endpoint(voice);
        let speed = if slow { "0.3" } else { "1" };

        tracing::debug!(
            endpoint = %endpoint,
            lang = voice.lang,
            chunks = chunks.len(),
            "Synthesizing speech"
        );

        let mut audio = Vec::new();
        let total = chunks.len();

        for (idx, chunk) in chunks.iter().enumerate() {
            let idx_param = idx.to_string();
            let total_param = total.to_string();
            let textlen_param = chunk.chars().count().to_string();

            let response = self
                .client
                .get(&endpoint)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", voice.lang),
                    ("ttsspeed", speed),
                    ("q", chunk.as_str()),
                    ("idx", idx_param.as_str()),
                    ("total", total_param.as_str()),
                    ("textlen", textlen_param.as_str()),
                ])
                .send()
                .await
                .map_err(|e| SynthesisError::ApiRequestFailed(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status();
                return Err(SynthesisError::ApiRequestFailed(format!(
                    "HTTP {} for chunk {}/{}",
                    status,
                    idx + 1,
                    total
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| SynthesisError::ApiRequestFailed(e.to_string()))?;
            audio.extend_from_slice(&bytes);
        }

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        tracing::info!(bytes = audio.len(), lang = voice.lang, "Speech synthesized");
        Ok(audio)
    }
}

/// Split on whitespace into chunks of at most `max_chars` characters. A
/// single word longer than the limit becomes its own chunk rather than
/// being cut mid-word.
fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();

        if current_chars > 0 && current_chars + 1 + word_chars > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }

        if current_chars > 0 {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
