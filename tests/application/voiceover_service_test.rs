use std::sync::{Arc, Mutex};

use voicechef::application::ports::{
    AudioStore, AudioStoreError, SpeechSynthesizer, SynthesisError,
};
use voicechef::application::services::{PlaybackService, VoiceoverError, VoiceoverService};
use voicechef::domain::{AccentSelector, ArtifactPath, AudioArtifact, Voice};
use voicechef::infrastructure::storage::LocalAudioStore;

/// Captures the text and voice handed to it.
struct RecordingSynthesizer {
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingSynthesizer {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice: &Voice,
        _slow: bool,
    ) -> Result<Vec<u8>, SynthesisError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), voice.tld.to_string()));
        Ok(b"audio".to_vec())
    }
}

/// Store whose delete always fails, for the warning-downgrade path.
struct UndeletableStore {
    inner: LocalAudioStore,
}

#[async_trait::async_trait]
impl AudioStore for UndeletableStore {
    async fn store(&self, path: &ArtifactPath, bytes: Vec<u8>) -> Result<u64, AudioStoreError> {
        self.inner.store(path, bytes).await
    }

    async fn fetch(&self, path: &ArtifactPath) -> Result<Vec<u8>, AudioStoreError> {
        self.inner.fetch(path).await
    }

    async fn delete(&self, _path: &ArtifactPath) -> Result<(), AudioStoreError> {
        Err(AudioStoreError::DeleteFailed("permission denied".to_string()))
    }

    async fn exists(&self, path: &ArtifactPath) -> Result<bool, AudioStoreError> {
        self.inner.exists(path).await
    }
}

#[tokio::test]
async fn given_valid_accent_when_generating_then_cleans_text_and_stores_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(LocalAudioStore::new(dir.path().to_path_buf()).unwrap());
    let synthesizer = Arc::new(RecordingSynthesizer::new());
    let service = VoiceoverService::new(Arc::clone(&synthesizer), Arc::clone(&store));

    let artifact = service
        .generate("1. Boil water\n2. Add **pasta**", "British English")
        .await
        .unwrap();

    assert_eq!(artifact.accent, AccentSelector::BritishEnglish);
    assert!(store.exists(&artifact.path).await.unwrap());

    let calls = synthesizer.calls.lock().unwrap();
    let (cleaned, tld) = &calls[0];
    assert_eq!(cleaned, "Step one: Boil water Step two: Add pasta");
    assert_eq!(tld, "co.uk");
}

#[tokio::test]
async fn given_unsupported_accent_when_generating_then_rejects_before_synthesis() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(LocalAudioStore::new(dir.path().to_path_buf()).unwrap());
    let synthesizer = Arc::new(RecordingSynthesizer::new());
    let service = VoiceoverService::new(Arc::clone(&synthesizer), store);

    let result = service.generate("some recipe", "Klingon").await;

    assert!(matches!(result, Err(VoiceoverError::UnsupportedAccent(_))));
    assert!(synthesizer.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_consumed_artifact_when_deletion_fails_then_bytes_still_returned_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(UndeletableStore {
        inner: LocalAudioStore::new(dir.path().to_path_buf()).unwrap(),
    });
    let path = ArtifactPath::new_mp3();
    store.store(&path, b"voiceover bytes".to_vec()).await.unwrap();
    let artifact = AudioArtifact::new(path, AccentSelector::AmericanEnglish);

    let playback = PlaybackService::new(store);
    let consumed = playback.consume(&artifact).await.unwrap();

    assert_eq!(consumed.bytes, b"voiceover bytes".to_vec());
    assert!(consumed.cleanup_warning.is_some());
}

#[tokio::test]
async fn given_consumed_artifact_when_deletion_succeeds_then_file_is_gone_without_warning() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(LocalAudioStore::new(dir.path().to_path_buf()).unwrap());
    let path = ArtifactPath::new_mp3();
    store.store(&path, b"voiceover bytes".to_vec()).await.unwrap();
    let artifact = AudioArtifact::new(path.clone(), AccentSelector::AmericanEnglish);

    let playback = PlaybackService::new(Arc::clone(&store));
    let consumed = playback.consume(&artifact).await.unwrap();

    assert!(consumed.cleanup_warning.is_none());
    assert!(!store.exists(&path).await.unwrap());
}
