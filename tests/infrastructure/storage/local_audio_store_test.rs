use voicechef::application::ports::{AudioStore, AudioStoreError};
use voicechef::domain::ArtifactPath;
use voicechef::infrastructure::storage::LocalAudioStore;

#[tokio::test]
async fn given_stored_artifact_when_fetching_then_returns_same_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf()).unwrap();
    let path = ArtifactPath::new_mp3();

    let written = store.store(&path, b"mp3 payload".to_vec()).await.unwrap();

    assert_eq!(written, 11);
    assert_eq!(store.fetch(&path).await.unwrap(), b"mp3 payload".to_vec());
}

#[tokio::test]
async fn given_stored_artifact_when_checking_existence_then_reports_true_until_deleted() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf()).unwrap();
    let path = ArtifactPath::new_mp3();

    store.store(&path, b"bytes".to_vec()).await.unwrap();
    assert!(store.exists(&path).await.unwrap());

    store.delete(&path).await.unwrap();
    assert!(!store.exists(&path).await.unwrap());
}

#[tokio::test]
async fn given_missing_artifact_when_fetching_then_returns_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf()).unwrap();

    let result = store.fetch(&ArtifactPath::from_raw("nope.mp3")).await;

    assert!(matches!(result, Err(AudioStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_missing_base_directory_when_creating_store_then_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("scratch").join("audio");

    let store = LocalAudioStore::new(nested.clone()).unwrap();
    let path = ArtifactPath::new_mp3();
    store.store(&path, b"x".to_vec()).await.unwrap();

    assert!(nested.exists());
}
