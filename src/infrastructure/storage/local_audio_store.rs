use std::path::PathBuf;
use std::sync::Arc;

use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::ArtifactPath;

/// Filesystem-backed scratch store for voiceover artifacts, rooted at a
/// dedicated temp directory.
pub struct LocalAudioStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalAudioStore {
    pub fn new(base_path: PathBuf) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&base_path).map_err(AudioStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| AudioStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl AudioStore for LocalAudioStore {
    async fn store(&self, path: &ArtifactPath, bytes: Vec<u8>) -> Result<u64, AudioStoreError> {
        let store_path = StorePath::from(path.as_str());
        let len = bytes.len() as u64;
        self.inner
            .put(&store_path, PutPayload::from(bytes))
            .await
            .map_err(|e| AudioStoreError::WriteFailed(e.to_string()))?;
        Ok(len)
    }

    async fn fetch(&self, path: &ArtifactPath) -> Result<Vec<u8>, AudioStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| AudioStoreError::NotFound(e.to_string()))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| AudioStoreError::ReadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, path: &ArtifactPath) -> Result<(), AudioStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.inner
            .delete(&store_path)
            .await
            .map_err(|e| AudioStoreError::DeleteFailed(e.to_string()))
    }

    async fn exists(&self, path: &ArtifactPath) -> Result<bool, AudioStoreError> {
        let store_path = StorePath::from(path.as_str());
        match self.inner.head(&store_path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(AudioStoreError::ReadFailed(e.to_string())),
        }
    }
}
