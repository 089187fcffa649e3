use std::io;

use async_trait::async_trait;

use crate::domain::ArtifactPath;

/// Scratch storage for generated audio artifacts. Artifacts are small enough
/// to move as whole buffers.
#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn store(&self, path: &ArtifactPath, bytes: Vec<u8>) -> Result<u64, AudioStoreError>;

    async fn fetch(&self, path: &ArtifactPath) -> Result<Vec<u8>, AudioStoreError>;

    async fn delete(&self, path: &ArtifactPath) -> Result<(), AudioStoreError>;

    async fn exists(&self, path: &ArtifactPath) -> Result<bool, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
