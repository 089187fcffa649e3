use std::fmt;

use uuid::Uuid;

use super::accent::AccentSelector;

/// Location of a temporary audio file inside the scratch store, relative to
/// the store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPath(String);

impl ArtifactPath {
    /// A uniquely named mp3 path for a fresh synthesis result.
    pub fn new_mp3() -> Self {
        Self(format!("voiceover_{}.mp3", Uuid::new_v4()))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A generated voiceover awaiting playback/download. Owned by the current
/// session; the backing file is deleted once the artifact is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    pub path: ArtifactPath,
    pub accent: AccentSelector,
}

impl AudioArtifact {
    pub fn new(path: ArtifactPath, accent: AccentSelector) -> Self {
        Self { path, accent }
    }

    pub fn download_filename(&self) -> String {
        self.accent.download_filename()
    }
}
