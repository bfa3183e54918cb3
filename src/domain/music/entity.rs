use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// File extensions the library treats as songs, compared case-insensitively.
pub const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "wav", "m4a"];

pub fn is_audio_extension(extension: &str) -> bool {
    AUDIO_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(extension))
}

/// An artist is a single directory under the library root, so the name must
/// stay one path segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArtistName(String);

impl ArtistName {
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::Validation("artist name cannot be empty".into()));
        }
        if raw == "." || raw == ".." || raw.contains(['/', '\\', '\0']) {
            return Err(DomainError::Validation(format!(
                "artist name {raw:?} is not a single directory name"
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtistName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArtistName> for String {
    fn from(name: ArtistName) -> Self {
        name.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// File name without its extension.
    pub name: String,
    /// Extension as found on disk, without the dot.
    pub format: String,
    pub size_bytes: u64,
}
