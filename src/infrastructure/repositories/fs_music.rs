use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::music::{ArtistName, MusicLibraryRepository, Song, is_audio_extension};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Music library laid out as `<root>/<artist>/<song>.<ext>`.
pub struct FsMusicLibrary {
    base_path: PathBuf,
}

fn io_error(path: &Path, err: std::io::Error) -> DomainError {
    DomainError::Persistence(format!("music library {}: {err}", path.display()))
}

impl FsMusicLibrary {
    /// Open the library, creating the root directory when it is missing.
    pub async fn open(base_path: impl Into<PathBuf>) -> DomainResult<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)
            .await
            .map_err(|err| io_error(&base_path, err))?;
        tracing::info!(path = %base_path.display(), "music library ready");
        Ok(Self { base_path })
    }
}

#[async_trait]
impl MusicLibraryRepository for FsMusicLibrary {
    async fn list_artists(&self) -> DomainResult<Vec<ArtistName>> {
        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|err| io_error(&self.base_path, err))?;

        let mut artists = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|err| io_error(&self.base_path, err))?
        {
            let path = entry.path();
            // Follows symlinks, so a linked artist folder still counts.
            let is_dir = fs::metadata(&path)
                .await
                .map(|meta| meta.is_dir())
                .unwrap_or(false);
            if !is_dir {
                continue;
            }
            match entry
                .file_name()
                .into_string()
                .ok()
                .and_then(|name| ArtistName::new(name).ok())
            {
                Some(artist) => artists.push(artist),
                None => tracing::warn!(path = %path.display(), "skipping artist folder with an unusable name"),
            }
        }

        artists.sort();
        Ok(artists)
    }

    async fn artist_songs(&self, artist: &ArtistName) -> DomainResult<Vec<Song>> {
        let artist_path = self.base_path.join(artist.as_str());
        match fs::metadata(&artist_path).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(DomainError::NotFound(format!("artist {artist}"))),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(DomainError::NotFound(format!("artist {artist}")));
            }
            Err(err) => return Err(io_error(&artist_path, err)),
        }

        let mut entries = fs::read_dir(&artist_path)
            .await
            .map_err(|err| io_error(&artist_path, err))?;

        let mut songs = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|err| io_error(&artist_path, err))?
        {
            let path = entry.path();
            let (Some(name), Some(format)) = (
                path.file_stem().and_then(|stem| stem.to_str()),
                path.extension().and_then(|ext| ext.to_str()),
            ) else {
                continue;
            };
            if !is_audio_extension(format) {
                continue;
            }
            let meta = fs::metadata(&path)
                .await
                .map_err(|err| io_error(&path, err))?;
            if !meta.is_file() {
                continue;
            }
            songs.push(Song {
                name: name.to_string(),
                format: format.to_string(),
                size_bytes: meta.len(),
            });
        }

        songs.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.format.cmp(&b.format)));
        tracing::debug!(%artist, songs = songs.len(), "scanned artist folder");
        Ok(songs)
    }
}
