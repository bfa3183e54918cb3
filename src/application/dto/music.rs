use crate::domain::music::{ArtistName, Song};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistListDto {
    pub artists: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SongDto {
    pub name: String,
    pub format: String,
    pub size_bytes: u64,
}

impl From<Song> for SongDto {
    fn from(song: Song) -> Self {
        Self {
            name: song.name,
            format: song.format,
            size_bytes: song.size_bytes,
        }
    }
}

/// One artist's folder with totals.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistSongsDto {
    pub artist: String,
    pub song_count: usize,
    pub total_size_bytes: u64,
    pub songs: Vec<SongDto>,
}

impl ArtistSongsDto {
    pub fn new(artist: ArtistName, songs: Vec<Song>) -> Self {
        Self {
            artist: artist.into(),
            song_count: songs.len(),
            total_size_bytes: songs.iter().map(|song| song.size_bytes).sum(),
            songs: songs.into_iter().map(SongDto::from).collect(),
        }
    }
}

/// Compact artist entry for the station picker: song names only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistSummaryDto {
    pub artist: String,
    pub songs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistSummaryListDto {
    pub artists: Vec<ArtistSummaryDto>,
}
