use std::sync::Arc;

use crate::application::{
    dto::{ArtistListDto, ArtistSongsDto, ArtistSummaryDto, ArtistSummaryListDto},
    error::ApplicationResult,
};
use crate::domain::music::{ArtistName, MusicLibraryRepository};

/// How many artists the picker summary includes.
pub const ARTIST_SUMMARY_LIMIT: usize = 5;

pub struct MusicQueryService {
    library: Arc<dyn MusicLibraryRepository>,
}

impl MusicQueryService {
    pub fn new(library: Arc<dyn MusicLibraryRepository>) -> Self {
        Self { library }
    }

    pub async fn list_artists(&self) -> ApplicationResult<ArtistListDto> {
        let artists = self.library.list_artists().await?;
        Ok(ArtistListDto {
            artists: artists.into_iter().map(String::from).collect(),
        })
    }

    pub async fn artist_songs(&self, artist: &str) -> ApplicationResult<ArtistSongsDto> {
        let artist = ArtistName::new(artist)?;
        let songs = self.library.artist_songs(&artist).await?;
        Ok(ArtistSongsDto::new(artist, songs))
    }

    /// The first artists in name order with their song names.
    pub async fn artists_with_songs(&self) -> ApplicationResult<ArtistSummaryListDto> {
        let artists = self.library.list_artists().await?;
        let mut summaries = Vec::with_capacity(artists.len().min(ARTIST_SUMMARY_LIMIT));
        for artist in artists.into_iter().take(ARTIST_SUMMARY_LIMIT) {
            let songs = self.library.artist_songs(&artist).await?;
            summaries.push(ArtistSummaryDto {
                artist: artist.into(),
                songs: songs.into_iter().map(|song| song.name).collect(),
            });
        }
        tracing::debug!(artists = summaries.len(), "built artist summary");
        Ok(ArtistSummaryListDto { artists: summaries })
    }
}
