use crate::domain::errors::DomainResult;
use crate::domain::music::entity::{ArtistName, Song};
use async_trait::async_trait;

/// Uploaded music, grouped by artist.
#[async_trait]
pub trait MusicLibraryRepository: Send + Sync {
    /// Every artist in the library, in ascending name order.
    async fn list_artists(&self) -> DomainResult<Vec<ArtistName>>;

    /// Songs of one artist ordered by name. `NotFound` when the artist has no
    /// directory.
    async fn artist_songs(&self, artist: &ArtistName) -> DomainResult<Vec<Song>>;
}
