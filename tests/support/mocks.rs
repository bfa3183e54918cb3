// tests/support/mocks.rs
use airwave_archive::domain::errors::{DomainError, DomainResult};
use airwave_archive::domain::music::{ArtistName, MusicLibraryRepository, Song};
use airwave_archive::domain::post::{
    PageInfo, PostConnection, PostConnectionRepository, PostsQuery,
};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Returns a fixed connection and records every query it receives.
#[derive(Default)]
pub struct RecordingPostRepo {
    pub page_info: PageInfo,
    pub seen: Mutex<Vec<PostsQuery>>,
}

impl RecordingPostRepo {
    pub fn with_page_info(page_info: PageInfo) -> Self {
        Self {
            page_info,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn last_query(&self) -> Option<PostsQuery> {
        self.seen.lock().unwrap().last().cloned()
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl PostConnectionRepository for RecordingPostRepo {
    async fn fetch_posts(&self, query: &PostsQuery) -> DomainResult<PostConnection> {
        self.seen.lock().unwrap().push(query.clone());
        Ok(PostConnection::new(Vec::new(), self.page_info.clone()))
    }
}

/// Always fails the way an unreachable content backend does.
pub struct UnavailablePostRepo;

#[async_trait::async_trait]
impl PostConnectionRepository for UnavailablePostRepo {
    async fn fetch_posts(&self, _query: &PostsQuery) -> DomainResult<PostConnection> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/// Fixed artist folders held in memory.
#[derive(Default)]
pub struct StaticMusicLibrary {
    pub artists: BTreeMap<String, Vec<Song>>,
}

impl StaticMusicLibrary {
    pub fn sample() -> Self {
        let song = |name: &str, format: &str, size_bytes: u64| Song {
            name: name.into(),
            format: format.into(),
            size_bytes,
        };
        let mut artists = BTreeMap::new();
        artists.insert(
            "Arlo Parks".to_string(),
            vec![song("Caroline", "mp3", 4_000), song("Eugene", "wav", 6_000)],
        );
        artists.insert("Big Thief".to_string(), vec![song("Masterpiece", "m4a", 5_000)]);
        for name in ["Clairo", "Deerhunter", "Elbow", "Fontaines D.C."] {
            artists.insert(name.to_string(), vec![song("Demo", "mp3", 1_000)]);
        }
        Self { artists }
    }
}

#[async_trait::async_trait]
impl MusicLibraryRepository for StaticMusicLibrary {
    async fn list_artists(&self) -> DomainResult<Vec<ArtistName>> {
        self.artists.keys().map(|name| ArtistName::new(name.as_str())).collect()
    }

    async fn artist_songs(&self, artist: &ArtistName) -> DomainResult<Vec<Song>> {
        self.artists
            .get(artist.as_str())
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("artist {artist}")))
    }
}

/// A library whose storage cannot be read.
pub struct UnreadableMusicLibrary;

#[async_trait::async_trait]
impl MusicLibraryRepository for UnreadableMusicLibrary {
    async fn list_artists(&self) -> DomainResult<Vec<ArtistName>> {
        Err(DomainError::Persistence("permission denied".into()))
    }

    async fn artist_songs(&self, _artist: &ArtistName) -> DomainResult<Vec<Song>> {
        Err(DomainError::Persistence("permission denied".into()))
    }
}
