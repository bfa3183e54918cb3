// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::{archive::ArchiveQueryService, music::MusicQueryService},
    domain::{
        archive::ArchiveSettings, music::MusicLibraryRepository, post::PostConnectionRepository,
    },
};

pub struct ApplicationServices {
    pub archive_queries: Arc<ArchiveQueryService>,
    pub music_queries: Arc<MusicQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_repo: Arc<dyn PostConnectionRepository>,
        music_library: Arc<dyn MusicLibraryRepository>,
        settings: ArchiveSettings,
    ) -> Self {
        let archive_queries = Arc::new(ArchiveQueryService::new(post_repo, settings));
        let music_queries = Arc::new(MusicQueryService::new(music_library));
        Self {
            archive_queries,
            music_queries,
        }
    }
}
