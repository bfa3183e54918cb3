use std::sync::Arc;

use crate::application::dto::SortOptionDto;
use crate::domain::{
    archive::ArchiveSettings, post::PostConnectionRepository, query_state::SORT_OPTIONS,
};

pub struct ArchiveQueryService {
    pub(super) post_repo: Arc<dyn PostConnectionRepository>,
    pub(super) settings: ArchiveSettings,
}

impl ArchiveQueryService {
    pub fn new(post_repo: Arc<dyn PostConnectionRepository>, settings: ArchiveSettings) -> Self {
        Self {
            post_repo,
            settings,
        }
    }

    pub fn sort_options(&self) -> Vec<SortOptionDto> {
        SORT_OPTIONS.iter().map(SortOptionDto::from).collect()
    }
}
