use super::{ArchiveQueryService, browse::encode};
use crate::{
    application::{dto::NavigationDto, error::ApplicationResult},
    domain::{
        archive::ArchivePage,
        query_state::{FilterPatch, RawQuery},
    },
};

pub struct ApplyArchiveFilterQuery {
    pub page: ArchivePage,
    pub query: RawQuery,
    pub patch: FilterPatch,
}

impl ArchiveQueryService {
    /// Compute where a filter or sort change navigates to. Paging is reset,
    /// so the target is always the first page of the new result set.
    pub fn apply_filter(&self, query: ApplyArchiveFilterQuery) -> ApplicationResult<NavigationDto> {
        let resolver = self.settings.resolver(query.page);
        let state = resolver.parse(&query.query);
        let next = resolver.with_filter_change(&state, query.patch);
        Ok(NavigationDto {
            query: encode(&resolver, &next)?,
        })
    }
}
