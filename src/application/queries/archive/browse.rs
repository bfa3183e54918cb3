use super::ArchiveQueryService;
use crate::{
    application::{
        dto::{ArchivePageDto, QueryStateDto, SortOptionDto},
        error::ApplicationResult,
    },
    domain::{
        archive::ArchivePage,
        post::PostsQuery,
        query_state::{QueryState, QueryStateResolver, RawQuery, SortOption},
    },
};

pub struct BrowseArchiveQuery {
    pub page: ArchivePage,
    pub query: RawQuery,
}

impl ArchiveQueryService {
    /// Resolve the URL into a state, fetch the matching page and describe
    /// where the next and previous links lead.
    pub async fn browse_archive(&self, query: BrowseArchiveQuery) -> ApplicationResult<ArchivePageDto> {
        let resolver = self.settings.resolver(query.page);
        let state = resolver.parse(&query.query);
        let posts_query = PostsQuery::from_state(&state)?;

        tracing::debug!(
            page = %query.page,
            field = %posts_query.field,
            order = %posts_query.order,
            size = posts_query.page.size(),
            "fetching archive page"
        );

        let connection = self.post_repo.fetch_posts(&posts_query).await?;

        let next_query = resolver
            .next_page_from(&state, &connection.page_info)
            .map(|next| encode(&resolver, &next))
            .transpose()?;
        let prev_query = resolver
            .prev_page_from(&state, &connection.page_info)
            .map(|prev| encode(&resolver, &prev))
            .transpose()?;

        Ok(ArchivePageDto {
            archive: query.page.into(),
            items: connection.nodes.into_iter().map(Into::into).collect(),
            page_info: connection.page_info.into(),
            query: encode(&resolver, &state)?,
            selected_sort: SortOption::selected(&state.field, &state.order).map(SortOptionDto::from),
            state: QueryStateDto::from(&state),
            next_query,
            prev_query,
        })
    }
}

pub(super) fn encode(resolver: &QueryStateResolver, state: &QueryState) -> ApplicationResult<String> {
    Ok(resolver.encode(state).to_query_string()?)
}
