// src/presentation/http/controllers/archives.rs
use crate::application::{
    dto::{ArchivePageDto, NavigationDto, SortOptionDto},
    error::ApplicationError,
    queries::archive::{ApplyArchiveFilterQuery, BrowseArchiveQuery},
};
use crate::domain::{
    archive::ArchivePage,
    query_state::{FilterPatch, SortOption},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ArchiveQuery;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A filter or sort change submitted from an archive page. Omitted fields
/// keep their current value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatchRequest {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub tag_in: Option<Vec<i64>>,
    #[serde(default)]
    pub author_in: Option<Vec<i64>>,
    #[serde(default)]
    pub category_in: Option<Vec<i64>>,
    /// `FIELD/ORDER`, as listed by the sort options endpoint.
    #[serde(default)]
    pub sort: Option<String>,
}

impl From<FilterPatchRequest> for FilterPatch {
    fn from(request: FilterPatchRequest) -> Self {
        let mut patch = FilterPatch::new();
        if let Some(keyword) = request.search {
            patch = patch.with_search(keyword);
        }
        if let Some(ids) = request.tag_in {
            patch = patch.with_tags(ids);
        }
        if let Some(ids) = request.author_in {
            patch = patch.with_authors(ids);
        }
        if let Some(ids) = request.category_in {
            patch = patch.with_categories(ids);
        }
        if let Some((field, order)) = request.sort.as_deref().and_then(SortOption::parse) {
            patch = patch.with_sort(field, order);
        }
        patch
    }
}

fn archive_page(slug: &str) -> HttpResult<ArchivePage> {
    slug.parse::<ArchivePage>()
        .map_err(ApplicationError::from)
        .into_http()
}

#[utoipa::path(
    get,
    path = "/api/v1/archives/{page}",
    params(
        ("page" = String, Path, description = "Archive slug: radio-stations or upcoming-shows"),
        ("search" = Option<String>, Query, description = "Keyword filter"),
        ("tagIn" = Option<Vec<String>>, Query, description = "Tag ids, repeatable"),
        ("authorIn" = Option<Vec<String>>, Query, description = "Author ids, repeatable"),
        ("field" = Option<String>, Query, description = "Sort field"),
        ("order" = Option<String>, Query, description = "Sort order"),
        ("first" = Option<i64>, Query, description = "Page size when paging forward"),
        ("last" = Option<i64>, Query, description = "Page size when paging backward"),
        ("after" = Option<String>, Query, description = "Cursor to page forward from"),
        ("before" = Option<String>, Query, description = "Cursor to page backward from")
    ),
    responses(
        (status = 200, description = "Archive page resolved from the query string.", body = ArchivePageDto),
        (status = 400, description = "Unsupported sort or cursor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown archive.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "Content backend failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Archives"
)]
pub async fn browse_archive(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    ArchiveQuery(query): ArchiveQuery,
) -> HttpResult<Json<ArchivePageDto>> {
    let page = archive_page(&slug)?;
    state
        .services
        .archive_queries
        .browse_archive(BrowseArchiveQuery { page, query })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/archives/{page}/filters",
    params(
        ("page" = String, Path, description = "Archive slug: radio-stations or upcoming-shows")
    ),
    request_body = FilterPatchRequest,
    responses(
        (status = 200, description = "Query string of the first page under the new filters.", body = NavigationDto),
        (status = 404, description = "Unknown archive.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Archives"
)]
pub async fn apply_filters(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    ArchiveQuery(query): ArchiveQuery,
    Json(payload): Json<FilterPatchRequest>,
) -> HttpResult<Json<NavigationDto>> {
    let page = archive_page(&slug)?;
    state
        .services
        .archive_queries
        .apply_filter(ApplyArchiveFilterQuery {
            page,
            query,
            patch: payload.into(),
        })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/archives/sort-options",
    responses(
        (status = 200, description = "Sort choices offered on every archive.", body = [SortOptionDto])
    ),
    tag = "Archives"
)]
pub async fn list_sort_options(
    Extension(state): Extension<HttpState>,
) -> Json<Vec<SortOptionDto>> {
    Json(state.services.archive_queries.sort_options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query_state::FilterId;

    #[test]
    fn request_converts_to_patch() {
        let request: FilterPatchRequest = serde_json::from_value(serde_json::json!({
            "search": "jazz",
            "tagIn": [14],
            "sort": "TITLE/ASC"
        }))
        .unwrap();
        let patch = FilterPatch::from(request);
        assert_eq!(patch.search.as_deref(), Some("jazz"));
        assert_eq!(patch.tag_in, Some(vec![FilterId::Id(14)]));
        assert_eq!(patch.author_in, None);
        assert_eq!(patch.field.as_deref(), Some("TITLE"));
        assert_eq!(patch.order.as_deref(), Some("ASC"));
    }

    #[test]
    fn empty_sort_leaves_ordering_alone() {
        let patch = FilterPatch::from(FilterPatchRequest {
            sort: Some(String::new()),
            ..FilterPatchRequest::default()
        });
        assert_eq!(patch, FilterPatch::new());
    }
}
