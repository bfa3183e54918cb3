use crate::domain::{
    archive::ArchivePage,
    post::{PageInfo, Post},
    query_state::{FilterId, QueryState, SortOption},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub date: DateTime<Utc>,
    pub author_id: i64,
    pub category_ids: Vec<i64>,
    pub tag_ids: Vec<i64>,
    pub view_count: u64,
    pub like_count: u64,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            date: post.date,
            author_id: post.author_id,
            category_ids: post.category_ids,
            tag_ids: post.tag_ids,
            view_count: post.view_count,
            like_count: post.like_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageInfoDto {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<String>,
}

impl From<PageInfo> for PageInfoDto {
    fn from(info: PageInfo) -> Self {
        Self {
            has_next_page: info.has_next_page,
            has_previous_page: info.has_previous_page,
            start_cursor: info.start_cursor,
            end_cursor: info.end_cursor,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArchiveMetaDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub keyword_label: String,
    pub show_play_button: bool,
}

impl From<ArchivePage> for ArchiveMetaDto {
    fn from(page: ArchivePage) -> Self {
        Self {
            slug: page.slug().into(),
            title: page.title().into(),
            description: page.description().into(),
            keyword_label: page.keyword_label().into(),
            show_play_button: page.show_play_button(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SortOptionDto {
    pub label: String,
    /// `FIELD/ORDER`
    pub value: String,
}

impl From<&SortOption> for SortOptionDto {
    fn from(option: &SortOption) -> Self {
        Self {
            label: option.label.into(),
            value: option.value(),
        }
    }
}

/// The resolved state. Ids that were not numbers appear as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QueryStateDto {
    pub search: Option<String>,
    pub tag_in: Vec<Option<i64>>,
    pub author_in: Vec<Option<i64>>,
    pub category_in: Vec<Option<i64>>,
    pub field: String,
    pub order: String,
    pub first: Option<i64>,
    pub last: Option<i64>,
    pub after: Option<String>,
    pub before: Option<String>,
}

impl From<&QueryState> for QueryStateDto {
    fn from(state: &QueryState) -> Self {
        let ids = |ids: &[FilterId]| -> Vec<Option<i64>> { ids.iter().map(|id| id.id()).collect() };
        Self {
            search: state.search.clone(),
            tag_in: ids(&state.tag_in),
            author_in: ids(&state.author_in),
            category_in: ids(&state.category_in),
            field: state.field.clone(),
            order: state.order.clone(),
            first: state.first,
            last: state.last,
            after: state.after.clone(),
            before: state.before.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArchivePageDto {
    pub archive: ArchiveMetaDto,
    pub items: Vec<PostDto>,
    pub page_info: PageInfoDto,
    pub state: QueryStateDto,
    /// Canonical query string of the page being shown.
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_sort: Option<SortOptionDto>,
    /// Query string for the "next" link, when there is a next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_query: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationDto {
    pub query: String,
}
