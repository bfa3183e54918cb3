use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    PageInfo, PageRequest, Post, PostConnection, PostConnectionRepository, PostCursor, PostId,
    PostRecord, PostsQuery,
};
use crate::domain::query_state::{SortField, SortOrder};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::{cmp::Ordering, path::Path, sync::Arc};

/// Content store kept in memory, paging with the same first/after and
/// last/before semantics as the GraphQL backend.
#[derive(Clone)]
pub struct InMemoryPostRepository {
    posts: Arc<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(posts),
        }
    }

    pub fn from_records(records: Vec<PostRecord>) -> DomainResult<Self> {
        let posts = records
            .into_iter()
            .map(Post::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(posts))
    }

    /// Load posts from a JSON array of [`PostRecord`]s.
    pub fn load_seed_file(path: &Path) -> DomainResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            DomainError::Persistence(format!("cannot read {}: {err}", path.display()))
        })?;
        let records: Vec<PostRecord> = serde_json::from_str(&raw).map_err(|err| {
            DomainError::Validation(format!("invalid seed file {}: {err}", path.display()))
        })?;
        let repo = Self::from_records(records)?;
        tracing::info!(path = %path.display(), posts = repo.len(), "loaded post seed file");
        Ok(repo)
    }

    /// A small built-in catalogue of stations and shows.
    pub fn with_sample_catalogue(radio_stations_category: i64, upcoming_shows_category: i64) -> Self {
        let day = |d: u32, h: u32| {
            Utc.with_ymd_and_hms(2024, 5, d, h, 0, 0)
                .single()
                .unwrap_or_default()
        };
        let post = |id: i64,
                    title: &str,
                    date: DateTime<Utc>,
                    author_id: i64,
                    category: i64,
                    tags: &[i64],
                    views: u64,
                    likes: u64| Post {
            id: PostId(id),
            title: title.to_owned(),
            slug: title.to_lowercase().replace(' ', "-"),
            excerpt: format!("{title} on Airwave"),
            date,
            author_id,
            category_ids: vec![category],
            tag_ids: tags.to_vec(),
            view_count: views,
            like_count: likes,
        };
        let stations = radio_stations_category;
        let shows = upcoming_shows_category;
        Self::new(vec![
            post(1, "Indie Drift FM", day(1, 8), 3, stations, &[11, 12], 1520, 88),
            post(2, "Lo-Fi Harbour", day(2, 9), 3, stations, &[12], 980, 140),
            post(3, "Basement Punk Radio", day(3, 22), 5, stations, &[13], 410, 35),
            post(4, "Night Owl Jazz", day(4, 23), 7, stations, &[14], 2210, 301),
            post(5, "Morning Folk Hour", day(5, 6), 5, stations, &[15, 11], 660, 47),
            post(6, "Synthwave Skyline", day(6, 20), 7, stations, &[16], 1730, 122),
            post(7, "Album Premiere: Paper Moons", day(20, 18), 3, shows, &[11], 120, 14),
            post(8, "Live Session: The Quiet Hours", day(22, 21), 7, shows, &[14], 75, 9),
            post(9, "DJ Takeover: Synth Sunday", day(26, 16), 5, shows, &[16], 240, 31),
        ])
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn matching(&self, query: &PostsQuery) -> Vec<&Post> {
        let keyword = query.search.as_deref().map(str::to_lowercase);
        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|post| {
                keyword.as_deref().is_none_or(|keyword| {
                    post.title.to_lowercase().contains(keyword)
                        || post.excerpt.to_lowercase().contains(keyword)
                })
            })
            .filter(|post| any_of(&query.tag_in, &post.tag_ids))
            .filter(|post| any_of(&query.author_in, std::slice::from_ref(&post.author_id)))
            .filter(|post| any_of(&query.category_in, &post.category_ids))
            .collect();

        posts.sort_by(|a, b| {
            let ordering = compare(query.field, a, b).then_with(|| a.id.cmp(&b.id));
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        posts
    }
}

fn any_of(wanted: &[i64], present: &[i64]) -> bool {
    wanted.is_empty() || present.iter().any(|id| wanted.contains(id))
}

fn compare(field: SortField, a: &Post, b: &Post) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::ViewsCount => a.view_count.cmp(&b.view_count),
        SortField::LikesCount => a.like_count.cmp(&b.like_count),
    }
}

fn position(posts: &[&Post], token: &str) -> DomainResult<usize> {
    let cursor = PostCursor::decode(token)?;
    posts
        .iter()
        .position(|post| post.id == cursor.id)
        .ok_or_else(|| DomainError::Validation("cursor does not belong to this result set".into()))
}

#[async_trait]
impl PostConnectionRepository for InMemoryPostRepository {
    async fn fetch_posts(&self, query: &PostsQuery) -> DomainResult<PostConnection> {
        let posts = self.matching(query);
        let total = posts.len();

        let (start, end) = match &query.page {
            PageRequest::Forward { first, after } => {
                let start = match after {
                    Some(token) => position(&posts, token)? + 1,
                    None => 0,
                };
                (start, start.saturating_add(*first as usize).min(total))
            }
            PageRequest::Backward { last, before } => {
                let end = match before {
                    Some(token) => position(&posts, token)?,
                    None => total,
                };
                (end.saturating_sub(*last as usize), end)
            }
        };

        let nodes: Vec<Post> = posts[start..end].iter().copied().cloned().collect();
        let cursor_of = |post: &Post| PostCursor::new(post.id).encode();
        let page_info = PageInfo {
            has_next_page: end < total,
            has_previous_page: start > 0,
            start_cursor: nodes.first().map(cursor_of),
            end_cursor: nodes.last().map(cursor_of),
        };

        tracing::debug!(total, start, end, "served in-memory archive page");
        Ok(PostConnection::new(nodes, page_info))
    }
}
