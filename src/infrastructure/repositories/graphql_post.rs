use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    PageInfo, PageRequest, Post, PostConnection, PostConnectionRepository, PostId, PostsQuery,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const USER_AGENT: &str = concat!("airwave-archive/", env!("CARGO_PKG_VERSION"));

const POSTS_QUERY: &str = r#"
query ArchivePosts(
  $first: Int
  $after: String
  $last: Int
  $before: String
  $authorIn: [ID]
  $categoryIn: [ID]
  $tagIn: [ID]
  $search: String
  $field: PostObjectsConnectionOrderbyEnum = DATE
  $order: OrderEnum = DESC
) {
  posts(
    first: $first
    after: $after
    last: $last
    before: $before
    where: {
      authorIn: $authorIn
      categoryIn: $categoryIn
      tagIn: $tagIn
      search: $search
      orderby: { field: $field, order: $order }
    }
  ) {
    nodes {
      databaseId
      title
      slug
      excerpt
      date
      author { node { databaseId } }
      categories { nodes { databaseId } }
      tags { nodes { databaseId } }
      ncPostMetaData { viewsCount likesCount }
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
      startCursor
      endCursor
    }
  }
}
"#;

/// Reads archive pages from a WordPress GraphQL endpoint.
pub struct GraphqlPostRepository {
    http_client: reqwest::Client,
    endpoint: String,
}

impl GraphqlPostRepository {
    pub fn new(endpoint: impl Into<String>) -> DomainResult<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|err| DomainError::Persistence(err.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Variables<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    first: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    after: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    before: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_in: Option<&'a [i64]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category_in: Option<&'a [i64]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag_in: Option<&'a [i64]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    field: &'static str,
    order: &'static str,
}

impl<'a> Variables<'a> {
    fn from_query(query: &'a PostsQuery) -> Self {
        let (first, after, last, before) = match &query.page {
            PageRequest::Forward { first, after } => (Some(*first), after.as_deref(), None, None),
            PageRequest::Backward { last, before } => (None, None, Some(*last), before.as_deref()),
        };
        let ids = |ids: &'a [i64]| (!ids.is_empty()).then_some(ids);
        Self {
            first,
            after,
            last,
            before,
            author_in: ids(&query.author_in),
            category_in: ids(&query.category_in),
            tag_in: ids(&query.tag_in),
            search: query.search.as_deref(),
            field: query.field.as_str(),
            order: query.order.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'static str,
    variables: Variables<'a>,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<PostsData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct PostsData {
    posts: Option<PostsNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostsNode {
    #[serde(default)]
    nodes: Vec<PostNode>,
    page_info: PageInfoNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfoNode {
    has_next_page: bool,
    has_previous_page: bool,
    start_cursor: Option<String>,
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostNode {
    database_id: i64,
    title: Option<String>,
    slug: Option<String>,
    excerpt: Option<String>,
    date: Option<String>,
    author: Option<Edge<IdNode>>,
    categories: Option<Nodes<IdNode>>,
    tags: Option<Nodes<IdNode>>,
    nc_post_meta_data: Option<PostMeta>,
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: Option<T>,
}

#[derive(Debug, Deserialize)]
struct Nodes<T> {
    #[serde(default)]
    nodes: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdNode {
    database_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostMeta {
    views_count: Option<u64>,
    likes_count: Option<u64>,
}

/// WordPress reports site-local time without an offset; treat it as UTC.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

impl TryFrom<PostNode> for Post {
    type Error = DomainError;

    fn try_from(node: PostNode) -> Result<Self, Self::Error> {
        let ids = |nodes: Option<Nodes<IdNode>>| -> Vec<i64> {
            nodes
                .map(|nodes| nodes.nodes.into_iter().map(|node| node.database_id).collect())
                .unwrap_or_default()
        };
        let date = node
            .date
            .as_deref()
            .and_then(parse_date)
            .ok_or_else(|| {
                DomainError::Persistence(format!("post {} has no readable date", node.database_id))
            })?;
        let (view_count, like_count) = node
            .nc_post_meta_data
            .map(|meta| (meta.views_count.unwrap_or(0), meta.likes_count.unwrap_or(0)))
            .unwrap_or((0, 0));

        let id = PostId::new(node.database_id).map_err(|_| {
            DomainError::Persistence(format!(
                "backend returned a post with invalid id {}",
                node.database_id
            ))
        })?;

        Ok(Post {
            id,
            title: node.title.unwrap_or_default(),
            slug: node.slug.unwrap_or_default(),
            excerpt: node.excerpt.unwrap_or_default(),
            date,
            author_id: node
                .author
                .and_then(|edge| edge.node)
                .map_or(0, |author| author.database_id),
            category_ids: ids(node.categories),
            tag_ids: ids(node.tags),
            view_count,
            like_count,
        })
    }
}

fn into_connection(response: GraphqlResponse) -> DomainResult<PostConnection> {
    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|err| err.message).collect();
        return Err(DomainError::Persistence(format!(
            "graphql errors: {}",
            messages.join("; ")
        )));
    }
    let posts = response
        .data
        .and_then(|data| data.posts)
        .ok_or_else(|| DomainError::Persistence("graphql response carried no posts".into()))?;

    let nodes = posts
        .nodes
        .into_iter()
        .map(Post::try_from)
        .collect::<DomainResult<Vec<_>>>()?;
    let page_info = PageInfo {
        has_next_page: posts.page_info.has_next_page,
        has_previous_page: posts.page_info.has_previous_page,
        start_cursor: posts.page_info.start_cursor,
        end_cursor: posts.page_info.end_cursor,
    };
    Ok(PostConnection::new(nodes, page_info))
}

#[async_trait]
impl PostConnectionRepository for GraphqlPostRepository {
    async fn fetch_posts(&self, query: &PostsQuery) -> DomainResult<PostConnection> {
        let request = GraphqlRequest {
            query: POSTS_QUERY,
            variables: Variables::from_query(query),
        };

        tracing::debug!(endpoint = %self.endpoint, "querying content backend");

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|err| DomainError::Persistence(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "content backend returned an error status");
            return Err(DomainError::Persistence(format!(
                "content backend returned {status}: {body}"
            )));
        }

        let payload: GraphqlResponse = response
            .json()
            .await
            .map_err(|err| DomainError::Persistence(err.to_string()))?;
        into_connection(payload)
    }
}
