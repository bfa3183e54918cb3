use crate::domain::errors::DomainResult;
use crate::domain::post::{connection::PostConnection, query::PostsQuery};
use async_trait::async_trait;

/// The content backend: runs a validated archive fetch and returns one page.
#[async_trait]
pub trait PostConnectionRepository: Send + Sync {
    async fn fetch_posts(&self, query: &PostsQuery) -> DomainResult<PostConnection>;
}
