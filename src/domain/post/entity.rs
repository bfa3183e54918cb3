use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("post id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

/// A published station or show entry as listed in an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
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

/// Loosely typed post as it appears in seed files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    pub date: DateTime<Utc>,
    pub author_id: i64,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
}

impl TryFrom<PostRecord> for Post {
    type Error = DomainError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        if record.title.trim().is_empty() {
            return Err(DomainError::Validation(format!(
                "post {} has an empty title",
                record.id
            )));
        }
        Ok(Post {
            id: PostId::new(record.id)?,
            title: record.title,
            slug: record.slug,
            excerpt: record.excerpt,
            date: record.date,
            author_id: record.author_id,
            category_ids: record.category_ids,
            tag_ids: record.tag_ids,
            view_count: record.view_count,
            like_count: record.like_count,
        })
    }
}
