use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::entity::PostId;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

const PREFIX: &str = "post";

/// Opaque position marker handed out in [`PageInfo`](super::PageInfo).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostCursor {
    pub id: PostId,
}

impl PostCursor {
    pub fn new(id: PostId) -> Self {
        Self { id }
    }

    pub fn encode(&self) -> String {
        let raw = format!("{PREFIX}|{}", self.id.0);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (prefix, id) = raw.split_once('|').ok_or_else(invalid)?;
        if prefix != PREFIX {
            return Err(invalid());
        }
        let id = id.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::new(PostId::new(id)?))
    }
}
