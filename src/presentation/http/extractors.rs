// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError,
    domain::query_state::RawQuery,
};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// The request's query string as a multi-valued map. Repeated keys such as
/// `tagIn=1&tagIn=2` are kept, unlike `axum::extract::Query`.
#[derive(Debug, Clone, Default)]
pub struct ArchiveQuery(pub RawQuery);

impl<S> FromRequestParts<S> for ArchiveQuery
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = match parts.uri.query() {
            Some(query) => RawQuery::from_query_string(query)
                .map_err(|err| HttpError::from_error(ApplicationError::from(err)))?,
            None => RawQuery::new(),
        };
        Ok(Self(raw))
    }
}
