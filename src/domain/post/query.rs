use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::query_state::{FilterId, QueryState, SortField, SortOrder};

/// Upper bound the content backend applies to a single page.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    Forward { first: u32, after: Option<String> },
    Backward { last: u32, before: Option<String> },
}

impl PageRequest {
    pub fn size(&self) -> u32 {
        match self {
            Self::Forward { first, .. } => *first,
            Self::Backward { last, .. } => *last,
        }
    }
}

/// A fetch the content backend can execute: typed sort, numeric filters and
/// exactly one paging direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsQuery {
    pub search: Option<String>,
    pub tag_in: Vec<i64>,
    pub author_in: Vec<i64>,
    pub category_in: Vec<i64>,
    pub field: SortField,
    pub order: SortOrder,
    pub page: PageRequest,
}

impl PostsQuery {
    /// Validate a resolved state. Sort values outside the fixed enums and
    /// non-positive page sizes are rejected here; ids that were not numbers
    /// are dropped. When `last` is set the fetch pages backward and any
    /// `after` cursor is ignored, otherwise it pages forward and `before` is
    /// ignored.
    pub fn from_state(state: &QueryState) -> DomainResult<Self> {
        let field = state.field.parse::<SortField>()?;
        let order = state.order.parse::<SortOrder>()?;

        let page = match (state.first, state.last) {
            (_, Some(last)) => PageRequest::Backward {
                last: page_size(last)?,
                before: state.before.clone(),
            },
            (Some(first), None) => PageRequest::Forward {
                first: page_size(first)?,
                after: state.after.clone(),
            },
            (None, None) => {
                return Err(DomainError::Validation(
                    "query state carries no page size".into(),
                ));
            }
        };

        Ok(Self {
            search: state.search.clone(),
            tag_in: numeric_ids(&state.tag_in),
            author_in: numeric_ids(&state.author_in),
            category_in: numeric_ids(&state.category_in),
            field,
            order,
            page,
        })
    }
}

fn page_size(requested: i64) -> DomainResult<u32> {
    let size = u32::try_from(requested)
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| DomainError::Validation(format!("page size must be positive: {requested}")))?;
    Ok(size.min(MAX_PAGE_SIZE))
}

fn numeric_ids(ids: &[FilterId]) -> Vec<i64> {
    let numeric: Vec<i64> = ids.iter().filter_map(|id| id.id()).collect();
    if numeric.len() != ids.len() {
        tracing::debug!(
            dropped = ids.len() - numeric.len(),
            "ignoring filter ids that are not numbers"
        );
    }
    numeric
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> QueryState {
        QueryState {
            first: Some(24),
            category_in: vec![FilterId::Id(206)],
            ..QueryState::default()
        }
    }

    #[test]
    fn forward_page_keeps_after_and_drops_before() {
        let mut state = state();
        state.after = Some("a".into());
        state.before = Some("b".into());
        let query = PostsQuery::from_state(&state).unwrap();
        assert_eq!(
            query.page,
            PageRequest::Forward {
                first: 24,
                after: Some("a".into())
            }
        );
        assert_eq!(query.field, SortField::Date);
        assert_eq!(query.order, SortOrder::Desc);
    }

    #[test]
    fn last_selects_backward_paging() {
        let mut state = state();
        state.first = None;
        state.last = Some(10);
        state.before = Some("b".into());
        let query = PostsQuery::from_state(&state).unwrap();
        assert_eq!(
            query.page,
            PageRequest::Backward {
                last: 10,
                before: Some("b".into())
            }
        );
    }

    #[test]
    fn invalid_sort_values_are_rejected() {
        let mut state = state();
        state.field = "POPULARITY".into();
        assert!(matches!(
            PostsQuery::from_state(&state),
            Err(DomainError::Validation(_))
        ));

        let mut state = self::state();
        state.order = "SIDEWAYS".into();
        assert!(PostsQuery::from_state(&state).is_err());
    }

    #[test]
    fn page_size_is_validated_and_capped() {
        let mut state = state();
        state.first = Some(-5);
        assert!(PostsQuery::from_state(&state).is_err());

        state.first = Some(5000);
        let query = PostsQuery::from_state(&state).unwrap();
        assert_eq!(query.page.size(), MAX_PAGE_SIZE);

        state.first = None;
        assert!(PostsQuery::from_state(&state).is_err());
    }

    #[test]
    fn not_a_number_ids_are_dropped() {
        let mut state = state();
        state.tag_in = vec![FilterId::Id(3), FilterId::NotANumber, FilterId::Id(9)];
        let query = PostsQuery::from_state(&state).unwrap();
        assert_eq!(query.tag_in, vec![3, 9]);
        assert_eq!(query.category_in, vec![206]);
    }
}
