use crate::domain::post::PageInfo;
use crate::domain::query_state::{
    entity::{
        AFTER, AUTHOR_IN, BEFORE, DEFAULT_FIELD, DEFAULT_ORDER, FIELD, FIRST, FilterPatch,
        KNOWN_KEYS, LAST, ORDER, QueryState, SEARCH, TAG_IN,
    },
    params::QueryParams,
    raw::{RawQuery, RawValue, parse_int_prefix},
    value_objects::FilterId,
};

/// Derives archive query state from the URL and computes the state to
/// navigate to after a filter change or a next/previous click.
///
/// Each archive page gets its own resolver: the page size and the category
/// filter are fixed per page and never read from the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStateResolver {
    page_size: u32,
    category_in: Vec<i64>,
}

impl QueryStateResolver {
    pub fn new(page_size: u32, category_in: impl IntoIterator<Item = i64>) -> Self {
        Self {
            page_size,
            category_in: category_in.into_iter().collect(),
        }
    }

    /// Build the state for an incoming navigation.
    ///
    /// Parsing never fails. Without an `after` or `before` cursor the view is
    /// a first page: `first` is forced to the page size and `last` cleared,
    /// whatever the URL asked for. With a cursor, `last` wins over `first`
    /// when both are present and `first` falls back to the page size when
    /// neither is.
    pub fn parse(&self, raw: &RawQuery) -> QueryState {
        let search = non_empty(raw.single(SEARCH));
        let after = non_empty(raw.single(AFTER));
        let before = non_empty(raw.single(BEFORE));
        let page_size = i64::from(self.page_size);

        let (first, last) = if after.is_none() && before.is_none() {
            (Some(page_size), None)
        } else {
            let first = raw.single(FIRST).and_then(page_directive);
            let last = raw.single(LAST).and_then(page_directive);
            match last {
                Some(last) => (None, Some(last)),
                None => (first.or(Some(page_size)), None),
            }
        };

        let extra = raw
            .iter()
            .filter(|(key, _)| !KNOWN_KEYS.contains(key))
            .map(|(key, value)| (key.to_owned(), value.clone()))
            .collect();

        QueryState {
            search,
            tag_in: filter_ids(raw.get(TAG_IN)),
            author_in: filter_ids(raw.get(AUTHOR_IN)),
            category_in: self.category_in.iter().copied().map(FilterId::Id).collect(),
            field: raw.single(FIELD).unwrap_or(DEFAULT_FIELD).to_owned(),
            order: raw.single(ORDER).unwrap_or(DEFAULT_ORDER).to_owned(),
            first,
            last,
            after,
            before,
            extra,
        }
    }

    /// Apply a filter or sort change. All paging is cleared, so the next
    /// parse of the encoded state lands on a full first page.
    pub fn with_filter_change(&self, state: &QueryState, patch: FilterPatch) -> QueryState {
        let mut next = state.clone();
        if let Some(search) = patch.search {
            next.search = Some(search).filter(|keyword| !keyword.is_empty());
        }
        if let Some(tag_in) = patch.tag_in {
            next.tag_in = tag_in;
        }
        if let Some(author_in) = patch.author_in {
            next.author_in = author_in;
        }
        if let Some(category_in) = patch.category_in {
            next.category_in = category_in;
        }
        if let Some(field) = patch.field {
            next.field = field;
        }
        if let Some(order) = patch.order {
            next.order = order;
        }
        next.clear_pagination();
        next
    }

    /// Move forward past `end_cursor`. The caller is expected to pass the
    /// cursor reported by the page currently shown.
    pub fn next_page(&self, state: &QueryState, end_cursor: impl Into<String>) -> QueryState {
        let mut next = state.clone();
        next.first = Some(self.carried_page_size(state));
        next.after = Some(end_cursor.into());
        next.last = None;
        next.before = None;
        next
    }

    /// Move backward before `start_cursor`.
    pub fn prev_page(&self, state: &QueryState, start_cursor: impl Into<String>) -> QueryState {
        let mut next = state.clone();
        next.last = Some(self.carried_page_size(state));
        next.before = Some(start_cursor.into());
        next.first = None;
        next.after = None;
        next
    }

    /// [`next_page`](Self::next_page) driven by the backend's page info;
    /// `None` when there is no further page.
    pub fn next_page_from(&self, state: &QueryState, page_info: &PageInfo) -> Option<QueryState> {
        if !page_info.has_next_page {
            return None;
        }
        let cursor = page_info.end_cursor.as_deref()?;
        Some(self.next_page(state, cursor))
    }

    pub fn prev_page_from(&self, state: &QueryState, page_info: &PageInfo) -> Option<QueryState> {
        if !page_info.has_previous_page {
            return None;
        }
        let cursor = page_info.start_cursor.as_deref()?;
        Some(self.prev_page(state, cursor))
    }

    pub fn encode(&self, state: &QueryState) -> QueryParams {
        QueryParams::encode(state)
    }

    fn carried_page_size(&self, state: &QueryState) -> i64 {
        state
            .page_size()
            .unwrap_or_else(|| i64::from(self.page_size))
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|value| !value.is_empty()).map(str::to_owned)
}

/// `first`/`last` as given in the URL; zero and non-numbers mean unset.
fn page_directive(raw: &str) -> Option<i64> {
    parse_int_prefix(raw).filter(|size| *size != 0)
}

fn filter_ids(value: Option<&RawValue>) -> Vec<FilterId> {
    match value {
        None => Vec::new(),
        Some(RawValue::Single(value)) if value.is_empty() => Vec::new(),
        Some(value) => value.values().into_iter().map(FilterId::coerce).collect(),
    }
}
