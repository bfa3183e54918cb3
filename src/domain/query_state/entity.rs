use crate::domain::query_state::{raw::RawValue, value_objects::FilterId};
use std::collections::BTreeMap;

pub const SEARCH: &str = "search";
pub const TAG_IN: &str = "tagIn";
pub const AUTHOR_IN: &str = "authorIn";
pub const CATEGORY_IN: &str = "categoryIn";
pub const FIELD: &str = "field";
pub const ORDER: &str = "order";
pub const FIRST: &str = "first";
pub const LAST: &str = "last";
pub const AFTER: &str = "after";
pub const BEFORE: &str = "before";

pub const KNOWN_KEYS: [&str; 10] = [
    SEARCH,
    TAG_IN,
    AUTHOR_IN,
    CATEGORY_IN,
    FIELD,
    ORDER,
    FIRST,
    LAST,
    AFTER,
    BEFORE,
];

pub const DEFAULT_FIELD: &str = "DATE";
pub const DEFAULT_ORDER: &str = "DESC";

/// Filter, sort and cursor position of one archive page view.
///
/// `field` and `order` are kept as given; they are checked against
/// [`SortField`](super::SortField) and [`SortOrder`](super::SortOrder) only
/// when a fetch is built from the state. `extra` carries query keys the
/// archive does not understand so they survive a round trip through the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search: Option<String>,
    pub tag_in: Vec<FilterId>,
    pub author_in: Vec<FilterId>,
    pub category_in: Vec<FilterId>,
    pub field: String,
    pub order: String,
    pub first: Option<i64>,
    pub last: Option<i64>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub extra: BTreeMap<String, RawValue>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: None,
            tag_in: Vec::new(),
            author_in: Vec::new(),
            category_in: Vec::new(),
            field: DEFAULT_FIELD.to_owned(),
            order: DEFAULT_ORDER.to_owned(),
            first: None,
            last: None,
            after: None,
            before: None,
            extra: BTreeMap::new(),
        }
    }
}

impl QueryState {
    /// Size of the page currently shown, whichever direction it was paged in.
    pub fn page_size(&self) -> Option<i64> {
        self.first.or(self.last)
    }

    pub(crate) fn clear_pagination(&mut self) {
        self.first = None;
        self.last = None;
        self.after = None;
        self.before = None;
    }
}

/// A partial filter update. Fields left `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub tag_in: Option<Vec<FilterId>>,
    pub author_in: Option<Vec<FilterId>>,
    pub category_in: Option<Vec<FilterId>>,
    pub field: Option<String>,
    pub order: Option<String>,
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, keyword: impl Into<String>) -> Self {
        self.search = Some(keyword.into());
        self
    }

    pub fn with_tags<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<FilterId>,
    {
        self.tag_in = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_authors<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<FilterId>,
    {
        self.author_in = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_categories<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<FilterId>,
    {
        self.category_in = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, order: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self.order = Some(order.into());
        self
    }
}
