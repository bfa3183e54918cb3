use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::query_state::raw::parse_int_prefix;
use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};

/// A tag, author or category id taken from the URL. Values that do not start
/// with a number are kept as `NotANumber` rather than dropped, so the filter
/// list keeps its length when it is written back to the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterId {
    Id(i64),
    NotANumber,
}

impl FilterId {
    pub fn coerce(raw: &str) -> Self {
        parse_int_prefix(raw).map_or(Self::NotANumber, Self::Id)
    }

    pub fn id(self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(id),
            Self::NotANumber => None,
        }
    }
}

impl From<i64> for FilterId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::NotANumber => f.write_str("NaN"),
        }
    }
}

/// JSON has no NaN; it goes out as `null`.
impl Serialize for FilterId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(id) => serializer.serialize_i64(*id),
            Self::NotANumber => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortField {
    Date,
    Title,
    ViewsCount,
    LikesCount,
}

impl SortField {
    pub const ALL: [Self; 4] = [Self::Date, Self::Title, Self::ViewsCount, Self::LikesCount];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Title => "TITLE",
            Self::ViewsCount => "VIEWS_COUNT",
            Self::LikesCount => "LIKES_COUNT",
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| DomainError::Validation(format!("unsupported sort field: {value}")))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        if value.eq_ignore_ascii_case("ASC") {
            Ok(Self::Asc)
        } else if value.eq_ignore_ascii_case("DESC") {
            Ok(Self::Desc)
        } else {
            Err(DomainError::Validation(format!(
                "unsupported sort order: {value}"
            )))
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the archive's sort drop-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub label: &'static str,
    pub field: SortField,
    pub order: SortOrder,
}

pub const SORT_OPTIONS: [SortOption; 6] = [
    SortOption::new("Newest to oldest", SortField::Date, SortOrder::Desc),
    SortOption::new("Oldest to newest", SortField::Date, SortOrder::Asc),
    SortOption::new("A to Z", SortField::Title, SortOrder::Asc),
    SortOption::new("Z to A", SortField::Title, SortOrder::Desc),
    SortOption::new("Most views", SortField::ViewsCount, SortOrder::Desc),
    SortOption::new("Most likes", SortField::LikesCount, SortOrder::Desc),
];

impl SortOption {
    pub const fn new(label: &'static str, field: SortField, order: SortOrder) -> Self {
        Self {
            label,
            field,
            order,
        }
    }

    /// `FIELD/ORDER`, the form the drop-down submits.
    pub fn value(&self) -> String {
        format!("{}/{}", self.field, self.order)
    }

    /// Split a submitted `FIELD/ORDER` value. An empty value means nothing was
    /// picked. A value without a slash is all field and no order.
    pub fn parse(value: &str) -> Option<(String, String)> {
        if value.is_empty() {
            return None;
        }
        let (field, order) = value.split_once('/').unwrap_or((value, ""));
        Some((field.to_owned(), order.to_owned()))
    }

    /// The option matching a state's raw `field`/`order`, compared without
    /// regard to case.
    pub fn selected(field: &str, order: &str) -> Option<&'static SortOption> {
        SORT_OPTIONS.iter().find(|option| {
            option.field.as_str().eq_ignore_ascii_case(field)
                && option.order.as_str().eq_ignore_ascii_case(order)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_id_coercion_keeps_not_a_number() {
        assert_eq!(FilterId::coerce("15"), FilterId::Id(15));
        assert_eq!(FilterId::coerce("15px"), FilterId::Id(15));
        assert_eq!(FilterId::coerce("rock"), FilterId::NotANumber);
        assert_eq!(FilterId::NotANumber.to_string(), "NaN");
    }

    #[test]
    fn filter_id_serializes_nan_as_null() {
        let json = serde_json::to_string(&[FilterId::Id(3), FilterId::NotANumber]).unwrap();
        assert_eq!(json, "[3,null]");
    }

    #[test]
    fn sort_field_parses_without_case() {
        assert_eq!("views_count".parse::<SortField>().unwrap(), SortField::ViewsCount);
        assert_eq!("DATE".parse::<SortField>().unwrap(), SortField::Date);
        assert!("POPULARITY".parse::<SortField>().is_err());
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert!("UP".parse::<SortOrder>().is_err());
    }

    #[test]
    fn sort_option_value_splits_back() {
        let option = SORT_OPTIONS[2];
        assert_eq!(option.value(), "TITLE/ASC");
        assert_eq!(
            SortOption::parse(&option.value()),
            Some(("TITLE".to_owned(), "ASC".to_owned()))
        );
        assert_eq!(SortOption::parse(""), None);
        assert_eq!(
            SortOption::parse("TITLE"),
            Some(("TITLE".to_owned(), String::new()))
        );
    }

    #[test]
    fn selected_option_matches_case_insensitively() {
        let selected = SortOption::selected("date", "asc").unwrap();
        assert_eq!(selected.label, "Oldest to newest");
        assert!(SortOption::selected("DATE", "SIDEWAYS").is_none());
    }
}
