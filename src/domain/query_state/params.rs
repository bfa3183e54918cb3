use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::query_state::{
    entity::{
        AFTER, AUTHOR_IN, BEFORE, CATEGORY_IN, FIELD, FIRST, LAST, ORDER, QueryState, SEARCH,
        TAG_IN,
    },
    raw::{RawQuery, RawValue},
    value_objects::FilterId,
};

/// Flat key/value encoding of a [`QueryState`], ready for a navigation call.
/// List values repeat their key; empty values never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn encode(state: &QueryState) -> Self {
        let mut params = Self::default();
        params.push_str(SEARCH, state.search.as_deref());
        params.push_ids(TAG_IN, &state.tag_in);
        params.push_ids(AUTHOR_IN, &state.author_in);
        params.push_ids(CATEGORY_IN, &state.category_in);
        params.push_str(FIELD, Some(&state.field));
        params.push_str(ORDER, Some(&state.order));
        params.push_number(FIRST, state.first);
        params.push_number(LAST, state.last);
        params.push_str(AFTER, state.after.as_deref());
        params.push_str(BEFORE, state.before.as_deref());
        for (key, value) in &state.extra {
            match value {
                RawValue::Single(value) => params.push_str(key, Some(value)),
                RawValue::Many(values) => {
                    for value in values {
                        params.0.push((key.clone(), value.clone()));
                    }
                }
            }
        }
        params
    }

    fn push_str(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            self.0.push((key.to_owned(), value.to_owned()));
        }
    }

    fn push_number(&mut self, key: &str, value: Option<i64>) {
        if let Some(value) = value.filter(|value| *value != 0) {
            self.0.push((key.to_owned(), value.to_string()));
        }
    }

    fn push_ids(&mut self, key: &str, ids: &[FilterId]) {
        self.0
            .extend(ids.iter().map(|id| (key.to_owned(), id.to_string())));
    }

    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(name, _)| name == key)
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn to_query_string(&self) -> DomainResult<String> {
        serde_urlencoded::to_string(&self.0)
            .map_err(|err| DomainError::Validation(format!("query encoding failed: {err}")))
    }

    /// Read the parameters back the way an incoming navigation would.
    pub fn to_raw_query(&self) -> RawQuery {
        RawQuery::from_pairs(self.0.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> QueryState {
        QueryState {
            search: Some("night owl".into()),
            tag_in: vec![FilterId::Id(4), FilterId::NotANumber],
            category_in: vec![FilterId::Id(206)],
            first: Some(24),
            after: Some("cG9zdHwx".into()),
            ..QueryState::default()
        }
    }

    #[test]
    fn null_and_empty_values_are_pruned() {
        let mut state = state();
        state.search = None;
        state.field = String::new();
        let params = QueryParams::encode(&state);
        assert!(!params.contains_key(SEARCH));
        assert!(!params.contains_key(FIELD));
        assert!(!params.contains_key(AUTHOR_IN));
        assert!(!params.contains_key(LAST));
        assert!(!params.contains_key(BEFORE));
        assert_eq!(params.get(ORDER), Some("DESC"));
    }

    #[test]
    fn lists_repeat_their_key() {
        let params = QueryParams::encode(&state());
        assert_eq!(params.get_all(TAG_IN), vec!["4", "NaN"]);
        assert_eq!(params.get_all(CATEGORY_IN), vec!["206"]);
    }

    #[test]
    fn extras_follow_known_keys() {
        let mut state = state();
        state
            .extra
            .insert("utm_source".into(), RawValue::from("newsletter"));
        state.extra.insert("ref".into(), RawValue::from(""));
        let params = QueryParams::encode(&state);
        let last = params.pairs().last().unwrap();
        assert_eq!(last, &("utm_source".to_owned(), "newsletter".to_owned()));
        assert!(!params.contains_key("ref"));
    }

    #[test]
    fn query_string_is_url_encoded() {
        let query = QueryParams::encode(&state()).to_query_string().unwrap();
        assert_eq!(
            query,
            "search=night+owl&tagIn=4&tagIn=NaN&categoryIn=206&field=DATE&order=DESC&first=24&after=cG9zdHwx"
        );
    }
}
