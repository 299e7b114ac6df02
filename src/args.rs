//! Named key/value inputs passed to a component at render time.
//!
//! Argument values are loosely typed on purpose: the catalog does not
//! inspect a component's prop schema (that inference belongs to the
//! preview host), so values travel as [`serde_json::Value`] and only the
//! keys are required to be known text labels.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A mapping from argument name to value, merged right-biased: in
/// `base.merged_with(overrides)` the overriding set wins on shared keys
/// and base-only keys are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentSet(Map<String, Value>);

impl ArgumentSet {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Overlay `overrides` onto self in place. Right-biased: keys in
    /// `overrides` replace keys already present here.
    pub fn merge(&mut self, overrides: &ArgumentSet) {
        for (key, value) in overrides.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Non-destructive merge: a new set with `overrides` layered on top.
    pub fn merged_with(&self, overrides: &ArgumentSet) -> ArgumentSet {
        let mut merged = self.clone();
        merged.merge(overrides);
        merged
    }
}

impl From<Map<String, Value>> for ArgumentSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for ArgumentSet {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ArgumentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

/// Build an [`ArgumentSet`] from `json!`-style key/value pairs:
///
/// ```rust
/// use storybook_core::args;
///
/// let set = args! { "children": "Click", "disabled": false };
/// assert_eq!(set.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::args::ArgumentSet::new()
    };
    ($($body:tt)+) => {
        match ::serde_json::json!({ $($body)+ }) {
            ::serde_json::Value::Object(map) => $crate::args::ArgumentSet::from(map),
            _ => unreachable!("json! with braced input always yields an object"),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_is_right_biased() {
        let base = args! { "a": 1, "b": "keep" };
        let overrides = args! { "a": 2 };

        let merged = base.merged_with(&overrides);
        assert_eq!(merged.get("a"), Some(&json!(2)));
        assert_eq!(merged.get("b"), Some(&json!("keep")));
        // The base is untouched.
        assert_eq!(base.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_merge_with_empty_sets() {
        let base = args! { "a": 1 };
        assert_eq!(base.merged_with(&ArgumentSet::new()), base);
        assert_eq!(ArgumentSet::new().merged_with(&base), base);
    }

    #[test]
    fn test_args_macro_supports_nested_values() {
        let set = args! {
            "children": "点击",
            "style": { "width": 120 },
            "sizes": [1, 2, 3],
        };
        assert_eq!(set.get("children"), Some(&json!("点击")));
        assert_eq!(set.get("style"), Some(&json!({ "width": 120 })));
        assert_eq!(set.get("sizes"), Some(&json!([1, 2, 3])));
    }

    #[test]
    fn test_serde_round_trip_is_transparent() {
        let set = args! { "children": "Click" };
        let encoded = serde_json::to_string(&set).unwrap();
        assert_eq!(encoded, r#"{"children":"Click"}"#);
        let decoded: ArgumentSet = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, set);
    }
}
