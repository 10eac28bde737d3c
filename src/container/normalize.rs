//! Construction-time deep normalization.
//!
//! A value shaped like an array of `[key, value]` pairs is promoted to a
//! nested [`LightMap`], and the rule is applied again inside every promoted
//! map. This lets a whole tree of ordered maps be written as one literal:
//!
//! ```rust
//! use lightmap::{LightMap, Value};
//!
//! let tree = LightMap::from_entries([(
//!     "key",
//!     Value::from(vec![
//!         ("keyA", Value::from("valueA")),
//!         ("keyB", Value::from(vec![("key2", "value2")])),
//!     ]),
//! )]);
//!
//! let key_b = tree
//!     .get("key")
//!     .and_then(Value::as_map)
//!     .and_then(|inner| inner.get("keyB"))
//!     .and_then(Value::as_map)
//!     .unwrap();
//! assert_eq!(key_b.get("key2"), Some(&Value::from("value2")));
//! ```
//!
//! Normalization builds a new backing store instead of rewriting the map it
//! walks, and it only runs once, when the map is constructed. Later calls to
//! [`LightMap::set`] store values as given.

use super::lightmap::LightMap;
use crate::{LightMapError, Value};
use tracing::{debug, trace};

// =============================================================================
// Options
// =============================================================================

/// Construction options for [`LightMap::with_options`].
///
/// # Examples
///
/// ```rust
/// use lightmap::{LightMap, LightMapOptions, Value};
///
/// let options = LightMapOptions::default().deep_transform_to_map(false);
/// let map = LightMap::with_options([("x", Value::from(vec![("y", 1)]))], options);
/// assert!(!map.get("x").is_some_and(Value::is_map));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightMapOptions {
    /// Promote arrays of `[key, value]` pairs to nested maps. Defaults to `true`.
    pub deep_transform_to_map: bool,
}

impl LightMapOptions {
    /// Returns the options with deep normalization switched on or off.
    #[must_use]
    pub const fn deep_transform_to_map(mut self, enabled: bool) -> Self {
        self.deep_transform_to_map = enabled;
        self
    }
}

impl Default for LightMapOptions {
    fn default() -> Self {
        Self {
            deep_transform_to_map: true,
        }
    }
}

// =============================================================================
// Normalization Rules
// =============================================================================

/// Splits a two-element array into its key and value.
///
/// Anything else is handed back unchanged.
fn split_pair(value: Value) -> Result<(Value, Value), Value> {
    match value {
        Value::Array(items) if items.len() == 2 => {
            let [key, value]: [Value; 2] = items.try_into().map_err(Value::Array)?;
            Ok((key, value))
        }
        other => Err(other),
    }
}

/// Promotes `value` to a nested map if every element is a `[key, value]` pair.
///
/// An empty array qualifies and becomes an empty map.
pub(crate) fn promote(value: Value) -> Value {
    match value {
        Value::Array(items) if items.iter().all(Value::is_pair) => {
            trace!(entries = items.len(), "promoting pair array to nested LightMap");
            let pairs = items.into_iter().filter_map(|item| split_pair(item).ok());
            Value::Map(LightMap::from_entries(pairs))
        }
        other => other,
    }
}

// =============================================================================
// Construction
// =============================================================================

impl<K: PartialEq> LightMap<K, Value> {
    /// Returns this map with every value passed through deep normalization.
    ///
    /// Values that are arrays of `[key, value]` pairs become nested maps,
    /// recursively. Any other value, including an array holding a single
    /// non-pair element, is kept as it is.
    #[must_use]
    pub fn deep_transform_to_map(self) -> Self {
        self.into_iter()
            .map(|(key, value)| (key, promote(value)))
            .collect()
    }
}

impl LightMap {
    /// Creates a map from `[key, value]` entries with deep normalization.
    ///
    /// Equivalent to [`with_options`](Self::with_options) with the default
    /// [`LightMapOptions`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::{LightMap, Value};
    ///
    /// let map = LightMap::from_entries([("x", Value::from(vec![("y", 1)]))]);
    /// assert_eq!(map.get("x").and_then(Value::as_map).map(LightMap::len), Some(1));
    ///
    /// let untouched = LightMap::from_entries([("x", Value::from(vec![Value::Null]))]);
    /// assert!(!untouched.get("x").is_some_and(Value::is_map));
    /// ```
    pub fn from_entries<I, Key, Item>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, Item)>,
        Key: Into<Value>,
        Item: Into<Value>,
    {
        Self::with_options(entries, LightMapOptions::default())
    }

    /// Creates a map from `[key, value]` entries with explicit options.
    ///
    /// Later duplicates of a key overwrite the value and keep the first
    /// position.
    pub fn with_options<I, Key, Item>(entries: I, options: LightMapOptions) -> Self
    where
        I: IntoIterator<Item = (Key, Item)>,
        Key: Into<Value>,
        Item: Into<Value>,
    {
        let map: Self = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        if options.deep_transform_to_map {
            map.deep_transform_to_map()
        } else {
            map
        }
    }

    /// Rebuilds a map from its array-of-pairs form.
    ///
    /// A [`Value::Map`] is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`LightMapError::NotAnArray`] if `value` is neither an array
    /// nor a map, and [`LightMapError::NotAPair`] if an element is not an
    /// array of exactly two items. Shorter and longer elements are both
    /// rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::{LightMap, LightMapError, Value};
    ///
    /// let map = LightMap::from_value(Value::from(vec![("a", 1)])).unwrap();
    /// assert_eq!(map.get("a"), Some(&Value::from(1)));
    ///
    /// let error = LightMap::from_value(Value::from(vec![Value::from(1)])).unwrap_err();
    /// assert!(matches!(error, LightMapError::NotAPair { index: 0, length: None }));
    /// ```
    pub fn from_value(value: Value) -> Result<Self, LightMapError> {
        match value {
            Value::Array(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    match split_pair(item) {
                        Ok(entry) => entries.push(entry),
                        Err(rejected) => {
                            let length = rejected.as_array().map(Vec::len);
                            debug!(index, ?length, "rejecting element that is not a pair");
                            return Err(LightMapError::NotAPair { index, length });
                        }
                    }
                }
                Ok(Self::from_entries(entries))
            }
            Value::Map(map) => Ok(map),
            other => {
                debug!(found = other.kind_name(), "rejecting non-array input");
                Err(LightMapError::NotAnArray {
                    found: other.kind_name(),
                })
            }
        }
    }

    /// Parses JSON text in the array-of-pairs format and rebuilds the map.
    ///
    /// # Errors
    ///
    /// Returns [`LightMapError::Json`] for malformed text, otherwise the
    /// errors of [`from_value`](Self::from_value).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::LightMap;
    ///
    /// let map = LightMap::from_json_str(r#"[["key",[["a","b"]]]]"#).unwrap();
    /// assert_eq!(map.to_string(), r#"[["key",[["a","b"]]]]"#);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, LightMapError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_options_enable_deep_transform() {
        assert!(LightMapOptions::default().deep_transform_to_map);
        assert!(
            !LightMapOptions::default()
                .deep_transform_to_map(false)
                .deep_transform_to_map
        );
    }

    #[rstest]
    fn test_split_pair() {
        assert_eq!(
            split_pair(Value::from(("k", "v"))),
            Ok((Value::from("k"), Value::from("v")))
        );
        assert_eq!(split_pair(Value::from(1)), Err(Value::from(1)));
        assert_eq!(
            split_pair(Value::from(vec![1, 2, 3])),
            Err(Value::from(vec![1, 2, 3]))
        );
    }

    #[rstest]
    #[case(Value::from(vec![("y", 1)]), true)]
    #[case(Value::Array(vec![]), true)]
    #[case(Value::from(vec![Value::Null]), false)]
    #[case(Value::from(("raw", "pair")), false)]
    #[case(Value::from(vec![vec![1, 2], vec![3]]), false)]
    #[case(Value::from(vec![vec![1, 2, 3]]), false)]
    #[case(Value::from("text"), false)]
    fn test_promote(#[case] value: Value, #[case] promoted: bool) {
        assert_eq!(promote(value).is_map(), promoted);
    }

    #[rstest]
    fn test_promote_recurses_into_nested_pairs() {
        let value = Value::from(vec![("a", Value::from(vec![("b", Value::from(vec![("c", 1)]))]))]);
        let outer = promote(value);
        let inner = outer
            .as_map()
            .and_then(|map| map.get("a"))
            .and_then(Value::as_map)
            .and_then(|map| map.get("b"))
            .unwrap();
        assert!(inner.is_map());
    }

    #[rstest]
    fn test_with_options_disabled_leaves_values() {
        let options = LightMapOptions::default().deep_transform_to_map(false);
        let map = LightMap::with_options([("x", Value::from(vec![("y", 1)]))], options);
        assert_eq!(map.get("x"), Some(&Value::from(vec![("y", 1)])));
    }

    #[rstest]
    fn test_from_entries_keeps_first_position_of_duplicates() {
        let map = LightMap::from_entries([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(map.index_of("a"), Some(0));
        assert_eq!(map.get("a"), Some(&Value::from(3)));
    }

    #[rstest]
    fn test_deep_transform_on_string_keys() {
        let map: LightMap<String, Value> =
            [("x".to_string(), Value::from(vec![("y", 1)]))].into_iter().collect();
        assert!(!map.get("x").is_some_and(Value::is_map));
        let transformed = map.deep_transform_to_map();
        assert!(transformed.get("x").is_some_and(Value::is_map));
    }

    #[rstest]
    fn test_set_does_not_normalize() {
        let mut map = LightMap::from_entries(Vec::<(Value, Value)>::new());
        map.set(Value::from("x"), Value::from(vec![("y", 1)]));
        assert!(!map.get("x").is_some_and(Value::is_map));
    }

    #[rstest]
    fn test_from_value_rejects_non_array() {
        let error = LightMap::from_value(Value::from(true)).unwrap_err();
        assert!(matches!(error, LightMapError::NotAnArray { found: "boolean" }));
    }

    #[rstest]
    fn test_from_value_rejects_wrong_length() {
        let value = Value::from(vec![Value::from(("a", 1)), Value::from(vec![1, 2, 3])]);
        let error = LightMap::from_value(value).unwrap_err();
        assert!(matches!(
            error,
            LightMapError::NotAPair {
                index: 1,
                length: Some(3)
            }
        ));
    }

    #[rstest]
    fn test_from_value_rejects_element_without_value() {
        let value = Value::from(vec![vec![Value::from("k")]]);
        let error = LightMap::from_value(value).unwrap_err();
        assert!(matches!(
            error,
            LightMapError::NotAPair {
                index: 0,
                length: Some(1)
            }
        ));
    }

    #[rstest]
    fn test_from_json_str_rejects_extra_items() {
        let error = LightMap::from_json_str(r#"[["k","v","extra"]]"#).unwrap_err();
        assert_eq!(
            error.to_string(),
            "element 0 has 3 items, expected a [key, value] pair"
        );
    }

    #[rstest]
    fn test_from_value_passes_maps_through() {
        let map = LightMap::from_entries([("a", 1)]);
        assert_eq!(LightMap::from_value(Value::from(map.clone())).unwrap(), map);
    }

    #[rstest]
    fn test_from_json_str_rejects_malformed_text() {
        let error = LightMap::from_json_str("[[").unwrap_err();
        assert!(matches!(error, LightMapError::Json(_)));
    }
}
