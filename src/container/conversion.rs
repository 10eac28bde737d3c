//! Structural conversions of a [`LightMap`].
//!
//! - [`map_to_array`](LightMap::map_to_array): the reconstructable
//!   array-of-pairs form, nested maps included.
//! - [`to_json`](LightMap::to_json) and the `serde` implementations: the same
//!   form, for any serializer.
//! - [`to_object`](LightMap::to_object): a plain nested JSON object.
//! - [`Display`](fmt::Display): the JSON text of the array-of-pairs form.
//!
//! The coercion hooks are explicit method calls. A `LightMap` never turns
//! into a number, a string or a pattern on its own:
//! [`to_primitive`](LightMap::to_primitive), [`to_number`](LightMap::to_number),
//! [`to_display_string`](LightMap::to_display_string),
//! [`substitute_into`](LightMap::substitute_into) and [`is_instance_of`].
//!
//! # Round Trip
//!
//! ```rust
//! use lightmap::{LightMap, Value};
//!
//! let original = LightMap::from_entries([("key", Value::from(vec![("key1", "value1")]))]);
//! let rebuilt = LightMap::from_entries(original.map_to_array());
//! assert_eq!(rebuilt, original);
//! ```

use super::lightmap::{LightMap, TYPE_NAME};
use crate::{Hint, Primitive, Value};
use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Array-of-Pairs and Object Forms
// =============================================================================

impl<K, V> LightMap<K, V>
where
    K: Clone + Into<Value>,
    V: Clone + Into<Value>,
{
    /// Returns the entries as `[key, value]` pairs, in order.
    ///
    /// A value that is itself a map is converted the same way, recursively, so
    /// the result contains no maps at the first level of any pair. Flat values
    /// are passed through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::{LightMap, Value};
    ///
    /// let mut map = LightMap::new();
    /// map.set(Value::from("key"), Value::from(LightMap::from_entries([("key1", "value1")])));
    ///
    /// assert_eq!(
    ///     map.map_to_array(),
    ///     vec![(Value::from("key"), Value::from(vec![("key1", "value1")]))]
    /// );
    /// ```
    #[must_use]
    pub fn map_to_array(&self) -> Vec<(Value, Value)> {
        self.iter()
            .map(|(key, value)| {
                let key: Value = key.clone().into();
                let value: Value = value.clone().into();
                (key, value.into_array_form())
            })
            .collect()
    }

    /// Returns the array-of-pairs form as a JSON value.
    ///
    /// This is what the `Serialize` implementation produces.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.map_to_array()
                .into_iter()
                .map(|(key, value)| serde_json::Value::Array(vec![key.into(), value.into()]))
                .collect(),
        )
    }

    /// Returns the map as a plain JSON object, nested maps included.
    ///
    /// Keys are converted to their string form; when two keys share a string
    /// form the later value wins. Insertion order is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::{LightMap, Value};
    ///
    /// let map = LightMap::from_entries([("key", Value::from(vec![("key1", "value1")]))]);
    /// assert_eq!(
    ///     serde_json::Value::Object(map.to_object()),
    ///     serde_json::json!({ "key": { "key1": "value1" } })
    /// );
    /// ```
    #[must_use]
    pub fn to_object(&self) -> serde_json::Map<String, serde_json::Value> {
        self.iter()
            .map(|(key, value)| {
                let key: Value = key.clone().into();
                let value: Value = value.clone().into();
                (key.to_string(), value.to_plain_json())
            })
            .collect()
    }

    /// Returns the JSON text of [`map_to_array`](Self::map_to_array).
    ///
    /// Same as `to_string()`. This is the explicit form of string coercion.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Converts to a primitive according to `hint`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::{Hint, LightMap, Primitive};
    ///
    /// let map = LightMap::from_entries([("key", "value")]);
    /// assert_eq!(map.to_primitive(Hint::Number), Primitive::Number(1));
    /// assert_eq!(
    ///     map.to_primitive(Hint::Default),
    ///     Primitive::String(r#"[["key","value"]]"#.to_string())
    /// );
    /// assert_eq!(map.to_primitive(Hint::Boolean), Primitive::Boolean(true));
    /// ```
    #[must_use]
    pub fn to_primitive(&self, hint: Hint) -> Primitive {
        match hint {
            Hint::Number => Primitive::Number(self.to_number()),
            Hint::Boolean => Primitive::Boolean(true),
            Hint::String | Hint::Default => Primitive::String(self.to_display_string()),
        }
    }
}

impl<K, V> LightMap<K, V> {
    /// Numeric coercion: the number of entries.
    #[inline]
    #[must_use]
    pub const fn to_number(&self) -> usize {
        self.len()
    }
}

impl<K: fmt::Display, V: fmt::Display> LightMap<K, V> {
    /// Replaces, in order, the first occurrence of each key in `subject` with its value.
    ///
    /// Keys and values are used through their string forms and keys match
    /// literally. Each replacement sees the text produced by the previous ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::LightMap;
    ///
    /// let mut map = LightMap::new();
    /// map.set("{{ name }}", "LightMap").set("{{ version }}", "v1.0.0");
    ///
    /// assert_eq!(
    ///     map.substitute_into("Module: {{ name }} {{ version }}"),
    ///     "Module: LightMap v1.0.0"
    /// );
    /// ```
    #[must_use]
    pub fn substitute_into(&self, subject: &str) -> String {
        self.iter().fold(subject.to_owned(), |text, (key, value)| {
            text.replacen(&key.to_string(), &value.to_string(), 1)
        })
    }
}

// =============================================================================
// Type Identity
// =============================================================================

/// Returns the last path segment of a type name, without generic arguments.
///
/// Only a plain path qualifies, optionally behind one `&`. Tuples, arrays,
/// slices, function pointers and trait objects have no short name, so a
/// compound type that merely mentions `LightMap` is never mistaken for one.
fn short_type_name(full_name: &str) -> Option<&str> {
    let without_generics = full_name.split('<').next().unwrap_or(full_name);
    let path = without_generics
        .strip_prefix('&')
        .unwrap_or(without_generics);

    let is_plain_path = !path.is_empty()
        && path
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || matches!(character, '_' | ':'));

    if is_plain_path {
        path.rsplit("::").next()
    } else {
        None
    }
}

/// Returns `true` if `candidate`'s type is named `LightMap`.
///
/// The check compares type names, not type identity, so a `LightMap` from a
/// different version of this crate, or with different type parameters, is
/// still recognized. Only the candidate's own type counts: a tuple or an
/// array holding a `LightMap` is not one.
///
/// # Examples
///
/// ```rust
/// use lightmap::{LightMap, is_instance_of};
/// use std::collections::HashMap;
///
/// assert!(is_instance_of(&LightMap::<String, i32>::new()));
/// assert!(!is_instance_of(&HashMap::<String, i32>::new()));
/// ```
#[must_use]
pub fn is_instance_of<T: ?Sized>(_candidate: &T) -> bool {
    short_type_name(std::any::type_name::<T>()) == Some(TYPE_NAME)
}

// =============================================================================
// Display
// =============================================================================

impl<K, V> fmt::Display for LightMap<K, V>
where
    K: Clone + Into<Value>,
    V: Clone + Into<Value>,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.to_json())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

impl<K, V> Serialize for LightMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for entry in self {
            sequence.serialize_element(&entry)?;
        }
        sequence.end()
    }
}

impl<'de> Deserialize<'de> for LightMap {
    /// Reads the array-of-pairs form and rebuilds the map with deep normalization.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
