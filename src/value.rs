//! Dynamic values stored in a [`LightMap`].
//!
//! [`Value`] is the JSON-like value model of the container: any scalar, an
//! array, or a nested [`LightMap`]. Nested maps are what makes a `LightMap`
//! a tree, and arrays of `[key, value]` pairs are promoted to nested maps at
//! construction time (see [`LightMap::from_entries`]).
//!
//! # Examples
//!
//! ```rust
//! use lightmap::{LightMap, Value};
//!
//! let map = LightMap::from_entries([("x", Value::from(vec![("y", 1)]))]);
//! let nested = map.get("x").and_then(Value::as_map).unwrap();
//! assert_eq!(nested.len(), 1);
//! assert_eq!(nested.get("y"), Some(&Value::from(1)));
//! ```

use crate::LightMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Value Definition
// =============================================================================

/// A dynamically typed value: a scalar, an array, or a nested [`LightMap`].
///
/// The [`Display`](fmt::Display) implementation renders the string form used
/// by the default comparators, by [`LightMap::to_object`] for keys and by
/// [`LightMap::substitute_into`]: strings are written raw, arrays are joined
/// with `,` and nested maps render as their JSON text.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A finite number.
    Number(serde_json::Number),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A nested container.
    Map(LightMap),
}

impl Value {
    /// Returns the name of this value's kind, as used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::Value;
    ///
    /// assert_eq!(Value::Null.kind_name(), "null");
    /// assert_eq!(Value::from(vec![1, 2]).kind_name(), "array");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
        }
    }

    /// Returns `true` if this is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if this is a nested container.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns `true` if this is an array of exactly two elements.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Array(items) if items.len() == 2)
    }

    /// Returns the boolean, if this is a [`Value::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the number as `i64`, if it is an integer that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    /// Returns the number as `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => number.as_f64(),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements, if this is a [`Value::Array`].
    #[must_use]
    pub const fn as_array(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested container, if this is a [`Value::Map`].
    #[must_use]
    pub const fn as_map(&self) -> Option<&LightMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the nested container mutably, if this is a [`Value::Map`].
    pub const fn as_map_mut(&mut self) -> Option<&mut LightMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Replaces nested containers with their array-of-pairs form.
    ///
    /// Only a direct [`Value::Map`] is rewritten; any other value is returned
    /// unchanged.
    #[must_use]
    pub fn into_array_form(self) -> Self {
        match self {
            Self::Map(map) => Self::Array(
                map.map_to_array()
                    .into_iter()
                    .map(|(key, value)| Self::Array(vec![key, value]))
                    .collect(),
            ),
            other => other,
        }
    }

    /// Converts into a plain JSON value where nested containers become objects.
    ///
    /// Containers held inside arrays are converted as well.
    #[must_use]
    pub fn to_plain_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(flag) => serde_json::Value::Bool(*flag),
            Self::Number(number) => serde_json::Value::Number(number.clone()),
            Self::String(text) => serde_json::Value::String(text.clone()),
            Self::Array(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_plain_json).collect())
            }
            Self::Map(map) => serde_json::Value::Object(map.to_object()),
        }
    }
}

// =============================================================================
// Truthiness
// =============================================================================

/// Truth-value of a key or value.
///
/// [`LightMap::map`] falls back to the original key when the projected key
/// is not truthy. Empty strings, zero, `false`, `None` and [`Value::Null`]
/// are falsy; everything else is truthy.
pub trait Truthiness {
    /// Returns `true` if the value counts as present.
    fn is_truthy(&self) -> bool;
}

impl Truthiness for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.as_f64().is_some_and(|float| float != 0.0),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Map(_) => true,
        }
    }
}

impl Truthiness for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthiness for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthiness for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T: Truthiness + ?Sized> Truthiness for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthiness> Truthiness for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthiness::is_truthy)
    }
}

macro_rules! impl_truthiness_for_integers {
    ($($integer:ty),*) => {
        $(
            impl Truthiness for $integer {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthiness_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthiness for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthiness for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Value {
                fn from(number: $integer) -> Self {
                    Self::Number(serde_json::Number::from(number))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Largest magnitude below which every integral `f64` is exactly an `i64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl From<f64> for Value {
    /// Integral numbers are stored as integers, so `1.0` equals `1` and
    /// renders as `1`. Non-finite numbers have no JSON representation and
    /// become [`Value::Null`].
    fn from(number: f64) -> Self {
        if number.fract() == 0.0 && number.abs() < MAX_SAFE_INTEGER {
            #[allow(clippy::cast_possible_truncation)]
            return Self::Number(serde_json::Number::from(number as i64));
        }
        serde_json::Number::from_f64(number).map_or(Self::Null, Self::Number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::from(f64::from(number))
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<LightMap> for Value {
    fn from(map: LightMap) -> Self {
        Self::Map(map)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Self>, B: Into<Self>> From<(A, B)> for Value {
    /// A tuple becomes a two-element array, the shape of a map entry.
    fn from((key, value): (A, B)) -> Self {
        Self::Array(vec![key.into(), value.into()])
    }
}

impl From<serde_json::Value> for Value {
    /// Objects become nested containers; their arrays of pairs are promoted
    /// the same way [`LightMap::from_entries`] promotes them.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(number),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(object) => Self::Map(LightMap::from_entries(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value))),
            )),
        }
    }
}

impl From<Value> for serde_json::Value {
    /// Produces the interchange form: nested containers become arrays of pairs.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => Self::Number(number),
            Value::String(text) => Self::String(text),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Map(map) => map.to_json(),
        }
    }
}

// =============================================================================
// Comparisons with Plain Types
// =============================================================================

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::String(text) => formatter.write_str(text),
            Self::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    // Array joins render null as an empty slot.
                    if !item.is_null() {
                        write!(formatter, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Map(map) => write!(formatter, "{map}"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) => number.serialize(serializer),
            Self::String(text) => serializer.serialize_str(text),
            Self::Array(items) => items.serialize(serializer),
            Self::Map(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================
