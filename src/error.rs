//! Error types for rebuilding a [`LightMap`](crate::LightMap) from external input.
//!
//! Every container operation is total. Errors only appear at the boundary
//! where a `LightMap` is reconstructed from a dynamic [`Value`](crate::Value)
//! or from JSON text in the array-of-pairs format.

use std::fmt;

/// Represents the ways reconstruction from the array-of-pairs format can fail.
///
/// # Examples
///
/// ```rust
/// use lightmap::{LightMap, LightMapError, Value};
///
/// let error = LightMap::from_value(Value::from("not pairs")).unwrap_err();
/// assert_eq!(
///     format!("{error}"),
///     "expected an array of [key, value] pairs, found string"
/// );
/// assert!(matches!(error, LightMapError::NotAnArray { found: "string" }));
/// ```
#[derive(Debug)]
pub enum LightMapError {
    /// The input was not an array at all.
    NotAnArray {
        /// Name of the kind of value that was found instead.
        found: &'static str,
    },
    /// An element of the input array was not a `[key, value]` pair.
    ///
    /// Reconstruction is strict: an element must have exactly two items.
    /// `["k"]` (no value) and `["k", "v", "extra"]` are rejected rather than
    /// read as a key with a missing value or with trailing items dropped.
    NotAPair {
        /// Zero-based position of the offending element.
        index: usize,
        /// Length of the offending element, or `None` if it was not an array.
        length: Option<usize>,
    },
    /// The input text was not valid JSON.
    Json(serde_json::Error),
}

impl fmt::Display for LightMapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnArray { found } => write!(
                formatter,
                "expected an array of [key, value] pairs, found {found}"
            ),
            Self::NotAPair {
                index,
                length: Some(length),
            } => write!(
                formatter,
                "element {index} has {length} items, expected a [key, value] pair"
            ),
            Self::NotAPair {
                index,
                length: None,
            } => write!(
                formatter,
                "element {index} is not an array, expected a [key, value] pair"
            ),
            Self::Json(error) => write!(formatter, "invalid JSON: {error}"),
        }
    }
}

impl std::error::Error for LightMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(error) => Some(error),
            Self::NotAnArray { .. } | Self::NotAPair { .. } => None,
        }
    }
}

impl From<serde_json::Error> for LightMapError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}
