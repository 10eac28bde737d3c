//! Explicit primitive coercion.
//!
//! A [`LightMap`](crate::LightMap) never converts itself implicitly. Callers
//! ask for a primitive with a [`Hint`] through
//! [`LightMap::to_primitive`](crate::LightMap::to_primitive) and get a
//! [`Primitive`] back.

use std::fmt;

/// The kind of primitive the caller would like to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hint {
    /// Numeric context: the entry count.
    Number,
    /// String context: the JSON text.
    String,
    /// Truth-value context: always `true` for a constructed container.
    Boolean,
    /// No preference: behaves like [`Hint::String`].
    #[default]
    Default,
}

/// A primitive produced from a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    /// Result of a [`Hint::Number`] conversion.
    Number(usize),
    /// Result of a [`Hint::String`] or [`Hint::Default`] conversion.
    String(String),
    /// Result of a [`Hint::Boolean`] conversion.
    Boolean(bool),
}

impl Primitive {
    /// Returns the number, if this is a [`Primitive::Number`].
    #[must_use]
    pub const fn as_number(&self) -> Option<usize> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text, if this is a [`Primitive::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(formatter, "{number}"),
            Self::String(text) => formatter.write_str(text),
            Self::Boolean(flag) => write!(formatter, "{flag}"),
        }
    }
}
