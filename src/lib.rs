//! # lightmap
//!
//! An insertion-ordered map with functional helpers, deep construction of
//! nested maps and a reconstructable array-of-pairs serialization.
//!
//! ## Overview
//!
//! [`LightMap`] keeps its entries in insertion order and adds to the usual
//! map surface:
//!
//! - **Derivation operators**: `filter`, `map`, `find_all`, `sort_keys`,
//!   `sort_values` build a new map and never touch the receiver
//! - **Queries**: `reduce`, `find`, `index_of`, `equals`
//! - **Deep construction**: arrays of `[key, value]` pairs become nested maps
//! - **Conversions**: `map_to_array`, `to_object`, JSON text, `serde` support
//! - **Explicit coercions**: `to_primitive`, `to_number`, `substitute_into`,
//!   [`is_instance_of`]
//!
//! ## Example
//!
//! ```rust
//! use lightmap::prelude::*;
//!
//! let map = LightMap::from_entries([(
//!     "key",
//!     Value::from(vec![
//!         ("keyA", Value::from("valueA")),
//!         ("keyB", Value::from(vec![("key2", "value2")])),
//!     ]),
//! )]);
//!
//! assert_eq!(
//!     serde_json::Value::Object(map.to_object()),
//!     serde_json::json!({ "key": { "keyA": "valueA", "keyB": { "key2": "value2" } } })
//! );
//! assert_eq!(
//!     map.to_string(),
//!     r#"[["key",[["keyA","valueA"],["keyB",[["key2","value2"]]]]]]"#
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lightmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::error::LightMapError;
    pub use crate::primitive::{Hint, Primitive};
    pub use crate::value::{Truthiness, Value};
}

pub mod compare;
mod container;
mod error;
pub mod primitive;
mod value;

pub use container::{
    LightMap, LightMapIntoIterator, LightMapIterator, LightMapOptions, is_instance_of,
};
pub use error::LightMapError;
pub use primitive::{Hint, Primitive};
pub use value::{Truthiness, Value};

/// Returns the crate version, formatted as `v<major>.<minor>.<patch>`.
///
/// # Examples
///
/// ```rust
/// assert!(lightmap::version().starts_with('v'));
/// ```
#[must_use]
pub fn version() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}
