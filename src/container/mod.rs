//! The [`LightMap`] container.
//!
//! - `lightmap`: storage, the map surface and the derivation operators
//! - `normalize`: construction and deep normalization of pair arrays
//! - `conversion`: array-of-pairs, object, JSON text and coercion hooks

mod conversion;
mod lightmap;
mod normalize;

pub use conversion::is_instance_of;
pub use lightmap::LightMap;
pub use lightmap::LightMapIntoIterator;
pub use lightmap::LightMapIterator;
pub use normalize::LightMapOptions;
