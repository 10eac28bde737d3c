//! Default comparators used by the sorting operators.
//!
//! [`locale_compare`] orders strings with the Unicode collation algorithm
//! under the root locale: accents and case are secondary and tertiary
//! differences, punctuation sorts before digits and digits before letters.
//! Strings the collator considers equal are ordered by code point so that
//! the order is total.
//!
//! # Examples
//!
//! ```rust
//! use lightmap::compare::locale_compare;
//! use std::cmp::Ordering;
//!
//! assert_eq!(locale_compare("key", "key1"), Ordering::Less);
//! assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
//! assert_eq!(locale_compare("a", "A"), Ordering::Less);
//! assert_eq!(locale_compare("é", "f"), Ordering::Less);
//! ```

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;
use std::fmt::Display;
use tracing::warn;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = Collator::try_new(&Default::default(), CollatorOptions::new())
        .map_err(|error| warn!(%error, "root collator unavailable, falling back to case folding"))
        .ok();
}

/// Compares two strings with root-locale collation.
#[must_use]
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(left, right),
            None => case_folded_compare(left, right),
        })
        .then_with(|| left.cmp(right))
}

/// Case-insensitive order with lowercase first, used without collation data.
fn case_folded_compare(left: &str, right: &str) -> Ordering {
    let folded_left = left.chars().flat_map(char::to_lowercase);
    let folded_right = right.chars().flat_map(char::to_lowercase);

    folded_left.cmp(folded_right).then_with(|| right.cmp(left))
}

/// Compares the string forms of two displayable values with [`locale_compare`].
///
/// This is the default comparator of
/// [`LightMap::sort_keys`](crate::LightMap::sort_keys) and
/// [`LightMap::sort_values`](crate::LightMap::sort_values).
#[must_use]
pub fn compare_as_strings<T: Display + ?Sized>(left: &T, right: &T) -> Ordering {
    locale_compare(&left.to_string(), &right.to_string())
}
