//! Insertion-ordered map with functional helpers.
//!
//! This module provides [`LightMap`], an ordered key-value container whose
//! iteration order is the order in which keys were first inserted.
//!
//! # Overview
//!
//! On top of the usual map surface (`set`, `get`, `has`, `delete`, ...) a
//! `LightMap` offers derivation operators that build a new container and
//! leave the receiver untouched:
//!
//! - [`filter`](LightMap::filter) / [`find_all`](LightMap::find_all)
//! - [`map`](LightMap::map)
//! - [`sort_keys`](LightMap::sort_keys) / [`sort_values`](LightMap::sort_values)
//!
//! and scalar queries: [`reduce`](LightMap::reduce), [`find`](LightMap::find)
//! and [`index_of`](LightMap::index_of).
//!
//! Every callback receives the value, the key and the receiver itself, in
//! that order.
//!
//! # Complexity
//!
//! Entries live in a single `Vec`, so lookups are linear scans.
//!
//! | Operation        | Complexity  |
//! |------------------|-------------|
//! | `get` / `has`    | O(n)        |
//! | `set`            | O(n)        |
//! | `delete`         | O(n)        |
//! | `filter` / `map` | O(n²) worst |
//! | `sort_*`         | O(n log n + n²) |
//! | `len`            | O(1)        |
//!
//! # Examples
//!
//! ```rust
//! use lightmap::LightMap;
//!
//! let mut map = LightMap::new();
//! map.set("key2", "value2").set("key1", "value1").set("key", "value");
//!
//! let sorted = map.sort_keys();
//! let keys: Vec<&&str> = sorted.keys().collect();
//! assert_eq!(keys, vec![&"key", &"key1", &"key2"]);
//!
//! // The receiver keeps its own order
//! assert_eq!(map.keys().next(), Some(&"key2"));
//! ```

use crate::Truthiness;
use crate::compare::compare_as_strings;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

/// Name reported by [`LightMap::to_string_tag`] and by the type-identity check.
pub(crate) const TYPE_NAME: &str = "LightMap";

// =============================================================================
// LightMap Definition
// =============================================================================

/// An insertion-ordered map with functional helpers.
///
/// Keys are unique under [`PartialEq`]. Setting an existing key replaces its
/// value and keeps the key's original position.
///
/// The default type parameters make `LightMap` a map from [`Value`](crate::Value)
/// to [`Value`](crate::Value), the shape that supports nested containers.
///
/// # Examples
///
/// ```rust
/// use lightmap::LightMap;
///
/// let mut map = LightMap::new();
/// map.set("b", 2).set("a", 1).set("b", 20);
///
/// let entries: Vec<(&&str, &i32)> = map.iter().collect();
/// assert_eq!(entries, vec![(&"b", &20), (&"a", &1)]);
/// ```
#[derive(Clone)]
pub struct LightMap<K = crate::Value, V = crate::Value> {
    /// Entries in insertion order
    entries: Vec<(K, V)>,
}

impl<K, V> LightMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::LightMap;
    ///
    /// let map: LightMap<String, i32> = LightMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of entries in the map.
    ///
    /// Alias for [`len`](Self::len).
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over key-value pairs in insertion order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> LightMapIterator<'_, K, V> {
        LightMapIterator {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over key-value pairs in insertion order.
    ///
    /// Alias for [`iter`](Self::iter).
    #[inline]
    #[must_use]
    pub fn entries(&self) -> LightMapIterator<'_, K, V> {
        self.iter()
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Calls `action` with each value, key and the map itself, in order.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&V, &K, &Self),
    {
        for (key, value) in &self.entries {
            action(value, key, self);
        }
    }

    /// Folds the entries from left to right.
    ///
    /// `function` receives the accumulator, the `(key, value)` pair, the key
    /// again and the map itself. There is no short-circuit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::LightMap;
    ///
    /// let map = LightMap::from_iter([("key", "value")]);
    /// let text = map.reduce(
    ///     |mut text, (key, value), _, _| {
    ///         text += &format!("Key: {key}\nValue: {value}\n");
    ///         text
    ///     },
    ///     String::new(),
    /// );
    /// assert_eq!(text, "Key: key\nValue: value\n");
    /// ```
    pub fn reduce<B, F>(&self, mut function: F, initial: B) -> B
    where
        F: FnMut(B, (&K, &V), &K, &Self) -> B,
    {
        let mut accumulator = initial;
        for (key, value) in &self.entries {
            accumulator = function(accumulator, (key, value), key, self);
        }
        accumulator
    }

    /// Returns the first entry matching `predicate`, or `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::LightMap;
    ///
    /// let map = LightMap::from_iter([("key", "value"), ("key1", "value1")]);
    /// assert_eq!(map.find(|value, _, _| *value == "value1"), Some((&"key1", &"value1")));
    /// assert_eq!(map.find(|value, _, _| *value == "missing"), None);
    /// ```
    pub fn find<F>(&self, mut predicate: F) -> Option<(&K, &V)>
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.entries
            .iter()
            .find(|(key, value)| predicate(value, key, self))
            .map(|(key, value)| (key, value))
    }

    /// Returns the tag name of this container type, `"LightMap"`.
    ///
    /// Derived containers report the same tag.
    #[inline]
    #[must_use]
    pub const fn to_string_tag(&self) -> &'static str {
        TYPE_NAME
    }

    /// Returns the crate version, formatted as `v<major>.<minor>.<patch>`.
    ///
    /// Same as [`crate::version`].
    #[must_use]
    pub fn version(&self) -> String {
        crate::version()
    }
}

impl<K: PartialEq, V> LightMap<K, V> {
    /// Inserts or updates an entry, returning the map for chaining.
    ///
    /// A new key is appended at the end. An existing key keeps its position
    /// and gets the new value.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Returns a reference to the value for `key`.
    ///
    /// Any type the key type can be compared with works as a lookup key, so a
    /// `LightMap<String, _>` or a `LightMap<Value, _>` can be queried with `&str`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries
            .iter_mut()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the map contains `key`.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.index_of(key).is_some()
    }

    /// Removes `key` and returns its value, keeping the order of the rest.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        let index = self.index_of(key)?;
        Some(self.entries.remove(index).1)
    }

    /// Removes `key`, returning `true` if it was present.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Returns the zero-based insertion position of `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::LightMap;
    ///
    /// let map = LightMap::from_iter([("key", "value"), ("key1", "value1"), ("key2", "value2")]);
    /// assert_eq!(map.index_of(&"key1"), Some(1));
    /// assert_eq!(map.index_of(&"key3"), None);
    /// ```
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries.iter().position(|(existing, _)| existing == key)
    }

    /// Returns the insertion position of `key`, or `-1` when it is absent.
    pub fn position<Q>(&self, key: &Q) -> isize
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.index_of(key)
            .map_or(-1, |index| isize::try_from(index).unwrap_or(isize::MAX))
    }

    /// String-search hook: the position of `key`, or `-1`.
    ///
    /// Alias for [`position`](Self::position). This is an explicit call, a
    /// `LightMap` never takes part in string searching on its own.
    pub fn search<Q>(&self, key: &Q) -> isize
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.position(key)
    }

    /// Returns `true` if both maps hold equal values under the same keys.
    ///
    /// The comparison is deep and ignores insertion order, exactly like `==`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::LightMap;
    ///
    /// let left = LightMap::from_iter([("a", 1), ("b", 2)]);
    /// let right = LightMap::from_iter([("b", 2), ("a", 1)]);
    /// let other = LightMap::from_iter([("a", 1), ("b", 3)]);
    /// assert!(left.equals(&right));
    /// assert!(!left.equals(&other));
    /// ```
    pub fn equals(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        self == other
    }
}

impl<K: Clone + PartialEq, V: Clone> LightMap<K, V> {
    /// Returns a new map with the entries for which `predicate` returns `true`.
    ///
    /// Relative order is preserved and the receiver is not modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::LightMap;
    ///
    /// let map = LightMap::from_iter([("key", "value"), ("key1", "value1")]);
    /// let result = map.filter(|_, key, _| *key == "key");
    /// assert!(result.has(&"key"));
    /// assert!(!result.has(&"key1"));
    /// assert!(map.has(&"key1"));
    /// ```
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        let mut result = Self::new();
        for (key, value) in &self.entries {
            if predicate(value, key, self) {
                result.set(key.clone(), value.clone());
            }
        }
        result
    }

    /// Returns every entry matching `predicate`.
    ///
    /// Alias for [`filter`](Self::filter).
    #[must_use]
    pub fn find_all<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.filter(predicate)
    }

    /// Returns a new map with the keys sorted by `comparator`.
    ///
    /// The sort is stable. Each sorted key is paired with the value the
    /// receiver holds for it.
    #[must_use]
    pub fn sort_keys_by<F>(&self, mut comparator: F) -> Self
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        let mut keys: Vec<&K> = self.keys().collect();
        keys.sort_by(|left, right| comparator(*left, *right));
        keys.into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.clone(), value.clone())))
            .collect()
    }

    /// Returns a new map with the entries sorted by value with `comparator`.
    ///
    /// Keys never take part in the comparison, but every key stays paired with
    /// its value. The sort is stable.
    #[must_use]
    pub fn sort_values_by<F>(&self, mut comparator: F) -> Self
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut entries: Vec<&(K, V)> = self.entries.iter().collect();
        entries.sort_by(|(_, left), (_, right)| comparator(left, right));
        entries.into_iter().cloned().collect()
    }

    /// Returns a new map with the keys in locale-aware string order.
    ///
    /// See [`compare::locale_compare`](crate::compare::locale_compare).
    #[must_use]
    pub fn sort_keys(&self) -> Self
    where
        K: fmt::Display,
    {
        self.sort_keys_by(compare_as_strings)
    }

    /// Returns a new map with the entries in locale-aware string order of their values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::LightMap;
    ///
    /// let map = LightMap::from_iter([("key", "value2"), ("key1", "value1"), ("key2", "value")]);
    /// let sorted = map.sort_values();
    /// let keys: Vec<&&str> = sorted.keys().collect();
    /// assert_eq!(keys, vec![&"key2", &"key1", &"key"]);
    /// ```
    #[must_use]
    pub fn sort_values(&self) -> Self
    where
        V: fmt::Display,
    {
        self.sort_values_by(compare_as_strings)
    }
}

impl<K: Clone + PartialEq + Truthiness, V: Default> LightMap<K, V> {
    /// Returns a new map built from the entries `transform` projects.
    ///
    /// For each entry, in order, `transform` returns the new `(key, value)`
    /// pair, or `None` when it has nothing to project.
    ///
    /// - The projected key is used if it is truthy (see [`Truthiness`]);
    ///   otherwise the entry keeps its original key.
    /// - The projected value is always used. When `transform` returns `None`
    ///   the value is `V::default()`; it never falls back to the original value.
    /// - When projected keys collide, the later entry overwrites the value and
    ///   the first position is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightmap::LightMap;
    ///
    /// let map = LightMap::from_iter([("key".to_string(), "value".to_string())]);
    /// let result = map.map(|value, key, _| Some((key.clone(), format!("{value}1"))));
    /// assert_eq!(result.get("key"), Some(&"value1".to_string()));
    ///
    /// // Nothing projected: original key, default value
    /// let cleared = map.map(|_, _, _| None);
    /// assert_eq!(cleared.get("key"), Some(&String::new()));
    /// ```
    #[must_use]
    pub fn map<F>(&self, mut transform: F) -> Self
    where
        F: FnMut(&V, &K, &Self) -> Option<(K, V)>,
    {
        let mut result = Self::new();
        for (key, value) in &self.entries {
            let (projected_key, projected_value) = match transform(value, key, self) {
                Some((new_key, new_value)) => (Some(new_key), new_value),
                None => (None, V::default()),
            };
            let key = projected_key
                .filter(Truthiness::is_truthy)
                .unwrap_or_else(|| key.clone());
            result.set(key, projected_value);
        }
        result
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over the entries of a [`LightMap`], in insertion order.
pub struct LightMapIterator<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for LightMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for LightMapIterator<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for LightMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the entries of a [`LightMap`], in insertion order.
pub struct LightMapIntoIterator<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for LightMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for LightMapIntoIterator<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for LightMapIntoIterator<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for LightMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for LightMap<K, V> {
    /// Builds a map with `set` semantics; values are stored as given.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for LightMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: PartialEq, V, const N: usize> From<[(K, V); N]> for LightMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: PartialEq, V> From<Vec<(K, V)>> for LightMap<K, V> {
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> IntoIterator for LightMap<K, V> {
    type Item = (K, V);
    type IntoIter = LightMapIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        LightMapIntoIterator {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LightMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = LightMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for LightMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .all(|(key, value)| other.get(key).is_some_and(|other_value| other_value == value))
    }
}

impl<K: Eq, V: Eq> Eq for LightMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LightMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{TYPE_NAME} ")?;
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
