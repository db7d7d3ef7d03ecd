//! Read-only projections of a map's keys and values.
//!
//! A view is inert: it stores only a reference to the map and reads live
//! state on every call. Read-only-ness is structural; the views expose no
//! mutating methods at all, so there is nothing to guard at runtime.

use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::ops::Index;

use super::RankMap;
use crate::error::Error;
use crate::order::{Comparator, NaturalOrder};

/// A read-only view of a map's keys, indexable by rank.
///
/// Obtained from [`RankMap::keys_view`].
pub struct KeysView<'a, K, V, C = NaturalOrder, const B: usize = 16> {
    map: &'a RankMap<K, V, C, B>,
}

impl<'a, K, V, C, const B: usize> KeysView<'a, K, V, C, B> {
    pub(crate) fn new(map: &'a RankMap<K, V, C, B>) -> Self {
        KeysView { map }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool
    where
        C: Comparator<K>,
    {
        self.map.contains_key(key)
    }

    /// The rank of `key` among the stored keys; see [`RankMap::rank`].
    pub fn rank(&self, key: &K) -> Result<usize, usize>
    where
        C: Comparator<K>,
    {
        self.map.rank(key)
    }

    /// The key at `index` in ascending order, or
    /// [`Error::OutOfRange`](crate::Error::OutOfRange).
    pub fn key_at(&self, index: usize) -> Result<&'a K, Error> {
        self.map.entry_at(index).map(|e| e.0)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a K> + FusedIterator {
        self.map.iter().map(|e| e.0)
    }
}

impl<K, V, C, const B: usize> Index<usize> for KeysView<'_, K, V, C, B> {
    type Output = K;

    fn index(&self, index: usize) -> &K {
        match self.key_at(index) {
            Ok(key) => key,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<K: Debug, V, C, const B: usize> Debug for KeysView<'_, K, V, C, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A read-only view of a map's values, indexable by the rank of their
/// keys.
///
/// Obtained from [`RankMap::values_view`].
pub struct ValuesView<'a, K, V, C = NaturalOrder, const B: usize = 16> {
    map: &'a RankMap<K, V, C, B>,
}

impl<'a, K, V, C, const B: usize> ValuesView<'a, K, V, C, B> {
    pub(crate) fn new(map: &'a RankMap<K, V, C, B>) -> Self {
        ValuesView { map }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether any entry holds `value`; a linear scan.
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.map.contains_value(value)
    }

    /// The value at `index` in ascending key order, or
    /// [`Error::OutOfRange`](crate::Error::OutOfRange).
    pub fn value_at(&self, index: usize) -> Result<&'a V, Error> {
        self.map.entry_at(index).map(|e| e.1)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a V> + FusedIterator {
        self.map.iter().map(|e| e.1)
    }
}

impl<K, V, C, const B: usize> Index<usize> for ValuesView<'_, K, V, C, B> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        match self.value_at(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<K, V: Debug, C, const B: usize> Debug for ValuesView<'_, K, V, C, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
