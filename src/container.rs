//! Container capabilities consumed by sources and collectors.
//!
//! The stream core knows nothing about concrete collection types. Anything a
//! stream reads from or collects into goes through one of two traits:
//!
//! - [`Container<T>`]: a sequence or set with sequential insertion, a size
//!   query and borrowed iteration. Implemented for `Vec`, `VecDeque`,
//!   `LinkedList`, `HashSet` and `BTreeSet`.
//! - [`KeyedMap<K, V>`]: a map that grouping collectors can fill slot by slot.
//!   Implemented for `IndexMap`, `HashMap` and `BTreeMap`.
//!
//! Grouping collectors pick their map through a [`MapKind`] marker, so the key
//! order of a grouping result is a property of the chosen map type:
//!
//! | Marker | Map | Key order |
//! |---|---|---|
//! | [`InsertionOrder`] (default) | `IndexMap` | first occurrence |
//! | [`HashOrder`] | `HashMap` | unspecified |
//! | [`KeyOrder`] | `BTreeMap` | ascending `Ord` |

use indexmap::IndexMap;
use std::collections::{
    btree_map, btree_set, hash_map, hash_set, linked_list, vec_deque, BTreeMap, BTreeSet, HashMap,
    HashSet, LinkedList, VecDeque,
};
use std::hash::{BuildHasher, Hash};
use std::slice;

/// A collection that can feed a source and receive collected elements.
pub trait Container<T> {
    /// Borrowed iterator over the elements, in the container's own order.
    type Iter<'c>: Iterator<Item = &'c T>
    where
        Self: 'c,
        T: 'c;

    /// Number of elements held.
    fn size(&self) -> usize;

    /// Insert one element at the container's natural insertion point.
    ///
    /// Sequences append; sets ignore duplicates.
    fn insert(&mut self, item: T);

    /// Iterate the elements without consuming the container.
    fn elements(&self) -> Self::Iter<'_>;

    /// Whether the container is empty.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T> Container<T> for Vec<T> {
    type Iter<'c>
        = slice::Iter<'c, T>
    where
        T: 'c;

    fn size(&self) -> usize {
        self.len()
    }

    fn insert(&mut self, item: T) {
        self.push(item);
    }

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> Container<T> for VecDeque<T> {
    type Iter<'c>
        = vec_deque::Iter<'c, T>
    where
        T: 'c;

    fn size(&self) -> usize {
        self.len()
    }

    fn insert(&mut self, item: T) {
        self.push_back(item);
    }

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> Container<T> for LinkedList<T> {
    type Iter<'c>
        = linked_list::Iter<'c, T>
    where
        T: 'c;

    fn size(&self) -> usize {
        self.len()
    }

    fn insert(&mut self, item: T) {
        self.push_back(item);
    }

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T, S> Container<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Iter<'c>
        = hash_set::Iter<'c, T>
    where
        T: 'c,
        S: 'c;

    fn size(&self) -> usize {
        self.len()
    }

    fn insert(&mut self, item: T) {
        HashSet::insert(self, item);
    }

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T: Ord> Container<T> for BTreeSet<T> {
    type Iter<'c>
        = btree_set::Iter<'c, T>
    where
        T: 'c;

    fn size(&self) -> usize {
        self.len()
    }

    fn insert(&mut self, item: T) {
        BTreeSet::insert(self, item);
    }

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

/// A map that keyed collectors fill one slot at a time.
pub trait KeyedMap<K, V>: Default + IntoIterator<Item = (K, V)> {
    /// Return the value slot for `key`, creating it with `init` on first use.
    fn slot(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V;

    /// Insert or replace the value for `key`, returning the previous value.
    fn put(&mut self, key: K, value: V) -> Option<V>;
}

impl<K: Eq + Hash, V> KeyedMap<K, V> for IndexMap<K, V> {
    fn slot(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        self.entry(key).or_insert_with(init)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<K: Eq + Hash, V> KeyedMap<K, V> for HashMap<K, V> {
    fn slot(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        match self.entry(key) {
            hash_map::Entry::Occupied(e) => e.into_mut(),
            hash_map::Entry::Vacant(e) => e.insert(init()),
        }
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<K: Ord, V> KeyedMap<K, V> for BTreeMap<K, V> {
    fn slot(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        match self.entry(key) {
            btree_map::Entry::Occupied(e) => e.into_mut(),
            btree_map::Entry::Vacant(e) => e.insert(init()),
        }
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

/// Selects the map type (and therefore the key order) of a keyed collector.
pub trait MapKind<K> {
    /// The concrete map holding values of type `V`.
    type Map<V>: KeyedMap<K, V>;
}

/// Keys in first-occurrence order, backed by [`IndexMap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionOrder;

/// Keys in hash order, backed by [`HashMap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HashOrder;

/// Keys in ascending order, backed by [`BTreeMap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyOrder;

impl<K: Eq + Hash> MapKind<K> for InsertionOrder {
    type Map<V> = IndexMap<K, V>;
}

impl<K: Eq + Hash> MapKind<K> for HashOrder {
    type Map<V> = HashMap<K, V>;
}

impl<K: Ord> MapKind<K> for KeyOrder {
    type Map<V> = BTreeMap<K, V>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_append_and_sets_dedupe() {
        let mut v: Vec<i32> = Vec::new();
        let mut s: BTreeSet<i32> = BTreeSet::new();
        for x in [3, 1, 3] {
            Container::insert(&mut v, x);
            Container::insert(&mut s, x);
        }
        assert_eq!(v.size(), 3);
        assert_eq!(s.size(), 2);
        assert_eq!(s.elements().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn insertion_order_map_keeps_first_occurrence() {
        let mut m: <InsertionOrder as MapKind<&str>>::Map<u32> = Default::default();
        *m.slot("b", || 0) += 1;
        *m.slot("a", || 0) += 1;
        *m.slot("b", || 0) += 1;
        let entries: Vec<_> = m.into_iter().collect();
        assert_eq!(entries, vec![("b", 2), ("a", 1)]);
    }

    #[test]
    fn key_order_map_sorts_keys() {
        let mut m: <KeyOrder as MapKind<i32>>::Map<&str> = Default::default();
        assert_eq!(m.put(3, "c"), None);
        m.put(1, "a");
        assert_eq!(m.put(3, "C"), Some("c"));
        let entries: Vec<_> = m.into_iter().collect();
        assert_eq!(entries, vec![(1, "a"), (3, "C")]);
    }
}
