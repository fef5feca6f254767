//! Collecting into containers and keyed maps.

use crate::collector::Collector;
use crate::container::{Container, InsertionOrder, KeyedMap, MapKind};
use crate::error::Result;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::marker::PhantomData;

/* ===================== ToContainer ===================== */

/// Inserts every element, in emission order, into a fresh `C`.
///
/// Sequences keep duplicates; sets drop them.
pub struct ToContainer<C> {
    _c: PhantomData<fn() -> C>,
}

impl<C> Clone for ToContainer<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ToContainer<C> {}

impl<C> Default for ToContainer<C> {
    fn default() -> Self {
        Self { _c: PhantomData }
    }
}

/// See [`ToContainer`].
#[must_use]
pub fn to_container<C>() -> ToContainer<C> {
    ToContainer::default()
}

/// Collect into a `Vec<T>`.
#[must_use]
pub fn to_vec<T>() -> ToContainer<Vec<T>> {
    ToContainer::default()
}

/// Collect into a `BTreeSet<T>` (sorted, de-duplicated).
#[must_use]
pub fn to_set<T: Ord>() -> ToContainer<BTreeSet<T>> {
    ToContainer::default()
}

/// Collect into a `HashSet<T>`.
#[must_use]
pub fn to_hash_set<T: Eq + Hash>() -> ToContainer<HashSet<T>> {
    ToContainer::default()
}

impl<T, C> Collector<T> for ToContainer<C>
where
    C: Container<T> + Default,
{
    type Acc = C;
    type Output = C;

    fn supply(&self) -> C {
        C::default()
    }

    fn accumulate(&self, acc: &mut C, item: T) {
        acc.insert(item);
    }

    fn finish(&self, acc: C) -> Result<C> {
        Ok(acc)
    }
}

/* ===================== ToMap ===================== */

/// Builds a map from a key and a value extracted from each element.
///
/// A repeated key keeps its first position and takes the latest value.
pub struct ToMap<K, V, KF, VF, M = InsertionOrder> {
    key_fn: KF,
    value_fn: VF,
    _kv: PhantomData<fn() -> (K, V, M)>,
}

/// See [`ToMap`].
pub fn to_map<T, K, V, KF, VF>(key_fn: KF, value_fn: VF) -> ToMap<K, V, KF, VF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
{
    ToMap {
        key_fn,
        value_fn,
        _kv: PhantomData,
    }
}

impl<K, V, KF, VF, M> ToMap<K, V, KF, VF, M> {
    /// Switch the map type (and key order) of the result.
    #[must_use]
    pub fn with_map<M2>(self) -> ToMap<K, V, KF, VF, M2> {
        ToMap {
            key_fn: self.key_fn,
            value_fn: self.value_fn,
            _kv: PhantomData,
        }
    }
}

impl<T, K, V, KF, VF, M> Collector<T> for ToMap<K, V, KF, VF, M>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    M: MapKind<K>,
{
    type Acc = M::Map<V>;
    type Output = M::Map<V>;

    fn supply(&self) -> Self::Acc {
        Default::default()
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        acc.put((self.key_fn)(&item), (self.value_fn)(&item));
    }

    fn finish(&self, acc: Self::Acc) -> Result<Self::Output> {
        Ok(acc)
    }
}

/* ===================== ToMapMerging ===================== */

/// Like [`ToMap`], but values sharing a key are folded with `merge` in
/// emission order, starting from the first value.
pub struct ToMapMerging<K, V, KF, VF, MF, M = InsertionOrder> {
    key_fn: KF,
    value_fn: VF,
    merge: MF,
    _kv: PhantomData<fn() -> (K, V, M)>,
}

/// See [`ToMapMerging`].
pub fn to_map_merging<T, K, V, KF, VF, MF>(
    key_fn: KF,
    value_fn: VF,
    merge: MF,
) -> ToMapMerging<K, V, KF, VF, MF>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    MF: Fn(V, V) -> V,
{
    ToMapMerging {
        key_fn,
        value_fn,
        merge,
        _kv: PhantomData,
    }
}

impl<K, V, KF, VF, MF, M> ToMapMerging<K, V, KF, VF, MF, M> {
    /// Switch the map type (and key order) of the result.
    #[must_use]
    pub fn with_map<M2>(self) -> ToMapMerging<K, V, KF, VF, MF, M2> {
        ToMapMerging {
            key_fn: self.key_fn,
            value_fn: self.value_fn,
            merge: self.merge,
            _kv: PhantomData,
        }
    }
}

impl<T, K, V, KF, VF, MF, M> Collector<T> for ToMapMerging<K, V, KF, VF, MF, M>
where
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    MF: Fn(V, V) -> V,
    M: MapKind<K>,
{
    // a slot is `None` only between its creation and the first value landing in it
    type Acc = M::Map<Option<V>>;
    type Output = M::Map<V>;

    fn supply(&self) -> Self::Acc {
        Default::default()
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        let value = (self.value_fn)(&item);
        let slot = acc.slot((self.key_fn)(&item), || None);
        *slot = Some(match slot.take() {
            Some(prev) => (self.merge)(prev, value),
            None => value,
        });
    }

    fn finish(&self, acc: Self::Acc) -> Result<Self::Output> {
        let mut out: Self::Output = Default::default();
        for (k, v) in acc {
            if let Some(v) = v {
                out.put(k, v);
            }
        }
        Ok(out)
    }
}
