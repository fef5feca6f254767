//! Grouping and partitioning, with optional downstream collectors.
//!
//! ```
//! use ironstream::Stream;
//! use ironstream::collectors::{counting, grouping_by, grouping_by_with};
//!
//! # fn main() -> anyhow::Result<()> {
//! let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
//!
//! let by_letter = Stream::from_vec(words.clone())
//!     .collect(grouping_by(|w: &&str| w.as_bytes()[0]))?;
//! assert_eq!(by_letter[&b'a'], vec!["apple", "avocado"]);
//!
//! // two levels: first letter, then length, then a count
//! let nested = Stream::from_vec(words)
//!     .collect(grouping_by_with(
//!         |w: &&str| w.as_bytes()[0],
//!         grouping_by_with(|w: &&str| w.len(), counting()),
//!     ))?;
//! assert_eq!(nested[&b'b'][&6usize], 1);
//! # Ok(())
//! # }
//! ```

use crate::collector::Collector;
use crate::collectors::containers::{to_vec, ToContainer};
use crate::container::{InsertionOrder, KeyedMap, MapKind};
use crate::error::Result;
use serde::Serialize;
use std::marker::PhantomData;
use std::ops::Index;

/* ===================== GroupingBy ===================== */

/// Groups elements by `key_fn(element)` and reduces each group with a
/// downstream collector.
///
/// Keys are ordered by the map kind `M`: first occurrence by default, see
/// [`with_map`](Self::with_map).
pub struct GroupingBy<K, F, D, M = InsertionOrder> {
    key_fn: F,
    downstream: D,
    _k: PhantomData<fn() -> (K, M)>,
}

/// Group into `Vec`s of members.
pub fn grouping_by<T, K, F>(key_fn: F) -> GroupingBy<K, F, ToContainer<Vec<T>>>
where
    F: Fn(&T) -> K,
{
    grouping_by_with(key_fn, to_vec())
}

/// Group and reduce each group with `downstream`.
pub fn grouping_by_with<T, K, F, D>(key_fn: F, downstream: D) -> GroupingBy<K, F, D>
where
    F: Fn(&T) -> K,
    D: Collector<T>,
{
    GroupingBy {
        key_fn,
        downstream,
        _k: PhantomData,
    }
}

impl<K, F, D, M> GroupingBy<K, F, D, M> {
    /// Switch the map type (and key order) of the result.
    #[must_use]
    pub fn with_map<M2>(self) -> GroupingBy<K, F, D, M2> {
        GroupingBy {
            key_fn: self.key_fn,
            downstream: self.downstream,
            _k: PhantomData,
        }
    }
}

impl<T, K, F, D, M> Collector<T> for GroupingBy<K, F, D, M>
where
    F: Fn(&T) -> K,
    D: Collector<T>,
    M: MapKind<K>,
{
    type Acc = M::Map<D::Acc>;
    type Output = M::Map<D::Output>;

    fn supply(&self) -> Self::Acc {
        Default::default()
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        let slot = acc.slot((self.key_fn)(&item), || self.downstream.supply());
        self.downstream.accumulate(slot, item);
    }

    fn finish(&self, acc: Self::Acc) -> Result<Self::Output> {
        let mut out: Self::Output = Default::default();
        for (k, group) in acc {
            out.put(k, self.downstream.finish(group)?);
        }
        Ok(out)
    }
}

/* ===================== PartitioningBy ===================== */

/// The two groups produced by partitioning. Both always exist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Partitions<R> {
    /// Result for elements where the predicate held.
    pub matching: R,
    /// Result for the other elements.
    pub rest: R,
}

impl<R> Partitions<R> {
    /// The group for predicate outcome `outcome`.
    pub const fn get(&self, outcome: bool) -> &R {
        if outcome { &self.matching } else { &self.rest }
    }

    /// `(matching, rest)`.
    pub fn into_pair(self) -> (R, R) {
        (self.matching, self.rest)
    }
}

impl<R> Index<bool> for Partitions<R> {
    type Output = R;

    fn index(&self, outcome: bool) -> &R {
        self.get(outcome)
    }
}

/// Splits elements by a predicate and reduces each side with a downstream
/// collector.
pub struct PartitioningBy<P, D> {
    pred: P,
    downstream: D,
}

/// Partition into `Vec`s of members.
pub fn partitioning_by<T, P>(pred: P) -> PartitioningBy<P, ToContainer<Vec<T>>>
where
    P: Fn(&T) -> bool,
{
    partitioning_by_with(pred, to_vec())
}

/// Partition and reduce each side with `downstream`.
pub fn partitioning_by_with<T, P, D>(pred: P, downstream: D) -> PartitioningBy<P, D>
where
    P: Fn(&T) -> bool,
    D: Collector<T>,
{
    PartitioningBy { pred, downstream }
}

impl<T, P, D> Collector<T> for PartitioningBy<P, D>
where
    P: Fn(&T) -> bool,
    D: Collector<T>,
{
    type Acc = Partitions<D::Acc>;
    type Output = Partitions<D::Output>;

    fn supply(&self) -> Self::Acc {
        Partitions {
            matching: self.downstream.supply(),
            rest: self.downstream.supply(),
        }
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        let side = if (self.pred)(&item) {
            &mut acc.matching
        } else {
            &mut acc.rest
        };
        self.downstream.accumulate(side, item);
    }

    fn finish(&self, acc: Self::Acc) -> Result<Self::Output> {
        Ok(Partitions {
            matching: self.downstream.finish(acc.matching)?,
            rest: self.downstream.finish(acc.rest)?,
        })
    }
}
