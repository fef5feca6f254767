//! The standard collector library.
//!
//! Every collector here implements [`Collector`]; anything taking a
//! "downstream" collector accepts any of them, including another grouping.
//!
//! | Area | Collectors |
//! |---|---|
//! | containers | [`to_container`], [`to_vec`], [`to_set`], [`to_hash_set`], [`to_map`], [`to_map_merging`] |
//! | grouping | [`grouping_by`], [`grouping_by_with`], [`partitioning_by`], [`partitioning_by_with`] |
//! | text | [`joining`], [`joining_with`], [`joining_full`] |
//! | numeric | [`counting`], [`summing`], [`summing_by`], [`averaging`], [`AverageF64`] |
//! | order | [`max_by`], [`min_by`], [`Max`], [`Min`], [`reducing`], [`reducing_first`] |
//! | adapters | [`collecting_and_then`], [`mapping`], [`of`] |

pub mod adapters;
pub mod basic;
pub mod containers;
pub mod grouping;
pub mod joining;

pub use adapters::{collecting_and_then, mapping, CollectingAndThen, Mapping};
pub use basic::{
    averaging, counting, max_by, min_by, reducing, reducing_first, summing, summing_by, AverageF64,
    Averaging, Counting, Max, MaxBy, Min, MinBy, Reducing, ReducingFirst, Summing, SummingBy,
};
pub use containers::{
    to_container, to_hash_set, to_map, to_map_merging, to_set, to_vec, ToContainer, ToMap,
    ToMapMerging,
};
pub use grouping::{
    grouping_by, grouping_by_with, partitioning_by, partitioning_by_with, GroupingBy,
    PartitioningBy, Partitions,
};
pub use joining::{joining, joining_full, joining_with, JoinBuffer, Joining};

pub use crate::collector::FnCollector;

/// Build a collector from a supplier, an accumulator and a finisher.
///
/// ```
/// use ironstream::Stream;
/// use ironstream::collectors::of;
///
/// # fn main() -> anyhow::Result<()> {
/// let longest = of(
///     || 0usize,
///     |best: &mut usize, s: &str| *best = (*best).max(s.len()),
///     |best| best,
/// );
/// assert_eq!(Stream::from_vec(vec!["ab", "abcd", "a"]).collect(&longest)?, 4);
/// assert_eq!(Stream::from_vec(vec!["xyz"]).collect(&longest)?, 3);
/// # Ok(())
/// # }
/// ```
pub fn of<T, Acc, R, S, A, F>(supplier: S, accumulator: A, finisher: F) -> FnCollector<S, A, F>
where
    S: Fn() -> Acc,
    A: Fn(&mut Acc, T),
    F: Fn(Acc) -> R,
{
    FnCollector::new(supplier, accumulator, finisher)
}
