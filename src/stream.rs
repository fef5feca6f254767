//! The stream pipeline and its fluent builder surface.
//!
//! A [`Stream`] is an ordered chain of stages anchored on a
//! [`SequenceSource`]. Intermediate operations consume the stream and return
//! a longer one; nothing runs until a terminal operation (see the
//! [`terminal`](crate::terminal) module) pulls from the last stage.
//!
//! Stages are lazy except for the pipeline breakers [`distinct`],
//! [`sorted`] (and its variants) and [`reverse`], which drain their whole
//! upstream on the first pull. [`explain`] reports which stages those are.
//!
//! [`distinct`]: Stream::distinct
//! [`sorted`]: Stream::sorted
//! [`reverse`]: Stream::reverse
//! [`explain`]: Stream::explain

use crate::config::StreamConfig;
use crate::container::Container;
use crate::error::{Result, StreamError};
use crate::explain::{ExplainStep, Explanation};
use crate::metrics::MetricsCollector;
use crate::source::SequenceSource;
use crate::stage::{Metered, Stage, StageInfo, StageKind, Upstream};
use crate::stages::{
    Distinct, FixedWindow, FlatMap, Filter, Inspect, Limit, Map, Reverse, SlidingWindow, Skip,
    Sorted, TryFilter, TryMap,
};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// A lazy, single-pass pipeline of elements of type `T`.
///
/// `'a` is the lifetime of anything the pipeline borrows: a viewed
/// container, or state captured by reference in closures.
pub struct Stream<'a, T> {
    stage: Upstream<'a, T>,
    chain: Vec<StageInfo>,
    config: StreamConfig,
    metrics: MetricsCollector,
    source_len: usize,
    spent: bool,
}

/// Build an owned stream from a vector.
///
/// ```
/// use ironstream::from_vec;
///
/// # fn main() -> anyhow::Result<()> {
/// let evens = from_vec(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0).to_vec()?;
/// assert_eq!(evens, vec![2, 4]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn from_vec<'a, T: 'a>(data: Vec<T>) -> Stream<'a, T> {
    Stream::from_vec(data)
}

impl<'a, T: 'a> Stream<'a, T> {
    /// Anchor a new stream on `source`.
    #[must_use]
    pub fn from_source(source: SequenceSource<'a, T>) -> Self {
        let metrics = MetricsCollector::default();
        let name = if source.is_view() { "view" } else { "owned" };
        let source_len = source.initial_len();
        let info =
            StageInfo::new(name, StageKind::Source).with_detail(format!("{source_len} elements"));
        let counters = metrics.register(info.clone());
        Self {
            stage: Box::new(Metered::new(source, counters)),
            chain: vec![info],
            config: StreamConfig::default(),
            metrics,
            source_len,
            spent: false,
        }
    }

    /// Stream the elements of `data`, taking ownership.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_source(SequenceSource::from_vec(data))
    }

    /// Stream a copy of `container`, taken now.
    #[must_use]
    pub fn owned<C>(container: &C) -> Self
    where
        C: Container<T> + ?Sized,
        T: Clone,
    {
        Self::from_source(SequenceSource::owned(container))
    }

    /// Stream a borrowed `container`; elements are cloned as they are pulled.
    ///
    /// The stream cannot outlive the container, and the container cannot be
    /// modified while the stream exists.
    #[must_use]
    pub fn view<C>(container: &'a C) -> Self
    where
        C: Container<T> + ?Sized,
        T: Clone,
    {
        Self::from_source(SequenceSource::view(container))
    }

    /// Append one stage built on top of the current chain.
    pub(crate) fn append<U, S>(
        self,
        info: StageInfo,
        build: impl FnOnce(Upstream<'a, T>) -> S,
    ) -> Stream<'a, U>
    where
        U: 'a,
        S: Stage<U> + 'a,
    {
        let Self {
            stage,
            mut chain,
            config,
            metrics,
            source_len,
            spent,
        } = self;
        let counters = metrics.register(info.clone());
        chain.push(info);
        Stream {
            stage: Box::new(Metered::new(build(stage), counters)),
            chain,
            config,
            metrics,
            source_len,
            spent,
        }
    }

    /// Run `run` against the last stage, once.
    ///
    /// Marks the stream spent before running, so a failed terminal operation
    /// leaves it spent too.
    pub(crate) fn drive<R>(
        &mut self,
        operation: &'static str,
        run: impl FnOnce(&mut Upstream<'a, T>) -> Result<R>,
    ) -> Result<R> {
        if self.spent {
            return Err(StreamError::SpentPipeline { operation });
        }
        self.spent = true;
        self.metrics.record_start();
        let out = run(&mut self.stage);
        self.metrics.record_end();
        if self.config.print_metrics {
            self.metrics.print();
        }
        out
    }

    /* ---------- pull-through ---------- */

    /// Transform every element.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Stream<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> U + 'a,
    {
        self.append(StageInfo::new("map", StageKind::PullThrough), |up| {
            Map::new(up, f)
        })
    }

    /// Transform every element with a fallible function.
    ///
    /// The first `Err` aborts the terminal operation with
    /// [`StreamError::Callback`].
    #[must_use]
    pub fn try_map<U, F>(self, f: F) -> Stream<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> anyhow::Result<U> + 'a,
    {
        self.append(StageInfo::new("try_map", StageKind::PullThrough), |up| {
            TryMap::new(up, f)
        })
    }

    /// Keep elements matching `pred`.
    #[must_use]
    pub fn filter<P>(self, pred: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.append(StageInfo::new("filter", StageKind::PullThrough), |up| {
            Filter::new(up, pred)
        })
    }

    /// Keep elements for which a fallible `pred` returns `Ok(true)`.
    #[must_use]
    pub fn try_filter<P>(self, pred: P) -> Self
    where
        P: FnMut(&T) -> anyhow::Result<bool> + 'a,
    {
        self.append(StageInfo::new("try_filter", StageKind::PullThrough), |up| {
            TryFilter::new(up, pred)
        })
    }

    /// Observe each element without changing it.
    #[must_use]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnMut(&T) + 'a,
    {
        self.append(StageInfo::new("inspect", StageKind::PullThrough), |up| {
            Inspect::new(up, f)
        })
    }

    /// Drop the first `n` elements.
    #[must_use]
    pub fn skip(self, n: usize) -> Self {
        self.append(
            StageInfo::new("skip", StageKind::PullThrough).with_detail(format!("n={n}")),
            |up| Skip::new(up, n),
        )
    }

    /// Keep at most `n` elements. Upstream is never pulled past the quota.
    #[must_use]
    pub fn limit(self, n: usize) -> Self {
        self.append(
            StageInfo::new("limit", StageKind::PullThrough).with_detail(format!("n={n}")),
            |up| Limit::new(up, n),
        )
    }

    /* ---------- expanding ---------- */

    /// Replace each element with the items of `f(element)`, in order.
    #[must_use]
    pub fn flat_map<I, F>(self, f: F) -> Stream<'a, I::Item>
    where
        I: IntoIterator + 'a,
        I::IntoIter: 'a,
        I::Item: 'a,
        F: FnMut(T) -> I + 'a,
    {
        self.append(StageInfo::new("flat_map", StageKind::Expanding), |up| {
            FlatMap::new(up, f)
        })
    }

    /* ---------- materializing ---------- */

    /// Drop repeated elements, keeping first occurrences in order.
    ///
    /// Drains the whole upstream on first pull.
    #[must_use]
    pub fn distinct(self) -> Self
    where
        T: Eq + Hash,
    {
        self.append(StageInfo::new("distinct", StageKind::Materializing), |up| {
            Distinct::new(up)
        })
    }

    /// Stable sort by natural order.
    ///
    /// Drains the whole upstream on first pull.
    #[must_use]
    pub fn sorted(self) -> Self
    where
        T: Ord,
    {
        self.append(
            StageInfo::new("sorted", StageKind::Materializing).with_detail("natural order"),
            |up| Sorted::new(up, |a: &T, b: &T| a.cmp(b)),
        )
    }

    /// Stable sort by a comparator.
    #[must_use]
    pub fn sorted_by<C>(self, cmp: C) -> Self
    where
        C: FnMut(&T, &T) -> Ordering + 'a,
    {
        self.append(
            StageInfo::new("sorted", StageKind::Materializing).with_detail("comparator"),
            |up| Sorted::new(up, cmp),
        )
    }

    /// Stable sort by an extracted key.
    #[must_use]
    pub fn sorted_by_key<K, F>(self, mut key: F) -> Self
    where
        K: Ord + 'a,
        F: FnMut(&T) -> K + 'a,
    {
        self.append(
            StageInfo::new("sorted", StageKind::Materializing).with_detail("key"),
            |up| Sorted::new(up, move |a: &T, b: &T| key(a).cmp(&key(b))),
        )
    }

    /// Stable sort by an `f64` key under a total order; NaN keys sort last.
    #[must_use]
    pub fn sorted_by_float_key<F>(self, mut key: F) -> Self
    where
        F: FnMut(&T) -> f64 + 'a,
    {
        self.append(
            StageInfo::new("sorted", StageKind::Materializing).with_detail("f64 key"),
            |up| {
                Sorted::new(up, move |a: &T, b: &T| {
                    OrderedFloat(key(a)).cmp(&OrderedFloat(key(b)))
                })
            },
        )
    }

    /// Emit elements last to first.
    ///
    /// Drains the whole upstream on first pull.
    #[must_use]
    pub fn reverse(self) -> Self {
        self.append(StageInfo::new("reverse", StageKind::Materializing), |up| {
            Reverse::new(up)
        })
    }

    /* ---------- windowing ---------- */

    /// Overlapping windows of exactly `k` consecutive elements.
    ///
    /// `L` elements produce `L - k + 1` windows when `L >= k`, none otherwise.
    /// `k == 0` fails the terminal operation with
    /// [`StreamError::InvalidConfiguration`].
    #[must_use]
    pub fn sliding(self, k: usize) -> Stream<'a, Vec<T>>
    where
        T: Clone,
    {
        self.append(
            StageInfo::new("sliding", StageKind::Windowing).with_detail(format!("k={k}")),
            |up| SlidingWindow::new(up, k),
        )
    }

    /// Non-overlapping batches of `k` elements; a shorter final batch is
    /// emitted when elements remain.
    ///
    /// `k == 0` fails the terminal operation with
    /// [`StreamError::InvalidConfiguration`].
    #[must_use]
    pub fn fixed(self, k: usize) -> Stream<'a, Vec<T>> {
        self.append(
            StageInfo::new("fixed", StageKind::Windowing).with_detail(format!("k={k}")),
            |up| FixedWindow::new(up, k),
        )
    }

    /* ---------- settings & introspection ---------- */

    /// Apply `config` to this stream.
    #[must_use]
    pub fn with_config(mut self, config: StreamConfig) -> Self {
        self.metrics.set_label(&config.name);
        self.config = config;
        self
    }

    /// Settings in effect.
    #[must_use]
    pub const fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Handle on the per-stage counters; stays valid after the stream is spent.
    #[must_use]
    pub fn metrics(&self) -> MetricsCollector {
        self.metrics.clone()
    }

    /// Whether a terminal operation has already run.
    #[must_use]
    pub const fn is_spent(&self) -> bool {
        self.spent
    }

    /// Describe the stage chain without running it.
    #[must_use]
    pub fn explain(&self) -> Explanation {
        let steps: Vec<ExplainStep> = self
            .chain
            .iter()
            .enumerate()
            .map(|(idx, info)| ExplainStep::from_info(idx + 1, info))
            .collect();
        Explanation::new(self.config.name.clone(), self.source_len, steps)
    }
}

impl<'a, T: 'a> FromIterator<T> for Stream<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> fmt::Debug for Stream<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("name", &self.config.name)
            .field(
                "chain",
                &self.chain.iter().map(|s| s.name).collect::<Vec<_>>(),
            )
            .field("spent", &self.spent)
            .finish_non_exhaustive()
    }
}
