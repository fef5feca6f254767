//! # Ironstream
//!
//! A **lazy stream pipeline** library for Rust with a composable collector
//! framework. Build a declarative chain of transformations over any container,
//! then run one terminal operation that pulls elements through the chain
//! exactly once.
//!
//! ## Key Features
//!
//! - **Pull-based, single pass** - nothing runs until a terminal operation asks for elements
//! - **Explicit laziness** - stages declare whether they pull element by element or drain their upstream
//! - **Windows** - sliding and fixed windows with an explicit trailing-window policy
//! - **Collectors** - grouping (any depth), partitioning, joining, counting, summing, averaging, mapping
//! - **Any container** - read from and collect into anything implementing [`Container`]
//! - **Spent-state checks** - a consumed stream refuses to run again instead of yielding garbage
//! - **Introspection** - per-stage metrics and a printable plan via [`Stream::explain`]
//!
//! ## Quick Start
//!
//! ```
//! use ironstream::*;
//! use ironstream::collectors::{grouping_by_with, joining_with};
//!
//! # fn main() -> Result<()> {
//! let lines = vec!["the quick brown fox", "jumps over", "the lazy dog"];
//!
//! // words grouped by length, each group joined with commas
//! let by_len = Stream::view(&lines)
//!     .flat_map(|l| l.split_whitespace().collect::<Vec<_>>())
//!     .distinct()
//!     .collect(grouping_by_with(|w: &&str| w.len(), joining_with(",")))?;
//!
//! assert_eq!(by_len[&3usize], "the,fox,dog");
//! assert_eq!(by_len[&5usize], "quick,brown,jumps");
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Stream
//!
//! A [`Stream<'a, T>`](Stream) is a chain of stages anchored on a
//! [`SequenceSource`]. A source either **views** a borrowed container
//! ([`Stream::view`]) or **owns** its elements ([`Stream::from_vec`],
//! [`Stream::owned`]). Intermediate operations consume the stream and return
//! a longer one.
//!
//! ### Stages
//!
//! Every stage has a [`StageKind`]:
//! - *pull-through*: [`map`](Stream::map), [`filter`](Stream::filter),
//!   [`try_map`](Stream::try_map), [`try_filter`](Stream::try_filter),
//!   [`inspect`](Stream::inspect), [`skip`](Stream::skip), [`limit`](Stream::limit)
//! - *expanding*: [`flat_map`](Stream::flat_map)
//! - *materializing* (pipeline breakers): [`distinct`](Stream::distinct),
//!   [`sorted`](Stream::sorted) and variants, [`reverse`](Stream::reverse)
//! - *windowing*: [`sliding`](Stream::sliding), [`fixed`](Stream::fixed)
//!
//! ### Terminal operations
//!
//! `reduce`, `for_each`, `any_match` / `all_match` / `none_match`,
//! `find_first` / `find_last`, `head` / `tail`, `collect`, `count`, `sum`,
//! `min` / `max`, `to_vec`, `to_container`. See [`terminal`].
//!
//! ### Collectors
//!
//! A [`Collector`] is a supplier / accumulator / finisher triple. The
//! [`collectors`] module holds the standard library; grouping and partitioning
//! accept any collector as downstream.
//!
//! ## Errors
//!
//! Everything fallible returns [`Result<T>`](Result) with a [`StreamError`].
//! Errors from caller functions (`try_map`, `try_filter`, `try_for_each`) are
//! carried unmodified as [`StreamError::Callback`].

pub mod collector;
pub mod collectors;
pub mod config;
pub mod container;
pub mod error;
pub mod explain;
pub mod metrics;
pub mod source;
pub mod stage;
pub mod stages;
pub mod stream;
pub mod terminal;
pub mod testing;

pub use collector::{Collector, FnCollector};
pub use collectors::Partitions;
pub use config::StreamConfig;
pub use container::{Container, HashOrder, InsertionOrder, KeyOrder, KeyedMap, MapKind};
pub use error::{Result, StreamError};
pub use explain::{ExplainStep, Explanation};
pub use metrics::{MetricsCollector, StageMetrics};
pub use source::SequenceSource;
pub use stage::{Stage, StageInfo, StageKind};
pub use stream::{from_vec, Stream};
