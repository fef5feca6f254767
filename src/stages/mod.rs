//! Concrete stage implementations, one struct per behaviour.
//!
//! - [`stateless`]: map, try_map, filter, try_filter, inspect, skip, limit
//! - [`expand`]: flat_map
//! - [`buffering`]: distinct, sorted, reverse (pipeline breakers)
//! - [`windowing`]: sliding and fixed windows

pub mod buffering;
pub mod expand;
pub mod stateless;
pub mod windowing;

pub use buffering::{Distinct, Reverse, Sorted};
pub use expand::FlatMap;
pub use stateless::{Filter, Inspect, Limit, Map, Skip, TryFilter, TryMap};
pub use windowing::{FixedWindow, SlidingWindow};
