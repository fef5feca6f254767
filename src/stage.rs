//! The pull protocol shared by every pipeline step.
//!
//! A stage answers `pull()` with `Ok(Some(x))` when an element is ready,
//! `Ok(None)` when it (and everything upstream of it) is exhausted, or an
//! error that aborts the terminal operation driving the chain.
//!
//! Stages are tagged with a closed [`StageKind`] so that the laziness of each
//! step is explicit:
//!
//! | Kind | Stages | Pulls upstream |
//! |---|---|---|
//! | `Source` | view / owned source | n/a |
//! | `PullThrough` | map, try_map, filter, try_filter, inspect, skip, limit | one at a time |
//! | `Expanding` | flat_map | one at a time, sub-sequence drained first |
//! | `Materializing` | distinct, sorted*, reverse | **everything, on first pull** |
//! | `Windowing` | sliding, fixed | up to the window size |

use crate::error::Result;
use crate::metrics::StageCounters;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// One step of a stream pipeline.
pub trait Stage<T> {
    /// Produce the next element, or `None` once exhausted.
    ///
    /// # Errors
    ///
    /// Whatever the stage, its upstream, or a caller-supplied function reports.
    fn pull(&mut self) -> Result<Option<T>>;

    /// How this stage consumes its upstream.
    fn kind(&self) -> StageKind {
        StageKind::PullThrough
    }
}

impl<T, S: Stage<T> + ?Sized> Stage<T> for Box<S> {
    fn pull(&mut self) -> Result<Option<T>> {
        (**self).pull()
    }

    fn kind(&self) -> StageKind {
        (**self).kind()
    }
}

/// The upstream end of a stage: whatever was built before it.
pub type Upstream<'a, T> = Box<dyn Stage<T> + 'a>;

/// Closed classification of stage behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum StageKind {
    /// Anchors the chain; has no upstream.
    Source,
    /// Decides per element whether and how to emit it.
    PullThrough,
    /// Expands one element into an ordered sub-sequence.
    Expanding,
    /// Drains the whole upstream on first pull (pipeline breaker).
    Materializing,
    /// Buffers a bounded window of elements.
    Windowing,
}

impl StageKind {
    /// Whether the stage must observe its entire upstream before emitting.
    #[must_use]
    pub const fn is_breaker(self) -> bool {
        matches!(self, Self::Materializing)
    }

    /// Short label used in explanations and metrics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::PullThrough => "PullThrough",
            Self::Expanding => "Expanding",
            Self::Materializing => "Materializing",
            Self::Windowing => "Windowing",
        }
    }

    /// Rough relative cost of the stage per element.
    #[must_use]
    pub const fn cost_hint(self) -> u8 {
        match self {
            Self::Source => 1,
            Self::PullThrough => 10,
            Self::Expanding => 20,
            Self::Windowing => 30,
            Self::Materializing => 100,
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static description of one appended stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StageInfo {
    /// Operation name (`"map"`, `"sliding"`, ...).
    pub name: &'static str,
    /// Behaviour class.
    pub kind: StageKind,
    /// Parameters worth showing (`"n=3"`), empty when there are none.
    pub detail: String,
}

impl StageInfo {
    pub(crate) fn new(name: &'static str, kind: StageKind) -> Self {
        Self {
            name,
            kind,
            detail: String::new(),
        }
    }

    pub(crate) fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

/// Wraps every stage in the chain: counts pulls and emissions, and keeps
/// reporting exhaustion once the wrapped stage has reported it.
pub(crate) struct Metered<S> {
    inner: S,
    counters: Rc<StageCounters>,
    done: bool,
}

impl<S> Metered<S> {
    pub(crate) const fn new(inner: S, counters: Rc<StageCounters>) -> Self {
        Self {
            inner,
            counters,
            done: false,
        }
    }
}

impl<T, S: Stage<T>> Stage<T> for Metered<S> {
    fn pull(&mut self) -> Result<Option<T>> {
        self.counters.record_pull();
        if self.done {
            return Ok(None);
        }
        let next = self.inner.pull()?;
        match next {
            Some(_) => self.counters.record_emit(),
            None => self.done = true,
        }
        Ok(next)
    }

    fn kind(&self) -> StageKind {
        self.inner.kind()
    }
}
