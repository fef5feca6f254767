//! Per-stage execution counters for a stream.
//!
//! Every stage appended to a [`Stream`](crate::Stream), the source included,
//! gets a pair of counters:
//!
//! - `pulls`: how many times downstream asked the stage for an element
//! - `emitted`: how many elements the stage actually produced
//!
//! The collector also records when the terminal operation started and ended.
//! It is shared with the stream, so a handle taken before the terminal
//! operation observes the final counts afterwards.
//!
//! # Example
//!
//! ```
//! use ironstream::Stream;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut s = Stream::from_vec((1..=100).collect::<Vec<i32>>()).limit(3);
//! let metrics = s.metrics();
//! let first = s.to_vec()?;
//! assert_eq!(first, vec![1, 2, 3]);
//!
//! // the source was asked for exactly three elements
//! assert_eq!(metrics.stage(0).map(|m| m.pulls), Some(3));
//! # Ok(())
//! # }
//! ```

use crate::stage::{StageInfo, StageKind};
use serde::Serialize;
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Live counters for a single stage.
#[derive(Debug, Default)]
pub struct StageCounters {
    pulls: Cell<u64>,
    emitted: Cell<u64>,
}

impl StageCounters {
    pub(crate) fn record_pull(&self) {
        self.pulls.set(self.pulls.get() + 1);
    }

    pub(crate) fn record_emit(&self) {
        self.emitted.set(self.emitted.get() + 1);
    }

    /// Requests received from downstream.
    #[must_use]
    pub fn pulls(&self) -> u64 {
        self.pulls.get()
    }

    /// Elements produced.
    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.emitted.get()
    }
}

/// Point-in-time copy of one stage's counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StageMetrics {
    /// Position in the chain; the source is 0.
    pub index: usize,
    /// Operation name.
    pub name: &'static str,
    /// Behaviour class.
    pub kind: StageKind,
    /// Requests received from downstream.
    pub pulls: u64,
    /// Elements produced.
    pub emitted: u64,
}

/// Shared, single-threaded metrics registry for one stream.
#[derive(Clone, Debug)]
pub struct MetricsCollector {
    inner: Rc<RefCell<MetricsInner>>,
}

#[derive(Debug)]
struct MetricsInner {
    label: String,
    stages: Vec<(StageInfo, Rc<StageCounters>)>,
    start_time: Option<Instant>,
    end_time: Option<Instant>,
}

impl MetricsCollector {
    /// Create an empty collector labelled `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MetricsInner {
                label: label.into(),
                stages: Vec::new(),
                start_time: None,
                end_time: None,
            })),
        }
    }

    /// Register the next stage and hand back its counters.
    pub(crate) fn register(&self, info: StageInfo) -> Rc<StageCounters> {
        let counters = Rc::new(StageCounters::default());
        self.inner
            .borrow_mut()
            .stages
            .push((info, Rc::clone(&counters)));
        counters
    }

    pub(crate) fn set_label(&self, label: &str) {
        label.clone_into(&mut self.inner.borrow_mut().label);
    }

    /// The stream name this collector reports under.
    #[must_use]
    pub fn label(&self) -> String {
        self.inner.borrow().label.clone()
    }

    /// Record the start of the terminal operation.
    pub fn record_start(&self) {
        self.inner.borrow_mut().start_time = Some(Instant::now());
    }

    /// Record the end of the terminal operation.
    pub fn record_end(&self) {
        self.inner.borrow_mut().end_time = Some(Instant::now());
    }

    /// Wall time spent in the terminal operation, once it has finished.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        let inner = self.inner.borrow();
        match (inner.start_time, inner.end_time) {
            (Some(start), Some(end)) => Some(end.duration_since(start)),
            _ => None,
        }
    }

    /// Number of stages registered, source included.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.inner.borrow().stages.len()
    }

    /// Counters of the stage at `index` (the source is 0).
    #[must_use]
    pub fn stage(&self, index: usize) -> Option<StageMetrics> {
        let inner = self.inner.borrow();
        inner
            .stages
            .get(index)
            .map(|(info, c)| Self::metrics_of(index, info, c))
    }

    /// Counters of every stage, in chain order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<StageMetrics> {
        let inner = self.inner.borrow();
        inner
            .stages
            .iter()
            .enumerate()
            .map(|(i, (info, c))| Self::metrics_of(i, info, c))
            .collect()
    }

    fn metrics_of(index: usize, info: &StageInfo, c: &StageCounters) -> StageMetrics {
        StageMetrics {
            index,
            name: info.name,
            kind: info.kind,
            pulls: c.pulls(),
            emitted: c.emitted(),
        }
    }

    /// All metrics as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let stages: Vec<Value> = self
            .snapshot()
            .into_iter()
            .map(|m| {
                json!({
                    "index": m.index,
                    "name": m.name,
                    "kind": m.kind.label(),
                    "pulls": m.pulls,
                    "emitted": m.emitted,
                })
            })
            .collect();

        let mut obj = serde_json::Map::new();
        obj.insert("name".to_string(), json!(self.label()));
        if let Some(elapsed) = self.elapsed() {
            obj.insert(
                "execution_time_ms".to_string(),
                json!(elapsed.as_millis()),
            );
        }
        obj.insert("stages".to_string(), Value::Array(stages));
        Value::Object(obj)
    }

    /// Print a human-readable report to stdout.
    pub fn print(&self) {
        println!("\n========== Stream Metrics: {} ==========", self.label());
        if let Some(elapsed) = self.elapsed() {
            println!(
                "Execution Time: {:.3}s ({} ms)",
                elapsed.as_secs_f64(),
                elapsed.as_millis()
            );
            println!("--------------------------------------");
        }
        for m in self.snapshot() {
            println!(
                "[{}] {:<12} {:<14} pulls={:<8} emitted={}",
                m.index,
                m.name,
                m.kind.label(),
                m.pulls,
                m.emitted
            );
        }
        println!("======================================\n");
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new("stream")
    }
}
