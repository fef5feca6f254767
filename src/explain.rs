//! Human-readable description of a stream's stage chain.
//!
//! [`Stream::explain`](crate::Stream::explain) lists every stage in order with
//! its [`StageKind`], and counts the pipeline breakers: stages that drain their
//! whole upstream on first pull instead of pulling element by element.

use crate::stage::{StageInfo, StageKind};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FormatResult};

/// A single step of the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExplainStep {
    /// 1-based position; the source is step 1.
    pub step: usize,
    /// Operation name.
    pub stage: &'static str,
    /// Behaviour class.
    pub kind: StageKind,
    /// Human-readable description of the operation.
    pub description: String,
    /// Whether the stage drains its entire upstream on first pull.
    pub is_breaker: bool,
    /// Rough relative cost per element.
    pub cost_hint: u8,
}

impl ExplainStep {
    pub(crate) fn from_info(step: usize, info: &StageInfo) -> Self {
        let what = match info.kind {
            StageKind::Source => "Read source",
            StageKind::PullThrough => "Pull one element at a time",
            StageKind::Expanding => "Expand each element into a sub-sequence",
            StageKind::Materializing => "Drain the whole upstream on first pull",
            StageKind::Windowing => "Buffer a bounded window",
        };
        let description = if info.detail.is_empty() {
            what.to_string()
        } else {
            format!("{what} ({})", info.detail)
        };
        Self {
            step,
            stage: info.name,
            kind: info.kind,
            description,
            is_breaker: info.kind.is_breaker(),
            cost_hint: info.kind.cost_hint(),
        }
    }
}

/// The full chain description returned by `Stream::explain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Explanation {
    /// Stream name from its config.
    pub name: String,
    /// Number of elements in the source.
    pub source_len: usize,
    /// Stages in pull order from the source outwards.
    pub steps: Vec<ExplainStep>,
    /// How many steps are pipeline breakers.
    pub breakers: usize,
}

impl Explanation {
    pub(crate) fn new(name: String, source_len: usize, steps: Vec<ExplainStep>) -> Self {
        let breakers = steps.iter().filter(|s| s.is_breaker).count();
        Self {
            name,
            source_len,
            steps,
            breakers,
        }
    }

    /// Whether every stage pulls lazily.
    #[must_use]
    pub const fn is_fully_lazy(&self) -> bool {
        self.breakers == 0
    }

    /// Stage names in chain order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.stage).collect()
    }
}

impl Display for Explanation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(
            f,
            "╔═══════════════════════════════════════════════════════════════╗"
        )?;
        writeln!(f, "║  STREAM PLAN: {:<48}║", self.name)?;
        writeln!(
            f,
            "╚═══════════════════════════════════════════════════════════════╝"
        )?;
        writeln!(f, "│ Source Size:       {:>10}", self.source_len)?;
        writeln!(f, "│ Stages:            {:>10}", self.steps.len())?;
        writeln!(f, "│ Pipeline Breakers: {:>10}", self.breakers)?;
        writeln!(
            f,
            "┌─ STAGES ─────────────────────────────────────────────────────┐"
        )?;
        for step in &self.steps {
            let marker = if step.is_breaker { " [BREAKER]" } else { "" };
            writeln!(f, "│")?;
            writeln!(
                f,
                "│ Step {}: {} ({}){marker}",
                step.step, step.stage, step.kind
            )?;
            writeln!(f, "│   {}", step.description)?;
            writeln!(f, "│   Cost: {}", step.cost_hint)?;
        }
        writeln!(f, "│")?;
        writeln!(
            f,
            "└──────────────────────────────────────────────────────────────┘"
        )
    }
}
