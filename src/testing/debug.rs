//! Debug utilities for inspecting streams while they run.
//!
//! These add pass-through stages that print to stderr as elements flow by.
//! They never change what the stream yields.

use crate::error::Result;
use crate::stage::{Stage, StageInfo, StageKind, Upstream};
use crate::stream::Stream;
use std::fmt::Debug;

enum Report {
    /// Print up to `limit` elements, then a summary at exhaustion.
    Elements { limit: usize },
    /// Print only the element count at exhaustion.
    Count,
}

struct DebugStage<'a, T, F> {
    upstream: Upstream<'a, T>,
    label: String,
    report: Report,
    inspector: F,
    seen: usize,
}

impl<T: Debug, F: FnMut(&T)> Stage<T> for DebugStage<'_, T, F> {
    fn pull(&mut self) -> Result<Option<T>> {
        let next = self.upstream.pull()?;
        match (&next, &self.report) {
            (Some(item), Report::Elements { limit }) => {
                (self.inspector)(item);
                if self.seen < *limit {
                    eprintln!("[Debug: {}] [{}]: {:?}", self.label, self.seen, item);
                }
            }
            (Some(item), Report::Count) => (self.inspector)(item),
            (None, Report::Elements { limit }) => {
                if self.seen > *limit {
                    eprintln!(
                        "[Debug: {}] ... ({} more elements)",
                        self.label,
                        self.seen - limit
                    );
                }
            }
            (None, Report::Count) => {
                eprintln!("[Debug: {}] Count: {} elements", self.label, self.seen);
            }
        }
        if next.is_some() {
            self.seen += 1;
        }
        Ok(next)
    }
}

/// Extension trait adding debug stages to [`Stream`].
pub trait StreamDebugExt<'a, T> {
    /// Print elements as they pass, up to the stream's
    /// `debug_sample_limit` (10 by default).
    ///
    /// # Example
    ///
    /// ```
    /// use ironstream::Stream;
    /// use ironstream::testing::StreamDebugExt;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let out = Stream::from_vec(vec![1, 2, 3])
    ///     .debug_inspect("after source")
    ///     .map(|x| x * 2)
    ///     .debug_inspect("after map")
    ///     .to_vec()?;
    /// assert_eq!(out, vec![2, 4, 6]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    fn debug_inspect(self, label: &str) -> Self;

    /// Like [`debug_inspect`](Self::debug_inspect), also calling `inspector`
    /// on every element.
    #[must_use]
    fn debug_inspect_with<F>(self, label: &str, inspector: F) -> Self
    where
        F: FnMut(&T) + 'a;

    /// Print the number of elements that passed, once the stream is exhausted.
    #[must_use]
    fn debug_count(self, label: &str) -> Self;

    /// Print the first `n` elements.
    #[must_use]
    fn debug_sample(self, n: usize, label: &str) -> Self;
}

impl<'a, T: Debug + 'a> StreamDebugExt<'a, T> for Stream<'a, T> {
    fn debug_inspect(self, label: &str) -> Self {
        self.debug_inspect_with(label, |_| {})
    }

    fn debug_inspect_with<F>(self, label: &str, inspector: F) -> Self
    where
        F: FnMut(&T) + 'a,
    {
        let limit = self.config().debug_sample_limit;
        attach(self, "debug_inspect", label, Report::Elements { limit }, inspector)
    }

    fn debug_count(self, label: &str) -> Self {
        attach(self, "debug_count", label, Report::Count, |_: &T| {})
    }

    fn debug_sample(self, n: usize, label: &str) -> Self {
        attach(
            self,
            "debug_sample",
            label,
            Report::Elements { limit: n },
            |_: &T| {},
        )
    }
}

fn attach<'a, T, F>(
    stream: Stream<'a, T>,
    name: &'static str,
    label: &str,
    report: Report,
    inspector: F,
) -> Stream<'a, T>
where
    T: Debug + 'a,
    F: FnMut(&T) + 'a,
{
    let label = label.to_string();
    stream.append(
        StageInfo::new(name, StageKind::PullThrough).with_detail(format!("label={label}")),
        move |upstream| DebugStage {
            upstream,
            label,
            report,
            inspector,
            seen: 0,
        },
    )
}
