//! Windowing stages with a bounded buffer.
//!
//! - [`SlidingWindow`]: once `k` elements are buffered, every new element
//!   produces a snapshot of the last `k`. Fewer than `k` elements in total
//!   produce no windows.
//! - [`FixedWindow`]: consecutive, non-overlapping batches of `k`. A trailing
//!   partial batch is emitted at exhaustion when it holds at least one element.
//!
//! A window size of 0 is rejected with [`StreamError::InvalidConfiguration`]
//! on first pull.

use crate::error::{Result, StreamError};
use crate::stage::{Stage, StageKind, Upstream};
use std::collections::VecDeque;
use std::mem;

fn check_size(k: usize, stage: &str) -> Result<()> {
    if k == 0 {
        return Err(StreamError::invalid(format!(
            "{stage} window size must be at least 1"
        )));
    }
    Ok(())
}

/* ===================== SlidingWindow ===================== */

/// Overlapping windows of exactly `k` elements, advancing by one.
pub struct SlidingWindow<'a, T> {
    upstream: Upstream<'a, T>,
    k: usize,
    buf: VecDeque<T>,
}

impl<'a, T> SlidingWindow<'a, T> {
    pub fn new(upstream: Upstream<'a, T>, k: usize) -> Self {
        Self {
            upstream,
            k,
            buf: VecDeque::with_capacity(k),
        }
    }
}

impl<T: Clone> Stage<Vec<T>> for SlidingWindow<'_, T> {
    fn pull(&mut self) -> Result<Option<Vec<T>>> {
        check_size(self.k, "sliding")?;
        while let Some(x) = self.upstream.pull()? {
            if self.buf.len() == self.k {
                self.buf.pop_front();
            }
            self.buf.push_back(x);
            if self.buf.len() == self.k {
                return Ok(Some(self.buf.iter().cloned().collect()));
            }
        }
        Ok(None)
    }

    fn kind(&self) -> StageKind {
        StageKind::Windowing
    }
}

/* ===================== FixedWindow ===================== */

/// Non-overlapping batches of `k` elements; the last may be shorter.
pub struct FixedWindow<'a, T> {
    upstream: Upstream<'a, T>,
    k: usize,
    batch: Vec<T>,
}

impl<'a, T> FixedWindow<'a, T> {
    pub fn new(upstream: Upstream<'a, T>, k: usize) -> Self {
        Self {
            upstream,
            k,
            batch: Vec::new(),
        }
    }
}

impl<T> Stage<Vec<T>> for FixedWindow<'_, T> {
    fn pull(&mut self) -> Result<Option<Vec<T>>> {
        check_size(self.k, "fixed")?;
        while let Some(x) = self.upstream.pull()? {
            self.batch.push(x);
            if self.batch.len() == self.k {
                return Ok(Some(mem::replace(
                    &mut self.batch,
                    Vec::with_capacity(self.k),
                )));
            }
        }
        if self.batch.is_empty() {
            Ok(None)
        } else {
            Ok(Some(mem::take(&mut self.batch)))
        }
    }

    fn kind(&self) -> StageKind {
        StageKind::Windowing
    }
}
