//! Pull-through stages: each upstream element is handled on its own.

use crate::error::Result;
use crate::stage::{Stage, Upstream};

/* ===================== Map ===================== */

/// Applies `f` to every element.
pub struct Map<'a, T, F> {
    upstream: Upstream<'a, T>,
    f: F,
}

impl<'a, T, F> Map<'a, T, F> {
    pub fn new(upstream: Upstream<'a, T>, f: F) -> Self {
        Self { upstream, f }
    }
}

impl<T, U, F> Stage<U> for Map<'_, T, F>
where
    F: FnMut(T) -> U,
{
    fn pull(&mut self) -> Result<Option<U>> {
        Ok(self.upstream.pull()?.map(&mut self.f))
    }
}

/* ===================== TryMap ===================== */

/// Applies a fallible `f`; the first error aborts the pipeline.
pub struct TryMap<'a, T, F> {
    upstream: Upstream<'a, T>,
    f: F,
}

impl<'a, T, F> TryMap<'a, T, F> {
    pub fn new(upstream: Upstream<'a, T>, f: F) -> Self {
        Self { upstream, f }
    }
}

impl<T, U, F> Stage<U> for TryMap<'_, T, F>
where
    F: FnMut(T) -> anyhow::Result<U>,
{
    fn pull(&mut self) -> Result<Option<U>> {
        match self.upstream.pull()? {
            Some(x) => Ok(Some((self.f)(x)?)),
            None => Ok(None),
        }
    }
}

/* ===================== Filter ===================== */

/// Keeps elements for which `pred` holds.
pub struct Filter<'a, T, P> {
    upstream: Upstream<'a, T>,
    pred: P,
}

impl<'a, T, P> Filter<'a, T, P> {
    pub fn new(upstream: Upstream<'a, T>, pred: P) -> Self {
        Self { upstream, pred }
    }
}

impl<T, P> Stage<T> for Filter<'_, T, P>
where
    P: FnMut(&T) -> bool,
{
    fn pull(&mut self) -> Result<Option<T>> {
        while let Some(x) = self.upstream.pull()? {
            if (self.pred)(&x) {
                return Ok(Some(x));
            }
        }
        Ok(None)
    }
}

/* ===================== TryFilter ===================== */

/// Keeps elements for which a fallible `pred` returns `Ok(true)`.
pub struct TryFilter<'a, T, P> {
    upstream: Upstream<'a, T>,
    pred: P,
}

impl<'a, T, P> TryFilter<'a, T, P> {
    pub fn new(upstream: Upstream<'a, T>, pred: P) -> Self {
        Self { upstream, pred }
    }
}

impl<T, P> Stage<T> for TryFilter<'_, T, P>
where
    P: FnMut(&T) -> anyhow::Result<bool>,
{
    fn pull(&mut self) -> Result<Option<T>> {
        while let Some(x) = self.upstream.pull()? {
            if (self.pred)(&x)? {
                return Ok(Some(x));
            }
        }
        Ok(None)
    }
}

/* ===================== Inspect ===================== */

/// Calls `f` on each element as it passes through unchanged.
pub struct Inspect<'a, T, F> {
    upstream: Upstream<'a, T>,
    f: F,
}

impl<'a, T, F> Inspect<'a, T, F> {
    pub fn new(upstream: Upstream<'a, T>, f: F) -> Self {
        Self { upstream, f }
    }
}

impl<T, F> Stage<T> for Inspect<'_, T, F>
where
    F: FnMut(&T),
{
    fn pull(&mut self) -> Result<Option<T>> {
        let next = self.upstream.pull()?;
        if let Some(x) = &next {
            (self.f)(x);
        }
        Ok(next)
    }
}

/* ===================== Skip ===================== */

/// Discards the first `n` elements, then passes everything through.
pub struct Skip<'a, T> {
    upstream: Upstream<'a, T>,
    remaining: usize,
}

impl<'a, T> Skip<'a, T> {
    pub fn new(upstream: Upstream<'a, T>, n: usize) -> Self {
        Self {
            upstream,
            remaining: n,
        }
    }
}

impl<T> Stage<T> for Skip<'_, T> {
    fn pull(&mut self) -> Result<Option<T>> {
        while self.remaining > 0 {
            if self.upstream.pull()?.is_none() {
                self.remaining = 0;
                return Ok(None);
            }
            self.remaining -= 1;
        }
        self.upstream.pull()
    }
}

/* ===================== Limit ===================== */

/// Emits at most `n` elements and never pulls upstream past that quota.
pub struct Limit<'a, T> {
    upstream: Upstream<'a, T>,
    remaining: usize,
}

impl<'a, T> Limit<'a, T> {
    pub fn new(upstream: Upstream<'a, T>, n: usize) -> Self {
        Self {
            upstream,
            remaining: n,
        }
    }
}

impl<T> Stage<T> for Limit<'_, T> {
    fn pull(&mut self) -> Result<Option<T>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        let next = self.upstream.pull()?;
        // an exhausted upstream ends the quota too
        self.remaining = if next.is_some() { self.remaining - 1 } else { 0 };
        Ok(next)
    }
}
