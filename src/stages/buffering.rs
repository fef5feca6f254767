//! Pipeline breakers: stages that drain their whole upstream on first pull.
//!
//! Nothing happens when these stages are appended. The first `pull()` reads
//! the upstream to exhaustion into an internal buffer; every later pull serves
//! from that buffer without touching the upstream again.

use crate::error::Result;
use crate::stage::{Stage, StageKind, Upstream};
use indexmap::IndexSet;
use std::cmp::Ordering;
use std::hash::Hash;
use std::vec;

fn drain_all<T>(upstream: &mut Upstream<'_, T>) -> Result<Vec<T>> {
    let mut out = Vec::new();
    while let Some(x) = upstream.pull()? {
        out.push(x);
    }
    Ok(out)
}

/* ===================== Distinct ===================== */

/// Drops repeated elements; the first occurrence keeps its position.
pub struct Distinct<'a, T> {
    upstream: Upstream<'a, T>,
    served: Option<indexmap::set::IntoIter<T>>,
}

impl<'a, T> Distinct<'a, T> {
    pub fn new(upstream: Upstream<'a, T>) -> Self {
        Self {
            upstream,
            served: None,
        }
    }
}

impl<T: Eq + Hash> Stage<T> for Distinct<'_, T> {
    fn pull(&mut self) -> Result<Option<T>> {
        if self.served.is_none() {
            let mut seen = IndexSet::new();
            while let Some(x) = self.upstream.pull()? {
                seen.insert(x);
            }
            self.served = Some(seen.into_iter());
        }
        Ok(self.served.as_mut().and_then(Iterator::next))
    }

    fn kind(&self) -> StageKind {
        StageKind::Materializing
    }
}

/* ===================== Sorted ===================== */

/// Stable sort by a comparator. Equal elements keep their upstream order.
pub struct Sorted<'a, T, C> {
    upstream: Upstream<'a, T>,
    cmp: C,
    served: Option<vec::IntoIter<T>>,
}

impl<'a, T, C> Sorted<'a, T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    pub fn new(upstream: Upstream<'a, T>, cmp: C) -> Self {
        Self {
            upstream,
            cmp,
            served: None,
        }
    }
}

impl<T, C> Stage<T> for Sorted<'_, T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    fn pull(&mut self) -> Result<Option<T>> {
        if self.served.is_none() {
            let mut all = drain_all(&mut self.upstream)?;
            all.sort_by(&mut self.cmp);
            self.served = Some(all.into_iter());
        }
        Ok(self.served.as_mut().and_then(Iterator::next))
    }

    fn kind(&self) -> StageKind {
        StageKind::Materializing
    }
}

/* ===================== Reverse ===================== */

/// Emits the upstream elements last to first.
pub struct Reverse<'a, T> {
    upstream: Upstream<'a, T>,
    served: Option<vec::IntoIter<T>>,
}

impl<'a, T> Reverse<'a, T> {
    pub fn new(upstream: Upstream<'a, T>) -> Self {
        Self {
            upstream,
            served: None,
        }
    }
}

impl<T> Stage<T> for Reverse<'_, T> {
    fn pull(&mut self) -> Result<Option<T>> {
        if self.served.is_none() {
            let mut all = drain_all(&mut self.upstream)?;
            all.reverse();
            self.served = Some(all.into_iter());
        }
        Ok(self.served.as_mut().and_then(Iterator::next))
    }

    fn kind(&self) -> StageKind {
        StageKind::Materializing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SequenceSource;

    #[test]
    fn sort_is_stable_for_equal_keys() -> anyhow::Result<()> {
        let src: Upstream<'_, (i32, char)> =
            Box::new(SequenceSource::from_vec(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]));
        let mut s = Sorted::new(src, |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        let mut out = Vec::new();
        while let Some(x) = s.pull()? {
            out.push(x.1);
        }
        assert_eq!(out, vec!['b', 'd', 'a', 'c']);
        Ok(())
    }
}
