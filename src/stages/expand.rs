//! The expanding stage: one element in, an ordered sub-sequence out.

use crate::error::Result;
use crate::stage::{Stage, StageKind, Upstream};

/// Expands each element into the items of `f(element)`.
///
/// The current sub-sequence is drained completely before the next upstream
/// element is pulled.
pub struct FlatMap<'a, T, F, I: IntoIterator> {
    upstream: Upstream<'a, T>,
    f: F,
    cursor: Option<I::IntoIter>,
}

impl<'a, T, F, I> FlatMap<'a, T, F, I>
where
    F: FnMut(T) -> I,
    I: IntoIterator,
{
    pub fn new(upstream: Upstream<'a, T>, f: F) -> Self {
        Self {
            upstream,
            f,
            cursor: None,
        }
    }
}

impl<T, F, I> Stage<I::Item> for FlatMap<'_, T, F, I>
where
    F: FnMut(T) -> I,
    I: IntoIterator,
{
    fn pull(&mut self) -> Result<Option<I::Item>> {
        loop {
            if let Some(item) = self.cursor.as_mut().and_then(Iterator::next) {
                return Ok(Some(item));
            }
            match self.upstream.pull()? {
                Some(x) => self.cursor = Some((self.f)(x).into_iter()),
                None => {
                    self.cursor = None;
                    return Ok(None);
                }
            }
        }
    }

    fn kind(&self) -> StageKind {
        StageKind::Expanding
    }
}
