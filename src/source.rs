//! Pull-based element producers anchoring every stream.
//!
//! A [`SequenceSource`] is either a **view** (borrows a caller container for
//! `'a`, cloning each element as it is pulled) or **owned** (holds its own
//! `Vec<T>`). Exactly one of the two is active for the lifetime of the source.

use crate::container::Container;
use crate::error::{Result, StreamError};
use crate::stage::{Stage, StageKind};
use std::fmt;
use std::iter::Peekable;
use std::vec;

enum Origin<'a, T> {
    View(Peekable<Box<dyn Iterator<Item = T> + 'a>>),
    Owned(Peekable<vec::IntoIter<T>>),
}

/// Adapts a container into a `has_next` / `next` / `peek` producer.
pub struct SequenceSource<'a, T> {
    origin: Origin<'a, T>,
    len: usize,
}

impl<'a, T: 'a> SequenceSource<'a, T> {
    /// Take ownership of `data`.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            origin: Origin::Owned(data.into_iter().peekable()),
            len,
        }
    }

    /// Copy every element of `container` now; later changes to the container
    /// are not observed.
    #[must_use]
    pub fn owned<C>(container: &C) -> Self
    where
        C: Container<T> + ?Sized,
        T: Clone,
    {
        Self::from_vec(container.elements().cloned().collect())
    }

    /// Borrow `container` for `'a`, cloning elements lazily as they are pulled.
    #[must_use]
    pub fn view<C>(container: &'a C) -> Self
    where
        C: Container<T> + ?Sized,
        T: Clone,
    {
        let iter: Box<dyn Iterator<Item = T> + 'a> = Box::new(container.elements().cloned());
        Self {
            origin: Origin::View(iter.peekable()),
            len: container.size(),
        }
    }

    /// Whether another element is available.
    pub fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }

    /// Borrow the next element without consuming it.
    pub fn peek(&mut self) -> Option<&T> {
        match &mut self.origin {
            Origin::View(it) => it.peek(),
            Origin::Owned(it) => it.peek(),
        }
    }

    /// Produce the next element.
    ///
    /// # Errors
    ///
    /// [`StreamError::Exhausted`] when called after `has_next()` returned false.
    pub fn next(&mut self) -> Result<T> {
        let item = match &mut self.origin {
            Origin::View(it) => it.next(),
            Origin::Owned(it) => it.next(),
        };
        item.ok_or(StreamError::Exhausted)
    }

    /// Whether this source borrows its container.
    #[must_use]
    pub const fn is_view(&self) -> bool {
        matches!(self.origin, Origin::View(_))
    }

    /// Number of elements the source started with.
    #[must_use]
    pub const fn initial_len(&self) -> usize {
        self.len
    }
}

impl<T> Stage<T> for SequenceSource<'_, T> {
    fn pull(&mut self) -> Result<Option<T>> {
        Ok(match &mut self.origin {
            Origin::View(it) => it.next(),
            Origin::Owned(it) => it.next(),
        })
    }

    fn kind(&self) -> StageKind {
        StageKind::Source
    }
}

impl<T> fmt::Debug for SequenceSource<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceSource")
            .field("view", &matches!(self.origin, Origin::View(_)))
            .field("len", &self.len)
            .finish()
    }
}
