//! Terminal operations: drive a [`Stream`] to a result, exactly once.
//!
//! Each operation takes `&mut self` and marks the stream spent. Any further
//! terminal operation on the same stream fails with
//! [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline) without touching the pipeline.
//!
//! | Operation | Pulls |
//! |---|---|
//! | `any_match`, `all_match`, `none_match`, `find_first`, `head` | until the answer is known |
//! | everything else | the whole pipeline |
//!
//! Over an empty pipeline, `find_first`, `find_last`, `head`, `tail`, `min`,
//! `max`, `min_by` and `max_by` return `Ok(None)`; `reduce` returns its
//! identity; `sum` returns `T::default()`.

use crate::collector::Collector;
use crate::container::Container;
use crate::error::Result;
use crate::stream::Stream;
use std::cmp::Ordering;
use std::mem::take;
use std::ops::Add;

impl<'a, T: 'a> Stream<'a, T> {
    /// Fold every element into `identity`, left to right.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn reduce<A, F>(&mut self, identity: A, mut f: F) -> Result<A>
    where
        F: FnMut(A, T) -> A,
    {
        self.drive("reduce", |stage| {
            let mut acc = identity;
            while let Some(x) = stage.pull()? {
                acc = f(acc, x);
            }
            Ok(acc)
        })
    }

    /// Visit every element in emission order.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn for_each<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(T),
    {
        self.drive("for_each", |stage| {
            while let Some(x) = stage.pull()? {
                f(x);
            }
            Ok(())
        })
    }

    /// Visit every element with a fallible visitor; stops at the first error.
    ///
    /// # Errors
    ///
    /// [`StreamError::Callback`](crate::StreamError::Callback) carrying the visitor's error, plus the
    /// errors of [`for_each`](Self::for_each).
    pub fn try_for_each<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(T) -> anyhow::Result<()>,
    {
        self.drive("try_for_each", |stage| {
            while let Some(x) = stage.pull()? {
                f(x)?;
            }
            Ok(())
        })
    }

    /// Whether any element matches; stops at the first match.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn any_match<P>(&mut self, mut pred: P) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        self.drive("any_match", |stage| {
            while let Some(x) = stage.pull()? {
                if pred(&x) {
                    return Ok(true);
                }
            }
            Ok(false)
        })
    }

    /// Whether every element matches; stops at the first mismatch.
    /// `true` for an empty pipeline.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn all_match<P>(&mut self, mut pred: P) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        self.drive("all_match", |stage| {
            while let Some(x) = stage.pull()? {
                if !pred(&x) {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }

    /// Whether no element matches; stops at the first match.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn none_match<P>(&mut self, mut pred: P) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        self.drive("none_match", |stage| {
            while let Some(x) = stage.pull()? {
                if pred(&x) {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }

    /// First element matching `pred`; stops as soon as it is found.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn find_first<P>(&mut self, mut pred: P) -> Result<Option<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.drive("find_first", |stage| {
            while let Some(x) = stage.pull()? {
                if pred(&x) {
                    return Ok(Some(x));
                }
            }
            Ok(None)
        })
    }

    /// Last element matching `pred`. Drains the pipeline.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn find_last<P>(&mut self, mut pred: P) -> Result<Option<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.drive("find_last", |stage| {
            let mut last = None;
            while let Some(x) = stage.pull()? {
                if pred(&x) {
                    last = Some(x);
                }
            }
            Ok(last)
        })
    }

    /// First element; pulls exactly once.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn head(&mut self) -> Result<Option<T>> {
        self.drive("head", |stage| stage.pull())
    }

    /// Last element. Drains the pipeline.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn tail(&mut self) -> Result<Option<T>> {
        self.drive("tail", |stage| {
            let mut last = None;
            while let Some(x) = stage.pull()? {
                last = Some(x);
            }
            Ok(last)
        })
    }

    /// Reduce the pipeline with `collector`.
    ///
    /// The collector is borrowed by value; pass `&collector` to reuse it.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), any error raised inside the pipeline,
    /// or the collector's finisher error (e.g. [`StreamError::EmptyInput`](crate::StreamError::EmptyInput)).
    pub fn collect<C>(&mut self, collector: C) -> Result<C::Output>
    where
        C: Collector<T>,
    {
        self.drive("collect", |stage| {
            let mut acc = collector.supply();
            while let Some(x) = stage.pull()? {
                collector.accumulate(&mut acc, x);
            }
            collector.finish(acc)
        })
    }

    /// Number of elements.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn count(&mut self) -> Result<usize> {
        self.drive("count", |stage| {
            let mut n = 0;
            while stage.pull()?.is_some() {
                n += 1;
            }
            Ok(n)
        })
    }

    /// Sum of all elements, starting from `T::default()`.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn sum(&mut self) -> Result<T>
    where
        T: Add<Output = T> + Default,
    {
        self.drive("sum", |stage| {
            let mut acc = T::default();
            while let Some(x) = stage.pull()? {
                acc = take(&mut acc) + x;
            }
            Ok(acc)
        })
    }

    /// Smallest element; the first of several equal minima.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn min(&mut self) -> Result<Option<T>>
    where
        T: Ord,
    {
        self.extremum("min", |a, b| a.cmp(b), Ordering::Less)
    }

    /// Largest element; the last of several equal maxima.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn max(&mut self) -> Result<Option<T>>
    where
        T: Ord,
    {
        self.extremum("max", |a, b| a.cmp(b), Ordering::Greater)
    }

    /// Smallest element under `cmp`; the first of several equal minima.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn min_by<C>(&mut self, cmp: C) -> Result<Option<T>>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.extremum("min_by", cmp, Ordering::Less)
    }

    /// Largest element under `cmp`; the last of several equal maxima.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn max_by<C>(&mut self, cmp: C) -> Result<Option<T>>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.extremum("max_by", cmp, Ordering::Greater)
    }

    // `wanted` is the ordering of a candidate against the current best that
    // replaces it; ties replace only when looking for a maximum.
    fn extremum<C>(
        &mut self,
        operation: &'static str,
        mut cmp: C,
        wanted: Ordering,
    ) -> Result<Option<T>>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let ties_replace = wanted == Ordering::Greater;
        self.drive(operation, |stage| {
            let mut best: Option<T> = None;
            while let Some(x) = stage.pull()? {
                let replace = match &best {
                    None => true,
                    Some(b) => {
                        let ord = cmp(&x, b);
                        ord == wanted || (ties_replace && ord == Ordering::Equal)
                    }
                };
                if replace {
                    best = Some(x);
                }
            }
            Ok(best)
        })
    }

    /// All elements in emission order.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn to_vec(&mut self) -> Result<Vec<T>> {
        self.fill("to_vec")
    }

    /// All elements inserted, in emission order, into a fresh `C`.
    ///
    /// # Errors
    ///
    /// [`StreamError::SpentPipeline`](crate::StreamError::SpentPipeline), or any error raised inside the pipeline.
    pub fn to_container<C>(&mut self) -> Result<C>
    where
        C: Container<T> + Default,
    {
        self.fill("to_container")
    }

    fn fill<C>(&mut self, operation: &'static str) -> Result<C>
    where
        C: Container<T> + Default,
    {
        self.drive(operation, |stage| {
            let mut out = C::default();
            while let Some(x) = stage.pull()? {
                out.insert(x);
            }
            Ok(out)
        })
    }
}
