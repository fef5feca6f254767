//! The three-phase reduction driven by [`Stream::collect`](crate::Stream::collect).
//!
//! A [`Collector<T>`] supplies a fresh accumulator, folds each element into it
//! in emission order, and finishes the accumulator into a result. Collectors
//! only borrow themselves while running, so one collector value can be reused
//! across streams (`&C` is a collector whenever `C` is) and nested as the
//! downstream of grouping and partitioning collectors.
//!
//! Ready-made collectors live in [`collectors`](crate::collectors); custom ones
//! can implement the trait or be assembled from closures with
//! [`collectors::of`](crate::collectors::of).

use crate::error::Result;

/// A reusable supplier / accumulator / finisher triple.
pub trait Collector<T> {
    /// Mutable state threaded through the reduction.
    type Acc;
    /// Final result.
    type Output;

    /// Fresh accumulator for one reduction.
    fn supply(&self) -> Self::Acc;

    /// Fold one element into `acc`.
    fn accumulate(&self, acc: &mut Self::Acc, item: T);

    /// Turn the accumulator into the result.
    ///
    /// # Errors
    ///
    /// Collector-specific; e.g. averaging over no elements yields
    /// [`StreamError::EmptyInput`](crate::StreamError::EmptyInput).
    fn finish(&self, acc: Self::Acc) -> Result<Self::Output>;
}

impl<T, C> Collector<T> for &C
where
    C: Collector<T> + ?Sized,
{
    type Acc = C::Acc;
    type Output = C::Output;

    fn supply(&self) -> Self::Acc {
        (**self).supply()
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        (**self).accumulate(acc, item);
    }

    fn finish(&self, acc: Self::Acc) -> Result<Self::Output> {
        (**self).finish(acc)
    }
}

/// A collector assembled from three closures; see
/// [`collectors::of`](crate::collectors::of).
#[derive(Clone, Copy)]
pub struct FnCollector<S, A, F> {
    supplier: S,
    accumulator: A,
    finisher: F,
}

impl<S, A, F> FnCollector<S, A, F> {
    pub(crate) const fn new(supplier: S, accumulator: A, finisher: F) -> Self {
        Self {
            supplier,
            accumulator,
            finisher,
        }
    }
}

impl<T, Acc, R, S, A, F> Collector<T> for FnCollector<S, A, F>
where
    S: Fn() -> Acc,
    A: Fn(&mut Acc, T),
    F: Fn(Acc) -> R,
{
    type Acc = Acc;
    type Output = R;

    fn supply(&self) -> Acc {
        (self.supplier)()
    }

    fn accumulate(&self, acc: &mut Acc, item: T) {
        (self.accumulator)(acc, item);
    }

    fn finish(&self, acc: Acc) -> Result<R> {
        Ok((self.finisher)(acc))
    }
}
