//! Collectors that wrap another collector.

use crate::collector::Collector;
use crate::error::Result;
use std::marker::PhantomData;

/* ===================== CollectingAndThen ===================== */

/// Runs `downstream`, then post-processes its result once with `then`.
pub struct CollectingAndThen<C, F> {
    downstream: C,
    then: F,
}

/// See [`CollectingAndThen`].
///
/// ```
/// use ironstream::Stream;
/// use ironstream::collectors::{collecting_and_then, counting};
///
/// # fn main() -> anyhow::Result<()> {
/// let label = Stream::from_vec(vec![1, 2, 3])
///     .collect(collecting_and_then(counting(), |n: u64| format!("{n} items")))?;
/// assert_eq!(label, "3 items");
/// # Ok(())
/// # }
/// ```
pub const fn collecting_and_then<C, F>(downstream: C, then: F) -> CollectingAndThen<C, F> {
    CollectingAndThen { downstream, then }
}

impl<T, C, R, F> Collector<T> for CollectingAndThen<C, F>
where
    C: Collector<T>,
    F: Fn(C::Output) -> R,
{
    type Acc = C::Acc;
    type Output = R;

    fn supply(&self) -> C::Acc {
        self.downstream.supply()
    }

    fn accumulate(&self, acc: &mut C::Acc, item: T) {
        self.downstream.accumulate(acc, item);
    }

    fn finish(&self, acc: C::Acc) -> Result<R> {
        Ok((self.then)(self.downstream.finish(acc)?))
    }
}

/* ===================== Mapping ===================== */

/// Transforms each element before handing it to `downstream`.
pub struct Mapping<U, F, C> {
    f: F,
    downstream: C,
    _u: PhantomData<fn() -> U>,
}

/// See [`Mapping`].
pub fn mapping<T, U, F, C>(f: F, downstream: C) -> Mapping<U, F, C>
where
    F: Fn(T) -> U,
    C: Collector<U>,
{
    Mapping {
        f,
        downstream,
        _u: PhantomData,
    }
}

impl<T, U, F, C> Collector<T> for Mapping<U, F, C>
where
    F: Fn(T) -> U,
    C: Collector<U>,
{
    type Acc = C::Acc;
    type Output = C::Output;

    fn supply(&self) -> C::Acc {
        self.downstream.supply()
    }

    fn accumulate(&self, acc: &mut C::Acc, item: T) {
        self.downstream.accumulate(acc, (self.f)(item));
    }

    fn finish(&self, acc: C::Acc) -> Result<C::Output> {
        self.downstream.finish(acc)
    }
}
