//! Numeric and order-based collectors: counting, summing, averaging,
//! extrema, reducing.

use crate::collector::Collector;
use crate::error::{Result, StreamError};
use std::cmp::Ordering;
use std::marker::PhantomData;
use std::mem::take;
use std::ops::Add;

/* ===================== Counting ===================== */

/// Number of elements seen, whatever their type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counting;

/// See [`Counting`].
#[must_use]
pub const fn counting() -> Counting {
    Counting
}

impl<T> Collector<T> for Counting {
    type Acc = u64;
    type Output = u64;

    fn supply(&self) -> u64 {
        0
    }

    fn accumulate(&self, acc: &mut u64, _item: T) {
        *acc += 1;
    }

    fn finish(&self, acc: u64) -> Result<u64> {
        Ok(acc)
    }
}

/* ===================== Summing ===================== */

/// Sum of the elements, starting from `T::default()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Summing;

/// See [`Summing`].
#[must_use]
pub const fn summing() -> Summing {
    Summing
}

impl<T> Collector<T> for Summing
where
    T: Add<Output = T> + Default,
{
    type Acc = T;
    type Output = T;

    fn supply(&self) -> T {
        T::default()
    }

    fn accumulate(&self, acc: &mut T, item: T) {
        *acc = take(acc) + item;
    }

    fn finish(&self, acc: T) -> Result<T> {
        Ok(acc)
    }
}

/// Sum of `f(element)`.
pub struct SummingBy<N, F> {
    f: F,
    _n: PhantomData<fn() -> N>,
}

/// See [`SummingBy`].
pub fn summing_by<T, N, F>(f: F) -> SummingBy<N, F>
where
    F: Fn(&T) -> N,
    N: Add<Output = N> + Default,
{
    SummingBy { f, _n: PhantomData }
}

impl<T, N, F> Collector<T> for SummingBy<N, F>
where
    F: Fn(&T) -> N,
    N: Add<Output = N> + Default,
{
    type Acc = N;
    type Output = N;

    fn supply(&self) -> N {
        N::default()
    }

    fn accumulate(&self, acc: &mut N, item: T) {
        *acc = take(acc) + (self.f)(&item);
    }

    fn finish(&self, acc: N) -> Result<N> {
        Ok(acc)
    }
}

/* ===================== Averaging ===================== */

/// Arithmetic mean of `f(element)`.
///
/// Fails with [`StreamError::EmptyInput`] when no element was seen.
pub struct Averaging<F> {
    f: F,
}

/// See [`Averaging`].
pub fn averaging<T, F>(f: F) -> Averaging<F>
where
    F: Fn(&T) -> f64,
{
    Averaging { f }
}

impl<T, F> Collector<T> for Averaging<F>
where
    F: Fn(&T) -> f64,
{
    type Acc = (f64, u64);
    type Output = f64;

    fn supply(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn accumulate(&self, acc: &mut (f64, u64), item: T) {
        acc.0 += (self.f)(&item);
        acc.1 += 1;
    }

    fn finish(&self, acc: (f64, u64)) -> Result<f64> {
        mean(acc, "averaging")
    }
}

/// Arithmetic mean of elements convertible into `f64`.
///
/// Fails with [`StreamError::EmptyInput`] when no element was seen.
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageF64;

impl<T> Collector<T> for AverageF64
where
    T: Into<f64>,
{
    type Acc = (f64, u64);
    type Output = f64;

    fn supply(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn accumulate(&self, acc: &mut (f64, u64), item: T) {
        acc.0 += item.into();
        acc.1 += 1;
    }

    fn finish(&self, acc: (f64, u64)) -> Result<f64> {
        mean(acc, "average_f64")
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean((sum, count): (f64, u64), operation: &'static str) -> Result<f64> {
    if count == 0 {
        return Err(StreamError::EmptyInput { operation });
    }
    Ok(sum / count as f64)
}

/* ===================== Extrema ===================== */

/// Largest element under a comparator; ties keep the later element.
pub struct MaxBy<C> {
    cmp: C,
}

/// Smallest element under a comparator; ties keep the earlier element.
pub struct MinBy<C> {
    cmp: C,
}

/// See [`MaxBy`].
pub fn max_by<T, C>(cmp: C) -> MaxBy<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    MaxBy { cmp }
}

/// See [`MinBy`].
pub fn min_by<T, C>(cmp: C) -> MinBy<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    MinBy { cmp }
}

impl<T, C> Collector<T> for MaxBy<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Acc = Option<T>;
    type Output = Option<T>;

    fn supply(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, acc: &mut Option<T>, item: T) {
        let replace = match acc.as_ref() {
            Some(best) => (self.cmp)(&item, best) != Ordering::Less,
            None => true,
        };
        if replace {
            *acc = Some(item);
        }
    }

    fn finish(&self, acc: Option<T>) -> Result<Option<T>> {
        Ok(acc)
    }
}

impl<T, C> Collector<T> for MinBy<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Acc = Option<T>;
    type Output = Option<T>;

    fn supply(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, acc: &mut Option<T>, item: T) {
        let replace = match acc.as_ref() {
            Some(best) => (self.cmp)(&item, best) == Ordering::Less,
            None => true,
        };
        if replace {
            *acc = Some(item);
        }
    }

    fn finish(&self, acc: Option<T>) -> Result<Option<T>> {
        Ok(acc)
    }
}

/// Largest element by natural order (`None` when empty).
#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

/// Smallest element by natural order (`None` when empty).
#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

impl<T: Ord> Collector<T> for Max {
    type Acc = Option<T>;
    type Output = Option<T>;

    fn supply(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, acc: &mut Option<T>, item: T) {
        *acc = Some(match take(acc) {
            Some(best) => best.max(item),
            None => item,
        });
    }

    fn finish(&self, acc: Option<T>) -> Result<Option<T>> {
        Ok(acc)
    }
}

impl<T: Ord> Collector<T> for Min {
    type Acc = Option<T>;
    type Output = Option<T>;

    fn supply(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, acc: &mut Option<T>, item: T) {
        *acc = Some(match take(acc) {
            Some(best) => best.min(item),
            None => item,
        });
    }

    fn finish(&self, acc: Option<T>) -> Result<Option<T>> {
        Ok(acc)
    }
}

/* ===================== Reducing ===================== */

/// Left fold from a cloned identity with a binary operator.
#[derive(Clone, Debug)]
pub struct Reducing<T, F> {
    identity: T,
    op: F,
}

/// See [`Reducing`].
pub fn reducing<T, F>(identity: T, op: F) -> Reducing<T, F>
where
    T: Clone,
    F: Fn(T, T) -> T,
{
    Reducing { identity, op }
}

impl<T, F> Collector<T> for Reducing<T, F>
where
    T: Clone,
    F: Fn(T, T) -> T,
{
    // `None` only while `accumulate` holds the value
    type Acc = Option<T>;
    type Output = T;

    fn supply(&self) -> Option<T> {
        Some(self.identity.clone())
    }

    fn accumulate(&self, acc: &mut Option<T>, item: T) {
        fold_into(acc, item, &self.op);
    }

    fn finish(&self, acc: Option<T>) -> Result<T> {
        Ok(acc.unwrap_or_else(|| self.identity.clone()))
    }
}

/// Left fold seeded with the first element; `None` on empty input.
#[derive(Clone, Debug)]
pub struct ReducingFirst<F> {
    op: F,
}

/// See [`ReducingFirst`].
pub fn reducing_first<T, F>(op: F) -> ReducingFirst<F>
where
    F: Fn(T, T) -> T,
{
    ReducingFirst { op }
}

impl<T, F> Collector<T> for ReducingFirst<F>
where
    F: Fn(T, T) -> T,
{
    type Acc = Option<T>;
    type Output = Option<T>;

    fn supply(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, acc: &mut Option<T>, item: T) {
        fold_into(acc, item, &self.op);
    }

    fn finish(&self, acc: Option<T>) -> Result<Option<T>> {
        Ok(acc)
    }
}

fn fold_into<T>(acc: &mut Option<T>, item: T, op: impl Fn(T, T) -> T) {
    *acc = Some(match acc.take() {
        Some(current) => op(current, item),
        None => item,
    });
}
