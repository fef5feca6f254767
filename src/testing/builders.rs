//! Test data builders for creating input data fluently.

use crate::stream::Stream;
use std::ops::RangeInclusive;

/// A fluent builder for test data.
///
/// # Example
///
/// ```
/// use ironstream::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::new()
///     .add_range(1..=10)
///     .add_value(100)
///     .add_repeated(42, 5)
///     .build();
///
/// assert_eq!(data.len(), 16);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    /// Create a new empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Add a single value.
    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    /// Add several values.
    #[must_use]
    pub fn add_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.data.extend(values);
        self
    }

    /// Add `value` `count` times.
    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    /// Return the data.
    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.data
    }

    /// Wrap the data in an owned stream.
    #[must_use]
    pub fn into_stream<'a>(self) -> Stream<'a, T>
    where
        T: 'a,
    {
        Stream::from_vec(self.data)
    }

    /// Current number of values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no value was added yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: From<i32>> TestDataBuilder<T> {
    /// Add every value of `range`, converted into `T`.
    ///
    /// ```
    /// use ironstream::testing::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::<i64>::new().add_range(1..=3).build();
    /// assert_eq!(data, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.data.extend(range.map(T::from));
        self
    }
}

/// Deterministic pseudo-random integers in `[min, max)` from a fixed-seed LCG.
///
/// ```
/// use ironstream::testing::pseudo_random_data;
///
/// let data = pseudo_random_data(10, 0, 100);
/// assert_eq!(data, pseudo_random_data(10, 0, 100));
/// assert!(data.iter().all(|v| (0..100).contains(v)));
/// ```
#[must_use]
pub fn pseudo_random_data(count: usize, min: i32, max: i32) -> Vec<i32> {
    let mut seed: u32 = 12345;
    let range = (max - min).cast_unsigned().max(1);
    (0..count)
        .map(|_| {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            ((seed / 65536) % range).cast_signed() + min
        })
        .collect()
}
