//! Assertion functions for stream outputs.
//!
//! Each function runs whatever terminal operation it needs and panics with a
//! detailed message on mismatch.

use crate::error::StreamError;
use crate::stream::Stream;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that `stream` yields exactly `expected`, in order.
///
/// # Panics
///
/// If the stream fails or its output differs in length or content.
///
/// # Example
///
/// ```
/// use ironstream::Stream;
/// use ironstream::testing::assert_stream_eq;
///
/// assert_stream_eq(Stream::from_vec(vec![3, 1, 2]).sorted(), &[1, 2, 3]);
/// ```
pub fn assert_stream_eq<'a, T>(mut stream: Stream<'a, T>, expected: &[T])
where
    T: Debug + PartialEq + 'a,
{
    let actual = match stream.to_vec() {
        Ok(v) => v,
        Err(e) => panic!("stream failed: {e}\n  Expected: {expected:?}"),
    };
    assert_eq!(
        actual.len(),
        expected.len(),
        "Stream length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Stream mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that `stream` yields the elements of `expected` in any order,
/// with the same multiplicities.
///
/// # Panics
///
/// If the stream fails or the multisets differ.
pub fn assert_stream_unordered_eq<'a, T>(mut stream: Stream<'a, T>, expected: &[T])
where
    T: Debug + Eq + Hash + 'a,
{
    let actual = match stream.to_vec() {
        Ok(v) => v,
        Err(e) => panic!("stream failed: {e}\n  Expected: {expected:?}"),
    };
    let mut counts: HashMap<&T, isize> = HashMap::new();
    for x in &actual {
        *counts.entry(x).or_default() += 1;
    }
    for x in expected {
        *counts.entry(x).or_default() -= 1;
    }
    let extra: Vec<_> = counts.iter().filter(|(_, n)| **n > 0).map(|(x, _)| *x).collect();
    let missing: Vec<_> = counts.iter().filter(|(_, n)| **n < 0).map(|(x, _)| *x).collect();
    assert!(
        extra.is_empty() && missing.is_empty(),
        "Stream content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert that `stream` has been consumed: another terminal operation must
/// fail with [`StreamError::SpentPipeline`].
///
/// # Panics
///
/// If the stream can still be driven.
pub fn assert_spent<'a, T: 'a>(stream: &mut Stream<'a, T>) {
    match stream.count() {
        Err(StreamError::SpentPipeline { .. }) => {}
        Err(e) => panic!("expected a spent stream, got error: {e}"),
        Ok(n) => panic!("expected a spent stream, but it yielded {n} elements"),
    }
}

/// Assert that a grouping result holds exactly `expected`, keys in the same
/// order.
///
/// # Panics
///
/// If keys or values differ, or appear in a different order.
///
/// # Example
///
/// ```
/// use ironstream::Stream;
/// use ironstream::collectors::grouping_by;
/// use ironstream::testing::assert_groups_eq;
///
/// let groups = Stream::from_vec(vec![1, 2, 3])
///     .collect(grouping_by(|x: &i32| x % 2))
///     .unwrap();
/// assert_groups_eq(groups, &[(1, vec![1, 3]), (0, vec![2])]);
/// ```
pub fn assert_groups_eq<K, V, G>(actual: G, expected: &[(K, V)])
where
    G: IntoIterator<Item = (K, V)>,
    K: Debug + PartialEq,
    V: Debug + PartialEq,
{
    let actual: Vec<(K, V)> = actual.into_iter().collect();
    assert_eq!(
        actual.len(),
        expected.len(),
        "Group count mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
    for (i, ((ak, av), (ek, ev))) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            ak == ek && av == ev,
            "Group mismatch at position {i}:\n  Expected: ({ek:?}, {ev:?})\n  Actual: ({ak:?}, {av:?})\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that every element of `stream` satisfies `pred`.
///
/// # Panics
///
/// If the stream fails or any element fails the predicate.
pub fn assert_all_elements<'a, T, P>(mut stream: Stream<'a, T>, pred: P, message: &str)
where
    T: Debug + 'a,
    P: Fn(&T) -> bool,
{
    let actual = match stream.to_vec() {
        Ok(v) => v,
        Err(e) => panic!("stream failed: {e}"),
    };
    let failures: Vec<_> = actual.iter().filter(|x| !pred(x)).collect();
    assert!(
        failures.is_empty(),
        "{message}\n  Elements failing the predicate: {failures:?}\n  Full stream: {actual:?}"
    );
}
