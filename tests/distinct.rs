use ironstream::testing::*;
use ironstream::*;
use std::cell::Cell;

#[test]
fn distinct_keeps_first_occurrences_in_order() -> anyhow::Result<()> {
    let out = from_vec(vec![3, 1, 3, 2, 1, 4]).distinct().to_vec()?;
    assert_eq!(out, vec![3, 1, 2, 4]);
    Ok(())
}

#[test]
fn distinct_strings() -> anyhow::Result<()> {
    let words = vec!["a", "b", "a", "c", "b", "c"];
    assert_stream_eq(Stream::view(&words).distinct(), &["a", "b", "c"]);
    Ok(())
}

#[test]
fn distinct_on_empty_and_unique_inputs() -> anyhow::Result<()> {
    assert_eq!(from_vec(Vec::<i32>::new()).distinct().count()?, 0);
    let unique: Vec<u32> = (0..100).collect();
    assert_eq!(Stream::view(&unique).distinct().to_vec()?, unique);
    Ok(())
}

#[test]
fn distinct_is_a_pipeline_breaker() -> anyhow::Result<()> {
    let pulled = Cell::new(0);
    let mut s = from_vec(vec![1, 1, 2, 2, 3])
        .inspect(|_| pulled.set(pulled.get() + 1))
        .distinct();
    assert!(!s.explain().is_fully_lazy());
    assert_eq!(pulled.get(), 0);
    assert_eq!(s.find_first(|x| *x == 1)?, Some(1));
    assert_eq!(pulled.get(), 5);
    Ok(())
}

#[test]
fn distinct_after_map() -> anyhow::Result<()> {
    let out = from_vec(vec![10, 21, 30, 41])
        .map(|x| x % 2)
        .distinct()
        .to_vec()?;
    assert_eq!(out, vec![0, 1]);
    Ok(())
}
