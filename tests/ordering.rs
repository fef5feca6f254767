use ironstream::testing::*;
use ironstream::*;
use std::cell::Cell;
use std::cmp::Reverse;

#[test]
fn sorted_natural_order() -> anyhow::Result<()> {
    let out = from_vec(vec![5, 3, 9, 1, 3]).sorted().to_vec()?;
    assert_eq!(out, vec![1, 3, 3, 5, 9]);
    Ok(())
}

#[test]
fn sorted_by_comparator_descending() -> anyhow::Result<()> {
    let out = from_vec(vec!["pear", "fig", "banana"])
        .sorted_by(|a, b| b.len().cmp(&a.len()))
        .to_vec()?;
    assert_eq!(out, vec!["banana", "pear", "fig"]);
    Ok(())
}

#[test]
fn sorted_by_key_is_stable() -> anyhow::Result<()> {
    let rows = vec![("b", 2), ("a", 1), ("c", 2), ("d", 1)];
    let out = Stream::view(&rows).sorted_by_key(|(_, n)| *n).to_vec()?;
    assert_eq!(out, vec![("a", 1), ("d", 1), ("b", 2), ("c", 2)]);

    let desc = Stream::view(&rows)
        .sorted_by_key(|(_, n)| Reverse(*n))
        .to_vec()?;
    assert_eq!(desc, vec![("b", 2), ("c", 2), ("a", 1), ("d", 1)]);
    Ok(())
}

#[test]
fn float_keys_sort_nan_last() -> anyhow::Result<()> {
    let out = from_vec(vec![2.5, f64::NAN, -1.0, 0.0])
        .sorted_by_float_key(|x| *x)
        .to_vec()?;
    assert_eq!(&out[..3], &[-1.0, 0.0, 2.5]);
    assert!(out[3].is_nan());
    Ok(())
}

#[test]
fn float_keys_on_records() -> anyhow::Result<()> {
    #[derive(Clone, Debug, PartialEq)]
    struct Reading {
        sensor: &'static str,
        value: f64,
    }
    let readings = vec![
        Reading { sensor: "a", value: 3.2 },
        Reading { sensor: "b", value: 1.5 },
        Reading { sensor: "c", value: 2.0 },
    ];
    let order: Vec<&str> = Stream::view(&readings)
        .sorted_by_float_key(|r| r.value)
        .map(|r| r.sensor)
        .to_vec()?;
    assert_eq!(order, vec!["b", "c", "a"]);
    Ok(())
}

#[test]
fn reverse_emits_last_to_first() -> anyhow::Result<()> {
    assert_stream_eq(from_vec(vec![1, 2, 3]).reverse(), &[3, 2, 1]);
    assert_stream_eq(from_vec(Vec::<u8>::new()).reverse(), &[]);
    Ok(())
}

#[test]
fn sorted_drains_upstream_on_first_pull() -> anyhow::Result<()> {
    let pulled = Cell::new(0);
    let mut s = from_vec(vec![4, 2, 8, 6])
        .inspect(|_| pulled.set(pulled.get() + 1))
        .sorted();
    assert_eq!(pulled.get(), 0);
    assert_eq!(s.head()?, Some(2));
    assert_eq!(pulled.get(), 4);
    Ok(())
}

#[test]
fn reverse_drains_upstream_on_first_pull() -> anyhow::Result<()> {
    let pulled = Cell::new(0);
    let mut s = from_vec(vec![1, 2, 3])
        .inspect(|_| pulled.set(pulled.get() + 1))
        .reverse();
    assert_eq!(pulled.get(), 0);
    assert_eq!(s.head()?, Some(3));
    assert_eq!(pulled.get(), 3);
    Ok(())
}

#[test]
fn breaker_followed_by_limit_still_drains() -> anyhow::Result<()> {
    let mut s = from_vec((1..=50).rev().collect::<Vec<i32>>())
        .reverse()
        .limit(2);
    let metrics = s.metrics();
    assert_eq!(s.to_vec()?, vec![1, 2]);
    assert_eq!(metrics.stage(0).map(|m| m.emitted), Some(50));
    Ok(())
}

#[test]
fn sorted_then_max_and_min() -> anyhow::Result<()> {
    let data = vec![7, 3, 11, 5];
    assert_eq!(Stream::view(&data).sorted().tail()?, Some(11));
    assert_eq!(Stream::view(&data).sorted().head()?, Some(3));
    Ok(())
}
