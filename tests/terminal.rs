
use ironstream::testing::*;
use ironstream::*;
use std::cell::Cell;
use std::collections::{BTreeSet, VecDeque};

#[test]
fn reduce_folds_left_to_right() -> anyhow::Result<()> {
    let s = from_vec(vec!["a", "b", "c"]).reduce(String::new(), |mut acc, x| {
        acc.push_str(x);
        acc
    })?;
    assert_eq!(s, "abc");
    assert_eq!(from_vec(Vec::<i32>::new()).reduce(42, |a, b| a + b)?, 42);
    Ok(())
}

#[test]
fn for_each_visits_in_order() -> anyhow::Result<()> {
    let mut seen = Vec::new();
    from_vec(vec![1, 2, 3]).for_each(|x| seen.push(x))?;
    assert_eq!(seen, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn try_for_each_stops_at_first_error() {
    let mut seen = Vec::new();
    let res = from_vec(vec![1, 2, 3, 4]).try_for_each(|x| {
        anyhow::ensure!(x < 3, "stop at {x}");
        seen.push(x);
        Ok(())
    });
    let err = res.unwrap_err();
    assert!(err.is_callback());
    assert_eq!(err.to_string(), "stop at 3");
    assert_eq!(seen, vec![1, 2]);
}

#[test]
fn match_operations_short_circuit() -> anyhow::Result<()> {
    let pulled = &Cell::new(0);
    let counting = move |data: Vec<i32>| {
        from_vec(data).inspect(move |_| pulled.set(pulled.get() + 1))
    };

    assert!(counting(vec![1, 2, 3, 4]).any_match(|x| *x == 2)?);
    assert_eq!(pulled.replace(0), 2);

    assert!(!counting(vec![1, 2, 3, 4]).all_match(|x| *x < 2)?);
    assert_eq!(pulled.replace(0), 2);

    assert!(!counting(vec![1, 2, 3, 4]).none_match(|x| *x == 1)?);
    assert_eq!(pulled.replace(0), 1);

    assert_eq!(counting(vec![5, 6, 7]).find_first(|x| x % 2 == 0)?, Some(6));
    assert_eq!(pulled.replace(0), 2);

    assert_eq!(counting(vec![5, 6, 7]).head()?, Some(5));
    assert_eq!(pulled.get(), 1);
    Ok(())
}

#[test]
fn match_operations_on_empty_input() -> anyhow::Result<()> {
    let empty = Vec::<i32>::new();
    assert!(!Stream::view(&empty).any_match(|_| true)?);
    assert!(Stream::view(&empty).all_match(|_| false)?);
    assert!(Stream::view(&empty).none_match(|_| true)?);
    Ok(())
}

#[test]
fn find_last_head_and_tail() -> anyhow::Result<()> {
    let data = vec![1, 4, 6, 7];
    assert_eq!(Stream::view(&data).find_last(|x| x % 2 == 0)?, Some(6));
    assert_eq!(Stream::view(&data).find_last(|x| *x > 10)?, None);
    assert_eq!(Stream::view(&data).head()?, Some(1));
    assert_eq!(Stream::view(&data).tail()?, Some(7));
    Ok(())
}

#[test]
fn empty_input_optional_results_are_none() -> anyhow::Result<()> {
    let empty = Vec::<i32>::new();
    assert_eq!(Stream::view(&empty).find_first(|_| true)?, None);
    assert_eq!(Stream::view(&empty).find_last(|_| true)?, None);
    assert_eq!(Stream::view(&empty).head()?, None);
    assert_eq!(Stream::view(&empty).tail()?, None);
    assert_eq!(Stream::view(&empty).min()?, None);
    assert_eq!(Stream::view(&empty).max()?, None);
    assert_eq!(Stream::view(&empty).min_by(|a, b| a.cmp(b))?, None);
    assert_eq!(Stream::view(&empty).max_by(|a, b| a.cmp(b))?, None);
    assert_eq!(Stream::view(&empty).sum()?, 0);
    assert_eq!(Stream::view(&empty).count()?, 0);
    Ok(())
}

#[test]
fn count_and_sum() -> anyhow::Result<()> {
    let data: Vec<i64> = (1..=100).collect();
    assert_eq!(Stream::view(&data).count()?, 100);
    assert_eq!(Stream::view(&data).sum()?, 5050);
    assert_eq!(Stream::view(&data).filter(|x| x % 10 == 0).count()?, 10);
    Ok(())
}

#[test]
fn min_and_max_tie_breaking() -> anyhow::Result<()> {
    let people = vec![("ann", 30), ("bob", 25), ("cid", 30), ("dee", 25)];
    let by_age = |a: &(&str, i32), b: &(&str, i32)| a.1.cmp(&b.1);

    // the first of equal minima, the last of equal maxima
    assert_eq!(Stream::view(&people).min_by(by_age)?, Some(("bob", 25)));
    assert_eq!(Stream::view(&people).max_by(by_age)?, Some(("cid", 30)));

    assert_eq!(from_vec(vec![3, 9, 1]).max()?, Some(9));
    assert_eq!(from_vec(vec![3, 9, 1]).min()?, Some(1));
    Ok(())
}

#[test]
fn to_container_variants() -> anyhow::Result<()> {
    let data = vec![3, 1, 3, 2];
    let set: BTreeSet<i32> = Stream::view(&data).to_container()?;
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);

    let dq: VecDeque<i32> = Stream::view(&data).map(|x| x * 2).to_container()?;
    assert_eq!(dq, VecDeque::from(vec![6, 2, 6, 4]));

    assert_eq!(Stream::view(&data).to_vec()?, data);
    Ok(())
}

#[test]
fn second_terminal_operation_is_rejected() -> anyhow::Result<()> {
    let mut s = from_vec(vec![1, 2, 3]);
    assert!(!s.is_spent());
    assert_eq!(s.count()?, 3);
    assert!(s.is_spent());

    assert_rejected_as!(s.to_vec(), "to_vec");
    assert_rejected_as!(s.to_container::<Vec<i32>>(), "to_container");
    assert_rejected_as!(s.head(), "head");
    assert_spent(&mut s);
    Ok(())
}

#[test]
fn short_circuited_stream_is_still_spent() -> anyhow::Result<()> {
    let mut s = from_vec(vec![1, 2, 3, 4]);
    assert!(s.any_match(|x| *x == 1)?);
    assert!(matches!(
        s.count(),
        Err(StreamError::SpentPipeline { operation: "count" })
    ));
    Ok(())
}

#[test]
fn spent_error_message_names_the_operation() {
    let mut s = from_vec(vec![1]);
    let _ = s.head();
    let msg = s.tail().unwrap_err().to_string();
    assert!(msg.contains("tail"), "{msg}");
}

#[test]
fn sum_of_floats() -> anyhow::Result<()> {
    let total = from_vec(vec![0.5, 1.25, 2.25]).sum()?;
    assert!((total - 4.0_f64).abs() < 1e-12);
    Ok(())
}
