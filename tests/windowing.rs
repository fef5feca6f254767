use ironstream::*;

#[test]
fn sliding_windows_count_is_len_minus_k_plus_one() -> anyhow::Result<()> {
    let data: Vec<i32> = (1..=6).collect();
    for k in 1..=6 {
        let windows = Stream::view(&data).sliding(k).to_vec()?;
        assert_eq!(windows.len(), data.len() - k + 1, "k={k}");
        for (i, w) in windows.iter().enumerate() {
            assert_eq!(w.as_slice(), &data[i..i + k]);
        }
    }
    Ok(())
}

#[test]
fn sliding_window_of_three() -> anyhow::Result<()> {
    let out = from_vec(vec!['a', 'b', 'c', 'd']).sliding(3).to_vec()?;
    assert_eq!(out, vec![vec!['a', 'b', 'c'], vec!['b', 'c', 'd']]);
    Ok(())
}

#[test]
fn sliding_shorter_than_window_yields_nothing() -> anyhow::Result<()> {
    assert_eq!(from_vec(vec![1, 2]).sliding(3).count()?, 0);
    assert_eq!(from_vec(Vec::<i32>::new()).sliding(1).count()?, 0);
    Ok(())
}

#[test]
fn fixed_windows_count_is_ceil_len_over_k() -> anyhow::Result<()> {
    let data: Vec<u32> = (0..10).collect();
    for k in 1..=12 {
        let batches = Stream::view(&data).fixed(k).to_vec()?;
        assert_eq!(batches.len(), data.len().div_ceil(k), "k={k}");
        let flat: Vec<u32> = batches.iter().flatten().copied().collect();
        assert_eq!(flat, data, "k={k}");
        for b in &batches[..batches.len() - 1] {
            assert_eq!(b.len(), k);
        }
    }
    Ok(())
}

#[test]
fn fixed_emits_trailing_partial_batch() -> anyhow::Result<()> {
    let out = from_vec(vec![1, 2, 3, 4, 5]).fixed(2).to_vec()?;
    assert_eq!(out, vec![vec![1, 2], vec![3, 4], vec![5]]);
    Ok(())
}

#[test]
fn window_size_zero_is_invalid() {
    let mut sliding = from_vec(vec![1, 2, 3]).sliding(0);
    assert!(matches!(
        sliding.to_vec(),
        Err(StreamError::InvalidConfiguration(_))
    ));

    let mut fixed = from_vec(vec![1, 2, 3]).fixed(0);
    assert!(matches!(
        fixed.count(),
        Err(StreamError::InvalidConfiguration(_))
    ));
}

#[test]
fn sliding_window_sums() -> anyhow::Result<()> {
    let sums = from_vec(vec![1, 2, 3, 4, 5])
        .sliding(2)
        .map(|w| w.iter().sum::<i32>())
        .to_vec()?;
    assert_eq!(sums, vec![3, 5, 7, 9]);
    Ok(())
}

#[test]
fn windows_are_lazy() -> anyhow::Result<()> {
    let mut s = from_vec((1..=1_000).collect::<Vec<u32>>())
        .sliding(4)
        .limit(2);
    let metrics = s.metrics();
    let first_two = s.to_vec()?;
    assert_eq!(first_two, vec![vec![1, 2, 3, 4], vec![2, 3, 4, 5]]);
    // fill the first window, then one more element
    assert_eq!(metrics.stage(0).map(|m| m.emitted), Some(5));
    Ok(())
}
