use ironstream::collectors::grouping_by;
use ironstream::testing::*;
use ironstream::*;
use std::cell::RefCell;

#[test]
fn assert_stream_eq_passes_on_match() {
    assert_stream_eq(from_vec(vec![1, 2, 3]).map(|x| x * 10), &[10, 20, 30]);
}

#[test]
#[should_panic(expected = "Stream length mismatch")]
fn assert_stream_eq_reports_length_mismatch() {
    assert_stream_eq(from_vec(vec![1, 2, 3]), &[1, 2]);
}

#[test]
#[should_panic(expected = "Stream mismatch at index 1")]
fn assert_stream_eq_reports_first_difference() {
    assert_stream_eq(from_vec(vec![1, 2, 3]), &[1, 5, 3]);
}

#[test]
fn assert_stream_unordered_eq_ignores_order() {
    assert_stream_unordered_eq(from_vec(vec![3, 1, 2, 1]), &[1, 1, 2, 3]);
}

#[test]
#[should_panic(expected = "Stream content mismatch")]
fn assert_stream_unordered_eq_checks_multiplicity() {
    assert_stream_unordered_eq(from_vec(vec![1, 1, 2]), &[1, 2, 2]);
}

#[test]
fn assert_spent_after_terminal() -> anyhow::Result<()> {
    let mut s = from_vec(vec![1]);
    s.head()?;
    assert_spent(&mut s);
    Ok(())
}

#[test]
#[should_panic(expected = "expected a spent stream")]
fn assert_spent_rejects_fresh_stream() {
    let mut s = from_vec(vec![1, 2]);
    assert_spent(&mut s);
}

#[test]
#[should_panic(expected = "Group mismatch at position 0")]
fn assert_groups_eq_is_order_sensitive() {
    let groups = from_vec(vec![1, 2, 3])
        .collect(grouping_by(|x: &i32| x % 2))
        .unwrap();
    assert_groups_eq(groups, &[(0, vec![2]), (1, vec![1, 3])]);
}

#[test]
fn assert_all_elements_checks_predicate() {
    assert_all_elements(
        from_vec(vec![2, 4, 6]),
        |x| x % 2 == 0,
        "all elements should be even",
    );
}

#[test]
#[should_panic(expected = "all elements should be positive")]
fn assert_all_elements_reports_failures() {
    assert_all_elements(from_vec(vec![1, -2]), |x| *x > 0, "all elements should be positive");
}

#[test]
fn builder_assembles_data() {
    let b = TestDataBuilder::<i32>::new()
        .add_value(1)
        .add_values([2, 3])
        .add_repeated(9, 2)
        .add_range(4..=5);
    assert_eq!(b.len(), 7);
    assert!(!b.is_empty());
    assert_eq!(b.build(), vec![1, 2, 3, 9, 9, 4, 5]);
    assert!(TestDataBuilder::<u8>::new().is_empty());
}

#[test]
fn builder_into_stream() -> anyhow::Result<()> {
    let total = TestDataBuilder::<i64>::new()
        .add_range(1..=4)
        .into_stream()
        .sum()?;
    assert_eq!(total, 10);
    Ok(())
}

#[test]
fn pseudo_random_data_is_deterministic_and_bounded() {
    let a = pseudo_random_data(200, -5, 5);
    assert_eq!(a.len(), 200);
    assert_eq!(a, pseudo_random_data(200, -5, 5));
    assert!(a.iter().all(|v| (-5..5).contains(v)));
}

#[test]
fn debug_stages_pass_elements_through() -> anyhow::Result<()> {
    let out = from_vec((1..=20).collect::<Vec<i32>>())
        .debug_inspect("source")
        .filter(|x| x % 5 == 0)
        .debug_count("multiples of five")
        .debug_sample(1, "sample")
        .to_vec()?;
    assert_eq!(out, vec![5, 10, 15, 20]);
    Ok(())
}

#[test]
fn debug_inspect_with_calls_inspector() -> anyhow::Result<()> {
    let seen = RefCell::new(Vec::new());
    let n = from_vec(vec!["x", "y"])
        .with_config(StreamConfig::default().with_debug_sample_limit(0))
        .debug_inspect_with("letters", |s| seen.borrow_mut().push(s.to_string()))
        .count()?;
    assert_eq!(n, 2);
    assert_eq!(seen.into_inner(), vec!["x", "y"]);
    Ok(())
}

#[test]
fn debug_stages_show_up_in_explain() {
    let plan = from_vec(vec![1]).debug_count("c").explain();
    assert_eq!(plan.stage_names(), vec!["owned", "debug_count"]);
    assert!(plan.steps[1].description.contains("label=c"));
}

#[test]
fn assertions_accept_streams_borrowing_local_data() -> anyhow::Result<()> {
    let words = vec![String::from("bb"), String::from("a"), String::from("ccc")];
    let lengths = Stream::view(&words).map(|w| w.len());
    assert_stream_eq(lengths, &[2, 1, 3]);

    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    assert_stream_unordered_eq(Stream::view(&refs), &["ccc", "a", "bb"]);
    assert_all_elements(Stream::view(&refs), |w| !w.is_empty(), "no empty words");

    let mut s = Stream::view(&refs);
    s.count()?;
    assert_spent(&mut s);
    Ok(())
}
