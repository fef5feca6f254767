use ironstream::*;

#[test]
fn explain_lists_every_stage_in_order() {
    let s = from_vec(vec![1, 2, 3])
        .map(|x| x + 1)
        .filter(|x| *x > 1)
        .flat_map(|x| vec![x, x])
        .sorted()
        .sliding(2)
        .limit(5);
    let plan = s.explain();

    assert_eq!(
        plan.stage_names(),
        vec!["owned", "map", "filter", "flat_map", "sorted", "sliding", "limit"]
    );
    assert_eq!(plan.source_len, 3);
    assert_eq!(plan.steps[0].step, 1);
    assert_eq!(plan.steps[0].kind, StageKind::Source);
    assert_eq!(plan.steps[3].kind, StageKind::Expanding);
    assert_eq!(plan.steps[5].kind, StageKind::Windowing);
    assert!(plan.steps[5].description.contains("k=2"));
    assert!(plan.steps[6].description.contains("n=5"));
}

#[test]
fn breakers_are_counted_and_flagged() {
    let plan = from_vec(vec![1, 2, 3])
        .distinct()
        .map(|x| x * 2)
        .sorted()
        .reverse()
        .explain();
    assert_eq!(plan.breakers, 3);
    assert!(!plan.is_fully_lazy());

    let flagged: Vec<&str> = plan
        .steps
        .iter()
        .filter(|s| s.is_breaker)
        .map(|s| s.stage)
        .collect();
    assert_eq!(flagged, vec!["distinct", "sorted", "reverse"]);
}

#[test]
fn lazy_chain_has_no_breakers() {
    let data = vec![1, 2, 3];
    let plan = Stream::view(&data).skip(1).limit(1).fixed(1).explain();
    assert_eq!(plan.stage_names()[0], "view");
    assert!(plan.is_fully_lazy());
    assert!(plan.steps.iter().all(|s| s.cost_hint < StageKind::Materializing.cost_hint()));
}

#[test]
fn explain_does_not_run_the_stream() -> anyhow::Result<()> {
    let mut s = from_vec(vec![5, 4]).sorted();
    let metrics = s.metrics();
    let _ = s.explain();
    assert!(!s.is_spent());
    assert_eq!(metrics.stage(0).map(|m| m.pulls), Some(0));
    assert_eq!(s.to_vec()?, vec![4, 5]);

    // still available after the stream is spent
    assert_eq!(s.explain().steps.len(), 2);
    Ok(())
}

#[test]
fn explanation_display() {
    let plan = from_vec(vec![1, 2])
        .map(|x| x * 3)
        .sorted()
        .with_config(StreamConfig::named("scores"))
        .explain();
    let text = plan.to_string();
    assert!(text.contains("STREAM PLAN: scores"));
    assert!(text.contains("Step 1: owned (Source)"));
    assert!(text.contains("Step 3: sorted (Materializing) [BREAKER]"));
    assert!(text.contains("Pipeline Breakers:"));
}

#[test]
fn explanation_serializes() -> anyhow::Result<()> {
    let plan = from_vec(vec!['a']).limit(1).explain();
    let json = serde_json::to_value(&plan)?;
    assert_eq!(json["name"], "stream");
    assert_eq!(json["steps"][1]["stage"], "limit");
    assert_eq!(json["steps"][1]["kind"], "PullThrough");
    assert_eq!(json["breakers"], 0);
    Ok(())
}
