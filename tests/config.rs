use ironstream::*;

#[test]
fn defaults() {
    let cfg = StreamConfig::default();
    assert_eq!(cfg.name, "stream");
    assert!(!cfg.print_metrics);
    assert_eq!(cfg.debug_sample_limit, 10);
}

#[test]
fn builder_setters() {
    let cfg = StreamConfig::named("orders")
        .with_print_metrics(true)
        .with_debug_sample_limit(2);
    assert_eq!(cfg.name, "orders");
    assert!(cfg.print_metrics);
    assert_eq!(cfg.debug_sample_limit, 2);
}

#[test]
fn json_fills_missing_fields_with_defaults() -> anyhow::Result<()> {
    let cfg = StreamConfig::from_json_str(r#"{ "print_metrics": true }"#)?;
    assert_eq!(cfg.name, "stream");
    assert!(cfg.print_metrics);
    assert_eq!(cfg.debug_sample_limit, 10);

    let empty = StreamConfig::from_json_str("{}")?;
    assert_eq!(empty, StreamConfig::default());
    Ok(())
}

#[test]
fn malformed_json_is_invalid_configuration() {
    for text in ["not json", r#"{ "debug_sample_limit": -1 }"#, "[1, 2]"] {
        let res = StreamConfig::from_json_str(text);
        assert!(
            matches!(res, Err(StreamError::InvalidConfiguration(_))),
            "{text}: {res:?}"
        );
    }
}

#[test]
fn config_round_trips_through_serde() -> anyhow::Result<()> {
    let cfg = StreamConfig::named("audit").with_debug_sample_limit(4);
    let text = serde_json::to_string(&cfg)?;
    assert_eq!(StreamConfig::from_json_str(&text)?, cfg);
    Ok(())
}

#[test]
fn with_config_names_the_stream() -> anyhow::Result<()> {
    let mut s = from_vec(vec![1, 2, 3]).with_config(StreamConfig::named("numbers"));
    assert_eq!(s.config().name, "numbers");
    assert_eq!(s.explain().name, "numbers");
    assert_eq!(s.metrics().label(), "numbers");
    assert_eq!(s.sum()?, 6);
    Ok(())
}
