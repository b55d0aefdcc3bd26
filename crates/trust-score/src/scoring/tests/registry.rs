use crate::scoring::{MetricDefinition, MetricRegistry, RegistryError, MAX_MERIT_VALUE};

#[test]
fn duplicate_registration_leaves_builder_unchanged() {
    let mut builder = MetricRegistry::builder();
    builder
        .register(MetricDefinition::mandatory("Encryption", 25.0))
        .expect("first registration");

    let error = builder
        .register(MetricDefinition::optional("Encryption", 10.0))
        .expect_err("duplicate rejected");

    assert_eq!(
        error,
        RegistryError::DuplicateMetric {
            name: "Encryption".to_string()
        }
    );
    assert_eq!(builder.len(), 1);

    let registry = builder.build().expect("registry builds");
    let metric = registry.get("Encryption").expect("metric present");
    assert!(metric.must_implement());
    assert_eq!(metric.merit_value(), 25.0);
}

#[test]
fn names_are_trimmed_before_uniqueness_check() {
    let mut builder = MetricRegistry::builder();
    builder
        .register(MetricDefinition::optional("High_Availability", 24.0))
        .expect("registered");

    let error = builder
        .register(MetricDefinition::optional("  High_Availability ", 24.0))
        .expect_err("trimmed duplicate rejected");

    assert!(matches!(error, RegistryError::DuplicateMetric { .. }));
}

#[test]
fn non_positive_merit_is_invalid() {
    for merit in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let mut builder = MetricRegistry::builder();
        let error = builder
            .register(MetricDefinition::optional("Weak_Passwords", merit))
            .expect_err("invalid merit rejected");

        match error {
            RegistryError::InvalidMetric { name, .. } => assert_eq!(name, "Weak_Passwords"),
            other => panic!("expected invalid metric, got {other:?}"),
        }
        assert!(builder.is_empty());
    }
}

#[test]
fn merit_beyond_ceiling_is_invalid() {
    let error = MetricRegistry::from_definitions(vec![
        MetricDefinition::mandatory("M1", 1e306),
        MetricDefinition::optional("M2", 1e306),
    ])
    .expect_err("oversized merit rejected");

    match error {
        RegistryError::InvalidMetric { name, reason } => {
            assert_eq!(name, "M1");
            assert!(reason.contains("exceeds"));
        }
        other => panic!("expected invalid metric, got {other:?}"),
    }

    let registry = MetricRegistry::from_definitions(vec![MetricDefinition::mandatory(
        "M1",
        MAX_MERIT_VALUE,
    )])
    .expect("merit at the ceiling accepted");
    assert!(registry.sum_of_merit_value().is_finite());
}

#[test]
fn blank_name_is_invalid() {
    let mut builder = MetricRegistry::builder();
    let error = builder
        .register(MetricDefinition::optional("   ", 5.0))
        .expect_err("blank name rejected");

    assert!(matches!(error, RegistryError::InvalidMetric { .. }));
}

#[test]
fn empty_registry_cannot_be_built() {
    let error = MetricRegistry::builder()
        .build()
        .expect_err("empty registry rejected");
    assert_eq!(error, RegistryError::EmptyRegistry);

    let error = MetricRegistry::from_definitions(Vec::<MetricDefinition>::new())
        .expect_err("empty registry rejected");
    assert_eq!(error, RegistryError::EmptyRegistry);
}

#[test]
fn filtered_views_preserve_registration_order() {
    let registry = super::common::mixed_registry();

    let mandatory: Vec<&str> = registry.mandatory().iter().map(|m| m.name()).collect();
    let optional: Vec<&str> = registry.optional().iter().map(|m| m.name()).collect();

    assert_eq!(mandatory, vec!["SSL/TLS", "Encryption", "Access_Control"]);
    assert_eq!(optional, vec!["Weak_Passwords", "Network_Failover"]);
    assert_eq!(registry.sum_of_merit_value(), 116.0);
}

#[test]
fn standard_catalog_matches_reference_layout() {
    let registry = MetricRegistry::standard();

    assert_eq!(registry.len(), 25);
    assert_eq!(registry.mandatory().len(), 6);
    assert_eq!(registry.optional().len(), 19);
    assert_eq!(registry.metrics()[0].name(), "SSL/TLS");
    assert!(registry
        .mandatory()
        .iter()
        .all(|metric| metric.merit_value() == 25.0));
    assert!(registry
        .optional()
        .iter()
        .all(|metric| metric.merit_value() == 24.0));
    assert_eq!(registry.sum_of_merit_value(), 606.0);
}
