use crate::forces::QuotientForce;
use crate::spatial::Boundary;
use crate::utils::{LayoutConfig, LayoutError, DEFAULT_LAYOUT_CONFIG};

#[test]
fn test_default_matches_constant() {
    assert_eq!(LayoutConfig::default(), DEFAULT_LAYOUT_CONFIG);
    assert!(LayoutConfig::default().validate().is_ok());
}

#[test]
fn test_new_fills_missing_values_from_defaults() {
    let repulsive = QuotientForce::new(-1.0, -1.0, 0.0);
    let config = LayoutConfig::new(None, Some(0.5), None, Some(repulsive), None, None, Some(0.05), None);
    assert_eq!(config.merge_threshold, 0.5);
    assert_eq!(config.repulsive, repulsive);
    assert_eq!(config.stop_temperature, 0.05);
    assert_eq!(config.domain, DEFAULT_LAYOUT_CONFIG.domain);
    assert_eq!(config.attractive, DEFAULT_LAYOUT_CONFIG.attractive);
    assert_eq!(config.cooling_factor, DEFAULT_LAYOUT_CONFIG.cooling_factor);
}

#[test]
fn test_for_node_count_uses_square_root_side() {
    let config = LayoutConfig::for_node_count(16);
    assert_eq!(config.domain, Boundary::new(0.0, 0.0, 4.0, 4.0));
}

#[test]
fn test_validate_rejects_bad_domain() {
    let config = LayoutConfig::default().with_domain(Boundary::new(0.0, 0.0, -1.0, 5.0));
    assert_eq!(config.validate(), Err(LayoutError::InvalidDomain));

    let config = LayoutConfig::default().with_domain(Boundary::new(0.0, f64::NAN, 1.0, 5.0));
    assert_eq!(config.validate(), Err(LayoutError::InvalidDomain));
}

#[test]
fn test_validate_rejects_bad_temperatures_and_factors() {
    let mut config = LayoutConfig::default();
    config.start_temperature = 0.0;
    assert_eq!(config.validate(), Err(LayoutError::InvalidTemperature(0.0)));

    let mut config = LayoutConfig::default();
    config.cooling_factor = 1.0;
    assert_eq!(config.validate(), Err(LayoutError::InvalidCoolingFactor(1.0)));

    let mut config = LayoutConfig::default();
    config.merge_threshold = -0.1;
    assert_eq!(config.validate(), Err(LayoutError::InvalidThreshold(-0.1)));
}

#[test]
fn test_error_display() {
    let err = LayoutError::NodeIndexOutOfRange { index: 7, node_count: 3 };
    assert_eq!(err.to_string(), "Node index 7 is out of range for a graph of 3 nodes");
}
