use crate::utils::{QuadTreeError, SimulationConstants, DEFAULT_MAX_DEPTH};

#[test]
fn test_default_constants() {
    let constants = SimulationConstants::default();
    assert_eq!(constants.gravitational_constant, 9.81);
    assert_eq!(constants.theta, 0.5);
    assert_eq!(constants.max_depth, DEFAULT_MAX_DEPTH);
    assert!(constants.validate().is_ok());
}

#[test]
fn test_new_overrides_only_given_values() {
    let constants = SimulationConstants::new(None, Some(1.0), None, Some(100.0), None, Some(8));
    assert_eq!(constants.gravitational_constant, 9.81);
    assert_eq!(constants.theta, 1.0);
    assert_eq!(constants.world_width, 100.0);
    assert_eq!(constants.world_height, 600.0);
    assert_eq!(constants.max_depth, 8);
}

#[test]
fn test_validate_rejects_negative_theta() {
    let constants = SimulationConstants::new(None, Some(-0.1), None, None, None, None);
    match constants.validate() {
        Err(QuadTreeError::InvalidParameter(_)) => {}
        other => panic!("Expected InvalidParameter, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_empty_world() {
    let constants = SimulationConstants::new(None, None, None, Some(0.0), None, None);
    assert_eq!(constants.validate(), Err(QuadTreeError::InvalidBounds));
}

#[test]
fn test_world_bounds_and_derived_settings() {
    let constants = SimulationConstants::new(Some(2.0), Some(0.7), None, Some(50.0), Some(40.0), Some(12));
    let bounds = constants.world_bounds();
    assert_eq!(bounds.width(), 50.0);
    assert_eq!(bounds.height(), 40.0);
    assert_eq!(constants.quadtree_config().max_depth, 12);
    let bh = constants.barnes_hut();
    assert_eq!(bh.theta, 0.7);
    assert_eq!(bh.gravitational_constant, 2.0);
}
