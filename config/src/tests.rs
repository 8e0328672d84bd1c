//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_normal_tolerance_is_small() {
    assert!(NORMAL_TOLERANCE > 0.0);
    assert!(NORMAL_TOLERANCE < 1e-3, "NORMAL_TOLERANCE should be tight");
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_min_segments_at_least_three() {
    // A ring needs at least 3 points to form a polygon
    assert!(MIN_SEGMENTS >= 3);
}

#[test]
fn test_min_rings_leaves_one_ring() {
    // rings - 1 latitude rings are generated between the poles
    assert!(MIN_RINGS >= 2);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_vertices_fits_u32_indices() {
    assert!(MAX_VERTICES as u64 <= u32::MAX as u64);
}

#[test]
fn test_terrain_preset_within_limit() {
    let size = (2 * TERRAIN_HALF_EXTENT + 1) as usize;
    assert!(size * size <= MAX_VERTICES);
}

#[test]
fn test_length_bounds_keep_squares_representable() {
    assert!(MIN_LENGTH > 0.0 && MIN_LENGTH < MAX_LENGTH);
    // Products of two lengths, squared, stay normal f32 values
    assert!((MIN_LENGTH * MIN_LENGTH).powi(2) >= f32::MIN_POSITIVE);
    assert!((MAX_LENGTH * MAX_LENGTH).powi(2) < f32::MAX);
}

#[test]
fn test_presets_within_length_bounds() {
    for length in [
        ARROW_SHAFT_RADIUS,
        ARROW_SHAFT_LENGTH,
        ARROW_HEAD_RADIUS,
        ARROW_HEAD_LENGTH,
        POINT_LIGHT_RADIUS,
        TERRAIN_RANGE,
    ] {
        assert!((MIN_LENGTH..=MAX_LENGTH).contains(&length));
    }
}

// =============================================================================
// PRESET TESTS
// =============================================================================

#[test]
fn test_arrow_head_wider_than_shaft() {
    assert!(ARROW_HEAD_RADIUS > ARROW_SHAFT_RADIUS);
    assert!(ARROW_SEGMENTS >= MIN_SEGMENTS);
}

#[test]
fn test_point_light_preset_is_valid() {
    assert!(POINT_LIGHT_SEGMENTS >= MIN_SEGMENTS);
    assert!(POINT_LIGHT_RINGS >= MIN_RINGS);
    assert!(POINT_LIGHT_RADIUS > 0.0);
}

// =============================================================================
// GLOBAL CONFIG TESTS
// =============================================================================

#[test]
fn test_default_config_is_valid() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.normal_tolerance, NORMAL_TOLERANCE);
    assert_eq!(cfg.max_vertices, MAX_VERTICES);
}

#[test]
fn test_config_new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 16).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-5, 0).unwrap_err(),
        ConfigError::InvalidVertexLimit(0)
    );
    assert!(GlobalConfig::new(f32::NAN, 16).is_err());
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidTolerance(-1.0);
    assert!(err.to_string().contains("normal_tolerance"));
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_is_unit_length() {
    assert!(is_unit_length(1.0, NORMAL_TOLERANCE));
    assert!(is_unit_length(1.0 - 5e-6, NORMAL_TOLERANCE));
    assert!(!is_unit_length(1.001, NORMAL_TOLERANCE));
    assert!(is_unit_length(1.001, 1e-2));
}

#[test]
fn test_is_unit_length_rejects_nan() {
    assert!(!is_unit_length(f32::NAN, NORMAL_TOLERANCE));
    assert!(!is_unit_length(f32::INFINITY, NORMAL_TOLERANCE));
}
