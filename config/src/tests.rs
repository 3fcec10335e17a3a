//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_min_axis_length_squared_is_tighter_than_epsilon() {
    assert!(
        MIN_AXIS_LENGTH_SQUARED < EPSILON,
        "axis degeneracy bound should be below the general tolerance"
    );
}

// =============================================================================
// BUILD DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_cell_size_is_half_inch() {
    // 0.5 in * 2.54 cm/in
    assert_eq!(DEFAULT_CELL_SIZE, 1.27);
}

#[test]
fn test_default_protrusion_height_is_quarter_inch() {
    assert_eq!(DEFAULT_PROTRUSION_HEIGHT, 0.635);
}

#[test]
fn test_default_base_thickness_is_quarter_inch() {
    assert_eq!(DEFAULT_BASE_THICKNESS, 0.635);
}

#[test]
fn test_defaults_are_positive() {
    assert!(DEFAULT_CELL_SIZE > 0.0);
    assert!(DEFAULT_PROTRUSION_HEIGHT > 0.0);
    assert!(DEFAULT_BASE_THICKNESS >= 0.0);
}

// =============================================================================
// SYMBOL LIMIT TESTS
// =============================================================================

#[test]
fn test_version_bounds() {
    assert_eq!(MIN_SYMBOL_VERSION, 1);
    assert_eq!(MAX_SYMBOL_VERSION, 40);
    assert!(MIN_SYMBOL_VERSION < MAX_SYMBOL_VERSION);
}

#[test]
fn test_symbol_width_matches_standard() {
    // QR Code Model 2: width = 17 + 4 * version
    assert_eq!(symbol_width(MIN_SYMBOL_VERSION), 21);
    assert_eq!(symbol_width(2), 25);
    assert_eq!(symbol_width(MAX_SYMBOL_VERSION), 177);
}

#[test]
fn test_default_message_is_not_empty() {
    assert!(!DEFAULT_MESSAGE.is_empty());
}

#[test]
fn test_default_grid_file_is_delimited_text() {
    assert!(DEFAULT_GRID_FILE.ends_with(".csv"));
}
