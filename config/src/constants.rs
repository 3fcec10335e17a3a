//! # Configuration Constants
//!
//! Centralized constants for the QR relief pipeline. Precision tolerances,
//! default build dimensions, and symbol version bounds are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Build Defaults**: Default cell, protrusion, and base dimensions
//! - **Symbol Limits**: QR symbol version bounds
//! - **Samples**: Default payload used by demos and tests

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum squared length for a direction vector to count as non-degenerate.
///
/// Placement frame axes and box basis directions shorter than this are
/// rejected before any geometry is constructed, since normalizing them
/// would amplify numerical noise into arbitrary directions.
pub const MIN_AXIS_LENGTH_SQUARED: f64 = 1e-12;

// =============================================================================
// BUILD DEFAULTS (centimeters)
// =============================================================================

/// Default edge length of one grid cell.
///
/// Half an inch expressed in centimeters, matching the most common physical
/// scale for printable QR plaques.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CELL_SIZE;
///
/// assert_eq!(DEFAULT_CELL_SIZE, 1.27);
/// ```
pub const DEFAULT_CELL_SIZE: f64 = 1.27;

/// Default height of a filled cell's protrusion above the base.
///
/// A quarter inch expressed in centimeters.
pub const DEFAULT_PROTRUSION_HEIGHT: f64 = 0.635;

/// Default thickness of the flat plate under the whole grid.
///
/// A quarter inch expressed in centimeters. Zero is a legal value and
/// means "no base plate": only the filled cells produce geometry.
pub const DEFAULT_BASE_THICKNESS: f64 = 0.635;

// =============================================================================
// SYMBOL LIMITS
// =============================================================================

/// Smallest QR symbol version (21x21 modules).
pub const MIN_SYMBOL_VERSION: u8 = 1;

/// Largest QR symbol version (177x177 modules).
///
/// Version 40 is also the practical upper bound for build cost: the solid
/// builder performs one box construction and one boolean union per filled
/// cell, so cell counts beyond this are not designed for.
pub const MAX_SYMBOL_VERSION: u8 = 40;

/// Module count along one side of a symbol of the given version.
///
/// # Example
///
/// ```rust
/// use config::constants::symbol_width;
///
/// assert_eq!(symbol_width(1), 21);
/// assert_eq!(symbol_width(40), 177);
/// ```
#[must_use]
pub const fn symbol_width(version: u8) -> usize {
    17 + 4 * version as usize
}

// =============================================================================
// SAMPLES
// =============================================================================

/// Default payload encoded when the caller supplies no message.
pub const DEFAULT_MESSAGE: &str = "https://example.com/qrelief";

/// Default file name for a demo grid import, a 17x17 sample symbol.
///
/// Resolved relative to the caller's working directory; the importer
/// reports a missing file rather than falling back to generation.
pub const DEFAULT_GRID_FILE: &str = "QR-17x.csv";
