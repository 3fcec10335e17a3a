//! # Build Parameters
//!
//! Immutable per-build configuration for the solid builder. Each
//! placement or dimension change produces a new value; the caller
//! rebuilds explicitly instead of tracking staleness.

use config::constants::{
    DEFAULT_BASE_THICKNESS, DEFAULT_CELL_SIZE, DEFAULT_PROTRUSION_HEIGHT,
};

use crate::error::SolidError;
use crate::frame::PlacementFrame;

/// Geometric parameters for one build.
///
/// Lengths are in the pipeline's unit convention (centimeters by
/// default). `base_thickness` may be zero, which means "no base plate".
///
/// # Example
///
/// ```rust
/// use qrelief_mesh::BuildParameters;
///
/// let params = BuildParameters::default();
/// assert!(params.validate().is_ok());
/// assert!(params.base_thickness > 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BuildParameters {
    /// Edge length of one grid cell (> 0).
    pub cell_size: f64,
    /// Height of a filled cell above the base (> 0).
    pub protrusion_height: f64,
    /// Thickness of the plate under the whole grid (>= 0).
    pub base_thickness: f64,
    /// Local basis and anchor for the whole solid.
    pub frame: PlacementFrame,
}

impl Default for BuildParameters {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            protrusion_height: DEFAULT_PROTRUSION_HEIGHT,
            base_thickness: DEFAULT_BASE_THICKNESS,
            frame: PlacementFrame::default(),
        }
    }
}

impl BuildParameters {
    /// Default dimensions placed at the given frame.
    #[must_use]
    pub fn with_frame(frame: PlacementFrame) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    /// Checks every parameter against its documented bound.
    ///
    /// # Errors
    ///
    /// Returns [`SolidError::InvalidParameter`] naming the first
    /// violated bound. NaN values fail the same way.
    pub fn validate(&self) -> Result<(), SolidError> {
        if !(self.cell_size > 0.0 && self.cell_size.is_finite()) {
            return Err(SolidError::InvalidParameter {
                name: "cell_size",
                value: self.cell_size,
                constraint: "must be positive",
            });
        }
        if !(self.protrusion_height > 0.0 && self.protrusion_height.is_finite()) {
            return Err(SolidError::InvalidParameter {
                name: "protrusion_height",
                value: self.protrusion_height,
                constraint: "must be positive",
            });
        }
        if !(self.base_thickness >= 0.0 && self.base_thickness.is_finite()) {
            return Err(SolidError::InvalidParameter {
                name: "base_thickness",
                value: self.base_thickness,
                constraint: "must be non-negative",
            });
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
