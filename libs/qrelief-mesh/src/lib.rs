//! # QRelief Mesh
//!
//! Solid construction for the QR relief pipeline. Converts a binary grid
//! from `qrelief-grid` into one merged triangle-mesh solid.
//!
//! ## Architecture
//!
//! ```text
//! qrelief-grid (BinaryGrid) → qrelief-mesh (Mesh) → qrelief-scene
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust with no native dependencies:
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Primitives**: Oriented box generation
//! - **Builder**: Sequential per-cell union into one accumulator
//!
//! ## Usage
//!
//! ```rust
//! use qrelief_grid::BinaryGrid;
//! use qrelief_mesh::{build, BuildParameters};
//!
//! let grid = BinaryGrid::from_rows(vec![vec![true, false]]).unwrap();
//! let solid = build(&grid, &BuildParameters::default()).unwrap();
//! assert!(solid.validate());
//! ```

pub mod builder;
pub mod error;
pub mod frame;
pub mod mesh;
pub mod ops;
pub mod params;
pub mod primitives;

pub use builder::build;
pub use error::SolidError;
pub use frame::PlacementFrame;
pub use mesh::Mesh;
pub use ops::boolean::{difference, intersection, union};
pub use params::BuildParameters;

use qrelief_grid::GridSource;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Resolves a grid source and builds its relief solid.
///
/// This is the main entry point for the pipeline: one call takes a
/// declared origin (generated symbol or imported file) through grid
/// resolution and solid construction. An encoder rejection resolves to
/// an empty grid and therefore an empty solid, keeping the invoking
/// layer interactive.
///
/// # Errors
///
/// Returns [`SolidError::Grid`] for loader failures and the builder's
/// own errors for geometry failures.
///
/// # Example
///
/// ```rust,ignore
/// use qrelief_grid::{EncodeOptions, GridSource};
/// use qrelief_mesh::{build_from_source, BuildParameters};
///
/// let source = GridSource::Generated {
///     message: "HELLO".to_string(),
///     options: EncodeOptions::default(),
/// };
/// let solid = build_from_source(&source, &BuildParameters::default())?;
/// assert!(!solid.is_empty());
/// ```
pub fn build_from_source(
    source: &GridSource,
    params: &BuildParameters,
) -> Result<Mesh, SolidError> {
    let grid = source.resolve()?;
    build(&grid, params)
}
