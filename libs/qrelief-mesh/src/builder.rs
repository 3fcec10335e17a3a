//! # Relief Solid Builder
//!
//! Converts a binary grid plus build parameters into one merged solid:
//! a box protrusion per filled cell atop an optional base plate, all in
//! world coordinates.

use glam::DVec3;
use tracing::debug;

use qrelief_grid::BinaryGrid;

use crate::error::SolidError;
use crate::mesh::Mesh;
use crate::ops::boolean;
use crate::params::BuildParameters;
use crate::primitives::create_box;

/// Builds the relief solid for a grid.
///
/// Cell (0, 0) lands in the top-left corner region: column index grows
/// along the frame's +X axis, row index along -Y. Centering uses the row
/// count on both axes, so the symbol is assumed square for placement
/// purposes; columns are still iterated independently per row.
///
/// Protrusion boxes span `protrusion_height + base_thickness` along Z so
/// they fuse with the plate without a seam. Each box is merged into a
/// single accumulator by a sequential boolean union; with a zero base
/// thickness the first filled cell becomes the accumulator instead.
///
/// An empty grid, or a zero base thickness with no filled cells, yields
/// an empty mesh: the explicit "nothing to build" signal. Callers treat
/// it as a no-op, never as an error.
///
/// # Errors
///
/// - [`SolidError::InvalidParameter`] before any geometry is constructed.
/// - [`SolidError::DegenerateBox`] if a box construction fails.
/// - [`SolidError::BooleanFailed`] if a union destroys the accumulator.
///
/// Any error aborts the whole build; a partial accumulator is never
/// returned.
///
/// # Example
///
/// ```rust
/// use qrelief_grid::BinaryGrid;
/// use qrelief_mesh::{build, BuildParameters};
///
/// let grid = BinaryGrid::from_rows(vec![vec![true]]).unwrap();
/// let solid = build(&grid, &BuildParameters::default()).unwrap();
/// assert!(!solid.is_empty());
/// ```
pub fn build(grid: &BinaryGrid, params: &BuildParameters) -> Result<Mesh, SolidError> {
    params.validate()?;

    let qr_size = grid.rows();
    debug!(
        rows = qr_size,
        cols = grid.cols(),
        filled = grid.filled_count(),
        "building relief solid"
    );

    if grid.is_empty() {
        return Ok(Mesh::new());
    }

    let frame = &params.frame;
    let cell = params.cell_size;
    let height = params.protrusion_height;
    let base = params.base_thickness;
    let size = qr_size as f64;

    // Anchor for cell (0, 0): half the grid left and up from the center,
    // lifted to the protrusion mid-height above the base.
    let start = frame.center()
        - frame.x_axis() * (0.5 * cell * (size - 1.0))
        + frame.y_axis() * (0.5 * cell * (size - 1.0))
        + frame.z_axis() * (0.5 * height + base);

    let mut accumulator = if base > 0.0 {
        let plate_center = frame.center() + frame.z_axis() * (0.5 * base);
        let full = cell * size;
        Some(create_box(
            plate_center,
            frame.x_axis(),
            frame.y_axis(),
            DVec3::new(full, full, base),
        )?)
    } else {
        None
    };

    for (i, row) in grid.iter_rows().enumerate() {
        for (j, &filled) in row.iter().enumerate() {
            if !filled {
                continue;
            }

            let center = start + frame.x_axis() * (j as f64 * cell)
                - frame.y_axis() * (i as f64 * cell);
            let cell_box = create_box(
                center,
                frame.x_axis(),
                frame.y_axis(),
                DVec3::new(cell, cell, height + base),
            )?;

            accumulator = Some(match accumulator.take() {
                None => cell_box,
                Some(solid) => {
                    let merged = boolean::union(&solid, &cell_box);
                    if merged.is_empty() {
                        return Err(SolidError::BooleanFailed { row: i, col: j });
                    }
                    merged
                }
            });
        }
    }

    // Zero base thickness and zero filled cells: nothing was ever
    // accumulated, so the result is the documented empty mesh.
    let result = accumulator.unwrap_or_default();
    debug!(
        vertices = result.vertex_count(),
        triangles = result.triangle_count(),
        "relief solid complete"
    );
    Ok(result)
}

// =============================================================================
// TESTS
// =============================================================================
