//! # Placement Frame
//!
//! Orthonormal local basis anchored at a world-space center point.
//! Defines how grid rows and columns map to world directions.

use glam::DVec3;

use config::constants::MIN_AXIS_LENGTH_SQUARED;

use crate::error::SolidError;

/// A right-handed local frame for solid placement.
///
/// The X and Y axes are normalized at construction; the Z axis is always
/// recomputed as `normalize(x × y)` and never supplied independently, so
/// the frame stays right-handed regardless of minor input imprecision.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use qrelief_mesh::PlacementFrame;
///
/// let frame = PlacementFrame::new(DVec3::ZERO, DVec3::X * 3.0, DVec3::Y).unwrap();
/// assert_eq!(frame.x_axis(), DVec3::X);
/// assert_eq!(frame.z_axis(), DVec3::Z);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PlacementFrame {
    center: DVec3,
    x_axis: DVec3,
    y_axis: DVec3,
    z_axis: DVec3,
}

impl PlacementFrame {
    /// Creates a frame from a center point and two in-plane directions.
    ///
    /// # Errors
    ///
    /// Returns [`SolidError::DegenerateFrame`] if either direction is
    /// (near) zero-length or the pair is (near) parallel.
    pub fn new(center: DVec3, x_axis: DVec3, y_axis: DVec3) -> Result<Self, SolidError> {
        if x_axis.length_squared() < MIN_AXIS_LENGTH_SQUARED {
            return Err(SolidError::DegenerateFrame {
                reason: "x axis has zero length",
            });
        }
        if y_axis.length_squared() < MIN_AXIS_LENGTH_SQUARED {
            return Err(SolidError::DegenerateFrame {
                reason: "y axis has zero length",
            });
        }

        let x_axis = x_axis.normalize();
        let y_axis = y_axis.normalize();

        let z_axis = x_axis.cross(y_axis);
        if z_axis.length_squared() < MIN_AXIS_LENGTH_SQUARED {
            return Err(SolidError::DegenerateFrame {
                reason: "axes are parallel",
            });
        }

        Ok(Self {
            center,
            x_axis,
            y_axis,
            z_axis: z_axis.normalize(),
        })
    }

    /// Frame aligned with the world axes, centered at the given point.
    #[must_use]
    pub fn axis_aligned(center: DVec3) -> Self {
        Self {
            center,
            x_axis: DVec3::X,
            y_axis: DVec3::Y,
            z_axis: DVec3::Z,
        }
    }

    /// World-space anchor of the frame.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Unit X axis (column direction).
    #[must_use]
    pub fn x_axis(&self) -> DVec3 {
        self.x_axis
    }

    /// Unit Y axis (negated row direction).
    #[must_use]
    pub fn y_axis(&self) -> DVec3 {
        self.y_axis
    }

    /// Unit Z axis, `normalize(x × y)`.
    #[must_use]
    pub fn z_axis(&self) -> DVec3 {
        self.z_axis
    }
}

impl Default for PlacementFrame {
    fn default() -> Self {
        Self::axis_aligned(DVec3::ZERO)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axes_are_normalized() {
        let frame =
            PlacementFrame::new(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 5.0, 0.0))
                .unwrap();
        assert_relative_eq!(frame.x_axis().length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.y_axis().length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.z_axis().length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_z_axis_is_right_handed() {
        let frame = PlacementFrame::new(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
        assert_eq!(frame.z_axis(), DVec3::Z);

        // Swapping X and Y flips the normal
        let flipped = PlacementFrame::new(DVec3::ZERO, DVec3::Y, DVec3::X).unwrap();
        assert_eq!(flipped.z_axis(), -DVec3::Z);
    }

    #[test]
    fn test_tilted_frame() {
        let frame = PlacementFrame::new(
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(-1.0, 1.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(frame.z_axis().z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.x_axis().dot(frame.y_axis()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_axis_rejected() {
        let err = PlacementFrame::new(DVec3::ZERO, DVec3::ZERO, DVec3::Y).unwrap_err();
        assert!(matches!(err, SolidError::DegenerateFrame { .. }));
    }

    #[test]
    fn test_parallel_axes_rejected() {
        let err = PlacementFrame::new(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).unwrap_err();
        assert!(matches!(err, SolidError::DegenerateFrame { .. }));
    }

    #[test]
    fn test_default_is_world_aligned_at_origin() {
        let frame = PlacementFrame::default();
        assert_eq!(frame.center(), DVec3::ZERO);
        assert_eq!(frame.x_axis(), DVec3::X);
        assert_eq!(frame.y_axis(), DVec3::Y);
        assert_eq!(frame.z_axis(), DVec3::Z);
    }
}
