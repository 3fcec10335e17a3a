//! # Oriented Box Primitive
//!
//! Generates the mesh for a rectangular solid defined by a center point,
//! two basis directions, and three extents along those directions plus
//! their cross product.

use glam::DVec3;

use config::constants::MIN_AXIS_LENGTH_SQUARED;

use crate::error::SolidError;
use crate::mesh::Mesh;

/// Creates an oriented box mesh.
///
/// The box is centered at `center`, spans `extents.x` along `x_axis`,
/// `extents.y` along `y_axis`, and `extents.z` along the derived
/// `normalize(x × y)` direction. The basis directions are normalized
/// here, so callers may pass unnormalized vectors.
///
/// # Arguments
///
/// * `center` - World-space box center
/// * `x_axis` - First basis direction
/// * `y_axis` - Second basis direction
/// * `extents` - Full edge lengths along X, Y, and the derived Z
///
/// # Returns
///
/// A mesh with 8 vertices and 12 outward-wound triangles.
///
/// # Errors
///
/// Returns [`SolidError::DegenerateBox`] for non-positive extents or a
/// basis that does not span a plane.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use qrelief_mesh::primitives::create_box;
///
/// let mesh = create_box(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::splat(2.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(
    center: DVec3,
    x_axis: DVec3,
    y_axis: DVec3,
    extents: DVec3,
) -> Result<Mesh, SolidError> {
    if extents.x <= 0.0 || extents.y <= 0.0 || extents.z <= 0.0 {
        return Err(SolidError::degenerate_box(format!(
            "extents must be positive: {extents:?}"
        )));
    }
    if x_axis.length_squared() < MIN_AXIS_LENGTH_SQUARED
        || y_axis.length_squared() < MIN_AXIS_LENGTH_SQUARED
    {
        return Err(SolidError::degenerate_box("zero-length basis direction"));
    }

    let x_dir = x_axis.normalize();
    let y_dir = y_axis.normalize();
    let z_dir = x_dir.cross(y_dir);
    if z_dir.length_squared() < MIN_AXIS_LENGTH_SQUARED {
        return Err(SolidError::degenerate_box("basis directions are parallel"));
    }
    let z_dir = z_dir.normalize();

    let half = extents / 2.0;
    let hx = x_dir * half.x;
    let hy = y_dir * half.y;
    let hz = z_dir * half.z;

    let mut mesh = Mesh::with_capacity(8, 12);

    // 8 corners, bottom face first (local z-)
    let v0 = mesh.add_vertex(center - hx - hy - hz);
    let v1 = mesh.add_vertex(center + hx - hy - hz);
    let v2 = mesh.add_vertex(center + hx + hy - hz);
    let v3 = mesh.add_vertex(center - hx + hy - hz);

    // Top face (local z+)
    let v4 = mesh.add_vertex(center - hx - hy + hz);
    let v5 = mesh.add_vertex(center + hx - hy + hz);
    let v6 = mesh.add_vertex(center + hx + hy + hz);
    let v7 = mesh.add_vertex(center - hx + hy + hz);

    // 12 triangles, 2 per face, counter-clockwise from outside.
    // The basis is right-handed, so the winding stays outward for any
    // frame orientation.

    // Bottom face (z-)
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);

    // Top face (z+)
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);

    // Front face (y-)
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    // Back face (y+)
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    // Left face (x-)
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    // Right face (x+)
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_counts() {
        let mesh = create_box(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::splat(1.0)).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.validate());
    }

    #[test]
    fn test_box_is_centered() {
        let center = DVec3::new(3.0, -2.0, 5.0);
        let mesh = create_box(center, DVec3::X, DVec3::Y, DVec3::new(2.0, 4.0, 6.0)).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, DVec3::new(2.0, -4.0, 2.0));
        assert_eq!(max, DVec3::new(4.0, 0.0, 8.0));
    }

    #[test]
    fn test_box_accepts_unnormalized_axes() {
        let scaled =
            create_box(DVec3::ZERO, DVec3::X * 10.0, DVec3::Y * 0.1, DVec3::splat(2.0)).unwrap();
        let unit = create_box(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::splat(2.0)).unwrap();
        let (smin, smax) = scaled.bounding_box().unwrap();
        let (umin, umax) = unit.bounding_box().unwrap();
        assert_eq!(smin, umin);
        assert_eq!(smax, umax);
    }

    #[test]
    fn test_rotated_box_extents() {
        // 45 degree rotation about Z: a unit box's world AABB grows to
        // sqrt(2) in X and Y but keeps Z.
        let x = DVec3::new(1.0, 1.0, 0.0);
        let y = DVec3::new(-1.0, 1.0, 0.0);
        let mesh = create_box(DVec3::ZERO, x, y, DVec3::splat(1.0)).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        let sqrt2 = 2.0_f64.sqrt();
        assert_relative_eq!(max.x - min.x, sqrt2, epsilon = 1e-12);
        assert_relative_eq!(max.y - min.y, sqrt2, epsilon = 1e-12);
        assert_relative_eq!(max.z - min.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_outward_winding() {
        // Every triangle normal must point away from the box center.
        let center = DVec3::new(1.0, 2.0, 3.0);
        let mesh = create_box(center, DVec3::X, DVec3::Y, DVec3::splat(2.0)).unwrap();
        for tri in mesh.triangles() {
            let a = mesh.vertex(tri[0]);
            let b = mesh.vertex(tri[1]);
            let c = mesh.vertex(tri[2]);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(centroid - center) > 0.0,
                "inward-facing triangle {tri:?}"
            );
        }
    }

    #[test]
    fn test_zero_extent_rejected() {
        let result = create_box(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(1.0, 0.0, 1.0));
        assert!(matches!(result, Err(SolidError::DegenerateBox { .. })));
    }

    #[test]
    fn test_negative_extent_rejected() {
        let result = create_box(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(-1.0, 1.0, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_parallel_axes_rejected() {
        let result = create_box(DVec3::ZERO, DVec3::X, DVec3::X, DVec3::splat(1.0));
        assert!(matches!(result, Err(SolidError::DegenerateBox { .. })));
    }
}
