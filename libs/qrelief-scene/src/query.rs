//! # Spatial Queries
//!
//! Point-in-solid lookup used to pick the placement target body.

use glam::DVec3;

use config::constants::EPSILON;
use qrelief_mesh::Mesh;

/// Tests if a ray intersects a triangle.
///
/// Uses the Möller–Trumbore algorithm.
///
/// # Arguments
///
/// * `ray_origin` - Origin of the ray
/// * `ray_dir` - Direction of the ray (need not be normalized)
/// * `v0`, `v1`, `v2` - Triangle vertices
///
/// # Returns
///
/// `Some(t)` with the ray parameter at the intersection, or `None`.
#[must_use]
pub fn ray_triangle_intersect(
    ray_origin: DVec3,
    ray_dir: DVec3,
    v0: DVec3,
    v1: DVec3,
    v2: DVec3,
) -> Option<f64> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = ray_dir.cross(edge2);
    let a = edge1.dot(h);

    // Ray parallel to the triangle plane
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray_origin - v0;
    let u = f * s.dot(h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray_dir.dot(q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Checks if a point is inside a closed mesh using ray casting.
///
/// Casts a ray in the +X direction and counts crossings; an odd count
/// means inside. Points exactly on the boundary are not guaranteed a
/// stable answer.
#[must_use]
pub fn point_in_mesh(point: DVec3, mesh: &Mesh) -> bool {
    let crossings = (0..mesh.triangle_count())
        .filter(|&i| {
            let [v0, v1, v2] = mesh.triangle_points(i);
            ray_triangle_intersect(point, DVec3::X, v0, v1, v2).is_some()
        })
        .count();

    crossings % 2 == 1
}

// =============================================================================
// TESTS
// =============================================================================
