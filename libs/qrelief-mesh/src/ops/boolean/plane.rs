//! # Plane for BSP Operations
//!
//! Plane representation with point classification.

use glam::DVec3;

/// Epsilon for plane-side classification.
pub(super) const PLANE_EPSILON: f64 = 1e-5;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point or polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Classification {
    /// On the plane (within tolerance).
    Coplanar,
    /// On the positive side.
    Front,
    /// On the negative side.
    Back,
    /// Vertices on both sides (polygons only).
    Spanning,
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane defined by a unit normal and distance from origin.
#[derive(Debug, Clone, Copy)]
pub(super) struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    /// Creates a plane from three points in counter-clockwise order.
    ///
    /// Returns None for a degenerate (near-zero-area) triple.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        if cross.length() < PLANE_EPSILON {
            return None;
        }
        let normal = cross.normalize();
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// The unit normal.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Reverses the plane's orientation in place.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance from the point to the plane.
    ///
    /// Positive means front, negative back, zero on the plane.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classifies a point relative to this plane.
    pub fn classify_point(&self, point: DVec3) -> Classification {
        match self.signed_distance(point) {
            d if d > PLANE_EPSILON => Classification::Front,
            d if d < -PLANE_EPSILON => Classification::Back,
            _ => Classification::Coplanar,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
