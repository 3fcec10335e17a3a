//! # Polygon for BSP Operations
//!
//! Convex polygon with plane and splitting support.

use glam::DVec3;

use super::plane::{Classification, Plane};

// =============================================================================
// SPLIT BUCKETS
// =============================================================================

/// Destination lists for a polygon split.
///
/// Shared across the polygons of one splitting pass; whole polygons are
/// moved into their bucket, so only spanning polygons allocate.
#[derive(Debug, Default)]
pub(super) struct SplitBuckets {
    /// Coplanar polygons facing the same direction as the plane.
    pub coplanar_front: Vec<Polygon>,
    /// Coplanar polygons facing the opposite direction.
    pub coplanar_back: Vec<Polygon>,
    /// Polygons entirely in front of the plane.
    pub front: Vec<Polygon>,
    /// Polygons entirely behind the plane.
    pub back: Vec<Polygon>,
}

// =============================================================================
// POLYGON
// =============================================================================

/// A convex polygon with its containing plane.
#[derive(Debug, Clone)]
pub(super) struct Polygon {
    /// Vertices in counter-clockwise order when viewed from the front.
    vertices: Vec<DVec3>,
    plane: Plane,
}

impl Polygon {
    /// Creates a polygon from vertices.
    ///
    /// Returns None if the vertices do not determine a plane.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Creates a split fragment that inherits the parent's plane.
    ///
    /// Recomputing the plane from fragment vertices would accumulate
    /// noise across repeated splits; fragments stay on the parent's
    /// plane by construction.
    fn fragment(vertices: Vec<DVec3>, plane: Plane) -> Option<Self> {
        (vertices.len() >= 3).then_some(Self { vertices, plane })
    }

    /// The polygon's vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// The polygon's plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Reverses winding order and plane orientation in place.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Classifies every vertex against a plane and derives the verdict
    /// for the polygon as a whole.
    fn classify_vertices(&self, plane: &Plane) -> (Classification, Vec<Classification>) {
        let sides: Vec<Classification> = self
            .vertices
            .iter()
            .map(|&v| plane.classify_point(v))
            .collect();

        let has_front = sides.contains(&Classification::Front);
        let has_back = sides.contains(&Classification::Back);
        let overall = match (has_front, has_back) {
            (true, true) => Classification::Spanning,
            (true, false) => Classification::Front,
            (false, true) => Classification::Back,
            (false, false) => Classification::Coplanar,
        };
        (overall, sides)
    }

    /// Classifies this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        self.classify_vertices(plane).0
    }

    /// Splits this polygon by a plane into the shared buckets,
    /// consuming it.
    ///
    /// Non-spanning polygons move into their bucket whole. Spanning
    /// polygons are cut along the plane; the two convex pieces land in
    /// `front` and `back`. Coplanar polygons are routed by facing
    /// direction.
    pub fn split_into(self, plane: &Plane, buckets: &mut SplitBuckets) {
        let (overall, sides) = self.classify_vertices(plane);
        match overall {
            Classification::Coplanar => {
                if self.plane.normal().dot(plane.normal()) > 0.0 {
                    buckets.coplanar_front.push(self);
                } else {
                    buckets.coplanar_back.push(self);
                }
            }
            Classification::Front => buckets.front.push(self),
            Classification::Back => buckets.back.push(self),
            Classification::Spanning => {
                let count = self.vertices.len();
                let mut front_verts = Vec::with_capacity(count + 1);
                let mut back_verts = Vec::with_capacity(count + 1);

                for (i, &vi) in self.vertices.iter().enumerate() {
                    // Coplanar vertices belong to both pieces.
                    match sides[i] {
                        Classification::Front => front_verts.push(vi),
                        Classification::Back => back_verts.push(vi),
                        _ => {
                            front_verts.push(vi);
                            back_verts.push(vi);
                        }
                    }

                    // A strict side change along this edge inserts the
                    // crossing point into both pieces.
                    let j = (i + 1) % count;
                    if matches!(
                        (sides[i], sides[j]),
                        (Classification::Front, Classification::Back)
                            | (Classification::Back, Classification::Front)
                    ) {
                        let vj = self.vertices[j];
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let cut = vi.lerp(vj, di / (di - dj));
                        front_verts.push(cut);
                        back_verts.push(cut);
                    }
                }

                if let Some(piece) = Self::fragment(front_verts, self.plane) {
                    buckets.front.push(piece);
                }
                if let Some(piece) = Self::fragment(back_verts, self.plane) {
                    buckets.back.push(piece);
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
