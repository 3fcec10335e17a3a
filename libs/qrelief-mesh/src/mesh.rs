//! # Mesh Data Structure
//!
//! Triangle-mesh boundary representation of a solid body. This is the
//! shape handed to the scene layer: world-coordinate, closed, and
//! outward-wound when produced by the builder.

use glam::DVec3;

/// A triangle mesh with vertex positions and face index triples.
///
/// All geometry calculations use f64 throughout. An empty mesh is the
/// explicit "nothing to build" signal used by the builder and treated as
/// a no-op by every downstream consumer.
///
/// # Example
///
/// ```rust
/// use qrelief_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    positions: Vec<DVec3>,
    faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh carries no geometry.
    ///
    /// Stray vertices without faces do not count as geometry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        self.positions.push(position);
        (self.positions.len() - 1) as u32
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push([v0, v1, v2]);
    }

    /// Appends a convex polygon as a triangle fan from its first vertex.
    ///
    /// Fewer than three points append nothing. Winding follows the point
    /// order.
    pub fn add_polygon_fan(&mut self, points: &[DVec3]) {
        let [first, rest @ ..] = points else { return };
        if rest.len() < 2 {
            return;
        }
        let anchor = self.add_vertex(*first);
        for p in rest {
            self.add_vertex(*p);
        }
        for offset in 1..rest.len() {
            self.add_triangle(anchor, anchor + offset as u32, anchor + offset as u32 + 1);
        }
    }

    /// Returns a reference to the vertices.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns a reference to the triangles.
    #[inline]
    #[must_use]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    #[inline]
    #[must_use]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.positions[index as usize]
    }

    /// Returns the three corner positions of a triangle.
    ///
    /// # Panics
    ///
    /// Panics if the triangle index is out of range.
    #[must_use]
    pub fn triangle_points(&self, index: usize) -> [DVec3; 3] {
        self.faces[index].map(|v| self.positions[v as usize])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns `None` for an empty mesh, `(min, max)` corners otherwise.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        self.positions
            .split_first()
            .map(|(&first, rest)| {
                rest.iter()
                    .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)))
            })
    }

    /// Validates the mesh for structural correctness.
    ///
    /// Every face must reference in-range vertices and use three distinct
    /// indices. Returns true if valid.
    #[must_use]
    pub fn validate(&self) -> bool {
        let limit = self.positions.len() as u32;
        self.faces.iter().all(|&[a, b, c]| {
            a < limit && b < limit && c < limit && a != b && b != c && a != c
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.bounding_box().is_none());
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, 5.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, -2.0, 6.0));
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_triangle_points() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.triangle_points(0), [DVec3::ZERO, DVec3::X, DVec3::Y]);
    }

    #[test]
    fn test_add_polygon_fan_quad() {
        let mut mesh = Mesh::new();
        mesh.add_polygon_fan(&[
            DVec3::ZERO,
            DVec3::X,
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::Y,
        ]);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.validate());
    }

    #[test]
    fn test_add_polygon_fan_too_few_points() {
        let mut mesh = Mesh::new();
        mesh.add_polygon_fan(&[DVec3::ZERO, DVec3::X]);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_mesh_validate_valid() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        assert!(mesh.validate());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_repeated_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_triangle(0, 1, 1);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_vertices_without_triangles_is_empty() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        assert!(mesh.is_empty());
    }
}
