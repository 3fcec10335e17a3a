//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry operations using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine; result.invert()
//! - Intersection: A.invert(); B.clipTo(A); B.invert(); A.clipTo(B); B.clipTo(A); combine; result.invert()
//!
//! ## Example
//!
//! ```rust
//! use qrelief_mesh::ops::boolean::union;
//! use qrelief_mesh::Mesh;
//!
//! let a = Mesh::new();
//! let b = Mesh::new();
//! let result = union(&a, &b);
//! assert!(result.is_empty());
//! ```

mod bsp;
mod plane;
mod polygon;

use crate::Mesh;
use bsp::BspNode;
use polygon::Polygon;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Computes the union of two meshes.
///
/// Returns a mesh occupying the combined volume of both inputs. Empty
/// operands short-circuit to a clone of the other input.
pub fn union(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() {
        return b.clone();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // a.clipTo(b)   - remove parts of A inside B
    // b.clipTo(a)   - remove parts of B inside A
    // b.invert(); b.clipTo(a); b.invert() - drop B faces coplanar with A
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut result = bsp_a.all_polygons();
    result.extend(bsp_b.all_polygons());

    polygons_to_mesh(&result)
}

/// Computes the difference of two meshes (A minus B).
pub fn difference(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() {
        return Mesh::new();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // A - B = ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut polygons = bsp_a.all_polygons();
    polygons.extend(bsp_b.all_polygons());

    let mut result = BspNode::new(polygons);
    result.invert();

    polygons_to_mesh(&result.all_polygons())
}

/// Computes the intersection of two meshes.
pub fn intersection(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() || polys_b.is_empty() {
        return Mesh::new();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // A & B = ~(~A | ~B)
    bsp_a.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);

    let mut polygons = bsp_a.all_polygons();
    polygons.extend(bsp_b.all_polygons());

    let mut result = BspNode::new(polygons);
    result.invert();

    polygons_to_mesh(&result.all_polygons())
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

/// Converts a mesh to BSP polygons, one per triangle.
///
/// Degenerate triangles (no well-defined plane) are skipped.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    (0..mesh.triangle_count())
        .filter_map(|i| Polygon::from_vertices(mesh.triangle_points(i).to_vec()))
        .collect()
}

/// Converts BSP polygons back to a triangle mesh.
///
/// Split fragments stay convex, so a fan from the first vertex covers
/// each polygon exactly.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::new();
    for polygon in polygons {
        mesh.add_polygon_fan(polygon.vertices());
    }
    mesh
}

// =============================================================================
// TESTS
// =============================================================================
