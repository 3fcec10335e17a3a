//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations, following
//! the csg.js clipping algorithm.
//!
//! Each node holds a dividing plane, the polygons coplanar with it, and
//! front/back subtrees. The relief geometry produced by this crate keeps
//! trees shallow: boxes on a shared grid contribute only a handful of
//! distinct planes per grid line, so tree depth grows with grid width,
//! not with polygon count.

use super::plane::Plane;
use super::polygon::{Polygon, SplitBuckets};

/// A node in the BSP tree.
#[derive(Debug, Clone, Default)]
pub(super) struct BspNode {
    /// Dividing plane; None until the first polygons are inserted.
    plane: Option<Plane>,
    /// Polygons coplanar with this node's plane.
    polygons: Vec<Polygon>,
    /// Subtree in front of the plane.
    front: Option<Box<BspNode>>,
    /// Subtree behind the plane.
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Builds a BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = Self::default();
        root.insert(polygons);
        root
    }

    /// Inserts polygons into the tree, splitting them along node planes.
    pub fn insert(&mut self, polygons: Vec<Polygon>) {
        let Some(first) = polygons.first() else {
            return;
        };

        let plane = match self.plane {
            Some(plane) => plane,
            None => {
                let plane = *first.plane();
                self.plane = Some(plane);
                plane
            }
        };

        let mut buckets = SplitBuckets::default();
        for polygon in polygons {
            polygon.split_into(&plane, &mut buckets);
        }

        self.polygons.append(&mut buckets.coplanar_front);
        self.polygons.append(&mut buckets.coplanar_back);

        if !buckets.front.is_empty() {
            self.front
                .get_or_insert_with(Box::default)
                .insert(buckets.front);
        }
        if !buckets.back.is_empty() {
            self.back
                .get_or_insert_with(Box::default)
                .insert(buckets.back);
        }
    }

    /// Flips solid and empty space: reverses all polygons and planes and
    /// swaps the subtrees.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            for polygon in &mut node.polygons {
                polygon.flip();
            }
            if let Some(plane) = &mut node.plane {
                plane.flip();
            }
            std::mem::swap(&mut node.front, &mut node.back);

            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Removes the parts of the given polygons inside this tree's solid.
    ///
    /// Returns the polygons (or fragments of them) that lie outside.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = self.plane else {
            return polygons;
        };

        let mut buckets = SplitBuckets::default();
        for polygon in polygons {
            polygon.split_into(&plane, &mut buckets);
        }

        let mut front = buckets.front;
        front.append(&mut buckets.coplanar_front);
        let mut back = buckets.back;
        back.append(&mut buckets.coplanar_back);

        let mut result = match &self.front {
            Some(node) => node.clip_polygons(front),
            None => front,
        };

        // No back subtree means back space is solid; those fragments are
        // swallowed.
        if let Some(node) = &self.back {
            result.extend(node.clip_polygons(back));
        }

        result
    }

    /// Clips this tree's polygons to another tree's solid.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            node.polygons = other.clip_polygons(std::mem::take(&mut node.polygons));

            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Collects all polygons in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());

            if let Some(front) = &node.front {
                stack.push(front);
            }
            if let Some(back) = &node.back {
                stack.push(back);
            }
        }

        result
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle_at(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.5, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_tree() {
        let tree = BspNode::new(Vec::new());
        assert!(tree.all_polygons().is_empty());
    }

    #[test]
    fn test_tree_keeps_all_polygons() {
        let tree = BspNode::new(vec![
            triangle_at(0.0),
            triangle_at(1.0),
            triangle_at(-1.0),
        ]);
        assert_eq!(tree.all_polygons().len(), 3);
    }

    #[test]
    fn test_invert_flips_normals() {
        let poly = triangle_at(0.0);
        let original = poly.plane().normal();

        let mut tree = BspNode::new(vec![poly]);
        tree.invert();

        let inverted = tree.all_polygons()[0].plane().normal();
        assert!((original + inverted).length() < 1e-12);
    }

    #[test]
    fn test_clip_front_polygon_survives() {
        let tree = BspNode::new(vec![triangle_at(0.0)]);
        let result = tree.clip_polygons(vec![triangle_at(1.0)]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_clip_back_polygon_swallowed() {
        let tree = BspNode::new(vec![triangle_at(0.0)]);
        let result = tree.clip_polygons(vec![triangle_at(-1.0)]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_clip_spanning_polygon_keeps_front_half() {
        let tree = BspNode::new(vec![triangle_at(0.0)]);
        let spanning = Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, -1.0),
            DVec3::new(0.5, 0.0, 1.0),
        ])
        .unwrap();

        let result = tree.clip_polygons(vec![spanning]);
        assert_eq!(result.len(), 1);
        for v in result[0].vertices() {
            assert!(v.z > -1e-6, "fragment behind the plane survived");
        }
    }

    #[test]
    fn test_clip_to_self_is_stable() {
        let mut a = BspNode::new(vec![triangle_at(1.0), triangle_at(2.0)]);
        let b = BspNode::new(vec![triangle_at(0.0)]);
        a.clip_to(&b);
        // Both polygons are in front of b's plane and must survive.
        assert_eq!(a.all_polygons().len(), 2);
    }
}
