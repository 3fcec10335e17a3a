//! # Primitives
//!
//! Mesh generation for the builder's primitive shapes.

pub mod cuboid;

pub use cuboid::create_box;
