//! # QRelief Scene
//!
//! Scene placement for the QR relief pipeline: the boundary where a
//! built solid is committed into the active assembly context, either
//! standalone or combined into the body containing the placement point.
//!
//! ## Architecture
//!
//! ```text
//! qrelief-mesh (Mesh) → qrelief-scene (Scene, Body)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use qrelief_grid::BinaryGrid;
//! use qrelief_mesh::{build, BuildParameters};
//! use qrelief_scene::{Placement, Scene};
//!
//! let grid = BinaryGrid::from_rows(vec![vec![true]]).unwrap();
//! let solid = build(&grid, &BuildParameters::default()).unwrap();
//!
//! let mut scene = Scene::new();
//! let placement = scene.place(solid, DVec3::ZERO).unwrap();
//! assert!(matches!(placement, Placement::Standalone(_)));
//! ```

pub mod error;
pub mod query;
pub mod scene;

pub use error::SceneError;
pub use query::{point_in_mesh, ray_triangle_intersect};
pub use scene::{Body, BodyId, Placement, Scene};
