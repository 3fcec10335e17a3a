//! # Scene
//!
//! Ordered collection of committed solid bodies plus the placement
//! operation that decides between standalone insertion and combination
//! with a containing target body.

use glam::DVec3;
use tracing::debug;

use qrelief_mesh::{union, Mesh};

use crate::error::SceneError;
use crate::query::point_in_mesh;

/// Identifier of a committed body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub(crate) u64);

/// A solid body committed into the scene.
#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    mesh: Mesh,
}

impl Body {
    /// The body's identifier.
    #[must_use]
    pub fn id(&self) -> BodyId {
        self.id
    }

    /// The body's geometry.
    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

/// Outcome of placing a built solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Empty input: nothing was committed.
    Nothing,
    /// No containing body: inserted as a new standalone body.
    Standalone(BodyId),
    /// Combined into the body containing the placement point.
    Combined(BodyId),
}

/// The active assembly context.
///
/// Mutated synchronously by exactly one caller at a time; a build's
/// output is committed here only after the build fully succeeded.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use qrelief_mesh::primitives::create_box;
/// use qrelief_scene::{Placement, Scene};
///
/// let mut scene = Scene::new();
/// let solid = create_box(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::splat(1.0)).unwrap();
/// let placement = scene.place(solid, DVec3::new(10.0, 0.0, 0.0)).unwrap();
/// assert!(matches!(placement, Placement::Standalone(_)));
/// ```
#[derive(Debug, Default)]
pub struct Scene {
    bodies: Vec<Body>,
    next_id: u64,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed bodies, in commit order.
    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Looks up a body by id.
    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id == id)
    }

    /// Commits a mesh as a new body and returns its id.
    pub fn commit(&mut self, mesh: Mesh) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body { id, mesh });
        debug!(body = id.0, "committed body");
        id
    }

    /// Finds the body containing a world point, if any.
    ///
    /// Returns the first containing body in commit order; the spatial
    /// lookup yields zero or one target.
    #[must_use]
    pub fn find_body_at(&self, point: DVec3) -> Option<BodyId> {
        self.bodies
            .iter()
            .find(|body| point_in_mesh(point, &body.mesh))
            .map(Body::id)
    }

    /// Places a built solid relative to the placement point.
    ///
    /// An empty mesh is a no-op. If a committed body contains the
    /// placement point, the solid is committed as a separate body first
    /// and then combined into the target, consuming the new body.
    /// Otherwise it is inserted standalone.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::CombineFailed`] if the combine union
    /// produces no geometry; the scene is left unchanged in that case.
    pub fn place(&mut self, mesh: Mesh, placement_point: DVec3) -> Result<Placement, SceneError> {
        if mesh.is_empty() {
            return Ok(Placement::Nothing);
        }

        match self.find_body_at(placement_point) {
            None => Ok(Placement::Standalone(self.commit(mesh))),
            Some(target) => {
                let tool = self.commit(mesh);
                self.combine(target, tool)?;
                Ok(Placement::Combined(target))
            }
        }
    }

    /// Unions the tool body into the target body, consuming the tool.
    ///
    /// # Errors
    ///
    /// - [`SceneError::BodyNotFound`] if either id is stale.
    /// - [`SceneError::CombineFailed`] if the union produces no
    ///   geometry; the scene is left unchanged.
    pub fn combine(&mut self, target: BodyId, tool: BodyId) -> Result<(), SceneError> {
        let target_mesh = self
            .body(target)
            .ok_or(SceneError::BodyNotFound(target))?
            .mesh();
        let tool_mesh = self.body(tool).ok_or(SceneError::BodyNotFound(tool))?.mesh();

        let merged = union(target_mesh, tool_mesh);
        if merged.is_empty() {
            return Err(SceneError::CombineFailed { target, tool });
        }

        self.bodies.retain(|body| body.id != tool);
        if let Some(body) = self.bodies.iter_mut().find(|body| body.id == target) {
            body.mesh = merged;
        }
        debug!(target = target.0, tool = tool.0, "combined bodies");
        Ok(())
    }

    /// Replaces a committed body's geometry wholesale.
    ///
    /// The preview pattern: a re-triggered build swaps the displayed
    /// result in one step, so no stale geometry from the previous build
    /// ever coexists with the new one.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::BodyNotFound`] if the id is stale.
    pub fn replace(&mut self, id: BodyId, mesh: Mesh) -> Result<(), SceneError> {
        let body = self
            .bodies
            .iter_mut()
            .find(|body| body.id == id)
            .ok_or(SceneError::BodyNotFound(id))?;
        body.mesh = mesh;
        debug!(body = id.0, "replaced body geometry");
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
