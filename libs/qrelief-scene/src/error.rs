//! # Scene Errors
//!
//! Error types for scene mutation.

use thiserror::Error;

use crate::scene::BodyId;

/// Errors that can occur while mutating the scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Referenced body is not in the scene.
    #[error("body {0:?} not found in scene")]
    BodyNotFound(BodyId),

    /// Combining two bodies produced no geometry.
    #[error("combine of {target:?} and {tool:?} produced no geometry")]
    CombineFailed { target: BodyId, tool: BodyId },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SceneError::BodyNotFound(BodyId(7));
        assert!(err.to_string().contains("not found"));
    }
}
