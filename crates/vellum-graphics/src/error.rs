use thiserror::Error;

/// Errors reported by scene-graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The object passed to [`GraphicsGroup::remove`](crate::GraphicsGroup::remove)
    /// is not a member of the group.
    #[error(
        "object is not part of this graphics group; it may have already been removed or was never added"
    )]
    NotFound,
}

pub type Result<T, E = SceneError> = std::result::Result<T, E>;
