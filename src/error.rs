use thiserror::Error;

use crate::transform::Generality;

/// Top-level error type for the euklid geometry library.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EuklidError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to path building and path iteration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// A segment was requested from an iterator that has no segments left.
    #[error("path iterator out of bounds")]
    Exhausted,

    /// A drawing segment was appended before any `move_to`.
    #[error("missing initial move_to in path definition")]
    MissingMoveTo,
}

/// Errors related to transform manipulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("{operation} is not supported by a {generality} transform")]
    Unsupported {
        operation: &'static str,
        generality: Generality,
    },

    #[error("transform is not invertible (determinant {determinant})")]
    Noninvertible { determinant: f64 },
}

/// Errors related to curve tessellation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`EuklidError`].
pub type Result<T> = std::result::Result<T, EuklidError>;
