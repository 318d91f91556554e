use thiserror::Error;

/// Top-level error type for the Orbis spherical geometry kernel.
#[derive(Debug, Error)]
pub enum OrbisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("cannot normalize a zero-length vector onto the unit sphere")]
    ZeroVector,

    #[error("{needed} vertices required, got {got}")]
    TooFewVertices { needed: usize, got: usize },

    #[error("angular radius {0} is outside (0, pi)")]
    InvalidRadius(f64),

    #[error("polygon requires at least one loop")]
    EmptyPolygon,
}

/// Errors raised by out-of-range access through the shape contract.
///
/// Out-of-range ids must fail loudly; clamping or wrapping would silently
/// corrupt crossing parity downstream.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("edge id {id} out of range for a shape with {len} edges")]
    EdgeOutOfRange { id: usize, len: usize },

    #[error("chain id {id} out of range for a shape with {len} chains")]
    ChainOutOfRange { id: usize, len: usize },

    #[error("offset {offset} out of range for chain {chain} with {len} edges")]
    ChainOffsetOutOfRange {
        chain: usize,
        offset: usize,
        len: usize,
    },
}

/// Convenience type alias for results using [`OrbisError`].
pub type Result<T> = std::result::Result<T, OrbisError>;
