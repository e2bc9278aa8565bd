use thiserror::Error;

/// Top-level error type for the Proxilis distance kernel.
#[derive(Debug, Error)]
pub enum ProxilisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Distance(#[from] DistanceError),
}

/// Errors related to geometry construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("ring is not closed: first and last coordinates differ")]
    RingNotClosed,

    #[error("ring has {0} coordinates, at least 4 required")]
    RingTooShort(usize),
}

/// Errors related to distance computation.
#[derive(Debug, Error)]
pub enum DistanceError {
    #[error("geometry has no components to measure")]
    EmptyGeometry,
}

/// Convenience type alias for results using [`ProxilisError`].
pub type Result<T> = std::result::Result<T, ProxilisError>;
