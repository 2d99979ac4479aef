//! Error types for loadpack.

use thiserror::Error;

/// Result type alias for loadpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during placement and persistence.
///
/// Geometric non-fit and collision are not errors: they are expected search
/// outcomes and surface as boolean results from the placement engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-positive dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Rotation orientation code outside 0..=5.
    #[error("invalid rotation orientation code: {0}")]
    InvalidOrientation(u8),

    /// A caller referenced a container id that does not resolve.
    #[error("no container exists with id {0}")]
    ContainerNotFound(String),

    /// A container membership list named a package the store does not hold.
    #[error("no package record with id {0}")]
    PackageNotFound(String),

    /// Repository backend failure (I/O, malformed records).
    #[error("storage error: {0}")]
    Storage(String),
}
