//! Error type shared by every cube operation.

use thiserror::Error;

use crate::geometry::Coord;

/// Result alias used throughout the crate.
pub type Result<T, E = CubeError> = std::result::Result<T, E>;

/// Precondition violations raised by cube and session operations.
///
/// Every variant is a caller error detected synchronously; nothing here is
/// retried or clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// A size, layer index or step count is outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A grid access with a component outside `[0, size)`.
    #[error("coordinate ({coord}) is out of range for a cube of size {size}")]
    OutOfRange { coord: Coord, size: usize },
    /// An operation that is not allowed in the current animation state.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

impl CubeError {
    /// Error for a layer index that does not exist on a cube of `size`.
    pub(crate) fn layer_out_of_range(layer: usize, size: usize) -> Self {
        Self::InvalidArgument(format!("layer {layer} must be in [0..{size})"))
    }

    /// Error for a cube that has no cells.
    pub(crate) fn empty_cube() -> Self {
        Self::InvalidArgument("size must be > 0".to_owned())
    }
}
