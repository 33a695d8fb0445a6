//! Error types shared by the mask, the solver and the image adapters.

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type alias for distance field operations.
pub type DistanceFieldResult<T> = Result<T, DistanceFieldError>;

/// Errors that can occur while computing a distance field.
#[derive(Debug, Error)]
pub enum DistanceFieldError {
    /// The grid is too small for the requested phase,
    /// or `width * height` does not fit into memory indices.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A mask or distance buffer does not hold `width * height` elements.
    #[error("buffer size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The distance buffer could not be allocated.
    #[error("failed to allocate a distance buffer of {len} elements")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    /// Decoding or encoding an image failed.
    #[cfg(feature = "piston_image")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl DistanceFieldError {
    /// Create an invalid dimensions error.
    #[must_use]
    pub const fn invalid_dimensions(width: usize, height: usize) -> Self {
        Self::InvalidDimensions { width, height }
    }

    /// Create a size mismatch error.
    #[must_use]
    pub const fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }
}

/// Checks that a `width * height` grid is at least `min_side` pixels wide and tall
/// and that `len` matches its pixel count. Returns the pixel count.
pub(crate) fn check_grid(width: usize, height: usize, min_side: usize, len: usize)
    -> DistanceFieldResult<usize>
{
    if width < min_side || height < min_side {
        return Err(DistanceFieldError::invalid_dimensions(width, height));
    }

    let expected = width.checked_mul(height)
        .ok_or(DistanceFieldError::invalid_dimensions(width, height))?;

    if len != expected {
        return Err(DistanceFieldError::size_mismatch(expected, len));
    }

    Ok(expected)
}
