mod flatten;

pub use flatten::FlatteningPathIter;

use crate::error::{Result, TessellationError};

/// Hard ceiling on the subdivision depth of a single curve.
pub const MAX_FLATTEN_LIMIT: u32 = 32;

/// Parameters controlling curve flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenParams {
    flatness: f64,
    limit: u32,
}

impl FlattenParams {
    /// Creates flattening parameters.
    ///
    /// `flatness` is the largest distance a control point may lie from the
    /// emitted chord. `limit` caps how many times a curve is bisected and is
    /// clamped to [`MAX_FLATTEN_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns an error if `flatness` is negative or NaN.
    pub fn new(flatness: f64, limit: u32) -> Result<Self> {
        if flatness.is_nan() || flatness < 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "flatness must be non-negative, got {flatness}"
            ))
            .into());
        }
        Ok(Self {
            flatness,
            limit: limit.min(MAX_FLATTEN_LIMIT),
        })
    }

    #[must_use]
    pub fn flatness(&self) -> f64 {
        self.flatness
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            flatness: 0.5,
            limit: 10,
        }
    }
}
