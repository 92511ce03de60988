//! Filter operations
//!
//! This module provides separable filtering and sharpening operations for
//! image regions.

use acuity_image::{Image, ImageError, Rect};

use crate::parallel::ExecutionStrategy;

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;

/// Separable filter engine
mod separable;
pub use separable::*;

/// Gaussian sharpening
mod sharpen;
pub use sharpen::*;

/// Interface implemented by processors that filter a frame region in place.
pub trait ImageFilter {
    /// Filter the rect of the frame in place.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame with shape (H, W, C), mutated within `rect`.
    /// * `rect` - The region of the frame to filter.
    /// * `strategy` - Execution strategy for the pixel passes.
    fn apply<T, const C: usize>(
        &self,
        frame: &mut Image<T, C>,
        rect: Rect,
        strategy: ExecutionStrategy,
    ) -> Result<(), ImageError>
    where
        T: FloatConversion + Send + Sync;
}
