use acuity_image::{Image, ImageError, Rect};

use super::separable::{separable_filter, FloatConversion};
use super::{kernels, GaussianSharpenProcessor};
use crate::parallel::ExecutionStrategy;

/// Blur an image using a box blur filter
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The size of the kernel (kernel_x, kernel_y).
pub fn box_blur<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel_size: (usize, usize),
) -> Result<(), ImageError>
where
    T: FloatConversion + Clone + Send + Sync,
{
    let kernel_x = kernels::box_blur_kernel_1d(kernel_size.0);
    let kernel_y = kernels::box_blur_kernel_1d(kernel_size.1);
    separable_filter(src, dst, &kernel_x, &kernel_y)
}

/// Blur an image using a gaussian blur filter
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The size of the kernel (kernel_x, kernel_y).
/// * `sigma` - The sigma of the gaussian kernel, xy-ordered.
pub fn gaussian_blur<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel_size: (usize, usize),
    sigma: (f32, f32),
) -> Result<(), ImageError>
where
    T: FloatConversion + Clone + Send + Sync,
{
    let kernel_x = kernels::gaussian_kernel_1d(kernel_size.0, sigma.0);
    let kernel_y = kernels::gaussian_kernel_1d(kernel_size.1, sigma.1);
    separable_filter(src, dst, &kernel_x, &kernel_y)
}

/// Sharpen a region of a frame in place using Gaussian-derived kernels.
///
/// Builds a [`GaussianSharpenProcessor`] for the given sigma and applies it.
/// Construct the processor directly to reuse the kernels across frames.
///
/// # Arguments
///
/// * `frame` - The frame with shape (H, W, C), mutated within `rect`.
/// * `rect` - The region of the frame to sharpen.
/// * `sigma` - The Gaussian spread controlling the sharpening radius.
/// * `strategy` - Execution strategy for the pixel passes.
pub fn gaussian_sharpen<T, const C: usize>(
    frame: &mut Image<T, C>,
    rect: Rect,
    sigma: f32,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: FloatConversion + Send + Sync,
{
    GaussianSharpenProcessor::new(sigma).apply(frame, rect, strategy)
}
