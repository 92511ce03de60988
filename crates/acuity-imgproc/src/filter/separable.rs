use acuity_image::{Image, ImageError, Rect};
use rayon::prelude::*;

use crate::parallel::ExecutionStrategy;

/// Trait for floating point casting
pub trait FloatConversion {
    /// Convert the type to f32
    fn to_f32(&self) -> f32;
    /// Convert the type from f32
    fn from_f32(val: f32) -> Self;
}

impl FloatConversion for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }

    fn from_f32(val: f32) -> Self {
        val
    }
}

impl FloatConversion for f64 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }

    fn from_f32(val: f32) -> Self {
        val as f64
    }
}

impl FloatConversion for u8 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }

    fn from_f32(val: f32) -> Self {
        val.clamp(0.0, 255.0) as u8
    }
}

/// A separable 2D filter that applies horizontal and vertical 1D convolutions sequentially.
///
/// The filter caches the kernel data and precomputed tap offsets. Taps that
/// fall outside the frame are clamped to the nearest edge pixel (replicate
/// extension), so a normalized kernel leaves constant regions untouched all
/// the way to the border.
struct SeparableFilter {
    kernel_x: Vec<f32>,
    kernel_y: Vec<f32>,
    offsets_x: Vec<isize>,
    offsets_y: Vec<isize>,
}

impl SeparableFilter {
    fn new(kernel_x: &[f32], kernel_y: &[f32]) -> Self {
        let half_x = kernel_x.len() / 2;
        let half_y = kernel_y.len() / 2;

        let offsets_x = (0..kernel_x.len())
            .map(|i| i as isize - half_x as isize)
            .collect();

        let offsets_y = (0..kernel_y.len())
            .map(|i| i as isize - half_y as isize)
            .collect();

        Self {
            kernel_x: kernel_x.to_vec(),
            kernel_y: kernel_y.to_vec(),
            offsets_x,
            offsets_y,
        }
    }

    /// Convolve one frame row with the horizontal kernel into a scratch row.
    ///
    /// `r` is the absolute frame row; `temp_row` covers the rect columns only.
    fn filter_row_horizontal<T, const C: usize>(
        &self,
        src: &[T],
        cols: usize,
        rect: &Rect,
        r: usize,
        temp_row: &mut [f32],
    ) where
        T: FloatConversion,
    {
        let row_offset = r * cols * C;
        for tc in 0..rect.width {
            let c = rect.x + tc;
            let mut acc = [0.0f32; C];
            for (&k, &off) in self.kernel_x.iter().zip(self.offsets_x.iter()) {
                let x = (c as isize + off).clamp(0, cols as isize - 1) as usize;
                let idx = row_offset + x * C;
                for (ch, acc_val) in acc.iter_mut().enumerate() {
                    *acc_val += src[idx + ch].to_f32() * k;
                }
            }
            temp_row[tc * C..(tc + 1) * C].copy_from_slice(&acc);
        }
    }

    /// Convolve one scratch column slice with the vertical kernel back into a frame row.
    ///
    /// `tr` is the row within the rect; `frame_row` is the full frame row it maps to.
    fn filter_row_vertical<T, const C: usize>(
        &self,
        temp: &[f32],
        rect: &Rect,
        tr: usize,
        frame_row: &mut [T],
    ) where
        T: FloatConversion,
    {
        for tc in 0..rect.width {
            let mut acc = [0.0f32; C];
            for (&k, &off) in self.kernel_y.iter().zip(self.offsets_y.iter()) {
                let ty = (tr as isize + off).clamp(0, rect.height as isize - 1) as usize;
                let idx = (ty * rect.width + tc) * C;
                for (ch, acc_val) in acc.iter_mut().enumerate() {
                    *acc_val += temp[idx + ch] * k;
                }
            }
            let out = (rect.x + tc) * C;
            for (ch, &acc_val) in acc.iter().enumerate() {
                frame_row[out + ch] = T::from_f32(acc_val);
            }
        }
    }

    /// Apply the filter in place to the rect of the frame.
    ///
    /// Performs horizontal filtering into an f32 scratch buffer covering the
    /// rect, then vertical filtering from the scratch back into the frame.
    /// Pixels outside the rect are left untouched.
    fn apply<T, const C: usize>(
        &self,
        frame: &mut Image<T, C>,
        rect: Rect,
        strategy: ExecutionStrategy,
    ) -> Result<(), ImageError>
    where
        T: FloatConversion + Send + Sync,
    {
        let cols = frame.cols();
        let row_stride = rect.width * C;
        let parallel = strategy.is_parallel(rect.width * rect.height);

        let mut temp = vec![0.0f32; rect.width * rect.height * C];

        // Horizontal
        let src = frame.as_slice();
        if parallel {
            temp.par_chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(tr, temp_row)| {
                    self.filter_row_horizontal::<T, C>(src, cols, &rect, rect.y + tr, temp_row);
                });
        } else {
            temp.chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(tr, temp_row)| {
                    self.filter_row_horizontal::<T, C>(src, cols, &rect, rect.y + tr, temp_row);
                });
        }

        // Vertical
        let dst = frame.as_slice_mut();
        if parallel {
            dst.par_chunks_exact_mut(cols * C)
                .enumerate()
                .skip(rect.y)
                .take(rect.height)
                .for_each(|(r, frame_row)| {
                    self.filter_row_vertical::<T, C>(&temp, &rect, r - rect.y, frame_row);
                });
        } else {
            dst.chunks_exact_mut(cols * C)
                .enumerate()
                .skip(rect.y)
                .take(rect.height)
                .for_each(|(r, frame_row)| {
                    self.filter_row_vertical::<T, C>(&temp, &rect, r - rect.y, frame_row);
                });
        }

        Ok(())
    }
}

/// Apply a separable filter in place to a rectangular region of a frame.
///
/// # Arguments
///
/// * `frame` - The frame with shape (H, W, C), mutated within `rect`.
/// * `rect` - The region of the frame to filter.
/// * `kernel_x` - The horizontal kernel, applied across each row.
/// * `kernel_y` - The vertical kernel, applied down each column.
/// * `strategy` - Execution strategy: `Auto`, `Parallel`, or `Serial`.
///
/// # Errors
///
/// Returns an error when a kernel is empty or the rect does not fit inside
/// the frame.
pub fn separable_filter_region<T, const C: usize>(
    frame: &mut Image<T, C>,
    rect: Rect,
    kernel_x: &[f32],
    kernel_y: &[f32],
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: FloatConversion + Send + Sync,
{
    if kernel_x.is_empty() || kernel_y.is_empty() {
        return Err(ImageError::InvalidKernelLength(
            kernel_x.len(),
            kernel_y.len(),
        ));
    }

    if !rect.fits(frame.size()) {
        return Err(ImageError::RectOutOfBounds(
            rect.width,
            rect.height,
            rect.x,
            rect.y,
        ));
    }

    if rect.is_empty() {
        return Ok(());
    }

    SeparableFilter::new(kernel_x, kernel_y).apply(frame, rect, strategy)
}

/// Apply a separable filter to a whole image.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_x` - The horizontal kernel.
/// * `kernel_y` - The vertical kernel.
pub fn separable_filter<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel_x: &[f32],
    kernel_y: &[f32],
) -> Result<(), ImageError>
where
    T: FloatConversion + Clone + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    dst.as_slice_mut().clone_from_slice(src.as_slice());
    separable_filter_region(
        dst,
        Rect::full(src.size()),
        kernel_x,
        kernel_y,
        ExecutionStrategy::Auto,
    )
}
