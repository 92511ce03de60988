use acuity_image::{Image, ImageError, Rect};

use super::kernels::gaussian_density;
use super::separable::{separable_filter_region, FloatConversion};
use super::ImageFilter;
use crate::parallel::ExecutionStrategy;

/// Orientation of a 1D kernel within a separable pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelOrientation {
    /// A row vector with shape (1, n), applied across each image row.
    Row,
    /// A column vector with shape (n, 1), applied down each image column.
    Column,
}

/// A 1D sharpening kernel: an ordered sequence of weights plus an
/// orientation tag.
///
/// The weights are derived by sampling a Gaussian density, inverting the
/// samples around the center tap (sharpen = 2·identity − blur) and
/// normalizing so the weights sum to one. They are symmetric about the
/// center and immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SharpenKernel {
    weights: Vec<f32>,
    orientation: KernelOrientation,
}

impl SharpenKernel {
    fn build(kernel_size: usize, weight: f32, orientation: KernelOrientation) -> Self {
        let (mut weights, sum) = sample_gaussian(kernel_size, weight);
        invert_center(&mut weights, sum);
        normalize(&mut weights, sum);
        Self {
            weights,
            orientation,
        }
    }

    /// The kernel weights, ordered from the leftmost/topmost tap.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// The orientation of the kernel.
    pub fn orientation(&self) -> KernelOrientation {
        self.orientation
    }

    /// The number of taps.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the kernel has no taps.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The kernel shape: (1, n) for a row kernel, (n, 1) for a column kernel.
    pub fn shape(&self) -> (usize, usize) {
        match self.orientation {
            KernelOrientation::Row => (1, self.weights.len()),
            KernelOrientation::Column => (self.weights.len(), 1),
        }
    }
}

/// Sample the Gaussian density at integer offsets from the kernel center.
///
/// Returns the raw samples together with their sum; the sum later feeds both
/// the center inversion and the normalization.
fn sample_gaussian(kernel_size: usize, weight: f32) -> (Vec<f32>, f32) {
    let midpoint = (kernel_size as f32 - 1.0) / 2.0;

    let mut samples = Vec::with_capacity(kernel_size);
    let mut sum = 0.0;
    for i in 0..kernel_size {
        let x = i as f32 - midpoint;
        let g = gaussian_density(x, weight);
        sum += g;
        samples.push(g);
    }

    (samples, sum)
}

/// Turn raw Gaussian samples into a sharpening response in place.
///
/// The center tap becomes `2·sum − g(0)` and every other tap `−g(x)`: an
/// identity impulse of total mass `2·sum` minus the blur kernel.
fn invert_center(samples: &mut [f32], sum: f32) {
    let midpoint = samples.len() / 2;
    for (i, w) in samples.iter_mut().enumerate() {
        *w = if i == midpoint { 2.0 * sum - *w } else { -*w };
    }
}

/// Rescale the response by the pre-inversion sample sum.
///
/// The inverted taps total `2·sum − sum`, so dividing by `sum` makes the
/// weights sum to exactly one.
fn normalize(samples: &mut [f32], sum: f32) {
    for w in samples.iter_mut() {
        *w /= sum;
    }
}

/// Sharpens an image region with a pair of separable Gaussian-derived kernels.
///
/// The two kernels hold identical weights and differ only in orientation;
/// applying them as sequential 1D passes costs O(n) work per pixel per pass
/// instead of the O(n²) of an equivalent full 2D kernel.
///
/// Construction resolves the kernel size and sampling weight from the given
/// parameters, builds both kernels once and never mutates them; a processor
/// can be shared freely across threads for concurrent reads.
///
/// Parameters are not validated: callers must keep `sigma > 0`. Non-positive
/// or NaN sigma flows through sampling and normalization and yields
/// degenerate (empty or NaN-weighted) kernels rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianSharpenProcessor {
    sigma: f32,
    kernel_x: SharpenKernel,
    kernel_y: SharpenKernel,
}

impl GaussianSharpenProcessor {
    /// The sigma used by [`GaussianSharpenProcessor::default`].
    pub const DEFAULT_SIGMA: f32 = 3.0;

    /// Create a processor from a Gaussian spread.
    ///
    /// The kernel size is `2·ceil(sigma) + 1` and `sigma` is the sampling
    /// weight.
    pub fn new(sigma: f32) -> Self {
        let kernel_size = (2.0 * sigma.ceil() + 1.0) as usize;
        Self::from_parts(sigma, kernel_size, sigma)
    }

    /// Create a processor from a sampling half-width.
    ///
    /// The kernel size is `2·radius + 1` and the radius doubles as the
    /// Gaussian sampling weight.
    pub fn from_radius(radius: usize) -> Self {
        Self::from_parts(radius as f32, 2 * radius + 1, radius as f32)
    }

    /// Create a processor from both a spread and a half-width.
    ///
    /// The kernel size is `2·radius + 1` and `sigma` is the sampling weight.
    pub fn with_radius(sigma: f32, radius: usize) -> Self {
        Self::from_parts(sigma, 2 * radius + 1, sigma)
    }

    fn from_parts(sigma: f32, kernel_size: usize, weight: f32) -> Self {
        Self {
            sigma,
            kernel_x: SharpenKernel::build(kernel_size, weight, KernelOrientation::Row),
            kernel_y: SharpenKernel::build(kernel_size, weight, KernelOrientation::Column),
        }
    }

    /// The Gaussian spread the processor was built with.
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// The row kernel, applied across each row in the horizontal pass.
    pub fn kernel_x(&self) -> &SharpenKernel {
        &self.kernel_x
    }

    /// The column kernel, applied down each column in the vertical pass.
    pub fn kernel_y(&self) -> &SharpenKernel {
        &self.kernel_y
    }

    /// The resolved kernel size.
    pub fn kernel_size(&self) -> usize {
        self.kernel_x.len()
    }

    /// Sharpen the rect of the frame in place.
    ///
    /// Delegates entirely to the two-pass separable convolution engine,
    /// which applies the row kernel across each row and then the column
    /// kernel down each column of the rect.
    pub fn apply<T, const C: usize>(
        &self,
        frame: &mut Image<T, C>,
        rect: Rect,
        strategy: ExecutionStrategy,
    ) -> Result<(), ImageError>
    where
        T: FloatConversion + Send + Sync,
    {
        separable_filter_region(
            frame,
            rect,
            self.kernel_x.weights(),
            self.kernel_y.weights(),
            strategy,
        )
    }
}

impl Default for GaussianSharpenProcessor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIGMA)
    }
}

impl ImageFilter for GaussianSharpenProcessor {
    fn apply<T, const C: usize>(
        &self,
        frame: &mut Image<T, C>,
        rect: Rect,
        strategy: ExecutionStrategy,
    ) -> Result<(), ImageError>
    where
        T: FloatConversion + Send + Sync,
    {
        GaussianSharpenProcessor::apply(self, frame, rect, strategy)
    }
}
