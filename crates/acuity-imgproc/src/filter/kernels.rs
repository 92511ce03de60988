/// Evaluate the 1D Gaussian density at offset `x` for spread `weight`.
///
/// Computes `exp(-x² / (2·weight²)) / (weight·√(2π))`. This is the single
/// density function every kernel constructor in this crate samples, so that
/// raw sample sums stay comparable across them.
pub fn gaussian_density(x: f32, weight: f32) -> f32 {
    (-(x * x) / (2.0 * weight * weight)).exp() / (weight * (2.0 * std::f32::consts::PI).sqrt())
}

/// Create a box blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
///
/// # Returns
///
/// A vector of the kernel.
pub fn box_blur_kernel_1d(kernel_size: usize) -> Vec<f32> {
    vec![1.0 / kernel_size as f32; kernel_size]
}

/// Create a gaussian blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Returns
///
/// A vector of the kernel, normalized to sum to one.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = (kernel_size as f32 - 1.0) / 2.0;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        kernel.push(gaussian_density(x, sigma));
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_density() {
        assert_relative_eq!(gaussian_density(0.0, 1.0), 0.3989423, epsilon = 1e-6);

        // symmetric and decreasing away from the center
        assert_eq!(gaussian_density(-1.5, 2.0), gaussian_density(1.5, 2.0));
        assert!(gaussian_density(0.0, 1.0) > gaussian_density(1.0, 1.0));
    }

    #[test]
    fn test_box_blur_kernel_1d() {
        let kernel = box_blur_kernel_1d(5);
        assert_eq!(kernel, vec![0.2; 5]);
    }

    #[test]
    fn test_gaussian_kernel_1d() {
        let kernel = gaussian_kernel_1d(5, 0.5);

        let expected = [
            0.00026386508,
            0.10645077,
            0.78657067,
            0.10645077,
            0.00026386508,
        ];

        for (&k, &e) in kernel.iter().zip(expected.iter()) {
            assert_relative_eq!(k, e, epsilon = 1e-6);
        }

        assert_relative_eq!(kernel.iter().sum::<f32>(), 1.0, epsilon = 1e-6);
    }
}
