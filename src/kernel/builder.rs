//! Standard Gaussian kernels with per-tap Simpson integration
//!
//! Each tap weight is the Gaussian density integrated over the unit interval
//! centered on the tap, instead of the density sampled at the tap center.
//! Point sampling underestimates the spread for small sigma and loses mass
//! for short kernels; integrating first and normalizing after avoids both.

use crate::configuration::MIN_SAMPLES_PER_BIN;
use crate::error::{Result, computation_error, invalid_argument};
use crate::kernel::Kernel;
use crate::math::{Sample, integrate_simpson, normal_density, sample_interval};

/// Build a normalized Gaussian kernel with `kernel_size` integer taps
///
/// `sample_count` density evaluations are spread across all taps; each tap
/// gets `ceil(sample_count / kernel_size)` of them, bumped to the next odd
/// number for Simpson's rule. Positions run from `-(kernel_size - 1) / 2` to
/// `(kernel_size - 1) / 2`.
///
/// ```
/// let kernel = gaussian_kernels::get_kernel(1.0, 5, 1000)?;
/// assert_eq!(kernel.sample_positions, [-2.0, -1.0, 0.0, 1.0, 2.0]);
/// assert!((kernel.weight_sum() - 1.0).abs() < 1e-9);
/// # Ok::<(), gaussian_kernels::KernelError>(())
/// ```
///
/// # Errors
///
/// Returns [`KernelError::InvalidArgument`](crate::KernelError::InvalidArgument) if:
/// - `kernel_size` is even
/// - `sigma` is not a positive finite number
/// - `sample_count` does not exceed `kernel_size`
pub fn get_kernel(sigma: f64, kernel_size: usize, sample_count: usize) -> Result<Kernel> {
    if kernel_size % 2 != 1 {
        return Err(invalid_argument(
            "kernel_size",
            &kernel_size,
            &"kernel_size must be odd",
        ));
    }
    validate_sigma(sigma)?;

    let samples_per_bin = samples_per_bin(kernel_size, sample_count);
    if samples_per_bin < MIN_SAMPLES_PER_BIN {
        return Err(invalid_argument(
            "sample_count",
            &sample_count,
            &format!("sample_count must exceed kernel_size ({kernel_size})"),
        ));
    }

    tracing::debug!(sigma, kernel_size, samples_per_bin, "building gaussian kernel");

    let kernel_left = -((kernel_size / 2) as f64);
    let density = |x: f64| normal_density(x, 0.0, sigma);

    let mut samples = vec![Sample::zero(); samples_per_bin];
    let mut weights = Vec::with_capacity(kernel_size);
    let mut weight_sum = 0.0;
    for tap in 0..kernel_size {
        let left = kernel_left - 0.5 + tap as f64;

        sample_interval(density, left, left + 1.0, &mut samples);
        let tap_weight = integrate_simpson(&samples).ok_or_else(|| {
            computation_error("simpson integration", &"fewer than two samples per tap")
        })?;

        weights.push(tap_weight);
        weight_sum += tap_weight;
    }

    for weight in &mut weights {
        *weight /= weight_sum;
    }

    Ok(Kernel {
        weights,
        sample_positions: sample_positions(kernel_size),
    })
}

/// Samples integrated per tap: `ceil(sample_count / kernel_size)`, forced odd
pub const fn samples_per_bin(kernel_size: usize, sample_count: usize) -> usize {
    if kernel_size == 0 {
        return 0;
    }

    let per_bin = sample_count.div_ceil(kernel_size);
    if per_bin.is_multiple_of(2) {
        per_bin + 1
    } else {
        per_bin
    }
}

/// Consecutive integer offsets starting at `-(kernel_size / 2)`
pub fn sample_positions(kernel_size: usize) -> Vec<f64> {
    let kernel_left = -((kernel_size / 2) as i64);
    (0..kernel_size)
        .map(|i| (kernel_left + i as i64) as f64)
        .collect()
}

fn validate_sigma(sigma: f64) -> Result<()> {
    if sigma.is_finite() && sigma > 0.0 {
        Ok(())
    } else {
        Err(invalid_argument(
            "sigma",
            &sigma,
            &"sigma must be a positive finite number",
        ))
    }
}
