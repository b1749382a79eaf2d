//! Kernel constants and request configuration

use crate::error::Result;
use crate::kernel::{Kernel, bilinear, builder};

/// Total number of density samples spread across all taps when none is given
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

// Simpson's rule needs an even number of intervals, so at least three samples
/// Minimum number of samples integrated per tap
pub const MIN_SAMPLES_PER_BIN: usize = 3;

/// Parameters of a single kernel request
///
/// Stands in for the default `sample_count` argument of the free functions.
///
/// ```
/// use gaussian_kernels::KernelConfig;
///
/// let kernel = KernelConfig::new(1.0, 5).build()?;
/// assert_eq!(kernel.len(), 5);
/// # Ok::<(), gaussian_kernels::KernelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Standard deviation of the Gaussian
    pub sigma: f64,
    /// Number of taps requested
    pub kernel_size: usize,
    /// Total number of density samples across all taps
    pub sample_count: usize,
}

impl KernelConfig {
    /// Create a request using [`DEFAULT_SAMPLE_COUNT`]
    pub const fn new(sigma: f64, kernel_size: usize) -> Self {
        Self {
            sigma,
            kernel_size,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    /// Override the total sample count
    #[must_use]
    pub const fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Build a standard kernel with `kernel_size` integer taps
    ///
    /// # Errors
    ///
    /// See [`builder::get_kernel`]
    pub fn build(&self) -> Result<Kernel> {
        builder::get_kernel(self.sigma, self.kernel_size, self.sample_count)
    }

    /// Reduce a `kernel_size` standard kernel to `(kernel_size + 1) / 2` bilinear taps
    ///
    /// # Errors
    ///
    /// See [`bilinear::get_kernel_bilinear`]
    pub fn build_bilinear(&self) -> Result<Kernel> {
        bilinear::get_kernel_bilinear(self.sigma, self.kernel_size, self.sample_count)
    }

    /// Build a bilinear kernel that ends up with exactly `kernel_size` taps
    ///
    /// # Errors
    ///
    /// See [`bilinear::get_kernel_bilinear_same_size`]
    pub fn build_bilinear_same_size(&self) -> Result<Kernel> {
        bilinear::get_kernel_bilinear_same_size(self.sigma, self.kernel_size, self.sample_count)
    }
}
