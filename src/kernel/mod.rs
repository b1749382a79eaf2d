//! Discrete Gaussian kernels and their construction
//!
//! This module contains:
//! - The [`Kernel`] weight/offset pair shared by every construction path
//! - Standard kernels integrated per tap with Simpson's rule
//! - Bilinear reduction of standard kernels
//! - Separable 2-D expansion

/// Bilinear tap reduction
pub mod bilinear;
/// Standard kernel construction
pub mod builder;
/// 2-D expansion of separable kernels
pub mod separable;

/// Convolution weights with the sample offset each one applies at
///
/// `weights[i]` applies at `sample_positions[i]`. Weights sum to 1 and
/// positions are symmetric about zero. Standard kernels use consecutive
/// integer offsets; bilinear kernels use fractional ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Normalized tap weights
    pub weights: Vec<f64>,
    /// Offset of each tap relative to the center sample
    pub sample_positions: Vec<f64>,
}

impl Kernel {
    /// Number of taps
    pub const fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the kernel has no taps
    pub const fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Tap weights in offset order
    pub const fn weights(&self) -> &[f64] {
        self.weights.as_slice()
    }

    /// Tap offsets in ascending order
    pub const fn sample_positions(&self) -> &[f64] {
        self.sample_positions.as_slice()
    }

    /// Iterate `(position, weight)` pairs
    pub fn taps(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.sample_positions
            .iter()
            .copied()
            .zip(self.weights.iter().copied())
    }

    /// Sum of all weights, 1 up to rounding for any built kernel
    pub fn weight_sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Whether weights mirror each other and positions negate each other
    /// around the center, within `tolerance`
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        if self.weights.len() != self.sample_positions.len() {
            return false;
        }

        let weights_mirror = self
            .weights
            .iter()
            .zip(self.weights.iter().rev())
            .all(|(left, right)| (left - right).abs() <= tolerance);
        let positions_mirror = self
            .sample_positions
            .iter()
            .zip(self.sample_positions.iter().rev())
            .all(|(left, right)| (left + right).abs() <= tolerance);

        weights_mirror && positions_mirror
    }

    /// Single-precision copies of the weights and positions for GPU uniforms
    pub fn to_f32(&self) -> (Vec<f32>, Vec<f32>) {
        (
            self.weights.iter().map(|&w| w as f32).collect(),
            self.sample_positions.iter().map(|&p| p as f32).collect(),
        )
    }

    /// Split into `(weights, sample_positions)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.weights, self.sample_positions)
    }
}
