//! Bilinear reduction of standard kernels
//!
//! Two adjacent integer taps `a` (at `p - 1`) and `b` (at `p`) read with one
//! linearly interpolated fetch at `p - a / (a + b)` weighted by `a + b`
//! contribute exactly what the two discrete reads would. Pairing the taps of
//! each half this way halves the number of reads for the same blur.
//!
//! The reduction mirrors the left half onto the right, so it relies on the
//! source kernel being symmetric about zero. Kernels from
//! [`get_kernel`](crate::kernel::builder::get_kernel) always are.

use crate::error::{Result, computation_error, invalid_argument};
use crate::kernel::Kernel;
use crate::kernel::builder::get_kernel;
use std::iter;

/// Build a `kernel_size` standard kernel and reduce it to
/// `(kernel_size + 1) / 2` bilinear taps
///
/// The center tap keeps its weight at position `0.0`. Every other output tap
/// merges a pair from the left half of the source kernel and is mirrored,
/// with the same weight and negated position, onto the right half.
///
/// ```
/// let kernel = gaussian_kernels::get_kernel_bilinear(2.0, 9, 1000)?;
/// assert_eq!(kernel.len(), 5);
/// assert!(kernel.is_symmetric(1e-12));
/// # Ok::<(), gaussian_kernels::KernelError>(())
/// ```
///
/// # Errors
///
/// Returns [`KernelError::InvalidArgument`](crate::KernelError::InvalidArgument) if
/// `(kernel_size - 1) % 4 != 0`, or for any argument [`get_kernel`] rejects.
pub fn get_kernel_bilinear(sigma: f64, kernel_size: usize, sample_count: usize) -> Result<Kernel> {
    if kernel_size % 4 != 1 {
        return Err(invalid_argument(
            "kernel_size",
            &kernel_size,
            &"(kernel_size - 1) must be divisible by 4",
        ));
    }

    let source = get_kernel(sigma, kernel_size, sample_count)?;
    let reduced = reduce(&source)?;

    tracing::debug!(
        source_size = kernel_size,
        reduced_size = reduced.len(),
        "reduced kernel to bilinear taps"
    );

    Ok(reduced)
}

/// Build a bilinear kernel whose output has exactly `kernel_size` taps
///
/// Reduces a standard kernel of `kernel_size * 2 - 1` taps, so `kernel_size`
/// must be odd for the source size to satisfy [`get_kernel_bilinear`].
///
/// # Errors
///
/// Returns [`KernelError::InvalidArgument`](crate::KernelError::InvalidArgument) if
/// `kernel_size` is zero, or for any argument [`get_kernel_bilinear`] rejects
/// once `kernel_size * 2 - 1` is substituted.
pub fn get_kernel_bilinear_same_size(
    sigma: f64,
    kernel_size: usize,
    sample_count: usize,
) -> Result<Kernel> {
    let source_size = kernel_size
        .checked_mul(2)
        .and_then(|doubled| doubled.checked_sub(1))
        .ok_or_else(|| {
            invalid_argument(
                "kernel_size",
                &kernel_size,
                &"kernel_size must be at least 1",
            )
        })?;

    get_kernel_bilinear(sigma, source_size, sample_count)
}

fn reduce(source: &Kernel) -> Result<Kernel> {
    let pairs_per_side = (source.len() - 1) / 4;

    let left: Vec<(f64, f64)> = source
        .weights
        .iter()
        .step_by(2)
        .zip(source.weights.iter().skip(1).step_by(2))
        .zip(source.sample_positions.iter().skip(1).step_by(2))
        .take(pairs_per_side)
        .map(|((&outer, &inner), &inner_position)| {
            let weight = outer + inner;
            (weight, inner_position - outer / weight)
        })
        .collect();

    let center = source
        .weights
        .get(pairs_per_side * 2)
        .copied()
        .ok_or_else(|| computation_error("bilinear reduction", &"missing center tap"))?;

    let weights = left
        .iter()
        .map(|&(weight, _)| weight)
        .chain(iter::once(center))
        .chain(left.iter().rev().map(|&(weight, _)| weight))
        .collect();
    let sample_positions = left
        .iter()
        .map(|&(_, position)| position)
        .chain(iter::once(0.0))
        .chain(left.iter().rev().map(|&(_, position)| -position))
        .collect();

    Ok(Kernel {
        weights,
        sample_positions,
    })
}
