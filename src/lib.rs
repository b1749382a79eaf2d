//! Normalized Gaussian blur kernels for discrete and bilinear sampling
//!
//! Standard kernels integrate the Gaussian density over each tap's unit
//! interval with composite Simpson's rule and normalize the result. Bilinear
//! kernels merge pairs of adjacent taps into single fractional-offset taps so
//! that a linearly filtered read replaces two discrete reads.
//!
//! Everything here is a pure function of its arguments: no state survives a
//! call and any entry point may be used concurrently.

#![forbid(unsafe_code)]

/// Kernel constants and request configuration
pub mod configuration;
/// Error types
pub mod error;
/// Kernel types, construction and bilinear reduction
pub mod kernel;
/// Density, sampling and integration primitives
pub mod math;

pub use configuration::{DEFAULT_SAMPLE_COUNT, KernelConfig};
pub use error::{KernelError, Result};
pub use kernel::Kernel;
pub use kernel::bilinear::{get_kernel_bilinear, get_kernel_bilinear_same_size};
pub use kernel::builder::get_kernel;
