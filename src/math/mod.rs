//! Numerical building blocks for kernel construction

/// Normal probability density function
pub mod density;
/// Composite Simpson integration
pub mod integration;
/// Equally spaced interval sampling
pub mod sampling;

pub use density::normal_density;
pub use integration::integrate_simpson;
pub use sampling::{Sample, sample_interval};
