//! Normal probability density

use num_traits::{Float, FloatConst};

/// Normal probability density at `x` for mean `mu` and standard deviation `sigma`
///
/// `sigma` must be positive; zero yields `NaN` or infinity rather than an error.
pub fn normal_density<T: Float + FloatConst>(x: T, mu: T, sigma: T) -> T {
    let two = T::one() + T::one();
    let d = x - mu;
    (-d * d / (two * sigma * sigma)).exp() / ((two * T::PI()).sqrt() * sigma)
}
