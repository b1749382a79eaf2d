//! Equally spaced sampling of a function over a closed interval

use num_traits::Float;

/// A function value at a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample<T> {
    /// Position the function was evaluated at
    pub x: T,
    /// Function value at `x`
    pub y: T,
}

impl<T: Float> Sample<T> {
    /// Sample at the origin with a zero value, used to fill scratch buffers
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }
}

/// Fill `samples` with evaluations of `f` spread evenly over `[min_x, max_x]`
///
/// The first sample lands on `min_x` and the last on `max_x`. The slice length
/// sets the sample count; a single sample produces a degenerate `NaN` position.
pub fn sample_interval<T, F>(f: F, min_x: T, max_x: T, samples: &mut [Sample<T>])
where
    T: Float,
    F: Fn(T) -> T,
{
    let Some(intervals) = samples.len().checked_sub(1).and_then(T::from) else {
        return;
    };
    let step = (max_x - min_x) / intervals;

    let mut offset = T::zero();
    for sample in samples.iter_mut() {
        let x = min_x + offset * step;
        *sample = Sample { x, y: f(x) };
        offset = offset + T::one();
    }
}
