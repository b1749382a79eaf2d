//! Composite Simpson integration over equally spaced samples

use crate::math::sampling::Sample;
use num_traits::Float;

/// Integrate equally spaced samples with composite Simpson's 1/3 rule
///
/// Interior samples alternate weights 4 and 2, starting with 4 at index 1.
/// The sample count must be odd for the result to be exact on cubics; an
/// even count still returns a value, just a wrong one.
///
/// Returns `None` for fewer than two samples.
pub fn integrate_simpson<T: Float>(samples: &[Sample<T>]) -> Option<T> {
    let (first, rest) = samples.split_first()?;
    let (last, interior) = rest.split_last()?;

    let two = T::one() + T::one();
    let four = two + two;
    let three = two + T::one();

    let mut result = first.y + last.y;
    for (index, sample) in interior.iter().enumerate() {
        // Interior index 0 is sample index 1, which is odd
        let weight = if index % 2 == 0 { four } else { two };
        result = result + weight * sample.y;
    }

    let h = (last.x - first.x) / T::from(samples.len() - 1)?;
    Some(result * h / three)
}
