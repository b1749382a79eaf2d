//! 2-D expansion of separable 1-D kernels

use crate::kernel::Kernel;
use ndarray::{Array2, ArrayView1, Axis};

/// Outer product `w[i] * w[j]` of a kernel's weights with itself
///
/// Applying the result as a single 2-D pass matches a horizontal pass
/// followed by a vertical pass with `kernel`. Row `i` and column `j` sit at
/// offsets `sample_positions[i]` and `sample_positions[j]`. The matrix sums to
/// 1 whenever the kernel does.
pub fn outer_product(kernel: &Kernel) -> Array2<f64> {
    let weights = ArrayView1::from(kernel.weights());
    &weights.insert_axis(Axis(1)) * &weights.insert_axis(Axis(0))
}
