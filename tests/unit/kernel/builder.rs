//! Tests for standard kernel construction

#[cfg(test)]
mod tests {
    use gaussian_kernels::kernel::builder::{get_kernel, sample_positions, samples_per_bin};
    use gaussian_kernels::{KernelError, Result};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Tests sigma = 1, five taps against reference weights
    // Verified by normalizing with the point-sampled density instead of the integral
    #[test]
    fn test_sigma_one_five_taps() -> Result<()> {
        let kernel = get_kernel(1.0, 5, 1000)?;

        let expected = [
            0.061_359_580_865_552_1,
            0.244_770_219_748_910_9,
            0.387_740_398_771_074_1,
            0.244_770_219_748_910_9,
            0.061_359_580_865_552_1,
        ];
        for (weight, expected) in kernel.weights.iter().zip(expected) {
            assert!((weight - expected).abs() < 1e-12, "{weight} != {expected}");
        }
        assert_eq!(kernel.sample_positions, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        Ok(())
    }

    // Tests a single tap takes all the weight
    // Verified by skipping normalization
    #[test]
    fn test_single_tap() -> Result<()> {
        let kernel = get_kernel(0.7, 1, 1000)?;
        assert_eq!(kernel.sample_positions, vec![0.0]);
        assert!(kernel.weights.first().is_some_and(|w| (w - 1.0).abs() < 1e-15));
        Ok(())
    }

    // Tests normalization, symmetry, positions and unimodality across random inputs
    // Verified by offsetting tap intervals by a full unit
    #[test]
    fn test_random_valid_kernels() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let kernel_size = rng.random_range(0..20_usize) * 2 + 1;
            let sigma = rng.random_range(0.1..8.0);
            let sample_count = rng.random_range(kernel_size + 1..5000);

            let kernel = get_kernel(sigma, kernel_size, sample_count)?;

            assert_eq!(kernel.len(), kernel_size);
            assert!(
                (kernel.weight_sum() - 1.0).abs() < 1e-9,
                "sigma {sigma}, size {kernel_size}: sum {}",
                kernel.weight_sum()
            );
            assert!(kernel.is_symmetric(1e-12));

            let half = (kernel_size / 2) as f64;
            assert_eq!(kernel.sample_positions.first().copied(), Some(-half));
            assert_eq!(kernel.sample_positions.last().copied(), Some(half));

            // Weights never increase moving outward from the center
            let right_half = kernel.weights.get(kernel_size / 2..).unwrap_or_default();
            for pair in right_half.windows(2) {
                if let [inner, outer] = pair {
                    assert!(inner >= outer, "sigma {sigma}: {inner} < {outer}");
                }
            }
        }
        Ok(())
    }

    // Tests repeated calls are bit-identical
    // Verified by seeding the scratch buffer from a shared static
    #[test]
    fn test_deterministic() -> Result<()> {
        let first = get_kernel(2.3, 11, 777)?;
        let second = get_kernel(2.3, 11, 777)?;

        let bits = |values: &[f64]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first.weights), bits(&second.weights));
        assert_eq!(bits(&first.sample_positions), bits(&second.sample_positions));
        Ok(())
    }

    // Tests even sizes are rejected with the violated constraint named
    // Verified by checking parity after building
    #[test]
    fn test_even_kernel_size_rejected() {
        for kernel_size in [0, 2, 4, 10] {
            let Err(KernelError::InvalidArgument {
                parameter, reason, ..
            }) = get_kernel(1.0, kernel_size, 1000)
            else {
                unreachable!("kernel_size {kernel_size} should be rejected");
            };
            assert_eq!(parameter, "kernel_size");
            assert!(reason.contains("odd"));
        }
    }

    // Tests non-positive and non-finite sigma are rejected
    // Verified by only rejecting negative sigma
    #[test]
    fn test_invalid_sigma_rejected() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                get_kernel(sigma, 5, 1000),
                Err(KernelError::InvalidArgument {
                    parameter: "sigma",
                    ..
                })
            ));
        }
    }

    // Tests too few samples per tap are rejected
    // Verified by allowing a single sample per tap
    #[test]
    fn test_insufficient_sample_count_rejected() {
        assert!(matches!(
            get_kernel(1.0, 5, 5),
            Err(KernelError::InvalidArgument {
                parameter: "sample_count",
                ..
            })
        ));
        assert!(get_kernel(1.0, 5, 6).is_ok());
    }

    // Tests per-tap sample counts are rounded up and forced odd
    // Verified by using floor division
    #[test]
    fn test_samples_per_bin() {
        assert_eq!(samples_per_bin(5, 1000), 201);
        assert_eq!(samples_per_bin(7, 1000), 143);
        assert_eq!(samples_per_bin(9, 1000), 113);
        assert_eq!(samples_per_bin(3, 10), 5);
    }

    // Tests positions are consecutive integers centered at zero
    // Verified by starting from zero instead of -(size / 2)
    #[test]
    fn test_sample_positions() {
        assert_eq!(sample_positions(1), vec![0.0]);
        assert_eq!(sample_positions(3), vec![-1.0, 0.0, 1.0]);
        assert_eq!(
            sample_positions(7),
            vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]
        );
    }
}
