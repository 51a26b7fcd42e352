//! Random sampler implementation.

use parking_lot::Mutex;

use crate::distribution::Distribution;
use crate::rng_util;
use crate::sampler::Sampler;
use crate::slot::Slot;

/// A simple random sampler that draws uniformly from each descriptor.
///
/// It ignores any history and serves as a baseline and for drawing example
/// designs. Uniform draws fall in `[low, high)`: the upper bound is a valid
/// value for the descriptor but this sampler never produces it.
///
/// # Examples
///
/// ```
/// use rocket_space::sampler::random::RandomSampler;
///
/// // Create with default RNG
/// let sampler = RandomSampler::new();
///
/// // Create with a fixed seed for reproducibility
/// let sampler = RandomSampler::with_seed(42);
/// ```
pub struct RandomSampler {
    rng: Mutex<fastrand::Rng>,
}

impl RandomSampler {
    /// Creates a new random sampler with a default random seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Creates a new random sampler with a fixed seed for reproducibility.
    ///
    /// Using the same seed will produce the same sequence of sampled values.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for RandomSampler {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn sample(&self, _slot: Slot, distribution: &Distribution) -> f64 {
        let mut rng = self.rng.lock();

        match distribution {
            Distribution::Uniform(d) => rng_util::f64_range(&mut rng, d.low, d.high),
            Distribution::IntOffset(d) => {
                let k = rng.u32(0..d.n);
                d.offset.saturating_add(i64::from(k)) as f64
            }
            Distribution::Categorical(d) => d.options[rng.usize(0..d.options.len())],
            Distribution::Quantized(d) => {
                // Pick uniformly among the multiples of `step` inside the range.
                let first = (d.low / d.step).ceil() as i64;
                let last = (d.high / d.step).floor() as i64;
                if last < first {
                    return d.low;
                }
                let k = rng.i64(first..=last);
                k as f64 * d.step
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
mod tests {
    use super::*;
    use crate::distribution::{
        CategoricalDistribution, IntOffsetDistribution, QuantizedDistribution,
        UniformDistribution,
    };

    #[test]
    fn test_random_sampler_uniform() {
        let sampler = RandomSampler::with_seed(42);
        let dist = Distribution::Uniform(UniformDistribution {
            low: 2.0,
            high: 12.0,
        });

        for _ in 0..100 {
            let v = sampler.sample(Slot::Radius, &dist);
            assert!((2.0..=12.0).contains(&v));
        }
    }

    #[test]
    fn test_random_sampler_uniform_excludes_high() {
        let sampler = RandomSampler::with_seed(3);
        let dist = Distribution::Uniform(UniformDistribution {
            low: 0.0,
            high: 1.0,
        });
        for _ in 0..1000 {
            let v = sampler.sample(Slot::FinSweep, &dist);
            assert!((0.0..1.0).contains(&v));
        }

        let point = Distribution::Uniform(UniformDistribution {
            low: 4.0,
            high: 4.0,
        });
        assert_eq!(sampler.sample(Slot::Radius, &point), 4.0);
    }

    #[test]
    fn test_random_sampler_int_offset_at_i64_max() {
        let sampler = RandomSampler::with_seed(1);
        let dist = Distribution::IntOffset(IntOffsetDistribution {
            n: 1,
            offset: i64::MAX,
        });
        dist.validate().unwrap();
        assert_eq!(sampler.sample(Slot::NoseShape, &dist), i64::MAX as f64);
    }

    #[test]
    fn test_random_sampler_int_offset() {
        let sampler = RandomSampler::with_seed(42);
        let dist = Distribution::IntOffset(IntOffsetDistribution { n: 7, offset: 1 });

        let mut seen = [false; 7];
        for _ in 0..500 {
            let v = sampler.sample(Slot::NoseShape, &dist);
            assert_eq!(v.fract(), 0.0);
            assert!((1.0..=7.0).contains(&v), "value {v} out of range");
            seen[v as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s), "every shape should appear");
    }

    #[test]
    fn test_random_sampler_categorical_returns_option() {
        let sampler = RandomSampler::with_seed(42);
        let dist = Distribution::Categorical(CategoricalDistribution {
            options: vec![3.0, 4.0],
        });

        for _ in 0..100 {
            let v = sampler.sample(Slot::FinCount, &dist);
            assert!(v == 3.0 || v == 4.0);
        }
    }

    #[test]
    fn test_random_sampler_quantized() {
        let sampler = RandomSampler::with_seed(42);
        let dist = Distribution::Quantized(QuantizedDistribution {
            low: 1.0,
            high: 10.0,
            step: 1.0,
        });

        for _ in 0..100 {
            let v = sampler.sample(Slot::FinThickness, &dist);
            assert!(dist.contains(v), "value {v} off grid");
        }
    }

    #[test]
    fn test_random_sampler_quantized_without_grid_point() {
        let sampler = RandomSampler::with_seed(7);
        let dist = Distribution::Quantized(QuantizedDistribution {
            low: 1.2,
            high: 1.8,
            step: 1.0,
        });
        assert_eq!(sampler.sample(Slot::FinThickness, &dist), 1.2);
    }

    #[test]
    fn test_random_sampler_reproducibility() {
        let sampler1 = RandomSampler::with_seed(42);
        let sampler2 = RandomSampler::with_seed(42);
        let dist = Slot::NoseLen.default_distribution().unwrap();

        for _ in 0..10 {
            let v1 = sampler1.sample(Slot::NoseLen, &dist);
            let v2 = sampler2.sample(Slot::NoseLen, &dist);
            assert_eq!(v1, v2);
        }
    }
}
