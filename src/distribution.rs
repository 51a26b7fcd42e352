//! Distribution descriptors handed to an external sampler.
//!
//! A descriptor does not draw anything by itself; it declares how a value
//! for one slot should be drawn. Any sampler that understands the four kinds
//! below can consume a [`SampleSpace`](crate::space::SampleSpace).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tolerance used when checking that a value sits on a step grid.
const GRID_EPS: f64 = 1e-9;

/// Real value drawn uniformly from `[low, high]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniformDistribution {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (inclusive).
    pub high: f64,
}

/// Integer drawn uniformly from `offset..=offset + n - 1`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntOffsetDistribution {
    /// Number of distinct values.
    pub n: u32,
    /// Smallest value.
    pub offset: i64,
}

/// One literal picked from a fixed list.
///
/// Samplers report the picked literal itself, not its index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategoricalDistribution {
    /// The available options.
    pub options: Vec<f64>,
}

/// Real value drawn from `[low, high]` and snapped to multiples of `step`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuantizedDistribution {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (inclusive).
    pub high: f64,
    /// Grid spacing.
    pub step: f64,
}

/// Enum wrapping all descriptor kinds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Distribution {
    /// A continuous uniform range.
    Uniform(UniformDistribution),
    /// A uniform choice among consecutive integers.
    IntOffset(IntOffsetDistribution),
    /// A uniform choice among literals.
    Categorical(CategoricalDistribution),
    /// A uniform range snapped to a grid.
    Quantized(QuantizedDistribution),
}

impl Distribution {
    /// Short tag naming the descriptor kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Distribution::Uniform(_) => "uniform",
            Distribution::IntOffset(_) => "int_offset",
            Distribution::Categorical(_) => "categorical",
            Distribution::Quantized(_) => "quantized",
        }
    }

    /// Checks that the descriptor can be sampled from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] when `low > high`, when `n == 0` or
    /// when `offset + n - 1` overflows `i64`,
    /// [`Error::InvalidStep`] for a non-positive step and
    /// [`Error::EmptyChoices`] for a categorical without options.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<()> {
        match self {
            Distribution::Uniform(d) => check_bounds(d.low, d.high),
            Distribution::IntOffset(d) => {
                let last = d
                    .n
                    .checked_sub(1)
                    .and_then(|span| d.offset.checked_add(i64::from(span)));
                if last.is_none() {
                    return Err(Error::InvalidBounds {
                        low: d.offset as f64,
                        high: d.offset as f64 + f64::from(d.n) - 1.0,
                    });
                }
                Ok(())
            }
            Distribution::Categorical(d) => {
                if d.options.is_empty() {
                    return Err(Error::EmptyChoices);
                }
                Ok(())
            }
            Distribution::Quantized(d) => {
                check_bounds(d.low, d.high)?;
                if d.step.is_nan() || d.step <= 0.0 {
                    return Err(Error::InvalidStep);
                }
                Ok(())
            }
        }
    }

    /// Smallest and largest value a sampler can produce.
    ///
    /// For an empty categorical this is `(NaN, NaN)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Distribution::Uniform(d) => (d.low, d.high),
            Distribution::IntOffset(d) => {
                let low = d.offset as f64;
                (low, low + f64::from(d.n) - 1.0)
            }
            Distribution::Categorical(d) => d.options.iter().fold((f64::NAN, f64::NAN), |acc, &o| {
                (acc.0.min(o), acc.1.max(o))
            }),
            Distribution::Quantized(d) => (d.low, d.high),
        }
    }

    /// Returns `true` if `value` is something this descriptor can produce.
    #[must_use]
    #[allow(clippy::float_cmp, clippy::cast_precision_loss)]
    pub fn contains(&self, value: f64) -> bool {
        match self {
            Distribution::Uniform(d) => (d.low..=d.high).contains(&value),
            Distribution::IntOffset(_) => {
                let (low, high) = self.bounds();
                value.fract() == 0.0 && (low..=high).contains(&value)
            }
            Distribution::Categorical(d) => d.options.contains(&value),
            Distribution::Quantized(d) => {
                if !(d.low..=d.high).contains(&value) {
                    return false;
                }
                let k = (value / d.step).round();
                (value - k * d.step).abs() < GRID_EPS
            }
        }
    }
}

fn check_bounds(low: f64, high: f64) -> Result<()> {
    if low.is_nan() || high.is_nan() || low > high {
        return Err(Error::InvalidBounds { low, high });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_validation() {
        let ok = Distribution::Uniform(UniformDistribution { low: 0.0, high: 1.0 });
        assert!(ok.validate().is_ok());

        let bad = Distribution::Uniform(UniformDistribution { low: 2.0, high: 1.0 });
        assert!(matches!(bad.validate(), Err(Error::InvalidBounds { .. })));

        let nan = Distribution::Uniform(UniformDistribution {
            low: f64::NAN,
            high: 1.0,
        });
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_quantized_validation() {
        let bad_step = Distribution::Quantized(QuantizedDistribution {
            low: 1.0,
            high: 10.0,
            step: 0.0,
        });
        assert!(matches!(bad_step.validate(), Err(Error::InvalidStep)));
    }

    #[test]
    fn test_empty_categorical() {
        let dist = Distribution::Categorical(CategoricalDistribution { options: vec![] });
        assert!(matches!(dist.validate(), Err(Error::EmptyChoices)));
    }

    #[test]
    fn test_int_offset_bounds_and_membership() {
        let dist = Distribution::IntOffset(IntOffsetDistribution { n: 7, offset: 1 });
        assert_eq!(dist.bounds(), (1.0, 7.0));
        assert!(dist.contains(1.0));
        assert!(dist.contains(7.0));
        assert!(!dist.contains(0.0));
        assert!(!dist.contains(8.0));
        assert!(!dist.contains(2.5));

        let empty = Distribution::IntOffset(IntOffsetDistribution { n: 0, offset: 1 });
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_int_offset_rejects_overflowing_range() {
        let top = Distribution::IntOffset(IntOffsetDistribution {
            n: 1,
            offset: i64::MAX,
        });
        assert!(top.validate().is_ok());

        let past_top = Distribution::IntOffset(IntOffsetDistribution {
            n: 3,
            offset: i64::MAX,
        });
        assert!(matches!(past_top.validate(), Err(Error::InvalidBounds { .. })));

        let bottom = Distribution::IntOffset(IntOffsetDistribution {
            n: u32::MAX,
            offset: i64::MIN,
        });
        assert!(bottom.validate().is_ok());
    }

    #[test]
    fn test_quantized_membership() {
        let dist = Distribution::Quantized(QuantizedDistribution {
            low: 1.0,
            high: 10.0,
            step: 1.0,
        });
        assert!(dist.contains(4.0));
        assert!(!dist.contains(4.5));
        assert!(!dist.contains(11.0));
    }

    #[test]
    fn test_categorical_membership() {
        let dist = Distribution::Categorical(CategoricalDistribution {
            options: vec![3.0, 4.0],
        });
        assert_eq!(dist.bounds(), (3.0, 4.0));
        assert!(dist.contains(3.0));
        assert!(!dist.contains(5.0));
        assert_eq!(dist.kind(), "categorical");
    }
}
