//! Linear mapping between proportions and absolute ranges.

use crate::error::{Error, Result};

/// Scales a proportion in `[0, 1]` into `[low, high]`.
///
/// `0` maps to `low` and `1` maps to `high`.
///
/// # Errors
///
/// Returns [`Error::ProportionOutOfRange`] if `value` is outside `[0, 1]`
/// (NaN included) and [`Error::InvalidBounds`] if `low > high` or either
/// bound is not finite. Neither is clamped: both mean the caller computed
/// its bounds or slot order wrong.
///
/// # Examples
///
/// ```
/// use rocket_space::scale::scale;
///
/// assert_eq!(scale(0.5, 2.0, 4.0).unwrap(), 3.0);
/// assert!(scale(1.5, 2.0, 4.0).is_err());
/// ```
pub fn scale(value: f64, low: f64, high: f64) -> Result<f64> {
    check_range(low, high)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::ProportionOutOfRange { value });
    }
    Ok(value * (high - low) + low)
}

/// Inverse of [`scale`]: maps `y` in `[low, high]` back to a proportion.
///
/// A degenerate range (`low == high`) maps every valid `y` to `0`.
///
/// # Errors
///
/// Returns [`Error::InvalidBounds`] if `low > high` or a bound is not
/// finite, and [`Error::ProportionOutOfRange`] if `y` lies outside `[low, high]`.
#[allow(clippy::float_cmp)]
pub fn scale_inverse(y: f64, low: f64, high: f64) -> Result<f64> {
    check_range(low, high)?;
    if !(low..=high).contains(&y) {
        return Err(Error::ProportionOutOfRange {
            value: if high == low { f64::NAN } else { (y - low) / (high - low) },
        });
    }
    if high == low {
        return Ok(0.0);
    }
    Ok((y - low) / (high - low))
}

fn check_range(low: f64, high: f64) -> Result<()> {
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(Error::InvalidBounds { low, high });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(scale(0.0, 2.0, 9.0).unwrap(), 2.0);
        assert_eq!(scale(1.0, 2.0, 9.0).unwrap(), 9.0);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(scale(0.7, 5.0, 5.0).unwrap(), 5.0);
        assert_eq!(scale_inverse(5.0, 5.0, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_out_of_range_proportion() {
        assert!(matches!(
            scale(-0.01, 0.0, 1.0),
            Err(Error::ProportionOutOfRange { .. })
        ));
        assert!(matches!(
            scale(1.01, 0.0, 1.0),
            Err(Error::ProportionOutOfRange { .. })
        ));
        assert!(scale(f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        assert!(matches!(
            scale(0.5, 3.0, 1.0),
            Err(Error::InvalidBounds { low, high }) if low == 3.0 && high == 1.0
        ));
        assert!(scale_inverse(2.0, 3.0, 1.0).is_err());
    }

    #[test]
    fn test_rejects_infinite_bounds() {
        assert!(matches!(
            scale(0.5, f64::INFINITY, f64::INFINITY),
            Err(Error::InvalidBounds { .. })
        ));
        assert!(scale(0.0, 2.0, f64::INFINITY).is_err());
        assert!(scale(1.0, f64::NEG_INFINITY, 2.0).is_err());
        assert!(scale_inverse(3.0, 2.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_inverse_round_trip() {
        let (low, high) = (2.0, 14.5);
        for y in [2.0, 3.3, 7.25, 14.5] {
            let p = scale_inverse(y, low, high).unwrap();
            assert!((0.0..=1.0).contains(&p));
            assert!((scale(p, low, high).unwrap() - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_inverse_rejects_outside_range() {
        assert!(scale_inverse(15.0, 2.0, 14.5).is_err());
    }
}
