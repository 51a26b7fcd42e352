/// Generate a random `f64` in `[low, high)`; a degenerate range yields `low`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}
