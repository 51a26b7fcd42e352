//! Sampler trait and a reference implementation.
//!
//! The search algorithm that explores a [`SampleSpace`](crate::space::SampleSpace)
//! lives outside this crate. Anything that can turn a [`Distribution`] into a
//! number can drive it by implementing [`Sampler`].

pub mod random;

use crate::distribution::Distribution;
use crate::slot::Slot;

/// Trait for pluggable value-drawing strategies.
///
/// The trait requires `Send + Sync` so one sampler can serve concurrent
/// callers.
pub trait Sampler: Send + Sync {
    /// Draws a concrete value for `slot` from `distribution`.
    ///
    /// Implementations may assume `distribution` has been validated. For a
    /// categorical descriptor the returned value is the chosen option, not
    /// its index.
    fn sample(&self, slot: Slot, distribution: &Distribution) -> f64;
}

impl<S: Sampler + ?Sized> Sampler for &S {
    fn sample(&self, slot: Slot, distribution: &Distribution) -> f64 {
        (**self).sample(slot, distribution)
    }
}
