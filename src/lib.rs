#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Search space and decoder for rocket design parameters.
//!
//! A rocket design is described by 22 numbers in a fixed order. Some are
//! absolute quantities (radius, nose length), others are proportions whose
//! physical meaning depends on values earlier in the vector (the fin root
//! chord is a fraction of a range bounded by the body and nose lengths).
//!
//! The crate provides two pure pieces and a set of canned configurations:
//!
//! | Piece | Role |
//! |-------|------|
//! | [`SpaceConfig`] → [`SampleSpace`] | Pin some slots, leave the rest as [`Distribution`] descriptors for a sampler. |
//! | [`decode`] → [`RocketDesign`] | Turn a concrete sampled vector into a design in engineering units. |
//! | [`Preset`] | The `all`, `most`, `few` and `body` spaces, built once and shared. |
//!
//! The search algorithm and the scoring function are external. A minimal
//! [`RandomSampler`](sampler::random::RandomSampler) is included to draw
//! example designs.
//!
//! # Getting Started
//!
//! ```
//! use rocket_space::prelude::*;
//!
//! let sampler = RandomSampler::with_seed(7);
//! let design = Preset::Most.space().draw_design(&sampler).unwrap();
//!
//! assert!((2.0..=12.0).contains(&design.radius));
//! assert_eq!(design.ch4_tube_radius, 1.0);
//! ```
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public types, JSON config loading and [`SampleSpace::save`]/[`SampleSpace::load`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) when spaces are built and designs decoded | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod decode;
pub mod distribution;
mod error;
pub mod presets;
mod rng_util;
pub mod sampler;
pub mod scale;
pub mod slot;
pub mod space;

pub use decode::{RocketDesign, decode};
pub use distribution::Distribution;
pub use error::{Error, Result};
pub use presets::Preset;
pub use slot::{SLOT_COUNT, Slot};
pub use space::{FixPolicy, SampleSpace, SlotEntry, SpaceConfig};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use rocket_space::prelude::*;
/// ```
pub mod prelude {
    pub use crate::decode::{RocketDesign, decode, tank_and_engine_len};
    pub use crate::distribution::{
        CategoricalDistribution, Distribution, IntOffsetDistribution, QuantizedDistribution,
        UniformDistribution,
    };
    pub use crate::error::{Error, Result};
    pub use crate::presets::Preset;
    pub use crate::sampler::Sampler;
    pub use crate::sampler::random::RandomSampler;
    pub use crate::scale::{scale, scale_inverse};
    pub use crate::slot::{SLOT_COUNT, Slot, SlotRole, Unit};
    pub use crate::space::{FixPolicy, SampleSpace, SlotEntry, SpaceConfig};
}
