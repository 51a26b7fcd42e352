//! Canned sample spaces for progressively narrower searches.
//!
//! | preset | pinned slots |
//! |--------|--------------|
//! | [`Preset::All`] | none |
//! | [`Preset::Most`] | the four fin-edge and feed-tube slots that barely matter |
//! | [`Preset::Few`] | `Most` plus nose tip, nose power, fin thickness and base separation |
//! | [`Preset::Body`] | everything except body geometry |
//!
//! Each preset's space is built once on first access and shared as a
//! `&'static SampleSpace`.
//!
//! ```
//! use rocket_space::presets::{self, Preset};
//!
//! let body = Preset::Body.space();
//! assert_eq!(body.n_learnable(), 4);
//! assert!(std::ptr::eq(body, presets::get("body").unwrap()));
//! ```

use core::fmt;
use core::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::slot::Slot;
use crate::space::{FixPolicy, SampleSpace, SpaceConfig};

/// Slots `Most` considers unimportant.
const MOST: [(Slot, f64); 4] = [
    (Slot::FinLeRad, 0.5),
    (Slot::FinLeLen, 1.5),
    (Slot::FinTeLen, 1.5),
    (Slot::Ch4TubeRadius, 8.0),
];

/// Pinned on top of [`MOST`] by `Few`.
const FEW: [(Slot, f64); 4] = [
    (Slot::NoseTipDi, 0.0),
    (Slot::FinThickness, 1.0),
    (Slot::FinBaseSep, 0.0),
    (Slot::NosePower, 0.1),
];

/// Pinned on top of [`MOST`] by `Body`.
const BODY: [(Slot, f64); 12] = [
    (Slot::NoseLen, 15.0),
    (Slot::NoseShape, 1.0),
    (Slot::NoseTipDi, 0.0),
    (Slot::NosePower, 0.0),
    (Slot::FinCount, 4.0),
    (Slot::FinRootChord, 1.0),
    (Slot::FinSpan, 1.0),
    (Slot::FinTipChord, 0.75),
    (Slot::FinSweep, 0.33),
    (Slot::FinThickness, 1.0),
    (Slot::FinBaseSep, 0.0),
    (Slot::FinShape, 7.0),
];

static ALL_SPACE: LazyLock<SampleSpace> =
    LazyLock::new(|| Preset::All.build(FixPolicy::Explicit));
static MOST_SPACE: LazyLock<SampleSpace> =
    LazyLock::new(|| Preset::Most.build(FixPolicy::Explicit));
static FEW_SPACE: LazyLock<SampleSpace> =
    LazyLock::new(|| Preset::Few.build(FixPolicy::Explicit));
static BODY_SPACE: LazyLock<SampleSpace> =
    LazyLock::new(|| Preset::Body.build(FixPolicy::Explicit));

/// A named, predefined sample space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Every learnable slot is learned.
    All,
    /// Unimportant fin-edge and feed-tube slots pinned.
    Most,
    /// Additional nose and fin details pinned.
    Few,
    /// Only body geometry left to learn.
    Body,
}

impl Preset {
    /// All presets, from widest to narrowest.
    pub const ALL: [Preset; 4] = [Preset::All, Preset::Most, Preset::Few, Preset::Body];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Preset::All => "all",
            Preset::Most => "most",
            Preset::Few => "few",
            Preset::Body => "body",
        }
    }

    /// Values this preset pins.
    #[must_use]
    pub fn pinned(self) -> Vec<(Slot, f64)> {
        let extra: &[(Slot, f64)] = match self {
            Preset::All => return Vec::new(),
            Preset::Most => &[],
            Preset::Few => &FEW,
            Preset::Body => &BODY,
        };
        MOST.iter().chain(extra).copied().collect()
    }

    /// The config behind this preset, with the default policy.
    #[must_use]
    pub fn config(self) -> SpaceConfig {
        self.pinned()
            .into_iter()
            .fold(SpaceConfig::new(), |config, (slot, value)| config.fix(slot, value))
    }

    /// Builds a fresh space for this preset under `policy`.
    ///
    /// With [`FixPolicy::Truthy`], the zero-valued pins of `Few` and `Body`
    /// fall back to their descriptors.
    #[must_use]
    pub fn build(self, policy: FixPolicy) -> SampleSpace {
        trace_info!(preset = self.name(), ?policy, "building preset space");
        self.config().policy(policy).build()
    }

    /// The shared space for this preset.
    #[must_use]
    pub fn space(self) -> &'static SampleSpace {
        match self {
            Preset::All => LazyLock::force(&ALL_SPACE),
            Preset::Most => LazyLock::force(&MOST_SPACE),
            Preset::Few => LazyLock::force(&FEW_SPACE),
            Preset::Body => LazyLock::force(&BODY_SPACE),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| Error::UnknownName(s.to_string()))
    }
}

/// Looks up a preset space by name.
#[must_use]
pub fn get(name: &str) -> Option<&'static SampleSpace> {
    name.parse::<Preset>().ok().map(Preset::space)
}

/// Iterates `(name, space)` for every preset.
pub fn iter() -> impl Iterator<Item = (&'static str, &'static SampleSpace)> {
    Preset::ALL
        .into_iter()
        .map(|preset| (preset.name(), preset.space()))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_counts() {
        assert_eq!(Preset::All.pinned().len(), 0);
        assert_eq!(Preset::Most.pinned().len(), 4);
        assert_eq!(Preset::Few.pinned().len(), 8);
        assert_eq!(Preset::Body.pinned().len(), 16);
    }

    #[test]
    fn test_learnable_counts() {
        assert_eq!(Preset::All.space().n_learnable(), 20);
        assert_eq!(Preset::Most.space().n_learnable(), 16);
        assert_eq!(Preset::Few.space().n_learnable(), 12);
        assert_eq!(Preset::Body.space().n_learnable(), 4);
    }

    #[test]
    fn test_truthy_policy_releases_zero_pins() {
        let few = Preset::Few.build(FixPolicy::Truthy);
        assert!(!few.entry(Slot::NoseTipDi).is_fixed());
        assert!(!few.entry(Slot::FinBaseSep).is_fixed());
        assert_eq!(few.n_learnable(), 14);

        let body = Preset::Body.build(FixPolicy::Truthy);
        assert!(!body.entry(Slot::NosePower).is_fixed());
        assert_eq!(body.n_learnable(), 7);
    }

    #[test]
    fn test_names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
        assert!("none".parse::<Preset>().is_err());
        assert!(get("none").is_none());
    }

    #[test]
    fn test_space_is_shared() {
        assert!(core::ptr::eq(Preset::Most.space(), Preset::Most.space()));
        assert_eq!(*Preset::Most.space(), Preset::Most.build(FixPolicy::Explicit));
    }
}
