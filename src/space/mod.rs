//! The space builder: which slots are pinned and which are learned.
//!
//! A [`SpaceConfig`] records an explicit `Option` per slot. Building it
//! yields a [`SampleSpace`], an ordered list of [`SLOT_COUNT`] entries that
//! are either a concrete scalar or a [`Distribution`] for the sampler.
//!
//! # Example
//!
//! ```
//! use rocket_space::slot::Slot;
//! use rocket_space::space::{SampleSpace, SlotEntry};
//!
//! let space = SampleSpace::builder()
//!     .fix(Slot::Radius, 4.0)
//!     .fix(Slot::FinCount, 3.0)
//!     .build();
//!
//! assert_eq!(space.entry(Slot::Radius), &SlotEntry::Fixed(4.0));
//! assert!(space.entry(Slot::NoseLen).distribution().is_some());
//! assert_eq!(space.n_learnable(), 18);
//! ```

mod persistence;

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::decode::{RocketDesign, decode};
use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::sampler::Sampler;
use crate::slot::{SLOT_COUNT, Slot, SlotRole};

/// One element of a sample space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SlotEntry {
    /// A concrete value passed through unchanged.
    Fixed(f64),
    /// A descriptor the sampler draws from.
    Learn(Distribution),
}

impl SlotEntry {
    /// Returns `true` if the entry is a concrete scalar.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, SlotEntry::Fixed(_))
    }

    /// The pinned scalar, if any.
    #[must_use]
    pub fn fixed_value(&self) -> Option<f64> {
        match self {
            SlotEntry::Fixed(v) => Some(*v),
            SlotEntry::Learn(_) => None,
        }
    }

    /// The descriptor, if the slot is learned.
    #[must_use]
    pub fn distribution(&self) -> Option<&Distribution> {
        match self {
            SlotEntry::Fixed(_) => None,
            SlotEntry::Learn(d) => Some(d),
        }
    }
}

/// Decides whether a supplied value pins its slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FixPolicy {
    /// Any supplied value pins its slot, zero included.
    #[default]
    Explicit,
    /// A supplied zero counts as "not provided" and the slot stays learned.
    ///
    /// Reproduces spaces built with a truthiness sentinel, where a parameter
    /// could not be pinned at exactly zero.
    Truthy,
}

impl FixPolicy {
    /// Returns `true` if `value` should replace the slot's descriptor.
    #[must_use]
    pub fn pins(self, value: f64) -> bool {
        match self {
            FixPolicy::Explicit => true,
            // NaN is truthy, only +0 and -0 are not.
            FixPolicy::Truthy => value != 0.0,
        }
    }
}

/// Input of the space builder.
///
/// Slots without a value are learned, from a custom distribution when one
/// was given and from [`Slot::default_distribution`] otherwise. The two fixed
/// slots fall back to their defaults (65 lb dry mass, 15 % thrust margin) and
/// ignore both the policy and custom distributions.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpaceConfig {
    policy: FixPolicy,
    pinned: BTreeMap<Slot, f64>,
    distributions: BTreeMap<Slot, Distribution>,
}

impl SpaceConfig {
    /// Creates a config with every learnable slot left to the sampler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins `slot` to `value`, replacing any custom distribution.
    #[must_use]
    pub fn fix(mut self, slot: Slot, value: f64) -> Self {
        self.distributions.remove(&slot);
        self.pinned.insert(slot, value);
        self
    }

    /// Returns `slot` to its default distribution.
    #[must_use]
    pub fn learn(mut self, slot: Slot) -> Self {
        self.pinned.remove(&slot);
        self.distributions.remove(&slot);
        self
    }

    /// Learns `slot` from `distribution` instead of its default, replacing
    /// any pinned value.
    ///
    /// The descriptor is not checked here; [`SampleSpace::validate`] and
    /// [`SampleSpace::draw`] reject one that cannot be sampled from.
    ///
    /// ```
    /// use rocket_space::distribution::{Distribution, UniformDistribution};
    /// use rocket_space::slot::Slot;
    /// use rocket_space::space::SpaceConfig;
    ///
    /// let narrow = Distribution::Uniform(UniformDistribution { low: 4.0, high: 6.0 });
    /// let space = SpaceConfig::new().learn_from(Slot::Radius, narrow.clone()).build();
    /// assert_eq!(space.entry(Slot::Radius).distribution(), Some(&narrow));
    /// ```
    #[must_use]
    pub fn learn_from(mut self, slot: Slot, distribution: Distribution) -> Self {
        self.pinned.remove(&slot);
        self.distributions.insert(slot, distribution);
        self
    }

    /// Sets the fix-versus-learn policy.
    #[must_use]
    pub fn policy(mut self, policy: FixPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn fix_policy(&self) -> FixPolicy {
        self.policy
    }

    /// The value supplied for `slot`, whether or not the policy honors it.
    #[must_use]
    pub fn pinned(&self, slot: Slot) -> Option<f64> {
        self.pinned.get(&slot).copied()
    }

    /// The custom distribution supplied for `slot`, if any.
    #[must_use]
    pub fn custom_distribution(&self, slot: Slot) -> Option<&Distribution> {
        self.distributions.get(&slot)
    }

    fn entry_for(&self, slot: Slot) -> SlotEntry {
        let supplied = self.pinned(slot);
        if slot.role() == SlotRole::Fixed {
            let value = supplied.or(slot.default_value()).unwrap_or_default();
            return SlotEntry::Fixed(value);
        }
        let dist = self
            .distributions
            .get(&slot)
            .cloned()
            .or_else(|| slot.default_distribution());
        match (supplied, dist) {
            (Some(value), _) if self.policy.pins(value) => SlotEntry::Fixed(value),
            (_, Some(dist)) => SlotEntry::Learn(dist),
            (value, None) => SlotEntry::Fixed(value.unwrap_or_default()),
        }
    }

    /// Builds the ordered sample space.
    #[must_use]
    pub fn build(&self) -> SampleSpace {
        let entries = core::array::from_fn(|i| self.entry_for(Slot::ALL[i]));
        let space = SampleSpace { entries };
        trace_debug!(
            n_fixed = space.n_fixed(),
            policy = ?self.policy,
            "sample space built"
        );
        space
    }
}

impl From<SpaceConfig> for SampleSpace {
    fn from(config: SpaceConfig) -> Self {
        config.build()
    }
}

/// Output of the space builder: one entry per slot in canonical order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SampleSpace {
    entries: [SlotEntry; SLOT_COUNT],
}

impl Default for SampleSpace {
    fn default() -> Self {
        SpaceConfig::new().build()
    }
}

impl SampleSpace {
    /// Starts a [`SpaceConfig`].
    #[must_use]
    pub fn builder() -> SpaceConfig {
        SpaceConfig::new()
    }

    /// The entry at `slot`.
    #[must_use]
    pub fn entry(&self, slot: Slot) -> &SlotEntry {
        &self.entries[slot.index()]
    }

    /// All entries in canonical order.
    #[must_use]
    pub fn entries(&self) -> &[SlotEntry; SLOT_COUNT] {
        &self.entries
    }

    /// Iterates `(slot, entry)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &SlotEntry)> {
        Slot::ALL.into_iter().zip(self.entries.iter())
    }

    /// Slots still left to the sampler.
    pub fn learnable(&self) -> impl Iterator<Item = Slot> + '_ {
        self.iter()
            .filter(|(_, entry)| !entry.is_fixed())
            .map(|(slot, _)| slot)
    }

    #[must_use]
    pub fn n_learnable(&self) -> usize {
        self.learnable().count()
    }

    #[must_use]
    pub fn n_fixed(&self) -> usize {
        SLOT_COUNT - self.n_learnable()
    }

    /// Checks every entry in the space.
    ///
    /// Built from default descriptors and finite pins, a space always passes.
    /// This guards custom distributions, NaN pins and spaces loaded from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] for a pinned NaN or infinity, or the
    /// first descriptor validation error.
    pub fn validate(&self) -> Result<()> {
        self.iter().try_for_each(|(slot, entry)| match entry {
            SlotEntry::Fixed(value) if !value.is_finite() => Err(Error::NonFinite {
                slot,
                value: *value,
            }),
            SlotEntry::Fixed(_) => Ok(()),
            SlotEntry::Learn(dist) => dist.validate(),
        })
    }

    /// Checks that `values` is a vector this space could have produced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VectorLength`] for a wrong length and
    /// [`Error::OutOfDistribution`] for the first slot whose value does not
    /// match its pinned scalar or its descriptor.
    #[allow(clippy::float_cmp)]
    pub fn check_vector(&self, values: &[f64]) -> Result<()> {
        if values.len() != SLOT_COUNT {
            return Err(Error::VectorLength {
                expected: SLOT_COUNT,
                got: values.len(),
            });
        }
        for ((slot, entry), &value) in self.iter().zip(values) {
            let ok = match entry {
                SlotEntry::Fixed(fixed) => value == *fixed || (value.is_nan() && fixed.is_nan()),
                SlotEntry::Learn(dist) => dist.contains(value),
            };
            if !ok {
                return Err(Error::OutOfDistribution { slot, value });
            }
        }
        Ok(())
    }

    /// Draws one concrete vector, copying pinned slots verbatim.
    ///
    /// # Errors
    ///
    /// Returns a [`validate`](Self::validate) error if a descriptor cannot be
    /// sampled from or a pinned value is not finite.
    pub fn draw<S: Sampler + ?Sized>(&self, sampler: &S) -> Result<Vec<f64>> {
        self.validate()?;
        let values: Vec<f64> = self
            .iter()
            .map(|(slot, entry)| match entry {
                SlotEntry::Fixed(v) => *v,
                SlotEntry::Learn(dist) => sampler.sample(slot, dist),
            })
            .collect();
        trace_debug!(n_learnable = self.n_learnable(), "vector drawn");
        Ok(values)
    }

    /// Draws one vector and decodes it.
    ///
    /// # Errors
    ///
    /// Returns any error from [`draw`](Self::draw) or [`decode`].
    pub fn draw_design<S: Sampler + ?Sized>(&self, sampler: &S) -> Result<RocketDesign> {
        let values = self.draw(sampler)?;
        decode(&values)
    }
}

impl<'a> IntoIterator for &'a SampleSpace {
    type Item = &'a SlotEntry;
    type IntoIter = core::slice::Iter<'a, SlotEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
