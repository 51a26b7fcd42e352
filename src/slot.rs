//! The canonical slot order shared by the space builder and the decoder.
//!
//! Every sampled design is a flat vector of [`SLOT_COUNT`] numbers. The
//! position of each number is fixed by [`Slot`]: its discriminant *is* its
//! vector index, and [`Slot::ALL`] lists the slots in that order.
//!
//! ```
//! use rocket_space::slot::{SLOT_COUNT, Slot};
//!
//! assert_eq!(Slot::ALL.len(), SLOT_COUNT);
//! assert_eq!(Slot::Radius.index(), 2);
//! assert_eq!(Slot::DryCom.output_key(), "dry_CoM");
//! ```

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{
    CategoricalDistribution, Distribution, IntOffsetDistribution, QuantizedDistribution,
    UniformDistribution,
};
use crate::error::{Error, Result};

/// Number of positions in a parameter vector.
pub const SLOT_COUNT: usize = 22;

/// One named position in the parameter vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Slot {
    /// Weight of the rocket without fuel and oxidizer.
    DryMass = 0,
    /// Inefficiency of the engine.
    ThrustMargin = 1,
    /// Radius of the main body.
    Radius = 2,
    /// Dry center of mass, as a proportion of the tank region.
    DryCom = 3,
    /// Length of the nosecone.
    NoseLen = 4,
    /// Body length as a multiple of the tank-and-engine length.
    BodyLen = 5,
    /// Length of the engine shroud.
    BoatLen = 6,
    /// Nose shape selector.
    NoseShape = 7,
    /// Diameter of the nosecone tip.
    NoseTipDi = 8,
    /// Power-law exponent of the nosecone.
    NosePower = 9,
    /// Number of fins.
    FinCount = 10,
    /// Fin root chord proportion.
    FinRootChord = 11,
    /// Fin span proportion.
    FinSpan = 12,
    /// Fin tip chord proportion.
    FinTipChord = 13,
    /// Fin sweep proportion.
    FinSweep = 14,
    /// Fin thickness.
    FinThickness = 15,
    /// Fin base separation proportion.
    FinBaseSep = 16,
    /// Fin shape selector.
    FinShape = 17,
    /// Fin leading-edge radius.
    FinLeRad = 18,
    /// Fin leading-edge airfoil length.
    FinLeLen = 19,
    /// Fin trailing-edge airfoil length.
    FinTeLen = 20,
    /// Radius of the methane feed tube.
    Ch4TubeRadius = 21,
}

/// How a slot's raw value relates to the decoded physical quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotRole {
    /// Always a scalar, never learned.
    Fixed,
    /// Learned directly in final (or simply converted) units.
    Absolute,
    /// Learned as a fraction of a range that depends on other slots.
    Proportion,
}

/// Unit of a slot's raw value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    /// Pounds.
    Pounds,
    /// Percent.
    Percent,
    /// Inches.
    Inches,
    /// Eighths of an inch; decoded into inches.
    EighthInches,
    /// Dimensionless fraction or multiplier.
    Fraction,
    /// Selector index into a family of shapes.
    Index,
    /// Plain count.
    Count,
}

impl Slot {
    /// All slots in canonical vector order.
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::DryMass,
        Slot::ThrustMargin,
        Slot::Radius,
        Slot::DryCom,
        Slot::NoseLen,
        Slot::BodyLen,
        Slot::BoatLen,
        Slot::NoseShape,
        Slot::NoseTipDi,
        Slot::NosePower,
        Slot::FinCount,
        Slot::FinRootChord,
        Slot::FinSpan,
        Slot::FinTipChord,
        Slot::FinSweep,
        Slot::FinThickness,
        Slot::FinBaseSep,
        Slot::FinShape,
        Slot::FinLeRad,
        Slot::FinLeLen,
        Slot::FinTeLen,
        Slot::Ch4TubeRadius,
    ];

    /// Position of this slot in a parameter vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the slot at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Name used when configuring a space.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Slot::DryMass => "dry_mass",
            Slot::ThrustMargin => "thrust_margin",
            Slot::Radius => "radius",
            Slot::DryCom => "dry_com",
            Slot::NoseLen => "nose_len",
            Slot::BodyLen => "body_len",
            Slot::BoatLen => "boat_len",
            Slot::NoseShape => "nose_shape",
            Slot::NoseTipDi => "nose_tip_di",
            Slot::NosePower => "nose_power",
            Slot::FinCount => "fin_count",
            Slot::FinRootChord => "fin_root_chord",
            Slot::FinSpan => "fin_span",
            Slot::FinTipChord => "fin_tip_chord",
            Slot::FinSweep => "fin_sweep",
            Slot::FinThickness => "fin_thickness",
            Slot::FinBaseSep => "fin_base_sep",
            Slot::FinShape => "fin_shape",
            Slot::FinLeRad => "fin_le_rad",
            Slot::FinLeLen => "fin_le_len",
            Slot::FinTeLen => "fin_te_len",
            Slot::Ch4TubeRadius => "ch4_tube_radius",
        }
    }

    /// Key of this slot in a decoded design, as the scoring function names it.
    #[must_use]
    pub const fn output_key(self) -> &'static str {
        match self {
            Slot::DryCom => "dry_CoM",
            Slot::Ch4TubeRadius => "CH4_tube_radius",
            other => other.name(),
        }
    }

    /// Looks a slot up by its configuration name or its output key.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.name() == name || slot.output_key() == name)
    }

    #[must_use]
    pub const fn role(self) -> SlotRole {
        match self {
            Slot::DryMass | Slot::ThrustMargin => SlotRole::Fixed,
            Slot::DryCom
            | Slot::BodyLen
            | Slot::FinRootChord
            | Slot::FinSpan
            | Slot::FinTipChord
            | Slot::FinSweep
            | Slot::FinBaseSep => SlotRole::Proportion,
            _ => SlotRole::Absolute,
        }
    }

    #[must_use]
    pub const fn unit(self) -> Unit {
        match self {
            Slot::DryMass => Unit::Pounds,
            Slot::ThrustMargin => Unit::Percent,
            Slot::Radius
            | Slot::NoseLen
            | Slot::BoatLen
            | Slot::NoseTipDi
            | Slot::FinLeRad
            | Slot::FinLeLen
            | Slot::FinTeLen => Unit::Inches,
            Slot::FinThickness | Slot::Ch4TubeRadius => Unit::EighthInches,
            Slot::NoseShape | Slot::FinShape => Unit::Index,
            Slot::FinCount => Unit::Count,
            Slot::DryCom
            | Slot::BodyLen
            | Slot::NosePower
            | Slot::FinRootChord
            | Slot::FinSpan
            | Slot::FinTipChord
            | Slot::FinSweep
            | Slot::FinBaseSep => Unit::Fraction,
        }
    }

    /// Scalar emitted for a fixed slot when the caller does not pin one.
    #[must_use]
    pub const fn default_value(self) -> Option<f64> {
        match self {
            Slot::DryMass => Some(65.0),
            Slot::ThrustMargin => Some(15.0),
            _ => None,
        }
    }

    /// Distribution a learnable slot is drawn from when left unpinned.
    ///
    /// Returns `None` for the two fixed slots.
    #[must_use]
    pub fn default_distribution(self) -> Option<Distribution> {
        let uniform = |low, high| Distribution::Uniform(UniformDistribution { low, high });
        let dist = match self {
            Slot::DryMass | Slot::ThrustMargin => return None,
            Slot::Radius => uniform(2.0, 12.0),
            Slot::NoseLen => uniform(2.0, 30.0),
            Slot::BodyLen => uniform(1.5, 4.0),
            Slot::BoatLen => uniform(0.0, 10.0),
            Slot::NoseShape => Distribution::IntOffset(IntOffsetDistribution { n: 7, offset: 1 }),
            Slot::NoseTipDi => uniform(0.0, 2.0),
            Slot::NosePower => uniform(0.0, 0.99),
            Slot::FinCount => Distribution::Categorical(CategoricalDistribution {
                options: vec![3.0, 4.0],
            }),
            Slot::DryCom
            | Slot::FinRootChord
            | Slot::FinSpan
            | Slot::FinTipChord
            | Slot::FinSweep
            | Slot::FinBaseSep => uniform(0.0, 1.0),
            Slot::FinThickness => Distribution::Quantized(QuantizedDistribution {
                low: 1.0,
                high: 10.0,
                step: 1.0,
            }),
            Slot::FinShape => Distribution::IntOffset(IntOffsetDistribution { n: 9, offset: 1 }),
            Slot::FinLeRad => uniform(0.1, 1.0),
            Slot::FinLeLen | Slot::FinTeLen => uniform(0.1, 3.0),
            Slot::Ch4TubeRadius => Distribution::Quantized(QuantizedDistribution {
                low: 1.0,
                high: 16.0,
                step: 1.0,
            }),
        };
        Some(dist)
    }

    /// One-line description of what the slot controls.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Slot::DryMass => "weight of the rocket without fuel and oxidizer, in pounds",
            Slot::ThrustMargin => "inefficiency of the engine as a percentage",
            Slot::Radius => "radius of the main body, in inches",
            Slot::DryCom => {
                "distance from nose tip to the dry center of mass, as a proportion from \
                 nose_len + body_len - T/2 to nose_len + body_len - T/3"
            }
            Slot::NoseLen => "length of the nosecone, in inches",
            Slot::BodyLen => "body length as a multiple of the tank-and-engine length T",
            Slot::BoatLen => "length of the engine shroud, in inches",
            Slot::NoseShape => "which nose shape is used",
            Slot::NoseTipDi => "diameter of the nosecone tip, in inches",
            Slot::NosePower => "power law of the nosecone profile; only used if nose_shape = 4",
            Slot::FinCount => "number of fins on the rocket",
            Slot::FinRootChord => {
                "fin length in contact with the body, as a proportion from 2 inches to \
                 (body_len + nose_len) / 2"
            }
            Slot::FinSpan => {
                "how far the fin projects from the body, as a proportion from 2 inches to \
                 (body_len + nose_len) / 2"
            }
            Slot::FinTipChord => "outermost fin edge length, as a proportion of fin_root_chord",
            Slot::FinSweep => "rearward fin sweep, as a proportion of fin_root_chord",
            Slot::FinThickness => "fin thickness, in eighth-inches",
            Slot::FinBaseSep => {
                "fin placement from the bottom of the body, as a proportion from \
                 fin_root_chord to (body_len + nose_len) / 2"
            }
            Slot::FinShape => "which fin shape is used",
            Slot::FinLeRad => "leading-edge radius; only used for fin_shape 1, 3, 4, 5, 6 and 7",
            Slot::FinLeLen => "leading-edge airfoil length; only used for fin_shape 1, 3 and 6",
            Slot::FinTeLen => "trailing-edge airfoil length; only used for fin_shape 1",
            Slot::Ch4TubeRadius => {
                "radius of the fuel pipe through the oxidizer tank, in eighth-inches"
            }
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownName(s.to_string()))
    }
}
