//! The vector decoder: raw sampled vector to physical design.
//!
//! Proportional slots are resolved in dependency order. The body length
//! depends on the radius through the tank-and-engine length, the fin root
//! chord depends on body and nose length, and the tip chord, sweep and base
//! separation depend on the root chord.
//!
//! # Example
//!
//! ```
//! use rocket_space::decode::decode;
//!
//! let design = decode(&[
//!     65.0, 15.0, 10.0, 0.5, 20.0, 2.0, 0.0, 1.0, 1.0, 0.5, 3.0, 0.5, 0.5, 0.5, 0.5, 4.0,
//!     0.5, 1.0, 0.5, 1.5, 1.5, 8.0,
//! ])
//! .unwrap();
//!
//! assert_eq!(design.fin_thickness, 0.5);
//! assert_eq!(design.ch4_tube_radius, 1.0);
//! assert!(design.fin_te_len.is_some());
//! ```

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scale::scale;
use crate::slot::{SLOT_COUNT, Slot};

const INCHES_PER_METER: f64 = 39.3701;
const METERS_PER_INCH: f64 = 0.0254;
/// Empirical tank volume coefficient, in cubic meters.
const TANK_COEFFICIENT: f64 = 0.006_900_77;
/// Fixed engine length added to the tanks, in inches.
const ENGINE_LEN: f64 = 10.0;
/// Shortest fin root chord and span, in inches.
const MIN_FIN_LEN: f64 = 2.0;
const EIGHTHS_PER_INCH: f64 = 8.0;

const LE_RAD_SHAPES: [f64; 6] = [1.0, 3.0, 4.0, 5.0, 6.0, 7.0];
const LE_LEN_SHAPES: [f64; 3] = [1.0, 3.0, 6.0];
const TE_LEN_SHAPES: [f64; 1] = [1.0];

/// A decoded rocket design in engineering units.
///
/// Lengths are in inches, mass in pounds, thrust margin in percent. The three
/// fin-edge fields are `None` when the fin shape does not use them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RocketDesign {
    pub dry_mass: f64,
    pub thrust_margin: f64,
    pub radius: f64,
    #[cfg_attr(feature = "serde", serde(rename = "dry_CoM"))]
    pub dry_com: f64,
    pub nose_len: f64,
    pub body_len: f64,
    pub boat_len: f64,
    pub nose_shape: f64,
    pub nose_tip_di: f64,
    pub nose_power: f64,
    pub fin_count: f64,
    pub fin_root_chord: f64,
    pub fin_span: f64,
    pub fin_tip_chord: f64,
    pub fin_sweep: f64,
    pub fin_thickness: f64,
    pub fin_base_sep: f64,
    pub fin_shape: f64,
    pub fin_le_rad: Option<f64>,
    pub fin_le_len: Option<f64>,
    pub fin_te_len: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "CH4_tube_radius"))]
    pub ch4_tube_radius: f64,
}

impl RocketDesign {
    /// The value decoded for `slot`, `None` for an unused fin-edge field.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<f64> {
        let value = match slot {
            Slot::DryMass => self.dry_mass,
            Slot::ThrustMargin => self.thrust_margin,
            Slot::Radius => self.radius,
            Slot::DryCom => self.dry_com,
            Slot::NoseLen => self.nose_len,
            Slot::BodyLen => self.body_len,
            Slot::BoatLen => self.boat_len,
            Slot::NoseShape => self.nose_shape,
            Slot::NoseTipDi => self.nose_tip_di,
            Slot::NosePower => self.nose_power,
            Slot::FinCount => self.fin_count,
            Slot::FinRootChord => self.fin_root_chord,
            Slot::FinSpan => self.fin_span,
            Slot::FinTipChord => self.fin_tip_chord,
            Slot::FinSweep => self.fin_sweep,
            Slot::FinThickness => self.fin_thickness,
            Slot::FinBaseSep => self.fin_base_sep,
            Slot::FinShape => self.fin_shape,
            Slot::FinLeRad => return self.fin_le_rad,
            Slot::FinLeLen => return self.fin_le_len,
            Slot::FinTeLen => return self.fin_te_len,
            Slot::Ch4TubeRadius => self.ch4_tube_radius,
        };
        Some(value)
    }

    /// Keyword arguments for the scoring function, keyed by output name.
    ///
    /// Every slot has a key; unused fin-edge fields map to `None`.
    #[must_use]
    pub fn to_kwargs(&self) -> BTreeMap<&'static str, Option<f64>> {
        Slot::ALL
            .into_iter()
            .map(|slot| (slot.output_key(), self.get(slot)))
            .collect()
    }
}

/// Combined tank and engine length, in inches, for a body `radius` in inches.
///
/// The tank volume is held constant, so the length grows with the inverse
/// square of the radius.
///
/// # Errors
///
/// Returns [`Error::DegenerateRadius`] if the result is not finite (zero or
/// NaN radius).
pub fn tank_and_engine_len(radius: f64) -> Result<f64> {
    let radius_m = radius * METERS_PER_INCH;
    let len = TANK_COEFFICIENT * radius_m.powi(-2) * INCHES_PER_METER + ENGINE_LEN;
    if !len.is_finite() {
        return Err(Error::DegenerateRadius(radius));
    }
    Ok(len)
}

/// Whether fin shape `shape` has a leading-edge radius.
#[must_use]
pub fn uses_le_rad(shape: f64) -> bool {
    LE_RAD_SHAPES.contains(&shape)
}

/// Whether fin shape `shape` has a leading-edge airfoil.
#[must_use]
pub fn uses_le_len(shape: f64) -> bool {
    LE_LEN_SHAPES.contains(&shape)
}

/// Whether fin shape `shape` has a trailing-edge airfoil.
#[must_use]
pub fn uses_te_len(shape: f64) -> bool {
    TE_LEN_SHAPES.contains(&shape)
}

fn scale_slot(slot: Slot, value: f64, low: f64, high: f64) -> Result<f64> {
    scale(value, low, high).map_err(|source| Error::SlotResolution {
        slot,
        source: Box::new(source),
    })
}

/// Decodes a sampled vector into a [`RocketDesign`].
///
/// `args` must hold one value per slot in [`Slot::ALL`] order.
///
/// # Errors
///
/// Returns [`Error::VectorLength`] for a wrong length,
/// [`Error::DegenerateRadius`] for a zero radius and
/// [`Error::SlotResolution`] when a proportion is outside `[0, 1]` or its
/// computed bounds are inverted or infinite, and [`Error::NonFinite`] when
/// any other output would be NaN or infinite. No partial design is returned.
pub fn decode(args: &[f64]) -> Result<RocketDesign> {
    let args: &[f64; SLOT_COUNT] = args.try_into().map_err(|_| Error::VectorLength {
        expected: SLOT_COUNT,
        got: args.len(),
    })?;
    let at = |slot: Slot| args[slot.index()];

    let radius = at(Slot::Radius);
    let nose_len = at(Slot::NoseLen);
    let tank_len = tank_and_engine_len(radius)?;
    let body_len = at(Slot::BodyLen) * tank_len;
    let half_len = (body_len + nose_len) / 2.0;

    let fin_root_chord = scale_slot(
        Slot::FinRootChord,
        at(Slot::FinRootChord),
        MIN_FIN_LEN,
        half_len,
    )?;
    let dry_com = scale_slot(
        Slot::DryCom,
        at(Slot::DryCom),
        nose_len + body_len - tank_len / 2.0,
        nose_len + body_len - tank_len / 3.0,
    )?;
    let fin_span = scale_slot(Slot::FinSpan, at(Slot::FinSpan), MIN_FIN_LEN, half_len)?;
    let fin_tip_chord =
        scale_slot(Slot::FinTipChord, at(Slot::FinTipChord), 0.0, fin_root_chord)?;
    let fin_sweep = scale_slot(Slot::FinSweep, at(Slot::FinSweep), 0.0, fin_root_chord)?;
    let fin_base_sep = scale_slot(
        Slot::FinBaseSep,
        at(Slot::FinBaseSep),
        fin_root_chord,
        half_len,
    )?;

    let fin_shape = at(Slot::FinShape);
    let design = RocketDesign {
        dry_mass: at(Slot::DryMass),
        thrust_margin: at(Slot::ThrustMargin),
        radius,
        dry_com,
        nose_len,
        body_len,
        boat_len: at(Slot::BoatLen),
        nose_shape: at(Slot::NoseShape),
        nose_tip_di: at(Slot::NoseTipDi),
        nose_power: at(Slot::NosePower),
        fin_count: at(Slot::FinCount),
        fin_root_chord,
        fin_span,
        fin_tip_chord,
        fin_sweep,
        fin_thickness: at(Slot::FinThickness) / EIGHTHS_PER_INCH,
        fin_base_sep,
        fin_shape,
        fin_le_rad: uses_le_rad(fin_shape).then_some(at(Slot::FinLeRad)),
        fin_le_len: uses_le_len(fin_shape).then_some(at(Slot::FinLeLen)),
        fin_te_len: uses_te_len(fin_shape).then_some(at(Slot::FinTeLen)),
        ch4_tube_radius: at(Slot::Ch4TubeRadius) / EIGHTHS_PER_INCH,
    };
    if let Some((slot, value)) = Slot::ALL
        .into_iter()
        .filter_map(|slot| design.get(slot).map(|value| (slot, value)))
        .find(|(_, value)| !value.is_finite())
    {
        return Err(Error::NonFinite { slot, value });
    }
    trace_debug!(
        radius,
        tank_len,
        body_len,
        fin_root_chord,
        fin_shape,
        "design decoded"
    );
    Ok(design)
}
