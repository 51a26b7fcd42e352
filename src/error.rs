use crate::slot::Slot;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a proportion handed to [`scale`](crate::scale::scale) lies outside `[0, 1]`.
    #[error("proportion out of range: {value} must be in [0, 1]")]
    ProportionOutOfRange {
        /// The offending proportion.
        value: f64,
    },

    /// Returned when step size is not positive.
    #[error("invalid step: step must be positive")]
    InvalidStep,

    /// Returned when categorical choices are empty.
    #[error("categorical choices cannot be empty")]
    EmptyChoices,

    /// Returned when a decoder input vector has the wrong number of slots.
    #[error("vector length mismatch: expected {expected} values, got {got}")]
    VectorLength {
        /// The expected number of values.
        expected: usize,
        /// The actual number of values provided.
        got: usize,
    },

    /// Returned when the body radius makes the tank-and-engine length undefined.
    #[error("degenerate radius: {0} does not yield a finite tank-and-engine length")]
    DegenerateRadius(f64),

    /// Returned when a concrete value does not belong to its slot's distribution.
    #[error("value {value} is outside the distribution of '{slot}'")]
    OutOfDistribution {
        /// The slot that received the value.
        slot: Slot,
        /// The rejected value.
        value: f64,
    },

    /// Returned when a slot holds or decodes to NaN or an infinity.
    #[error("value {value} of '{slot}' is not finite")]
    NonFinite {
        /// The slot holding the value.
        slot: Slot,
        /// The offending value.
        value: f64,
    },

    /// Returned when a proportional slot cannot be resolved to a physical quantity.
    #[error("failed to resolve '{slot}': {source}")]
    SlotResolution {
        /// The slot being resolved.
        slot: Slot,
        /// The underlying precondition failure.
        #[source]
        source: Box<Error>,
    },

    /// Returned when a slot or preset name is not recognized.
    #[error("unknown name: '{0}'")]
    UnknownName(String),

    /// Returned when a configuration or space cannot be (de)serialized.
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = core::result::Result<T, Error>;
