//! Tuning load and validation errors.
//!
//! The simulation itself has no failure paths; everything that can go wrong
//! is caught once, when a [`Tuning`](crate::Tuning) is loaded at session start.

use std::fmt;

/// Why a tuning table was rejected
#[derive(Debug)]
pub enum TuningError {
    /// A range whose lower bound exceeds its upper bound.
    InvertedRange {
        /// Dotted path of the offending field, e.g. `rock.speed_y`.
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// The projectile bank must hold at least one shot.
    ZeroCapacity,

    /// Regeneration must take at least one frame.
    ZeroRegenPeriod,

    /// A speed that must be strictly positive.
    NonPositive { field: &'static str, value: f32 },

    /// Infinite or NaN, e.g. a JSON number too large for `f32`.
    NonFinite { field: &'static str, value: f32 },

    /// Slope limits are magnitudes.
    NegativeSlope { field: &'static str, value: f32 },

    /// A spawn countdown has to last at least one frame.
    ZeroInterval { field: &'static str },

    /// The tuning file could not be read.
    Io(std::io::Error),

    /// The tuning document is not valid JSON for a [`Tuning`](crate::Tuning).
    Parse(serde_json::Error),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::InvertedRange { field, min, max } => {
                write!(f, "{}: range min {} is greater than max {}", field, min, max)
            }
            TuningError::ZeroCapacity => write!(f, "player_shots.capacity must be at least 1"),
            TuningError::ZeroRegenPeriod => {
                write!(f, "player_shots.regen_period must be at least 1 frame")
            }
            TuningError::NonPositive { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            TuningError::NonFinite { field, value } => {
                write!(f, "{} must be a finite number, got {}", field, value)
            }
            TuningError::NegativeSlope { field, value } => {
                write!(f, "{} must not be negative, got {}", field, value)
            }
            TuningError::ZeroInterval { field } => {
                write!(f, "{}: spawn interval must be at least 1 frame", field)
            }
            TuningError::Io(e) => write!(f, "failed to read tuning file: {}", e),
            TuningError::Parse(e) => write!(f, "failed to parse tuning: {}", e),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}
