//! Game balance tuning
//!
//! One record for the player's projectile bank and one per enemy archetype.
//! Loaded once at session start; a partial JSON document only overrides the
//! fields it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BLAST_FRAMES;
use crate::error::TuningError;
use crate::sim::{Archetype, Range};

/// Player projectile bank tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotTuning {
    /// Upward travel per frame (pixels)
    pub speed: f32,
    /// Frames to regenerate one shot
    pub regen_period: u32,
    /// Shots held when full
    pub capacity: u32,
}

impl Default for ShotTuning {
    fn default() -> Self {
        Self {
            speed: 10.0,
            regen_period: 60,
            capacity: 6,
        }
    }
}

/// Tuning for one enemy archetype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Fall speed per frame (pixels)
    pub speed_y: Range<f32>,
    /// Upper bound on |vx| / vy; 0 falls straight down
    pub max_slope: f32,
    /// Frames between spawns
    pub spawn_interval: Range<u32>,
    /// Frames a destroyed enemy shows its blast before removal
    pub blast_frames: u32,
}

impl EnemyTuning {
    /// Drifting rocks
    pub fn rock() -> Self {
        Self {
            speed_y: Range::new(1.0, 2.0),
            max_slope: 1.0,
            spawn_interval: Range::new(10, 20),
            blast_frames: DEFAULT_BLAST_FRAMES,
        }
    }

    /// Fast rockets falling straight down
    pub fn rocket() -> Self {
        Self {
            speed_y: Range::new(3.0, 6.0),
            max_slope: 0.0,
            spawn_interval: Range::new(20, 40),
            blast_frames: DEFAULT_BLAST_FRAMES,
        }
    }

    fn validate(&self, archetype: Archetype) -> Result<(), TuningError> {
        let (speed_field, slope_field, interval_field) = match archetype {
            Archetype::Rock => ("rock.speed_y", "rock.max_slope", "rock.spawn_interval"),
            Archetype::Rocket => ("rocket.speed_y", "rocket.max_slope", "rocket.spawn_interval"),
        };

        finite(speed_field, self.speed_y.min)?;
        finite(speed_field, self.speed_y.max)?;
        finite(slope_field, self.max_slope)?;
        if !self.speed_y.is_ordered() {
            return Err(TuningError::InvertedRange {
                field: speed_field,
                min: self.speed_y.min as f64,
                max: self.speed_y.max as f64,
            });
        }
        // NaN fails this too
        if !(self.speed_y.min > 0.0) {
            return Err(TuningError::NonPositive {
                field: speed_field,
                value: self.speed_y.min,
            });
        }
        if !(self.max_slope >= 0.0) {
            return Err(TuningError::NegativeSlope {
                field: slope_field,
                value: self.max_slope,
            });
        }
        if !self.spawn_interval.is_ordered() {
            return Err(TuningError::InvertedRange {
                field: interval_field,
                min: self.spawn_interval.min as f64,
                max: self.spawn_interval.max as f64,
            });
        }
        if self.spawn_interval.min == 0 {
            return Err(TuningError::ZeroInterval {
                field: interval_field,
            });
        }
        Ok(())
    }
}

/// Sampling a range with an infinite bound panics, so reject them up front
fn finite(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::NonFinite { field, value })
    }
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self::rock()
    }
}

/// Complete tuning table for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_shots: ShotTuning,
    pub rock: EnemyTuning,
    pub rocket: EnemyTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_shots: ShotTuning::default(),
            rock: EnemyTuning::rock(),
            rocket: EnemyTuning::rocket(),
        }
    }
}

impl Tuning {
    /// Per-archetype records in wave update order
    pub fn waves(&self) -> [(Archetype, &EnemyTuning); 2] {
        [
            (Archetype::Rock, &self.rock),
            (Archetype::Rocket, &self.rocket),
        ]
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let shots = &self.player_shots;
        if shots.capacity == 0 {
            return Err(TuningError::ZeroCapacity);
        }
        if shots.regen_period == 0 {
            return Err(TuningError::ZeroRegenPeriod);
        }
        finite("player_shots.speed", shots.speed)?;
        if !(shots.speed > 0.0) {
            return Err(TuningError::NonPositive {
                field: "player_shots.speed",
                value: shots.speed,
            });
        }
        for (archetype, tuning) in self.waves() {
            tuning.validate(archetype)?;
        }
        Ok(())
    }

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read, parse and validate a JSON tuning file
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.player_shots.capacity, 6);
        assert_eq!(tuning.player_shots.regen_period, 60);
        assert_eq!(tuning.rocket.max_slope, 0.0);
        assert_eq!(tuning.rock.spawn_interval, Range::new(10, 20));
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let json = r#"{ "player_shots": { "capacity": 3 }, "rocket": { "max_slope": 0.5 } }"#;
        let tuning = Tuning::from_json(json).unwrap();
        assert_eq!(tuning.player_shots.capacity, 3);
        assert_eq!(tuning.player_shots.regen_period, 60);
        assert_eq!(tuning.rocket.max_slope, 0.5);
        assert_eq!(tuning.rocket.speed_y, Range::new(3.0, 6.0));
        assert_eq!(tuning.rock, EnemyTuning::rock());
    }

    #[test]
    fn test_json_roundtrip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let mut tuning = Tuning::default();
        tuning.rock.speed_y = Range::new(3.0, 1.0);
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InvertedRange {
                field: "rock.speed_y",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_capacity_and_period() {
        let mut tuning = Tuning::default();
        tuning.player_shots.capacity = 0;
        assert!(matches!(tuning.validate(), Err(TuningError::ZeroCapacity)));

        let mut tuning = Tuning::default();
        tuning.player_shots.regen_period = 0;
        assert!(matches!(tuning.validate(), Err(TuningError::ZeroRegenPeriod)));
    }

    #[test]
    fn test_rejects_bad_enemy_values() {
        let mut tuning = Tuning::default();
        tuning.rocket.max_slope = -1.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NegativeSlope { field: "rocket.max_slope", .. })
        ));

        let mut tuning = Tuning::default();
        tuning.rocket.spawn_interval = Range::new(0, 5);
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::ZeroInterval { field: "rocket.spawn_interval" })
        ));

        let mut tuning = Tuning::default();
        tuning.rock.speed_y = Range::new(0.0, 1.0);
        assert!(matches!(tuning.validate(), Err(TuningError::NonPositive { .. })));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        // Overflows f32 and parses as infinity
        let err = Tuning::from_json(r#"{"rock":{"speed_y":{"min":1.0,"max":1e39}}}"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::NonFinite {
                field: "rock.speed_y",
                ..
            }
        ));

        let mut tuning = Tuning::default();
        tuning.rocket.max_slope = f32::INFINITY;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonFinite { field: "rocket.max_slope", .. })
        ));

        let mut tuning = Tuning::default();
        tuning.player_shots.speed = f32::INFINITY;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonFinite { field: "player_shots.speed", .. })
        ));

        let mut tuning = Tuning::default();
        tuning.rock.speed_y = Range::new(f32::NAN, 2.0);
        assert!(matches!(tuning.validate(), Err(TuningError::NonFinite { .. })));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse tuning"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load(Path::new("/definitely/not/here/tuning.json")).unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
