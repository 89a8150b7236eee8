//! Data-driven gameplay constants
//!
//! Everything the simulation treats as a constant can be overridden from a
//! JSON document. Missing fields keep their defaults from [`crate::consts`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Pillars per grid side
    pub grid_width: usize,
    /// World distance between pillar centers
    pub tile_distance: f32,

    // === Pillar keyframes ===
    pub drop_time: f32,
    pub settle_time: f32,
    pub rise_time: f32,
    pub anim_time: f32,
    pub min_z: f32,
    pub trigger_interval: f32,

    // === Cube ===
    pub move_time: f32,
    pub cube_height_bias: f32,
    pub death_z: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            grid_width: PILLAR_WIDTH,
            tile_distance: PILLAR_DISTANCE,

            drop_time: PILLAR_DROP_TIME,
            settle_time: PILLAR_SETTLE_TIME,
            rise_time: PILLAR_RISE_TIME,
            anim_time: PILLAR_ANIM_TIME,
            min_z: PILLAR_MIN_Z,
            trigger_interval: PILLAR_TRIGGER_INTERVAL,

            move_time: CUBE_MOVE_TIME,
            cube_height_bias: CUBE_HEIGHT_BIAS,
            death_z: DEATH_Z,
        }
    }
}

/// Why a tuning document was rejected
#[derive(Debug)]
pub enum TuningError {
    /// Not valid JSON, or a field had the wrong type
    Parse(serde_json::Error),
    /// Grid must have at least one pillar
    EmptyGrid,
    /// A length or duration that must be positive was not
    NonPositive { field: &'static str, value: f32 },
    /// Keyframes must satisfy 0 < drop < settle < rise < total
    KeyframeOrder,
    /// Dropped pillars must end up below their rest height
    MinZNotBelowRest(f32),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning json: {}", e),
            TuningError::EmptyGrid => write!(f, "grid_width must be at least 1"),
            TuningError::NonPositive { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            TuningError::KeyframeOrder => write!(
                f,
                "pillar keyframes must satisfy 0 < drop_time < settle_time < rise_time < anim_time"
            ),
            TuningError::MinZNotBelowRest(z) => {
                write!(f, "min_z must be below 0, got {}", z)
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse a JSON tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.grid_width == 0 {
            return Err(TuningError::EmptyGrid);
        }

        // A zero trigger interval would spin the drain loop forever
        let positive = [
            ("tile_distance", self.tile_distance),
            ("trigger_interval", self.trigger_interval),
            ("move_time", self.move_time),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        let ordered = 0.0 < self.drop_time
            && self.drop_time < self.settle_time
            && self.settle_time < self.rise_time
            && self.rise_time < self.anim_time;
        if !ordered {
            return Err(TuningError::KeyframeOrder);
        }

        if !(self.min_z < 0.0) {
            return Err(TuningError::MinZNotBelowRest(self.min_z));
        }

        Ok(())
    }

    /// Number of pillars in the grid
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert_eq!(Tuning::default().cell_count(), 81);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "grid_width": 5, "move_time": 0.25 }"#).unwrap();
        assert_eq!(tuning.grid_width, 5);
        assert_eq!(tuning.move_time, 0.25);
        assert_eq!(tuning.anim_time, PILLAR_ANIM_TIME);
        assert_eq!(tuning.death_z, DEATH_Z);
    }

    #[test]
    fn test_rejects_unordered_keyframes() {
        let err = Tuning::from_json(r#"{ "settle_time": 6.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::KeyframeOrder));
    }

    #[test]
    fn test_rejects_zero_trigger_interval() {
        let err = Tuning::from_json(r#"{ "trigger_interval": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::NonPositive {
                field: "trigger_interval",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_empty_grid_and_bad_min_z() {
        let mut tuning = Tuning::default();
        tuning.grid_width = 0;
        assert!(matches!(tuning.validate(), Err(TuningError::EmptyGrid)));

        let mut tuning = Tuning::default();
        tuning.min_z = 2.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::MinZNotBelowRest(_))
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("invalid tuning json"));
    }
}
