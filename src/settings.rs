//! Player preferences
//!
//! Kept apart from gameplay tuning: these never change how the simulation
//! behaves, only how raw input reaches it.

use serde::{Deserialize, Serialize};

use crate::sim::Direction;

/// Keyboard layout for the four hops and restart. Escape always releases
/// the pointer and is not rebindable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
    pub restart: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: 'w',
            down: 's',
            left: 'a',
            right: 'd',
            restart: 'r',
        }
    }
}

impl KeyBindings {
    /// Direction bound to a key (case-insensitive)
    pub fn direction_for(&self, key: char) -> Option<Direction> {
        let key = key.to_ascii_lowercase();
        Direction::ALL
            .into_iter()
            .find(|&dir| self.key_for(dir).to_ascii_lowercase() == key)
    }

    pub fn key_for(&self, dir: Direction) -> char {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_restart(&self, key: char) -> bool {
        key.eq_ignore_ascii_case(&self.restart)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bindings: KeyBindings,
    /// Mouse-look multiplier (1.0 = default)
    pub camera_sensitivity: f32,
    /// Vertical field of view of the scene camera (radians)
    pub camera_fovy: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            camera_sensitivity: 1.0,
            camera_fovy: 60.0_f32.to_radians(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse stored settings, falling back to defaults on any problem
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_are_wasd() {
        let b = KeyBindings::default();
        assert_eq!(b.direction_for('w'), Some(Direction::Up));
        assert_eq!(b.direction_for('A'), Some(Direction::Left));
        assert_eq!(b.direction_for('s'), Some(Direction::Down));
        assert_eq!(b.direction_for('d'), Some(Direction::Right));
        assert_eq!(b.direction_for('x'), None);
        assert!(b.is_restart('R'));
    }

    #[test]
    fn test_json_round_trip_and_partial_documents() {
        let mut settings = Settings::default();
        settings.bindings.up = 'i';
        settings.camera_sensitivity = 2.5;
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);

        let partial = Settings::from_json(r#"{ "bindings": { "restart": "q" } }"#).unwrap();
        assert_eq!(partial.bindings.restart, 'q');
        assert_eq!(partial.bindings.up, 'w');
        assert_eq!(partial.camera_sensitivity, 1.0);
    }

    #[test]
    fn test_load_or_default_tolerates_garbage() {
        assert_eq!(Settings::load_or_default(Some("][")), Settings::default());
        assert_eq!(Settings::load_or_default(None), Settings::default());
    }
}
