//! Session state
//!
//! Everything one play session mutates lives here. Restart reinitializes the
//! session in place; the pillar grid is never reallocated.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::Grid;
use super::pillar::PillarField;
use super::player::Player;
use crate::camera::CameraRig;
use crate::input::Buttons;
use crate::tuning::{Tuning, TuningError};

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub grid: Grid,
    pub pillars: PillarField,
    pub player: Player,
    pub buttons: Buttons,
    pub camera: CameraRig,
    /// Seconds alive since the last (re)start
    pub time_survived: f32,
}

impl GameState {
    /// Session with default tuning and a seeded drop stream
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), Pcg32::seed_from_u64(seed))
    }

    /// Session with custom tuning
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }

    /// Session with custom tuning and an injected random source
    pub fn with_rng(tuning: Tuning, rng: Pcg32) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(tuning, rng))
    }

    fn build(tuning: Tuning, rng: Pcg32) -> Self {
        let grid = Grid::from_tuning(&tuning);
        let pillars = PillarField::from_valid(&tuning, rng);
        let player = Player::new(&grid, &tuning);
        log::debug!(
            "session created: {}x{} grid, drop every {}s",
            grid.width,
            grid.width,
            tuning.trigger_interval
        );
        Self {
            tuning,
            grid,
            pillars,
            player,
            buttons: Buttons::default(),
            camera: CameraRig::default(),
            time_survived: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.player.is_alive()
    }

    /// Start over: cube on the center tile, every pillar at rest.
    /// The camera keeps its orientation.
    pub fn reset(&mut self) {
        self.player.reset(&self.grid);
        self.pillars.reset();
        self.buttons.reset();
        self.time_survived = 0.0;
        log::info!("session restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_at_rest() {
        let state = GameState::new(12345);
        assert!(state.is_alive());
        assert_eq!(state.time_survived, 0.0);
        assert_eq!(state.pillars.len(), 81);
        assert_eq!(state.pillars.active_count(), 0);
        assert_eq!(state.player.tile_old(), state.grid.center());
    }

    #[test]
    fn test_with_tuning_rejects_bad_config() {
        let tuning = Tuning {
            move_time: 0.0,
            ..Tuning::default()
        };
        assert!(GameState::with_tuning(tuning, 1).is_err());

        let small = Tuning {
            grid_width: 5,
            ..Tuning::default()
        };
        let state = GameState::with_tuning(small, 1).unwrap();
        assert_eq!(state.pillars.len(), 25);
        assert_eq!(state.player.tile_old(), glam::IVec2::new(2, 2));
    }
}
