//! Player traversal: the hopping cube
//!
//! The cube always sits between two tiles. `tile_old` is where the current
//! hop started and `tile_new` is where it lands; they are equal whenever no
//! hop is in flight. World height is read from the live pillar samples every
//! tick, so a pillar dropping under a stationary cube kills it too.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::grid::{Direction, Grid, Tile};
use super::pillar::PillarField;
use crate::consts::START_EPSILON;
use crate::tuning::Tuning;

/// Hop state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Motion {
    /// Standing on `tile_old`, accepting input
    #[default]
    Idle,
    /// Hop in progress, input ignored
    Moving { elapsed: f32 },
}

/// The player's cube
#[derive(Debug, Clone)]
pub struct Player {
    tile_old: Tile,
    tile_new: Tile,
    motion: Motion,
    alive: bool,
    position: Vec3,
    move_time: f32,
    height_bias: f32,
    death_z: f32,
}

impl Player {
    /// Cube standing on the center tile. `tuning` must already be validated.
    pub(crate) fn new(grid: &Grid, tuning: &Tuning) -> Self {
        let center = grid.center();
        Self {
            tile_old: center,
            tile_new: center,
            motion: Motion::Idle,
            alive: true,
            position: grid.world_xy(center).extend(tuning.cube_height_bias),
            move_time: tuning.move_time,
            height_bias: tuning.cube_height_bias,
            death_z: tuning.death_z,
        }
    }

    /// Tile the current hop started from
    pub fn tile_old(&self) -> Tile {
        self.tile_old
    }

    /// Tile the current hop lands on
    pub fn tile_new(&self) -> Tile {
        self.tile_new
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.motion, Motion::Moving { .. })
    }

    /// Seconds into the current hop, 0 when idle
    pub fn move_timer(&self) -> f32 {
        match self.motion {
            Motion::Idle => 0.0,
            Motion::Moving { elapsed } => elapsed,
        }
    }

    /// Interpolation factor between `tile_old` and `tile_new`
    pub fn move_fraction(&self) -> f32 {
        (self.move_timer() / self.move_time).clamp(0.0, 1.0)
    }

    /// Interpolated world position as of the last tick
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Begin a hop. Returns false (and changes nothing) while a hop is in
    /// flight or the cube is dead.
    ///
    /// A hop toward the grid edge is still accepted: the timer runs but
    /// `tile_new` stays put.
    pub fn handle_direction(&mut self, dir: Direction, grid: &Grid) -> bool {
        if !self.alive || self.is_moving() {
            return false;
        }
        self.tile_new = grid.step(self.tile_old, dir);
        self.motion = Motion::Moving {
            elapsed: START_EPSILON,
        };
        true
    }

    /// Advance the hop, recompute position, and apply the fall check
    pub fn tick(&mut self, elapsed: f32, grid: &Grid, field: &PillarField) {
        if !self.alive {
            return;
        }

        if let Motion::Moving { elapsed: t } = &mut self.motion {
            *t += elapsed;
            if *t > self.move_time {
                self.tile_old = self.tile_new;
                self.motion = Motion::Idle;
            }
        }

        let from = self.tile_position(self.tile_old, grid, field);
        let to = self.tile_position(self.tile_new, grid, field);
        self.position = from.lerp(to, self.move_fraction());

        if self.position.z < self.death_z {
            self.alive = false;
            log::info!(
                "cube fell at tile {} (z = {:.2})",
                self.tile_old,
                self.position.z
            );
        }
    }

    /// Back to the center tile, idle and alive
    pub fn reset(&mut self, grid: &Grid) {
        let center = grid.center();
        self.tile_old = center;
        self.tile_new = center;
        self.motion = Motion::Idle;
        self.alive = true;
        self.position = grid.world_xy(center).extend(self.height_bias);
    }

    /// Resting point on top of a tile's pillar right now
    fn tile_position(&self, tile: Tile, grid: &Grid, field: &PillarField) -> Vec3 {
        let height = field.sample(grid.index(tile)).height_offset;
        grid.world_xy(tile).extend(height + self.height_bias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use proptest::prelude::*;

    fn setup() -> (Grid, Tuning, PillarField, Player) {
        let tuning = Tuning {
            trigger_interval: 1.0e6,
            ..Tuning::default()
        };
        let grid = Grid::from_tuning(&tuning);
        let field = PillarField::seeded(&tuning, 3).unwrap();
        let player = Player::new(&grid, &tuning);
        (grid, tuning, field, player)
    }

    #[test]
    fn test_spawns_idle_on_center() {
        let (grid, _, _, player) = setup();
        assert_eq!(player.tile_old(), IVec2::new(4, 4));
        assert_eq!(player.tile_new(), player.tile_old());
        assert_eq!(player.move_timer(), 0.0);
        assert!(player.is_alive());
        assert_eq!(player.position(), grid.world_xy(grid.center()).extend(1.0));
    }

    #[test]
    fn test_hop_keeps_old_tile_until_done() {
        let (grid, _, field, mut player) = setup();
        assert!(player.handle_direction(Direction::Right, &grid));
        assert!(player.move_timer() > 0.0);
        assert_eq!(player.tile_old(), IVec2::new(4, 4));
        assert_eq!(player.tile_new(), IVec2::new(4, 5));

        player.tick(0.3, &grid, &field);
        assert_eq!(player.tile_old(), IVec2::new(4, 4));

        player.tick(0.3, &grid, &field);
        assert_eq!(player.tile_old(), IVec2::new(4, 5));
        assert_eq!(player.move_timer(), 0.0);
        assert_eq!(player.position(), Vec3::new(0.0, 3.0, 1.0));
    }

    #[test]
    fn test_press_while_moving_is_ignored() {
        let (grid, _, field, mut player) = setup();
        player.handle_direction(Direction::Down, &grid);
        player.tick(0.1, &grid, &field);
        let timer = player.move_timer();

        assert!(!player.handle_direction(Direction::Left, &grid));
        assert_eq!(player.tile_old(), IVec2::new(4, 4));
        assert_eq!(player.tile_new(), IVec2::new(5, 4));
        assert_eq!(player.move_timer(), timer);
    }

    #[test]
    fn test_edge_press_arms_timer_without_moving() {
        let (grid, _, field, mut player) = setup();
        // Walk to the top edge: column 4 -> 0
        for _ in 0..4 {
            assert!(player.handle_direction(Direction::Up, &grid));
            player.tick(0.6, &grid, &field);
        }
        assert_eq!(player.tile_old(), IVec2::new(0, 4));

        assert!(player.handle_direction(Direction::Up, &grid));
        assert!(player.move_timer() > 0.0);
        assert_eq!(player.tile_new(), player.tile_old());
    }

    #[test]
    fn test_half_way_interpolation() {
        let (grid, _, field, mut player) = setup();
        player.handle_direction(Direction::Right, &grid);
        player.tick(0.25, &grid, &field);

        assert!((player.move_fraction() - 0.5).abs() < 1e-3);
        let pos = player.position();
        assert!((pos.y - 1.5).abs() < 1e-2);
        assert!(pos.x.abs() < 1e-5);
        assert!((pos.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_pillar_dropping_under_idle_cube_kills_it() {
        let (grid, _, mut field, mut player) = setup();
        field.start(grid.index(player.tile_old()));

        let mut t = 0.0;
        while player.is_alive() && t < 10.0 {
            field.tick(0.1);
            player.tick(0.1, &grid, &field);
            t += 0.1;
        }

        assert!(!player.is_alive());
        // Dies shortly after the drop starts, well before the pillar settles
        assert!(t > 7.0 && t < 7.5);
        assert!(player.position().z < -4.0);
    }

    #[test]
    fn test_dead_cube_ignores_everything_until_reset() {
        let (grid, _, mut field, mut player) = setup();
        field.start(grid.index(player.tile_old()));
        field.tick(7.3);
        player.tick(0.0, &grid, &field);
        assert!(!player.is_alive());

        let frozen = player.position();
        assert!(!player.handle_direction(Direction::Up, &grid));
        field.reset();
        player.tick(0.1, &grid, &field);
        assert_eq!(player.position(), frozen);

        player.reset(&grid);
        assert!(player.is_alive());
        assert_eq!(player.move_timer(), 0.0);
        assert_eq!(player.tile_old(), grid.center());
        assert_eq!(player.tile_new(), grid.center());
    }

    #[test]
    fn test_hopping_onto_a_sunken_pillar_is_fatal() {
        let (grid, _, mut field, mut player) = setup();
        let target = grid.index(IVec2::new(3, 4));
        field.start(target);
        field.tick(8.0);

        player.handle_direction(Direction::Up, &grid);
        for _ in 0..10 {
            player.tick(0.05, &grid, &field);
        }
        assert!(!player.is_alive());
    }

    proptest! {
        #[test]
        fn prop_tiles_stay_on_grid(
            presses in proptest::collection::vec((0usize..4, 0.0f32..0.4), 1..100),
        ) {
            let (grid, _, field, mut player) = setup();
            for (dir, dt) in presses {
                player.handle_direction(Direction::ALL[dir], &grid);
                player.tick(dt, &grid, &field);
                prop_assert!(grid.contains(player.tile_old()));
                prop_assert!(grid.contains(player.tile_new()));
                if player.move_timer() == 0.0 {
                    prop_assert_eq!(player.tile_old(), player.tile_new());
                }
                let hop = (player.tile_new() - player.tile_old()).abs();
                prop_assert!(hop.x + hop.y <= 1);
            }
        }
    }
}
