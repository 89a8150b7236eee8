//! Frame-driven simulation
//!
//! All gameplay logic lives here:
//! - Elapsed-time driven, one tick per rendered frame
//! - Seeded RNG only (owned by the pillar field)
//! - Stable cell order (row-major index)
//! - No rendering or platform dependencies

pub mod grid;
pub mod pillar;
pub mod player;
pub mod state;
pub mod tick;

pub use grid::{Direction, Grid, Tile};
pub use pillar::{PillarAnim, PillarCurve, PillarField, PillarSample};
pub use player::{Motion, Player};
pub use state::GameState;
pub use tick::{apply, handle_event, tick};
