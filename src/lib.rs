//! Pillar Hop - hop across a grid of pillars before they drop out from under you
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (pillar field, player traversal, session)
//! - `input`: Raw window events to gameplay actions, button counters
//! - `camera`: Mouse-look orbit camera
//! - `frame`: Per-frame snapshot consumed by the renderer
//! - `scene`: Transform handles resolved against an external scene table
//! - `tuning`: Data-driven gameplay constants
//! - `settings`: Player preferences (bindings, sensitivity)

pub mod camera;
pub mod frame;
pub mod input;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Pillars per grid side (grid is WIDTH x WIDTH)
    pub const PILLAR_WIDTH: usize = 9;
    /// World distance between neighbouring pillar centers
    pub const PILLAR_DISTANCE: f32 = 3.0;

    /// Pillar keyframes (seconds since the drop was triggered)
    pub const PILLAR_DROP_TIME: f32 = 7.0;
    pub const PILLAR_SETTLE_TIME: f32 = 7.5;
    pub const PILLAR_RISE_TIME: f32 = 9.5;
    pub const PILLAR_ANIM_TIME: f32 = 10.0;
    /// Height of a fully dropped pillar
    pub const PILLAR_MIN_Z: f32 = -30.0;
    /// One random drop attempt per interval of accumulated time
    pub const PILLAR_TRIGGER_INTERVAL: f32 = 0.1;

    /// Color blend anchors (index into the pillar palette)
    pub const BLEND_START: f32 = 0.0;
    pub const BLEND_WARN: f32 = 0.75;
    pub const BLEND_END: f32 = 1.0;

    /// Seconds for one tile hop
    pub const CUBE_MOVE_TIME: f32 = 0.5;
    /// Cube rests this far above its pillar's top
    pub const CUBE_HEIGHT_BIAS: f32 = 1.0;
    /// Cube below this height is dead
    pub const DEATH_Z: f32 = -4.0;

    /// Timers start here instead of 0 so "just started" differs from "idle"
    pub const START_EPSILON: f32 = 0.0001;
}

/// Affine remap of `t` from `[x1, x2]` onto `[y1, y2]`.
///
/// `x1 == x2` divides by zero; callers only pass distinct keyframes.
#[inline]
pub fn map_range(t: f32, x1: f32, x2: f32, y1: f32, y2: f32) -> f32 {
    y1 + (t - x1) * (y2 - y1) / (x2 - x1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_endpoints() {
        assert_eq!(map_range(0.0, 0.0, 7.0, 0.0, 0.75), 0.0);
        assert!((map_range(7.0, 0.0, 7.0, 0.0, 0.75) - 0.75).abs() < 1e-6);
        assert!((map_range(8.5, 7.5, 9.5, -30.0, 0.0) + 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_map_range_extrapolates() {
        // Not clamped: past x2 keeps the same slope
        assert!((map_range(2.0, 0.0, 1.0, 0.0, 10.0) - 20.0).abs() < 1e-5);
    }
}
