//! Per-frame update
//!
//! Frame order: every pending input event goes through [`handle_event`],
//! then one [`tick`] advances the session, then the renderer reads a
//! snapshot.

use super::state::GameState;
use crate::input::{Action, RawEvent, translate};
use crate::settings::Settings;

/// Feed one window event to the session. Returns true if the game consumed it.
pub fn handle_event(
    state: &mut GameState,
    event: &RawEvent,
    settings: &Settings,
    window_height: f32,
) -> bool {
    match translate(event, &settings.bindings, state.camera.grabbed, window_height) {
        Some(action) => apply(state, action, settings),
        None => false,
    }
}

/// Apply a translated action. Returns true if it had an effect.
pub fn apply(state: &mut GameState, action: Action, settings: &Settings) -> bool {
    match action {
        Action::Restart => {
            state.reset();
            true
        }
        Action::Move(dir) => {
            state.buttons.press(dir);
            // Ignored, not queued, while a hop is in flight
            state.player.handle_direction(dir, &state.grid)
        }
        Action::Release(dir) => {
            state.buttons.release(dir);
            true
        }
        Action::GrabPointer => {
            state.camera.grabbed = true;
            true
        }
        Action::ReleasePointer => {
            state.camera.grabbed = false;
            true
        }
        Action::Look(delta) => {
            state
                .camera
                .look(delta, settings.camera_sensitivity, settings.camera_fovy);
            true
        }
    }
}

/// Advance the session by `elapsed` seconds
pub fn tick(state: &mut GameState, elapsed: f32) {
    if state.is_alive() {
        state.time_survived += elapsed;

        state.pillars.tick(elapsed);
        state.player.tick(elapsed, &state.grid, &state.pillars);

        if !state.player.is_alive() {
            log::info!("survived {:.1}s", state.time_survived);
        }
    }

    state.buttons.end_frame();
}
