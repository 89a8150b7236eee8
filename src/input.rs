//! Raw window events to gameplay actions
//!
//! The window layer hands over key and mouse events one at a time; this
//! module decides what each one means. Button counters are edge-triggered:
//! `downs` counts presses since the last frame and is cleared by
//! [`Buttons::end_frame`].

use glam::Vec2;

use crate::settings::KeyBindings;
use crate::sim::Direction;

/// A keyboard key, as far as the game cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

/// Events delivered by the window collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseButtonDown,
    /// Relative pointer motion in pixels
    MouseMotion { xrel: f32, yrel: f32 },
}

/// What an event asks the game to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Move(Direction),
    Release(Direction),
    Restart,
    GrabPointer,
    ReleasePointer,
    /// Look delta in window-height units, +y up
    Look(Vec2),
}

/// Map one raw event to an action. Events the game ignores map to `None`.
pub fn translate(
    event: &RawEvent,
    bindings: &KeyBindings,
    pointer_grabbed: bool,
    window_height: f32,
) -> Option<Action> {
    match *event {
        RawEvent::KeyDown(Key::Escape) => Some(Action::ReleasePointer),
        RawEvent::KeyDown(Key::Char(c)) => {
            if bindings.is_restart(c) {
                Some(Action::Restart)
            } else {
                bindings.direction_for(c).map(Action::Move)
            }
        }
        RawEvent::KeyUp(Key::Char(c)) => bindings.direction_for(c).map(Action::Release),
        RawEvent::MouseButtonDown if !pointer_grabbed => Some(Action::GrabPointer),
        RawEvent::MouseMotion { xrel, yrel } if pointer_grabbed && window_height > 0.0 => {
            Some(Action::Look(Vec2::new(xrel, -yrel) / window_height))
        }
        _ => None,
    }
}

/// One direction key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button {
    pub held: bool,
    /// Presses since the last frame
    pub downs: u8,
}

/// The four direction keys
#[derive(Debug, Clone, Default)]
pub struct Buttons {
    buttons: [Button; 4],
}

impl Buttons {
    pub fn get(&self, dir: Direction) -> Button {
        self.buttons[dir.slot()]
    }

    pub fn press(&mut self, dir: Direction) {
        let b = &mut self.buttons[dir.slot()];
        b.held = true;
        b.downs = b.downs.saturating_add(1);
    }

    pub fn release(&mut self, dir: Direction) {
        self.buttons[dir.slot()].held = false;
    }

    /// Clear press counters; held state carries over
    pub fn end_frame(&mut self) {
        for b in &mut self.buttons {
            b.downs = 0;
        }
    }

    pub fn reset(&mut self) {
        self.buttons = Default::default();
    }
}
