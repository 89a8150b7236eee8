//! Render-facing frame snapshot
//!
//! The renderer owns meshes, shaders and text drawing. Each frame it takes a
//! [`FrameSnapshot`] and uploads the pillar instances as-is.

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};
use serde::Serialize;

use crate::sim::GameState;

/// Pillar palette the blend factor walks through (must match shader)
pub const PILLAR_COLORS: [[f32; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
];

/// Controls help shown along the bottom of the screen
pub const HELP_TEXT: &str = "Mouse for camera; WASD to move; Escape ungrabs mouse; R restarts";

/// Per-instance pillar data (must match shader)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable, Serialize)]
pub struct PillarInstance {
    pub position: Vec3,
    pub color_blend: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    /// One entry per cell, row-major
    pub pillars: Vec<PillarInstance>,
    /// Palette uniform the blend factors index into
    pub pillar_colors: [[f32; 3]; 4],
    pub cube_position: Vec3,
    pub camera_position: Vec3,
    pub camera_rotation: Quat,
    pub alive: bool,
    pub time_survived: f32,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let grid = &state.grid;
        let pillars = state
            .pillars
            .samples()
            .enumerate()
            .map(|(i, sample)| PillarInstance {
                position: grid
                    .world_xy(grid.tile_at(i))
                    .extend(sample.height_offset),
                color_blend: sample.color_blend,
            })
            .collect();

        Self {
            pillars,
            pillar_colors: PILLAR_COLORS,
            cube_position: state.player.position(),
            camera_position: state.camera.position(),
            camera_rotation: state.camera.rotation(),
            alive: state.is_alive(),
            time_survived: state.time_survived,
        }
    }

    /// Pillar instances as raw bytes for a GPU buffer
    pub fn pillar_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pillars)
    }

    /// Overlay text: help line, then survival time in whole seconds
    pub fn hud_lines(&self) -> [String; 2] {
        [
            HELP_TEXT.to_string(),
            format!("Time survived: {}", self.time_survived as u32),
        ]
    }
}
