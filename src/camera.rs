//! Mouse-look camera rig
//!
//! The camera sits at a fixed point and only rotates. Pitch and yaw are
//! clamped to a window around their defaults so the grid stays in view.

use glam::{EulerRot, Quat, Vec2, Vec3};

/// Fixed camera position in world space
pub const CAMERA_POSITION: Vec3 = Vec3::new(60.0, 0.0, 20.0);

pub const PITCH_DEFAULT: f32 = 1.3;
pub const PITCH_RANGE: f32 = 1.0;
pub const YAW_DEFAULT: f32 = std::f32::consts::FRAC_PI_2;
pub const YAW_RANGE: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    /// Rotation about X (radians)
    pub pitch: f32,
    /// Rotation about Z (radians)
    pub yaw: f32,
    /// Pointer captured for mouse-look
    pub grabbed: bool,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            pitch: PITCH_DEFAULT,
            yaw: YAW_DEFAULT,
            grabbed: false,
        }
    }
}

impl CameraRig {
    /// Apply a look delta (window-height units, +y up)
    pub fn look(&mut self, delta: Vec2, sensitivity: f32, fovy: f32) {
        let scale = sensitivity * fovy;
        self.pitch = (self.pitch + delta.y * scale)
            .clamp(PITCH_DEFAULT - PITCH_RANGE, PITCH_DEFAULT + PITCH_RANGE);
        self.yaw = (self.yaw - delta.x * scale)
            .clamp(YAW_DEFAULT - YAW_RANGE, YAW_DEFAULT + YAW_RANGE);
    }

    pub fn position(&self) -> Vec3 {
        CAMERA_POSITION
    }

    /// Orientation: pitch about X first, then yaw about Z
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::ZYX, self.yaw, 0.0, self.pitch)
    }
}
