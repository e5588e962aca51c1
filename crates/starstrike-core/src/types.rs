//! Fundamental geometric and simulation types.

use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

use crate::constants::AIM_PITCH_LIMIT;

/// Opaque reference to a renderable owned by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderHandle(pub u64);

/// Display color token (0xRRGGBB). Passed through to the presenter untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

/// Visual style requested when a renderable is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub color: Color,
    /// Edge length or radius, depending on the renderable kind.
    pub size: f64,
    /// Initial opacity (1.0 = opaque).
    pub opacity: f64,
}

/// Per-frame transform pushed to the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    /// Euler angles in radians (X, Y, Z).
    pub rotation: DVec3,
    /// Uniform scale.
    pub scale: f64,
}

impl Transform {
    /// Unrotated, unscaled transform at `position`.
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            rotation: DVec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(DVec3::ZERO)
    }
}

/// Simulation clock: frame counter plus monotonic wall-clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of running frames completed.
    pub frame: u64,
    /// Elapsed running time in seconds.
    pub elapsed_secs: f64,
    /// Duration of the most recent frame in seconds.
    pub delta_secs: f64,
}

impl SimTime {
    /// Current time in seconds since the simulation started running.
    pub fn now(&self) -> f64 {
        self.elapsed_secs
    }

    /// Advance by one frame of `dt` seconds.
    /// Negative or non-finite deltas count as zero so elapsed time never decreases.
    pub fn advance(&mut self, dt: f64) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.frame += 1;
        self.delta_secs = dt;
        self.elapsed_secs += dt;
    }
}

/// Player view orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aim {
    /// Rotation about the Y axis (radians, unbounded).
    pub yaw: f64,
    /// Rotation about the X axis (radians, clamped to ±AIM_PITCH_LIMIT).
    pub pitch: f64,
}

impl Aim {
    /// Apply an incremental turn. Pitch is clamped, yaw accumulates freely.
    pub fn turn(&mut self, delta_yaw: f64, delta_pitch: f64) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-AIM_PITCH_LIMIT, AIM_PITCH_LIMIT);
    }

    /// Unit view direction: -Z rotated by pitch then yaw (intrinsic X, Y).
    pub fn direction(&self) -> DVec3 {
        DQuat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0) * DVec3::NEG_Z
    }
}
