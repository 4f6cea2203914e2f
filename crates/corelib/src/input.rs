//! Discrete user commands, independent of the windowing backend.

use crate::camera::CameraPreset;
use crate::draw::RenderMode;
use crate::flight::Throttle;

/// Step applied to the axonometric angles per key press, in degrees.
pub const ANGLE_STEP: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    SetRenderMode(RenderMode),
    SelectCamera(CameraPreset),
    /// Climb (`Forward`), descend (`Reverse`) or release.
    Vertical(Throttle),
    /// Advance along the orbit (`Forward`), back up (`Reverse`) or release.
    Horizontal(Throttle),
    /// Axonometric theta change, in degrees.
    Theta(f32),
    /// Axonometric gamma change, in degrees.
    Gamma(f32),
}
