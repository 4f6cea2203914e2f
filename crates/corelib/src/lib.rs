//! Core types: math re-exports, transform stack, flight model, cameras and
//! the scene traversal. Nothing here touches the GPU or the window.

pub use glam::{Mat4, Vec3, vec3};

pub mod camera;
pub mod context;
pub mod draw;
pub mod error;
pub mod flight;
pub mod input;
pub mod scene;
pub mod stack;

pub use camera::{CameraMode, CameraPreset, CameraState};
pub use context::SceneContext;
pub use draw::{Color, DrawCommand, DrawList, Frame, MeshKind, RenderMode};
pub use error::{CoreError, CoreResult};
pub use flight::{FlightParams, FlightPhase, FlightState, Throttle};
pub use input::Command;
pub use stack::TransformStack;
