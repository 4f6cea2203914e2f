//! Core errors (renderer-agnostic).

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Unknown camera preset: {0} (expected 1..=5)")]
    UnknownCameraPreset(u8),
    #[error("Invalid viewport size: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
}

pub type CoreResult<T> = Result<T, CoreError>;
