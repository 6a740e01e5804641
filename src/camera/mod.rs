//! Camera system for gesture-driven viewing.
//!
//! Provides the camera pose the host scene renders from and the orbit
//! controls that translate hand gestures into rotate, zoom and pan.

/// Gesture orbit controls for the camera.
pub mod controller;
/// Core camera struct and matrix helpers.
pub mod core;

pub use self::controller::CameraControls;
pub use self::core::Camera;
