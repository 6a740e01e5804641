//! Freestanding scene objects and the gesture controls that rotate, scale
//! and pan them relative to a camera.

/// Gesture controls for a scene object.
pub mod controller;
/// Scene object transform.
pub mod core;

pub use self::controller::ObjectControls;
pub use self::core::SceneObject;
