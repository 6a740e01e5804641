//! Gesture layer shared by the camera and object controls.
//!
//! A [`GestureChannel`] describes when a channel may act (hand and finger
//! counts), which coordinates it reads, and how raw sensor deltas map to
//! transform increments. The [`GestureTracker`] carries the per-frame
//! last-sample state that turns absolute positions into deltas.

mod channel;
mod constraint;
mod tracker;

pub use channel::{
    map_linear, GestureChannel, Handedness, Limits, PositionSource,
    SENSOR_SPAN,
};
pub(crate) use channel::deserialize_over;
pub use constraint::CountConstraint;
pub use tracker::{GestureKind, GestureTracker};
