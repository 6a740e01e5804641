//! Sensor frame types: the input boundary delivered by the hand-tracking
//! runtime once per sample.
//!
//! Positions are in sensor millimeters, right-handed coordinates. The
//! JSON shape matches the tracking service's frame messages, so frames can
//! be decoded straight off the wire or out of a recording.

mod recording;

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub use recording::FrameRecording;

use crate::error::HandcamError;

/// One sample of tracked hands and pointables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Frame {
    /// Sensor-assigned frame id.
    pub id: u64,
    /// Sensor timestamp in microseconds.
    pub timestamp: u64,
    /// Tracked hands, in sensor order.
    pub hands: Vec<Hand>,
    /// Tracked finger/tool tips, in sensor order.
    pub pointables: Vec<Pointable>,
}

/// A tracked hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hand {
    /// Palm center.
    pub palm_position: Vec3,
    /// Smoothed palm center.
    pub stabilized_palm_position: Vec3,
}

/// A tracked finger or tool tip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pointable {
    /// Tip position.
    pub tip_position: Vec3,
    /// Smoothed tip position.
    pub stabilized_tip_position: Vec3,
}

impl Frame {
    /// Build a frame from hands and pointables.
    #[must_use]
    pub fn new(hands: Vec<Hand>, pointables: Vec<Pointable>) -> Self {
        Self {
            hands,
            pointables,
            ..Self::default()
        }
    }

    /// Decode a single frame from its JSON message.
    pub fn from_json(json: &str) -> Result<Self, HandcamError> {
        serde_json::from_str(json).map_err(|e| HandcamError::FrameParse {
            line: 0,
            message: e.to_string(),
        })
    }

    /// Number of tracked hands.
    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    /// Number of tracked pointables (extended fingers and tools).
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.pointables.len()
    }
}

impl Hand {
    /// A hand whose stabilized position equals its raw palm position.
    #[must_use]
    pub fn new(palm_position: Vec3) -> Self {
        Self {
            palm_position,
            stabilized_palm_position: palm_position,
        }
    }
}

impl Pointable {
    /// A pointable whose stabilized tip equals its raw tip.
    #[must_use]
    pub fn new(tip_position: Vec3) -> Self {
        Self {
            tip_position,
            stabilized_tip_position: tip_position,
        }
    }
}
