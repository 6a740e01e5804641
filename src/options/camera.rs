use std::f32::consts::PI;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::gesture::CountConstraint::{Exact, Range};
use crate::gesture::{deserialize_over, GestureChannel};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Controls", inline)]
#[serde(default)]
/// Gesture channels and tuning for [`CameraControls`].
///
/// [`CameraControls`]: crate::camera::CameraControls
pub struct CameraControlOptions {
    /// Master switch; when off, updates are ignored.
    pub enabled: bool,
    /// Initial orbit target.
    #[schemars(skip)]
    pub target: Vec3,
    /// Zoom/pan output half-range. Derived from the camera when unset.
    pub step: Option<f32>,
    /// Speed multiplier for channels reading fingertips.
    #[schemars(title = "Finger Factor", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub finger_factor: f32,
    /// Orbit channel; limits bound the polar angle.
    #[serde(deserialize_with = "rotate_channel")]
    #[schemars(with = "GestureChannel")]
    pub rotate: GestureChannel,
    /// Dolly channel; limits bound the distance to the target and default
    /// to the camera's clip planes.
    #[serde(deserialize_with = "zoom_channel")]
    #[schemars(with = "GestureChannel")]
    pub zoom: GestureChannel,
    /// Pan channel.
    #[serde(deserialize_with = "pan_channel")]
    #[schemars(with = "GestureChannel")]
    pub pan: GestureChannel,
}

impl Default for CameraControlOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            step: None,
            finger_factor: 2.0,
            rotate: GestureChannel::new(Exact(1), Range(2, 3))
                .with_limits(0.0, PI),
            zoom: GestureChannel::new(Exact(1), Range(4, 5)),
            pan: GestureChannel::new(Exact(2), Range(6, 12)),
        }
    }
}

fn rotate_channel<'de, D>(deserializer: D) -> Result<GestureChannel, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_over(deserializer, CameraControlOptions::default().rotate)
}

fn zoom_channel<'de, D>(deserializer: D) -> Result<GestureChannel, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_over(deserializer, CameraControlOptions::default().zoom)
}

fn pan_channel<'de, D>(deserializer: D) -> Result<GestureChannel, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_over(deserializer, CameraControlOptions::default().pan)
}
