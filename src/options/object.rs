use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::gesture::CountConstraint::{Exact, Range};
use crate::gesture::{deserialize_over, GestureChannel};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Object Controls", inline)]
#[serde(default)]
/// Gesture channels and tuning for [`ObjectControls`].
///
/// [`ObjectControls`]: crate::object::ObjectControls
pub struct ObjectControlOptions {
    /// Master switch; when off, updates are ignored.
    pub enabled: bool,
    /// Pan output half-range. Derived from the camera when unset.
    pub step: Option<f32>,
    /// Speed multiplier for channels reading fingertips.
    #[schemars(title = "Finger Factor", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub finger_factor: f32,
    /// Spin channel.
    #[serde(deserialize_with = "rotate_channel")]
    #[schemars(with = "GestureChannel")]
    pub rotate: GestureChannel,
    /// Uniform scale channel; limits bound the resulting scale.
    #[serde(deserialize_with = "scale_channel")]
    #[schemars(with = "GestureChannel")]
    pub scale: GestureChannel,
    /// Pan channel.
    #[serde(deserialize_with = "pan_channel")]
    #[schemars(with = "GestureChannel")]
    pub pan: GestureChannel,
}

impl Default for ObjectControlOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            step: None,
            finger_factor: 2.0,
            rotate: GestureChannel::new(Exact(1), Range(2, 3)).with_speed(4.0),
            scale: GestureChannel::new(Exact(1), Range(4, 5))
                .with_limits(0.1, 10.0),
            pan: GestureChannel::new(Exact(2), Range(6, 12)),
        }
    }
}

fn rotate_channel<'de, D>(deserializer: D) -> Result<GestureChannel, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_over(deserializer, ObjectControlOptions::default().rotate)
}

fn scale_channel<'de, D>(deserializer: D) -> Result<GestureChannel, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_over(deserializer, ObjectControlOptions::default().scale)
}

fn pan_channel<'de, D>(deserializer: D) -> Result<GestureChannel, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_over(deserializer, ObjectControlOptions::default().pan)
}
