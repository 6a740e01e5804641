use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use super::constraint::CountConstraint;
use crate::frame::{Frame, Hand};

/// Sensor coordinate span (millimeters) mapped onto a channel's output
/// range: deltas in `[-SENSOR_SPAN, SENSOR_SPAN]` map onto
/// `[-output, output]`.
pub const SENSOR_SPAN: f32 = 400.0;

/// Which hand drives a channel when two hands are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    /// The hand with the greater palm x-coordinate.
    #[default]
    Right,
    /// The hand with the lesser palm x-coordinate.
    Left,
}

/// Which tracked point a channel reads its coordinates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PositionSource {
    /// Palm center of the selected hand.
    #[default]
    Palm,
    /// Tip of the first pointable in the frame. Only meaningful when the
    /// finger constraint expects exactly one finger.
    Fingertip,
}

/// Open interval `(min, max)` bounding a channel's resulting value
/// (polar angle, camera distance, or object scale).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Limits {
    /// Exclusive lower bound.
    pub min: f32,
    /// Exclusive upper bound.
    pub max: f32,
}

impl Limits {
    /// Create limits from exclusive bounds.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies strictly inside the interval.
    #[must_use]
    pub fn admits(&self, value: f32) -> bool {
        self.min < value && value < self.max
    }
}

/// Configuration of one gesture channel (rotate, zoom/scale, or pan).
///
/// All fields are read fresh on every update and are never validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
pub struct GestureChannel {
    /// Whether the channel may act at all.
    pub enabled: bool,
    /// Speed multiplier applied to every increment.
    #[schemars(title = "Speed", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Required hand count.
    pub hands: CountConstraint,
    /// Required pointable (finger) count.
    pub fingers: CountConstraint,
    /// Hand preference when two hands are tracked.
    pub handedness: Handedness,
    /// Palm or fingertip coordinates.
    pub source: PositionSource,
    /// Read the smoothed variant of the chosen position.
    pub stabilized: bool,
    /// Bounds on the resulting value; `None` means unbounded. Pan has no
    /// scalar result and ignores this.
    pub limits: Option<Limits>,
}

impl Default for GestureChannel {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: 1.0,
            hands: CountConstraint::Exact(1),
            fingers: CountConstraint::Exact(1),
            handedness: Handedness::Right,
            source: PositionSource::Palm,
            stabilized: false,
            limits: None,
        }
    }
}

impl GestureChannel {
    /// A channel gated on the given hand and finger counts, with every
    /// other setting at its default.
    #[must_use]
    pub fn new(hands: CountConstraint, fingers: CountConstraint) -> Self {
        Self {
            hands,
            fingers,
            ..Self::default()
        }
    }

    /// Builder-style speed override.
    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Builder-style limits override.
    #[must_use]
    pub fn with_limits(mut self, min: f32, max: f32) -> Self {
        self.limits = Some(Limits::new(min, max));
        self
    }

    /// Gesture match: both the hand and the finger constraint must hold.
    #[must_use]
    pub fn matches(&self, hand_count: usize, finger_count: usize) -> bool {
        self.hands.admits(hand_count) && self.fingers.admits(finger_count)
    }

    /// Pick the hand that drives this channel.
    ///
    /// One hand is always used as-is. With two hands the palm
    /// x-coordinates decide left from right. Zero hands, or three and
    /// more, select nothing.
    #[must_use]
    pub fn select_hand<'a>(&self, frame: &'a Frame) -> Option<&'a Hand> {
        match frame.hands.as_slice() {
            [hand] => Some(hand),
            [a, b] => {
                let (left, right) = if a.palm_position.x < b.palm_position.x {
                    (a, b)
                } else {
                    (b, a)
                };
                Some(match self.handedness {
                    Handedness::Right => right,
                    Handedness::Left => left,
                })
            }
            [] => None,
            hands => {
                log::debug!(
                    "{} hands tracked; no hand selected",
                    hands.len()
                );
                None
            }
        }
    }

    /// Coordinates this channel tracks in `frame`, or `None` when the
    /// frame carries nothing to read (no selectable hand, no pointable).
    ///
    /// Fingertip mode always reads pointable 0, whatever the finger count.
    #[must_use]
    pub fn position(&self, frame: &Frame) -> Option<Vec3> {
        match self.source {
            PositionSource::Palm => self.select_hand(frame).map(|hand| {
                if self.stabilized {
                    hand.stabilized_palm_position
                } else {
                    hand.palm_position
                }
            }),
            PositionSource::Fingertip => frame.pointables.first().map(|tip| {
                if self.stabilized {
                    tip.stabilized_tip_position
                } else {
                    tip.tip_position
                }
            }),
        }
    }

    /// Multiplier applied on top of the remapped delta.
    #[must_use]
    pub fn transform_factor(&self, finger_factor: f32) -> f32 {
        match self.source {
            PositionSource::Palm => self.speed,
            PositionSource::Fingertip => self.speed * finger_factor,
        }
    }

    /// Map a raw sensor delta onto `[-output, output]`, scaled by
    /// [`transform_factor`](Self::transform_factor).
    #[must_use]
    pub fn map_delta(&self, delta: f32, output: f32, finger_factor: f32) -> f32 {
        self.transform_factor(finger_factor)
            * map_linear(delta, -SENSOR_SPAN, SENSOR_SPAN, -output, output)
    }

    /// Whether `value` respects this channel's limits.
    #[must_use]
    pub fn admits(&self, value: f32) -> bool {
        self.limits.is_none_or(|limits| limits.admits(value))
    }
}

/// Keys present in a channel table; absent keys keep the base channel's
/// values.
#[derive(Debug, Deserialize)]
struct ChannelOverrides {
    enabled: Option<bool>,
    speed: Option<f32>,
    hands: Option<CountConstraint>,
    fingers: Option<CountConstraint>,
    handedness: Option<Handedness>,
    source: Option<PositionSource>,
    stabilized: Option<bool>,
    limits: Option<Limits>,
}

impl ChannelOverrides {
    fn apply(self, base: GestureChannel) -> GestureChannel {
        GestureChannel {
            enabled: self.enabled.unwrap_or(base.enabled),
            speed: self.speed.unwrap_or(base.speed),
            hands: self.hands.unwrap_or(base.hands),
            fingers: self.fingers.unwrap_or(base.fingers),
            handedness: self.handedness.unwrap_or(base.handedness),
            source: self.source.unwrap_or(base.source),
            stabilized: self.stabilized.unwrap_or(base.stabilized),
            limits: self.limits.or(base.limits),
        }
    }
}

/// Deserialize a channel table on top of `base`, so a preset that sets
/// only `speed` keeps the channel's own counts and limits.
pub(crate) fn deserialize_over<'de, D>(
    deserializer: D,
    base: GestureChannel,
) -> Result<GestureChannel, D::Error>
where
    D: Deserializer<'de>,
{
    ChannelOverrides::deserialize(deserializer).map(|o| o.apply(base))
}

/// Linear remap of `x` from `[a1, a2]` to `[b1, b2]`. The input is not
/// clamped.
#[must_use]
pub fn map_linear(x: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    b1 + (x - a1) * (b2 - b1) / (a2 - a1)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;
    use crate::frame::Pointable;
    use crate::gesture::CountConstraint::{Exact, Range};

    const EPS: f32 = 1e-5;

    fn hand_at(x: f32, y: f32) -> Hand {
        Hand {
            palm_position: Vec3::new(x, y, 0.0),
            stabilized_palm_position: Vec3::new(x, y + 1.0, 0.0),
        }
    }

    #[test]
    fn match_requires_both_constraints() {
        let ch = GestureChannel::new(Exact(1), Range(2, 3));
        assert!(!ch.matches(1, 1));
        assert!(ch.matches(1, 2));
        assert!(ch.matches(1, 3));
        assert!(!ch.matches(1, 4));
        assert!(!ch.matches(0, 2));
        assert!(!ch.matches(2, 2));
    }

    #[test]
    fn match_range_hands_exact_fingers() {
        let ch = GestureChannel::new(Range(1, 2), Exact(5));
        assert!(!ch.matches(0, 5));
        assert!(ch.matches(1, 5));
        assert!(ch.matches(2, 5));
        assert!(!ch.matches(3, 5));
        assert!(!ch.matches(2, 4));
        assert!(!ch.matches(2, 6));
    }

    #[test]
    fn single_hand_ignores_handedness() {
        let ch = GestureChannel {
            handedness: Handedness::Left,
            ..GestureChannel::default()
        };
        let frame = Frame::new(vec![hand_at(50.0, 0.0)], vec![]);
        assert_eq!(ch.select_hand(&frame), Some(&frame.hands[0]));
    }

    #[test]
    fn two_hands_split_by_palm_x() {
        let frame = Frame::new(vec![hand_at(80.0, 1.0), hand_at(-80.0, 2.0)], vec![]);
        let mut ch = GestureChannel::default();
        assert_eq!(ch.select_hand(&frame), Some(&frame.hands[0]));
        ch.handedness = Handedness::Left;
        assert_eq!(ch.select_hand(&frame), Some(&frame.hands[1]));
    }

    #[test]
    fn zero_or_three_hands_select_nothing() {
        let ch = GestureChannel::default();
        assert!(ch.select_hand(&Frame::default()).is_none());
        let crowd = Frame::new(
            vec![hand_at(0.0, 0.0), hand_at(1.0, 0.0), hand_at(2.0, 0.0)],
            vec![],
        );
        assert!(ch.select_hand(&crowd).is_none());
        assert!(ch.position(&crowd).is_none());
    }

    #[test]
    fn palm_position_honours_stabilized_flag() {
        let frame = Frame::new(vec![hand_at(3.0, 10.0)], vec![]);
        let mut ch = GestureChannel::default();
        assert_eq!(ch.position(&frame), Some(Vec3::new(3.0, 10.0, 0.0)));
        ch.stabilized = true;
        assert_eq!(ch.position(&frame), Some(Vec3::new(3.0, 11.0, 0.0)));
    }

    #[test]
    fn fingertip_reads_first_pointable_only() {
        let frame = Frame::new(
            vec![hand_at(0.0, 0.0)],
            vec![
                Pointable {
                    tip_position: Vec3::new(1.0, 1.0, 1.0),
                    stabilized_tip_position: Vec3::new(2.0, 2.0, 2.0),
                },
                Pointable::new(Vec3::splat(100.0)),
            ],
        );
        let mut ch = GestureChannel {
            source: PositionSource::Fingertip,
            ..GestureChannel::default()
        };
        assert_eq!(ch.position(&frame), Some(Vec3::ONE));
        ch.stabilized = true;
        assert_eq!(ch.position(&frame), Some(Vec3::splat(2.0)));
        assert!(ch.position(&Frame::default()).is_none());
    }

    #[test]
    fn remap_is_exact() {
        let ch = GestureChannel::default().with_speed(1.5);
        assert!(ch.map_delta(0.0, PI, 2.0).abs() < EPS);
        assert!((ch.map_delta(400.0, PI, 2.0) - 1.5 * PI).abs() < EPS);
        assert!((ch.map_delta(-400.0, PI, 2.0) + 1.5 * PI).abs() < EPS);
        assert!((map_linear(50.0, -400.0, 400.0, -2.0, 2.0) - 0.25).abs() < EPS);
    }

    #[test]
    fn fingertip_source_applies_finger_factor() {
        let mut ch = GestureChannel::default().with_speed(2.0);
        assert_eq!(ch.transform_factor(3.0), 2.0);
        ch.source = PositionSource::Fingertip;
        assert_eq!(ch.transform_factor(3.0), 6.0);
    }

    #[test]
    fn limits_are_open_intervals() {
        let ch = GestureChannel::default().with_limits(0.1, 10.0);
        assert!(!ch.admits(0.1));
        assert!(ch.admits(0.11));
        assert!(!ch.admits(10.0));
        assert!(GestureChannel::default().admits(f32::MAX));
    }
}
