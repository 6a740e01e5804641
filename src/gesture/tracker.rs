use std::fmt;

use glam::Vec3;

use super::channel::GestureChannel;
use crate::frame::Frame;

/// The three gesture channels every controller runs, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Orbit (camera) or spin (object).
    Rotate,
    /// Zoom for cameras, uniform scale for objects.
    Scale,
    /// Translate along the camera's local axes.
    Pan,
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::Pan => "pan",
        })
    }
}

/// Last sample of whichever channel is currently engaged.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LastSample {
    kind: GestureKind,
    position: Vec3,
}

/// Per-controller delta state across frames.
///
/// Only one channel holds a last sample at any time: engaging a channel
/// drops the others' samples, and a channel that fails to match drops its
/// own. The first frame of an engagement is the baseline and yields a zero
/// delta.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureTracker {
    last: Option<LastSample>,
}

impl GestureTracker {
    /// Create a tracker with no engaged channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one channel against `frame`.
    ///
    /// Returns the coordinate delta since the previous frame when the
    /// channel is enabled, matches, and can read a position; otherwise
    /// releases the channel and returns `None`.
    pub fn track(
        &mut self,
        kind: GestureKind,
        channel: &GestureChannel,
        frame: &Frame,
    ) -> Option<Vec3> {
        let engaged = channel.enabled
            && channel.matches(frame.hand_count(), frame.finger_count());
        let position = if engaged { channel.position(frame) } else { None };

        match position {
            Some(position) => Some(self.advance(kind, position)),
            None => {
                self.release(kind);
                None
            }
        }
    }

    /// Record `position` for `kind` and return the delta from its previous
    /// sample (zero when `kind` was not engaged).
    pub fn advance(&mut self, kind: GestureKind, position: Vec3) -> Vec3 {
        let previous = match self.last {
            Some(last) if last.kind == kind => last.position,
            _ => {
                log::debug!("{kind} gesture engaged");
                position
            }
        };
        self.last = Some(LastSample { kind, position });
        position - previous
    }

    /// Drop the last sample of `kind`, if it is the engaged channel.
    pub fn release(&mut self, kind: GestureKind) {
        if self.active() == Some(kind) {
            log::debug!("{kind} gesture released");
            self.last = None;
        }
    }

    /// Drop all state.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// The engaged channel, if any.
    #[must_use]
    pub fn active(&self) -> Option<GestureKind> {
        self.last.map(|last| last.kind)
    }

    /// Last sample held for `kind`.
    #[must_use]
    pub fn last_sample(&self, kind: GestureKind) -> Option<Vec3> {
        self.last
            .filter(|last| last.kind == kind)
            .map(|last| last.position)
    }
}
