use std::f32::consts::PI;

use glam::{Quat, Vec3};

use crate::camera::core::Camera;
use crate::frame::Frame;
use crate::gesture::{GestureKind, GestureTracker, Limits};
use crate::options::CameraControlOptions;

/// Gesture-driven orbit controls for a [`Camera`].
///
/// Rotate orbits the camera around `target`, zoom moves it along the view
/// ray, and pan moves camera and target together. At most one channel acts
/// per frame; see [`GestureTracker`].
#[derive(Debug, Clone)]
pub struct CameraControls {
    /// Channel configuration, read fresh on every update.
    pub options: CameraControlOptions,
    /// Point the camera orbits around and looks at.
    pub target: Vec3,
    /// Output half-range for zoom and pan increments.
    pub step: f32,
    tracker: GestureTracker,
}

impl CameraControls {
    /// Controls with default options for `camera`.
    #[must_use]
    pub fn new(camera: &Camera) -> Self {
        Self::with_options(camera, CameraControlOptions::default())
    }

    /// Controls configured from `options`.
    ///
    /// An unset `step` is derived from the camera's distance to the
    /// target, and unset zoom limits default to the camera's clip planes.
    #[must_use]
    pub fn with_options(camera: &Camera, mut options: CameraControlOptions) -> Self {
        let target = options.target;
        let step = options
            .step
            .unwrap_or_else(|| camera.gesture_step(target));
        if options.zoom.limits.is_none() {
            options.zoom.limits = Some(Limits::new(camera.znear, camera.zfar));
        }
        log::debug!("camera controls: target {target}, step {step}");

        Self {
            options,
            target,
            step,
            tracker: GestureTracker::new(),
        }
    }

    /// Process one sensor frame: rotate, then zoom, then pan.
    pub fn update(&mut self, frame: &Frame, camera: &mut Camera) {
        if !self.options.enabled {
            return;
        }
        self.rotate(frame, camera);
        self.zoom(frame, camera);
        self.pan(frame, camera);
    }

    /// Orbit vertically (hand Y) and horizontally (hand X) around the
    /// target, then look at it.
    pub fn rotate(&mut self, frame: &Frame, camera: &mut Camera) {
        let Some(delta) =
            self.tracker
                .track(GestureKind::Rotate, &self.options.rotate, frame)
        else {
            return;
        };
        let channel = &self.options.rotate;
        let finger_factor = self.options.finger_factor;

        // Vertical orbit about the horizontal axis orthogonal to the view.
        let offset = camera.position - self.target;
        let angle_delta = channel.map_delta(delta.y, PI, finger_factor);
        let polar = offset.angle_between(Vec3::Y) + angle_delta;
        let axis = Vec3::new(offset.z, 0.0, -offset.x).normalize_or_zero();
        if channel.admits(polar) && axis != Vec3::ZERO {
            camera.position =
                Quat::from_axis_angle(axis, angle_delta) * offset + self.target;
        } else if angle_delta != 0.0 {
            log::debug!("vertical orbit to {polar} rad rejected");
        }

        // Horizontal orbit about world Y through the target.
        let spin = Quat::from_rotation_y(-channel.map_delta(
            delta.x,
            PI,
            finger_factor,
        ));
        camera.position = spin * (camera.position - self.target) + self.target;
        camera.look_at(self.target);
        log::trace!("rotate delta {delta} -> eye {}", camera.position);
    }

    /// Dolly toward or away from the target (hand Z).
    pub fn zoom(&mut self, frame: &Frame, camera: &mut Camera) {
        let Some(delta) =
            self.tracker
                .track(GestureKind::Scale, &self.options.zoom, frame)
        else {
            return;
        };
        let channel = &self.options.zoom;

        let offset = camera.position - self.target;
        let length_delta =
            channel.map_delta(delta.z, self.step, self.options.finger_factor);
        let length = offset.length() - length_delta;
        if channel.admits(length) {
            camera.position -= offset.normalize_or_zero() * length_delta;
            log::trace!("zoom to distance {length}");
        } else {
            log::debug!("zoom to distance {length} rejected");
        }
    }

    /// Move camera and target together along the camera's local axes.
    pub fn pan(&mut self, frame: &Frame, camera: &mut Camera) {
        let Some(delta) =
            self.tracker.track(GestureKind::Pan, &self.options.pan, frame)
        else {
            return;
        };
        let channel = &self.options.pan;
        let finger_factor = self.options.finger_factor;

        let local = delta.map(|d| channel.map_delta(d, self.step, finger_factor));
        let offset = camera.local_to_world(local) - camera.position;
        camera.position -= offset;
        self.target -= offset;
        log::trace!("pan by {offset}");
    }

    /// The channel currently holding a last sample, if any.
    #[must_use]
    pub fn active_gesture(&self) -> Option<GestureKind> {
        self.tracker.active()
    }

    /// Forget any in-progress gesture; the next matching frame becomes a
    /// fresh baseline.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}
