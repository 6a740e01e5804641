use std::f32::consts::PI;

use glam::Vec3;

use crate::camera::Camera;
use crate::frame::Frame;
use crate::gesture::{GestureKind, GestureTracker};
use crate::object::core::SceneObject;
use crate::options::ObjectControlOptions;

/// Output half-range of a scale increment before speed scaling.
const SCALE_SPAN: f32 = 2.0;

/// Gesture-driven rotate/scale/pan controls for a [`SceneObject`], using
/// a camera's axes as the frame of reference.
#[derive(Debug, Clone)]
pub struct ObjectControls {
    /// Channel configuration, read fresh on every update.
    pub options: ObjectControlOptions,
    /// Output half-range for pan increments.
    pub step: f32,
    tracker: GestureTracker,
}

impl ObjectControls {
    /// Controls with default options.
    #[must_use]
    pub fn new(camera: &Camera, object: &SceneObject) -> Self {
        Self::with_options(camera, object, ObjectControlOptions::default())
    }

    /// Controls configured from `options`. An unset `step` is derived from
    /// the camera's distance to the object.
    #[must_use]
    pub fn with_options(
        camera: &Camera,
        object: &SceneObject,
        options: ObjectControlOptions,
    ) -> Self {
        let step = options
            .step
            .unwrap_or_else(|| camera.gesture_step(object.position));
        log::debug!("object controls: step {step}");
        Self {
            options,
            step,
            tracker: GestureTracker::new(),
        }
    }

    /// Process one sensor frame: rotate, then scale, then pan.
    pub fn update(
        &mut self,
        frame: &Frame,
        camera: &Camera,
        object: &mut SceneObject,
    ) {
        if !self.options.enabled {
            return;
        }
        self.rotate(frame, object);
        self.scale(frame, object);
        self.pan(frame, camera, object);
    }

    /// Spin the object about its Y axis (hand X).
    ///
    /// Hand Y is tracked but not applied: tilting the object toward the
    /// camera is not supported yet.
    pub fn rotate(&mut self, frame: &Frame, object: &mut SceneObject) {
        let Some(delta) =
            self.tracker
                .track(GestureKind::Rotate, &self.options.rotate, frame)
        else {
            return;
        };
        let spin = self.options.rotate.map_delta(
            delta.x,
            PI,
            self.options.finger_factor,
        );
        object.rotation.y += spin;
        log::trace!("spin by {spin} rad");
    }

    /// Uniformly rescale the object (hand Z).
    pub fn scale(&mut self, frame: &Frame, object: &mut SceneObject) {
        let Some(delta) =
            self.tracker
                .track(GestureKind::Scale, &self.options.scale, frame)
        else {
            return;
        };
        let channel = &self.options.scale;

        let scale = object.scale.x
            + channel.map_delta(delta.z, SCALE_SPAN, self.options.finger_factor);
        if channel.admits(scale) {
            object.scale = Vec3::splat(scale);
            log::trace!("scale to {scale}");
        } else {
            log::debug!("scale to {scale} rejected");
        }
    }

    /// Move the object along the camera's local axes.
    pub fn pan(
        &mut self,
        frame: &Frame,
        camera: &Camera,
        object: &mut SceneObject,
    ) {
        let Some(delta) =
            self.tracker.track(GestureKind::Pan, &self.options.pan, frame)
        else {
            return;
        };
        let channel = &self.options.pan;
        let finger_factor = self.options.finger_factor;

        let local = delta.map(|d| channel.map_delta(d, self.step, finger_factor));
        let offset = camera.local_to_world(local) - camera.position;
        object.position += offset;
        log::trace!("pan by {offset}");
    }

    /// The channel currently holding a last sample, if any.
    #[must_use]
    pub fn active_gesture(&self) -> Option<GestureKind> {
        self.tracker.active()
    }

    /// Forget any in-progress gesture.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Hand, Pointable};
    use crate::gesture::{map_linear, Limits};

    const EPS: f32 = 1e-4;

    fn frame(hands: &[Vec3], fingers: usize) -> Frame {
        Frame::new(
            hands.iter().copied().map(Hand::new).collect(),
            vec![Pointable::new(Vec3::ZERO); fingers],
        )
    }

    fn setup() -> (ObjectControls, Camera, SceneObject) {
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);
        let object = SceneObject::default();
        (ObjectControls::new(&camera, &object), camera, object)
    }

    #[test]
    fn spin_follows_hand_x() {
        let (mut controls, camera, mut object) = setup();
        controls.update(&frame(&[Vec3::ZERO], 2), &camera, &mut object);
        assert_eq!(object.rotation, Vec3::ZERO);
        controls.update(&frame(&[Vec3::new(20.0, 0.0, 0.0)], 2), &camera, &mut object);
        // default rotate speed is 4
        let expected = 4.0 * map_linear(20.0, -400.0, 400.0, -PI, PI);
        assert!((object.rotation.y - expected).abs() < EPS);
    }

    #[test]
    fn hand_height_does_not_tilt() {
        let (mut controls, camera, mut object) = setup();
        controls.update(&frame(&[Vec3::ZERO], 3), &camera, &mut object);
        controls.update(&frame(&[Vec3::new(0.0, 120.0, 0.0)], 3), &camera, &mut object);
        assert_eq!(object.rotation, Vec3::ZERO);
        assert_eq!(controls.active_gesture(), Some(GestureKind::Rotate));
    }

    #[test]
    fn scale_accumulates_per_frame() {
        let (mut controls, camera, mut object) = setup();
        let step = map_linear(50.0, -400.0, 400.0, -2.0, 2.0);
        for (i, z) in [0.0, 50.0, 100.0].into_iter().enumerate() {
            controls.update(&frame(&[Vec3::new(0.0, 0.0, z)], 5), &camera, &mut object);
            let expected = 1.0 + step * i as f32;
            assert!(object.scale.abs_diff_eq(Vec3::splat(expected), EPS));
        }
    }

    #[test]
    fn scale_stays_below_max() {
        let (mut controls, camera, mut object) = setup();
        object.scale = Vec3::splat(9.9);
        controls.update(&frame(&[Vec3::ZERO], 4), &camera, &mut object);
        controls.update(&frame(&[Vec3::new(0.0, 0.0, 50.0)], 4), &camera, &mut object);
        assert_eq!(object.scale, Vec3::splat(9.9));
        // shrinking is still allowed
        controls.update(&frame(&[Vec3::ZERO], 4), &camera, &mut object);
        assert!(object.scale.abs_diff_eq(Vec3::splat(9.65), EPS));
    }

    #[test]
    fn scale_rejects_reaching_min_exactly() {
        let (mut controls, camera, mut object) = setup();
        controls.options.scale.limits = Some(Limits::new(0.5, 10.0));
        object.scale = Vec3::splat(0.75);
        controls.update(&frame(&[Vec3::ZERO], 4), &camera, &mut object);
        // -50 maps to -0.25, landing exactly on the lower limit
        controls.update(&frame(&[Vec3::new(0.0, 0.0, -50.0)], 4), &camera, &mut object);
        assert_eq!(object.scale, Vec3::splat(0.75));
    }

    #[test]
    fn pan_moves_object_in_camera_frame() {
        let camera = Camera::looking_at(Vec3::new(100.0, 0.0, 0.0), Vec3::ZERO);
        let mut object = SceneObject::default();
        let mut controls = ObjectControls::new(&camera, &object);
        let hands = |x: f32| [Vec3::new(-100.0, 0.0, 0.0), Vec3::new(x, 0.0, 0.0)];

        controls.update(&frame(&hands(0.0), 6), &camera, &mut object);
        controls.update(&frame(&hands(40.0), 6), &camera, &mut object);
        // camera right axis is -Z when looking down -X
        assert!(object.position.abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), EPS));
        assert_eq!(camera.position, Vec3::new(100.0, 0.0, 0.0));
    }

    #[test]
    fn pan_disabled_releases_state() {
        let (mut controls, camera, mut object) = setup();
        let pair = [Vec3::new(-10.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0)];
        controls.update(&frame(&pair, 7), &camera, &mut object);
        assert_eq!(controls.active_gesture(), Some(GestureKind::Pan));
        controls.options.pan.enabled = false;
        controls.update(&frame(&pair, 7), &camera, &mut object);
        assert!(controls.active_gesture().is_none());
    }
}
