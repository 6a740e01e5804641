use glam::{Mat3, Mat4, Quat, Vec3};

/// Perspective camera defined by a world-space pose and projection
/// parameters.
///
/// The camera looks down its local -Z axis with local +Y up. It is owned
/// by the host scene; gesture controls only write `position` and
/// `orientation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Local-to-world rotation.
    pub orientation: Quat,
    /// Up direction used when re-orienting toward a target.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 2000.0,
        }
    }
}

impl Camera {
    /// Camera at `position` looking at `target`.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self {
            position,
            ..Self::default()
        };
        camera.look_at(target);
        camera
    }

    /// Rotate the camera so its -Z axis points at `target`.
    ///
    /// When the view direction is parallel to `up` the basis is nudged
    /// off-axis so the orientation stays well defined.
    pub fn look_at(&mut self, target: Vec3) {
        let mut back = self.position - target;
        if back.length_squared() == 0.0 {
            back.z = 1.0;
        }
        back = back.normalize();

        let mut right = self.up.cross(back);
        if right.length_squared() == 0.0 {
            if self.up.z.abs() == 1.0 {
                back.x += 0.0001;
            } else {
                back.z += 0.0001;
            }
            back = back.normalize();
            right = self.up.cross(back);
        }
        right = right.normalize();
        let up = back.cross(right);

        self.orientation = Quat::from_mat3(&Mat3::from_cols(right, up, back));
    }

    /// Transform a point from camera-local to world coordinates.
    #[must_use]
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.orientation * local
    }

    /// World-space view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Increment scale for zoom and pan gestures.
    ///
    /// The distance from the camera to `target`; a camera sitting on its
    /// target falls back to `10^(log10(near) + log10(far)) / 10`.
    #[must_use]
    pub fn gesture_step(&self, target: Vec3) -> f32 {
        let distance = self.position.distance(target);
        if distance == 0.0 {
            10f32.powf(self.znear.log10() + self.zfar.log10()) / 10.0
        } else {
            distance
        }
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
            .inverse()
    }

    /// Get just the projection matrix
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn look_at_points_forward_at_target() {
        let camera = Camera::looking_at(Vec3::new(3.0, 4.0, 5.0), Vec3::ZERO);
        let expected = (Vec3::ZERO - camera.position).normalize();
        assert!(camera.forward().abs_diff_eq(expected, EPS));
        // the camera's right axis stays horizontal
        assert!((camera.orientation * Vec3::X).y.abs() < EPS);
    }

    #[test]
    fn look_at_straight_down_stays_finite() {
        let camera = Camera::looking_at(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO);
        assert!(camera.orientation.is_finite());
        assert!(camera.forward().abs_diff_eq(Vec3::NEG_Y, 1e-3));
    }

    #[test]
    fn local_to_world_uses_pose() {
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let world = camera.local_to_world(Vec3::new(1.0, 0.0, 0.0));
        assert!(world.abs_diff_eq(Vec3::new(1.0, 0.0, 10.0), EPS));
        let ahead = camera.local_to_world(Vec3::new(0.0, 0.0, -10.0));
        assert!(ahead.abs_diff_eq(Vec3::ZERO, EPS));
    }

    #[test]
    fn view_matrix_maps_target_onto_negative_z() {
        let camera = Camera::looking_at(Vec3::new(0.0, 5.0, 5.0), Vec3::ZERO);
        let view_space = camera.build_view().transform_point3(Vec3::ZERO);
        assert!(view_space.truncate().abs_diff_eq(glam::Vec2::ZERO, EPS));
        assert!((view_space.z + 50f32.sqrt()).abs() < EPS);
        assert!(camera.build_matrix().is_finite());
    }

    #[test]
    fn gesture_step_uses_distance_or_clip_planes() {
        let camera = Camera {
            position: Vec3::new(0.0, 0.0, 200.0),
            ..Camera::default()
        };
        assert!((camera.gesture_step(Vec3::ZERO) - 200.0).abs() < EPS);

        let at_origin = Camera {
            znear: 1.0,
            zfar: 1000.0,
            ..Camera::default()
        };
        assert!((at_origin.gesture_step(Vec3::ZERO) - 100.0).abs() < 1e-2);
    }
}
