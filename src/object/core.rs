use glam::{EulerRot, Mat4, Quat, Vec3};

/// A freestanding scene node manipulated by [`ObjectControls`].
///
/// Rotation is stored as XYZ Euler angles in radians so single-axis spins
/// accumulate without drift.
///
/// [`ObjectControls`]: crate::object::ObjectControls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    /// World-space position.
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for SceneObject {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl SceneObject {
    /// Unrotated, unit-scale object at `position`.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Rotation as a quaternion.
    #[must_use]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Model matrix (scale, then rotate, then translate).
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.quat(),
            self.position,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn model_matrix_applies_scale_rotation_translation() {
        let object = SceneObject {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::new(0.0, FRAC_PI_2, 0.0),
            scale: Vec3::splat(2.0),
        };
        let p = object.build_matrix().transform_point3(Vec3::X);
        // X scaled to 2, spun about Y onto -Z, then translated
        assert!(p.abs_diff_eq(Vec3::new(1.0, 2.0, 1.0), 1e-5));
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(SceneObject::default().build_matrix(), Mat4::IDENTITY);
        assert_eq!(SceneObject::at(Vec3::ONE).scale, Vec3::ONE);
    }
}
