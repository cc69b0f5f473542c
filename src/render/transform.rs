use glam::{Mat4, Quat, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vec3::splat(scale))
    }

    /// Scale first, then rotate, then translate.
    pub fn matrix_trs(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform::default().matrix_trs(), Mat4::IDENTITY);
    }

    #[test]
    fn trs_scales_then_rotates_then_translates() {
        let transform = Transform::from_position(Vec3::new(10.0, 0.0, 0.0))
            .with_rotation(Quat::from_rotation_z(FRAC_PI_2))
            .with_uniform_scale(2.0);

        let moved = transform.matrix_trs().transform_point3(Vec3::X);

        // (1,0,0) -> scaled (2,0,0) -> rotated (0,2,0) -> translated (10,2,0)
        assert!(moved.abs_diff_eq(Vec3::new(10.0, 2.0, 0.0), 1e-5));
    }

    #[test]
    fn trs_matches_explicit_product() {
        let transform = Transform::from_position(Vec3::new(0.3, -1.0, 0.5))
            .with_rotation(Quat::from_rotation_z(1.2))
            .with_uniform_scale(0.4);
        let explicit = Mat4::from_translation(transform.position)
            * Mat4::from_quat(transform.rotation)
            * Mat4::from_scale(transform.scale);

        assert!(transform.matrix_trs().abs_diff_eq(explicit, 1e-5));
    }
}
