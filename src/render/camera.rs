use glam::{Mat3, Mat4, Vec3, Vec4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectorMode {
    Perspective,
    Orthographic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    mode: ProjectorMode,
    matrix: Mat4,
    parameters: Vec4,
    depth: (f32, f32),
}

impl Projector {
    /// `fov_y` is the vertical field of view in radians.
    pub fn perspective(fov_y: f32, aspect_ratio: f32, near_clip: f32, far_clip: f32) -> Self {
        assert!(
            fov_y > 0.0 && fov_y < std::f32::consts::PI,
            "Field of view must be between 0 and PI radians."
        );
        assert!(near_clip > 0.0, "Near clip must be a positive distance.");
        assert!(
            near_clip < far_clip,
            "Near clip must be less than far clip."
        );

        Self {
            mode: ProjectorMode::Perspective,
            matrix: Mat4::perspective_rh_gl(fov_y, aspect_ratio, near_clip, far_clip),
            parameters: Vec4::new(fov_y, aspect_ratio, near_clip, far_clip),
            depth: (near_clip, far_clip),
        }
    }

    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        Self {
            mode: ProjectorMode::Orthographic,
            matrix: Mat4::orthographic_rh_gl(left, right, bottom, top, z_near, z_far),
            parameters: Vec4::new(left, right, bottom, top),
            depth: (z_near, z_far),
        }
    }

    /// The `[-ratio, ratio] x [-1, 1] x [-1, 1]` box used by the flat demos.
    pub fn aspect_box(aspect_ratio: f32) -> Self {
        Self::orthographic(-aspect_ratio, aspect_ratio, -1.0, 1.0, -1.0, 1.0)
    }

    /// Rebuilds the projection for a new aspect ratio.
    ///
    /// Orthographic projections are rescaled horizontally around their centre.
    pub fn with_aspect_ratio(&self, aspect_ratio: f32) -> Self {
        let (near, far) = self.depth;
        match self.mode {
            ProjectorMode::Perspective => {
                Self::perspective(self.parameters.x, aspect_ratio, near, far)
            }
            ProjectorMode::Orthographic => {
                let [left, right, bottom, top] = self.parameters.to_array();
                let center = (left + right) * 0.5;
                let half_height = (top - bottom) * 0.5;

                Self::orthographic(
                    center - half_height * aspect_ratio,
                    center + half_height * aspect_ratio,
                    bottom,
                    top,
                    near,
                    far,
                )
            }
        }
    }

    pub fn mode(&self) -> ProjectorMode {
        self.mode
    }

    /// `(fov_y, aspect, near, far)` for perspective, `(left, right, bottom, top)` for orthographic.
    pub fn parameters(&self) -> Vec4 {
        self.parameters
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub view: Mat4,
    pub projector: Projector,
}

impl Camera {
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3, projector: Projector) -> Self {
        Self {
            view: Mat4::look_at_rh(eye, target, up),
            projector,
        }
    }

    pub fn projection(&self) -> Mat4 {
        self.projector.matrix()
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.projector = self.projector.with_aspect_ratio(aspect_ratio);
    }
}

/// Inverse-transpose of the upper 3x3 of `view * model`, for transforming normals.
pub fn normal_matrix(view: Mat4, model: Mat4) -> Mat3 {
    Mat3::from_mat4(view * model).inverse().transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

    #[test]
    fn aspect_box_maps_corners_to_clip_space() {
        let ortho = Projector::aspect_box(640.0 / 480.0).matrix();
        let corner = ortho * Vec4::new(640.0 / 480.0, 1.0, 0.0, 1.0);

        assert!(corner.abs_diff_eq(Vec4::new(1.0, 1.0, 0.0, 1.0), 1e-6));
    }

    #[test]
    fn perspective_maps_near_plane_to_minus_one() {
        let projector = Projector::perspective(FRAC_PI_3, 1.0, 0.1, 10.0);
        let clip = projector.matrix() * Vec4::new(0.0, 0.0, -0.1, 1.0);

        assert!((clip.z / clip.w + 1.0).abs() < 1e-5);

        let clip = projector.matrix() * Vec4::new(0.0, 0.0, -10.0, 1.0);
        assert!((clip.z / clip.w - 1.0).abs() < 1e-4);
    }

    #[test]
    #[should_panic]
    fn perspective_rejects_inverted_clip_planes() {
        Projector::perspective(FRAC_PI_3, 1.0, 0.1, -10.0);
    }

    #[test]
    fn aspect_ratio_change_keeps_projection_kind() {
        let perspective = Projector::perspective(FRAC_PI_3, 1.0, 0.1, 10.0);
        let resized = perspective.with_aspect_ratio(2.0);
        assert_eq!(resized.mode(), ProjectorMode::Perspective);
        assert_eq!(resized.parameters(), Vec4::new(FRAC_PI_3, 2.0, 0.1, 10.0));

        let ortho = Projector::aspect_box(1.0).with_aspect_ratio(2.0);
        assert_eq!(ortho.mode(), ProjectorMode::Orthographic);
        assert_eq!(ortho.parameters(), Vec4::new(-2.0, 2.0, -1.0, 1.0));
    }

    #[test]
    fn camera_looks_down_negative_z() {
        let camera = Camera::look_at(
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::ZERO,
            Vec3::Y,
            Projector::perspective(FRAC_PI_3, 1.0, 0.1, 10.0),
        );
        let origin = camera.view * Vec4::new(0.0, 0.0, 0.0, 1.0);

        assert!(origin.abs_diff_eq(Vec4::new(0.0, 0.0, -2.0, 1.0), 1e-6));
    }

    #[test]
    fn normal_matrix_of_rotation_is_the_rotation() {
        let model = Mat4::from_rotation_y(0.7);
        let normal = normal_matrix(Mat4::IDENTITY, model);

        assert!(normal.abs_diff_eq(Mat3::from_mat4(model), 1e-5));
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let model = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0)) * Mat4::from_rotation_z(FRAC_PI_2);
        let normal = normal_matrix(Mat4::IDENTITY, model);

        // A surface tangent stays perpendicular to its transformed normal.
        let tangent = Vec3::new(0.0, 1.0, 1.0);
        let surface_normal = Vec3::new(1.0, 0.0, 0.0);
        let moved_tangent = Mat3::from_mat4(model) * tangent;
        let moved_normal = normal * surface_normal;

        assert!(moved_tangent.dot(moved_normal).abs() < 1e-5);
    }
}
