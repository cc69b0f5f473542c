use gl_tutorials::{
    logger,
    opengl::shader::ProgramPipeline,
    render::{
        camera::{Camera, Projector},
        geometry, shaders,
        transform::Transform,
        vertex::ColorVertex,
        Mesh, Primitive,
    },
    time::Ticker,
    App, AppConfig, Frame, Scene,
};
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::{FRAC_PI_3, PI};

const TRIANGLES: u32 = 100;

/// Triangle `i` of the stack: further back, spinning faster and smaller as `i` grows.
fn triangle_model(i: u32, time: f32) -> Mat4 {
    let depth = i as f32 / TRIANGLES as f32;

    Transform::from_position(Vec3::new(time.sin(), 0.0, depth))
        .with_rotation(Quat::from_rotation_z(time * PI * depth))
        .with_uniform_scale(1.0 - depth)
        .matrix_trs()
}

struct ModelScene {
    pipeline: ProgramPipeline,
    mesh: Mesh<ColorVertex>,
    camera: Camera,
    time: Ticker,
}

impl Scene for ModelScene {
    fn draw(&mut self, frame: &Frame) -> gl_tutorials::Result<()> {
        let time = self.time.tick();

        self.pipeline.bind();

        self.camera.set_aspect_ratio(frame.aspect_ratio);
        self.pipeline.set_uniform("view", self.camera.view)?;
        self.pipeline
            .set_uniform("projection", self.camera.projection())?;

        for i in 1..=TRIANGLES {
            self.pipeline.set_uniform("model", triangle_model(i, time))?;
            self.mesh.draw();
        }

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Model Example"))?;
    let scene = ModelScene {
        pipeline: ProgramPipeline::from_sources(
            shaders::MVP_COLOR_VERTEX,
            shaders::COLOR_FRAGMENT,
        )?,
        mesh: Mesh::new_static(&geometry::color_triangle(), Primitive::Triangles),
        camera: Camera::look_at(
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::ZERO,
            Vec3::Y,
            Projector::perspective(FRAC_PI_3, 1.0, 0.1, 10.0),
        ),
        time: Ticker::new(0.01),
    };

    app.run(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_triangle_collapses_to_a_point() {
        let model = triangle_model(TRIANGLES, 0.3);
        let a = model.transform_point3(Vec3::new(-0.5, -0.5, 0.0));
        let b = model.transform_point3(Vec3::new(0.5, -0.5, 0.0));

        assert!(a.abs_diff_eq(b, 1e-6));
        assert!(a.abs_diff_eq(Vec3::new(0.3f32.sin(), 0.0, 1.0), 1e-6));
    }
}
