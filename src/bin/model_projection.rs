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

const LENGTH: u32 = 10;

/// Triangle at grid cell `(i, j, k)`, each coordinate in `1..=LENGTH`.
///
/// Scale falls with the cell index and turns negative for the last cells.
fn cell_model(i: u32, j: u32, k: u32, time: f32) -> Mat4 {
    let length = LENGTH as f32;
    let total = length * length * length;
    let index = (i * LENGTH * LENGTH + j * LENGTH + k) as f32;
    let half = length / 2.0;

    Transform::from_position(Vec3::new(-half + i as f32, -half + j as f32, -half + k as f32))
        .with_rotation(Quat::from_rotation_z(time * PI))
        .with_uniform_scale(1.0 - index / total)
        .matrix_trs()
}

/// The field of view breathes between PI/3 and PI/3 + 2 radians.
fn breathing_fov(time: f32) -> f32 {
    FRAC_PI_3 + 1.0 + time.sin()
}

struct ModelProjectionScene {
    pipeline: ProgramPipeline,
    mesh: Mesh<ColorVertex>,
    camera: Camera,
    time: Ticker,
}

impl Scene for ModelProjectionScene {
    fn draw(&mut self, frame: &Frame) -> gl_tutorials::Result<()> {
        let time = self.time.tick();

        self.pipeline.bind();

        self.camera.projector =
            Projector::perspective(breathing_fov(time), frame.aspect_ratio, 0.1, 10.0);
        self.pipeline.set_uniform("view", self.camera.view)?;
        self.pipeline
            .set_uniform("projection", self.camera.projection())?;

        for i in 1..=LENGTH {
            for j in 1..=LENGTH {
                for k in 1..=LENGTH {
                    self.pipeline
                        .set_uniform("model", cell_model(i, j, k, time))?;
                    self.mesh.draw();
                }
            }
        }

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Model Projection Example"))?;
    let scene = ModelProjectionScene {
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
