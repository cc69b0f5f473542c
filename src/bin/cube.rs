use gl_tutorials::{
    logger,
    opengl::shader::ProgramPipeline,
    render::{
        camera::{Camera, Projector},
        geometry, shaders,
        vertex::ColorVertex,
        Mesh, Primitive,
    },
    time::Ticker,
    App, AppConfig, Frame, Scene,
};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_3;

struct CubeScene {
    pipeline: ProgramPipeline,
    mesh: Mesh<ColorVertex>,
    camera: Camera,
    time: Ticker,
}

impl Scene for CubeScene {
    fn draw(&mut self, frame: &Frame) -> gl_tutorials::Result<()> {
        let time = self.time.tick();

        self.pipeline.bind();

        self.camera.set_aspect_ratio(frame.aspect_ratio);
        self.pipeline.set_uniform("view", self.camera.view)?;
        self.pipeline
            .set_uniform("projection", self.camera.projection())?;
        self.pipeline
            .set_uniform("model", Mat4::from_rotation_y(time))?;

        self.mesh.draw();

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Cube Example"))?;
    let scene = CubeScene {
        pipeline: ProgramPipeline::from_sources(
            shaders::MVP_COLOR_VERTEX,
            shaders::COLOR_FRAGMENT,
        )?,
        mesh: Mesh::new_static(&geometry::color_cube(), Primitive::Triangles)
            .with_indices(&geometry::quads_to_triangles(&geometry::CUBE_QUADS)),
        camera: Camera::look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            Projector::perspective(FRAC_PI_3, 1.0, 0.1, 10.0),
        ),
        time: Ticker::new(0.01),
    };

    app.run(scene)
}
