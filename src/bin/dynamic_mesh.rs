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

const W: u32 = 10;
const H: u32 = 10;
const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

struct DynamicMeshScene {
    pipeline: ProgramPipeline,
    mesh: Mesh<ColorVertex>,
    vertices: Vec<ColorVertex>,
    camera: Camera,
    time: Ticker,
}

impl Scene for DynamicMeshScene {
    fn draw(&mut self, frame: &Frame) -> gl_tutorials::Result<()> {
        let time = self.time.tick();

        self.pipeline.bind();

        self.camera.set_aspect_ratio(frame.aspect_ratio);
        self.pipeline.set_uniform("view", self.camera.view)?;
        self.pipeline
            .set_uniform("projection", self.camera.projection())?;
        self.pipeline.set_uniform("model", Mat4::IDENTITY)?;

        // Last frame's wave as a red wireframe.
        geometry::paint(&mut self.vertices, RED);
        self.mesh.update_vertices(&self.vertices);
        self.mesh.draw_as(Primitive::LineStrip);

        geometry::animate_wave(&mut self.vertices, W, H, time);
        self.mesh.update_vertices(&self.vertices);
        self.mesh.draw_as(Primitive::TriangleStrip);

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Dynamic Mesh Example"))?;

    let vertices = geometry::grid_vertices(W, H, 5.0);
    let indices = geometry::grid_strip_indices(W, H);
    let scene = DynamicMeshScene {
        pipeline: ProgramPipeline::from_sources(
            shaders::MVP_COLOR_VERTEX,
            shaders::COLOR_FRAGMENT,
        )?,
        mesh: Mesh::new_dynamic(&vertices, Primitive::TriangleStrip).with_indices(&indices),
        vertices,
        camera: Camera::look_at(
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::ZERO,
            Vec3::Y,
            Projector::perspective(FRAC_PI_3, 1.0, 0.1, 10.0),
        ),
        time: Ticker::new(0.05),
    };

    app.run(scene)
}
