use gl_tutorials::{
    logger,
    opengl::{
        shader::ProgramPipeline,
        texture::{Texture2D, TextureFilter},
    },
    render::{
        camera::{Camera, Projector},
        geometry, shaders,
        vertex::TextureVertex,
        Mesh, Primitive,
    },
    time::Ticker,
    App, AppConfig, Frame, Scene,
};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_3;

const PICTURE_PATH: &str = "assets/picture.png";

struct TextureImageScene {
    pipeline: ProgramPipeline,
    mesh: Mesh<TextureVertex>,
    texture: Texture2D,
    camera: Camera,
    time: Ticker,
}

impl Scene for TextureImageScene {
    fn draw(&mut self, frame: &Frame) -> gl_tutorials::Result<()> {
        let time = self.time.tick();

        self.pipeline.bind();
        self.texture.bind(0);

        self.camera.set_aspect_ratio(frame.aspect_ratio);
        self.pipeline.set_uniform("view", self.camera.view)?;
        self.pipeline
            .set_uniform("projection", self.camera.projection())?;
        self.pipeline
            .set_uniform("model", Mat4::from_rotation_x(time / 10.0))?;
        self.pipeline.set_uniform("tex", 0i32)?;

        self.mesh.draw();

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Texture Image Example"))?;
    let scene = TextureImageScene {
        pipeline: ProgramPipeline::from_sources(
            shaders::MVP_TEXTURE_VERTEX,
            shaders::TEXTURE_FRAGMENT,
        )?,
        // Image rows are stored top first.
        mesh: Mesh::new_static(&geometry::slab(true), Primitive::Triangles)
            .with_indices(&geometry::quad_indices()),
        texture: Texture2D::load(PICTURE_PATH, TextureFilter::Linear)?,
        camera: Camera::look_at(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::ZERO,
            Vec3::Y,
            Projector::perspective(FRAC_PI_3, 1.0, 0.1, 10.0),
        ),
        time: Ticker::new(0.01),
    };

    app.run(scene)
}
