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
    App, AppConfig, Frame, Scene,
};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_3;

const TEXTURE_SIZE: u32 = 24;

struct TextureScene {
    pipeline: ProgramPipeline,
    mesh: Mesh<TextureVertex>,
    texture: Texture2D,
    camera: Camera,
}

impl Scene for TextureScene {
    fn draw(&mut self, frame: &Frame) -> gl_tutorials::Result<()> {
        self.pipeline.bind();
        self.texture.bind(0);

        self.camera.set_aspect_ratio(frame.aspect_ratio);
        self.pipeline.set_uniform("view", self.camera.view)?;
        self.pipeline
            .set_uniform("projection", self.camera.projection())?;
        self.pipeline.set_uniform("model", Mat4::IDENTITY)?;
        self.pipeline.set_uniform("tex", 0i32)?;

        self.mesh.draw();

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Texture Example"))?;

    let texels = geometry::checkerboard(TEXTURE_SIZE, TEXTURE_SIZE);
    let scene = TextureScene {
        pipeline: ProgramPipeline::from_sources(
            shaders::MVP_TEXTURE_VERTEX,
            shaders::TEXTURE_FRAGMENT,
        )?,
        mesh: Mesh::new_static(&geometry::slab(false), Primitive::Triangles)
            .with_indices(&geometry::quad_indices()),
        texture: Texture2D::from_rgba32f(
            TEXTURE_SIZE,
            TEXTURE_SIZE,
            &texels,
            TextureFilter::Nearest,
        )?,
        camera: Camera::look_at(
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::ZERO,
            Vec3::Y,
            Projector::perspective(FRAC_PI_3, 1.0, 0.1, 10.0),
        ),
    };

    app.run(scene)
}
