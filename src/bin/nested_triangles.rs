use gl_tutorials::{
    logger,
    opengl::shader::ProgramPipeline,
    render::{
        camera::Projector, geometry, shaders, transform::Transform, vertex::ColorVertex, Mesh,
        Primitive,
    },
    time::Ticker,
    App, AppConfig, Frame, Scene,
};
use glam::{Mat4, Quat, Vec3};

const VERTEX_SRC: &str = r#"
    #version 450 core

    layout (location = 0) in vec4 position;
    layout (location = 1) in vec4 color;

    uniform mat4 ortho;
    uniform mat4 model;

    out gl_PerVertex { vec4 gl_Position; };

    layout (location = 0) out vec4 vertex_color;

    void main() {
        vertex_color = color;
        gl_Position = ortho * model * position;
    }
"#;

const LAYERS: u32 = 5;

/// Layer `layer` (1-based) slides with `sin(time)`, spins faster and shrinks the further in it is.
fn layer_model(layer: u32, time: f32) -> Mat4 {
    let t = layer as f32 / 10.0;

    Transform::from_position(Vec3::new(t * time.sin(), 0.0, 0.0))
        .with_rotation(Quat::from_rotation_z((360.0 * t * time).to_radians()))
        .with_uniform_scale(1.0 - t)
        .matrix_trs()
}

struct NestedTrianglesScene {
    pipeline: ProgramPipeline,
    mesh: Mesh<ColorVertex>,
    time: Ticker,
}

impl Scene for NestedTrianglesScene {
    fn draw(&mut self, frame: &Frame) -> gl_tutorials::Result<()> {
        let time = self.time.tick();

        self.pipeline.bind();

        let ortho = Projector::orthographic(
            -frame.aspect_ratio,
            frame.aspect_ratio,
            -1.0,
            2.0,
            -1.0,
            1.0,
        );
        self.pipeline.set_uniform("ortho", ortho.matrix())?;

        for layer in 1..=LAYERS {
            self.pipeline.set_uniform("model", layer_model(layer, time))?;
            self.mesh.draw();
        }

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Nested Triangles Example"))?;
    let scene = NestedTrianglesScene {
        pipeline: ProgramPipeline::from_sources(VERTEX_SRC, shaders::COLOR_FRAGMENT)?,
        mesh: Mesh::new_static(&geometry::wide_color_triangle(), Primitive::Triangles),
        time: Ticker::new(0.01),
    };

    app.run(scene)
}
