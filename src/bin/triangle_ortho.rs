use gl_tutorials::{
    logger,
    opengl::shader::ProgramPipeline,
    render::{camera::Projector, geometry, shaders, vertex::Color2dVertex, Mesh, Primitive},
    App, AppConfig, Frame, Scene,
};

const VERTEX_SRC: &str = r#"
    #version 450 core

    layout (location = 0) in vec2 position;
    layout (location = 1) in vec4 color;

    uniform mat4 ortho;

    out gl_PerVertex { vec4 gl_Position; };

    layout (location = 0) out vec4 vertex_color;

    void main() {
        vertex_color = color;
        gl_Position = ortho * vec4(position, 0.0, 1.0);
    }
"#;

struct OrthoScene {
    pipeline: ProgramPipeline,
    mesh: Mesh<Color2dVertex>,
}

impl Scene for OrthoScene {
    fn draw(&mut self, frame: &Frame) -> gl_tutorials::Result<()> {
        self.pipeline.bind();

        let ortho = Projector::aspect_box(frame.aspect_ratio);
        self.pipeline.set_uniform("ortho", ortho.matrix())?;

        self.mesh.draw();

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Triangle Color Buffer Ortho Example"))?;
    let scene = OrthoScene {
        pipeline: ProgramPipeline::from_sources(VERTEX_SRC, shaders::COLOR_FRAGMENT)?,
        mesh: Mesh::new_static(&geometry::color_triangle_2d(), Primitive::Triangles),
    };

    app.run(scene)
}
