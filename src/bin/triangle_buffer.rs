use gl_tutorials::{
    logger,
    opengl::shader::ProgramPipeline,
    render::{geometry, vertex::Position2dVertex, Mesh, Primitive},
    App, AppConfig, Frame, Scene,
};

const VERTEX_SRC: &str = r#"
    #version 450 core

    layout (location = 0) in vec2 position;

    out gl_PerVertex { vec4 gl_Position; };

    void main() {
        gl_Position = vec4(position, 0.0, 1.0);
    }
"#;

const FRAGMENT_SRC: &str = r#"
    #version 450 core

    layout (location = 0) out vec4 f_color;

    void main() {
        f_color = vec4(0.0, 1.0, 1.0, 1.0);
    }
"#;

struct TriangleScene {
    pipeline: ProgramPipeline,
    mesh: Mesh<Position2dVertex>,
}

impl Scene for TriangleScene {
    fn draw(&mut self, _frame: &Frame) -> gl_tutorials::Result<()> {
        self.pipeline.bind();
        self.mesh.draw();

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Triangle Buffer Example"))?;
    let scene = TriangleScene {
        pipeline: ProgramPipeline::from_sources(VERTEX_SRC, FRAGMENT_SRC)?,
        mesh: Mesh::new_static(&geometry::triangle_2d(), Primitive::Triangles),
    };

    app.run(scene)
}
