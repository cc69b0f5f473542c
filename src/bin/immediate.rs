use gl_tutorials::{
    logger,
    opengl::shader::ProgramPipeline,
    render::{geometry, shaders, vertex::ColorVertex, Mesh, Primitive},
    App, AppConfig, Frame, Scene,
};

struct ImmediateScene {
    pipeline: ProgramPipeline,
    mesh: Mesh<ColorVertex>,
}

impl Scene for ImmediateScene {
    fn draw(&mut self, _frame: &Frame) -> gl_tutorials::Result<()> {
        self.pipeline.bind();
        self.mesh.draw();

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Immediate Mode Example"))?;
    let scene = ImmediateScene {
        pipeline: ProgramPipeline::from_sources(shaders::COLOR_VERTEX, shaders::COLOR_FRAGMENT)?,
        mesh: Mesh::new_static(&geometry::wide_color_triangle(), Primitive::Triangles),
    };

    app.run(scene)
}
