use gl_tutorials::{
    logger,
    opengl::shader::ProgramPipeline,
    render::{geometry, shaders, vertex::ColorVertex, Mesh, Primitive},
    App, AppConfig, Frame, Scene,
};

struct ColorTriangleScene {
    pipeline: ProgramPipeline,
    mesh: Mesh<ColorVertex>,
}

impl Scene for ColorTriangleScene {
    fn draw(&mut self, _frame: &Frame) -> gl_tutorials::Result<()> {
        self.pipeline.bind();
        self.mesh.draw();

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Triangle Color Buffer Example"))?;
    let scene = ColorTriangleScene {
        pipeline: ProgramPipeline::from_sources(shaders::COLOR_VERTEX, shaders::COLOR_FRAGMENT)?,
        mesh: Mesh::new_static(&geometry::color_triangle(), Primitive::Triangles),
    };

    app.run(scene)
}
