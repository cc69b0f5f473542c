use gl_tutorials::{
    logger,
    opengl::shader::ProgramPipeline,
    render::{
        camera::{normal_matrix, Camera, Projector},
        geometry, shaders,
        vertex::NormalVertex,
        Mesh, Primitive,
    },
    time::Ticker,
    App, AppConfig, Frame, Scene,
};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_3;

const VERTEX_SRC: &str = r#"
    #version 450 core

    layout (location = 0) in vec4 position;
    layout (location = 1) in vec4 color;
    layout (location = 2) in vec3 norm;

    uniform mat4 model;
    uniform mat4 view;
    uniform mat4 projection;
    uniform mat3 normal;

    out gl_PerVertex { vec4 gl_Position; };

    layout (location = 0) out vec4 vertex_color;

    vec4 diffuse() {
        vec3 normalized = normalize(normal * normalize(norm));
        vec3 light = normalize(vec3(1.0, 1.0, 1.0));
        float df = max(dot(normalized, light), 0.0);
        return vec4((color * df).xyz, 1.0);
    }

    void main() {
        vertex_color = diffuse();
        gl_Position = projection * view * model * position;
    }
"#;

struct NormalLightingScene {
    pipeline: ProgramPipeline,
    mesh: Mesh<NormalVertex>,
    camera: Camera,
    time: Ticker,
}

impl Scene for NormalLightingScene {
    fn draw(&mut self, frame: &Frame) -> gl_tutorials::Result<()> {
        let time = self.time.tick();

        self.pipeline.bind();

        self.camera.set_aspect_ratio(frame.aspect_ratio);
        self.pipeline.set_uniform("view", self.camera.view)?;
        self.pipeline
            .set_uniform("projection", self.camera.projection())?;

        let model = Mat4::from_rotation_y(time);
        self.pipeline.set_uniform("model", model)?;
        self.pipeline
            .set_uniform("normal", normal_matrix(self.camera.view, model))?;

        self.mesh.draw();

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Normal Lighting Example"))?;
    let scene = NormalLightingScene {
        pipeline: ProgramPipeline::from_sources(VERTEX_SRC, shaders::COLOR_FRAGMENT)?,
        mesh: Mesh::new_static(&geometry::normal_cube(), Primitive::Triangles)
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
