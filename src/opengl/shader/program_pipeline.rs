use super::{FragmentStage, ShaderProgram, Uniform, VertexStage};
use crate::opengl::OpenGLObject;

pub struct ProgramPipeline {
    handle: u32,
    vertex: ShaderProgram<VertexStage>,
    fragment: Option<ShaderProgram<FragmentStage>>,
}

impl ProgramPipeline {
    pub fn new(
        vertex_shader: ShaderProgram<VertexStage>,
        fragment_shader: Option<ShaderProgram<FragmentStage>>,
    ) -> crate::Result<Self> {
        let mut handle = 0;
        unsafe {
            gl::CreateProgramPipelines(1, &mut handle);

            gl::UseProgramStages(handle, gl::VERTEX_SHADER_BIT, vertex_shader.handle());

            if let Some(fragment) = &fragment_shader {
                gl::UseProgramStages(handle, gl::FRAGMENT_SHADER_BIT, fragment.handle());
            }
        }

        let pipeline = Self {
            handle,
            vertex: vertex_shader,
            fragment: fragment_shader,
        };
        crate::opengl::check_errors()?;

        Ok(pipeline)
    }

    /// Compiles a vertex and fragment stage pair and combines them.
    pub fn from_sources(vertex_source: &str, fragment_source: &str) -> crate::Result<Self> {
        Self::new(
            ShaderProgram::new(&[vertex_source])?,
            Some(ShaderProgram::new(&[fragment_source])?),
        )
    }

    /// Sets `name` on every stage declaring it.
    pub fn set_uniform<U: Uniform>(&self, name: &str, value: U) -> crate::Result<()> {
        let mut found = self.vertex.set_uniform(name, &value);
        if let Some(fragment) = &self.fragment {
            found |= fragment.set_uniform(name, &value);
        }

        if found {
            Ok(())
        } else {
            Err(crate::Error::UnknownUniform(name.to_owned()))
        }
    }

    pub fn bind(&self) {
        unsafe { gl::BindProgramPipeline(self.handle()) };
    }
}

impl OpenGLObject for ProgramPipeline {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl Drop for ProgramPipeline {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgramPipelines(1, &self.handle) };
    }
}
