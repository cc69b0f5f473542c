use crate::opengl::GlErrorCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create OpenGL context: {0}")]
    Context(String),
    #[error("OpenGL failed to compile {stage} program: {log}")]
    ShaderCompilation { stage: &'static str, log: String },
    #[error("shader source contains an interior NUL byte")]
    ShaderSource(#[from] std::ffi::NulError),
    #[error("no shader stage declares uniform `{0}`")]
    UnknownUniform(String),
    #[error("OpenGL reported errors: {0:?}")]
    Gl(Vec<GlErrorCode>),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
