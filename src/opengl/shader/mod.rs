mod program_pipeline;
mod shader_program;
mod uniform;

pub use program_pipeline::*;
pub use shader_program::*;
pub use uniform::*;
