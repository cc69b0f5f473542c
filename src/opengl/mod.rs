mod vertex_array_object;
pub mod buffer;
pub mod debug;
pub mod shader;
pub mod texture;

pub use vertex_array_object::*;

use num_enum::FromPrimitive;

pub trait OpenGLObject {
    fn handle(&self) -> u32;
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum GlErrorCode {
    InvalidEnum = 0x0500,
    InvalidValue = 0x0501,
    InvalidOperation = 0x0502,
    StackOverflow = 0x0503,
    StackUnderflow = 0x0504,
    OutOfMemory = 0x0505,
    InvalidFramebufferOperation = 0x0506,
    ContextLost = 0x0507,
    #[num_enum(catch_all)]
    Unknown(u32),
}

/// Upper bound on how many queued errors are drained per check, some drivers
/// keep returning `GL_CONTEXT_LOST` forever.
const MAX_DRAINED_ERRORS: usize = 16;

/// Drains the GL error queue, logging every pending code.
pub fn check_errors() -> crate::Result<()> {
    let mut codes = Vec::new();

    while codes.len() < MAX_DRAINED_ERRORS {
        let raw = unsafe { gl::GetError() };
        if raw == gl::NO_ERROR {
            break;
        }

        let code = GlErrorCode::from(raw);
        error!("OpenGL error: {:?} (0x{:04X})", code, raw);
        codes.push(code);
    }

    if codes.is_empty() {
        Ok(())
    } else {
        Err(crate::Error::Gl(codes))
    }
}

/// Reads one of the `glGetString` values, e.g. `gl::VERSION`.
pub fn get_string(name: u32) -> String {
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            String::new()
        } else {
            std::ffi::CStr::from_ptr(ptr as *const _)
                .to_string_lossy()
                .into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_convert_from_raw_values() {
        assert_eq!(
            GlErrorCode::from(gl::INVALID_OPERATION),
            GlErrorCode::InvalidOperation
        );
        assert_eq!(GlErrorCode::from(gl::OUT_OF_MEMORY), GlErrorCode::OutOfMemory);
        assert_eq!(
            GlErrorCode::from(gl::INVALID_FRAMEBUFFER_OPERATION),
            GlErrorCode::InvalidFramebufferOperation
        );
    }

    #[test]
    fn unknown_error_codes_keep_their_raw_value() {
        assert_eq!(GlErrorCode::from(0x9999), GlErrorCode::Unknown(0x9999));
        assert_eq!(GlErrorCode::from(gl::NO_ERROR), GlErrorCode::Unknown(0));
    }
}
