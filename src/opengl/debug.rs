use gl::types::{GLchar, GLenum, GLsizei, GLuint};
use std::ffi::c_void;

extern "system" fn debug_message(
    source: GLenum,
    ty: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    _user: *mut c_void,
) {
    let message = if message.is_null() {
        String::new()
    } else if length < 0 {
        unsafe { std::ffi::CStr::from_ptr(message) }
            .to_string_lossy()
            .into_owned()
    } else {
        let bytes = unsafe { std::slice::from_raw_parts(message as *const u8, length as usize) };
        String::from_utf8_lossy(bytes).into_owned()
    };

    let level = match severity {
        gl::DEBUG_SEVERITY_HIGH => log::Level::Error,
        gl::DEBUG_SEVERITY_MEDIUM => log::Level::Warn,
        gl::DEBUG_SEVERITY_LOW => log::Level::Info,
        _ => log::Level::Debug,
    };

    log!(
        target: "opengl",
        level,
        "[{} / {} #{}] {}",
        source_name(source),
        type_name(ty),
        id,
        message
    );
}

fn source_name(source: GLenum) -> &'static str {
    match source {
        gl::DEBUG_SOURCE_API => "api",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "window system",
        gl::DEBUG_SOURCE_SHADER_COMPILER => "shader compiler",
        gl::DEBUG_SOURCE_THIRD_PARTY => "third party",
        gl::DEBUG_SOURCE_APPLICATION => "application",
        _ => "other",
    }
}

fn type_name(ty: GLenum) -> &'static str {
    match ty {
        gl::DEBUG_TYPE_ERROR => "error",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "deprecated",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "undefined behavior",
        gl::DEBUG_TYPE_PORTABILITY => "portability",
        gl::DEBUG_TYPE_PERFORMANCE => "performance",
        gl::DEBUG_TYPE_MARKER => "marker",
        _ => "other",
    }
}

/// Whether the current context was created with `GL_CONTEXT_FLAG_DEBUG_BIT`.
pub fn is_debug_context() -> bool {
    let mut flags = 0;
    unsafe { gl::GetIntegerv(gl::CONTEXT_FLAGS, &mut flags) };

    ((flags as u32) & gl::CONTEXT_FLAG_DEBUG_BIT) != 0
}

/// Routes `GL_DEBUG_OUTPUT` messages into the `log` facade.
pub fn install_message_callback() {
    unsafe {
        gl::Enable(gl::DEBUG_OUTPUT);
        gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        gl::DebugMessageCallback(Some(debug_message), std::ptr::null());
        gl::DebugMessageControl(
            gl::DONT_CARE,
            gl::DONT_CARE,
            gl::DEBUG_SEVERITY_NOTIFICATION,
            0,
            std::ptr::null(),
            gl::FALSE,
        );
    }
}
