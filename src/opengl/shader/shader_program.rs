use crate::opengl::OpenGLObject;
use std::collections::BTreeMap;
use std::ffi::CString;

pub trait ShaderType {
    const SHADER_TYPE: u32;
    const NAME: &'static str;
}

pub enum VertexStage {}
impl ShaderType for VertexStage {
    const SHADER_TYPE: u32 = gl::VERTEX_SHADER;
    const NAME: &'static str = "vertex";
}

pub enum FragmentStage {}
impl ShaderType for FragmentStage {
    const SHADER_TYPE: u32 = gl::FRAGMENT_SHADER;
    const NAME: &'static str = "fragment";
}

/// A separable program holding a single shader stage.
pub struct ShaderProgram<T: ShaderType> {
    handle: u32,
    uniforms: BTreeMap<String, i32>,
    marker: std::marker::PhantomData<T>,
}

impl<T: ShaderType> ShaderProgram<T> {
    fn get_info_log(handle: u32) -> Option<String> {
        let mut log_len = 0;
        unsafe { gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut log_len) };

        if log_len > 0 {
            let mut log = vec![0u8; log_len as usize];
            unsafe {
                gl::GetProgramInfoLog(
                    handle,
                    log.len() as i32,
                    &mut log_len,
                    log.as_mut_ptr() as *mut _,
                )
            };
            log.truncate(log_len.max(0) as usize);

            Some(String::from_utf8_lossy(&log).trim_end().to_owned())
        } else {
            None
        }
    }

    pub fn new(program_strings: &[&str]) -> crate::Result<Self> {
        let sources = program_strings
            .iter()
            .map(|source| CString::new(*source))
            .collect::<Result<Vec<_>, _>>()?;
        let source_ptrs = sources.iter().map(|s| s.as_ptr()).collect::<Vec<_>>();

        unsafe {
            let handle = gl::CreateShaderProgramv(
                T::SHADER_TYPE,
                source_ptrs.len() as i32,
                source_ptrs.as_ptr(),
            );

            let mut linked = 0;
            gl::GetProgramiv(handle, gl::LINK_STATUS, &mut linked);
            if linked == 0 {
                let log = Self::get_info_log(handle).unwrap_or_default();
                gl::DeleteProgram(handle);

                return Err(crate::Error::ShaderCompilation {
                    stage: T::NAME,
                    log,
                });
            } else if let Some(info_log) = Self::get_info_log(handle) {
                if !info_log.is_empty() {
                    warn!("{} program compiled with warnings: {}", T::NAME, info_log);
                }
            }

            let uniforms = Self::collect_uniforms(handle);
            debug!(
                "Identified {} uniforms for {} program: {:?}",
                uniforms.len(),
                T::NAME,
                uniforms.keys().collect::<Vec<_>>()
            );

            Ok(Self {
                handle,
                uniforms,
                marker: std::marker::PhantomData,
            })
        }
    }

    unsafe fn collect_uniforms(handle: u32) -> BTreeMap<String, i32> {
        let mut uniforms = BTreeMap::new();
        let mut uniform_count = 0;
        let mut max_uniform_len = 0;
        gl::GetProgramiv(handle, gl::ACTIVE_UNIFORMS, &mut uniform_count);
        gl::GetProgramiv(handle, gl::ACTIVE_UNIFORM_MAX_LENGTH, &mut max_uniform_len);

        for index in 0..(uniform_count.max(0) as u32) {
            let mut name_buffer = vec![0u8; max_uniform_len.max(1) as usize];
            let mut name_len = 0;
            gl::GetActiveUniformName(
                handle,
                index,
                name_buffer.len() as i32,
                &mut name_len,
                name_buffer.as_mut_ptr() as *mut _,
            );
            name_buffer.truncate(name_len.max(0) as usize);

            let Ok(name) = String::from_utf8(name_buffer) else {
                warn!("Skipping uniform #{} with a non UTF-8 name.", index);
                continue;
            };
            let Ok(c_name) = CString::new(name.as_str()) else {
                continue;
            };

            // Uniform block members report no location.
            let location = gl::GetUniformLocation(handle, c_name.as_ptr());
            if location < 0 {
                continue;
            }

            if let Some(base) = name.strip_suffix("[0]") {
                uniforms.insert(base.to_owned(), location);
            }
            uniforms.insert(name, location);
        }

        uniforms
    }

    pub fn get_uniform(&self, name: &str) -> Option<i32> {
        self.uniforms.get(name).copied()
    }

    pub fn set_uniform<U: super::Uniform>(&self, name: &str, value: &U) -> bool {
        match self.get_uniform(name) {
            Some(location) => {
                value.apply(self.handle(), location);
                true
            }
            None => false,
        }
    }
}

impl<T: ShaderType> OpenGLObject for ShaderProgram<T> {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl<T: ShaderType> Drop for ShaderProgram<T> {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.handle) };
    }
}
