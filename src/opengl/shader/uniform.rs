use glam::{Mat3, Mat4, Vec3, Vec4};

/// A host value that can be written into a program uniform.
pub trait Uniform {
    fn apply(&self, program: u32, location: i32);
}

impl Uniform for f32 {
    fn apply(&self, program: u32, location: i32) {
        unsafe { gl::ProgramUniform1f(program, location, *self) };
    }
}

impl Uniform for i32 {
    fn apply(&self, program: u32, location: i32) {
        unsafe { gl::ProgramUniform1i(program, location, *self) };
    }
}

impl Uniform for Vec3 {
    fn apply(&self, program: u32, location: i32) {
        unsafe { gl::ProgramUniform3f(program, location, self.x, self.y, self.z) };
    }
}

impl Uniform for Vec4 {
    fn apply(&self, program: u32, location: i32) {
        unsafe { gl::ProgramUniform4f(program, location, self.x, self.y, self.z, self.w) };
    }
}

impl Uniform for Mat3 {
    fn apply(&self, program: u32, location: i32) {
        let cols = self.to_cols_array();
        unsafe { gl::ProgramUniformMatrix3fv(program, location, 1, gl::FALSE, cols.as_ptr()) };
    }
}

impl Uniform for Mat4 {
    fn apply(&self, program: u32, location: i32) {
        let cols = self.to_cols_array();
        unsafe { gl::ProgramUniformMatrix4fv(program, location, 1, gl::FALSE, cols.as_ptr()) };
    }
}
