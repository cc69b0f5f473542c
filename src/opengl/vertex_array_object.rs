use super::{buffer::Buffer, OpenGLObject};
use bytemuck::Pod;
use std::mem::size_of;

/// One float attribute inside an interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: i32,
    pub offset: u32,
}

impl VertexAttribute {
    pub const fn new(location: u32, components: i32, offset: usize) -> Self {
        Self {
            location,
            components,
            offset: offset as u32,
        }
    }

    /// Byte offset just past the end of this attribute.
    pub const fn end(&self) -> u32 {
        self.offset + (self.components as u32) * (size_of::<f32>() as u32)
    }

    fn commit_vao_format(&self, vao_handle: u32, binding_index: u32) {
        unsafe {
            gl::EnableVertexArrayAttrib(vao_handle, self.location);
            gl::VertexArrayAttribFormat(
                vao_handle,
                self.location,
                self.components,
                gl::FLOAT,
                gl::FALSE,
                self.offset,
            );
            gl::VertexArrayAttribBinding(vao_handle, self.location, binding_index);
        }
    }
}

/// An interleaved vertex layout that can be fed to a vertex array.
pub trait Vertex: Pod {
    const ATTRIBUTES: &'static [VertexAttribute];

    fn stride() -> i32 {
        size_of::<Self>() as i32
    }
}

pub struct VertexArrayObject {
    handle: u32,
}

impl VertexArrayObject {
    pub fn new() -> Self {
        let mut handle = 0;
        unsafe { gl::CreateVertexArrays(1, &mut handle) };

        Self { handle }
    }

    /// Attaches `buffer` at `binding_index` and formats every attribute of `V` against it.
    pub fn bind_vertex_buffer<V: Vertex>(&mut self, binding_index: u32, buffer: &Buffer<V>) {
        for attribute in V::ATTRIBUTES {
            attribute.commit_vao_format(self.handle(), binding_index);
        }

        unsafe {
            gl::VertexArrayVertexBuffer(
                self.handle(),
                binding_index,
                buffer.handle(),
                0,
                V::stride(),
            )
        };
    }

    pub fn bind_element_buffer(&mut self, buffer: &Buffer<u32>) {
        unsafe { gl::VertexArrayElementBuffer(self.handle(), buffer.handle()) };
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.handle()) };
    }
}

impl Default for VertexArrayObject {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenGLObject for VertexArrayObject {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl Drop for VertexArrayObject {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.handle) };
    }
}
