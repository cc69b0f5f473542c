use crate::opengl::{
    buffer::{Buffer, BufferDraw},
    Vertex, VertexArrayObject,
};

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Lines = 1,
    LineStrip = 3,
    Triangles = 4,
    TriangleStrip = 5,
}

/// A vertex buffer, its optional index buffer and the vertex array describing them.
pub struct Mesh<V: Vertex> {
    vao: VertexArrayObject,
    vertices: Buffer<V>,
    indices: Option<Buffer<u32>>,
    primitive: Primitive,
}

impl<V: Vertex> Mesh<V> {
    fn new(vertices: &[V], draw: BufferDraw, primitive: Primitive) -> Self {
        let vertices = Buffer::new_data(vertices, draw);
        let mut vao = VertexArrayObject::new();
        vao.bind_vertex_buffer(0, &vertices);

        Self {
            vao,
            vertices,
            indices: None,
            primitive,
        }
    }

    pub fn new_static(vertices: &[V], primitive: Primitive) -> Self {
        Self::new(vertices, BufferDraw::Static, primitive)
    }

    /// A mesh whose vertices are rewritten every frame.
    pub fn new_dynamic(vertices: &[V], primitive: Primitive) -> Self {
        Self::new(vertices, BufferDraw::Dynamic, primitive)
    }

    pub fn with_indices(mut self, indices: &[u32]) -> Self {
        let element_buffer = Buffer::new_data(indices, BufferDraw::Static);
        self.vao.bind_element_buffer(&element_buffer);
        self.indices = Some(element_buffer);

        self
    }

    /// Replaces the vertex data in place. The vertex count must not grow.
    pub fn update_vertices(&mut self, vertices: &[V]) {
        self.vertices.sub_data(0, vertices);
    }

    pub fn draw(&self) {
        self.draw_as(self.primitive);
    }

    pub fn draw_as(&self, primitive: Primitive) {
        self.vao.bind();

        unsafe {
            match &self.indices {
                Some(indices) => gl::DrawElements(
                    primitive as u32,
                    indices.data_len() as i32,
                    gl::UNSIGNED_INT,
                    std::ptr::null(),
                ),
                None => gl::DrawArrays(primitive as u32, 0, self.vertices.data_len() as i32),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_match_gl_constants() {
        assert_eq!(Primitive::Lines as u32, gl::LINES);
        assert_eq!(Primitive::LineStrip as u32, gl::LINE_STRIP);
        assert_eq!(Primitive::Triangles as u32, gl::TRIANGLES);
        assert_eq!(Primitive::TriangleStrip as u32, gl::TRIANGLE_STRIP);
    }
}
