use super::OpenGLObject;
use bytemuck::Pod;
use std::mem::size_of;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferDraw {
    Stream = 35040,
    Static = 35044,
    Dynamic = 35048,
}

pub struct Buffer<T: Pod> {
    handle: u32,
    data_len: usize,
    draw: BufferDraw,
    marker: std::marker::PhantomData<T>,
}

impl<T: Pod> Buffer<T> {
    fn new(draw: BufferDraw) -> Self {
        let mut handle = 0;

        unsafe { gl::CreateBuffers(1, &mut handle) };

        Self {
            handle,
            data_len: 0,
            draw,
            marker: std::marker::PhantomData,
        }
    }

    pub fn new_data(data: &[T], draw: BufferDraw) -> Self {
        let mut buffer = Self::new(draw);
        buffer.set_data(data);

        buffer
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    /// Reallocates the buffer storage and uploads `data` into it.
    pub fn set_data(&mut self, data: &[T]) {
        self.data_len = data.len();

        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe {
            gl::NamedBufferData(
                self.handle(),
                bytes.len() as isize,
                bytes.as_ptr() as *const _,
                self.draw as u32,
            )
        };
    }

    /// Overwrites `data.len()` elements starting at element `offset`.
    pub fn sub_data(&mut self, offset: usize, data: &[T]) {
        assert!(
            fits_range(offset, data.len(), self.data_len),
            "Offset + data must not exceed the total length of the buffer."
        );

        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe {
            gl::NamedBufferSubData(
                self.handle(),
                (offset * size_of::<T>()) as isize,
                bytes.len() as isize,
                bytes.as_ptr() as *const _,
            )
        };
    }
}

fn fits_range(offset: usize, len: usize, total: usize) -> bool {
    offset.checked_add(len).map_or(false, |end| end <= total)
}

impl<T: Pod> OpenGLObject for Buffer<T> {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl<T: Pod> Drop for Buffer<T> {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.handle) };
    }
}
