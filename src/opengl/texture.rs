use super::OpenGLObject;
use std::path::Path;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest = 9728,
    Linear = 9729,
}

pub struct Texture2D {
    handle: u32,
    width: u32,
    height: u32,
}

impl Texture2D {
    fn allocate(width: u32, height: u32, internal_format: u32, filter: TextureFilter) -> Self {
        let mut handle = 0;
        unsafe {
            gl::CreateTextures(gl::TEXTURE_2D, 1, &mut handle);
            gl::TextureParameteri(handle, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as i32);
            gl::TextureParameteri(handle, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as i32);
            gl::TextureParameteri(handle, gl::TEXTURE_MIN_FILTER, filter as i32);
            gl::TextureParameteri(handle, gl::TEXTURE_MAG_FILTER, filter as i32);
            gl::TextureStorage2D(
                handle,
                1,
                internal_format,
                width as i32,
                height as i32,
            );
        }

        Self {
            handle,
            width,
            height,
        }
    }

    /// Uploads `width * height` float RGBA texels, rows first.
    pub fn from_rgba32f(
        width: u32,
        height: u32,
        texels: &[[f32; 4]],
        filter: TextureFilter,
    ) -> crate::Result<Self> {
        assert_eq!(
            texels.len(),
            (width * height) as usize,
            "Texel count must match the texture dimensions."
        );

        let texture = Self::allocate(width, height, gl::RGBA32F, filter);
        unsafe {
            gl::TextureSubImage2D(
                texture.handle(),
                0,
                0,
                0,
                width as i32,
                height as i32,
                gl::RGBA,
                gl::FLOAT,
                texels.as_ptr() as *const _,
            );
        }
        crate::opengl::check_errors()?;

        Ok(texture)
    }

    pub fn from_image(image: &image::RgbaImage, filter: TextureFilter) -> crate::Result<Self> {
        let (width, height) = image.dimensions();

        let texture = Self::allocate(width, height, gl::RGBA8, filter);
        unsafe {
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TextureSubImage2D(
                texture.handle(),
                0,
                0,
                0,
                width as i32,
                height as i32,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                image.as_raw().as_ptr() as *const _,
            );
        }
        crate::opengl::check_errors()?;

        Ok(texture)
    }

    /// Decodes an image file and uploads it as RGBA8.
    pub fn load(path: impl AsRef<Path>, filter: TextureFilter) -> crate::Result<Self> {
        let path = path.as_ref();
        let texture = Self::from_image(&load_rgba(path)?, filter)?;
        info!(
            "Loaded texture {} ({}x{})",
            path.display(),
            texture.width(),
            texture.height()
        );

        Ok(texture)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bind(&self, unit: u32) {
        unsafe { gl::BindTextureUnit(unit, self.handle()) };
    }
}

/// Reads an image file from disk and converts it to 8-bit RGBA.
pub fn load_rgba(path: &Path) -> crate::Result<image::RgbaImage> {
    let bytes = std::fs::read(path)?;
    let image = image::load_from_memory(&bytes)?;

    Ok(image.to_rgba8())
}

impl OpenGLObject for Texture2D {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        unsafe { gl::DeleteTextures(1, &self.handle) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_match_gl_constants() {
        assert_eq!(TextureFilter::Nearest as u32, gl::NEAREST);
        assert_eq!(TextureFilter::Linear as u32, gl::LINEAR);
    }

    #[test]
    fn missing_image_is_an_io_error() {
        let result = load_rgba(Path::new("does/not/exist.png"));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn garbage_image_is_a_decode_error() {
        let path = std::env::temp_dir().join("gl_tutorials_not_an_image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let result = load_rgba(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(crate::Error::Image(_))));
    }

    #[test]
    fn bundled_picture_decodes() {
        let image = load_rgba(Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/assets/picture.png"
        )))
        .unwrap();

        assert!(image.width() > 0 && image.height() > 0);
    }
}
