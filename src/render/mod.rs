pub mod camera;
pub mod geometry;
pub mod shaders;
pub mod transform;
pub mod vertex;

mod mesh;

pub use mesh::*;
