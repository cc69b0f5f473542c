//! Interleaved vertex layouts shared by the demos.
//!
//! Fields are plain `f32` arrays so the structs pack without SIMD padding; the
//! attribute tables are built from `offset_of!` so they cannot drift from the
//! struct definitions.

use crate::opengl::{Vertex, VertexAttribute};
use bytemuck::{Pod, Zeroable};
use std::mem::offset_of;

pub const POSITION_LOCATION: u32 = 0;
pub const COLOR_LOCATION: u32 = 1;
pub const NORMAL_LOCATION: u32 = 2;
pub const TEX_COORD_LOCATION: u32 = 3;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 4],
}

impl Vertex for PositionVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[VertexAttribute::new(
        POSITION_LOCATION,
        4,
        offset_of!(PositionVertex, position),
    )];
}

/// Position-only 2D vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Position2dVertex {
    pub position: [f32; 2],
}

impl Vertex for Position2dVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[VertexAttribute::new(
        POSITION_LOCATION,
        2,
        offset_of!(Position2dVertex, position),
    )];
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Color2dVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex for Color2dVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute::new(POSITION_LOCATION, 2, offset_of!(Color2dVertex, position)),
        VertexAttribute::new(COLOR_LOCATION, 4, offset_of!(Color2dVertex, color)),
    ];
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl Vertex for ColorVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute::new(POSITION_LOCATION, 4, offset_of!(ColorVertex, position)),
        VertexAttribute::new(COLOR_LOCATION, 4, offset_of!(ColorVertex, color)),
    ];
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TextureVertex {
    pub position: [f32; 4],
    pub tex_coord: [f32; 2],
}

impl Vertex for TextureVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute::new(POSITION_LOCATION, 4, offset_of!(TextureVertex, position)),
        VertexAttribute::new(TEX_COORD_LOCATION, 2, offset_of!(TextureVertex, tex_coord)),
    ];
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct NormalVertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
    pub normal: [f32; 3],
}

impl Vertex for NormalVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute::new(POSITION_LOCATION, 4, offset_of!(NormalVertex, position)),
        VertexAttribute::new(COLOR_LOCATION, 4, offset_of!(NormalVertex, color)),
        VertexAttribute::new(NORMAL_LOCATION, 3, offset_of!(NormalVertex, normal)),
    ];
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct NormalTextureVertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl Vertex for NormalTextureVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute::new(
            POSITION_LOCATION,
            4,
            offset_of!(NormalTextureVertex, position),
        ),
        VertexAttribute::new(COLOR_LOCATION, 4, offset_of!(NormalTextureVertex, color)),
        VertexAttribute::new(NORMAL_LOCATION, 3, offset_of!(NormalTextureVertex, normal)),
        VertexAttribute::new(
            TEX_COORD_LOCATION,
            2,
            offset_of!(NormalTextureVertex, tex_coord),
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    const FLOAT: usize = size_of::<f32>();

    fn assert_tightly_packed<V: Vertex>(floats: usize) {
        assert_eq!(size_of::<V>(), floats * FLOAT);
        assert_eq!(V::stride() as usize, size_of::<V>());

        let mut expected_offset = 0;
        for attribute in V::ATTRIBUTES {
            assert_eq!(attribute.offset, expected_offset);
            assert!(attribute.end() as usize <= size_of::<V>());
            expected_offset = attribute.end();
        }
        assert_eq!(expected_offset as usize, size_of::<V>());
    }

    #[test]
    fn vertex_sizes_match_attribute_layouts() {
        assert_tightly_packed::<PositionVertex>(4);
        assert_tightly_packed::<Position2dVertex>(2);
        assert_tightly_packed::<Color2dVertex>(6);
        assert_tightly_packed::<ColorVertex>(8);
        assert_tightly_packed::<TextureVertex>(6);
        assert_tightly_packed::<NormalVertex>(11);
        assert_tightly_packed::<NormalTextureVertex>(13);
    }

    #[test]
    fn attribute_locations_are_unique_per_vertex() {
        let locations = NormalTextureVertex::ATTRIBUTES
            .iter()
            .map(|attribute| attribute.location)
            .collect::<Vec<_>>();

        assert_eq!(
            locations,
            vec![
                POSITION_LOCATION,
                COLOR_LOCATION,
                NORMAL_LOCATION,
                TEX_COORD_LOCATION
            ]
        );
    }

    #[test]
    fn vertices_cast_to_bytes_in_field_order() {
        let vertex = ColorVertex {
            position: [1.0, 2.0, 3.0, 4.0],
            color: [5.0, 6.0, 7.0, 8.0],
        };
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&vertex));

        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }
}
