use super::vertex::{
    Color2dVertex, ColorVertex, NormalVertex, Position2dVertex, TextureVertex,
};

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

const TRIANGLE_CORNERS: [[f32; 2]; 3] = [[-0.5, -0.5], [-0.5, 0.5], [0.5, -0.5]];
const TRIANGLE_COLORS: [[f32; 4]; 3] = [RED, GREEN, BLUE];

pub fn triangle_2d() -> [Position2dVertex; 3] {
    TRIANGLE_CORNERS.map(|position| Position2dVertex { position })
}

pub fn color_triangle_2d() -> [Color2dVertex; 3] {
    let mut vertices = [Color2dVertex {
        position: [0.0; 2],
        color: [0.0; 4],
    }; 3];
    for (vertex, (position, color)) in vertices
        .iter_mut()
        .zip(TRIANGLE_CORNERS.iter().zip(TRIANGLE_COLORS.iter()))
    {
        vertex.position = *position;
        vertex.color = *color;
    }

    vertices
}

pub fn color_triangle() -> [ColorVertex; 3] {
    color_triangle_2d().map(|vertex| ColorVertex {
        position: [vertex.position[0], vertex.position[1], 0.0, 1.0],
        color: vertex.color,
    })
}

/// Red, green and blue corners at (-1, 0), (0, 1) and (1, 0).
pub fn wide_color_triangle() -> [ColorVertex; 3] {
    let corners = [[-1.0, 0.0], [0.0, 1.0], [1.0, 0.0]];

    let mut vertices = color_triangle();
    for (vertex, [x, y]) in vertices.iter_mut().zip(corners) {
        vertex.position = [x, y, 0.0, 1.0];
    }

    vertices
}

//       6-------------5
//     / .           / |
//   2-------------1   |
//   |   .         |   |
//   |   7 . . . . | . 4
//   | .           | /
//   3-------------0
const CUBE_CORNERS: [([f32; 3], [f32; 4]); 8] = [
    ([1.0, -1.0, 1.0], YELLOW),
    ([1.0, 1.0, 1.0], GREEN),
    ([-1.0, 1.0, 1.0], YELLOW),
    ([-1.0, -1.0, 1.0], RED),
    ([1.0, -1.0, -1.0], GREEN),
    ([1.0, 1.0, -1.0], BLUE),
    ([-1.0, 1.0, -1.0], RED),
    ([-1.0, -1.0, -1.0], BLUE),
];

/// Corner indices of the six cube faces: front, back, left, right, top, bottom.
pub const CUBE_QUADS: [u32; 24] = [
    0, 1, 2, 3, // front
    7, 6, 5, 4, // back
    3, 2, 6, 7, // left
    4, 5, 1, 0, // right
    1, 5, 6, 2, // top
    4, 0, 3, 7, // bottom
];

pub fn color_cube() -> Vec<ColorVertex> {
    CUBE_CORNERS
        .iter()
        .map(|&([x, y, z], color)| ColorVertex {
            position: [x, y, z, 1.0],
            color,
        })
        .collect()
}

/// Cube corners with normals pointing away from the centre.
pub fn normal_cube() -> Vec<NormalVertex> {
    CUBE_CORNERS
        .iter()
        .map(|&([x, y, z], color)| NormalVertex {
            position: [x, y, z, 1.0],
            color,
            normal: [x, y, z],
        })
        .collect()
}

/// Splits every quad `a b c d` into the triangles `a b c` and `a c d`.
pub fn quads_to_triangles(quads: &[u32]) -> Vec<u32> {
    assert!(
        quads.len() % 4 == 0,
        "Quad index list length must be a multiple of 4."
    );

    quads
        .chunks_exact(4)
        .flat_map(|quad| [quad[0], quad[1], quad[2], quad[0], quad[2], quad[3]])
        .collect()
}

pub fn quad_indices() -> Vec<u32> {
    quads_to_triangles(&[0, 1, 2, 3])
}

/// A `[-1, 1]²` quad in the z=0 plane. `flip_v` is for images stored top row first.
pub fn slab(flip_v: bool) -> [TextureVertex; 4] {
    let corners = [[-1.0, -1.0], [-1.0, 1.0], [1.0, 1.0], [1.0, -1.0]];
    let tex_coords = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];

    let mut vertices = [TextureVertex {
        position: [0.0; 4],
        tex_coord: [0.0; 2],
    }; 4];
    for (vertex, (&[x, y], &[u, v])) in vertices
        .iter_mut()
        .zip(corners.iter().zip(tex_coords.iter()))
    {
        vertex.position = [x, y, 0.0, 1.0];
        vertex.tex_coord = if flip_v { [u, 1.0 - v] } else { [u, v] };
    }

    vertices
}

/// A `w` by `h` grid over `[-1, 1)²`, stored column-major (`index = i * h + j`).
///
/// The whole homogeneous position is multiplied by `scale`, w included.
pub fn grid_vertices(w: u32, h: u32, scale: f32) -> Vec<ColorVertex> {
    let mut vertices = Vec::with_capacity((w * h) as usize);

    for i in 0..w {
        let tu = -1.0 + 2.0 * i as f32 / w as f32;

        for j in 0..h {
            let tv = -1.0 + 2.0 * j as f32 / h as f32;

            let position = glam::Vec4::new(tu, tv, 0.0, 1.0) * scale;
            vertices.push(ColorVertex {
                position: position.to_array(),
                color: [tu.abs(), 1.0, tv.abs(), 1.0],
            });
        }
    }

    vertices
}

/// Strip indices joining neighbouring grid columns, with degenerate joins between columns.
pub fn grid_strip_indices(w: u32, h: u32) -> Vec<u32> {
    if h == 0 {
        return Vec::new();
    }

    let mut indices = Vec::with_capacity((w.saturating_sub(1) * (2 * h + 2)) as usize);

    for i in 0..w.saturating_sub(1) {
        for j in 0..h {
            let index = i * h + j;

            indices.push(index);
            indices.push(index + h);

            if j == h - 1 {
                indices.push(index + h);
            }
        }
        indices.push((i + 1) * h);
    }

    indices
}

/// Moves every grid vertex onto the travelling sine wave for `time`.
pub fn animate_wave(vertices: &mut [ColorVertex], w: u32, h: u32, time: f32) {
    assert!(
        vertices.len() >= (w * h) as usize,
        "Wave grid needs {} vertices, got {}.",
        w * h,
        vertices.len()
    );

    let count = (w * h) as f32;

    for i in 0..w {
        for j in 0..h {
            let index = i * h + j;
            let vertex = &mut vertices[index as usize];

            vertex.position[2] = (time + index as f32 / count * std::f32::consts::PI).sin();
            vertex.color = [i as f32 / w as f32, j as f32 / h as f32, 0.5, 0.5];
        }
    }
}

pub fn paint(vertices: &mut [ColorVertex], color: [f32; 4]) {
    for vertex in vertices {
        vertex.color = color;
    }
}

/// RGBA texels with a red ramp down the rows, a green ramp across, and alpha checkers.
///
/// The alpha toggles once per texel and once more per row, so rows only start
/// on alternating values when `h` is even. For odd `h` every row starts transparent.
pub fn checkerboard(w: u32, h: u32) -> Vec<[f32; 4]> {
    let mut texels = Vec::with_capacity((w * h) as usize);
    let mut checkered = false;

    for i in 0..w {
        let r = i as f32 / w as f32;

        for j in 0..h {
            let g = j as f32 / h as f32;

            texels.push([r, g, 0.0, if checkered { 1.0 } else { 0.0 }]);
            checkered = !checkered;
        }
        checkered = !checkered;
    }

    texels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangles_share_corners_and_colors() {
        let flat = triangle_2d();
        let colored = color_triangle();

        for (a, b) in flat.iter().zip(colored.iter()) {
            assert_eq!(a.position, [b.position[0], b.position[1]]);
            assert_eq!(b.position[2..], [0.0f32, 1.0]);
        }
        assert_eq!(colored[0].color, RED);
        assert_eq!(colored[1].color, GREEN);
        assert_eq!(colored[2].color, BLUE);
    }

    #[test]
    fn wide_triangle_sits_on_the_x_axis() {
        let triangle = wide_color_triangle();

        assert_eq!(triangle[0].position, [-1.0, 0.0, 0.0, 1.0]);
        assert_eq!(triangle[1].position, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(triangle[2].position, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(triangle.map(|vertex| vertex.color), [RED, GREEN, BLUE]);
    }

    #[test]
    fn cube_faces_reference_only_coplanar_corners() {
        let cube = color_cube();

        for face in CUBE_QUADS.chunks_exact(4) {
            let shared_axis = (0..3).find(|&axis| {
                let value = cube[face[0] as usize].position[axis];
                face.iter()
                    .all(|&index| cube[index as usize].position[axis] == value)
            });
            assert!(shared_axis.is_some(), "face {:?} is not planar", face);
        }
    }

    #[test]
    fn cube_normals_point_outwards() {
        for vertex in normal_cube() {
            let dot: f32 = (0..3)
                .map(|axis| vertex.position[axis] * vertex.normal[axis])
                .sum();
            assert!(dot > 0.0);
        }
    }

    #[test]
    fn quads_split_into_two_triangles() {
        assert_eq!(quads_to_triangles(&[4, 5, 6, 7]), vec![4, 5, 6, 4, 6, 7]);

        let triangles = quads_to_triangles(&CUBE_QUADS);
        assert_eq!(triangles.len(), 36);
        assert_eq!(&triangles[..6], &[0, 1, 2, 0, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn partial_quads_are_rejected() {
        quads_to_triangles(&[0, 1, 2]);
    }

    #[test]
    fn slab_flip_mirrors_v_only() {
        let upright = slab(false);
        let flipped = slab(true);

        for (a, b) in upright.iter().zip(flipped.iter()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.tex_coord[0], b.tex_coord[0]);
            assert_eq!(a.tex_coord[1], 1.0 - b.tex_coord[1]);
        }
        assert_eq!(flipped[0].tex_coord, [0.0, 1.0]);
    }

    #[test]
    fn grid_is_column_major_and_scaled() {
        let vertices = grid_vertices(10, 10, 5.0);

        assert_eq!(vertices.len(), 100);
        assert_eq!(vertices[0].position, [-5.0, -5.0, 0.0, 5.0]);
        // i = 0, j = 1
        assert_eq!(vertices[1].position[1], (-1.0 + 0.2) * 5.0);
        // i = 1, j = 0
        assert_eq!(vertices[10].position[0], (-1.0 + 0.2) * 5.0);
        assert_eq!(vertices[0].color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn grid_strip_stays_in_bounds() {
        let (w, h) = (10, 10);
        let indices = grid_strip_indices(w, h);

        assert_eq!(indices.len() as u32, (w - 1) * (2 * h + 2));
        assert!(indices.iter().all(|&index| index < w * h));
        assert_eq!(&indices[..4], &[0, 10, 1, 11]);
        // last row of the first column pair repeats, then jumps to the next column
        assert_eq!(&indices[18..22], &[9, 19, 19, 10]);
    }

    #[test]
    fn single_column_grid_has_no_strip() {
        assert!(grid_strip_indices(1, 10).is_empty());
        assert!(grid_strip_indices(0, 10).is_empty());
    }

    #[test]
    fn rowless_grid_has_no_strip() {
        assert!(grid_strip_indices(3, 0).is_empty());
    }

    #[test]
    #[should_panic(expected = "Wave grid needs 16 vertices")]
    fn wave_rejects_short_vertex_slices() {
        let mut vertices = grid_vertices(3, 3, 1.0);
        animate_wave(&mut vertices, 4, 4, 0.0);
    }

    #[test]
    fn wave_keeps_xy_and_homogeneous_w() {
        let mut vertices = grid_vertices(4, 4, 5.0);
        let before = vertices.clone();

        animate_wave(&mut vertices, 4, 4, 0.0);

        for (index, (old, new)) in before.iter().zip(vertices.iter()).enumerate() {
            assert_eq!(old.position[0], new.position[0]);
            assert_eq!(old.position[1], new.position[1]);
            assert_eq!(old.position[3], new.position[3]);

            let expected = (index as f32 / 16.0 * std::f32::consts::PI).sin();
            assert!((new.position[2] - expected).abs() < 1e-6);
        }
        assert_eq!(vertices[5].color, [0.25, 0.25, 0.5, 0.5]);
    }

    #[test]
    fn paint_recolors_every_vertex() {
        let mut vertices = grid_vertices(3, 3, 1.0);
        paint(&mut vertices, RED);

        assert!(vertices.iter().all(|vertex| vertex.color == RED));
    }

    #[test]
    fn checkerboard_alternates_in_both_directions() {
        let (w, h) = (24, 24);
        let texels = checkerboard(w, h);

        assert_eq!(texels.len(), 576);
        for i in 0..w {
            for j in 0..h {
                let texel = texels[(i * h + j) as usize];
                let expected_alpha = if (i + j) % 2 == 1 { 1.0 } else { 0.0 };

                assert_eq!(texel[3], expected_alpha, "texel ({}, {})", i, j);
                assert_eq!(texel[0], i as f32 / w as f32);
                assert_eq!(texel[1], j as f32 / h as f32);
            }
        }
    }

    #[test]
    fn odd_checkerboard_rows_all_start_transparent() {
        let (w, h) = (3, 3);
        let texels = checkerboard(w, h);

        let row_starts = (0..w)
            .map(|i| texels[(i * h) as usize][3])
            .collect::<Vec<_>>();
        assert_eq!(row_starts, vec![0.0, 0.0, 0.0]);
        // Still alternating along a row.
        assert_eq!(texels[1][3], 1.0);
    }
}
