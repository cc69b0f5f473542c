//! GLSL sources reused by several demos.
//!
//! Every program is compiled separately per stage, so vertex shaders redeclare
//! `gl_PerVertex` and stage interfaces are matched by location.

/// Clip-space positions in, vertex colour through.
pub const COLOR_VERTEX: &str = r#"
    #version 450 core

    layout (location = 0) in vec4 position;
    layout (location = 1) in vec4 color;

    out gl_PerVertex { vec4 gl_Position; };

    layout (location = 0) out vec4 vertex_color;

    void main() {
        vertex_color = color;
        gl_Position = position;
    }
"#;

/// Transforms by `projection * view * model * position` and passes the vertex colour through.
pub const MVP_COLOR_VERTEX: &str = r#"
    #version 450 core

    layout (location = 0) in vec4 position;
    layout (location = 1) in vec4 color;

    uniform mat4 model;
    uniform mat4 view;
    uniform mat4 projection;

    out gl_PerVertex { vec4 gl_Position; };

    layout (location = 0) out vec4 vertex_color;

    void main() {
        vertex_color = color;
        gl_Position = projection * view * model * position;
    }
"#;

pub const COLOR_FRAGMENT: &str = r#"
    #version 450 core

    layout (location = 0) in vec4 vertex_color;

    layout (location = 0) out vec4 f_color;

    void main() {
        f_color = vertex_color;
    }
"#;

pub const MVP_TEXTURE_VERTEX: &str = r#"
    #version 450 core

    layout (location = 0) in vec4 position;
    layout (location = 3) in vec2 tex_coord;

    uniform mat4 model;
    uniform mat4 view;
    uniform mat4 projection;

    out gl_PerVertex { vec4 gl_Position; };

    layout (location = 0) out vec2 v_tex_coord;

    void main() {
        v_tex_coord = tex_coord;
        gl_Position = projection * view * model * position;
    }
"#;

/// Samples texture unit `tex`.
pub const TEXTURE_FRAGMENT: &str = r#"
    #version 450 core

    uniform sampler2D tex;

    layout (location = 0) in vec2 v_tex_coord;

    layout (location = 0) out vec4 f_color;

    void main() {
        f_color = texture(tex, v_tex_coord);
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stages_redeclare_per_vertex_block() {
        for source in [COLOR_VERTEX, MVP_COLOR_VERTEX, MVP_TEXTURE_VERTEX] {
            assert!(source.contains("out gl_PerVertex { vec4 gl_Position; };"));
        }
    }

    #[test]
    fn mvp_stages_apply_model_first() {
        for source in [MVP_COLOR_VERTEX, MVP_TEXTURE_VERTEX] {
            assert!(source.contains("gl_Position = projection * view * model * position;"));
        }
    }
}
