use crate::scene::Color;

/// Passes the position attribute at location 0 straight through.
pub const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

/// Fragment stage painting every fragment with a constant color.
pub fn fragment_shader(color: Color) -> String {
    // `{:?}` keeps the decimal point on whole numbers, GLSL would read `1` as an int
    format!(
        "#version 330 core
out vec4 FragColor;

void main()
{{
    FragColor = vec4({:?}, {:?}, {:?}, {:?});
}}
",
        color.r, color.g, color.b, color.a
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_shader_reads_location_zero() {
        assert!(VERTEX_SHADER.starts_with("#version 330 core\n"));
        assert!(VERTEX_SHADER.contains("layout (location = 0) in vec3 aPos;"));
    }

    #[test]
    fn fragment_shader_embeds_color() {
        let src = fragment_shader(Color::PINK);

        assert!(src.starts_with("#version 330 core\n"));
        assert!(src.contains("FragColor = vec4(1.0, 0.41176, 0.70588, 1.0);"));
    }

    #[test]
    fn whole_numbers_stay_floats() {
        let src = fragment_shader(Color::new(0.0, 1.0, 0.0, 1.0));

        assert!(src.contains("vec4(0.0, 1.0, 0.0, 1.0)"));
    }
}
