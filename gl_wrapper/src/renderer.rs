use crate::geometry::Geometry;
use crate::program::Program;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PolygonMode {
    Fill,
    /// Wireframe, only triangle edges are rasterized
    #[default]
    Line,
}

impl PolygonMode {
    fn gl_enum(&self) -> gl::types::GLenum {
        match self {
            PolygonMode::Fill => gl::FILL,
            PolygonMode::Line => gl::LINE,
        }
    }
}

/// Contiguous run of the element buffer, counted in indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IndexRange {
    pub offset: usize,
    pub count: usize,
}

impl IndexRange {
    pub fn end(&self) -> usize {
        self.offset + self.count
    }

    /// Offset into the element buffer in bytes, for `u32` indices.
    pub fn byte_offset(&self) -> usize {
        self.offset * std::mem::size_of::<u32>()
    }
}

#[derive(Default)]
pub struct GlRenderer {
    current_program: u32,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self { current_program: 0 }
    }

    fn use_program(&mut self, program: &Program) {
        let p_id = program.get_id();
        if self.current_program != p_id {
            unsafe { gl::UseProgram(p_id) }
            self.current_program = p_id;
        }
    }

    /// Draws part of an indexed geometry.
    ///
    /// Ranges reaching past the element buffer are clamped.
    pub fn draw_indexed(&mut self, geometry: &Geometry, program: &Program, range: IndexRange) {
        if !geometry.is_indexed() || range.offset >= geometry.indices() {
            return;
        }

        let count = range.count.min(geometry.indices() - range.offset);

        self.use_program(program);

        unsafe {
            gl::BindVertexArray(geometry.vao());
            gl::DrawElements(
                gl::TRIANGLES,
                count as i32,
                gl::UNSIGNED_INT,
                range.byte_offset() as *const std::ffi::c_void,
            );
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn polygon_mode(&self, mode: PolygonMode) {
        unsafe {
            gl::PolygonMode(gl::FRONT_AND_BACK, mode.gl_enum());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_quad_starts_after_six_indices() {
        let range = IndexRange {
            offset: 6,
            count: 6,
        };

        assert_eq!(range.byte_offset(), 24);
        assert_eq!(range.end(), 12);
    }

    #[test]
    fn wireframe_is_default() {
        assert_eq!(PolygonMode::default(), PolygonMode::Line);
    }
}
