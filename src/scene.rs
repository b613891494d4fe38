use gl_wrapper::renderer::{IndexRange, PolygonMode};

pub const CORNERS_PER_QUAD: usize = 4;
pub const INDICES_PER_QUAD: usize = 6;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const PINK: Color = Color::new(1.0, 0.41176, 0.70588, 1.0);
    pub const SKY_BLUE: Color = Color::new(0.0, 0.749, 1.0, 1.0);
    pub const DARK_TEAL: Color = Color::new(0.2, 0.3, 0.3, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Four corners in normalized device coordinates, split into two triangles.
///
/// Triangle indices are local to the quad and must be below [`CORNERS_PER_QUAD`].
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    pub corners: [[f32; 3]; CORNERS_PER_QUAD],
    pub triangles: [[u32; 3]; 2],
    pub color: Color,
}

impl Quad {
    pub const DEFAULT_TRIANGLES: [[u32; 3]; 2] = [[0, 1, 2], [2, 3, 0]];

    pub fn new(corners: [[f32; 3]; CORNERS_PER_QUAD], color: Color) -> Self {
        Self {
            corners,
            triangles: Self::DEFAULT_TRIANGLES,
            color,
        }
    }

    /// Panics in debug builds when an index is not a corner of this quad.
    pub fn with_triangles(mut self, triangles: [[u32; 3]; 2]) -> Self {
        debug_assert_eq!(Self::foreign_index(&triangles), None);
        self.triangles = triangles;
        self
    }

    /// First triangle index that does not name one of the four corners.
    pub fn foreign_index(triangles: &[[u32; 3]]) -> Option<u32> {
        triangles
            .iter()
            .flatten()
            .copied()
            .find(|&i| i as usize >= CORNERS_PER_QUAD)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub clear_color: Color,
    pub polygon_mode: PolygonMode,
    pub quads: Vec<Quad>,
}

impl Scene {
    pub fn new(clear_color: Color) -> Self {
        Self {
            clear_color,
            polygon_mode: PolygonMode::Line,
            quads: Vec::new(),
        }
    }

    pub fn push(mut self, quad: Quad) -> Self {
        self.quads.push(quad);
        self
    }

    /// Every corner of every quad, three floats each.
    pub fn vertices(&self) -> Vec<f32> {
        self.quads
            .iter()
            .flat_map(|q| q.corners.iter().flatten().copied())
            .collect()
    }

    /// Triangle indices of all quads, rebased onto the shared vertex list.
    pub fn indices(&self) -> Vec<u32> {
        self.quads
            .iter()
            .enumerate()
            .flat_map(|(i, q)| {
                let base = (i * CORNERS_PER_QUAD) as u32;
                q.triangles.iter().flatten().map(move |idx| base + idx)
            })
            .collect()
    }

    pub fn draw_ranges(&self) -> impl Iterator<Item = IndexRange> + '_ {
        (0..self.quads.len()).map(|i| IndexRange {
            offset: i * INDICES_PER_QUAD,
            count: INDICES_PER_QUAD,
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        let left = Quad::new(
            [
                [-0.9, -0.5, 0.0],
                [-0.4, -0.5, 0.0],
                [-0.4, 0.5, 0.0],
                [-0.9, 0.5, 0.0],
            ],
            Color::PINK,
        );

        // mirrored, so the diagonal runs the other way
        let right = Quad::new(
            [
                [0.9, -0.5, 0.0],
                [0.4, -0.5, 0.0],
                [0.4, 0.5, 0.0],
                [0.9, 0.5, 0.0],
            ],
            Color::SKY_BLUE,
        )
        .with_triangles([[0, 1, 3], [1, 2, 3]]);

        Scene::new(Color::DARK_TEAL).push(left).push(right)
    }
}
