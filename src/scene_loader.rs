use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::Deserialize;

use gl_wrapper::renderer::PolygonMode;

use crate::scene::{Color, Quad, Scene, CORNERS_PER_QUAD};

pub struct SceneLoader {}

impl SceneLoader {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Scene, LoaderError> {
        let scene_str = std::fs::read_to_string(path).map_err(LoaderError::InputError)?;

        Self::load_from_str(&scene_str)
    }

    pub fn load_from_str(scene_str: &str) -> Result<Scene, LoaderError> {
        let json: SceneFile = json5::from_str(scene_str).map_err(LoaderError::FormatError)?;

        if json.quads.is_empty() {
            return Err(LoaderError::Empty);
        }

        let clear_color = match &json.clear_color {
            Some(c) => arr_to_color(c, "clear_color")?,
            None => Color::DARK_TEAL,
        };

        let mut scene = Scene::new(clear_color);
        scene.polygon_mode = json.mode.into();

        for stub in &json.quads {
            scene = scene.push(build_quad(stub)?);
        }

        Ok(scene)
    }
}

fn build_quad(stub: &QuadStub) -> Result<Quad, LoaderError> {
    if stub.corners.len() != CORNERS_PER_QUAD {
        return Err(LoaderError::VectorLength("corners", stub.corners.len()));
    }

    let mut corners = [[0.0; 3]; CORNERS_PER_QUAD];
    for (corner, arr) in corners.iter_mut().zip(&stub.corners) {
        *corner = arr_to_position(arr)?;
    }

    let color = arr_to_color(&stub.color, "color")?;

    let mut quad = Quad::new(corners, color);

    if let Some(triangles) = &stub.triangles {
        if triangles.len() != 2 {
            return Err(LoaderError::VectorLength("triangles", triangles.len()));
        }

        if let Some(index) = Quad::foreign_index(triangles) {
            return Err(LoaderError::TriangleIndex(index));
        }

        quad = quad.with_triangles([triangles[0], triangles[1]]);
    }

    Ok(quad)
}

fn arr_to_position(arr: &[f32]) -> Result<[f32; 3], LoaderError> {
    match *arr {
        [x, y] => Ok([x, y, 0.0]),
        [x, y, z] => Ok([x, y, z]),
        _ => Err(LoaderError::VectorLength("corner", arr.len())),
    }
}

fn arr_to_color(arr: &[f32], name: &'static str) -> Result<Color, LoaderError> {
    match *arr {
        [r, g, b] => Ok(Color::new(r, g, b, 1.0)),
        [r, g, b, a] => Ok(Color::new(r, g, b, a)),
        _ => Err(LoaderError::VectorLength(name, arr.len())),
    }
}

#[derive(Debug)]
pub enum LoaderError {
    InputError(std::io::Error),
    FormatError(json5::Error),
    VectorLength(&'static str, usize),
    TriangleIndex(u32),
    Empty,
}

impl Display for LoaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputError(e) => f.write_fmt(format_args!("{e}")),
            Self::FormatError(e) => f.write_fmt(format_args!("{e}")),
            Self::VectorLength(name, len) => {
                f.write_fmt(format_args!("wrong number of elements in {name}: {len}"))
            }
            Self::TriangleIndex(i) => {
                f.write_fmt(format_args!("triangle index {i} is not a quad corner"))
            }
            Self::Empty => f.write_str("scene has no quads"),
        }
    }
}

impl Error for LoaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputError(e) => Some(e),
            Self::FormatError(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SceneFile {
    clear_color: Option<Vec<f32>>,
    #[serde(default)]
    mode: ModeStub,
    quads: Vec<QuadStub>,
}

#[derive(Debug, Deserialize)]
struct QuadStub {
    corners: Vec<Vec<f32>>,
    color: Vec<f32>,
    triangles: Option<Vec<[u32; 3]>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ModeStub {
    #[default]
    Line,
    Fill,
}

impl From<ModeStub> for PolygonMode {
    fn from(m: ModeStub) -> Self {
        match m {
            ModeStub::Line => Self::Line,
            ModeStub::Fill => Self::Fill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_scene_equivalent() {
        let scene = SceneLoader::load_from_str(
            r#"{
                // same layout as the built-in scene
                clear_color: [0.2, 0.3, 0.3],
                quads: [
                    {
                        corners: [[-0.9, -0.5], [-0.4, -0.5], [-0.4, 0.5], [-0.9, 0.5]],
                        color: [1.0, 0.41176, 0.70588],
                    },
                    {
                        corners: [[0.9, -0.5, 0.0], [0.4, -0.5, 0.0], [0.4, 0.5, 0.0], [0.9, 0.5, 0.0]],
                        color: [0.0, 0.749, 1.0, 1.0],
                        triangles: [[0, 1, 3], [1, 2, 3]],
                    },
                ],
            }"#,
        )
        .unwrap();

        assert_eq!(scene, Scene::default());
    }

    #[test]
    fn fill_mode() {
        let scene = SceneLoader::load_from_str(
            r#"{
                mode: "fill",
                quads: [{ corners: [[0, 0], [1, 0], [1, 1], [0, 1]], color: [1, 1, 1] }],
            }"#,
        )
        .unwrap();

        assert_eq!(scene.polygon_mode, PolygonMode::Fill);
        assert_eq!(scene.clear_color, Color::DARK_TEAL);
        assert_eq!(scene.quads[0].triangles, Quad::DEFAULT_TRIANGLES);
    }

    #[test]
    fn rejects_bad_arity() {
        let res = SceneLoader::load_from_str(
            r#"{ quads: [{ corners: [[0, 0], [1, 0], [1, 1]], color: [1, 1, 1] }] }"#,
        );
        assert!(matches!(res, Err(LoaderError::VectorLength("corners", 3))));

        let res = SceneLoader::load_from_str(
            r#"{ quads: [{ corners: [[0, 0], [1, 0], [1, 1], [0, 1]], color: [1, 1] }] }"#,
        );
        assert!(matches!(res, Err(LoaderError::VectorLength("color", 2))));

        let res = SceneLoader::load_from_str(
            r#"{ quads: [{ corners: [[0], [1, 0], [1, 1], [0, 1]], color: [1, 1, 1] }] }"#,
        );
        assert!(matches!(res, Err(LoaderError::VectorLength("corner", 1))));

        let res = SceneLoader::load_from_str(
            r#"{
                quads: [{
                    corners: [[0, 0], [1, 0], [1, 1], [0, 1]],
                    color: [1, 1, 1],
                    triangles: [[0, 1, 2], [2, 3, 0], [0, 1, 3]],
                }],
            }"#,
        );
        assert!(matches!(res, Err(LoaderError::VectorLength("triangles", 3))));
    }

    #[test]
    fn bundled_scene_matches_default() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/two_quads.json5");
        let scene = SceneLoader::load_from_path(path).unwrap();

        assert_eq!(scene, Scene::default());
    }

    #[test]
    fn rejects_foreign_triangle_index() {
        let res = SceneLoader::load_from_str(
            r#"{
                quads: [{
                    corners: [[0, 0], [1, 0], [1, 1], [0, 1]],
                    color: [1, 1, 1],
                    triangles: [[0, 1, 2], [2, 3, 4]],
                }],
            }"#,
        );

        assert!(matches!(res, Err(LoaderError::TriangleIndex(4))));
    }

    #[test]
    fn rejects_empty_and_malformed() {
        let res = SceneLoader::load_from_str("{ quads: [] }");
        assert!(matches!(res, Err(LoaderError::Empty)));

        let res = SceneLoader::load_from_str("{ quads: ");
        assert!(matches!(res, Err(LoaderError::FormatError(_))));
    }

    #[test]
    fn missing_file() {
        let res = SceneLoader::load_from_path("/nonexistent/scene.json5");

        assert!(matches!(res, Err(LoaderError::InputError(_))));
    }
}
