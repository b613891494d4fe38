use gl_wrapper::geometry::{GBError, Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::{GlRenderer, IndexRange};
use gl_wrapper::shader::{Shader, ShaderStage};

use quads::scene::{Color, Scene};
use quads::shaders::{fragment_shader, VERTEX_SHADER};

/// GPU side of a [`Scene`]: one shared vertex array and a program per quad.
///
/// Must be dropped while the context it was created in is current.
pub struct SceneRenderer {
    geometry: Geometry,
    passes: Vec<(Option<Program>, IndexRange)>,
    clear_color: Color,
}

impl SceneRenderer {
    pub fn new(scene: &Scene, gl_renderer: &GlRenderer) -> Result<Self, GBError> {
        let vertices = scene.vertices();
        let indices = scene.indices();

        let geometry = GeometryBuilder::new(&vertices)
            .with_attribute(VertexAttribute::Vec3)
            .with_indices(&indices)
            .build()?;

        let vert = match Shader::compile(ShaderStage::Vertex, VERTEX_SHADER) {
            Ok(v) => Some(v),
            Err(e) => {
                log::error!("{e}");
                None
            }
        };

        let passes = scene
            .quads
            .iter()
            .zip(scene.draw_ranges())
            .enumerate()
            .map(|(i, (quad, range))| {
                let program = vert
                    .as_ref()
                    .and_then(|vert| build_program(i, vert, quad.color));
                (program, range)
            })
            .collect();

        // stages are no longer needed once linked
        drop(vert);

        gl_renderer.polygon_mode(scene.polygon_mode);

        Ok(Self {
            geometry,
            passes,
            clear_color: scene.clear_color,
        })
    }

    pub fn draw(&self, gl_renderer: &mut GlRenderer) {
        let c = self.clear_color;
        gl_renderer.clear_color(c.r, c.g, c.b, c.a);

        for (program, range) in &self.passes {
            if let Some(program) = program {
                gl_renderer.draw_indexed(&self.geometry, program, *range);
            }
        }
    }
}

fn build_program(index: usize, vert: &Shader, color: Color) -> Option<Program> {
    let frag = match Shader::compile(ShaderStage::Fragment, &fragment_shader(color)) {
        Ok(f) => f,
        Err(e) => {
            log::error!("quad {index}: {e}");
            return None;
        }
    };

    match ProgramBuilder::new().attach(vert).attach(&frag).link() {
        Ok(p) => Some(p),
        Err(e) => {
            log::error!("quad {index}: {e}");
            None
        }
    }
}
