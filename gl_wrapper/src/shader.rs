use gl::types::{GLenum, GLuint};
use std::ffi::{c_char, CString, NulError};
use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::info_log_to_string;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_enum(&self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl Display for ShaderStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Single compiled shader stage.
///
/// Stays alive only until it is linked into every program that needs it,
/// the GL object is deleted on drop.
pub struct Shader {
    id: GLuint,
}

impl Shader {
    pub fn compile(stage: ShaderStage, src: &str) -> Result<Self, ShaderError> {
        let src = CString::new(src).map_err(ShaderError::InvalidSource)?;
        let mut success: i32 = 0;

        unsafe {
            let id = gl::CreateShader(stage.gl_enum());

            gl::ShaderSource(
                id,
                1,
                (&src.as_ptr()) as *const *const c_char,
                std::ptr::null(),
            );

            gl::CompileShader(id);
            gl::GetShaderiv(id, gl::COMPILE_STATUS, (&mut success) as *mut i32);

            if success != 1 {
                let mut buf = [0_u8; 1024];

                gl::GetShaderInfoLog(
                    id,
                    buf.len() as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteShader(id);

                return Err(ShaderError::Compilation {
                    stage,
                    log: info_log_to_string(&buf),
                });
            }

            Ok(Self { id })
        }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.id) }
    }
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("shader source contains a NUL byte")]
    InvalidSource(#[source] NulError),
    #[error("{stage} shader failed to compile: {log}")]
    Compilation { stage: ShaderStage, log: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nul_in_source_is_rejected_before_gl() {
        let res = Shader::compile(ShaderStage::Vertex, "void main() {}\0junk");

        assert!(matches!(res, Err(ShaderError::InvalidSource(_))));
    }

    #[test]
    fn compilation_error_names_stage() {
        let err = ShaderError::Compilation {
            stage: ShaderStage::Fragment,
            log: "0:1: syntax error".into(),
        };

        assert_eq!(
            err.to_string(),
            "fragment shader failed to compile: 0:1: syntax error"
        );
    }
}
