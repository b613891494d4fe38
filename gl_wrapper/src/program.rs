use gl::types::GLuint;
use std::ffi::c_char;
use thiserror::Error;

use crate::info_log_to_string;
use crate::shader::Shader;

/// Links already compiled stages into a program.
///
/// Stages are only borrowed, so one vertex shader can be shared between
/// several programs.
#[derive(Default)]
pub struct ProgramBuilder<'a> {
    shaders: Vec<&'a Shader>,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(mut self, shader: &'a Shader) -> Self {
        self.shaders.push(shader);
        self
    }

    pub fn link(self) -> Result<Program, ProgramError> {
        if self.shaders.is_empty() {
            return Err(ProgramError::NoShaders);
        }

        let mut success: i32 = 0;

        unsafe {
            let program = gl::CreateProgram();

            for shader in &self.shaders {
                gl::AttachShader(program, shader.id());
            }

            gl::LinkProgram(program);

            for shader in &self.shaders {
                gl::DetachShader(program, shader.id());
            }

            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                let mut buf = [0_u8; 1024];

                gl::GetProgramInfoLog(
                    program,
                    buf.len() as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteProgram(program);

                return Err(ProgramError::Linking(info_log_to_string(&buf)));
            }

            Ok(Program { id: program })
        }
    }
}

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("no shaders attached")]
    NoShaders,
    #[error("program failed to link: {0}")]
    Linking(String),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_fails_without_touching_gl() {
        let res = ProgramBuilder::new().link();

        assert!(matches!(res, Err(ProgramError::NoShaders)));
    }
}
