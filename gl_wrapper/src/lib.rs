pub mod geometry;
pub mod program;
pub mod renderer;
pub mod shader;

/// True once the GL function pointers used by this crate have been loaded.
pub fn is_loaded() -> bool {
    gl::Viewport::is_loaded()
        && gl::CreateShader::is_loaded()
        && gl::CreateProgram::is_loaded()
        && gl::GenVertexArrays::is_loaded()
        && gl::DrawElements::is_loaded()
        && gl::PolygonMode::is_loaded()
}

/// Converts a driver info log buffer into a string, cut at the first NUL.
pub(crate) fn info_log_to_string(buf: &[u8]) -> String {
    let data = buf.split(|a| *a == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(data).trim_end().to_string()
}
