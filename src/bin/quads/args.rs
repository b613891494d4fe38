use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,
    /// Initial window height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
    #[arg(long, default_value = "LearnOpenGL")]
    pub title: String,
    /// Scene description in json5, the two built-in rectangles are drawn when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,
    /// Draw filled triangles instead of wireframe
    #[arg(long)]
    pub fill: bool,
}
