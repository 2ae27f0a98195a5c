use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_SHADER_PATH: &str = "res/shaders/simple.glsl";

/// RGBA the demos clear the framebuffer to before every frame
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.6, 0.0];

#[derive(Clone, Debug, Parser)]
#[command(about = "Draw a triangle with a program loaded from a combined shader file")]
pub struct DemoConfig {
    /// Combined shader source holding `:vertex` and `:fragment` sections.
    #[arg(short, long, default_value = DEFAULT_SHADER_PATH)]
    pub shader: PathBuf,

    /// Window width in logical pixels.
    #[arg(short = 'W', long, default_value_t = 640)]
    pub width: u32,

    /// Window height in logical pixels.
    #[arg(short = 'H', long, default_value_t = 480)]
    pub height: u32,

    /// Window title.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Present frames without waiting for vertical sync.
    #[arg(long)]
    pub no_vsync: bool,
}

impl DemoConfig {
    pub fn title_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(default)
    }

    pub fn vsync(&self) -> bool {
        !self.no_vsync
    }
}
