#![forbid(unsafe_code)]

mod collaborators;
mod rendering;

pub use collaborators::{ConsoleShare, StdoutClipboard};
pub use rendering::{init_tracing, render_draw, save_artifact, PngRasterizer, RenderConfig};
