/// Canvas trait and the RGBA frame canvas
pub mod canvas;
/// Per-tile draw passes
pub mod passes;

pub use canvas::{Canvas, FrameCanvas, Tint};
pub use passes::RenderPass;
