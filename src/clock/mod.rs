//! ASCII-art clock: glyph table and terminal renderer.

pub mod glyphs;
pub mod renderer;

pub use renderer::ClockRenderer;
