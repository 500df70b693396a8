//! Terminal rendering layer.
//!
//! Renders the life field into a simple framebuffer that is then flushed
//! to a terminal backend. No widget/layout framework: the view draws
//! styled glyphs directly, which keeps the mapping from cells to screen
//! positions explicit enough to invert for mouse hit-testing.
//!
//! Goals:
//! - Keep `core` deterministic and testable (the view is pure, no I/O)
//! - Flush only changed runs between frames
//! - Precise control over cell aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{LifeView, Viewport};
