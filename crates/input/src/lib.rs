//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::SimAction`]s
//! and toggle positions. Independent of any UI framework; the runner owns
//! the event loop and decides what to do with each mapped action.

pub mod map;

pub use tui_life_types as types;

pub use map::{handle_key_event, mouse_toggle_at, should_quit};
