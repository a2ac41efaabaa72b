//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and buffers
//! direction intents so that exactly one is handed to the engine per tick.

pub mod handler;
pub mod map;

pub use tui_snake_types as types;

pub use handler::TickInput;
pub use map::{handle_key_event, should_quit};
