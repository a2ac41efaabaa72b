//! Terminal front end for the snake game.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] turns a snapshot into styled cells, and [`TerminalRenderer`]
//! flushes only the cells that changed since the previous frame.
//!
//! Board cells are two columns wide so the board looks square in most fonts.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{glyphs, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
