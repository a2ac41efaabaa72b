//! Core game logic module - pure, turn-based, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal, input, or process I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical pill sequences
//! - **Testable**: Every tick is a plain function call with an explicit result
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free per tick**: Segment storage is reserved up front, the board is rebuilt in place
//!
//! # Module Structure
//!
//! - [`config`]: validated startup configuration (`board_size`, `tick_interval_ms`)
//! - [`snake`]: segment storage, heading and the grow/shift algorithm
//! - [`collision`]: occupancy test shared by movement and pill placement
//! - [`pill`]: uniform pill placement with a bounded number of draws
//! - [`board`]: slot classification (lines, corners, head, tail)
//! - [`engine`]: per-tick orchestration and the `Running`/`Lost`/`Won` lifecycle
//! - [`snapshot`]: owned frame data handed to renderers
//!
//! # Game Rules
//!
//! - The snake starts as one segment in the board center, with no heading
//! - A 180 degree turn is ignored once the snake is longer than one segment
//! - Hitting the wall ring or any segment (the current tail included) loses
//! - Eating the pill grows the snake by one; a new pill is placed on a free cell
//! - Covering the whole interior wins
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameEngine};
//! use tui_snake_core::types::{Direction, GameStatus, Position};
//!
//! let config = GameConfig::new(5, 150).unwrap();
//! let mut game = GameEngine::with_seed(config, 12345);
//!
//! // Put the pill right next to the head and eat it.
//! assert!(game.set_pill(Position::new(2, 3)));
//! game.queue_direction(Direction::East);
//! assert_eq!(game.tick(), GameStatus::Running);
//! assert_eq!(game.length(), 2);
//! assert_eq!(game.head(), Position::new(2, 3));
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod engine;
pub mod pill;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::{body_slot, classify, Board};
pub use collision::collides;
pub use config::{ConfigError, GameConfig};
pub use engine::GameEngine;
pub use pill::PillPlacer;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
