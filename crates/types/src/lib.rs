//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Geometry
//!
//! The board is a `size x size` square. Row 0, column 0, row `size-1` and
//! column `size-1` form the wall ring; the interior (rows and columns
//! `1..=size-2`) is the only area the snake and the pill may occupy.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 15 | Board edge length including the wall ring |
//! | `DEFAULT_TICK_MS` | 150 | Wait between two simulation ticks |
//! | `MIN_BOARD_SIZE` | 3 | Smallest board with a non-empty interior |
//! | `MAX_BOARD_SIZE` | 512 | Largest accepted board |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position, SlotCode};
//!
//! let head = Position::new(2, 2);
//! assert_eq!(head.step(Direction::East), Position::new(2, 3));
//! assert!(Direction::North.is_reverse_of(Direction::South));
//! assert_eq!(SlotCode::Tail.as_u8(), 9);
//! ```

/// Default board edge length (wall ring included).
pub const DEFAULT_BOARD_SIZE: u16 = 15;

/// Default delay between ticks in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 150;

/// Smallest accepted board size (a single interior cell).
pub const MIN_BOARD_SIZE: u16 = 3;

/// Largest accepted board size.
pub const MAX_BOARD_SIZE: u16 = 512;

/// A cell on the grid, addressed by row (top to bottom) and column (left to right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step along `direction`.
    ///
    /// `Direction::None` yields the same position.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, Position};
    ///
    /// let p = Position::new(5, 5);
    /// assert_eq!(p.step(Direction::North), Position::new(4, 5));
    /// assert_eq!(p.step(Direction::West), Position::new(5, 4));
    /// assert_eq!(p.step(Direction::None), p);
    /// ```
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// Heading of the snake.
///
/// `None` is only meaningful before the first committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    North,
    South,
    East,
    West,
    #[default]
    None,
}

impl Direction {
    /// `(row delta, col delta)` for one step.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::None => (0, 0),
        }
    }

    /// The 180 degree opposite heading.
    pub fn reverse(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::None => Direction::None,
        }
    }

    /// True for North/South and East/West pairs. `None` is never a reversal.
    pub fn is_reverse_of(&self, other: Direction) -> bool {
        *self != Direction::None && self.reverse() == other
    }
}

/// Renderable shape of a single board cell.
///
/// The numeric codes are stable (declaration order) so boards can be compared
/// and hashed as plain bytes. Corner names describe where the corner glyph
/// sits: `CornerUL` is `┌`, `CornerUR` is `┐`, `CornerLL` is `└`, `CornerLR` is `┘`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotCode {
    #[default]
    Empty,
    Pill,
    Head,
    VerticalLine,
    HorizontalLine,
    CornerUL,
    CornerUR,
    CornerLL,
    CornerLR,
    Tail,
}

impl SlotCode {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// True for every code that belongs to the snake body.
    pub fn is_snake(&self) -> bool {
        !matches!(self, SlotCode::Empty | SlotCode::Pill)
    }
}

/// Result of advancing the snake by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Translated one cell, length unchanged.
    Moved,
    /// Ate the pill, length increased by one.
    Grew,
    /// Hit the wall or itself; nothing was mutated.
    Lost,
    /// The interior was already full; nothing was mutated.
    Won,
}

/// Lifecycle of one game.
///
/// Once not `Running`, the status only changes through an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Lost,
    Won,
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_running()
    }
}

/// Driver intents fed into the engine.
///
/// Quitting is not an action: the driver simply stops calling the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Change heading before the next tick.
    Turn(Direction),
    /// Throw the current game away and start a new one.
    Restart,
}
