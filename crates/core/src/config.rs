//! Startup configuration.
//!
//! Values are validated once, before any engine state exists. A `GameConfig`
//! that exists is always valid.

use std::time::Duration;

use thiserror::Error;

use crate::types::{Position, DEFAULT_BOARD_SIZE, DEFAULT_TICK_MS, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be greater than 2 (got {0})")]
    BoardTooSmall(i64),
    #[error("board size {0} exceeds the maximum of {}", MAX_BOARD_SIZE)]
    BoardTooLarge(i64),
    #[error("delay must be >= 0 (got {0})")]
    NegativeTickInterval(i64),
}

/// Validated game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    board_size: u16,
    tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            tick_interval_ms: DEFAULT_TICK_MS,
        }
    }
}

impl GameConfig {
    /// Validate raw startup values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_core::{ConfigError, GameConfig};
    ///
    /// let config = GameConfig::new(5, 100).unwrap();
    /// assert_eq!(config.board_size(), 5);
    /// assert_eq!(config.capacity(), 9);
    ///
    /// assert_eq!(GameConfig::new(2, 100), Err(ConfigError::BoardTooSmall(2)));
    /// assert_eq!(GameConfig::new(5, -1), Err(ConfigError::NegativeTickInterval(-1)));
    /// ```
    pub fn new(board_size: i64, tick_interval_ms: i64) -> Result<Self, ConfigError> {
        if board_size < MIN_BOARD_SIZE as i64 {
            return Err(ConfigError::BoardTooSmall(board_size));
        }
        if board_size > MAX_BOARD_SIZE as i64 {
            return Err(ConfigError::BoardTooLarge(board_size));
        }
        if tick_interval_ms < 0 {
            return Err(ConfigError::NegativeTickInterval(tick_interval_ms));
        }
        Ok(Self {
            board_size: board_size as u16,
            tick_interval_ms: tick_interval_ms as u64,
        })
    }

    /// Edge length of the board, wall ring included.
    pub fn board_size(&self) -> u16 {
        self.board_size
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Edge length of the playable interior.
    pub fn interior_size(&self) -> u16 {
        self.board_size - 2
    }

    /// Number of playable cells.
    pub fn interior_cells(&self) -> usize {
        let n = self.interior_size() as usize;
        n * n
    }

    /// Maximum snake length. Reaching it fills the interior.
    pub fn capacity(&self) -> usize {
        self.interior_cells()
    }

    /// Where a fresh snake starts.
    pub fn start_position(&self) -> Position {
        let c = (self.board_size / 2) as i32;
        Position::new(c, c)
    }

    /// True if `pos` lies strictly inside the wall ring.
    pub fn is_interior(&self, pos: Position) -> bool {
        let last = self.board_size as i32 - 1;
        pos.row > 0 && pos.row < last && pos.col > 0 && pos.col < last
    }
}
