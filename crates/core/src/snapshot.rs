use crate::board::Board;
use crate::types::{GameStatus, Position};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Board,
    pub status: GameStatus,
    pub length: usize,
    pub capacity: usize,
    pub head: Position,
    /// `None` once the interior is full.
    pub pill: Option<Position>,
    pub episode_id: u32,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status.is_running()
    }

    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn board_size(&self) -> u16 {
        self.board.size()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::new(0),
            status: GameStatus::Running,
            length: 0,
            capacity: 0,
            head: Position::default(),
            pill: None,
            episode_id: 0,
            ticks: 0,
        }
    }
}
