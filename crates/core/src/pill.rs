//! Pill placement - uniform rejection sampling over the interior
//!
//! Draws are bounded. When the snake covers most of the board and sampling keeps
//! hitting it, placement falls back to choosing uniformly among the remaining
//! free cells. `None` means the interior is full.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use crate::snake::Snake;
use crate::types::Position;

/// Rejection-sampling attempts per interior cell before falling back to a scan.
const ATTEMPTS_PER_CELL: usize = 4;

#[derive(Debug, Clone)]
pub struct PillPlacer<R = StdRng> {
    rng: R,
}

impl PillPlacer<StdRng> {
    /// Placer seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic placer for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PillPlacer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a free interior cell for the next pill.
    pub fn place(&mut self, snake: &Snake) -> Option<Position> {
        let size = snake.board_size() as i32;
        let hi = size - 2;
        let cells = (hi as usize) * (hi as usize);
        if snake.len() >= cells {
            return None;
        }

        let max_attempts = cells.saturating_mul(ATTEMPTS_PER_CELL);
        for _ in 0..max_attempts {
            let pos = Position::new(self.rng.gen_range(1..=hi), self.rng.gen_range(1..=hi));
            if !snake.collides(pos) {
                debug!("pill placed at ({},{})", pos.row, pos.col);
                return Some(pos);
            }
        }

        warn!(
            "pill sampling gave up after {} draws (length {}/{}), scanning free cells",
            max_attempts,
            snake.len(),
            cells
        );
        self.scan_free(snake, hi)
    }

    fn scan_free(&mut self, snake: &Snake, hi: i32) -> Option<Position> {
        let side = hi as usize;
        let mut occupied = vec![false; side * side];
        for seg in snake.segments() {
            occupied[(seg.row as usize - 1) * side + (seg.col as usize - 1)] = true;
        }

        occupied
            .iter()
            .enumerate()
            .filter(|&(_, &taken)| !taken)
            .map(|(i, _)| Position::new((i / side) as i32 + 1, (i % side) as i32 + 1))
            .choose(&mut self.rng)
    }
}
