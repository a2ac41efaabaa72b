//! Board module - the renderable grid derived from the snake and the pill
//!
//! The board is a `size x size` grid of [`SlotCode`]s in a flat row-major vector.
//! It holds no state of its own: [`Board::classify_into`] rebuilds it from scratch
//! every tick. Coordinates are `(row, col)`, with row 0 at the top.
//!
//! Body cells are classified from the segment before and after them:
//! a straight run becomes a line, a bend becomes one of four corners.
//! The tail is always drawn as [`SlotCode::Tail`], whatever its shape.

use std::cmp::Ordering::{Greater, Less};

use log::error;

use crate::snake::Snake;
use crate::types::{Position, SlotCode};

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: u16,
    /// Row-major (row * size + col).
    cells: Vec<SlotCode>,
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.clone(),
        }
    }

    // Reuses the existing allocation; snapshots are refreshed every frame.
    fn clone_from(&mut self, source: &Self) {
        self.size = source.size;
        self.cells.clone_from(&source.cells);
    }
}

impl Board {
    /// Create an empty board.
    pub fn new(size: u16) -> Self {
        let len = (size as usize) * (size as usize);
        Self {
            size,
            cells: vec![SlotCode::Empty; len],
        }
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let size = self.size as i32;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Some((row as usize) * (self.size as usize) + (col as usize))
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    /// Slot at `(row, col)`, `None` if out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<SlotCode> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn at(&self, pos: Position) -> Option<SlotCode> {
        self.get(pos.row, pos.col)
    }

    /// Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, slot: SlotCode) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = slot;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(SlotCode::Empty);
    }

    pub fn cells(&self) -> &[SlotCode] {
        &self.cells
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[SlotCode]> {
        self.cells.chunks(self.size.max(1) as usize)
    }

    /// Number of cells holding `slot`.
    pub fn count(&self, slot: SlotCode) -> usize {
        self.cells.iter().filter(|&&c| c == slot).count()
    }

    /// Rebuild from `snake` and `pill` (no allocation when the size matches).
    ///
    /// `pill` is `None` only once the interior is full.
    pub fn classify_into(&mut self, snake: &Snake, pill: Option<Position>) {
        let size = snake.board_size();
        if self.size != size {
            *self = Board::new(size);
        } else {
            self.clear();
        }

        let segments = snake.segments();
        let last = segments.len() - 1;

        for (i, &cur) in segments.iter().enumerate() {
            let slot = if i == last {
                SlotCode::Head
            } else if i == 0 {
                SlotCode::Tail
            } else {
                body_slot(segments[i - 1], cur, segments[i + 1]).unwrap_or_else(|| {
                    debug_assert!(false, "segment {i} breaks the unit-step path");
                    error!(
                        "segment {} at ({},{}) is not adjacent to its neighbours",
                        i, cur.row, cur.col
                    );
                    SlotCode::Empty
                })
            };
            self.set(cur.row, cur.col, slot);
        }

        if let Some(pill) = pill {
            if snake.collides(pill) {
                error!("pill at ({},{}) overlaps the snake", pill.row, pill.col);
            }
            self.set(pill.row, pill.col, SlotCode::Pill);
        }
    }
}

/// Classify the whole board.
///
/// # Examples
///
/// ```
/// use tui_snake_core::{classify, GameConfig, Snake};
/// use tui_snake_core::types::{Direction, Position, SlotCode};
///
/// let config = GameConfig::new(6, 0).unwrap();
/// let snake = Snake::from_segments(
///     &config,
///     vec![Position::new(2, 1), Position::new(2, 2), Position::new(2, 3)],
///     Direction::East,
/// )
/// .unwrap();
/// let board = classify(&snake, Position::new(4, 4));
///
/// assert_eq!(board.get(2, 1), Some(SlotCode::Tail));
/// assert_eq!(board.get(2, 2), Some(SlotCode::HorizontalLine));
/// assert_eq!(board.get(2, 3), Some(SlotCode::Head));
/// assert_eq!(board.get(4, 4), Some(SlotCode::Pill));
/// ```
pub fn classify(snake: &Snake, pill: Position) -> Board {
    let mut board = Board::new(snake.board_size());
    board.classify_into(snake, Some(pill));
    board
}

/// Shape of a body segment given its tail-side (`prev`) and head-side (`next`) neighbours.
///
/// `None` if the three cells do not form a unit-step path.
pub fn body_slot(prev: Position, cur: Position, next: Position) -> Option<SlotCode> {
    if prev.row == cur.row {
        if next.row == cur.row {
            return Some(SlotCode::HorizontalLine);
        }
        // Entered horizontally, leaving vertically.
        match (prev.col.cmp(&cur.col), next.row.cmp(&cur.row)) {
            (Less, Less) => Some(SlotCode::CornerLR),
            (Less, Greater) => Some(SlotCode::CornerUR),
            (Greater, Less) => Some(SlotCode::CornerLL),
            (Greater, Greater) => Some(SlotCode::CornerUL),
            _ => None,
        }
    } else if prev.col == cur.col {
        if next.col == cur.col {
            return Some(SlotCode::VerticalLine);
        }
        // Entered vertically, leaving horizontally.
        match (prev.row.cmp(&cur.row), next.col.cmp(&cur.col)) {
            (Less, Greater) => Some(SlotCode::CornerLL),
            (Less, Less) => Some(SlotCode::CornerLR),
            (Greater, Greater) => Some(SlotCode::CornerUL),
            (Greater, Less) => Some(SlotCode::CornerUR),
            _ => None,
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::types::Direction;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn snake(size: i64, cells: &[(i32, i32)]) -> Snake {
        let config = GameConfig::new(size, 0).unwrap();
        let segments = cells.iter().map(|&(r, c)| p(r, c)).collect();
        Snake::from_segments(&config, segments, Direction::East).unwrap()
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(5);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 4), Some(4));
        assert_eq!(board.index(1, 0), Some(5));
        assert_eq!(board.index(4, 4), Some(24));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 5), None);
        assert_eq!(board.index(5, 0), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(4);
        assert!(board.set(1, 2, SlotCode::Head));
        assert_eq!(board.get(1, 2), Some(SlotCode::Head));
        assert_eq!(board.cells()[4 + 2], SlotCode::Head);
        assert!(!board.set(4, 0, SlotCode::Head));
        assert_eq!(board.get(4, 0), None);
        board.clear();
        assert_eq!(board.count(SlotCode::Empty), 16);
    }

    #[test]
    fn test_horizontal_and_vertical_lines() {
        assert_eq!(body_slot(p(2, 1), p(2, 2), p(2, 3)), Some(SlotCode::HorizontalLine));
        assert_eq!(body_slot(p(2, 3), p(2, 2), p(2, 1)), Some(SlotCode::HorizontalLine));
        assert_eq!(body_slot(p(1, 2), p(2, 2), p(3, 2)), Some(SlotCode::VerticalLine));
        assert_eq!(body_slot(p(3, 2), p(2, 2), p(1, 2)), Some(SlotCode::VerticalLine));
    }

    #[test]
    fn test_corners_entered_horizontally() {
        // From the west, leaving north / south.
        assert_eq!(body_slot(p(2, 1), p(2, 2), p(1, 2)), Some(SlotCode::CornerLR));
        assert_eq!(body_slot(p(2, 1), p(2, 2), p(3, 2)), Some(SlotCode::CornerUR));
        // From the east, leaving north / south.
        assert_eq!(body_slot(p(2, 3), p(2, 2), p(1, 2)), Some(SlotCode::CornerLL));
        assert_eq!(body_slot(p(2, 3), p(2, 2), p(3, 2)), Some(SlotCode::CornerUL));
    }

    #[test]
    fn test_corners_entered_vertically() {
        // From the north, leaving east / west.
        assert_eq!(body_slot(p(1, 2), p(2, 2), p(2, 3)), Some(SlotCode::CornerLL));
        assert_eq!(body_slot(p(1, 2), p(2, 2), p(2, 1)), Some(SlotCode::CornerLR));
        // From the south, leaving east / west.
        assert_eq!(body_slot(p(3, 2), p(2, 2), p(2, 3)), Some(SlotCode::CornerUL));
        assert_eq!(body_slot(p(3, 2), p(2, 2), p(2, 1)), Some(SlotCode::CornerUR));
    }

    #[test]
    fn test_non_adjacent_neighbours() {
        assert_eq!(body_slot(p(1, 1), p(2, 2), p(3, 3)), None);
    }

    #[test]
    fn test_classify_single_segment_is_head() {
        let s = snake(5, &[(2, 2)]);
        let board = classify(&s, p(1, 1));
        assert_eq!(board.get(2, 2), Some(SlotCode::Head));
        assert_eq!(board.get(1, 1), Some(SlotCode::Pill));
        assert_eq!(board.count(SlotCode::Empty), 23);
    }

    #[test]
    fn test_tail_ignores_geometry() {
        // Vertical two-segment snake: the tail is still Tail, never a line.
        let s = snake(5, &[(3, 2), (2, 2)]);
        let board = classify(&s, p(1, 1));
        assert_eq!(board.get(3, 2), Some(SlotCode::Tail));
        assert_eq!(board.get(2, 2), Some(SlotCode::Head));
    }

    #[test]
    fn test_classify_l_shape() {
        // Moving east along row 1, then turning south at (1,3).
        let s = snake(6, &[(1, 1), (1, 2), (1, 3), (2, 3), (3, 3)]);
        let board = classify(&s, p(4, 1));
        assert_eq!(board.get(1, 1), Some(SlotCode::Tail));
        assert_eq!(board.get(1, 2), Some(SlotCode::HorizontalLine));
        assert_eq!(board.get(1, 3), Some(SlotCode::CornerUR));
        assert_eq!(board.get(2, 3), Some(SlotCode::VerticalLine));
        assert_eq!(board.get(3, 3), Some(SlotCode::Head));
    }

    #[test]
    fn test_classify_into_reuses_buffer() {
        let s = snake(5, &[(2, 1), (2, 2)]);
        let mut board = Board::new(5);
        board.set(3, 3, SlotCode::CornerLL);
        board.classify_into(&s, Some(p(1, 3)));
        assert_eq!(board.get(3, 3), Some(SlotCode::Empty));
        assert_eq!(board.count(SlotCode::Tail), 1);
        assert_eq!(board.count(SlotCode::Head), 1);
        assert_eq!(board.count(SlotCode::Pill), 1);
    }

    #[test]
    fn test_classify_into_resizes() {
        let s = snake(7, &[(3, 3)]);
        let mut board = Board::new(3);
        board.classify_into(&s, None);
        assert_eq!(board.size(), 7);
        assert_eq!(board.cells().len(), 49);
        assert_eq!(board.count(SlotCode::Pill), 0);
    }
}
