//! Snake module - segment storage, heading and one-cell movement
//!
//! Segments live in a single vector reserved to the full capacity at creation,
//! so growth never reallocates. Index 0 is the tail and the last index is the head.
//! A non-growth move shifts every segment one slot towards the tail in place.

use crate::collision::collides;
use crate::config::GameConfig;
use crate::types::{Direction, Outcome, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Tail first, head last.
    segments: Vec<Position>,
    capacity: usize,
    direction: Direction,
    board_size: u16,
}

impl Snake {
    /// A one-segment snake at the board center with no heading yet.
    pub fn new(config: &GameConfig) -> Self {
        let capacity = config.capacity();
        let mut segments = Vec::with_capacity(capacity);
        segments.push(config.start_position());
        Self {
            segments,
            capacity,
            direction: Direction::None,
            board_size: config.board_size(),
        }
    }

    /// Build a snake from explicit segments (tail first, head last).
    ///
    /// Returns `None` if the list is empty, longer than the capacity, leaves the
    /// interior, visits a cell twice, or has consecutive segments that are not
    /// one orthogonal step apart. A snake longer than one segment needs a heading.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_core::{GameConfig, Snake};
    /// use tui_snake_core::types::{Direction, Position};
    ///
    /// let config = GameConfig::new(5, 0).unwrap();
    /// let snake = Snake::from_segments(
    ///     &config,
    ///     vec![Position::new(2, 1), Position::new(2, 2)],
    ///     Direction::East,
    /// )
    /// .unwrap();
    /// assert_eq!(snake.head(), Position::new(2, 2));
    /// assert_eq!(snake.tail(), Position::new(2, 1));
    ///
    /// // (0, 2) is wall.
    /// assert!(Snake::from_segments(&config, vec![Position::new(0, 2)], Direction::North).is_none());
    /// ```
    pub fn from_segments(
        config: &GameConfig,
        segments: Vec<Position>,
        direction: Direction,
    ) -> Option<Self> {
        let capacity = config.capacity();
        if segments.is_empty() || segments.len() > capacity {
            return None;
        }
        if segments.len() > 1 && direction == Direction::None {
            return None;
        }
        for (i, &pos) in segments.iter().enumerate() {
            if !config.is_interior(pos) || collides(&segments[..i], pos) {
                return None;
            }
        }
        if !segments.windows(2).all(|pair| is_unit_step(pair[0], pair[1])) {
            return None;
        }

        let mut storage = Vec::with_capacity(capacity);
        storage.extend_from_slice(&segments);
        Some(Self {
            segments: storage,
            capacity,
            direction,
            board_size: config.board_size(),
        })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a snake has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True once the snake covers every interior cell.
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn board_size(&self) -> u16 {
        self.board_size
    }

    /// Segments, tail first.
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn head(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    pub fn tail(&self) -> Position {
        self.segments[0]
    }

    /// True iff `point` is occupied by any segment, tail included.
    pub fn collides(&self, point: Position) -> bool {
        collides(&self.segments, point)
    }

    /// Change heading for the next `advance`.
    ///
    /// A 180 degree reversal is ignored unless the snake is a single segment.
    /// `Direction::None` is never accepted. Returns whether the heading changed hands.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == Direction::None {
            return false;
        }
        if self.len() > 1 && direction.is_reverse_of(self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// The cell the head would enter on the next `advance`.
    pub fn next_head(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Advance one cell along the current heading.
    ///
    /// Checks run in a fixed order: full board (`Won`), wall (`Lost`),
    /// self-collision (`Lost`), pill (`Grew`), otherwise `Moved`.
    /// `Won` and `Lost` leave the snake untouched.
    pub fn advance(&mut self, pill: Position) -> Outcome {
        if self.is_full() {
            return Outcome::Won;
        }

        let candidate = self.next_head();

        if self.hits_wall(candidate) {
            return Outcome::Lost;
        }
        if self.len() > 1 && self.collides(candidate) {
            return Outcome::Lost;
        }

        if candidate == pill {
            self.segments.push(candidate);
            return Outcome::Grew;
        }

        self.segments.copy_within(1.., 0);
        let last = self.segments.len() - 1;
        self.segments[last] = candidate;
        Outcome::Moved
    }

    fn hits_wall(&self, pos: Position) -> bool {
        let last = self.board_size as i32 - 1;
        pos.row <= 0 || pos.row >= last || pos.col <= 0 || pos.col >= last
    }
}

fn is_unit_step(a: Position, b: Position) -> bool {
    (a.row - b.row).abs() + (a.col - b.col).abs() == 1
}
