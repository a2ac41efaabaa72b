//! Game engine - one tick at a time
//!
//! Ties together the snake, the pill placer and the board classifier.
//! Each [`GameEngine::tick`] applies the buffered heading, advances the snake,
//! maps the outcome onto the [`GameStatus`] and rebuilds the board, so the state
//! visible between ticks is always complete.
//!
//! `Lost` and `Won` are terminal: ticks become no-ops until [`GameEngine::reset`].

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::config::GameConfig;
use crate::pill::PillPlacer;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, GameStatus, Outcome, Position};

#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    snake: Snake,
    /// `None` only when the interior has no free cell left.
    pill: Option<Position>,
    status: GameStatus,
    board: Board,
    /// Heading requested since the last tick (last request wins).
    pending: Option<Direction>,
    last_outcome: Option<Outcome>,
    placer: PillPlacer<R>,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Advances attempted in the current episode.
    ticks: u64,
}

impl GameEngine<StdRng> {
    /// Engine seeded from OS entropy.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a reproducible pill sequence.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let snake = Snake::new(&config);
        let board = Board::new(config.board_size());
        let mut engine = Self {
            config,
            snake,
            pill: None,
            status: GameStatus::Running,
            board,
            pending: None,
            last_outcome: None,
            placer: PillPlacer::new(rng),
            episode_id: 0,
            ticks: 0,
        };
        engine.start_episode();
        info!(
            "new game: board {}x{}, tick {} ms",
            config.board_size(),
            config.board_size(),
            config.tick_interval_ms()
        );
        engine
    }

    /// Engine resuming from an explicit snake and pill.
    ///
    /// Returns `None` if the snake was built for a different board size, or the
    /// pill is outside the interior or on the snake.
    pub fn from_parts(config: GameConfig, snake: Snake, pill: Position, rng: R) -> Option<Self> {
        if snake.board_size() != config.board_size()
            || !config.is_interior(pill)
            || snake.collides(pill)
        {
            return None;
        }
        let mut board = Board::new(config.board_size());
        board.classify_into(&snake, Some(pill));
        Some(Self {
            config,
            snake,
            pill: Some(pill),
            status: GameStatus::Running,
            board,
            pending: None,
            last_outcome: None,
            placer: PillPlacer::new(rng),
            episode_id: 0,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn pill(&self) -> Option<Position> {
        self.pill
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn capacity(&self) -> usize {
        self.snake.capacity()
    }

    pub fn head(&self) -> Position {
        self.snake.head()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Ticks committed in this episode.
    ///
    /// Every tick while `Running` counts, including the idle ticks of a fresh
    /// snake that has no heading yet and stays in place. The count freezes once
    /// the game ends and restarts at zero on reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Outcome of the most recent advance in this episode.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Heading waiting for the next tick.
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    /// Buffer a heading for the next tick. Ignored once the game has ended.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.status.is_running() && direction != Direction::None {
            self.pending = Some(direction);
        }
    }

    /// Apply a driver action. Returns true if it had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => {
                if !self.status.is_running() || direction == Direction::None {
                    return false;
                }
                self.queue_direction(direction);
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Force the pill onto `pos`.
    ///
    /// Returns false (and changes nothing) if `pos` is not a free interior cell.
    pub fn set_pill(&mut self, pos: Position) -> bool {
        if !self.config.is_interior(pos) || self.snake.collides(pos) {
            return false;
        }
        self.pill = Some(pos);
        self.board.classify_into(&self.snake, self.pill);
        true
    }

    /// Run one simulation step.
    pub fn tick(&mut self) -> GameStatus {
        if !self.status.is_running() {
            self.pending = None;
            return self.status;
        }

        if let Some(direction) = self.pending.take() {
            self.snake.set_direction(direction);
        }

        let outcome = match self.pill {
            Some(pill) => self.snake.advance(pill),
            None => Outcome::Won,
        };
        self.ticks += 1;
        self.last_outcome = Some(outcome);
        trace!(
            "tick {}: {:?} heading {:?}, head ({},{})",
            self.ticks,
            outcome,
            self.snake.direction(),
            self.snake.head().row,
            self.snake.head().col
        );

        match outcome {
            Outcome::Moved => {}
            Outcome::Grew => {
                debug!("grew to length {}", self.snake.len());
                self.pill = self.placer.place(&self.snake);
                if self.pill.is_none() {
                    self.finish(GameStatus::Won);
                }
            }
            Outcome::Lost => self.finish(GameStatus::Lost),
            Outcome::Won => self.finish(GameStatus::Won),
        }

        self.board.classify_into(&self.snake, self.pill);
        self.status
    }

    /// Discard the current game and start a fresh one.
    pub fn reset(&mut self) {
        self.snake = Snake::new(&self.config);
        self.episode_id = self.episode_id.wrapping_add(1);
        self.start_episode();
        info!("game reset (episode {})", self.episode_id);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.status = self.status;
        out.length = self.snake.len();
        out.capacity = self.snake.capacity();
        out.head = self.snake.head();
        out.pill = self.pill;
        out.episode_id = self.episode_id;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn start_episode(&mut self) {
        self.pending = None;
        self.last_outcome = None;
        self.ticks = 0;
        self.pill = self.placer.place(&self.snake);
        self.status = if self.pill.is_some() {
            GameStatus::Running
        } else {
            GameStatus::Won
        };
        self.board.classify_into(&self.snake, self.pill);
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.pending = None;
        info!(
            "game over: {:?} with length {}/{} after {} ticks",
            status,
            self.snake.len(),
            self.snake.capacity(),
            self.ticks
        );
    }
}
