//! Per-tick turn buffer.
//!
//! Terminals deliver keys as fast as the user types, but the engine consumes one
//! heading per tick. Quick double turns (e.g. up then left inside one tick) are
//! queued so the second one lands on the following tick instead of being lost.

use arrayvec::ArrayVec;
use crossterm::event::KeyEvent;
use log::trace;

use crate::map::handle_key_event;
use crate::types::{Direction, GameAction};

/// Maximum number of turns carried over between ticks.
pub const MAX_QUEUED_TURNS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct TickInput {
    turns: ArrayVec<Direction, MAX_QUEUED_TURNS>,
    restart: bool,
}

impl TickInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key press. Returns the action it mapped to, if any.
    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<GameAction> {
        let action = handle_key_event(key)?;
        self.push(action);
        Some(action)
    }

    /// Buffer an action.
    ///
    /// Repeating the most recent turn is ignored, and turns beyond the queue
    /// capacity are dropped.
    pub fn push(&mut self, action: GameAction) {
        match action {
            GameAction::Turn(Direction::None) => {}
            GameAction::Turn(direction) => {
                if self.turns.last() == Some(&direction) {
                    return;
                }
                if self.turns.try_push(direction).is_err() {
                    trace!("turn queue full, dropping {:?}", direction);
                }
            }
            GameAction::Restart => {
                self.restart = true;
                self.turns.clear();
            }
        }
    }

    /// True (once) if a restart was requested since the last call.
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart)
    }

    /// The turn to apply on this tick, oldest first.
    pub fn take_turn(&mut self) -> Option<Direction> {
        self.turns.pop_at(0)
    }

    pub fn queued_turns(&self) -> &[Direction] {
        &self.turns
    }

    pub fn clear(&mut self) {
        self.turns.clear();
        self.restart = false;
    }
}
