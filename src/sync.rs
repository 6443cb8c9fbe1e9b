//! Synchronization primitives for sharing a game between threads.
//!
//! The engine itself is single-threaded. [`SharedGame`] holds the lock for
//! the whole of a move or a search, so a search never observes a board that
//! another thread is changing.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::Square;
use crate::game::GameState;
use crate::search::Ai;

/// A thread-safe handle to one game.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<GameState>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: GameState) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    /// Lock the game for a sequence of operations.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, GameState> {
        self.0.lock()
    }

    pub fn try_make_move(&self, from: Square, to: Square) -> bool {
        self.0.lock().try_make_move(from, to)
    }

    /// Let `ai` play for Black while holding the lock.
    pub fn ai_move(&self, ai: &Ai) -> bool {
        ai.make_move(&mut self.0.lock())
    }

    /// A copy of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.0.lock().clone()
    }
}

impl From<GameState> for SharedGame {
    fn from(game: GameState) -> Self {
        SharedGame::new(game)
    }
}
