//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let game = GameState::new();
//! assert_eq!(game.current_turn(), Color::White);
//! ```

pub use super::{Board, BoardBuilder, Color, Move, MoveError, Occupant, Piece, Square};
pub use crate::game::{GameResult, GameState};
pub use crate::search::{Ai, AiConfig, Difficulty};
