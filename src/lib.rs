//! A two-player chess engine: move legality, game state and a
//! fixed-depth alpha-beta opponent playing Black.
//!
//! # Example
//! ```
//! use chess_core::board::Square;
//! use chess_core::game::GameState;
//! use chess_core::search::{Ai, AiConfig};
//!
//! let mut game = GameState::new();
//! assert!(game.try_make_move("e2".parse::<Square>().unwrap(), "e4".parse().unwrap()));
//! assert!(Ai::new(AiConfig::default().with_depth(1)).make_move(&mut game));
//! ```

pub mod board;
pub mod cli;
pub mod game;
pub mod search;
pub mod sync;

pub use board::{Board, Color, Move, Occupant, Piece, Square};
pub use game::{GameResult, GameState, MoveRecord};
pub use search::{Ai, AiConfig, Difficulty};
