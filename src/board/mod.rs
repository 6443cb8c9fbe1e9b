//! Chess board representation and movement rules.
//!
//! A mailbox of 64 optional occupants with castling rights and the
//! last-moved square carried alongside. Moves are applied with
//! [`Board::make_move`] and reverted exactly with [`Board::unmake_move`].
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//! ```

mod builder;
mod display;
pub mod error;
mod legal;
mod make_unmake;
pub mod prelude;
pub mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, MoveParseError, PromotionError, SearchError, SquareError};
pub use state::{Board, UnmakeInfo};
pub use types::{CastleSide, CastlingRights, Color, Move, Occupant, Piece, ScoredMove, Square};
