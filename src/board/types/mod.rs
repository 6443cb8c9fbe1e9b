//! Core chess types.
//!
//! This module contains the fundamental types used throughout the chess engine:
//! - `Piece`, `Color` and `Occupant` - piece kinds, sides, and a piece on the board
//! - `Square` - signed (file, rank) coordinates
//! - `Move` - from/to pair
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, ScoredMove};
pub use piece::{Color, Occupant, Piece};
pub use square::Square;
