//! Error types for chess board and game operations.

use thiserror::Error;

use super::types::{CastleSide, Color, Move, Piece, Square};

/// Why a move was refused. A refused move leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("no piece on {square}")]
    NoPiece { square: Square },
    #[error("it is {expected}'s turn, not {found}'s")]
    WrongTurn { expected: Color, found: Color },
    #[error("{color} cannot castle {side:?} now")]
    CastlingNotAllowed { color: Color, side: CastleSide },
    #[error("{piece} cannot move {mv}")]
    InvalidMove { piece: Piece, mv: Move },
    #[error("{mv} would leave the {color} king in check")]
    LeavesKingInCheck { color: Color, mv: Move },
}

/// Error type for promotion requests
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromotionError {
    #[error("no pawn on {square}")]
    NoPawn { square: Square },
    #[error("pawn on {square} has not reached its last rank")]
    NotOnLastRank { square: Square },
    #[error("cannot promote to a {piece}")]
    InvalidPiece { piece: Piece },
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("square ({file}, {rank}) is off the board")]
    OutOfBounds { file: i8, rank: i8 },
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}

/// Error type for move text parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    #[error("Move must be 4-5 characters, found {len}")]
    InvalidLength { len: usize },
    #[error("Invalid square notation in '{notation}'")]
    InvalidSquare { notation: String },
    #[error("Invalid promotion piece '{char}'")]
    InvalidPromotion { char: char },
}

/// Internal faults of the automated player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("the {color} king is missing from the board")]
    MissingKing { color: Color },
    #[error("search chose {mv} but the game rejected it")]
    Rejected {
        mv: Move,
        #[source]
        source: MoveError,
    },
    #[error("promotion after {mv} failed")]
    Promotion {
        mv: Move,
        #[source]
        source: PromotionError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn e2e4() -> Move {
        Move::new(Square::new(4, 6), Square::new(4, 4))
    }

    #[test]
    fn test_move_error_names_the_square() {
        let err = MoveError::NoPiece {
            square: Square::new(4, 4),
        };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_move_error_wrong_turn() {
        let err = MoveError::WrongTurn {
            expected: Color::White,
            found: Color::Black,
        };
        let text = err.to_string();
        assert!(text.contains("White"));
        assert!(text.contains("Black"));
    }

    #[test]
    fn test_move_error_invalid_move() {
        let err = MoveError::InvalidMove {
            piece: Piece::Knight,
            mv: e2e4(),
        };
        assert!(err.to_string().contains("knight"));
        assert!(err.to_string().contains("e2e4"));
    }

    #[test]
    fn test_promotion_error_invalid_piece() {
        let err = PromotionError::InvalidPiece { piece: Piece::King };
        assert!(err.to_string().contains("king"));
    }

    #[test]
    fn test_square_error_bounds() {
        let err = SquareError::OutOfBounds { file: 9, rank: -1 };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_move_parse_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_search_error_keeps_source() {
        let err = SearchError::Rejected {
            mv: e2e4(),
            source: MoveError::GameOver,
        };
        assert!(err.to_string().contains("e2e4"));
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("the game is over"));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::LeavesKingInCheck {
            color: Color::White,
            mv: e2e4(),
        };
        assert_eq!(err.clone(), err);
    }
}
