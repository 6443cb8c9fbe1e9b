//! Movement rules per piece.
//!
//! Two geometries live here. [`is_valid_move`] answers "may this piece go
//! there" (pawn pushes, castling, en passant included). [`attacks`] answers
//! "does this piece hit that square": pawns only on their forward diagonals,
//! kings only on adjacent squares. Check detection and castling safety use
//! the second one.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Piece, Square};

pub use kings::can_castle;
pub(crate) use pawns::is_en_passant_capture;

/// Whether the piece on `from` may move to `to` by its own movement rules.
///
/// Ignores turn order and whether the move leaves the mover's king in check.
#[must_use]
pub fn is_valid_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(mover) = board.piece_at(from) else {
        return false;
    };
    if from == to || !to.is_valid() {
        return false;
    }
    if board.piece_at(to).is_some_and(|target| target.color == mover.color) {
        return false;
    }

    match mover.piece {
        Piece::Pawn => pawns::is_valid(board, from, to, mover.color),
        Piece::Knight => knights::reaches(from, to),
        Piece::Bishop => sliders::bishop_reaches(board, from, to),
        Piece::Rook => sliders::rook_reaches(board, from, to),
        Piece::Queen => sliders::queen_reaches(board, from, to),
        Piece::King => kings::reaches(from, to) || can_castle(board, from, to),
    }
}

/// Whether the piece on `from` attacks `to`, regardless of what stands there.
#[must_use]
pub fn attacks(board: &Board, from: Square, to: Square) -> bool {
    let Some(attacker) = board.piece_at(from) else {
        return false;
    };
    if from == to || !to.is_valid() {
        return false;
    }

    match attacker.piece {
        Piece::Pawn => pawns::attacks(from, to, attacker.color),
        Piece::Knight => knights::reaches(from, to),
        Piece::Bishop => sliders::bishop_reaches(board, from, to),
        Piece::Rook => sliders::rook_reaches(board, from, to),
        Piece::Queen => sliders::queen_reaches(board, from, to),
        Piece::King => kings::reaches(from, to),
    }
}

/// True if any piece of color `by` attacks `square`.
#[must_use]
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, _)| attacks(board, from, square))
}

/// True if `color`'s king stands on an attacked square. A missing king is never in check.
#[must_use]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opponent()))
}
