//! Move ordering utilities for search.
//!
//! Scores only decide the order moves are tried in; they never change the
//! minimax value, only how early alpha-beta can cut.

use crate::board::rules::is_en_passant_capture;
use crate::board::{Board, CastleSide, Move, Piece, ScoredMove};

const CAPTURE_MULTIPLIER: i32 = 10;
const CASTLING_BONUS: i32 = 12;
const CENTRE_BONUS: i32 = 2;
const CHECK_BONUS: i32 = 5;

/// Heuristic score of `mv` for the piece standing on `mv.from`.
///
/// Captures score `10 * victim - attacker`, castling, a central destination
/// and giving check add fixed bonuses. The check test plays the move and
/// takes it back.
pub fn score_move(board: &mut Board, mv: Move) -> i32 {
    let Some(mover) = board.piece_at(mv.from) else {
        return 0;
    };
    let mut score = 0;

    let victim = match board.piece_at(mv.to) {
        Some(target) => Some(target.piece),
        None if mover.piece == Piece::Pawn
            && is_en_passant_capture(board, mv.from, mv.to, mover.color) =>
        {
            Some(Piece::Pawn)
        }
        None => None,
    };
    if let Some(victim) = victim {
        score += CAPTURE_MULTIPLIER * victim.value() - mover.piece.value();
    }

    if mover.piece == Piece::King && CastleSide::from_king_move(mv.from, mv.to).is_some() {
        score += CASTLING_BONUS;
    }
    if mv.to.is_central() {
        score += CENTRE_BONUS;
    }

    let info = board.make_move(mv);
    if board.is_in_check(mover.color.opponent()) {
        score += CHECK_BONUS;
    }
    board.unmake_move(mv, info);

    score
}

/// Score and stable-sort moves, highest first. Equal scores keep their input order.
pub fn order_moves(board: &mut Board, moves: &[Move]) -> Vec<ScoredMove> {
    let mut scored: Vec<ScoredMove> = moves
        .iter()
        .map(|&mv| ScoredMove {
            mv,
            score: score_move(board, mv),
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
