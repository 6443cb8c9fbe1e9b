use crate::board::{Board, Color, Move};

use super::eval::evaluate;
use super::move_order::order_moves;

/// Counters gathered over one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Minimax with alpha-beta pruning. Black maximises, White minimises.
///
/// Returns the static evaluation at depth 0 or when `to_move` has no legal
/// move. Moves are ordered only while more than one ply remains below.
pub(crate) fn minimax(
    board: &mut Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    to_move: Color,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;
    if depth == 0 {
        return evaluate(board, to_move);
    }

    let moves = board.legal_moves(to_move);
    if moves.is_empty() {
        return evaluate(board, to_move);
    }
    let moves: Vec<Move> = if depth > 1 {
        order_moves(board, &moves).into_iter().map(|s| s.mv).collect()
    } else {
        moves
    };

    let maximizing = to_move == Color::Black;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let info = board.make_move(mv);
        let score = minimax(board, depth - 1, alpha, beta, to_move.opponent(), stats);
        board.unmake_move(mv, info);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}
