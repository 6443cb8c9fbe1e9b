use super::super::{Board, Square};

pub(super) fn bishop_reaches(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    df != 0 && df.abs() == dr.abs() && path_clear(board, from, to)
}

pub(super) fn rook_reaches(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    (df == 0) != (dr == 0) && path_clear(board, from, to)
}

pub(super) fn queen_reaches(board: &Board, from: Square, to: Square) -> bool {
    rook_reaches(board, from, to) || bishop_reaches(board, from, to)
}

/// Every square strictly between `from` and `to` is on the board and empty.
/// Callers guarantee the two squares share a line.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    let step = (df.signum(), dr.signum());
    let mut sq = from.offset(step.0, step.1);
    while sq != to {
        if !board.is_empty_square(sq) {
            return false;
        }
        sq = sq.offset(step.0, step.1);
    }
    true
}
