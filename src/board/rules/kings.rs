use super::super::{Board, CastleSide, Piece, Square};
use super::is_square_attacked;

pub(super) fn reaches(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    df.abs() <= 1 && dr.abs() <= 1 && (df, dr) != (0, 0)
}

/// Whether the king on `from` may castle to `to` right now.
///
/// Requires an unmoved king on its home square, the matching castling
/// right, an unmoved rook of the same color in the home corner, empty
/// squares between them, and no attack on the king's start, crossing and
/// destination squares.
#[must_use]
pub fn can_castle(board: &Board, from: Square, to: Square) -> bool {
    let Some(king) = board.piece_at(from) else {
        return false;
    };
    let Some(side) = CastleSide::from_king_move(from, to) else {
        return false;
    };
    let color = king.color;
    if king.piece != Piece::King
        || king.has_moved
        || from != Square::new(4, color.back_rank())
        || !board.castling_rights().has(color, side)
    {
        return false;
    }

    let rook_square = Square::new(side.rook_file(), from.rank());
    let rook_ready = board
        .piece_at(rook_square)
        .is_some_and(|rook| rook.is(color, Piece::Rook) && !rook.has_moved);
    if !rook_ready {
        return false;
    }

    let dir = side.direction();
    let mut between = from.offset(dir, 0);
    while between != rook_square {
        if !board.is_empty_square(between) {
            return false;
        }
        between = between.offset(dir, 0);
    }

    let enemy = color.opponent();
    [from, from.offset(dir, 0), to]
        .into_iter()
        .all(|sq| !is_square_attacked(board, sq, enemy))
}
