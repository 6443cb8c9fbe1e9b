use super::super::{Board, Color, Piece, Square};

pub(super) fn is_valid(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let dir = color.pawn_direction();
    let (df, dr) = from.delta(to);
    let target = board.piece_at(to);

    if df == 0 {
        if dr == dir {
            target.is_none()
        } else if dr == 2 * dir {
            from.rank() == color.pawn_home_rank()
                && target.is_none()
                && board.is_empty_square(from.offset(0, dir))
        } else {
            false
        }
    } else if df.abs() == 1 && dr == dir {
        match target {
            Some(victim) => victim.color != color,
            None => is_en_passant_capture(board, from, to, color),
        }
    } else {
        false
    }
}

/// A pawn's diagonal step onto an empty square beside an enemy pawn that
/// just advanced two squares on the previous ply.
pub(crate) fn is_en_passant_capture(board: &Board, from: Square, to: Square, color: Color) -> bool {
    if !board.piece_at(from).is_some_and(|mover| mover.is(color, Piece::Pawn)) {
        return false;
    }
    let (df, dr) = from.delta(to);
    if df.abs() != 1 || dr != color.pawn_direction() || !board.is_empty_square(to) {
        return false;
    }
    let victim_square = Square::new(to.file(), from.rank());
    let eligible = board.piece_at(victim_square).is_some_and(|victim| {
        victim.piece == Piece::Pawn && victim.color != color && victim.double_step
    });
    eligible && board.last_moved() == Some(victim_square)
}

pub(super) fn attacks(from: Square, to: Square, color: Color) -> bool {
    let (df, dr) = from.delta(to);
    df.abs() == 1 && dr == color.pawn_direction()
}
