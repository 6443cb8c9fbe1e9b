//! Static evaluation from Black's point of view.
//!
//! Positive scores favour Black, negative favour White.

use crate::board::{Board, Color, Piece};

/// Score of a position where White is checkmated
pub const MATE_SCORE: i32 = 1000;

const CHECK_BONUS: i32 = 3;

/// Evaluate `board` with `to_move` about to play.
///
/// A side to move with no legal reply is mated (±[`MATE_SCORE`]) or
/// stalemated (0), and a waiting side with no move and no check is
/// stalemated too. Otherwise material, central presence and check.
pub fn evaluate(board: &mut Board, to_move: Color) -> i32 {
    if !board.has_legal_move(to_move) {
        return if board.is_in_check(to_move) {
            mated_score(to_move)
        } else {
            0
        };
    }
    let waiting = to_move.opponent();
    if !board.is_in_check(waiting) && !board.has_legal_move(waiting) {
        return 0;
    }

    let mut score = material(board) + centre_control(board);
    if board.is_in_check(Color::White) {
        score += CHECK_BONUS;
    }
    if board.is_in_check(Color::Black) {
        score -= CHECK_BONUS;
    }
    score
}

#[inline]
const fn mated_score(loser: Color) -> i32 {
    match loser {
        Color::White => MATE_SCORE,
        Color::Black => -MATE_SCORE,
    }
}

#[inline]
const fn sign(color: Color) -> i32 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Material balance; kings are never counted.
#[must_use]
pub fn material(board: &Board) -> i32 {
    board
        .occupants()
        .filter(|(_, occ)| occ.piece != Piece::King)
        .map(|(_, occ)| sign(occ.color) * occ.piece.value())
        .sum()
}

/// One point per piece standing in the central 4x4 region.
#[must_use]
pub fn centre_control(board: &Board) -> i32 {
    board
        .occupants()
        .filter(|(sq, _)| sq.is_central())
        .map(|(_, occ)| sign(occ.color))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Move, Square};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_start_position_is_level() {
        let mut board = Board::new();
        assert_eq!(evaluate(&mut board, Color::White), 0);
        assert_eq!(evaluate(&mut board, Color::Black), 0);
    }

    #[test]
    fn test_centre_and_material_terms() {
        let mut board = Board::new();
        board.make_move(Move::new(sq("e2"), sq("e4")));
        assert_eq!(centre_control(&board), -1);
        assert_eq!(material(&board), 0);
        assert_eq!(evaluate(&mut board, Color::Black), -1);

        board.make_move(Move::new(sq("d7"), sq("d5")));
        board.make_move(Move::new(sq("e4"), sq("d5")));
        assert_eq!(material(&board), -1);
        assert_eq!(centre_control(&board), -1);
    }

    #[test]
    fn test_material_ignores_kings() {
        let board = BoardBuilder::new()
            .piece(sq("a1"), Color::White, Piece::King)
            .piece(sq("h8"), Color::Black, Piece::King)
            .piece(sq("h7"), Color::Black, Piece::Rook)
            .piece(sq("a2"), Color::White, Piece::Knight)
            .build();
        assert_eq!(material(&board), 5 - 3);
    }

    #[test]
    fn test_check_term() {
        let mut board = BoardBuilder::new()
            .piece(sq("a1"), Color::White, Piece::King)
            .piece(sq("h8"), Color::Black, Piece::King)
            .piece(sq("h7"), Color::Black, Piece::Rook)
            .piece(sq("c8"), Color::Black, Piece::Rook)
            .build();
        board.make_move(Move::new(sq("h7"), sq("a7")));
        // in check, with b1 and b2 still free
        assert_eq!(evaluate(&mut board, Color::White), 10 + 3);
    }

    #[test]
    fn test_mate_and_stalemate_scores() {
        let mut mated = BoardBuilder::new()
            .piece(sq("a1"), Color::White, Piece::King)
            .piece(sq("h8"), Color::Black, Piece::King)
            .piece(sq("h1"), Color::Black, Piece::Rook)
            .piece(sq("g2"), Color::Black, Piece::Rook)
            .build();
        assert_eq!(evaluate(&mut mated, Color::White), MATE_SCORE);

        let mut stalemate = BoardBuilder::new()
            .piece(sq("h8"), Color::Black, Piece::King)
            .piece(sq("f7"), Color::White, Piece::Queen)
            .piece(sq("g6"), Color::White, Piece::King)
            .build();
        assert_eq!(evaluate(&mut stalemate, Color::Black), 0);
    }

    #[test]
    fn test_stalemate_of_waiting_side_is_drawn() {
        // Black has no move and is not in check, but it is White's turn
        let mut board = BoardBuilder::new()
            .piece(sq("h8"), Color::Black, Piece::King)
            .piece(sq("f7"), Color::White, Piece::Queen)
            .piece(sq("g6"), Color::White, Piece::King)
            .build();
        assert_eq!(material(&board), -9);
        assert_eq!(evaluate(&mut board, Color::White), 0);
    }
}
