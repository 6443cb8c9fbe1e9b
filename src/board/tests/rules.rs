//! Movement and attack geometry per piece.

use super::{board_from_rows, kings_only, sq};
use crate::board::rules::{attacks, is_in_check, is_square_attacked, is_valid_move};
use crate::board::{Board, Color, Piece};

#[test]
fn test_pawn_pushes_from_start() {
    let board = Board::new();
    assert!(is_valid_move(&board, sq("e2"), sq("e3")));
    assert!(is_valid_move(&board, sq("e2"), sq("e4")));
    assert!(!is_valid_move(&board, sq("e2"), sq("e5")));
    assert!(is_valid_move(&board, sq("d7"), sq("d5")));
    assert!(!is_valid_move(&board, sq("d7"), sq("d8")));
    // backwards and sideways
    assert!(!is_valid_move(&board, sq("e2"), sq("e1")));
    assert!(!is_valid_move(&board, sq("e2"), sq("d2")));
}

#[test]
fn test_pawn_double_step_only_from_home_rank() {
    let board = kings_only()
        .moved_piece(sq("a3"), Color::White, Piece::Pawn)
        .build();
    assert!(is_valid_move(&board, sq("a3"), sq("a4")));
    assert!(!is_valid_move(&board, sq("a3"), sq("a5")));
}

#[test]
fn test_pawn_blocked_push() {
    let board = kings_only()
        .piece(sq("c2"), Color::White, Piece::Pawn)
        .piece(sq("c3"), Color::Black, Piece::Knight)
        .piece(sq("f2"), Color::White, Piece::Pawn)
        .piece(sq("f4"), Color::Black, Piece::Knight)
        .build();
    assert!(!is_valid_move(&board, sq("c2"), sq("c3")));
    assert!(!is_valid_move(&board, sq("c2"), sq("c4")));
    assert!(is_valid_move(&board, sq("f2"), sq("f3")));
    assert!(!is_valid_move(&board, sq("f2"), sq("f4")));
}

#[test]
fn test_pawn_captures_diagonally_only_onto_enemies() {
    let board = kings_only()
        .piece(sq("d4"), Color::White, Piece::Pawn)
        .piece(sq("e5"), Color::Black, Piece::Rook)
        .piece(sq("c5"), Color::White, Piece::Rook)
        .build();
    assert!(is_valid_move(&board, sq("d4"), sq("e5")));
    assert!(!is_valid_move(&board, sq("d4"), sq("c5")));
    assert!(!is_valid_move(&board, sq("d4"), sq("e3")));
}

#[test]
fn test_knight_jumps() {
    let board = Board::new();
    assert!(is_valid_move(&board, sq("g1"), sq("f3")));
    assert!(is_valid_move(&board, sq("g1"), sq("h3")));
    assert!(!is_valid_move(&board, sq("g1"), sq("e2")));
    assert!(!is_valid_move(&board, sq("g1"), sq("g3")));
}

#[test]
fn test_sliders_need_clear_paths() {
    let board = Board::new();
    assert!(!is_valid_move(&board, sq("a1"), sq("a3")));
    assert!(!is_valid_move(&board, sq("c1"), sq("e3")));
    assert!(!is_valid_move(&board, sq("d1"), sq("d3")));

    let open = kings_only()
        .piece(sq("d4"), Color::White, Piece::Queen)
        .piece(sq("d6"), Color::Black, Piece::Pawn)
        .build();
    assert!(is_valid_move(&open, sq("d4"), sq("h8")));
    assert!(is_valid_move(&open, sq("d4"), sq("a1")));
    assert!(is_valid_move(&open, sq("d4"), sq("d6")));
    assert!(!is_valid_move(&open, sq("d4"), sq("d7")));
    assert!(!is_valid_move(&open, sq("d4"), sq("e6")));
}

#[test]
fn test_bishop_and_rook_lines() {
    let board = kings_only()
        .piece(sq("c4"), Color::White, Piece::Bishop)
        .piece(sq("h4"), Color::White, Piece::Rook)
        .build();
    assert!(is_valid_move(&board, sq("c4"), sq("f7")));
    assert!(!is_valid_move(&board, sq("c4"), sq("c5")));
    assert!(is_valid_move(&board, sq("h4"), sq("h8")));
    assert!(is_valid_move(&board, sq("h4"), sq("d4")));
    // the bishop blocks the rook's path along the fourth rank
    assert!(!is_valid_move(&board, sq("h4"), sq("a4")));
    assert!(!is_valid_move(&board, sq("h4"), sq("g5")));
}

#[test]
fn test_king_single_steps() {
    let board = kings_only().build();
    assert!(is_valid_move(&board, sq("e1"), sq("d2")));
    assert!(is_valid_move(&board, sq("e1"), sq("f1")));
    assert!(!is_valid_move(&board, sq("e1"), sq("e3")));
    // no rights and no rook: castling displacement is not a king step
    assert!(!is_valid_move(&board, sq("e1"), sq("g1")));
}

#[test]
fn test_no_move_onto_own_piece_or_off_board() {
    let board = Board::new();
    assert!(!is_valid_move(&board, sq("d1"), sq("e1")));
    assert!(!is_valid_move(&board, sq("e2"), sq("e2")));
    let off = sq("a1").offset(-1, 0);
    assert!(!is_valid_move(&board, sq("a1"), off));
    assert!(!is_valid_move(&board, sq("e4"), sq("e5")));
}

#[test]
fn test_pawn_attacks_ignore_occupancy_but_not_direction() {
    let board = kings_only()
        .piece(sq("d4"), Color::White, Piece::Pawn)
        .piece(sq("d5"), Color::Black, Piece::Pawn)
        .build();
    assert!(attacks(&board, sq("d4"), sq("c5")));
    assert!(attacks(&board, sq("d4"), sq("e5")));
    assert!(!attacks(&board, sq("d4"), sq("d5")));
    assert!(!attacks(&board, sq("d4"), sq("c3")));
    assert!(attacks(&board, sq("d5"), sq("e4")));
}

#[test]
fn test_king_attacks_do_not_include_castling() {
    let board = super::castling_position();
    assert!(is_valid_move(&board, sq("e1"), sq("g1")));
    assert!(!attacks(&board, sq("e1"), sq("g1")));
    assert!(attacks(&board, sq("e1"), sq("f2")));
}

#[test]
fn test_check_detection() {
    let board = board_from_rows([
        "....k...",
        "........",
        "........",
        "........",
        "....R...",
        "........",
        "........",
        "....K...",
    ])
    .build();
    assert!(is_in_check(&board, Color::Black));
    assert!(!is_in_check(&board, Color::White));
    assert!(is_square_attacked(&board, sq("e7"), Color::White));
    assert!(!is_square_attacked(&board, sq("d7"), Color::White));
}

#[test]
fn test_missing_king_is_never_in_check() {
    let board = Board::empty();
    assert!(!is_in_check(&board, Color::White));
}
