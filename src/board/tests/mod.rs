//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Per-piece movement and attack geometry
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `perft.rs` - Move-tree counts against known values
//! - `edge_cases.rs` - Castling preconditions, en passant window, blocked paths
//! - `proptest.rs` - Property-based tests

mod rules;

use crate::board::{Board, BoardBuilder, Color, Occupant, Piece, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Build a board from eight placement rows, rank 8 first (`.` for empty).
///
/// Pieces start unmoved and no castling rights are granted.
pub(super) fn board_from_rows(rows: [&str; 8]) -> BoardBuilder {
    let mut builder = BoardBuilder::new();
    for (rank, row) in rows.iter().enumerate() {
        for (file, c) in row.chars().enumerate() {
            if let Some(piece) = Piece::from_char(c) {
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                builder = builder.occupant(
                    Square::new(file as i8, rank as i8),
                    Occupant::new(color, piece),
                );
            }
        }
    }
    builder
}

pub(super) fn kings_only() -> BoardBuilder {
    BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e8"), Color::Black, Piece::King)
}

pub(super) fn castling_position() -> Board {
    board_from_rows([
        "r...k..r",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "R...K..R",
    ])
    .all_castling_rights()
    .build()
}
