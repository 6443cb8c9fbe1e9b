//! Fluent builder for constructing chess positions.
//!
//! # Example
//! ```
//! use chess_core::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(4, 7), Color::White, Piece::King)
//!     .piece(Square::new(4, 0), Color::Black, Piece::King)
//!     .piece(Square::new(0, 6), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.occupants().count(), 3);
//! ```

use super::{Board, CastleSide, CastlingRights, Color, Occupant, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Occupant)>,
    castling_rights: CastlingRights,
    last_moved: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            castling_rights: CastlingRights::none(),
            last_moved: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        BoardBuilder {
            pieces: board.occupants().collect(),
            castling_rights: board.castling_rights(),
            last_moved: None,
        }
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, piece: Piece) -> Self {
        self.occupant(square, Occupant::new(color, piece))
    }

    /// Place a piece that has already moved (it cannot take part in castling).
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, piece: Piece) -> Self {
        self.occupant(square, Occupant::new(color, piece).moved())
    }

    /// Place an occupant with explicit flags.
    #[must_use]
    pub fn occupant(mut self, square: Square, occupant: Occupant) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, occupant));
        self
    }

    /// A pawn that has just advanced two squares and may be taken en passant.
    #[must_use]
    pub fn double_stepped_pawn(mut self, square: Square, color: Color) -> Self {
        let mut pawn = Occupant::new(color, Piece::Pawn).moved();
        pawn.double_step = true;
        self = self.occupant(square, pawn);
        self.last_moved = Some(square);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, CastleSide::Kingside);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, CastleSide::Queenside);
        self
    }

    /// Enable all castling rights.
    #[must_use]
    pub fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the square of the most recently moved piece.
    #[must_use]
    pub fn last_moved(mut self, square: Square) -> Self {
        self.last_moved = Some(square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, occupant) in self.pieces {
            board.place_piece(Some(occupant), square);
        }
        board.castling_rights = self.castling_rights;
        board.last_moved = self.last_moved;
        board
    }
}
