use super::{CastlingRights, Color, Occupant, Piece, Square};

/// Restores a position after [`Board::make_move`].
///
/// Holds exactly what the make changed, so unmake puts every flag back,
/// including `has_moved` and `double_step` on the pieces involved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    /// The moving piece as it stood before the move
    pub(crate) moved: Occupant,
    /// Captured piece and the square it stood on (differs from `to` for en passant)
    pub(crate) captured: Option<(Square, Occupant)>,
    /// Castling rook: origin, destination, pre-move copy
    pub(crate) rook: Option<(Square, Square, Occupant)>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_last_moved: Option<Square>,
}

impl UnmakeInfo {
    /// The captured piece, if the move took one
    #[must_use]
    pub fn captured(&self) -> Option<Occupant> {
        self.captured.map(|(_, occupant)| occupant)
    }

    #[must_use]
    pub fn is_castling(&self) -> bool {
        self.rook.is_some()
    }

    /// True when the capture happened off the destination square
    #[must_use]
    pub fn is_en_passant(&self, to: Square) -> bool {
        matches!(self.captured, Some((square, _)) if square != to)
    }
}

/// An 8x8 mailbox of occupants plus the position-level state that rules
/// depend on: castling rights and the square of the last moved piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [Option<Occupant>; 64],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) last_moved: Option<Square>,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Board::create_initial_board()
    }

    /// Back ranks, pawn ranks, all four castling rights.
    #[must_use]
    pub fn create_initial_board() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            let file = file as i8;
            for color in Color::BOTH {
                board.place_piece(
                    Some(Occupant::new(color, *piece)),
                    Square::new(file, color.back_rank()),
                );
                board.place_piece(
                    Some(Occupant::new(color, Piece::Pawn)),
                    Square::new(file, color.pawn_home_rank()),
                );
            }
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces and no castling rights
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            castling_rights: CastlingRights::none(),
            last_moved: None,
        }
    }

    /// Set a square's content, replacing whatever was there.
    ///
    /// No legality checks. Off-board squares are ignored.
    pub fn place_piece(&mut self, occupant: Option<Occupant>, square: Square) {
        if square.is_valid() {
            self.squares[square.index()] = occupant;
        }
    }

    #[inline]
    #[must_use]
    pub fn is_valid_position(&self, square: Square) -> bool {
        square.is_valid()
    }

    /// True for an on-board square with nothing on it
    #[inline]
    #[must_use]
    pub fn is_empty_square(&self, square: Square) -> bool {
        square.is_valid() && self.squares[square.index()].is_none()
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Occupant> {
        if square.is_valid() {
            self.squares[square.index()]
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square of the piece that made the most recent move
    #[inline]
    #[must_use]
    pub fn last_moved(&self) -> Option<Square> {
        self.last_moved
    }

    /// Every occupied square with its occupant, rank by rank
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|occ| (sq, occ)))
    }

    /// Occupied squares of one color
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        self.occupants().filter(move |(_, occ)| occ.color == color)
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        debug_assert!(
            self.pieces_of(color)
                .filter(|(_, occ)| occ.piece == Piece::King)
                .count()
                <= 1,
            "more than one {color} king"
        );
        self.pieces_of(color)
            .find(|(_, occ)| occ.piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    pub(crate) fn take(&mut self, square: Square) -> Option<Occupant> {
        if square.is_valid() {
            self.squares[square.index()].take()
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
