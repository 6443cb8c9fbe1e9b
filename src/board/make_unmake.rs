use super::rules;
use super::{Board, CastleSide, Color, Move, Occupant, Piece, Square, UnmakeInfo};

impl Board {
    /// Apply a move without any legality check and return the undo token.
    ///
    /// Castling (king two files sideways) also relocates the rook; a pawn
    /// moving diagonally onto an empty square takes the pawn beside it.
    ///
    /// # Panics
    /// Panics if `mv.from` is empty.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        self.relocate(mv, true)
    }

    /// Undo a move made with [`Board::make_move`].
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        self.squares[mv.to.index()] = None;
        self.squares[mv.from.index()] = Some(info.moved);

        if let Some((square, victim)) = info.captured {
            self.squares[square.index()] = Some(victim);
        }
        if let Some((rook_from, rook_to, rook)) = info.rook {
            self.squares[rook_to.index()] = None;
            self.squares[rook_from.index()] = Some(rook);
        }

        self.castling_rights = info.previous_castling_rights;
        self.last_moved = info.previous_last_moved;
    }

    /// Physically move the piece on `from` if its movement rules allow it.
    ///
    /// Handles castling and castling-rights bookkeeping but not turn order,
    /// self-check, or en passant removal. Returns false when `from` is empty
    /// or the piece cannot make that move.
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        if self.piece_at(from).is_none() || !rules::is_valid_move(self, from, to) {
            log::trace!("move_piece rejected {from}{to}");
            return false;
        }
        self.relocate(Move::new(from, to), false);
        true
    }

    fn relocate(&mut self, mv: Move, capture_en_passant: bool) -> UnmakeInfo {
        let Move { from, to } = mv;
        let moved = self.piece_at(from).expect("make_move: 'from' square empty");
        let previous_castling_rights = self.castling_rights;
        let previous_last_moved = self.last_moved;

        let mut captured = self.take(to).map(|victim| (to, victim));
        let mut rook = None;

        if moved.piece == Piece::King {
            if let Some(side) = CastleSide::from_king_move(from, to) {
                let rook_from = Square::new(side.rook_file(), from.rank());
                let rook_to = from.offset(side.direction(), 0);
                if let Some(castle_rook) = self.take(rook_from) {
                    self.squares[rook_to.index()] = Some(castle_rook.moved());
                    rook = Some((rook_from, rook_to, castle_rook));
                }
            }
        } else if capture_en_passant
            && captured.is_none()
            && rules::is_en_passant_capture(self, from, to, moved.color)
        {
            let victim_square = Square::new(to.file(), from.rank());
            captured = self.take(victim_square).map(|victim| (victim_square, victim));
        }

        let mut placed = moved.moved();
        placed.double_step = moved.piece == Piece::Pawn && from.delta(to).1.abs() == 2;
        self.squares[from.index()] = None;
        self.squares[to.index()] = Some(placed);

        self.update_castling_rights(moved, from, captured);
        self.last_moved = Some(to);

        UnmakeInfo {
            moved,
            captured,
            rook,
            previous_castling_rights,
            previous_last_moved,
        }
    }

    fn update_castling_rights(
        &mut self,
        moved: Occupant,
        from: Square,
        captured: Option<(Square, Occupant)>,
    ) {
        match moved.piece {
            Piece::King => self.castling_rights.remove_color(moved.color),
            Piece::Rook => self.clear_rook_right(moved.color, from),
            _ => {}
        }
        if let Some((square, victim)) = captured {
            if victim.piece == Piece::Rook {
                self.clear_rook_right(victim.color, square);
            }
        }
    }

    fn clear_rook_right(&mut self, color: Color, square: Square) {
        if let Some(side) = CastleSide::for_rook_home(color, square) {
            self.castling_rights.remove(color, side);
        }
    }
}
