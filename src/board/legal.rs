//! Legal-move enumeration by brute force over the mailbox.

use super::rules;
use super::{Board, Color, Move, Square};

impl Board {
    /// True if `color`'s king is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        rules::is_in_check(self, color)
    }

    /// Whether `mv` obeys the moving piece's rules and keeps `color`'s king safe.
    ///
    /// The piece on `mv.from` must belong to `color`. The board is left as found.
    pub fn is_legal_move(&mut self, mv: Move, color: Color) -> bool {
        if !self.piece_at(mv.from).is_some_and(|occ| occ.color == color) {
            return false;
        }
        if !rules::is_valid_move(self, mv.from, mv.to) {
            return false;
        }
        let info = self.make_move(mv);
        let safe = !self.is_in_check(color);
        self.unmake_move(mv, info);
        safe
    }

    /// Every legal move for `color`: each own piece against each square,
    /// filtered by its rules and a trial make for self-check.
    pub fn legal_moves(&mut self, color: Color) -> Vec<Move> {
        let origins: Vec<Square> = self.pieces_of(color).map(|(sq, _)| sq).collect();
        let mut moves = Vec::new();
        for from in origins {
            for to in Square::all() {
                let mv = Move::new(from, to);
                if self.is_legal_move(mv, color) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Stops at the first legal move found.
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let origins: Vec<Square> = self.pieces_of(color).map(|(sq, _)| sq).collect();
        origins.into_iter().any(|from| {
            Square::all().any(|to| self.is_legal_move(Move::new(from, to), color))
        })
    }

    /// Count leaf nodes of the legal move tree to `depth` plies, `color` to move.
    pub fn perft(&mut self, color: Color, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            let info = self.make_move(mv);
            nodes += self.perft(color.opponent(), depth - 1);
            self.unmake_move(mv, info);
        }
        nodes
    }
}
