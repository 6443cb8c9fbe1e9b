//! Turn-based game state on top of the board.
//!
//! [`GameState`] is the only way moves are committed during play: it checks
//! turn order and self-check, flips the turn, records history and detects
//! checkmate and stalemate for the side to move.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::rules;
use crate::board::{
    Board, CastleSide, Color, Move, MoveError, Occupant, Piece, PromotionError, Square,
};

/// Outcome of the game so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    #[default]
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    #[must_use]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "in progress"),
            GameResult::WhiteWins => write!(f, "White wins"),
            GameResult::BlackWins => write!(f, "Black wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// A committed move as shown in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub color: Color,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub castle: Option<CastleSide>,
    pub en_passant: bool,
    pub promotion: Option<Piece>,
    pub gives_check: bool,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.castle {
            Some(CastleSide::Kingside) => write!(f, "O-O")?,
            Some(CastleSide::Queenside) => write!(f, "O-O-O")?,
            None => {
                let sep = if self.captured.is_some() { 'x' } else { '-' };
                write!(f, "{}{sep}{}", self.mv.from, self.mv.to)?;
                if self.en_passant {
                    write!(f, " e.p.")?;
                }
                if let Some(piece) = self.promotion {
                    write!(f, "={}", piece.to_char().to_ascii_uppercase())?;
                }
            }
        }
        if self.gives_check {
            write!(f, "+")?;
        }
        Ok(())
    }
}

/// Board, side to move, and game outcome as one unit.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    turn: Color,
    game_over: bool,
    result: GameResult,
    /// Result was set by resignation or an outside call, not by the rules.
    decided: bool,
    ply: u32,
    history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    /// A new game from the standard position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState::from_board(Board::new(), Color::White)
    }

    /// A game continuing from an arbitrary position.
    ///
    /// Checkmate or stalemate of `turn` is detected immediately.
    #[must_use]
    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut game = GameState {
            board,
            turn,
            game_over: false,
            result: GameResult::InProgress,
            decided: false,
            ply: 0,
            history: Vec::new(),
        };
        game.update_status();
        game
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Half-moves committed since the game started
    #[inline]
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Attempt a move for the side to move. Returns whether it was played.
    pub fn try_make_move(&mut self, from: Square, to: Square) -> bool {
        self.make_move(from, to).is_ok()
    }

    /// Validate and commit a move for the side to move.
    ///
    /// On error the game is exactly as it was before the call.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let mv = Move::new(from, to);
        let result = self.commit(mv);
        if let Err(err) = &result {
            log::trace!("rejected {mv}: {err}");
        }
        result
    }

    fn commit(&mut self, mv: Move) -> Result<MoveRecord, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let mover = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::NoPiece { square: mv.from })?;
        if mover.color != self.turn {
            return Err(MoveError::WrongTurn {
                expected: self.turn,
                found: mover.color,
            });
        }

        let castle = match mover.piece {
            Piece::King => CastleSide::from_king_move(mv.from, mv.to),
            _ => None,
        };
        if let Some(side) = castle {
            if !rules::can_castle(&self.board, mv.from, mv.to) {
                return Err(MoveError::CastlingNotAllowed {
                    color: mover.color,
                    side,
                });
            }
        } else if !rules::is_valid_move(&self.board, mv.from, mv.to) {
            return Err(MoveError::InvalidMove {
                piece: mover.piece,
                mv,
            });
        }

        let info = self.board.make_move(mv);
        if self.board.is_in_check(mover.color) {
            self.board.unmake_move(mv, info);
            return Err(MoveError::LeavesKingInCheck {
                color: mover.color,
                mv,
            });
        }

        let record = MoveRecord {
            mv,
            color: mover.color,
            piece: mover.piece,
            captured: info.captured().map(|occ| occ.piece),
            castle,
            en_passant: info.is_en_passant(mv.to),
            promotion: None,
            gives_check: self.board.is_in_check(mover.color.opponent()),
        };
        log::debug!("{} plays {record}", mover.color);

        self.turn = self.turn.opponent();
        self.ply += 1;
        self.history.push(record);
        self.update_status();
        Ok(record)
    }

    /// Recompute game-over and result for the side to move.
    fn update_status(&mut self) {
        if self.decided {
            return;
        }
        let side = self.turn;
        let mut board = self.board.clone();
        if board.has_legal_move(side) {
            self.game_over = false;
            self.result = GameResult::InProgress;
            return;
        }

        self.game_over = true;
        self.result = if board.is_in_check(side) {
            GameResult::win_for(side.opponent())
        } else {
            GameResult::Draw
        };
        log::info!("game over after {} plies: {}", self.ply, self.result);
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// In check with no legal move.
    #[must_use]
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, yet no legal move.
    #[must_use]
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// True if a piece of `color`'s opponent attacks `square`.
    #[must_use]
    pub fn is_square_under_attack(&self, square: Square, color: Color) -> bool {
        rules::is_square_attacked(&self.board, square, color.opponent())
    }

    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.board.clone().legal_moves(color)
    }

    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board.clone().has_legal_move(color)
    }

    /// Square of a pawn waiting to be promoted after the last committed move.
    #[must_use]
    pub fn pending_promotion(&self) -> Option<Square> {
        let last = self.history.last()?;
        if last.promotion.is_some() {
            return None;
        }
        let pawn = self.board.piece_at(last.mv.to)?;
        (pawn.piece == Piece::Pawn && last.mv.to.rank() == pawn.color.promotion_rank())
            .then_some(last.mv.to)
    }

    /// Replace the pawn on `square`, which must stand on its last rank.
    ///
    /// The promoted piece counts as part of the move that brought the pawn
    /// there, so checkmate and stalemate are re-evaluated.
    pub fn promote(&mut self, square: Square, piece: Piece) -> Result<(), PromotionError> {
        if !piece.is_promotion_choice() {
            return Err(PromotionError::InvalidPiece { piece });
        }
        let pawn = self
            .board
            .piece_at(square)
            .filter(|occ| occ.piece == Piece::Pawn)
            .ok_or(PromotionError::NoPawn { square })?;
        if square.rank() != pawn.color.promotion_rank() {
            return Err(PromotionError::NotOnLastRank { square });
        }

        self.board
            .place_piece(Some(Occupant::new(pawn.color, piece).moved()), square);
        let gives_check = self.board.is_in_check(pawn.color.opponent());
        if let Some(last) = self.history.last_mut().filter(|rec| rec.mv.to == square) {
            last.promotion = Some(piece);
            last.gives_check = gives_check;
        }
        log::debug!("{} pawn on {square} promoted to {piece}", pawn.color);
        self.update_status();
        Ok(())
    }

    /// `color` gives up; the opponent wins.
    pub fn resign(&mut self, color: Color) {
        log::info!("{color} resigns");
        self.end_game_with_winner(color.opponent());
    }

    /// End the game now with `winner` as the result.
    pub fn end_game_with_winner(&mut self, winner: Color) {
        self.game_over = true;
        self.decided = true;
        self.result = GameResult::win_for(winner);
        log::info!("game over: {}", self.result);
    }

    /// Discard the current game and start again from the initial position.
    pub fn restart(&mut self) {
        *self = GameState::new();
        log::info!("new game");
    }
}
