//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// The wing a king castles toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Classify a king displacement: two files sideways on the same rank.
    #[inline]
    #[must_use]
    pub const fn from_king_move(from: Square, to: Square) -> Option<CastleSide> {
        if from.rank() != to.rank() {
            return None;
        }
        match to.file() - from.file() {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// File of the rook's home corner (h for kingside, a for queenside)
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> i8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File step from the king toward the rook
    #[inline]
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }

    /// The side whose rook starts on `square` for `color`, if it is a home corner
    #[must_use]
    pub fn for_rook_home(color: Color, square: Square) -> Option<CastleSide> {
        if square.rank() != color.back_rank() {
            return None;
        }
        match square.file() {
            7 => Some(CastleSide::Kingside),
            0 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Clear both rights of one color (the king has moved)
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::Kingside);
        self.remove(color, CastleSide::Queenside);
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => CASTLE_WHITE_K,
            (Color::White, CastleSide::Queenside) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_Q,
        }
    }
}
