//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (file, rank).
///
/// Rank 0 is Black's back rank and rank 7 is White's, so `e2` is
/// `Square(4, 6)`. Squares may be built off the board; `is_valid`
/// says whether both coordinates fall in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub i8, pub i8); // (file, rank)

impl Square {
    #[inline]
    #[must_use]
    pub const fn new(file: i8, rank: i8) -> Self {
        Square(file, rank)
    }

    /// Create a new square with bounds checking
    #[must_use]
    pub const fn checked(file: i8, rank: i8) -> Option<Self> {
        let sq = Square(file, rank);
        if sq.is_valid() {
            Some(sq)
        } else {
            None
        }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> i8 {
        self.0
    }

    /// Get the rank (0-7, where 0 = the eighth rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i8 {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 0 && self.0 < 8 && self.1 >= 0 && self.1 < 8
    }

    /// The square `df` files and `dr` ranks away (possibly off the board)
    #[inline]
    #[must_use]
    pub const fn offset(self, df: i8, dr: i8) -> Self {
        Square(self.0.wrapping_add(df), self.1.wrapping_add(dr))
    }

    /// File and rank distance from `self` to `to`
    #[inline]
    #[must_use]
    pub const fn delta(self, to: Square) -> (i8, i8) {
        (to.0.wrapping_sub(self.0), to.1.wrapping_sub(self.1))
    }

    /// One of the sixteen squares of the central 4x4 region (files and ranks 2-5)
    #[inline]
    #[must_use]
    pub const fn is_central(self) -> bool {
        self.0 >= 2 && self.0 <= 5 && self.1 >= 2 && self.1 <= 5
    }

    /// Every on-board square, rank by rank starting at rank 0
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Square(file, rank)))
    }

    /// Grid index (0-63); only meaningful for valid squares
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        (self.1 as usize) * 8 + self.0 as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", (self.0 as u8 + b'a') as char, 8 - self.1)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (i8, i8)) -> Result<Self, Self::Error> {
        Square::checked(file, rank).ok_or(SquareError::OutOfBounds { file, rank })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as i8,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => 8 - (b - b'0') as i8,
            _ => return Err(invalid()),
        };

        Ok(Square(file, rank))
    }
}
