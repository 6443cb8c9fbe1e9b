//! Move types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A from/to pair. Promotion choice travels separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Parse coordinate notation with an optional promotion letter (`e7e8q`).
    pub fn parse_with_promotion(s: &str) -> Result<(Move, Option<Piece>), MoveParseError> {
        let len = s.len();
        if !(4..=5).contains(&len) || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength { len });
        }
        let square = |part: &str| {
            part.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        let mv = Move::new(square(&s[0..2])?, square(&s[2..4])?);

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if piece.is_promotion_choice() => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };
        Ok((mv, promotion))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        Move::parse_with_promotion(s).map(|(mv, _)| mv)
    }
}

/// A scored move for move ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_uses_coordinates() {
        let mv = Move::new(Square::new(4, 6), Square::new(4, 4));
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!("e2e4".parse::<Move>(), Ok(mv));
    }

    #[test]
    fn test_parse_promotion_suffix() {
        let (mv, promo) = Move::parse_with_promotion("e7e8n").unwrap();
        assert_eq!(mv, Move::new(Square::new(4, 1), Square::new(4, 0)));
        assert_eq!(promo, Some(Piece::Knight));

        assert_eq!(
            Move::parse_with_promotion("e7e8k"),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
        assert_eq!(
            Move::parse_with_promotion("e7e"),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            Move::parse_with_promotion("z7e8"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }
}
