//! Move types and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A move from one square to another.
///
/// There are no special-move flags: no promotion payload, no castling and no
/// en passant. Applying a move relocates whatever occupies `from` onto `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
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

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse four-character coordinate notation such as `e2e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }
        let invalid = |_| MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from = s[..2].parse::<Square>().map_err(invalid)?;
        let to = s[2..].parse::<Square>().map_err(invalid)?;
        Ok(Move { from, to })
    }
}

/// Ordered list of generated moves.
///
/// Order is significant: the move selector breaks score ties in favour of
/// the earliest move in the list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Owning iterator over moves in a `MoveList`
pub type MoveListIntoIter = std::vec::IntoIter<Move>;

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_four_character_coordinates() {
        let mv = Move::new(Square(6, 4), Square(4, 4));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn parse_coordinate_move() {
        let mv: Move = "g1f3".parse().expect("valid move");
        assert_eq!(mv.from(), Square(7, 6));
        assert_eq!(mv.to(), Square(5, 5));
    }

    #[test]
    fn parse_rejects_bad_text() {
        assert_eq!(
            "e2e".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            "e7e8q".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 5 })
        );
        assert_eq!(
            "z2e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare {
                notation: "z2e4".to_string()
            })
        );
    }

    #[test]
    fn move_list_keeps_insertion_order() {
        let mut list = MoveList::new();
        let a = Move::new(Square(6, 0), Square(5, 0));
        let b = Move::new(Square(6, 0), Square(4, 0));
        list.push(a);
        list.push(b);
        assert_eq!(list.len(), 2);
        assert_eq!(list.first(), Some(a));
        assert_eq!(list[1], b);
        assert!(list.contains(b));
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![a, b]);
    }
}
