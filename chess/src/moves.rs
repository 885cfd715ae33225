use crate::board::Board;
use crate::legal;
use crate::types::{Coord, CoordParseError};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a [`Move`] from a coordinate pair
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum MoveParseError {
    #[error("bad string length")]
    BadLength,
    #[error("bad source: {0}")]
    BadSrc(CoordParseError),
    #[error("bad destination: {0}")]
    BadDst(CoordParseError),
}

/// Move of a piece from one square to another
///
/// A move is just a pair of squares. Promotion is implied (a pawn reaching the last rank always
/// becomes a queen), so no extra data is needed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    src: Coord,
    dst: Coord,
}

impl Move {
    #[inline]
    pub const fn new(src: Coord, dst: Coord) -> Move {
        Move { src, dst }
    }

    #[inline]
    pub const fn src(&self) -> Coord {
        self.src
    }

    #[inline]
    pub const fn dst(&self) -> Coord {
        self.dst
    }

    /// Returns `true` if the move is legal on board `b`
    ///
    /// See [`legal::is_legal()`] for details.
    #[inline]
    pub fn is_legal(&self, b: &Board) -> bool {
        legal::is_legal(b, self.src, self.dst)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::BadLength);
        }
        let src = Coord::from_str(&s[0..2]).map_err(MoveParseError::BadSrc)?;
        let dst = Coord::from_str(&s[2..4]).map_err(MoveParseError::BadDst)?;
        Ok(Move { src, dst })
    }
}
