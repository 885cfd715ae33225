//! Move generation

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::legal;
use crate::moves::Move;
use crate::semilegal;
use crate::types::{Color, Coord};

use arrayvec::ArrayVec;
use std::ops::{Deref, DerefMut};

/// Upper bound on the number of moves of one side on any board
///
/// A side with `k` pieces has at most `min(27, 64 - k)` destinations per piece, so at most 999
/// moves in total.
pub const MAX_MOVES: usize = 1024;

/// List of moves with bounded capacity
///
/// The capacity is [`MAX_MOVES`], so the list never overflows when filled with the moves of one
/// side, whatever the board is.
#[derive(Default, Debug, Clone)]
pub struct MoveList(ArrayVec<Move, MAX_MOVES>);

impl Deref for MoveList {
    type Target = ArrayVec<Move, MAX_MOVES>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

/// Sink for generated moves
pub trait MovePush {
    fn push(&mut self, m: Move);
}

impl MovePush for MoveList {
    fn push(&mut self, m: Move) {
        self.0.push(m);
    }
}

impl MovePush for Vec<Move> {
    fn push(&mut self, m: Move) {
        Vec::push(self, m);
    }
}

/// Returns all the squares where the piece on `src` can move semi-legally
///
/// Own king safety is not considered. If `src` is empty, the result is empty.
pub fn semilegal_destinations(b: &Board, src: Coord) -> Bitboard {
    if b.get(src).is_empty() {
        return Bitboard::EMPTY;
    }
    Coord::iter()
        .filter(|&dst| semilegal::is_move_semilegal(b, src, dst))
        .collect()
}

/// Returns all the squares where the piece on `src` can move legally
///
/// A destination is legal if the move is semi-legal and doesn't leave the own king attacked. If
/// `src` is empty, the result is empty. The side to move is not considered: pieces of both colors
/// get their destinations.
///
/// # Example
///
/// ```
/// # use regicide::{movegen, Board, Coord};
/// # use std::str::FromStr;
/// #
/// let b = Board::initial();
/// let dsts = movegen::legal_destinations(&b, Coord::from_str("g1").unwrap());
/// let mut dsts: Vec<_> = dsts.into_iter().map(|c| c.to_string()).collect();
/// dsts.sort();
/// assert_eq!(dsts, ["f3", "h3"]);
/// ```
pub fn legal_destinations(b: &Board, src: Coord) -> Bitboard {
    semilegal_destinations(b, src)
        .into_iter()
        .filter(|&dst| !legal::causes_own_check(b, src, dst))
        .collect()
}

/// Pushes all the legal moves of the side `color` into `dst`
pub fn legal_moves_into<P: MovePush>(b: &Board, color: Color, dst: &mut P) {
    for src in b.color(color) {
        for to in legal_destinations(b, src) {
            dst.push(Move::new(src, to));
        }
    }
}

/// Returns all the legal moves of the side `color`
pub fn legal_moves(b: &Board, color: Color) -> MoveList {
    let mut res = MoveList::new();
    legal_moves_into(b, color, &mut res);
    res
}

/// Returns `true` if the side `color` has at least one legal move
pub fn has_legal_moves(b: &Board, color: Color) -> bool {
    b.color(color)
        .into_iter()
        .any(|src| legal_destinations(b, src).is_nonempty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Piece};
    use std::collections::BTreeSet;
    use std::str::FromStr;

    fn c(s: &str) -> Coord {
        Coord::from_str(s).unwrap()
    }

    fn names(bb: Bitboard) -> BTreeSet<String> {
        bb.into_iter().map(|c| c.to_string()).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_initial() {
        let b = Board::initial();
        assert_eq!(legal_moves(&b, Color::White).len(), 20);
        assert_eq!(legal_moves(&b, Color::Black).len(), 20);
        assert_eq!(names(legal_destinations(&b, c("e2"))), set(&["e3", "e4"]));
        assert_eq!(names(legal_destinations(&b, c("b8"))), set(&["a6", "c6"]));
        assert_eq!(legal_destinations(&b, c("e1")), Bitboard::EMPTY);
        assert_eq!(legal_destinations(&b, c("e4")), Bitboard::EMPTY);
    }

    #[test]
    fn test_idempotent() {
        let b = Board::from_cells("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R")
            .unwrap();
        let copy = b;
        for src in Coord::iter() {
            assert_eq!(legal_destinations(&b, src), legal_destinations(&b, src));
        }
        assert_eq!(b, copy);
    }

    #[test]
    fn test_rook_check_on_home_row() {
        // Initial position with a Black rook on a1 and the White pieces on b1..d1 removed
        let mut b = Board::initial();
        for col in 0..4 {
            b.put(Coord::from_row_col(7, col), Cell::EMPTY);
        }
        b.put(c("a1"), Cell::from_parts(Color::Black, Piece::Rook));
        assert!(legal::is_check(&b, Color::White));
        for src in b.color(Color::White) {
            assert_eq!(legal_destinations(&b, src), Bitboard::EMPTY);
        }
        assert!(semilegal_destinations(&b, c("e2")).is_nonempty());
        assert!(semilegal_destinations(&b, c("g1")).is_nonempty());
        assert!(!has_legal_moves(&b, Color::White));

        // The king can leave the home row once d2 is free
        b.put(c("d2"), Cell::EMPTY);
        let moves = legal_moves(&b, Color::White);
        let moves: BTreeSet<_> = moves.iter().map(ToString::to_string).collect();
        assert_eq!(moves, set(&["e1d2"]));

        // A knight may capture or block
        let b = Board::from_cells("4k3/8/8/8/8/1N6/8/r3K3").unwrap();
        let moves = legal_moves(&b, Color::White);
        let moves: BTreeSet<_> = moves.iter().map(ToString::to_string).collect();
        assert_eq!(moves, set(&["b3a1", "b3c1", "e1d2", "e1e2", "e1f2"]));
    }

    #[test]
    fn test_pinned() {
        let b = Board::from_cells("4r2k/8/8/8/8/8/4B3/4K3").unwrap();
        assert_eq!(legal_destinations(&b, c("e2")), Bitboard::EMPTY);
        assert!(semilegal_destinations(&b, c("e2")).is_nonempty());

        let b = Board::from_cells("4q2k/8/8/8/8/8/4R3/4K3").unwrap();
        assert_eq!(
            names(legal_destinations(&b, c("e2"))),
            set(&["e3", "e4", "e5", "e6", "e7", "e8"])
        );
    }

    #[test]
    fn test_no_moves() {
        let b = Board::from_cells("7k/8/8/8/8/8/8/q1K5").unwrap();
        assert!(has_legal_moves(&b, Color::White));
        let b = Board::from_cells("7k/8/8/8/8/8/1q6/K7").unwrap();
        assert_eq!(names(legal_destinations(&b, c("a1"))), set(&["b2"]));
        let b = Board::from_cells("7k/8/8/8/8/8/1q6/K2n4").unwrap();
        assert!(!has_legal_moves(&b, Color::White));
        assert!(legal_moves(&b, Color::White).is_empty());
    }

    #[test]
    fn test_into_vec() {
        let b = Board::from_cells("QQQQQQQQ/Q6Q/Q6Q/Q6Q/Q6Q/Q6Q/Q6Q/QQQQQQQQ").unwrap();
        let mut moves = Vec::new();
        legal_moves_into(&b, Color::White, &mut moves);
        assert_eq!(moves.len(), 288);
        assert!(moves.iter().all(|mv| mv.is_legal(&b)));
    }

    #[test]
    fn test_many_pieces() {
        let b = Board::from_cells("QQQQQQQQ/Q6Q/Q6Q/Q6Q/Q6Q/Q6Q/Q6Q/QQQQQQQQ").unwrap();
        let moves = legal_moves(&b, Color::White);
        assert_eq!(moves.len(), 288);
        assert!(has_legal_moves(&b, Color::White));

        for cells in [
            "QQQQQQQQ/QQQQQQQQ/QQQQQQQQ/QQQQQQQQ/8/8/8/8",
            "QQQQQQQQ/8/QQQQQQQQ/8/QQQQQQQQ/8/QQQQQQQQ/8",
            "Q1Q1Q1Q1/1Q1Q1Q1Q/Q1Q1Q1Q1/1Q1Q1Q1Q/Q1Q1Q1Q1/1Q1Q1Q1Q/Q1Q1Q1Q1/1Q1Q1Q1Q",
        ] {
            let b = Board::from_cells(cells).unwrap();
            let moves = legal_moves(&b, Color::White);
            let mut expected = Vec::new();
            legal_moves_into(&b, Color::White, &mut expected);
            assert!(moves.len() <= MAX_MOVES);
            assert_eq!(moves.as_slice(), expected.as_slice());
        }
    }
}
