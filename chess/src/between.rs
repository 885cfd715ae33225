use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::geometry;
use crate::types::Coord;

/// Returns the squares strictly between `src` and `dst`
///
/// The squares are collected by walking the unit step from `src` towards `dst`. If the two
/// squares do not share a row, a column or a diagonal, the result is empty.
pub fn strict(src: Coord, dst: Coord) -> Bitboard {
    if !geometry::is_line(src, dst) && !geometry::is_diag(src, dst) {
        return Bitboard::EMPTY;
    }
    let (dr, dc) = geometry::delta(src, dst);
    let (step_r, step_c) = (dr.signum(), dc.signum());
    let mut res = Bitboard::EMPTY;
    let mut cur = src;
    while let Some(next) = cur.try_shift(step_r, step_c) {
        if next == dst {
            break;
        }
        res.set(next);
        cur = next;
    }
    res
}

/// Returns `true` if all the squares strictly between `src` and `dst` are empty
///
/// The contents of `src` and `dst` themselves are not inspected.
#[inline]
pub fn is_path_clear(b: &Board, src: Coord, dst: Coord) -> bool {
    strict(src, dst).into_iter().all(|c| b.get(c).is_empty())
}
