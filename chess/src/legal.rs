use crate::attack;
use crate::board::Board;
use crate::semilegal;
use crate::types::{Color, Coord};

use log::debug;

/// Returns `true` if the king of color `color` is attacked
///
/// If there is no such king on the board, the side is considered not in check.
pub fn is_check(b: &Board, color: Color) -> bool {
    match b.king_pos(color) {
        Some(king) => attack::is_cell_attacked(b, king, color.inv()),
        None => false,
    }
}

/// Returns `true` if moving the piece from `src` to `dst` leaves its own king attacked
///
/// The move is tried on a copy of `b`, overwriting whatever stood on `dst`, and the movement rules
/// of the piece itself are not checked. If `src` is empty, nothing moves and the result is `false`.
///
/// If the moving side has no king after the move, the side is considered not in check. This
/// keeps the function total on malformed boards.
pub fn causes_own_check(b: &Board, src: Coord, dst: Coord) -> bool {
    let color = match b.get(src).color() {
        Some(color) => color,
        None => return false,
    };
    let moved = b.relocated(src, dst);
    match moved.king_pos(color) {
        Some(king) => attack::is_cell_attacked(&moved, king, color.inv()),
        None => {
            debug!("no {} king after {}{}, assuming no check", color.name(), src, dst);
            false
        }
    }
}

/// Returns `true` if the move from `src` to `dst` is semi-legal and doesn't leave the own king
/// attacked
#[inline]
pub fn is_legal(b: &Board, src: Coord, dst: Coord) -> bool {
    semilegal::is_move_semilegal(b, src, dst) && !causes_own_check(b, src, dst)
}
