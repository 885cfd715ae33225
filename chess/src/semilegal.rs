//! Piece movement rules, without regard to check
//!
//! A move is semi-legal if it obeys the movement geometry of the moving piece, the path is not
//! blocked, and it does not capture a piece of the same color. Whether the move leaves the own
//! king attacked is checked separately in [`legal`](crate::legal), as attack detection is built
//! on top of this module.

use crate::between;
use crate::board::Board;
use crate::geometry;
use crate::types::{Color, Coord, Piece};

fn is_pawn_semilegal(b: &Board, color: Color, src: Coord, dst: Coord) -> bool {
    let (dr, dc) = geometry::delta(src, dst);
    let forward = geometry::pawn_forward_delta(color);
    let target = b.get(dst);

    if dc == 0 {
        if target.is_occupied() {
            return false;
        }
        if dr == forward {
            return true;
        }
        if dr == 2 * forward && src.rank() == geometry::pawn_home_rank(color) {
            return match src.try_shift(forward, 0) {
                Some(mid) => b.get(mid).is_empty(),
                None => false,
            };
        }
        return false;
    }

    dc.abs() == 1 && dr == forward && target.has_color(color.inv())
}

#[inline]
fn is_knight_semilegal(src: Coord, dst: Coord) -> bool {
    let (dr, dc) = geometry::delta(src, dst);
    matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
}

#[inline]
fn is_king_semilegal(src: Coord, dst: Coord) -> bool {
    let (dr, dc) = geometry::delta(src, dst);
    dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0)
}

fn is_slider_semilegal(b: &Board, piece: Piece, src: Coord, dst: Coord) -> bool {
    let shape_ok = match piece {
        Piece::Bishop => geometry::is_diag(src, dst),
        Piece::Rook => geometry::is_line(src, dst),
        Piece::Queen => geometry::is_diag(src, dst) || geometry::is_line(src, dst),
        _ => false,
    };
    shape_ok && between::is_path_clear(b, src, dst)
}

/// Returns `true` if the piece on `src` can move to `dst` on board `b`
///
/// The board may be any position, not only the one of a running game. The function is total:
/// moves from an empty square, null moves and captures of own pieces are all just `false`.
///
/// Own king safety is not considered here, see [`legal::is_legal`](crate::legal::is_legal).
pub fn is_move_semilegal(b: &Board, src: Coord, dst: Coord) -> bool {
    if src == dst {
        return false;
    }
    let cell = b.get(src);
    let (color, piece) = match (cell.color(), cell.piece()) {
        (Some(color), Some(piece)) => (color, piece),
        _ => return false,
    };
    if b.get(dst).has_color(color) {
        return false;
    }

    match piece {
        Piece::Pawn => is_pawn_semilegal(b, color, src, dst),
        Piece::Knight => is_knight_semilegal(src, dst),
        Piece::King => is_king_semilegal(src, dst),
        Piece::Bishop | Piece::Rook | Piece::Queen => is_slider_semilegal(b, piece, src, dst),
    }
}
