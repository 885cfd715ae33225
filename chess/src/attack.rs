use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::semilegal;
use crate::types::{Color, Coord};

fn attackers_iter(b: &Board, coord: Coord, color: Color) -> impl Iterator<Item = Coord> + '_ {
    b.occupied()
        .filter(move |(_, cell)| cell.has_color(color))
        .map(|(src, _)| src)
        .filter(move |&src| semilegal::is_move_semilegal(b, src, coord))
}

/// Returns `true` if some piece of color `color` can move to `coord`
///
/// "Attack" means exactly semi-legality of the move onto `coord`, so for an empty `coord` pawn
/// pushes also count. Check is never taken into account, which keeps the function usable on
/// hypothetical boards inside check detection.
pub fn is_cell_attacked(b: &Board, coord: Coord, color: Color) -> bool {
    attackers_iter(b, coord, color).next().is_some()
}

/// Returns all the pieces of color `color` attacking `coord`
///
/// See [`is_cell_attacked()`] for what counts as an attack.
pub fn cell_attackers(b: &Board, coord: Coord, color: Color) -> Bitboard {
    attackers_iter(b, coord, color).collect()
}
