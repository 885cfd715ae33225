use crate::types::{Color, Coord, Rank};

/// Row delta of a single pawn step
pub const fn pawn_forward_delta(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Rank from which a pawn may advance two squares
pub const fn pawn_home_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Rank on which a pawn is promoted
pub const fn promote_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R8,
        Color::Black => Rank::R1,
    }
}

/// Returns `(dst.row - src.row, dst.col - src.col)`
pub const fn delta(src: Coord, dst: Coord) -> (isize, isize) {
    (
        dst.row() as isize - src.row() as isize,
        dst.col() as isize - src.col() as isize,
    )
}

/// Returns `true` if `src` and `dst` lie on one row or one column and differ
pub const fn is_line(src: Coord, dst: Coord) -> bool {
    let (dr, dc) = delta(src, dst);
    (dr == 0) != (dc == 0)
}

/// Returns `true` if `src` and `dst` lie on one diagonal and differ
pub const fn is_diag(src: Coord, dst: Coord) -> bool {
    let (dr, dc) = delta(src, dst);
    dr != 0 && dr.abs() == dc.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::File;

    #[test]
    fn test_pawn_ranks() {
        assert_eq!(pawn_home_rank(Color::White).index(), 6);
        assert_eq!(pawn_home_rank(Color::Black).index(), 1);
        assert_eq!(promote_rank(Color::White).index(), 0);
        assert_eq!(promote_rank(Color::Black).index(), 7);
    }

    #[test]
    fn test_lines() {
        let d4 = Coord::from_parts(File::D, Rank::R4);
        let d8 = Coord::from_parts(File::D, Rank::R8);
        let g7 = Coord::from_parts(File::G, Rank::R7);
        let e6 = Coord::from_parts(File::E, Rank::R6);
        assert_eq!(delta(d4, d8), (-4, 0));
        assert!(is_line(d4, d8));
        assert!(!is_diag(d4, d8));
        assert!(is_diag(d4, g7));
        assert!(!is_line(d4, g7));
        assert!(!is_line(d4, e6));
        assert!(!is_diag(d4, e6));
        assert!(!is_line(d4, d4));
        assert!(!is_diag(d4, d4));
    }
}
