//! Raw movement geometry, shared by the engine and its build script

use crate::types::{Color, Rank};

/// Row and column delta
pub type Delta = (isize, isize);

pub const KNIGHT_DELTAS: [Delta; 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const KING_DELTAS: [Delta; 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub const DIAG_DIRS: [Delta; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const LINE_DIRS: [Delta; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Maximal length of a slide on the 8x8 board
pub const MAX_SLIDE: isize = 7;

pub const fn pawn_forward(c: Color) -> isize {
    c.sign()
}

pub const fn pawn_home_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

pub const fn pawn_capture_deltas(c: Color) -> [Delta; 2] {
    [(pawn_forward(c), 1), (pawn_forward(c), -1)]
}

/// Expands unit directions into all the offsets of length `1..=MAX_SLIDE` along them
pub fn slide_offsets(dirs: &[Delta]) -> Vec<Delta> {
    dirs.iter()
        .flat_map(|&(d_row, d_col)| (1..=MAX_SLIDE).map(move |len| (d_row * len, d_col * len)))
        .collect()
}

/// Returns the unit step from `(0, 0)` towards `delta`, if `delta` lies on a line or a diagonal
pub fn unit_step(delta: Delta) -> Option<Delta> {
    let (d_row, d_col) = delta;
    if delta == (0, 0) {
        return None;
    }
    if d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs() {
        return Some((d_row.signum(), d_col.signum()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_offsets() {
        let diag = slide_offsets(&DIAG_DIRS);
        assert_eq!(diag.len(), 28);
        assert!(diag.contains(&(7, 7)));
        assert!(diag.contains(&(-3, 3)));
        assert!(!diag.contains(&(0, 1)));
        assert_eq!(slide_offsets(&LINE_DIRS).len(), 28);
    }

    #[test]
    fn test_unit_step() {
        assert_eq!(unit_step((3, -3)), Some((1, -1)));
        assert_eq!(unit_step((0, -5)), Some((0, -1)));
        assert_eq!(unit_step((2, 1)), None);
        assert_eq!(unit_step((0, 0)), None);
    }

    #[test]
    fn test_pawn() {
        assert_eq!(pawn_capture_deltas(Color::White), [(1, 1), (1, -1)]);
        assert_eq!(pawn_capture_deltas(Color::Black), [(-1, 1), (-1, -1)]);
        assert_eq!(pawn_home_rank(Color::Black), Rank::R7);
    }
}
