//! Fixed movement offsets of every piece kind
//!
//! All the tables are generated by the build script and never change at runtime. Pawn offsets
//! depend on the color and the square of the pawn, so they are computed on every call.

use crate::types::{Color, PieceKind, Square};
use movelaw_base::geometry;

use arrayvec::ArrayVec;

/// Row and column delta applied to the square of a piece
pub type Offset = (isize, isize);

include!(concat!(env!("OUT_DIR"), "/offsets.rs"));

/// Returns the unobstructed offsets of `kind`
///
/// Pawns have no fixed offsets, use [`pawn_advances()`] and [`pawn_captures()`] instead.
#[inline]
pub fn of(kind: PieceKind) -> &'static [Offset] {
    match kind {
        PieceKind::Pawn => &[],
        PieceKind::Knight => &KNIGHT,
        PieceKind::Bishop => &BISHOP,
        PieceKind::Rook => &ROOK,
        PieceKind::Queen => &QUEEN,
        PieceKind::King => &KING,
    }
}

/// Returns the non-capture offsets of a pawn of color `color` standing on `sq`
///
/// The double step is included only if the pawn stands on its home rank.
#[inline]
pub fn pawn_advances(color: Color, sq: Square) -> ArrayVec<Offset, 2> {
    let forward = geometry::pawn_forward(color);
    let mut res = ArrayVec::new();
    res.push((forward, 0));
    if sq.rank() == geometry::pawn_home_rank(color) {
        res.push((2 * forward, 0));
    }
    res
}

/// Returns the capture-only offsets of a pawn of color `color`
#[inline]
pub fn pawn_captures(color: Color) -> [Offset; 2] {
    geometry::pawn_capture_deltas(color)
}
