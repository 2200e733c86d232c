//! Pseudo-legal move generation and attack coverage

use crate::between;
use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::offsets;
use crate::piece::Piece;
use crate::types::{Color, PieceKind};

use log::trace;

/// Pseudo-legal destinations of a single piece
///
/// The destinations are split into quiet moves onto empty squares and captures of opposing pieces.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Candidates {
    /// Empty squares the piece can move to
    pub moves: Bitboard,
    /// Squares with opposing pieces the piece can capture on
    pub captures: Bitboard,
}

impl Candidates {
    /// Returns both moves and captures
    #[inline]
    pub fn all(&self) -> Bitboard {
        self.moves | self.captures
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

fn gen_offsets(pos: &Position, piece: &Piece) -> Candidates {
    let ours = pos.color(piece.color);
    let theirs = pos.color(piece.color.inv());
    let occupied = ours | theirs;
    let slider = piece.kind.is_slider();

    let mut res = Candidates::default();
    for &(d_row, d_col) in offsets::of(piece.kind) {
        let dst = match piece.square.shift(d_row, d_col) {
            Some(dst) => dst,
            None => continue,
        };
        if slider && !between::is_path_clear(piece.square, dst, occupied) {
            continue;
        }
        if theirs.has(dst) {
            res.captures.set(dst);
        } else if !ours.has(dst) {
            res.moves.set(dst);
        }
    }
    res
}

fn gen_pawn(pos: &Position, piece: &Piece) -> Candidates {
    let occupied = pos.occupied();
    let theirs = pos.color(piece.color.inv());

    let mut res = Candidates::default();
    for (d_row, d_col) in offsets::pawn_advances(piece.color, piece.square) {
        let dst = match piece.square.shift(d_row, d_col) {
            Some(dst) => dst,
            None => continue,
        };
        // Pawns never capture straight ahead and never advance through a piece
        if occupied.has(dst) || !between::is_path_clear(piece.square, dst, occupied) {
            continue;
        }
        res.moves.set(dst);
    }
    for dst in pawn_attacks(piece) {
        if theirs.has(dst) {
            res.captures.set(dst);
        }
    }
    res
}

fn pawn_attacks(piece: &Piece) -> Bitboard {
    offsets::pawn_captures(piece.color)
        .into_iter()
        .filter_map(|(d_row, d_col)| piece.square.shift(d_row, d_col))
        .collect()
}

/// Returns the pseudo-legal destinations of `piece` in position `pos`
///
/// A king never gets a destination covered by the opponent, though it still may get a destination
/// which becomes attacked only after the king leaves its square. Such moves are rejected later by
/// the legality check.
pub fn candidate_moves(pos: &Position, piece: &Piece) -> Candidates {
    let res = match piece.kind {
        PieceKind::Pawn => gen_pawn(pos, piece),
        PieceKind::King => {
            let mut res = gen_offsets(pos, piece);
            let danger = coverage(pos, piece.color.inv());
            res.moves &= !danger;
            res.captures &= !danger;
            res
        }
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            gen_offsets(pos, piece)
        }
    };
    trace!(
        "{}: {} moves, {} captures",
        piece,
        res.moves.len(),
        res.captures.len()
    );
    res
}

/// Returns the squares covered by `piece`
///
/// Pawns cover both their diagonal squares, even when those are empty. Other pieces cover all
/// their moves and captures. The king's coverage doesn't exclude the squares covered by the
/// opponent.
pub fn attacks(pos: &Position, piece: &Piece) -> Bitboard {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece),
        PieceKind::Knight
        | PieceKind::Bishop
        | PieceKind::Rook
        | PieceKind::Queen
        | PieceKind::King => gen_offsets(pos, piece).all(),
    }
}

/// Returns the union of the squares covered by all the live pieces of color `c`
pub fn coverage(pos: &Position, c: Color) -> Bitboard {
    pos.live_pieces()
        .iter()
        .filter(|p| p.color == c)
        .fold(Bitboard::EMPTY, |acc, p| acc | attacks(pos, p))
}
