//! Standard starting setup

use crate::board::Position;
use crate::piece::{Piece, PieceId};
use crate::types::{Color, File, PieceKind, Rank, Square};

/// Number of pieces in the standard setup
pub const STANDARD_LEN: usize = 32;

/// Labels of the pieces in the standard setup, indexed by piece id
pub const LABELS: [&str; STANDARD_LEN] = [
    "wP1", "wP2", "wP3", "wP4", "wP5", "wP6", "wP7", "wP8", "wR1", "wR2", "wN1", "wN2", "wB1",
    "wB2", "wQ", "wK", "bP1", "bP2", "bP3", "bP4", "bP5", "bP6", "bP7", "bP8", "bR1", "bR2", "bN1",
    "bN2", "bB1", "bB2", "bQ", "bK",
];

const BACK_RANK: [(PieceKind, File); 8] = [
    (PieceKind::Rook, File::A),
    (PieceKind::Rook, File::H),
    (PieceKind::Knight, File::B),
    (PieceKind::Knight, File::G),
    (PieceKind::Bishop, File::C),
    (PieceKind::Bishop, File::F),
    (PieceKind::Queen, File::D),
    (PieceKind::King, File::E),
];

fn side(c: Color, first_id: u8) -> impl Iterator<Item = Piece> {
    let (pawn_rank, back_rank) = match c {
        Color::White => (Rank::R2, Rank::R1),
        Color::Black => (Rank::R7, Rank::R8),
    };
    let pawns = File::iter().map(move |f| (PieceKind::Pawn, Square::from_parts(f, pawn_rank)));
    let back = BACK_RANK
        .into_iter()
        .map(move |(kind, f)| (kind, Square::from_parts(f, back_rank)));
    pawns
        .chain(back)
        .zip(first_id..)
        .map(move |((kind, sq), id)| Piece::new(PieceId(id), kind, c, sq))
}

/// Returns the pieces of the standard starting setup
///
/// White pieces get ids `0..16` and black pieces get ids `16..32`. Within a side, the pawns go
/// first from file `a` to file `h`, then rooks, knights, bishops, queen and king.
pub fn standard() -> Vec<Piece> {
    side(Color::White, 0).chain(side(Color::Black, 16)).collect()
}

/// Returns the label of the piece `id` from the standard setup, like `"wN2"` or `"bQ"`
pub fn label(id: PieceId) -> Option<&'static str> {
    LABELS.get(id.0 as usize).copied()
}

/// Resolves a label from [`LABELS`] into a piece id
///
/// Returns `None` if the label is unknown or if the piece is not live in `pos`.
pub fn find_by_label(pos: &Position, label: &str) -> Option<PieceId> {
    let idx = LABELS.iter().position(|&l| l == label)?;
    let id = PieceId(idx as u8);
    pos.piece(id).map(|p| p.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_standard() {
        let pieces = standard();
        assert_eq!(pieces.len(), STANDARD_LEN);
        for (i, p) in pieces.iter().enumerate() {
            assert_eq!(p.id, PieceId(i as u8));
            assert!(!p.captured);
        }
        let find = |l: &str| pieces[LABELS.iter().position(|&x| x == l).unwrap()];
        assert_eq!(find("wP5").square, Square::from_str("e2").unwrap());
        assert_eq!(find("wN2").square, Square::from_str("g1").unwrap());
        assert_eq!(find("bQ").square, Square::from_str("d8").unwrap());
        assert_eq!(find("bQ").kind, PieceKind::Queen);
        assert_eq!(find("bK").square, Square::from_str("e8").unwrap());
        assert_eq!(find("bB1").square, Square::from_str("c8").unwrap());
        assert_eq!(find("bP4").color, Color::Black);
    }

    #[test]
    fn test_labels() {
        let pos = Position::initial();
        assert_eq!(label(PieceId(15)), Some("wK"));
        assert_eq!(label(PieceId(30)), Some("bQ"));
        assert_eq!(label(PieceId(32)), None);
        assert_eq!(find_by_label(&pos, "bN2"), Some(PieceId(27)));
        assert_eq!(find_by_label(&pos, "xQ"), None);
        for p in pos.live_pieces() {
            let l = label(p.id).unwrap();
            assert_eq!(find_by_label(&pos, l), Some(p.id));
            assert!(l.starts_with(p.color.as_char()));
            assert_eq!(l.chars().nth(1), Some(p.kind.as_char()));
        }
    }
}
