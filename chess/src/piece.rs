//! Pieces and their identities

use crate::types::{Color, PieceKind, Square};

use std::fmt;

/// Stable identity of a piece
///
/// Two pieces of the same kind and color are still different pieces, so the engine always
/// refers to a piece by its identity, not by its kind or its square.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub u8);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "#{}", self.0)
    }
}

/// Single piece on the board
///
/// Pieces are owned by a [`Position`](crate::board::Position). The fields are public to make
/// building a setup easy, but once a piece is handed to the position, it is changed only by the
/// position itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Identity of the piece
    pub id: PieceId,
    /// Kind of the piece
    pub kind: PieceKind,
    /// Color of the piece
    pub color: Color,
    /// Square on which the piece stands, or stood when it was captured
    pub square: Square,
    /// Whether the piece was captured
    pub captured: bool,
}

impl Piece {
    /// Creates a new live piece
    #[inline]
    pub const fn new(id: PieceId, kind: PieceKind, color: Color, square: Square) -> Piece {
        Piece {
            id,
            kind,
            color,
            square,
            captured: false,
        }
    }

    /// Signed material value of the piece, positive for White and negative for Black
    #[inline]
    pub const fn signed_value(&self) -> i32 {
        self.kind.value() * self.color.sign() as i32
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}{}", self.color, self.kind, self.square)
    }
}
