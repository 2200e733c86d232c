use crate::board::NoSuchKing;
use crate::piece::{Piece, PieceId};
use crate::types::{Color, PieceKind, Square, SquareParseError};

use std::fmt;

use thiserror::Error;

/// Error indicating that a move was rejected
///
/// All the variants except [`MoveError::NoSuchKing`] are ordinary rejections: the position is left
/// untouched, and the caller may try another move.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// Destination given as raw coordinates lies outside of the board
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: isize, col: isize },
    /// Destination given as text cannot be parsed
    #[error("bad square: {0}")]
    BadSquare(#[from] SquareParseError),
    /// There is no live piece with such identity
    #[error("no live piece {0}")]
    NoSuchPiece(PieceId),
    /// Destination is not among the pseudo-legal moves and captures of the piece
    #[error("move is not pseudo-legal")]
    NotPseudoLegal,
    /// Move is pseudo-legal, but leaves the king of the mover under attack
    #[error("move leaves own king attacked")]
    KingExposed,
    /// The mover has no king, so the game cannot be continued
    #[error("invalid position: {0}")]
    NoSuchKing(#[from] NoSuchKing),
}

impl MoveError {
    /// Returns `true` if the error indicates a broken position rather than a bad move
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, MoveError::NoSuchKing(_))
    }
}

/// Request to move a piece
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    /// Piece to move
    pub piece: PieceId,
    /// Destination square
    pub dst: Square,
}

/// Move which was applied to the position
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Committed {
    /// Piece that moved
    pub piece: PieceId,
    /// Kind of the moved piece
    pub kind: PieceKind,
    /// Color of the moved piece
    pub color: Color,
    /// Source square
    pub src: Square,
    /// Destination square
    pub dst: Square,
    /// Piece captured by the move, if any
    pub captured: Option<Piece>,
}

impl Committed {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Committed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(
            f,
            "{}{}{}{}{}",
            self.color, self.kind, self.src, sep, self.dst
        )
    }
}

/// Error indicating that an undo record doesn't belong to the latest move of the position
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq, Hash)]
#[error("undo record of {piece} doesn't match the position")]
pub struct StaleUndo {
    pub piece: PieceId,
}

/// Information required to revert a committed move
///
/// It is valid only for the position right after the move was committed. Reverting with a record
/// which doesn't match the position fails with [`StaleUndo`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RawUndo {
    pub(crate) piece: PieceId,
    pub(crate) src: Square,
    pub(crate) dst: Square,
    /// Captured piece and its former index among the live pieces
    pub(crate) victim: Option<(usize, PieceId)>,
}
