//! Different ways to express a move request

use super::base::{Committed, MoveError, RawUndo, Request};
use crate::board::Position;
use crate::legal;
use crate::piece::PieceId;
use crate::types::Square;

use std::str::FromStr;

/// Something which can be applied to a position as a move
pub trait Make {
    /// Applies the move to `pos`, returning the committed move and the information to revert it
    ///
    /// If the move is rejected, `pos` is left unchanged.
    fn make_raw(&self, pos: &mut Position) -> Result<(Committed, RawUndo), MoveError>;

    /// Applies the move to a copy of `pos`
    fn make(&self, pos: &Position) -> Result<Position, MoveError> {
        let mut cloned = pos.clone();
        let _ = self.make_raw(&mut cloned)?;
        Ok(cloned)
    }
}

impl Make for Request {
    #[inline]
    fn make_raw(&self, pos: &mut Position) -> Result<(Committed, RawUndo), MoveError> {
        legal::try_make(pos, self.piece, self.dst)
    }
}

/// Move request with the destination given as raw row and column
///
/// Row 0 is rank `1`, column 0 is file `a`. Coordinates outside of the board are rejected with
/// [`MoveError::OutOfBounds`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coords {
    pub piece: PieceId,
    pub row: isize,
    pub col: isize,
}

impl Coords {
    pub fn to_request(&self) -> Result<Request, MoveError> {
        let dst = Square::from_row_col(self.row, self.col).ok_or(MoveError::OutOfBounds {
            row: self.row,
            col: self.col,
        })?;
        Ok(Request {
            piece: self.piece,
            dst,
        })
    }
}

impl Make for Coords {
    #[inline]
    fn make_raw(&self, pos: &mut Position) -> Result<(Committed, RawUndo), MoveError> {
        self.to_request()?.make_raw(pos)
    }
}

/// Move request with the destination given as text, like `"e4"`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Text<S: AsRef<str>>(pub PieceId, pub S);

impl<S: AsRef<str>> Make for Text<S> {
    #[inline]
    fn make_raw(&self, pos: &mut Position) -> Result<(Committed, RawUndo), MoveError> {
        let dst = Square::from_str(self.1.as_ref().trim())?;
        Request { piece: self.0, dst }.make_raw(pos)
    }
}
