//! Position and related things

use crate::bitboard::Bitboard;
use crate::legal;
use crate::moves::{Committed, Make, MoveError};
use crate::piece::{Piece, PieceId};
use crate::types::{Color, PieceKind, Square};
use crate::{movegen, setup};

use arrayvec::ArrayVec;
use thiserror::Error;

/// Maximal number of live pieces in a position
pub const MAX_PIECES: usize = 32;

/// Position validation error
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum SetupError {
    /// More than [`MAX_PIECES`] pieces are given
    #[error("too many pieces")]
    TooManyPieces,
    /// Two pieces stand on the same square
    #[error("more than one piece on {0}")]
    Overlap(Square),
    /// Two pieces share the same identity
    #[error("duplicate piece id {0}")]
    DuplicateId(PieceId),
    /// One of the sides has more than one king
    #[error("more than one king of color {0:?}")]
    TooManyKings(Color),
    /// A piece which is already captured is given as a live one
    #[error("piece {0} is already captured")]
    Captured(PieceId),
}

/// Error indicating that one of the sides has no king
///
/// This is a violation of the setup precondition rather than an invalid move, so the game cannot
/// be continued after it.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq, Hash)]
#[error("no king of color {0:?}")]
pub struct NoSuchKing(pub Color);

/// Contents of an occupied square
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
}

impl From<&Piece> for Occupant {
    #[inline]
    fn from(p: &Piece) -> Occupant {
        Occupant {
            id: p.id,
            kind: p.kind,
            color: p.color,
        }
    }
}

/// Dense occupancy grid
///
/// The grid is always derived from the live pieces of a [`Position`] and is never changed on its
/// own.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Occupant>; 64],
    white: Bitboard,
    black: Bitboard,
}

impl Grid {
    fn build(pieces: &[Piece]) -> Grid {
        let mut res = Grid {
            cells: [None; 64],
            white: Bitboard::EMPTY,
            black: Bitboard::EMPTY,
        };
        for p in pieces {
            res.cells[p.square.index()] = Some(Occupant::from(p));
            match p.color {
                Color::White => res.white.set(p.square),
                Color::Black => res.black.set(p.square),
            }
        }
        res
    }

    /// Returns the occupant of `sq`, if any
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Occupant> {
        self.cells[sq.index()]
    }

    /// Returns the squares occupied by the pieces of color `c`
    #[inline]
    pub fn color(&self, c: Color) -> Bitboard {
        match c {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Returns all the occupied squares
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white | self.black
    }
}

/// Game position
///
/// The list of live pieces is the only source of truth. The occupancy [`Grid`] is rebuilt from it
/// after every change, and the attack coverage is computed from scratch on every query, so
/// nothing in the position can become stale.
///
/// Pieces which are captured leave the live list and are kept in the order of capture, see
/// [`Position::captured_pieces()`].
///
/// # Example
///
/// ```
/// # use movelaw::{Position, Piece, PieceId, PieceKind, Color, Square};
/// # use std::str::FromStr;
/// #
/// let sq = |s| Square::from_str(s).unwrap();
/// let mut pos = Position::new([
///     Piece::new(PieceId(0), PieceKind::King, Color::White, sq("e4")),
///     Piece::new(PieceId(1), PieceKind::Knight, Color::Black, sq("e5")),
///     Piece::new(PieceId(2), PieceKind::Bishop, Color::Black, sq("a1")),
/// ])
/// .unwrap();
///
/// assert!(pos.attack_coverage(Color::Black).has(sq("d4")));
/// assert!(pos.attempt_move(PieceId(0), sq("e5")).is_err());
/// assert_eq!(pos.live_pieces().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pieces: ArrayVec<Piece, MAX_PIECES>,
    captured: Vec<Piece>,
    grid: Grid,
}

impl Position {
    /// Creates a position from the given live pieces
    ///
    /// The order of the pieces is preserved in [`Position::live_pieces()`].
    pub fn new(pieces: impl IntoIterator<Item = Piece>) -> Result<Position, SetupError> {
        let mut live = ArrayVec::<Piece, MAX_PIECES>::new();
        let mut occupied = Bitboard::EMPTY;
        let mut kings = [0_usize; 2];
        for p in pieces {
            if p.captured {
                return Err(SetupError::Captured(p.id));
            }
            if live.iter().any(|q| q.id == p.id) {
                return Err(SetupError::DuplicateId(p.id));
            }
            if occupied.has(p.square) {
                return Err(SetupError::Overlap(p.square));
            }
            if p.kind == PieceKind::King {
                kings[p.color as usize] += 1;
                if kings[p.color as usize] > 1 {
                    return Err(SetupError::TooManyKings(p.color));
                }
            }
            live.try_push(p).map_err(|_| SetupError::TooManyPieces)?;
            occupied.set(p.square);
        }
        let grid = Grid::build(&live);
        Ok(Position {
            pieces: live,
            captured: Vec::new(),
            grid,
        })
    }

    /// Returns a position with the standard starting setup
    pub fn initial() -> Position {
        Position::new(setup::standard()).unwrap()
    }

    /// Returns the live pieces in the order they were given at setup
    #[inline]
    pub fn live_pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the captured pieces in the order of capture
    #[inline]
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    /// Returns the live piece with identity `id`
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// Returns the occupant of `sq`, if any
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Occupant> {
        self.grid.get(sq)
    }

    /// Returns the occupancy grid
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the squares occupied by the pieces of color `c`
    #[inline]
    pub fn color(&self, c: Color) -> Bitboard {
        self.grid.color(c)
    }

    /// Returns all the occupied squares
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.grid.occupied()
    }

    /// Returns the square of the king of color `c`
    pub fn king_square(&self, c: Color) -> Result<Square, NoSuchKing> {
        self.pieces
            .iter()
            .find(|p| p.color == c && p.kind == PieceKind::King)
            .map(|p| p.square)
            .ok_or(NoSuchKing(c))
    }

    /// Returns all the squares which the pieces of color `c` could move or capture onto
    ///
    /// The result doesn't depend on the side to move. It is computed from scratch on every call.
    #[inline]
    pub fn attack_coverage(&self, c: Color) -> Bitboard {
        movegen::coverage(self, c)
    }

    /// Returns `true` if the king of color `c` is attacked by the opponent
    pub fn is_in_check(&self, c: Color) -> Result<bool, NoSuchKing> {
        let king = self.king_square(c)?;
        Ok(self.attack_coverage(c.inv()).has(king))
    }

    /// Returns the total material value of the live pieces of color `c`
    pub fn material(&self, c: Color) -> i32 {
        self.pieces
            .iter()
            .filter(|p| p.color == c)
            .map(|p| p.kind.value())
            .sum()
    }

    /// Returns the material of White minus the material of Black
    pub fn material_balance(&self) -> i32 {
        self.pieces.iter().map(Piece::signed_value).sum()
    }

    /// Tries to move the piece `id` to `dst`
    ///
    /// The move is applied only if it is pseudo-legal and doesn't leave the king of the mover
    /// under attack. Otherwise, the position stays exactly the same. See [`legal::attempt_move()`]
    /// for details.
    #[inline]
    pub fn attempt_move(&mut self, id: PieceId, dst: Square) -> Result<Committed, MoveError> {
        legal::attempt_move(self, id, dst)
    }

    /// Convenience alias for [`moves::Make::make_raw`](crate::moves::Make::make_raw), which drops
    /// the undo information
    #[inline]
    pub fn make_move<M: Make>(&mut self, m: M) -> Result<Committed, MoveError> {
        m.make_raw(self).map(|(c, _)| c)
    }

    /// Returns all the destinations to which the piece `id` can legally move
    #[inline]
    pub fn legal_moves(&self, id: PieceId) -> Result<Bitboard, MoveError> {
        legal::legal_moves(self, id)
    }

    #[inline]
    pub(crate) fn index_of(&self, id: PieceId) -> Option<usize> {
        self.pieces.iter().position(|p| p.id == id)
    }

    /// Rebuilds the grid from the live pieces
    ///
    /// Must be called after every structural change before querying the position.
    pub(crate) fn refresh_grid(&mut self) {
        self.grid = Grid::build(&self.pieces);
        #[cfg(feature = "selftest")]
        self.selftest();
    }

    pub(crate) fn set_square(&mut self, idx: usize, sq: Square) {
        self.pieces[idx].square = sq;
    }

    /// Removes the live piece at index `idx` and records it as captured
    pub(crate) fn capture(&mut self, idx: usize) -> Piece {
        let mut victim = self.pieces.remove(idx);
        victim.captured = true;
        self.captured.push(victim);
        victim
    }

    /// Reverts the latest [`Position::capture()`], putting the piece back at index `idx`
    pub(crate) fn restore(&mut self, idx: usize) {
        let mut piece = match self.captured.pop() {
            Some(p) => p,
            None => return,
        };
        piece.captured = false;
        self.pieces.insert(idx, piece);
    }

    #[cfg(feature = "selftest")]
    fn selftest(&self) {
        assert_eq!(self.grid, Grid::build(&self.pieces));
        let mut occupied = Bitboard::EMPTY;
        for p in &self.pieces {
            assert!(!occupied.has(p.square), "two pieces on {}", p.square);
            assert!(!p.captured, "captured piece {} is live", p.id);
            occupied.set(p.square);
        }
    }
}

impl TryFrom<Vec<Piece>> for Position {
    type Error = SetupError;

    fn try_from(pieces: Vec<Piece>) -> Result<Position, SetupError> {
        Position::new(pieces)
    }
}
