//! Game record with turn order and history

use crate::board::Position;
use crate::legal;
use crate::moves::{Committed, Make, MoveError, RawUndo, Text};
use crate::piece::PieceId;
use crate::setup;
use crate::types::{Color, Square, SquareParseError};

use log::debug;
use thiserror::Error;

/// Error indicating that a move was rejected by the game record
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum GameError {
    /// The piece belongs to the side which is not on move
    #[error("{got:?} piece moved while {expected:?} is on move")]
    WrongSide { expected: Color, got: Color },
    /// The piece label is not found among the live pieces
    #[error("unknown piece label {0:?}")]
    UnknownLabel(String),
    /// The move itself was rejected
    #[error("illegal move: {0}")]
    Move(#[from] MoveError),
}

/// Error while replaying a list of moves
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot play move #{}: {}", .pos + 1, .source)]
pub struct ReplayError {
    pub pos: usize,
    pub source: GameError,
}

/// Sequence of committed moves starting from some position
///
/// The game keeps track of the side on move, so each side can move only its own pieces, and the
/// turn passes only when a move is committed. Any number of moves may be reverted with
/// [`Game::undo()`].
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    side: Color,
    stack: Vec<(Committed, RawUndo)>,
}

impl Game {
    /// Creates a game from `position`, with `first` on move
    pub fn new(position: Position, first: Color) -> Game {
        Game {
            position,
            side: first,
            stack: Vec::new(),
        }
    }

    /// Creates a game from the standard setup, with White on move
    pub fn initial() -> Game {
        Game::new(Position::initial(), Color::White)
    }

    /// Creates a game and plays the given moves in it
    ///
    /// See [`Game::play_list()`] for the format.
    pub fn from_list(position: Position, first: Color, list: &str) -> Result<Game, ReplayError> {
        let mut res = Game::new(position, first);
        res.play_list(list)?;
        Ok(res)
    }

    /// Current position
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Side on move
    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Committed moves, from the first one to the last one
    pub fn history(&self) -> impl Iterator<Item = &Committed> + '_ {
        self.stack.iter().map(|(c, _)| c)
    }

    /// Returns the committed move with index `idx`
    pub fn get(&self, idx: usize) -> Option<&Committed> {
        self.stack.get(idx).map(|(c, _)| c)
    }

    /// Returns the last committed move
    pub fn last(&self) -> Option<&Committed> {
        self.stack.last().map(|(c, _)| c)
    }

    fn check_side(&self, id: PieceId) -> Result<(), GameError> {
        let piece = self
            .position
            .piece(id)
            .ok_or(MoveError::NoSuchPiece(id))?;
        if piece.color != self.side {
            return Err(GameError::WrongSide {
                expected: self.side,
                got: piece.color,
            });
        }
        Ok(())
    }

    fn finish_push(&mut self, c: Committed, u: RawUndo) -> Committed {
        self.stack.push((c, u));
        self.side = self.side.inv();
        debug!("move #{}: {}", self.stack.len(), c);
        c
    }

    /// Moves the piece `id` to `dst` on behalf of the side on move
    ///
    /// On error, the game is left unchanged, and the same side stays on move.
    pub fn play(&mut self, id: PieceId, dst: Square) -> Result<Committed, GameError> {
        self.check_side(id)?;
        let (c, u) = legal::try_make(&mut self.position, id, dst)?;
        Ok(self.finish_push(c, u))
    }

    /// Moves the piece with label `label` (like `"wN1"`) to the square `dst` (like `"c3"`)
    ///
    /// Labels are resolved with [`setup::find_by_label()`].
    pub fn play_label(&mut self, label: &str, dst: &str) -> Result<Committed, GameError> {
        let id = setup::find_by_label(&self.position, label)
            .ok_or_else(|| GameError::UnknownLabel(label.to_string()))?;
        self.check_side(id)?;
        let (c, u) = Text(id, dst).make_raw(&mut self.position)?;
        Ok(self.finish_push(c, u))
    }

    /// Plays a whitespace-separated list of moves, like `"wP5 e4 bP4 d5"`
    ///
    /// Each move is a piece label followed by a destination square. Playing stops at the first
    /// rejected move, while all the moves before it stay committed.
    pub fn play_list(&mut self, list: &str) -> Result<(), ReplayError> {
        let mut tokens = list.split_ascii_whitespace();
        let mut pos = 0;
        while let Some(label) = tokens.next() {
            let res = match tokens.next() {
                Some(dst) => self.play_label(label, dst),
                None => Err(MoveError::BadSquare(SquareParseError::BadLength).into()),
            };
            res.map_err(|source| ReplayError { pos, source })?;
            pos += 1;
        }
        Ok(())
    }

    /// Reverts the last committed move, passing the turn back
    ///
    /// Returns `None` if there are no moves to revert.
    pub fn undo(&mut self) -> Option<Committed> {
        let (c, u) = self.stack.pop()?;
        legal::unmake_move(&mut self.position, u);
        self.side = self.side.inv();
        debug!("undo {}", c);
        Some(c)
    }

    /// Reverts all the committed moves
    pub fn rewind(&mut self) {
        while self.undo().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;
    use std::str::FromStr;

    fn sq(s: &str) -> Square {
        Square::from_str(s).unwrap()
    }

    #[test]
    fn test_wrong_side() {
        let mut game = Game::initial();
        let before = game.position().clone();
        assert_eq!(
            game.play_label("bP4", "d5"),
            Err(GameError::WrongSide {
                expected: Color::White,
                got: Color::Black
            })
        );
        assert_eq!(game.position(), &before);
        assert_eq!(game.side(), Color::White);
        assert!(game.is_empty());
    }

    #[test]
    fn test_unknown_label() {
        let mut game = Game::initial();
        assert_eq!(
            game.play_label("wX9", "d5"),
            Err(GameError::UnknownLabel("wX9".to_string()))
        );
    }

    #[test]
    fn test_play_and_undo() {
        let mut game = Game::initial();
        let initial = game.position().clone();
        game.play_list("wP5 e4 bP4 d5 wP5 d5").unwrap();
        assert_eq!(game.len(), 3);
        assert_eq!(game.side(), Color::Black);
        let last = *game.last().unwrap();
        assert!(last.is_capture());
        assert_eq!(last.captured.map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(game.position().captured_pieces().len(), 1);
        assert_eq!(game.position().material_balance(), 10);

        assert_eq!(game.undo(), Some(last));
        assert_eq!(game.side(), Color::White);
        assert!(game.position().captured_pieces().is_empty());
        assert_eq!(
            game.position().get(sq("d5")).map(|o| o.kind),
            Some(PieceKind::Pawn)
        );

        game.rewind();
        assert!(game.is_empty());
        assert_eq!(game.undo(), None);
        assert_eq!(game.position(), &initial);
        assert_eq!(game.side(), Color::White);
    }

    #[test]
    fn test_replay_error() {
        let res = Game::from_list(Position::initial(), Color::White, "wP5 e4 bP4 d4 bP4");
        assert_eq!(
            res.unwrap_err(),
            ReplayError {
                pos: 1,
                source: GameError::Move(MoveError::NotPseudoLegal)
            }
        );
        let mut game = Game::initial();
        let err = game.play_list("wN1 c3 bN1").unwrap_err();
        assert_eq!(err.pos, 1);
        assert_eq!(game.len(), 1);
        assert_eq!(game.side(), Color::Black);
    }
}
