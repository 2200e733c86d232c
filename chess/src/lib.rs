//! # movelaw
//!
//! Move legality engine for chess pieces on an 8x8 board.
//!
//! The engine knows how every kind of piece moves and captures, which squares each side covers,
//! and whether a move would leave the mover's own king attacked. Every move request is either
//! committed as a whole or rejected with the position left exactly as it was.
//!
//! Castling, en passant, promotion and game outcome detection are not supported.
//!
//! # Example
//!
//! ```
//! use movelaw::{Color, Game, GameError, MoveError};
//!
//! let mut game = Game::initial();
//! game.play_label("wP5", "e4").unwrap();
//! game.play_label("bP4", "d5").unwrap();
//! let c = game.play_label("wP5", "d5").unwrap();
//! assert!(c.is_capture());
//! assert_eq!(game.side(), Color::Black);
//!
//! assert_eq!(
//!     game.play_label("bQ", "d5").map(|c| c.to_string()),
//!     Ok("bQd8xd5".to_string()),
//! );
//!
//! // The king steps only to adjacent squares
//! assert_eq!(
//!     game.play_label("wK", "e3"),
//!     Err(GameError::Move(MoveError::NotPseudoLegal)),
//! );
//! ```

pub use movelaw_base::{bitboard, bitboard_consts, geometry, types};

mod between;
mod offsets;

pub mod board;
pub mod game;
pub mod legal;
pub mod movegen;
pub mod moves;
pub mod piece;
pub mod setup;

pub use bitboard::Bitboard;
pub use board::{Grid, NoSuchKing, Occupant, Position, SetupError};
pub use game::{Game, GameError, ReplayError};
pub use movegen::Candidates;
pub use moves::{Committed, Coords, Make, MoveError, RawUndo, Request, StaleUndo, Text};
pub use piece::{Piece, PieceId};
pub use types::{Color, File, PieceKind, Rank, Square};
