//! # Regicide
//!
//! Rules engine for a simplified two-player chess, where the game ends when a king is captured.
//!
//! Pieces move by the classical rules, with a few differences:
//!
//! - there is no castling, no en passant and no draw rules
//! - a pawn reaching the last rank always becomes a queen
//! - moves that leave the own king attacked are illegal, but checkmate and stalemate are not
//!   detected. The game finishes only when one of the kings is taken
//!
//! The main entry point is [`Game`]. Lower-level predicates on [`Board`] live in [`semilegal`],
//! [`attack`], [`legal`] and [`movegen`].
//!
//! # Example
//!
//! ```
//! use regicide::{Game, MoveOutcome, Color, Move};
//! use std::str::FromStr;
//!
//! let mut game = Game::initial();
//! for s in ["e2e4", "e7e5", "d1h5", "b8c6", "f1c4", "g8f6", "h5f7"] {
//!     let mv = Move::from_str(s).unwrap();
//!     game.apply_move(mv.src(), mv.dst()).unwrap();
//! }
//!
//! // Checkmate doesn't finish the game, taking the king does
//! assert!(!game.is_finished());
//! assert_eq!(game.side(), Color::Black);
//! ```

pub mod attack;
pub mod between;
pub mod board;
pub mod game;
pub mod legal;
pub mod movegen;
pub mod moves;
pub mod semilegal;

pub use regicide_base::{bitboard, geometry, types};

pub use bitboard::Bitboard;
pub use board::Board;
pub use game::{Game, GameStatus, MoveError, MoveOutcome};
pub use moves::Move;
pub use types::{Cell, Color, Coord, File, Piece, Rank};
