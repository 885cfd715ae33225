//! Game state and making moves

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::moves::Move;
use crate::types::{Cell, Color, Coord, Piece};
use crate::{geometry, legal, movegen};

use log::{debug, info, trace};
use thiserror::Error;

/// Result of making a move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The game goes on, and the given side is to move
    Continue(Color),
    /// The move captured the opponent's king
    GameOver { winner: Color },
}

/// Status of the game
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    /// A king was captured. This status is final, no more moves are accepted
    Finished { winner: Color },
}

impl GameStatus {
    pub fn winner(&self) -> Option<Color> {
        match *self {
            GameStatus::InProgress => None,
            GameStatus::Finished { winner } => Some(winner),
        }
    }
}

/// Error making a move with [`Game::apply_move()`]
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    #[error("game is already finished")]
    GameFinished,
    #[error("no piece on {0}")]
    EmptySource(Coord),
    #[error("piece on {src} is {actual:?}, but {expected:?} is to move")]
    WrongSide {
        src: Coord,
        expected: Color,
        actual: Color,
    },
    #[error("move {0} is not legal")]
    Illegal(Move),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct Undo {
    moved: Cell,
    captured: Cell,
    side: Color,
}

/// Running game
///
/// Holds the current board, the side to move, the game status and the history of moves made.
/// A game is finished only when a king is captured. Checkmate and stalemate are not detected.
///
/// # Example
///
/// ```
/// # use regicide::{Game, GameStatus, MoveOutcome, Color, Coord};
/// # use std::str::FromStr;
/// #
/// let mut game = Game::initial();
/// let e2 = Coord::from_str("e2").unwrap();
/// let e4 = Coord::from_str("e4").unwrap();
/// assert!(game.legal_destinations(e2).has(e4));
/// assert_eq!(game.apply_move(e2, e4), Ok(MoveOutcome::Continue(Color::Black)));
/// assert_eq!(game.status(), GameStatus::InProgress);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side: Color,
    status: GameStatus,
    stack: Vec<(Move, Undo)>,
}

impl Game {
    /// Creates a game starting from board `board` with side `side` to move
    pub fn new(board: Board, side: Color) -> Game {
        Game {
            board,
            side,
            status: GameStatus::InProgress,
            stack: Vec::new(),
        }
    }

    /// Creates a game from the initial position with White to move
    pub fn initial() -> Game {
        Game::new(Board::initial(), Color::White)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move
    ///
    /// After the game is finished, this is the side which captured the king.
    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns the number of moves made
    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterates over the moves made, from first to last
    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().map(|(m, _)| *m)
    }

    pub fn last_move(&self) -> Option<Move> {
        self.stack.last().map(|(m, _)| *m)
    }

    /// Returns `true` if `src` holds a piece of the side to move and the game is in progress
    pub fn is_selectable(&self, src: Coord) -> bool {
        !self.is_finished() && self.board.get(src).has_color(self.side)
    }

    /// Returns the legal destinations for the piece on `src`
    ///
    /// Unlike [`movegen::legal_destinations()`], the result is empty if the piece on `src` doesn't
    /// belong to the side to move, or if the game is finished.
    pub fn legal_destinations(&self, src: Coord) -> Bitboard {
        if !self.is_selectable(src) {
            return Bitboard::EMPTY;
        }
        movegen::legal_destinations(&self.board, src)
    }

    /// Checks that the move from `src` to `dst` can be made in the current state
    pub fn validate(&self, src: Coord, dst: Coord) -> Result<(), MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameFinished);
        }
        let actual = self
            .board
            .get(src)
            .color()
            .ok_or(MoveError::EmptySource(src))?;
        if actual != self.side {
            return Err(MoveError::WrongSide {
                src,
                expected: self.side,
                actual,
            });
        }
        if !legal::is_legal(&self.board, src, dst) {
            return Err(MoveError::Illegal(Move::new(src, dst)));
        }
        Ok(())
    }

    /// Validates and makes the move from `src` to `dst`
    ///
    /// The move must be one of [`Game::legal_destinations()`] for `src`. Otherwise, an error is
    /// returned and the game is left unchanged.
    pub fn apply_move(&mut self, src: Coord, dst: Coord) -> Result<MoveOutcome, MoveError> {
        self.validate(src, dst)?;
        Ok(self.apply_move_unchecked(src, dst))
    }

    /// Makes the move from `src` to `dst` without validating it
    ///
    /// The caller must ensure that the game is in progress, the piece on `src` belongs to the side
    /// to move and `dst` is among its legal destinations. If this contract is broken, the game
    /// will still be memory-safe, but may end up in a state unreachable by legal play.
    pub fn apply_move_unchecked(&mut self, src: Coord, dst: Coord) -> MoveOutcome {
        let mv = Move::new(src, dst);
        let moved = self.board.get(src);
        let captured = self.board.get(dst);
        let color = moved.color().unwrap_or(self.side);
        #[cfg(feature = "selftest")]
        let before = self.board;

        self.stack.push((
            mv,
            Undo {
                moved,
                captured,
                side: self.side,
            },
        ));
        self.board = self.board.relocated(src, dst);
        if captured.is_occupied() {
            debug!("{} plays {}, {} takes {}", color.name(), mv, moved, captured);
        } else {
            debug!("{} plays {}", color.name(), mv);
        }

        if moved.piece() == Some(Piece::Pawn) && dst.rank() == geometry::promote_rank(color) {
            self.board.put(dst, Cell::from_parts(color, Piece::Queen));
            debug!("pawn promoted to queen on {}", dst);
        }

        #[cfg(feature = "selftest")]
        self.selftest(&before, color);

        if captured.piece() == Some(Piece::King) {
            self.status = GameStatus::Finished { winner: color };
            info!("{} captured the king on {}, game over", color.name(), dst);
            return MoveOutcome::GameOver { winner: color };
        }

        self.side = self.side.inv();
        MoveOutcome::Continue(self.side)
    }

    /// Takes back the last move
    ///
    /// Returns the move taken back, or `None` if no moves were made. Undoing the king capture
    /// reopens the game.
    pub fn undo(&mut self) -> Option<Move> {
        let (mv, u) = self.stack.pop()?;
        self.board.put(mv.src(), u.moved);
        self.board.put(mv.dst(), u.captured);
        self.side = u.side;
        self.status = GameStatus::InProgress;
        trace!("undo {}", mv);
        Some(mv)
    }

    #[cfg(feature = "selftest")]
    fn selftest(&self, before: &Board, color: Color) {
        let ours = before.color(color).len();
        let theirs = before.color(color.inv()).len();
        assert_eq!(self.board.color(color).len(), ours);
        let theirs_after = self.board.color(color.inv()).len();
        assert!(theirs_after == theirs || theirs_after + 1 == theirs);
        for c in [Color::White, Color::Black] {
            assert!(
                self.board.piece2(c, Piece::King).len() <= before.piece2(c, Piece::King).len()
            );
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::initial()
    }
}
