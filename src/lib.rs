//! Exhaustive minimax decision engine for 3x3 tic-tac-toe
//!
//! This crate provides:
//! - Complete board representation with turn and move rules
//! - Outcome detection over all eight winning lines
//! - Exhaustive minimax search selecting optimal play for either side
//!
//! The engine is a pure library with no I/O: a front end translates its input
//! events into [`Action`] values, calls [`Board::apply`], and checks
//! [`Board::is_terminal`] before soliciting further moves.
//!
//! ```
//! use tictactoe_minimax::{Board, minimax};
//!
//! let mut board = Board::new();
//! while let Some(action) = minimax(&board) {
//!     board = board.apply(action)?;
//! }
//! // Perfect play by both sides ends in a draw
//! assert!(board.is_draw());
//! # Ok::<(), tictactoe_minimax::Error>(())
//! ```

pub mod board;
pub mod error;
pub mod lines;
pub mod minimax;

pub use board::{Action, Board, Cell, Player};
pub use error::{Error, Result};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use minimax::minimax;
