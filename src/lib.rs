//! Optimal Tic-Tac-Toe play via exhaustive minimax search
//!
//! This crate provides:
//! - A complete 3x3 board model with turn derivation, legal-move
//!   enumeration and winner detection
//! - An exhaustive minimax search returning the best move for the player
//!   to move
//! - Reachability validation for raw board configurations
//! - A game-history wrapper for driving full games
//!
//! Boards are 9-byte `Copy` values and every transition produces a fresh
//! board, so search branches never share mutable state.
//!
//! ```
//! use tictactoe_solver::{Board, search};
//!
//! let board = Board::new();
//! let opening = search::minimax(&board).expect("the initial board is not terminal");
//! let next = board.result(opening).unwrap();
//! assert_eq!(next.actions().len(), 8);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod lines;
pub mod search;
mod validation;

pub use board::{Board, Cell, Move, Player};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, PlayedMove};
pub use search::{evaluate, evaluate_moves, minimax};
