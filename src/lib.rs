//! A heuristic minimax agent for playing the board game 'Connect 4'
//!
//! This agent searches the game tree with alpha-beta pruning, a memoizing
//! transposition cache and heuristic move ordering, picking its depth
//! adaptively from the tactical state of the position.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::{Board, Player}, config::EngineConfig, search::SearchEngine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_rows(&[
//!     ".......",
//!     ".......",
//!     ".......",
//!     ".......",
//!     "...X...",
//!     ".OOOXX.",
//! ])?;
//! let mut engine = SearchEngine::new(EngineConfig::default());
//! let result = engine.best_move(&board, Player::O, 2, false);
//!
//! assert!(result.column == Some(0) || result.column == Some(4));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod evaluate;

pub mod ordering;

pub mod depth;

pub mod transposition_table;

pub mod search;

pub mod score_attack;

pub mod config;

pub mod game;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const CONNECT: usize = 4;

/// Index of the center column
pub const CENTER: usize = WIDTH / 2;

// ensure that every cell fits in the packed u128 cache key at two bits per cell
const_assert!(WIDTH * HEIGHT * 2 <= 128);
const_assert!(WIDTH >= CONNECT && HEIGHT >= CONNECT);
