//! A perfect agent for playing or analysing the game 'Tic-tac-toe'
//!
//! This agent uses an exhaustive game tree search with alpha-beta pruning
//! to find the mathematically optimal move for any position.
//!
//! # Basic Usage
//!
//! ```
//! use tictactoe_ai::{board::GameState, solver::find_best_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // A: 0 3, B: 2 4, A to move
//! let state = GameState::from_moves("0234")?;
//! let best_move = find_best_move(&state)?;
//!
//! assert_eq!(best_move, 6);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod moves;

pub mod evaluation;

pub mod solver;

pub mod analysis;


pub use error::Error;

/// The width and height of the game board in cells
pub const SIZE: usize = 3;

/// The number of cells on the game board
pub const CELLS: usize = SIZE * SIZE;

/// A cell index in `0..CELLS`, row-major from the top left
pub type Move = usize;

/// A position score from the perspective of one player
pub type Score = i32;

// ensure that every cell fits in a u16 for the bitboard representation
const_assert!(CELLS <= 16);
