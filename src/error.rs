//! Error types for the tic-tac-toe engine

use thiserror::Error;

use crate::{Move, CELLS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid move, cell {0} out of range. Cells must be between 0 and {max}", max = CELLS - 1)]
    MoveOutOfRange(Move),

    #[error("Invalid move, cell {0} is already occupied")]
    CellOccupied(Move),

    #[error("Invalid player '{0}', expected 'A' or 'B'")]
    InvalidPlayer(String),

    #[error("No move available, the game is already over")]
    NoMoveAvailable,

    #[error("Invalid position, game is over")]
    GameOver,

    #[error("could not parse '{0}' as a valid move")]
    InvalidMoveCharacter(char),

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("board string has {0} cells, expected {expected}", expected = CELLS)]
    InvalidBoardLength(usize),
}

impl Error {
    /// Whether this error rejects a move on the current board
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::MoveOutOfRange(_) | Error::CellOccupied(_))
    }
}
