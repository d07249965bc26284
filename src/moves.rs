//! Legal move generation

use crate::{board::Board, Move, CELLS};

/// Iterator over the empty cells of a board in ascending order
///
/// The ascending order is also the search order, so it decides which of
/// several equally good moves the solver picks.
#[derive(Clone, Debug)]
pub struct LegalMoves {
    free_mask: u16,
}

impl LegalMoves {
    pub fn new(board: &Board) -> Self {
        Self {
            free_mask: !board.board_mask() & ((1u32 << CELLS) - 1) as u16,
        }
    }
}

impl Iterator for LegalMoves {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        match self.free_mask {
            0 => None,
            mask => {
                let cell = mask.trailing_zeros() as Move;
                // clear the lowest set bit
                self.free_mask &= mask - 1;
                Some(cell)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.free_mask.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LegalMoves {}

/// Returns the legal moves of `board`, lowest cell first
pub fn legal_moves(board: &Board) -> LegalMoves {
    LegalMoves::new(board)
}
