//! Scoring of finished positions

use crate::{board::GameState, Score};

/// Score of a position won by the player it is evaluated for
pub const WIN_SCORE: Score = 100;
/// Score of a position won by the opponent
pub const LOSS_SCORE: Score = -WIN_SCORE;
pub const DRAW_SCORE: Score = 0;

/// Scores a terminal position from the perspective of `state.player`
///
/// Only meaningful when `state.board.is_terminal()`: an unfinished board
/// without a line also scores 0. The player to move is checked before the
/// opponent; on a board reached by legal play only the opponent can hold a
/// line, since they made the last move.
pub fn evaluate(state: &GameState) -> Score {
    if state.board.has_line(state.player) {
        WIN_SCORE
    } else if state.board.has_line(state.player.opponent()) {
        LOSS_SCORE
    } else {
        DRAW_SCORE
    }
}
