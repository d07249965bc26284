//! An agent to solve the game of Tic-tac-toe

use log::debug;

use crate::{
    board::GameState,
    evaluation::{evaluate, LOSS_SCORE, WIN_SCORE},
    moves::legal_moves,
    Error, Move, Score,
};

/// The minimum possible score of a position
pub const MIN_SCORE: Score = LOSS_SCORE;
/// The maximum possible score of a position
pub const MAX_SCORE: Score = WIN_SCORE;
/// Half-width of the initial search window, wider than any reachable score
pub const SEARCH_BOUND: Score = 999;

/// An agent to solve Tic-tac-toe positions
///
/// # Notes
/// The whole game fits in nine plies, so the agent always searches to the
/// end of the game with a negamax search and alpha-beta pruning. No
/// transposition table is kept and no heuristic evaluation is used.
///
/// # Position Scoring
/// A position is scored from the perspective of the player to move: 100 if
/// they can force a win, -100 if the opponent can, and 0 for a draw. The
/// distance to the end of the game is not taken into account.
///
/// # Tie-break
/// Moves are searched in ascending cell order and only a strictly better
/// score replaces the current best, so the lowest of several equally good
/// cells is chosen.
#[derive(Clone, Debug)]
pub struct Solver {
    state: GameState,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` for a game state
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            node_count: 0,
        }
    }

    /// Performs game tree search from `state`
    ///
    /// Returns the score of the position (see [Position Scoring]), clamped
    /// to the `alpha..=beta` window.
    ///
    /// [Position Scoring]: #position-scoring
    fn negamax(&mut self, state: &GameState, alpha: Score, beta: Score) -> Score {
        self.node_count += 1;

        if state.board.is_terminal() {
            return evaluate(state);
        }

        let mut best_alpha = alpha;
        for cell in legal_moves(&state.board) {
            let next = state.apply_move(cell);
            // the search window is flipped for the other player
            let score = -self.negamax(&next, -beta, -best_alpha);
            // if a child node's score reaches beta, we can prune the tree
            // here because a perfect opponent will not pick this branch
            if score >= beta {
                return beta;
            }
            if score > best_alpha {
                best_alpha = score;
            }
        }
        best_alpha
    }

    /// Performs a top-level search, keeping track of the move behind the best score
    ///
    /// Returns the score of the position and the calculated best move, or
    /// `None` when no move beats `alpha`
    fn top_level_search(&mut self, alpha: Score, beta: Score) -> (Score, Option<Move>) {
        self.node_count += 1;

        let state = self.state;
        if state.board.is_terminal() {
            return (evaluate(&state), None);
        }

        let mut best_alpha = alpha;
        let mut best_move = None;
        for cell in legal_moves(&state.board) {
            let next = state.apply_move(cell);
            let score = -self.negamax(&next, -beta, -best_alpha);
            if score >= beta {
                return (beta, Some(cell));
            }
            if score > best_alpha {
                best_alpha = score;
                best_move = Some(cell);
            }
        }
        (best_alpha, best_move)
    }

    /// Scores the position within the `alpha..=beta` window
    ///
    /// When the true score lies inside the window it is returned exactly;
    /// otherwise the nearest window bound is returned.
    pub fn alpha_beta(&mut self, alpha: Score, beta: Score) -> Score {
        let state = self.state;
        self.negamax(&state, alpha, beta)
    }

    /// Calculates the score and best move of the current position
    pub fn solve(&mut self) -> Result<(Score, Move), Error> {
        if self.state.board.is_terminal() {
            return Err(Error::NoMoveAvailable);
        }

        let (score, best_move) = self.top_level_search(-SEARCH_BOUND, SEARCH_BOUND);
        debug!(
            "searched {} nodes for player {}, score {}",
            self.node_count, self.state.player, score
        );
        best_move
            .map(|cell| (score, cell))
            .ok_or(Error::NoMoveAvailable)
    }
}

impl std::ops::Deref for Solver {
    type Target = GameState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

/// Scores `state` for the player to move within the `alpha..=beta` window
pub fn alpha_beta(state: &GameState, alpha: Score, beta: Score) -> Score {
    Solver::new(*state).alpha_beta(alpha, beta)
}

/// Finds the optimal move for the player to move
///
/// Fails with [`Error::NoMoveAvailable`] on a finished board.
pub fn find_best_move(state: &GameState) -> Result<Move, Error> {
    Solver::new(*state).solve().map(|(_, best_move)| best_move)
}
