//! Whole-game analysis built on top of the solver

use indicatif::*;
use log::{info, warn};
use rayon::prelude::*;

use std::collections::HashSet;
use std::time::Instant;

use crate::{
    board::GameState,
    moves::legal_moves,
    solver::{alpha_beta, find_best_move, SEARCH_BOUND},
    Move, Score,
};

/// The number of distinct states reachable by legal play, finished games included
pub const REACHABLE_STATES: usize = 5478;

/// Exact score of every legal move of `state`, lowest cell first
///
/// Each score is from the perspective of `state.player`. The root moves are
/// searched in parallel. A finished board has no moves to score.
pub fn score_moves(state: &GameState) -> Vec<(Move, Score)> {
    if state.board.is_terminal() {
        return Vec::new();
    }
    let moves: Vec<Move> = legal_moves(&state.board).collect();
    moves
        .par_iter()
        .map(|&cell| {
            let next = state.apply_move(cell);
            (cell, -alpha_beta(&next, -SEARCH_BOUND, SEARCH_BOUND))
        })
        .collect()
}

/// Every distinct state reachable from the starting position, in discovery order
pub fn reachable_states() -> Vec<GameState> {
    let start = GameState::new();
    let mut seen = HashSet::new();
    let mut states = Vec::new();
    let mut stack = vec![start];
    seen.insert(start);

    while let Some(state) = stack.pop() {
        states.push(state);
        if state.board.is_terminal() {
            continue;
        }
        for cell in legal_moves(&state.board) {
            let next = state.apply_move(cell);
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }
    states
}

/// Summary of a [`verify_engine`] run
#[derive(Clone, Debug)]
pub struct VerificationReport {
    /// Number of unfinished positions checked
    pub positions: usize,
    /// Positions where the chosen move does not reach the position's score
    pub mismatches: Vec<GameState>,
}

impl VerificationReport {
    pub fn is_sound(&self) -> bool {
        self.mismatches.is_empty()
    }
}

// the chosen move must keep the exact score of the position
fn check_position(state: &GameState) -> bool {
    let value = alpha_beta(state, -SEARCH_BOUND, SEARCH_BOUND);
    match find_best_move(state) {
        Ok(cell) if state.board.is_legal_move(cell) => {
            let next = state.apply_move(cell);
            -alpha_beta(&next, -SEARCH_BOUND, SEARCH_BOUND) == value
        }
        _ => false,
    }
}

/// Checks the solver's move choice in every reachable unfinished position
pub fn verify_engine(show_progress: bool) -> VerificationReport {
    let start = Instant::now();
    let states: Vec<GameState> = reachable_states()
        .into_iter()
        .filter(|state| !state.board.is_terminal())
        .collect();

    let progress = if show_progress {
        ProgressBar::new(states.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Verifying positions: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let mismatches: Vec<GameState> = states
        .par_iter()
        .filter(|state| {
            let sound = check_position(state);
            progress.inc(1);
            !sound
        })
        .cloned()
        .collect();
    progress.finish();

    for state in mismatches.iter() {
        warn!(
            "suboptimal move choice for player {} on board\n{}",
            state.player, state.board
        );
    }
    info!(
        "verified {} positions in {:.3}s, {} mismatches",
        states.len(),
        start.elapsed().as_secs_f64(),
        mismatches.len()
    );

    VerificationReport {
        positions: states.len(),
        mismatches,
    }
}
