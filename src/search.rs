use std::time::{Duration, Instant};

use log::{debug, info};

use crate::coord::Move;
use crate::game_state::GameState;

/// Outcome of one exhaustive search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Terminal states reached, both solved and stuck.
    pub games_played: u64,
    /// Move sequences that ended with exactly one peg on the board, in the
    /// order the search found them.
    pub solutions: Vec<Vec<Move>>,
    /// Wall-clock time of the whole traversal.
    pub elapsed: Duration,
}

/// Totals accumulated while the search runs. Scoped to one invocation of
/// [`exhaustive_search`], never shared.
#[derive(Debug, Default)]
struct SearchStats {
    games_played: u64,
    solutions: Vec<Vec<Move>>,
}

/// Walk every maximal move sequence reachable from `start`, depth-first.
///
/// There is no deduplication: a position reachable along different move
/// orders is re-explored each time. The enumeration is over move
/// *sequences*, not distinct positions, and it is fully deterministic.
pub fn exhaustive_search(start: &GameState) -> SearchReport {
    info!(
        "searching {} rows, {} pegs",
        start.row_count(),
        start.pegs_remaining()
    );

    let started = Instant::now();
    let mut stats = SearchStats::default();
    let mut path = Vec::with_capacity(start.pegs_remaining());
    explore(start, &mut path, &mut stats);
    let elapsed = started.elapsed();

    debug_assert!(path.is_empty());
    info!(
        "finished: {} games, {} solutions in {:?}",
        stats.games_played,
        stats.solutions.len(),
        elapsed
    );

    SearchReport {
        games_played: stats.games_played,
        solutions: stats.solutions,
        elapsed,
    }
}

fn explore(state: &GameState, path: &mut Vec<Move>, stats: &mut SearchStats) {
    if state.pegs_remaining() == 1 {
        stats.games_played += 1;
        // snapshot the path: it keeps shrinking once we backtrack
        stats.solutions.push(path.clone());
        debug!("solution #{} after {} moves", stats.solutions.len(), path.len());
        return;
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        stats.games_played += 1;
        return;
    }

    for mv in moves {
        let next = match state.apply_move(mv) {
            Ok(next) => next,
            // a rejected legal move means the move generator is broken
            Err(err) => panic!("{err}, move {mv} on state:\n{state}"),
        };

        path.push(mv);
        explore(&next, path, stats);
        path.pop();
    }
}
