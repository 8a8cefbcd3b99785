//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Features:
//! - Depth is a hard cutoff: no quiescence, no iterative deepening
//! - Positions without moves are scored statically (no mate/stalemate scores)
//! - Each child position is an owned copy, so siblings never share state
//! - Root move selection breaks ties in generator order

mod minimax;
mod select;

pub use minimax::{minimax, search, Searcher};
pub use select::{find_best_move, predict, predict_fen, SearchResult};

use super::eval::Score;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Bound sentinel strictly beyond any reachable evaluation.
pub const SCORE_INFINITY: Score = 1_000_000_000;

/// Search configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Total plies searched from the root, root move included
    pub depth: u32,
    /// Alpha-beta cutoffs; off gives plain exhaustive minimax
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Create a depth-limited search config
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchConfig {
            depth,
            ..Default::default()
        }
    }

    /// Disable alpha-beta cutoffs
    #[must_use]
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, leaves included
    pub nodes: u64,
    /// Static evaluations performed
    pub leaves: u64,
    /// Sibling loops abandoned because `beta <= alpha`
    pub cutoffs: u64,
}
