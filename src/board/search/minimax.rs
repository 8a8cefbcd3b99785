use super::{SearchStats, SCORE_INFINITY};
use crate::board::eval::{Evaluator, Score};
use crate::board::{Board, Color};

/// Recursive minimax searcher.
///
/// White is the maximizing side. With pruning enabled the searcher stops
/// exploring siblings once `beta <= alpha` and returns the best score seen
/// so far (fail-soft). Under a full window the value is identical to
/// exhaustive minimax.
#[derive(Clone, Debug)]
pub struct Searcher<'a> {
    evaluator: Evaluator<'a>,
    pruning: bool,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    #[must_use]
    pub fn new(evaluator: Evaluator<'a>, pruning: bool) -> Self {
        Searcher {
            evaluator,
            pruning,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score `board` searching `depth` plies, the mover given by `maximizing`.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.leaf(board);
        }

        let moves = board.generate_moves(Color::from_maximizing(maximizing));
        if moves.is_empty() {
            return self.leaf(board);
        }

        if maximizing {
            let mut best = -SCORE_INFINITY;
            for mv in moves {
                let child = board.make_move(mv);
                let score = self.search(&child, depth - 1, false, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = SCORE_INFINITY;
            for mv in moves {
                let child = board.make_move(mv);
                let score = self.search(&child, depth - 1, true, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    fn leaf(&mut self, board: &Board) -> Score {
        self.stats.leaves += 1;
        self.evaluator.evaluate(board)
    }
}

/// Alpha-beta search with the default tables and a full window.
#[must_use]
pub fn search(board: &Board, depth: u32, maximizing: bool) -> Score {
    Searcher::new(Evaluator::default(), true).search(
        board,
        depth,
        maximizing,
        -SCORE_INFINITY,
        SCORE_INFINITY,
    )
}

/// Exhaustive minimax with the default tables; no cutoffs are taken.
#[must_use]
pub fn minimax(board: &Board, depth: u32, maximizing: bool) -> Score {
    Searcher::new(Evaluator::default(), false).search(
        board,
        depth,
        maximizing,
        -SCORE_INFINITY,
        SCORE_INFINITY,
    )
}
