use log::{debug, trace};

use super::{SearchConfig, SearchStats, Searcher, SCORE_INFINITY};
use crate::board::eval::{score_to_pawns, Evaluator, Score};
use crate::board::{Board, Color, FenError, Move};

/// Result of a root search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move, `None` when the side to move has no moves
    pub best_move: Option<Move>,
    /// Score of the line after `best_move`
    pub score: Option<Score>,
    pub stats: SearchStats,
}

/// Score every root move for `side` and keep the extremal one.
///
/// Each root move gets a fresh full window. White keeps the first strictly
/// higher score, Black the first strictly lower, so ties go to the move
/// generated first. A depth of 0 is treated as 1.
#[must_use]
pub fn find_best_move(
    board: &Board,
    side: Color,
    config: &SearchConfig,
    evaluator: Evaluator<'_>,
) -> SearchResult {
    let mut searcher = Searcher::new(evaluator, config.pruning);
    let moves = board.generate_moves(side);
    if moves.is_empty() {
        debug!("no moves for {side} in {}", board.to_fen());
        return SearchResult {
            best_move: None,
            score: None,
            stats: searcher.stats(),
        };
    }

    let maximizing = side.is_maximizing();
    let child_depth = config.depth.max(1) - 1;
    let mut best: Option<(Move, Score)> = None;

    for mv in moves.iter().copied() {
        let child = board.make_move(mv);
        let score = searcher.search(
            &child,
            child_depth,
            !maximizing,
            -SCORE_INFINITY,
            SCORE_INFINITY,
        );
        trace!("root move {mv} scored {score}");

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    let stats = searcher.stats();
    if let Some((mv, score)) = best {
        debug!(
            "{side} depth {} over {} root moves: {mv} ({:+.2}), {} nodes, {} leaves, {} cutoffs",
            config.depth,
            moves.len(),
            score_to_pawns(score),
            stats.nodes,
            stats.leaves,
            stats.cutoffs
        );
    }

    SearchResult {
        best_move: best.map(|(mv, _)| mv),
        score: best.map(|(_, score)| score),
        stats,
    }
}

/// Predict a move for `side` with the default tables and pruning enabled.
#[must_use]
pub fn predict(board: &Board, side: Color, depth: u32) -> Option<Move> {
    find_best_move(board, side, &SearchConfig::depth(depth), Evaluator::default()).best_move
}

/// Decode a FEN string, predict for its active color, and encode the move
/// in four-character coordinate form.
pub fn predict_fen(fen: &str, depth: u32) -> Result<Option<String>, FenError> {
    let board = Board::try_from_fen(fen)?;
    Ok(predict(&board, board.side_to_move(), depth).map(|mv| mv.to_string()))
}
