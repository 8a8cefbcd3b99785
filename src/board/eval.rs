use super::pst::{EvalTables, DEFAULT_TABLES};
use super::Board;

/// Evaluation score in centipawns. Positive favours White.
pub type Score = i32;

/// Convert a centipawn score to pawns for display.
#[inline]
#[must_use]
pub fn score_to_pawns(score: Score) -> f64 {
    f64::from(score) / 100.0
}

/// Static material-plus-position evaluator.
///
/// Knows nothing about whose turn it is; the score reflects only the balance
/// of material and piece placement.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator<'a> {
    tables: &'a EvalTables,
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Evaluator {
            tables: &DEFAULT_TABLES,
        }
    }
}

impl<'a> Evaluator<'a> {
    #[must_use]
    pub const fn new(tables: &'a EvalTables) -> Self {
        Evaluator { tables }
    }

    #[must_use]
    pub const fn tables(&self) -> &'a EvalTables {
        self.tables
    }

    #[must_use]
    pub fn evaluate(&self, board: &Board) -> Score {
        board
            .pieces()
            .map(|(sq, color, piece)| {
                self.tables.material(color, piece) + self.tables.bonus(color, piece, sq)
            })
            .sum()
    }
}

impl Board {
    /// Evaluate with the default tables.
    #[must_use]
    pub fn evaluate(&self) -> Score {
        Evaluator::default().evaluate(self)
    }
}
