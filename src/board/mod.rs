//! Chess board representation and move prediction.
//!
//! An 8x8 grid of cells with row 0 = rank 8, pseudo-legal move generation,
//! material-plus-position evaluation, and a fixed-depth alpha-beta search.
//! Check legality, castling, en passant and promotion are not modelled.
//!
//! # Example
//! ```
//! use chess_predictor::board::{predict, Board, Color};
//!
//! let board = Board::new();
//! let moves = board.generate_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//! assert!(predict(&board, Color::White, 2).is_some());
//! ```

mod builder;
mod display;
mod error;
mod eval;
mod fen;
mod movegen;
mod perft;
pub mod prelude;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use fen::STARTING_FEN;
pub use state::{Board, Cell};
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, Square};

// Public API - evaluation and its configuration
pub use eval::{score_to_pawns, Evaluator, Score};
pub use pst::{EvalTables, DEFAULT_TABLES};

// Public API - search functions and configuration
pub use search::{
    find_best_move, minimax, predict, predict_fen, search, SearchConfig, SearchResult,
    SearchStats, Searcher, DEFAULT_DEPTH, SCORE_INFINITY,
};
