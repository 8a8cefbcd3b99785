//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_predictor::board::prelude::*;
//!
//! let board: Board = STARTING_FEN.parse().unwrap();
//! assert_eq!(board.evaluate(), 0);
//! ```

pub use super::{
    find_best_move, predict, predict_fen, Board, BoardBuilder, Color, Evaluator, FenError, Move,
    MoveList, Piece, Score, SearchConfig, SearchResult, Square, STARTING_FEN,
};
