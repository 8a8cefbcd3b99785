pub mod board;
pub mod prompt;

pub use board::{predict, predict_fen, Board, Color, Move, Piece, Square};
