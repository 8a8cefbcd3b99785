//! Core chess types.
//!
//! This module contains the fundamental types used throughout the predictor:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (row, column) board coordinate
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

// Re-export all public types
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;
