//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move rules, ordering, perft counts
//! - `eval.rs` - Static evaluation symmetry and values
//! - `search.rs` - Minimax, pruning equivalence, move selection
//! - `edge_cases.rs` - Degenerate boards the engine must tolerate
//! - `proptest.rs` - Property-based tests over random playouts


use crate::board::Board;

pub(crate) fn make_board(fen: &str) -> Board {
    fen.parse().expect("valid fen")
}
