use super::super::{Board, Color, MoveList, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// One step in any direction. No castling.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_offset_moves(from, color, &KING_OFFSETS, moves);
    }
}
