use super::super::{Board, Color, MoveList, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_offset_moves(from, color, &KNIGHT_OFFSETS, moves);
    }
}
