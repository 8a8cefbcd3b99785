use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Single push, double push from the start row, and diagonal captures.
    ///
    /// A pawn that reaches the last rank stays a pawn and simply has no
    /// forward moves left.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                moves.push(Move::new(from, one));

                if from.row() == color.pawn_start_row() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            if let Some(target) = from.offset(dir, d_col) {
                if self.is_enemy(target, color) {
                    moves.push(Move::new(from, target));
                }
            }
        }
    }
}
