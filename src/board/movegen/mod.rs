//! Pseudo-legal move generation.
//!
//! Moves obey each piece's movement rule but are never checked against
//! leaving the mover's own king capturable. There is no castling, en passant
//! or promotion.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use sliders::SliderType;

use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Generate every pseudo-legal move for `color`.
    ///
    /// Order is deterministic: squares are scanned row by row from a8 to h1,
    /// and each piece contributes its moves in its own rule's order.
    #[must_use]
    pub fn generate_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece_color, piece) in self.pieces() {
            if piece_color == color {
                self.generate_piece_moves(from, color, piece, &mut moves);
            }
        }
        moves
    }

    pub(crate) fn generate_piece_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_slider_moves(from, color, SliderType::Bishop, moves),
            Piece::Rook => self.generate_slider_moves(from, color, SliderType::Rook, moves),
            Piece::Queen => self.generate_slider_moves(from, color, SliderType::Queen, moves),
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Shared rule for knights and kings: each on-board offset not holding a
    /// friendly piece is a destination.
    fn generate_offset_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(d_row, d_col) in offsets {
            if let Some(to) = from.offset(d_row, d_col) {
                if self.is_empty(to) || self.is_enemy(to, color) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }
}
