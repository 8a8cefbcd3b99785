use super::super::{Board, Color, Move, MoveList, Square};

const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Board {
    /// Walk each ray until it leaves the board, stops short of a friendly
    /// piece, or lands on (and stops at) an enemy piece.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        for &(d_row, d_col) in slider.directions() {
            let mut current = from;
            while let Some(to) = current.offset(d_row, d_col) {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some((c, _)) => {
                        if c != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
