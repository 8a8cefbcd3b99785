use std::fmt;

use super::{Board, Square};

/// Text diagram of the board, rank 8 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in 0..8 {
            write!(f, "{} |", Square(row, 0).rank_char())?;
            for col in 0..8 {
                let ch = match self.piece_at(Square(row, col)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => ' ',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{} to move", self.side_to_move())
    }
}
