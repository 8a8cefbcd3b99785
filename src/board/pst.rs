//! Material values and piece-square bonus tables.
//!
//! All values are in centipawns. Bonus tables are laid out from White's point
//! of view with row 0 = rank 8; Black reads the same table with the row
//! mirrored and the sign flipped.

use once_cell::sync::Lazy;

use super::{Color, Piece, Square};

/// Material values indexed by `Piece::index()`.
///
/// The king's weight is a heuristic, not a legality signal: losing it is
/// simply a very large material swing.
const MATERIAL: [i32; 6] = [100, 300, 300, 500, 900, 10_000];

#[rustfmt::skip]
const PAWN_BONUS: [[i32; 8]; 8] = [
    [ 0,  0,   0,   0,   0,   0,  0,  0],
    [50, 50,  50,  50,  50,  50, 50, 50],
    [10, 10,  20,  30,  30,  20, 10, 10],
    [ 5,  5,  10,  25,  25,  10,  5,  5],
    [ 0,  0,   0,  20,  20,   0,  0,  0],
    [ 5, -5, -10,   0,   0, -10, -5,  5],
    [ 5, 10,  10, -20, -20,  10, 10,  5],
    [ 0,  0,   0,   0,   0,   0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_BONUS: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

/// Process-wide default tables, built on first use and never mutated.
pub static DEFAULT_TABLES: Lazy<EvalTables> = Lazy::new(EvalTables::standard);

/// Immutable evaluation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalTables {
    material: [i32; 6],
    pawn_bonus: [[i32; 8]; 8],
    knight_bonus: [[i32; 8]; 8],
}

impl Default for EvalTables {
    fn default() -> Self {
        Self::standard()
    }
}

impl EvalTables {
    /// Pawn 1, knight 3, bishop 3, rook 5, queen 9, king 100 (in pawns),
    /// with positional bonuses for pawns and knights only.
    #[must_use]
    pub const fn standard() -> Self {
        EvalTables {
            material: MATERIAL,
            pawn_bonus: PAWN_BONUS,
            knight_bonus: KNIGHT_BONUS,
        }
    }

    /// Custom tables. Material is indexed pawn, knight, bishop, rook, queen, king.
    #[must_use]
    pub const fn new(
        material: [i32; 6],
        pawn_bonus: [[i32; 8]; 8],
        knight_bonus: [[i32; 8]; 8],
    ) -> Self {
        EvalTables {
            material,
            pawn_bonus,
            knight_bonus,
        }
    }

    /// Signed material value: positive for White, negative for Black.
    #[inline]
    #[must_use]
    pub const fn material(&self, color: Color, piece: Piece) -> i32 {
        color.sign() * self.material[piece.index()]
    }

    /// Signed positional bonus; zero for bishops, rooks, queens and kings.
    #[inline]
    #[must_use]
    pub fn bonus(&self, color: Color, piece: Piece, sq: Square) -> i32 {
        let table = match piece {
            Piece::Pawn => &self.pawn_bonus,
            Piece::Knight => &self.knight_bonus,
            _ => return 0,
        };
        let sq = match color {
            Color::White => sq,
            Color::Black => sq.flip_vertical(),
        };
        color.sign() * table[sq.row()][sq.col()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_is_antisymmetric() {
        let tables = EvalTables::standard();
        for piece in Piece::ALL {
            assert_eq!(
                tables.material(Color::White, piece),
                -tables.material(Color::Black, piece)
            );
        }
        assert_eq!(tables.material(Color::White, Piece::Queen), 900);
        assert_eq!(tables.material(Color::Black, Piece::King), -10_000);
    }

    #[test]
    fn black_reads_mirrored_rows() {
        let tables = EvalTables::standard();
        // White pawn on a7 (row 1) is about to promote; Black's mirror is a2.
        assert_eq!(tables.bonus(Color::White, Piece::Pawn, Square(1, 0)), 50);
        assert_eq!(tables.bonus(Color::Black, Piece::Pawn, Square(6, 0)), -50);
        assert_eq!(tables.bonus(Color::White, Piece::Knight, Square(7, 1)), -40);
        assert_eq!(tables.bonus(Color::Black, Piece::Knight, Square(0, 1)), 40);
    }

    #[test]
    fn only_pawns_and_knights_have_bonuses() {
        let tables = EvalTables::standard();
        for piece in [Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King] {
            for sq in Square::all() {
                for color in Color::BOTH {
                    assert_eq!(tables.bonus(color, piece, sq), 0);
                }
            }
        }
    }

    #[test]
    fn default_tables_are_standard() {
        assert_eq!(*DEFAULT_TABLES, EvalTables::standard());
    }
}
