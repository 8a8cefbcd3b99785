use super::{Color, Move, Piece, Square};

/// Contents of one board cell.
pub type Cell = Option<(Color, Piece)>;

/// An 8x8 grid of cells plus the side to move.
///
/// Boards are value snapshots. [`Board::make_move`] returns a new board and
/// leaves the original untouched, so sibling branches of a search never share
/// a grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Cell; 8]; 8],
    pub(crate) side_to_move: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(7, col), Color::White, *piece);
            board.set_piece(Square(0, col), Color::Black, *piece);
            board.set_piece(Square(6, col), Color::White, Piece::Pawn);
            board.set_piece(Square(1, col), Color::Black, Piece::Pawn);
        }
        board
    }

    /// An empty grid, White to move.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
        }
    }

    /// Build a board from an externally supplied grid.
    ///
    /// Row 0 of `squares` is rank 8. No chess invariants are enforced: a grid
    /// with no kings, or pawns on the back rank, is accepted as-is.
    #[must_use]
    pub const fn from_grid(squares: [[Cell; 8]; 8], side_to_move: Color) -> Self {
        Board {
            squares,
            side_to_move,
        }
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn white_to_move(&self) -> bool {
        matches!(self.side_to_move, Color::White)
    }

    /// Same grid with a different side to move.
    #[must_use]
    pub fn with_side_to_move(&self, color: Color) -> Self {
        Board {
            squares: self.squares,
            side_to_move: color,
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece_at(&self, sq: Square) -> Cell {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// True when `sq` holds a piece of the color opposing `color`.
    #[inline]
    #[must_use]
    pub(crate) fn is_enemy(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some((c, _)) if c != color)
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.0][sq.1] = None;
    }

    /// The grid as rows, row 0 being rank 8.
    #[must_use]
    pub const fn grid(&self) -> &[[Cell; 8]; 8] {
        &self.squares
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Apply a move to a copy of this board.
    ///
    /// The source cell's contents replace the destination cell and the source
    /// is cleared. Captures need no bookkeeping. The side to move is carried
    /// over unchanged; search threads the mover explicitly.
    #[must_use]
    pub fn make_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.squares[mv.to.0][mv.to.1] = self.piece_at(mv.from);
        next.clear_square(mv.from);
        next
    }
}
