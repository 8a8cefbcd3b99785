use std::str::FromStr;

use super::error::FenError;
use super::{Board, Color, Piece, Square};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Only the piece-placement and active-color fields are read. Castling,
    /// en passant and move-counter fields may be present but are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;
        let active = parts.next().ok_or(FenError::MissingSideToMove)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - row;
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(FenError::InvalidDigit { char: c });
                    }
                    col += run as usize;
                } else {
                    let (color, piece) =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if col >= 8 {
                        return Err(FenError::BadRankWidth {
                            rank,
                            files: col + 1,
                        });
                    }
                    board.set_piece(Square(row, col), color, piece);
                    col += 1;
                }
                if col > 8 {
                    return Err(FenError::BadRankWidth { rank, files: col });
                }
            }
            if col != 8 {
                return Err(FenError::BadRankWidth { rank, files: col });
            }
        }

        board.side_to_move = match active {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        Ok(board)
    }

    /// Convert the board position to FEN notation.
    ///
    /// The board keeps no castling, en passant or move-counter state, so
    /// those fields are always written as `- - 0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut encoded = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        encoded.push_str(&empty.to_string());
                        empty = 0;
                    }
                    encoded.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                encoded.push_str(&empty.to_string());
            }
            rows.push(encoded);
        }

        format!("{} {} - - 0 1", rows.join("/"), self.side_to_move.to_fen_char())
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_starting_position() {
        let board = Board::try_from_fen(STARTING_FEN).expect("valid fen");
        assert_eq!(board, Board::new());
    }

    #[test]
    fn trailing_fields_are_optional() {
        let board: Board = "8/8/8/8/8/8/P7/k6K b".parse().expect("valid fen");
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.piece_at(Square(6, 0)), Some((Color::White, Piece::Pawn)));
        assert_eq!(board.piece_at(Square(7, 0)), Some((Color::Black, Piece::King)));
        assert_eq!(board.piece_at(Square(7, 7)), Some((Color::White, Piece::King)));
    }

    #[test]
    fn ignores_castling_and_en_passant_fields() {
        let a = Board::try_from_fen("4k3/8/8/3pP3/8/8/8/4K3 w KQkq d6 12 40").expect("valid");
        let b = Board::try_from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1").expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn to_fen_round_trips_placement() {
        let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b - - 0 1";
        let board = Board::try_from_fen(fen).expect("valid fen");
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(Board::try_from_fen("   "), Err(FenError::Empty));
    }

    #[test]
    fn rejects_missing_side_to_move() {
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/8"),
            Err(FenError::MissingSideToMove)
        );
    }

    #[test]
    fn rejects_wrong_rank_count() {
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8 w"),
            Err(FenError::WrongRankCount { found: 7 })
        );
    }

    #[test]
    fn rejects_short_and_long_ranks() {
        assert_eq!(
            Board::try_from_fen("7/8/8/8/8/8/8/8 w"),
            Err(FenError::BadRankWidth { rank: 8, files: 7 })
        );
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/ppppppppp w"),
            Err(FenError::BadRankWidth { rank: 1, files: 9 })
        );
        assert_eq!(
            Board::try_from_fen("8/8/8/44p/8/8/8/8 w"),
            Err(FenError::BadRankWidth { rank: 5, files: 9 })
        );
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/7x w"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/09 w"),
            Err(FenError::InvalidDigit { char: '0' })
        );
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/8 x"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
    }
}
