use super::{Board, Color};

impl Board {
    /// Count leaf positions of the pseudo-legal move tree, alternating sides
    /// starting with `color`.
    #[must_use]
    pub fn perft(&self, color: Color, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .into_iter()
            .map(|mv| self.make_move(mv).perft(color.opponent(), depth - 1))
            .sum()
    }
}
