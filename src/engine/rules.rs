//! Move generation, transitions, and terminal evaluation

use std::collections::BTreeMap;

use tracing::trace;

use super::board::{Board, Cell, Move, Position, Side};

/// Legal destinations keyed by source square.
///
/// Keys iterate in row-major order and each destination list keeps the
/// straight, diagonal-left, diagonal-right generation order. Squares with no
/// legal destination are absent.
pub type MoveMap = BTreeMap<Position, Vec<Position>>;

impl Board {
    /// Generate every legal move for `side`, grouped by source square.
    ///
    /// A pawn steps straight ahead onto an empty square, or diagonally
    /// forward onto a square held by the opponent.
    pub fn legal_moves(&self, side: Side) -> MoveMap {
        let forward = side.forward();
        let enemy = side.opponent().to_cell();
        let mut moves = MoveMap::new();

        for from in self.pieces(side) {
            let mut destinations = Vec::new();

            if let Some(to) = from.offset(forward, 0)
                && self.get(to) == Some(Cell::Empty)
            {
                destinations.push(to);
            }
            for d_col in [-1, 1] {
                if let Some(to) = from.offset(forward, d_col)
                    && self.get(to) == Some(enemy)
                {
                    destinations.push(to);
                }
            }

            if !destinations.is_empty() {
                moves.insert(from, destinations);
            }
        }

        moves
    }

    /// Legal moves for `side` flattened in generation order
    pub fn moves(&self, side: Side) -> Vec<Move> {
        self.legal_moves(side)
            .into_iter()
            .flat_map(|(from, tos)| tos.into_iter().map(move |to| Move { from, to }))
            .collect()
    }

    /// Check whether `side` has at least one legal move
    pub fn has_moves(&self, side: Side) -> bool {
        !self.legal_moves(side).is_empty()
    }

    /// Move the piece on `from` to `to` and return the resulting board.
    ///
    /// Legality is not checked here; moves coming from outside the engine
    /// should go through [`Board::validate_move`] first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either square is off the board.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, from: Position, to: Position) -> Result<Board, crate::Error> {
        let piece = self.piece_at(from)?;
        if !self.contains(to) {
            return Err(self.out_of_bounds(to));
        }
        trace!(%from, %to, "applying move");
        self.place(to, piece)?.place(from, Cell::Empty)
    }

    /// Apply a [`Move`] value.
    ///
    /// # Errors
    ///
    /// See [`Board::apply`].
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, action: Move) -> Result<Board, crate::Error> {
        self.apply(action.from, action.to)
    }

    /// Confirm that `action` is one of the legal moves for `side`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] describing why the move was rejected.
    pub fn validate_move(&self, side: Side, action: Move) -> Result<(), crate::Error> {
        let illegal = |reason: String| crate::Error::IllegalMove { action, reason };

        match self.get(action.from) {
            None => return Err(illegal(format!("{} is off the board", action.from))),
            Some(cell) if cell != side.to_cell() => {
                return Err(illegal(format!("no {side} pawn on {}", action.from)));
            }
            Some(_) => {}
        }

        let legal = self.legal_moves(side);
        match legal.get(&action.from) {
            Some(destinations) if destinations.contains(&action.to) => Ok(()),
            Some(_) => Err(illegal(format!(
                "{} cannot reach {}",
                action.from, action.to
            ))),
            None => Err(illegal(format!("the pawn on {} is blocked", action.from))),
        }
    }

    fn white_promoted(&self) -> bool {
        self.row(Side::White.goal_row(self.rows())).contains(&Cell::White)
    }

    fn black_promoted(&self) -> bool {
        self.row(Side::Black.goal_row(self.rows())).contains(&Cell::Black)
    }

    /// Check if the game is over with `to_move` about to play
    pub fn is_terminal(&self, to_move: Side) -> bool {
        self.white_promoted() || self.black_promoted() || !self.has_moves(to_move)
    }

    /// Decide the winner of a finished game.
    ///
    /// A pawn on the far row wins (white is checked first); otherwise the
    /// side to move loses when it has no legal move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotTerminal`] if the game is still running.
    pub fn winner(&self, to_move: Side) -> Result<Side, crate::Error> {
        if self.white_promoted() {
            Ok(Side::White)
        } else if self.black_promoted() {
            Ok(Side::Black)
        } else if !self.has_moves(to_move) {
            Ok(to_move.opponent())
        } else {
            Err(crate::Error::NotTerminal)
        }
    }

    /// The winner if the game is over, `None` while it is still running
    pub fn outcome(&self, to_move: Side) -> Option<Side> {
        self.winner(to_move).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_initial_moves_are_straight_advances() {
        let board = Board::initial(3, 3).unwrap();
        let white = board.legal_moves(Side::White);
        assert_eq!(white.len(), 3);
        assert_eq!(white[&pos(2, 0)], vec![pos(1, 0)]);
        assert_eq!(white[&pos(2, 2)], vec![pos(1, 2)]);

        let black = board.moves(Side::Black);
        assert_eq!(
            black,
            vec![
                Move::new((0, 0), (1, 0)),
                Move::new((0, 1), (1, 1)),
                Move::new((0, 2), (1, 2)),
            ]
        );
    }

    #[test]
    fn test_generation_order_straight_then_left_then_right() {
        // Black pawn at (0,1) can go straight, capture left and capture right.
        let board = Board::from_rows(&[".B.", "W.W", "..."]).unwrap();
        let moves = board.legal_moves(Side::Black);
        assert_eq!(moves[&pos(0, 1)], vec![pos(1, 1), pos(1, 0), pos(1, 2)]);
    }

    #[test]
    fn test_blocked_pawn_is_absent() {
        let board = Board::from_rows(&["B..", "W..", "..."]).unwrap();
        assert!(board.legal_moves(Side::Black).is_empty());
        assert!(!board.legal_moves(Side::White).contains_key(&pos(1, 0)));
    }

    #[test]
    fn test_diagonal_requires_opponent() {
        let board = Board::from_rows(&["BB.", ".W.", "..."]).unwrap();
        let white = board.legal_moves(Side::White);
        // (0,1) is occupied and (0,2) holds no enemy: only the left capture remains.
        assert_eq!(white[&pos(1, 1)], vec![pos(0, 0)]);
    }

    #[test]
    fn test_apply_moves_one_piece() {
        let board = Board::initial(3, 3).unwrap();
        let next = board.apply(pos(2, 1), pos(1, 1)).unwrap();
        assert_eq!(next.to_string(), "BBB\n.W.\nW.W");
        assert_eq!(board, Board::initial(3, 3).unwrap());
    }

    #[test]
    fn test_inverse_move_restores_board() {
        let board = Board::initial(3, 3).unwrap();
        let advanced = board.apply(pos(2, 0), pos(1, 0)).unwrap();
        assert_eq!(advanced.apply(pos(1, 0), pos(2, 0)).unwrap(), board);
    }

    #[test]
    fn test_apply_out_of_bounds() {
        let board = Board::initial(3, 3).unwrap();
        assert!(matches!(
            board.apply(pos(2, 2), pos(1, 3)),
            Err(crate::Error::OutOfBounds { .. })
        ));
        assert!(board.apply(pos(3, 0), pos(2, 0)).is_err());
    }

    #[test]
    fn test_validate_move_rejects_without_mutation() {
        let board = Board::initial(3, 3).unwrap();
        let snapshot = board.clone();
        assert!(board.validate_move(Side::White, Move::new((2, 0), (1, 0))).is_ok());
        assert!(board.validate_move(Side::White, Move::new((2, 0), (1, 1))).is_err());
        assert!(board.validate_move(Side::White, Move::new((0, 0), (1, 0))).is_err());
        assert!(board.validate_move(Side::White, Move::new((9, 0), (1, 0))).is_err());
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_white_reaching_top_wins() {
        let board = Board::from_rows(&["WB.", "...", "..W"]).unwrap();
        assert!(board.is_terminal(Side::Black));
        assert_eq!(board.winner(Side::Black).unwrap(), Side::White);
    }

    #[test]
    fn test_black_reaching_bottom_wins() {
        let board = Board::from_rows(&["...", "W..", "B.W"]).unwrap();
        assert!(board.is_terminal(Side::White));
        assert_eq!(board.winner(Side::White).unwrap(), Side::Black);
    }

    #[test]
    fn test_stuck_side_loses() {
        let board = Board::from_rows(&["B..", "W..", "..."]).unwrap();
        assert!(board.is_terminal(Side::Black));
        assert_eq!(board.winner(Side::Black).unwrap(), Side::White);
        assert!(board.is_terminal(Side::White));
        assert_eq!(board.winner(Side::White).unwrap(), Side::Black);
    }

    #[test]
    fn test_winner_on_live_position_fails() {
        let board = Board::initial(3, 3).unwrap();
        assert!(!board.is_terminal(Side::White));
        assert!(matches!(
            board.winner(Side::White),
            Err(crate::Error::NotTerminal)
        ));
        assert_eq!(board.outcome(Side::White), None);
    }
}
