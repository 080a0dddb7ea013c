//! Memory of moves that previously led to a loss

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::engine::{Board, Move, Side};

/// A configuration together with the move that lost from it.
///
/// Equality is exact: mirrored positions are distinct mistakes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Mistake {
    configuration: Board,
    action: Move,
}

impl Mistake {
    pub fn new(configuration: Board, action: Move) -> Self {
        Mistake {
            configuration,
            action,
        }
    }

    pub fn configuration(&self) -> &Board {
        &self.configuration
    }

    pub fn action(&self) -> Move {
        self.action
    }

    fn matches(&self, board: &Board, action: Move) -> bool {
        self.action == action && &self.configuration == board
    }
}

impl fmt::Display for Mistake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.configuration)?;
        write!(f, "{}", self.action)
    }
}

/// Append-only collection of known mistakes.
///
/// One instance lives for a whole session of games and is handed to the
/// policy by reference. Duplicates may be stored; every query is an
/// equality scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Knowledge {
    mistakes: Vec<Mistake>,
}

impl Knowledge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `action` on `board` led to a loss
    pub fn remember(&mut self, board: Board, action: Move) {
        debug!(%action, board = %board.to_string().replace('\n', "/"), "remembering mistake");
        self.mistakes.push(Mistake::new(board, action));
    }

    /// Check whether `action` on `board` is a recorded mistake
    pub fn is_known_mistake(&self, board: &Board, action: Move) -> bool {
        self.mistakes.iter().any(|m| m.matches(board, action))
    }

    /// Check whether `board` is a proven loss for `side` (the "Catch-22").
    ///
    /// True when every legal move but one is already a known mistake: the
    /// remaining move was just tried and lost too, so blame belongs to the
    /// decision that led here. Each legal move is counted once however many
    /// duplicate records it has.
    pub fn is_forced_loss(&self, board: &Board, side: Side) -> bool {
        let moves = board.moves(side);
        let flagged = moves
            .iter()
            .filter(|&&action| self.is_known_mistake(board, action))
            .count();
        !moves.is_empty() && flagged == moves.len() - 1
    }

    /// All recorded mistakes in insertion order
    pub fn mistakes(&self) -> &[Mistake] {
        &self.mistakes
    }

    /// Mistakes recorded for one exact configuration
    pub fn mistakes_at<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = &'a Mistake> + 'a {
        self.mistakes
            .iter()
            .filter(move |m| &m.configuration == board)
    }

    pub fn len(&self) -> usize {
        self.mistakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mistakes.is_empty()
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.mistakes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remember_and_query() {
        let board = Board::initial(3, 3).unwrap();
        let mut knowledge = Knowledge::new();
        let mv = Move::new((0, 0), (1, 0));

        assert!(!knowledge.is_known_mistake(&board, mv));
        knowledge.remember(board.clone(), mv);
        assert!(knowledge.is_known_mistake(&board, mv));
        assert!(!knowledge.is_known_mistake(&board, Move::new((0, 1), (1, 1))));

        let other = board.apply_move(Move::new((2, 0), (1, 0))).unwrap();
        assert!(!knowledge.is_known_mistake(&other, mv));
    }

    #[test]
    fn test_mirrored_positions_are_distinct() {
        let left = Board::from_rows(&["B..", "..W", "W.."]).unwrap();
        let right = Board::from_rows(&["..B", "W..", "..W"]).unwrap();
        let mut knowledge = Knowledge::new();
        knowledge.remember(left.clone(), Move::new((0, 0), (1, 0)));
        assert!(!knowledge.is_known_mistake(&right, Move::new((0, 2), (1, 2))));
    }

    #[test]
    fn test_forced_loss_with_two_moves() {
        // Black at (0,0) may advance or capture (1,1).
        let board = Board::from_rows(&["B..", ".W.", "..W"]).unwrap();
        let moves = board.moves(Side::Black);
        assert_eq!(moves.len(), 2);

        let mut knowledge = Knowledge::new();
        assert!(!knowledge.is_forced_loss(&board, Side::Black));
        knowledge.remember(board.clone(), moves[0]);
        assert!(knowledge.is_forced_loss(&board, Side::Black));
    }

    #[test]
    fn test_single_move_position_is_forced() {
        let board = Board::from_rows(&["B..", "...", ".WW"]).unwrap();
        assert_eq!(board.moves(Side::Black).len(), 1);
        assert!(Knowledge::new().is_forced_loss(&board, Side::Black));
    }

    #[test]
    fn test_no_moves_is_not_forced() {
        let board = Board::from_rows(&["B..", "W..", "..."]).unwrap();
        assert!(!Knowledge::new().is_forced_loss(&board, Side::Black));
    }

    #[test]
    fn test_duplicates_do_not_inflate_forced_count() {
        let board = Board::initial(3, 3).unwrap();
        let moves = board.moves(Side::Black);
        let mut knowledge = Knowledge::new();
        knowledge.remember(board.clone(), moves[0]);
        knowledge.remember(board.clone(), moves[0]);
        assert_eq!(knowledge.len(), 2);
        assert_eq!(knowledge.mistakes_at(&board).count(), 2);
        assert!(!knowledge.is_forced_loss(&board, Side::Black));

        knowledge.remember(board.clone(), moves[1]);
        assert!(knowledge.is_forced_loss(&board, Side::Black));
    }
}
