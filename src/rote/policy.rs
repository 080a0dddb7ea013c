//! Move selection from memorized mistakes, and end-of-game blame assignment

use tracing::{debug, trace};

use super::{
    history::History,
    knowledge::{Knowledge, Mistake},
};
use crate::engine::{Board, Move, Side};

/// Result of asking the policy for a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// First move in generation order not known to lose
    Untried(Move),
    /// Every legal move is a known mistake: the position is a proven loss
    Exhausted,
    /// The side has no legal move at all
    NoLegalMoves,
}

impl Selection {
    pub fn as_move(self) -> Option<Move> {
        match self {
            Selection::Untried(action) => Some(action),
            Selection::Exhausted | Selection::NoLegalMoves => None,
        }
    }
}

/// Pick the first generated move for `side` that is not a known mistake.
///
/// # Examples
///
/// ```
/// use hexapawn::engine::{Board, Move, Side};
/// use hexapawn::rote::{Knowledge, Selection, select_move};
///
/// let board = Board::initial(3, 3).unwrap();
/// let mut knowledge = Knowledge::new();
/// knowledge.remember(board.clone(), Move::new((0, 0), (1, 0)));
///
/// assert_eq!(
///     select_move(&knowledge, &board, Side::Black),
///     Selection::Untried(Move::new((0, 1), (1, 1)))
/// );
/// ```
pub fn select_move(knowledge: &Knowledge, board: &Board, side: Side) -> Selection {
    let moves = board.moves(side);
    if moves.is_empty() {
        return Selection::NoLegalMoves;
    }
    moves
        .into_iter()
        .find(|&action| !knowledge.is_known_mistake(board, action))
        .map_or(Selection::Exhausted, Selection::Untried)
}

/// What one backward analysis recorded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
    /// Mistakes recorded at forced-loss positions while climbing, newest first
    pub forced: Vec<Mistake>,
    /// The decision blamed for the loss, if any decision was left to blame
    pub culprit: Option<Mistake>,
}

impl Review {
    /// Number of mistakes this review added
    pub fn recorded(&self) -> usize {
        self.forced.len() + usize::from(self.culprit.is_some())
    }

    /// The forced mistakes followed by the culprit
    pub fn mistakes(&self) -> impl Iterator<Item = &Mistake> {
        self.forced.iter().chain(self.culprit.iter())
    }
}

/// Assign blame for a loss by `side`, walking its decisions backward.
///
/// Decisions made on forced-loss boards are recorded and passed over, since
/// nothing chosen there could have saved the game. The first decision that
/// still had an untried alternative is recorded as the culprit, and earlier
/// decisions are left alone. An empty history records nothing.
pub fn review(knowledge: &mut Knowledge, history: &History, side: Side) -> Review {
    let mut result = Review::default();
    let mut nodes = history.walk().peekable();

    while let Some(node) = nodes.next_if(|n| knowledge.is_forced_loss(n.board(), side)) {
        knowledge.remember(node.board().clone(), node.action());
        result
            .forced
            .push(Mistake::new(node.board().clone(), node.action()));
        trace!(action = %node.action(), "climbing up the game tree");
    }

    if let Some(node) = nodes.next() {
        knowledge.remember(node.board().clone(), node.action());
        result.culprit = Some(Mistake::new(node.board().clone(), node.action()));
    }

    debug!(
        forced = result.forced.len(),
        culprit = result.culprit.is_some(),
        "review complete"
    );
    result
}
