//! Rote learning agent that plays one side and learns from its losses.

use tracing::debug;

use super::{
    history::History,
    knowledge::Knowledge,
    policy::{Review, Selection, review, select_move},
};
use crate::engine::{Board, GameOutcome, Side};

/// A player that memorizes its losing moves.
///
/// The agent owns the session's [`Knowledge`] and the [`History`] of the
/// game in progress. Knowledge survives [`begin_game`](Self::begin_game);
/// the history does not.
#[derive(Debug, Clone)]
pub struct RoteAgent {
    side: Side,
    knowledge: Knowledge,
    history: History,
}

impl RoteAgent {
    /// Create an agent for `side` with no prior knowledge
    pub fn new(side: Side) -> Self {
        Self::with_knowledge(side, Knowledge::new())
    }

    /// Create an agent that starts from existing knowledge
    pub fn with_knowledge(side: Side, knowledge: Knowledge) -> Self {
        RoteAgent {
            side,
            knowledge,
            history: History::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    pub fn into_knowledge(self) -> Knowledge {
        self.knowledge
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Start a fresh game; learned mistakes are kept
    pub fn begin_game(&mut self) {
        self.history = History::new();
    }

    /// Choose a move on `board` and record the decision.
    ///
    /// The decision is pushed onto the history only when a move is returned.
    pub fn choose(&mut self, board: &Board) -> Selection {
        let selection = select_move(&self.knowledge, board, self.side);
        match selection {
            Selection::Untried(action) => {
                self.history = self.history.push(board.clone(), action);
            }
            Selection::Exhausted => {
                debug!(side = %self.side, "every legal move is a known mistake");
            }
            Selection::NoLegalMoves => {}
        }
        selection
    }

    /// Learn from a finished game; only losses teach anything
    pub fn learn(&mut self, outcome: GameOutcome) -> Option<Review> {
        if outcome.winner() == self.side {
            debug!(side = %self.side, "won; nothing to learn");
            return None;
        }
        let review = review(&mut self.knowledge, &self.history, self.side);
        debug!(
            recorded = review.recorded(),
            known = self.knowledge.len(),
            "learned from loss"
        );
        Some(review)
    }

    /// Forget all knowledge and the current game
    pub fn reset(&mut self) {
        self.knowledge.clear();
        self.history = History::new();
    }
}
