//! Persistent chain of the decisions one side made during a game

use std::{fmt, sync::Arc};

use crate::engine::{Board, Move};

/// One decision: the board the move was chosen on, and the move.
#[derive(Debug)]
pub struct DecisionNode {
    board: Board,
    action: Move,
    parent: Option<Arc<DecisionNode>>,
}

impl DecisionNode {
    /// Board before the move was made
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn action(&self) -> Move {
        self.action
    }

    /// The decision made before this one, if any
    pub fn parent(&self) -> Option<&DecisionNode> {
        self.parent.as_deref()
    }
}

/// Handle to the most recent decision of a game.
///
/// Pushing returns a new handle and leaves the old one valid, so any
/// retained handle can still be walked independently. Nodes are never
/// mutated after creation.
#[derive(Debug, Clone, Default)]
pub struct History {
    head: Option<Arc<DecisionNode>>,
    len: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decision and return the new head
    #[must_use = "push returns the extended history; the original is unchanged"]
    pub fn push(&self, board: Board, action: Move) -> History {
        History {
            head: Some(Arc::new(DecisionNode {
                board,
                action,
                parent: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn head(&self) -> Option<&DecisionNode> {
        self.head.as_deref()
    }

    /// Iterate from the most recent decision back to the first one
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            next: self.head.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.walk() {
            writeln!(f, "State:\n{}", node.board)?;
            writeln!(f, "Action: {}", node.action)?;
        }
        Ok(())
    }
}

/// Backward iterator over a [`History`]
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    next: Option<&'a DecisionNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a DecisionNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent();
        Some(node)
    }
}
