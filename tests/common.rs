//! Common test utilities for the hexapawn test suite.
//!
//! Enumerates every position reachable from the standard start so that rules
//! invariants can be checked exhaustively on small boards.

use std::collections::{HashSet, VecDeque};

use hexapawn::{Board, Side};

/// A reachable position together with the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reachable {
    pub board: Board,
    pub to_move: Side,
}

/// Breadth-first enumeration of all positions reachable from the initial board.
///
/// Terminal positions are included but not expanded.
pub fn reachable_positions(rows: usize, cols: usize, first: Side) -> Vec<Reachable> {
    let start = Reachable {
        board: Board::initial(rows, cols).unwrap(),
        to_move: first,
    };
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start.clone()]);
    let mut out = vec![start];

    while let Some(position) = queue.pop_front() {
        if position.board.is_terminal(position.to_move) {
            continue;
        }
        for action in position.board.moves(position.to_move) {
            let next = Reachable {
                board: position.board.apply_move(action).unwrap(),
                to_move: position.to_move.opponent(),
            };
            if seen.insert(next.clone()) {
                out.push(next.clone());
                queue.push_back(next);
            }
        }
    }

    out
}
