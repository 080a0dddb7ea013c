//! Hexapawn game engine

pub mod board;
pub mod game;
pub mod rules;

pub use board::{Board, Cell, Move, Position, Side};
pub use game::{Game, GameOutcome};
pub use rules::MoveMap;
