//! Hexapawn with a rote-learning engine
//!
//! This crate provides:
//! - The Hexapawn rules on any board of at least 2 rows and 1 column
//! - A rote learner that memorizes losing (board, move) pairs and never
//!   repeats them, blaming earlier choices when a loss was forced
//! - A training pipeline with scripted opponents and pluggable observers
//! - A command-line front end for playing and training

pub mod cli;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod rote;

pub use engine::{Board, Cell, Game, GameOutcome, Move, MoveMap, Position, Side};
pub use error::{Error, Result};
pub use rote::{History, Knowledge, Mistake, RoteAgent, Selection};
