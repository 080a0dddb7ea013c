//! Learner port - abstraction for anything that can take a turn
//!
//! This port defines the interface that all players must implement,
//! allowing the pipeline to work with:
//! - The rote learner
//! - Scripted opponents (first-move, aggressive)
//! - Baselines (random)
//! - A human at the terminal

use crate::{
    Result,
    engine::{Board, GameOutcome, Move, Side},
};

/// What a learner does on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Play this move
    Play(Move),
    /// Concede the game
    Resign,
}

/// Learner trait - Unified interface for every kind of player
///
/// # Design Philosophy
///
/// This trait represents a **port** in hexagonal architecture - a boundary
/// between the game loop and the strategies plugged into it. Each player
/// type is an **adapter** that implements this port.
///
/// # Examples
///
/// ```no_run
/// use hexapawn::{
///     engine::{Board, Side},
///     ports::{Decision, Learner},
/// };
///
/// fn opening<L: Learner>(player: &mut L) -> hexapawn::Result<Decision> {
///     let board = Board::initial(3, 3)?;
///     player.select_move(&board, Side::White)
/// }
/// ```
pub trait Learner: Send {
    /// Decide what to do on `board` with `side` to move.
    ///
    /// # Errors
    ///
    /// Returns an error if the learner cannot produce a decision, e.g. it
    /// is asked to move in a position without legal moves.
    fn select_move(&mut self, board: &Board, side: Side) -> Result<Decision>;

    /// Called before the first move of every game.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn begin_game(&mut self) -> Result<()> {
        Ok(())
    }

    /// Update the learner after a game completes.
    ///
    /// # Parameters
    ///
    /// * `outcome` - Final outcome of the game
    /// * `role` - Which side this learner was playing
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for non-adaptive players.
    fn learn(&mut self, _outcome: GameOutcome, _role: Side) -> Result<()> {
        Ok(())
    }

    /// Get the learner's name.
    fn name(&self) -> &str;

    /// Reset learner state to initial conditions.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for stateless players.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Seed the learner's internal random number generator.
    ///
    /// # Default Implementation
    ///
    /// Does nothing and returns `Ok(())`.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }

    /// Number of mistakes the learner has memorized, if it keeps any.
    fn known_mistakes(&self) -> Option<usize> {
        None
    }
}
