//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing training events,
//! allowing composable data collection without coupling training
//! logic to specific output formats or metrics.

use crate::{
    Result,
    engine::{Board, GameOutcome, Move, Side},
};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_training_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - For each move in the game
///    - `on_game_end(game_num, outcome, moves)`
///    - `on_knowledge_updated(...)` - If the agent keeps a mistake memory
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use hexapawn::{
///     engine::{GameOutcome, Move},
///     ports::Observer,
/// };
///
/// struct CustomObserver {
///     game_count: usize,
/// }
///
/// impl Observer for CustomObserver {
///     fn on_game_end(
///         &mut self,
///         _game_num: usize,
///         _outcome: GameOutcome,
///         _moves: &[Move],
///     ) -> hexapawn::Result<()> {
///         self.game_count += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when training starts with the total number of games.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts (`game_num` is 0-based).
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each move, before it is applied.
    ///
    /// # Parameters
    ///
    /// * `game_num` - Index of the current game
    /// * `step_num` - Ply within the game (0-based)
    /// * `board` - Board before the move
    /// * `side` - Side making the move
    /// * `action` - The move
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _side: Side,
        _action: Move,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a game ends, with every move played in order.
    fn on_game_end(
        &mut self,
        _game_num: usize,
        _outcome: GameOutcome,
        _moves: &[Move],
    ) -> Result<()> {
        Ok(())
    }

    /// Called after the agent learned from a game.
    ///
    /// `known_mistakes` is the size of the agent's mistake memory afterwards.
    fn on_knowledge_updated(&mut self, _game_num: usize, _known_mistakes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
