//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Side};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Decided by the rules: promotion or a side left without moves
    Win(Side),
    /// The losing side conceded before the rules decided the game
    Resignation { winner: Side },
}

impl GameOutcome {
    pub fn winner(self) -> Side {
        match self {
            GameOutcome::Win(side) | GameOutcome::Resignation { winner: side } => side,
        }
    }

    pub fn loser(self) -> Side {
        self.winner().opponent()
    }

    pub fn is_resignation(self) -> bool {
        matches!(self, GameOutcome::Resignation { .. })
    }
}

/// A game in progress or finished, with its move list
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    pub initial: Board,
    pub first: Side,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
    board: Board,
    to_move: Side,
}

impl Game {
    /// Start a game from the standard position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimensions`] for boards smaller than 2×1.
    pub fn new(rows: usize, cols: usize, first: Side) -> Result<Self, crate::Error> {
        Ok(Self::from_position(Board::initial(rows, cols)?, first))
    }

    /// Start a game from an arbitrary position
    pub fn from_position(board: Board, first: Side) -> Self {
        let mut game = Game {
            initial: board.clone(),
            first,
            moves: Vec::new(),
            outcome: None,
            board,
            to_move: first,
        };
        game.settle();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play a move for the side to move.
    ///
    /// The move is validated first, so a rejected move leaves the game untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the game is over or the move
    /// is not legal for the side to move.
    pub fn play(&mut self, action: Move) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::IllegalMove {
                action,
                reason: "the game is already over".to_string(),
            });
        }
        self.board.validate_move(self.to_move, action)?;

        self.board = self.board.apply_move(action)?;
        self.moves.push(action);
        self.to_move = self.to_move.opponent();
        self.settle();
        Ok(())
    }

    /// The side to move concedes
    pub fn resign(&mut self) {
        if self.outcome.is_none() {
            self.outcome = Some(GameOutcome::Resignation {
                winner: self.to_move.opponent(),
            });
        }
    }

    fn settle(&mut self) {
        if let Some(winner) = self.board.outcome(self.to_move) {
            self.outcome = Some(GameOutcome::Win(winner));
        }
    }
}
