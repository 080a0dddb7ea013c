//! Learner adapters for the training pipeline
//!
//! - The rote learner
//! - Scripted opponents (first-move, aggressive)
//! - Random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::info;

use super::regimen::OpponentType;
use crate::{
    Error, Result,
    engine::{Board, GameOutcome, Move, Side},
    ports::{Decision, Learner},
    rote::{Knowledge, Review, RoteAgent, Selection},
};

/// Rote agent wrapper
#[derive(Debug)]
pub struct RoteLearner {
    agent: RoteAgent,
    name: String,
    last_review: Option<Review>,
}

impl RoteLearner {
    /// Create from an existing agent
    pub fn new(agent: RoteAgent, name: String) -> Self {
        Self {
            agent,
            name,
            last_review: None,
        }
    }

    /// Create a learner for `side` starting from `knowledge`
    pub fn with_knowledge(side: Side, knowledge: Knowledge, name: String) -> Self {
        Self::new(RoteAgent::with_knowledge(side, knowledge), name)
    }

    /// Get reference to underlying agent
    pub fn agent(&self) -> &RoteAgent {
        &self.agent
    }

    /// What the most recent game taught; `None` after a win
    pub fn last_review(&self) -> Option<&Review> {
        self.last_review.as_ref()
    }

    pub fn into_agent(self) -> RoteAgent {
        self.agent
    }
}

impl Learner for RoteLearner {
    fn select_move(&mut self, board: &Board, side: Side) -> Result<Decision> {
        if side != self.agent.side() {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "{} plays {} but was asked to move for {side}",
                    self.name,
                    self.agent.side()
                ),
            });
        }
        match self.agent.choose(board) {
            Selection::Untried(action) => Ok(Decision::Play(action)),
            Selection::Exhausted => {
                info!(learner = %self.name, "no untried move left; resigning");
                Ok(Decision::Resign)
            }
            Selection::NoLegalMoves => Err(Error::NoLegalMoves),
        }
    }

    fn begin_game(&mut self) -> Result<()> {
        self.agent.begin_game();
        Ok(())
    }

    fn learn(&mut self, outcome: GameOutcome, _role: Side) -> Result<()> {
        self.last_review = self.agent.learn(outcome);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) -> Result<()> {
        self.agent.reset();
        self.last_review = None;
        Ok(())
    }

    fn known_mistakes(&self) -> Option<usize> {
        Some(self.agent.knowledge().len())
    }
}

fn require_moves(board: &Board, side: Side) -> Result<Vec<Move>> {
    let moves = board.moves(side);
    if moves.is_empty() {
        return Err(Error::NoLegalMoves);
    }
    Ok(moves)
}

/// Random policy learner
pub struct RandomLearner {
    name: String,
    rng: StdRng,
}

impl RandomLearner {
    /// Create a new random learner
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random learner with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Learner for RandomLearner {
    fn select_move(&mut self, board: &Board, side: Side) -> Result<Decision> {
        let moves = require_moves(board, side)?;
        let index = self.rng.random_range(0..moves.len());
        Ok(Decision::Play(moves[index]))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Deterministic learner that always plays the first generated move.
///
/// A consistent strategy like this is what the rote learner converges against.
pub struct FirstMoveLearner {
    name: String,
}

impl FirstMoveLearner {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Learner for FirstMoveLearner {
    fn select_move(&mut self, board: &Board, side: Side) -> Result<Decision> {
        let moves = require_moves(board, side)?;
        Ok(Decision::Play(moves[0]))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Aggressive policy learner
///
/// This learner will:
/// 1. Play a move that reaches the far row, if one exists
/// 2. Otherwise capture, if a capture exists
/// 3. Otherwise play randomly
pub struct AggressiveLearner {
    name: String,
    rng: StdRng,
}

impl AggressiveLearner {
    /// Create a new aggressive learner
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create an aggressive learner with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Learner for AggressiveLearner {
    fn select_move(&mut self, board: &Board, side: Side) -> Result<Decision> {
        let moves = require_moves(board, side)?;
        let goal = side.goal_row(board.rows());

        if let Some(&winning) = moves.iter().find(|mv| mv.to.row == goal) {
            return Ok(Decision::Play(winning));
        }
        if let Some(&capture) = moves.iter().find(|mv| mv.is_diagonal()) {
            return Ok(Decision::Play(capture));
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(Decision::Play(moves[index]))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Build a boxed scripted opponent
pub fn opponent(kind: OpponentType, name: String) -> Box<dyn Learner> {
    match kind {
        OpponentType::Random => Box::new(RandomLearner::new(name)),
        OpponentType::FirstMove => Box::new(FirstMoveLearner::new(name)),
        OpponentType::Aggressive => Box::new(AggressiveLearner::new(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_learner_is_deterministic() {
        let board = Board::initial(3, 3).unwrap();
        let mut learner = FirstMoveLearner::new("First".to_string());
        assert_eq!(
            learner.select_move(&board, Side::White).unwrap(),
            Decision::Play(Move::new((2, 0), (1, 0)))
        );
    }

    #[test]
    fn test_aggressive_prefers_capture() {
        let board = Board::from_rows(&["B.B", ".B.", "W.W"]).unwrap();
        let mut learner = AggressiveLearner::with_seed("Aggro".to_string(), 7);
        assert_eq!(
            learner.select_move(&board, Side::White).unwrap(),
            Decision::Play(Move::new((2, 0), (1, 1)))
        );
    }

    #[test]
    fn test_random_learner_plays_legal_moves() {
        let board = Board::initial(3, 4).unwrap();
        let mut learner = RandomLearner::with_seed("Random".to_string(), 42);
        for _ in 0..20 {
            let Decision::Play(action) = learner.select_move(&board, Side::White).unwrap() else {
                panic!("random learner never resigns");
            };
            assert!(board.validate_move(Side::White, action).is_ok());
        }
    }

    #[test]
    fn test_scripted_learners_fail_without_moves() {
        let board = Board::from_rows(&["B..", "W..", "..."]).unwrap();
        let mut learner = FirstMoveLearner::new("First".to_string());
        assert!(matches!(
            learner.select_move(&board, Side::White),
            Err(Error::NoLegalMoves)
        ));
    }

    #[test]
    fn test_rote_learner_rejects_wrong_side() {
        let board = Board::initial(3, 3).unwrap();
        let mut learner = RoteLearner::new(RoteAgent::new(Side::Black), "Rote".to_string());
        assert!(learner.select_move(&board, Side::White).is_err());
        assert!(matches!(
            learner.select_move(&board, Side::Black).unwrap(),
            Decision::Play(_)
        ));
        assert_eq!(learner.known_mistakes(), Some(0));
    }

    #[test]
    fn test_rote_learner_resigns_when_exhausted() {
        let board = Board::initial(3, 3).unwrap();
        let mut knowledge = Knowledge::new();
        for action in board.moves(Side::Black) {
            knowledge.remember(board.clone(), action);
        }
        let mut learner = RoteLearner::with_knowledge(Side::Black, knowledge, "Rote".to_string());
        assert_eq!(
            learner.select_move(&board, Side::Black).unwrap(),
            Decision::Resign
        );
    }

    #[test]
    fn test_rote_learner_keeps_the_last_review() {
        let child = Board::from_rows(&["B..", ".W.", "..."]).unwrap();
        let advance = Move::new((0, 0), (1, 0));
        let capture = Move::new((0, 0), (1, 1));
        let mut knowledge = Knowledge::new();
        knowledge.remember(child.clone(), advance);

        let mut learner = RoteLearner::with_knowledge(Side::Black, knowledge, "Rote".to_string());
        learner.begin_game().unwrap();
        assert_eq!(
            learner.select_move(&child, Side::Black).unwrap(),
            Decision::Play(capture)
        );
        learner
            .learn(GameOutcome::Win(Side::White), Side::Black)
            .unwrap();

        let review = learner.last_review().unwrap();
        assert_eq!(review.forced.len(), 1);
        assert_eq!(review.culprit, None);

        learner.begin_game().unwrap();
        learner
            .learn(GameOutcome::Win(Side::Black), Side::Black)
            .unwrap();
        assert!(learner.last_review().is_none());
    }
}
