//! Training pipeline for learnable agents

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{learners::opponent, regimen::TrainingBlock};
use crate::{
    Error, Result,
    engine::{Game, GameOutcome, Side},
    ports::{Decision, Learner, Observer},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training games
    pub num_games: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Board rows
    pub rows: usize,

    /// Board columns
    pub cols: usize,

    /// Side played by the agent under training
    pub agent_side: Side,

    /// Side that moves first
    pub first_side: Side,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_games: 200,
            seed: None,
            rows: 3,
            cols: 3,
            agent_side: Side::Black,
            first_side: Side::White,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total games played
    pub total_games: usize,

    /// Number of wins
    pub wins: usize,

    /// Number of losses, resignations included
    pub losses: usize,

    /// Number of losses by resignation
    pub resignations: usize,

    /// Win rate
    pub win_rate: f64,

    /// Loss rate
    pub loss_rate: f64,

    /// Size of the agent's mistake memory at the end, if it keeps one
    pub known_mistakes: Option<usize>,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(total_games: usize, wins: usize, losses: usize, resignations: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            losses,
            resignations,
            win_rate: rate(wins),
            loss_rate: rate(losses),
            known_mistakes: None,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

#[derive(Debug, Default)]
struct Tally {
    games: usize,
    wins: usize,
    losses: usize,
    resignations: usize,
}

impl Tally {
    fn record(&mut self, outcome: GameOutcome, agent_side: Side) {
        self.games += 1;
        if outcome.winner() == agent_side {
            self.wins += 1;
        } else {
            self.losses += 1;
            if outcome.is_resignation() {
                self.resignations += 1;
            }
        }
    }

    fn finish(self, agent: &dyn Learner) -> TrainingResult {
        let mut result = TrainingResult::new(self.games, self.wins, self.losses, self.resignations);
        result.known_mistakes = agent.known_mistakes();
        result
    }
}

/// Training pipeline for a single learner against an opponent
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run training curriculum with multiple sequential blocks
    ///
    /// The agent accumulates knowledge across all blocks.
    pub fn run_curriculum(
        &mut self,
        agent: &mut dyn Learner,
        schedule: &[TrainingBlock],
    ) -> Result<TrainingResult> {
        self.seed_learner(agent, 0)?;

        let all_games: usize = schedule.iter().map(|b| b.games).sum();
        for observer in &mut self.observers {
            observer.on_training_start(all_games)?;
        }

        let mut tally = Tally::default();
        for (block_idx, block) in schedule.iter().enumerate() {
            if block.games == 0 {
                continue;
            }

            let mut opponent = opponent(
                block.opponent,
                format!("{}-Block{}", block.opponent.name(), block_idx + 1),
            );
            self.seed_learner(opponent.as_mut(), (block_idx as u64) + 1)?;
            info!(
                block = block_idx + 1,
                opponent = opponent.name(),
                games = block.games,
                "starting training block"
            );

            for _ in 0..block.games {
                let game = self.play_game(tally.games, agent, opponent.as_mut())?;
                let outcome = game.outcome.ok_or(Error::NotTerminal)?;
                tally.record(outcome, self.config.agent_side);
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(tally.finish(agent))
    }

    /// Run training with the given agent and opponent
    pub fn run(
        &mut self,
        agent: &mut dyn Learner,
        opponent: &mut dyn Learner,
    ) -> Result<TrainingResult> {
        self.seed_learner(agent, 0)?;
        self.seed_learner(opponent, 1)?;

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_games)?;
        }

        let mut tally = Tally::default();
        for game_num in 0..self.config.num_games {
            let game = self.play_game(game_num, agent, opponent)?;
            let outcome = game.outcome.ok_or(Error::NotTerminal)?;
            tally.record(outcome, self.config.agent_side);
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(tally.finish(agent))
    }

    fn seed_learner(&self, learner: &mut dyn Learner, offset: u64) -> Result<()> {
        if let Some(seed) = self.config.seed {
            learner.set_rng_seed(seed.wrapping_add(offset))?;
        }
        Ok(())
    }

    /// Play one game between the agent and an opponent, then let both learn.
    ///
    /// Every move is validated before it is applied. Returns the finished game.
    pub fn play_game(
        &mut self,
        game_num: usize,
        agent: &mut dyn Learner,
        opponent: &mut dyn Learner,
    ) -> Result<Game> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }
        agent.begin_game()?;
        opponent.begin_game()?;

        let agent_side = self.config.agent_side;
        let mut game = Game::new(self.config.rows, self.config.cols, self.config.first_side)?;
        let mut step_num = 0;

        while !game.is_over() {
            let side = game.to_move();
            let learner: &mut dyn Learner = if side == agent_side {
                &mut *agent
            } else {
                &mut *opponent
            };

            match learner.select_move(game.board(), side)? {
                Decision::Play(action) => {
                    for observer in &mut self.observers {
                        observer.on_move(game_num, step_num, game.board(), side, action)?;
                    }
                    game.play(action)?;
                    step_num += 1;
                }
                Decision::Resign => {
                    debug!(game = game_num, %side, learner = learner.name(), "resigned");
                    game.resign();
                }
            }
        }

        let outcome = game.outcome.ok_or(Error::NotTerminal)?;
        debug!(game = game_num, winner = %outcome.winner(), plies = step_num, "game over");

        agent.learn(outcome, agent_side)?;
        opponent.learn(outcome, agent_side.opponent())?;

        for observer in &mut self.observers {
            observer.on_game_end(game_num, outcome, &game.moves)?;
        }
        if let Some(known) = agent.known_mistakes() {
            for observer in &mut self.observers {
                observer.on_knowledge_updated(game_num, known)?;
            }
        }

        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::learners::RandomLearner;

    #[test]
    fn test_training_pipeline() {
        let config = TrainingConfig {
            num_games: 10,
            seed: Some(42),
            agent_side: Side::White,
            ..TrainingConfig::default()
        };

        let mut pipeline = TrainingPipeline::new(config);
        let mut agent = RandomLearner::new("Agent".to_string());
        let mut opponent = RandomLearner::new("Opponent".to_string());

        let result = pipeline.run(&mut agent, &mut opponent).unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.wins + result.losses, 10);
        assert_eq!(result.resignations, 0);
        assert_eq!(result.known_mistakes, None);
    }
}
