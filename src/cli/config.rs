//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

use crate::{Error, Result, engine::Side, pipeline::TrainingConfig};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
            verbose: false,
        }
    }
}

/// Board and seating configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board rows
    pub rows: usize,

    /// Board columns
    pub cols: usize,

    /// Side played by the rote learner
    pub automated_side: Side,

    /// Side that moves first
    pub first_side: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            automated_side: Side::Black,
            first_side: Side::White,
        }
    }
}

impl GameConfig {
    /// Check the board dimensions before any game is created.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 2 || self.cols < 1 {
            return Err(Error::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Build the pipeline configuration for `num_games` training games.
    pub fn training(&self, num_games: usize, common: &CommonConfig) -> TrainingConfig {
        TrainingConfig {
            num_games,
            seed: common.seed,
            rows: self.rows,
            cols: self.cols,
            agent_side: self.automated_side,
            first_side: self.first_side,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_game_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());

        let training = config.training(50, &CommonConfig::default());
        assert_eq!(training.num_games, 50);
        assert_eq!(training.agent_side, Side::Black);
        assert_eq!(training.first_side, Side::White);
        assert_eq!((training.rows, training.cols), (3, 3));
    }

    #[test]
    fn test_validate_rejects_degenerate_boards() {
        let config = GameConfig {
            rows: 1,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidDimensions { rows: 1, cols: 3 })
        ));

        let config = GameConfig {
            cols: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
