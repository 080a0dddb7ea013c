//! Training regimen and curriculum support
//!
//! Training can be split into sequential blocks, each against a different
//! scripted opponent. The agent keeps its knowledge across blocks.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A single block of training against a specific opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingBlock {
    /// Opponent type for this training block
    pub opponent: OpponentType,
    /// Number of games to play in this block
    pub games: usize,
}

impl TrainingBlock {
    /// Create a new training block
    pub fn new(opponent: OpponentType, games: usize) -> Self {
        Self { opponent, games }
    }

    /// Parse a comma-separated schedule such as `random:100,first:50`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for a malformed block and
    /// [`crate::Error::ParseOpponent`] for an unknown opponent.
    pub fn parse_schedule(input: &str) -> crate::Result<Vec<TrainingBlock>> {
        input
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (name, games) = part.split_once(':').ok_or_else(|| {
                    crate::Error::InvalidConfiguration {
                        message: format!("training block '{part}' must look like 'opponent:games'"),
                    }
                })?;
                let games = games
                    .trim()
                    .parse()
                    .map_err(|_| crate::Error::InvalidConfiguration {
                        message: format!("invalid game count in training block '{part}'"),
                    })?;
                Ok(TrainingBlock::new(name.parse()?, games))
            })
            .collect()
    }
}

/// Scripted opponent used during training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentType {
    /// Uniformly random legal moves
    Random,
    /// Always the first legal move in generation order
    FirstMove,
    /// Wins or captures whenever possible, otherwise a random move
    Aggressive,
}

impl OpponentType {
    const EXPECTED: &'static str = "random, first, aggressive";

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            OpponentType::Random => "Random",
            OpponentType::FirstMove => "FirstMove",
            OpponentType::Aggressive => "Aggressive",
        }
    }

    /// Get short label
    pub fn label(&self) -> &'static str {
        match self {
            OpponentType::Random => "random",
            OpponentType::FirstMove => "first",
            OpponentType::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for OpponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OpponentType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(OpponentType::Random),
            "first" | "first-move" | "firstmove" => Ok(OpponentType::FirstMove),
            "aggressive" => Ok(OpponentType::Aggressive),
            _ => Err(crate::Error::ParseOpponent {
                input: s.to_string(),
                expected: Self::EXPECTED.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_opponent() {
        assert_eq!("First".parse::<OpponentType>().unwrap(), OpponentType::FirstMove);
        assert_eq!("random".parse::<OpponentType>().unwrap(), OpponentType::Random);
        assert!(matches!(
            "optimal".parse::<OpponentType>(),
            Err(crate::Error::ParseOpponent { .. })
        ));
    }

    #[test]
    fn test_parse_schedule() {
        let schedule = TrainingBlock::parse_schedule("random:100, aggressive:20").unwrap();
        assert_eq!(
            schedule,
            vec![
                TrainingBlock::new(OpponentType::Random, 100),
                TrainingBlock::new(OpponentType::Aggressive, 20),
            ]
        );
        assert!(TrainingBlock::parse_schedule("random").is_err());
        assert!(TrainingBlock::parse_schedule("random:many").is_err());
    }
}
