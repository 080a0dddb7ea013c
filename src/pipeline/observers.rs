//! Observer pattern for training pipelines
//!
//! Observers allow composable data collection during training without coupling
//! training logic to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    Result,
    engine::{GameOutcome, Move, Side},
    ports::Observer,
};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    agent_side: Side,
    progress_bar: Option<ProgressBar>,
    wins: usize,
    losses: usize,
    known_mistakes: usize,
}

impl ProgressObserver {
    /// Create a progress observer counting results for `agent_side`
    pub fn new(agent_side: Side) -> Self {
        Self {
            agent_side,
            progress_bar: None,
            wins: 0,
            losses: 0,
            known_mistakes: 0,
        }
    }

    fn message(&self) -> String {
        format!(
            "W:{} L:{} mistakes:{}",
            self.wins, self.losses, self.known_mistakes
        )
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(
        &mut self,
        game_num: usize,
        outcome: GameOutcome,
        _moves: &[Move],
    ) -> Result<()> {
        if outcome.winner() == self.agent_side {
            self.wins += 1;
        } else {
            self.losses += 1;
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_knowledge_updated(&mut self, _game_num: usize, known_mistakes: usize) -> Result<()> {
        self.known_mistakes = known_mistakes;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// One finished game as written by [`JsonlObserver`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLogEntry {
    /// Game number
    pub game_num: usize,
    /// Winning side
    pub winner: Side,
    /// Whether the loser resigned
    pub resignation: bool,
    /// Total moves in game
    pub total_moves: usize,
    /// Moves in the order they were played
    pub moves: Vec<Move>,
}

/// JSONL observer - Exports one line per finished game
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    /// Create a new JSONL observer
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_game_end(
        &mut self,
        game_num: usize,
        outcome: GameOutcome,
        moves: &[Move],
    ) -> Result<()> {
        let entry = GameLogEntry {
            game_num,
            winner: outcome.winner(),
            resignation: outcome.is_resignation(),
            total_moves: moves.len(),
            moves: moves.to_vec(),
        };

        serde_json::to_writer(&mut self.writer, &entry)?;
        writeln!(&mut self.writer)?;
        self.writer.flush()?;

        Ok(())
    }
}

/// Milestone observer - Tracks key learning achievements
///
/// Records the first win and the last loss of the agent. When the last loss
/// comes before a long run of wins the agent has stopped repeating mistakes.
pub struct MilestoneObserver {
    agent_side: Side,
    first_win: Option<usize>,
    last_loss: Option<usize>,
    games: usize,
}

impl MilestoneObserver {
    pub fn new(agent_side: Side) -> Self {
        Self {
            agent_side,
            first_win: None,
            last_loss: None,
            games: 0,
        }
    }

    /// Get the first win milestone (if achieved)
    pub fn first_win(&self) -> Option<usize> {
        self.first_win
    }

    /// Get the last loss milestone (if any losses occurred)
    pub fn last_loss(&self) -> Option<usize> {
        self.last_loss
    }

    /// Games won in a row since the last loss
    pub fn win_streak(&self) -> usize {
        match self.last_loss {
            Some(game) => self.games - game - 1,
            None => self.games,
        }
    }
}

impl Observer for MilestoneObserver {
    fn on_game_end(
        &mut self,
        game_num: usize,
        outcome: GameOutcome,
        _moves: &[Move],
    ) -> Result<()> {
        self.games = game_num + 1;
        if outcome.winner() == self.agent_side {
            self.first_win.get_or_insert(game_num);
        } else {
            self.last_loss = Some(game_num);
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        info!(
            first_win = ?self.first_win.map(|g| g + 1),
            last_loss = ?self.last_loss.map(|g| g + 1),
            win_streak = self.win_streak(),
            "learning milestones"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones() {
        let mut observer = MilestoneObserver::new(Side::Black);
        let loss = GameOutcome::Win(Side::White);
        let win = GameOutcome::Win(Side::Black);

        observer.on_game_end(0, loss, &[]).unwrap();
        observer.on_game_end(1, win, &[]).unwrap();
        observer.on_game_end(2, loss, &[]).unwrap();
        observer.on_game_end(3, win, &[]).unwrap();
        observer.on_game_end(4, win, &[]).unwrap();

        assert_eq!(observer.first_win(), Some(1));
        assert_eq!(observer.last_loss(), Some(2));
        assert_eq!(observer.win_streak(), 2);
    }

    #[test]
    fn test_jsonl_observer_writes_one_line_per_game() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        let mut observer = JsonlObserver::new(&path).unwrap();

        let moves = [Move::new((2, 0), (1, 0)), Move::new((0, 1), (1, 0))];
        observer
            .on_game_end(0, GameOutcome::Win(Side::Black), &moves)
            .unwrap();
        observer
            .on_game_end(1, GameOutcome::Resignation { winner: Side::White }, &[])
            .unwrap();
        drop(observer);

        let text = std::fs::read_to_string(&path).unwrap();
        let entries: Vec<GameLogEntry> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].moves, moves.to_vec());
        assert_eq!(entries[0].total_moves, 2);
        assert!(entries[1].resignation);
        assert_eq!(entries[1].winner, Side::White);
    }
}
