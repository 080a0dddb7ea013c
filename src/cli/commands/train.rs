//! Train command - Train the rote learner against scripted opponents

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    cli::{
        config::{CommonConfig, GameConfig},
        output::{print_flaws, print_section, print_stats_table, print_subsection},
    },
    engine::Side,
    pipeline::{
        JsonlObserver, MilestoneObserver, OpponentType, ProgressObserver, RoteLearner,
        TrainingBlock, TrainingPipeline, TrainingResult,
    },
    rote::RoteAgent,
};

#[derive(Debug, Serialize)]
struct TrainingSummaryFile<'a> {
    training: &'a TrainingResult,
    schedule: &'a [TrainingBlock],
    game: GameConfig,
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
#[command(about = "Train the rote learner")]
pub struct TrainArgs {
    /// Number of training games
    #[arg(long, short = 'g', default_value_t = 200)]
    pub games: usize,

    /// Opponent to train against (random, first, aggressive)
    #[arg(long, short = 'o', default_value = "first")]
    pub opponent: OpponentType,

    /// Curriculum of sequential blocks, e.g. `random:100,first:50`; overrides --games and --opponent
    #[arg(long)]
    pub curriculum: Option<String>,

    /// Board rows
    #[arg(long, default_value_t = 3)]
    pub rows: usize,

    /// Board columns
    #[arg(long, default_value_t = 3)]
    pub cols: usize,

    /// Side played by the learner
    #[arg(long, default_value = "black")]
    pub agent_side: Side,

    /// Side that moves first
    #[arg(long, default_value = "white")]
    pub first_side: Side,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional file for a JSONL game log
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// List every learned mistake after training
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let common = CommonConfig {
        seed: args.seed,
        progress: !args.no_progress,
        verbose: args.verbose,
    };
    let game = GameConfig {
        rows: args.rows,
        cols: args.cols,
        automated_side: args.agent_side,
        first_side: args.first_side,
    };
    game.validate()?;

    let schedule = match &args.curriculum {
        Some(plan) => TrainingBlock::parse_schedule(plan)?,
        None => vec![TrainingBlock::new(args.opponent, args.games)],
    };
    let total_games: usize = schedule.iter().map(|block| block.games).sum();

    let mut pipeline = TrainingPipeline::new(game.training(total_games, &common))
        .with_observer(Box::new(MilestoneObserver::new(game.automated_side)));
    if common.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new(game.automated_side)));
    }
    if let Some(path) = &args.log {
        let observer = JsonlObserver::new(path)
            .with_context(|| format!("failed to open game log {}", path.display()))?;
        pipeline = pipeline.with_observer(Box::new(observer));
    }

    info!(games = total_games, blocks = schedule.len(), "starting training");
    let mut learner = RoteLearner::new(
        RoteAgent::new(game.automated_side),
        "RoteLearner".to_string(),
    );
    let result = pipeline.run_curriculum(&mut learner, &schedule)?;

    print_section("Training Results");
    print_stats_table(&[
        ("Board", format!("{}x{}", game.rows, game.cols)),
        ("Learner plays", game.automated_side.to_string()),
        (
            "Schedule",
            schedule
                .iter()
                .map(|block| format!("{}:{}", block.opponent, block.games))
                .collect::<Vec<_>>()
                .join(","),
        ),
        ("Games", result.total_games.to_string()),
        (
            "Wins",
            format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0),
        ),
        (
            "Losses",
            format!("{} ({:.1}%)", result.losses, result.loss_rate * 100.0),
        ),
        ("Resignations", result.resignations.to_string()),
        (
            "Mistakes learned",
            result.known_mistakes.unwrap_or(0).to_string(),
        ),
    ]);

    if common.verbose {
        print_subsection("Learned mistakes");
        print_flaws(learner.agent().knowledge().mistakes());
    }

    if let Some(path) = &args.export {
        let summary = TrainingSummaryFile {
            training: &result,
            schedule: &schedule,
            game,
            seed: common.seed,
        };
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create summary file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &summary)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}
