//! Play command - A human against the rote learner at the terminal

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{CommonConfig, GameConfig},
        human::{Console, HumanLearner, TerminalConsole},
        output::{flaws_listing, render_board},
    },
    engine::{Board, Game, Move, Side},
    pipeline::{Observer, RoteLearner, TrainingPipeline},
    rote::RoteAgent,
};

#[derive(Parser, Debug)]
#[command(about = "Play against the learning engine")]
pub struct PlayArgs {
    /// Board rows
    #[arg(long, default_value_t = 3)]
    pub rows: usize,

    /// Board columns
    #[arg(long, default_value_t = 3)]
    pub cols: usize,

    /// Side you play (`white` or `black`); the engine takes the other
    #[arg(long, default_value = "white")]
    pub side: Side,

    /// Side that moves first
    #[arg(long, default_value = "white")]
    pub first: Side,
}

/// Prints the engine's replies between the human's turns
struct TranscriptObserver {
    engine_side: Side,
}

impl Observer for TranscriptObserver {
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        side: Side,
        action: Move,
    ) -> crate::Result<()> {
        if side == self.engine_side {
            println!("Engine: {action}");
        }
        println!("{}", "*".repeat(30));
        Ok(())
    }
}

/// Everything a finished session produced
pub struct Session {
    pub games: Vec<Game>,
    pub engine: RoteLearner,
}

/// Play games against a fresh engine until the human declines another.
pub fn run_session<C: Console>(
    game: GameConfig,
    human: &mut HumanLearner<C>,
) -> crate::Result<Session> {
    game.validate()?;
    let engine_side = game.automated_side;
    let mut pipeline = TrainingPipeline::new(game.training(1, &CommonConfig::default()))
        .with_observer(Box::new(TranscriptObserver { engine_side }));
    let mut engine = RoteLearner::new(RoteAgent::new(engine_side), "Engine".to_string());
    let mut games = Vec::new();

    human.console().show(&format!(
        "You play {}. Enter moves as two squares, e.g. '20 10'.",
        engine_side.opponent()
    ))?;

    for game_num in 0.. {
        let finished = pipeline.play_game(game_num, &mut engine, &mut *human)?;
        let outcome = finished.outcome.ok_or(crate::Error::NotTerminal)?;
        let console = human.console();

        console.show(&render_board(finished.board()))?;
        if outcome.winner() == engine_side {
            console.show(if outcome.is_resignation() {
                "You resigned."
            } else {
                "The engine wins."
            })?;
        } else {
            console.show(if outcome.is_resignation() {
                "The engine resigns."
            } else {
                "You win!"
            })?;
            console.show("Reviewing the mistakes...")?;
            let learned = match engine.last_review() {
                Some(review) => {
                    for _ in &review.forced {
                        console.show("Climbing up the game tree...")?;
                    }
                    review.recorded()
                }
                None => 0,
            };
            console.show(&format!("Learned {learned} new mistake(s)."))?;
        }
        games.push(finished);

        if !console.confirm("Try Again")? {
            break;
        }
    }

    human
        .console()
        .show(&flaws_listing(engine.agent().knowledge().mistakes()))?;
    Ok(Session { games, engine })
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let game = GameConfig {
        rows: args.rows,
        cols: args.cols,
        automated_side: args.side.opponent(),
        first_side: args.first,
    };
    let mut human = HumanLearner::new("You".to_string(), TerminalConsole);
    run_session(game, &mut human)?;
    Ok(())
}
