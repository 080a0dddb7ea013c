//! A human player at the terminal

use dialoguer::{Confirm, Input};
use tracing::debug;

use super::output::render_board;
use crate::{
    Error, Result,
    engine::{Board, Move, Position, Side},
    ports::{Decision, Learner},
};

/// Parse one square: either `RC` with single digits or `R,C`.
fn parse_square(token: &str) -> Option<Position> {
    if let Some((row, col)) = token.split_once(',') {
        return Some(Position::new(row.trim().parse().ok()?, col.trim().parse().ok()?));
    }
    let mut digits = token.chars();
    match (digits.next(), digits.next(), digits.next()) {
        (Some(row), Some(col), None) => Some(Position::new(
            row.to_digit(10)? as usize,
            col.to_digit(10)? as usize,
        )),
        _ => None,
    }
}

/// Parse a move typed as two squares, e.g. `20 10` or `2,0 1,0`.
///
/// # Errors
///
/// Returns [`Error::InvalidMoveNotation`] unless the input is exactly two
/// well-formed squares.
pub fn parse_move(input: &str) -> Result<Move> {
    let invalid = || Error::InvalidMoveNotation {
        input: input.trim().to_string(),
    };
    let mut tokens = input.split_whitespace();
    let (Some(from), Some(to), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(invalid());
    };
    let from = parse_square(from).ok_or_else(invalid)?;
    let to = parse_square(to).ok_or_else(invalid)?;
    Ok(Move::new(from, to))
}

/// Parse `input` and check it is legal for `side` on `board`.
pub fn parse_legal_move(board: &Board, side: Side, input: &str) -> Result<Move> {
    let action = parse_move(input)?;
    board.validate_move(side, action)?;
    Ok(action)
}

fn is_resignation(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("resign")
}

/// Where a human session reads answers and writes text.
pub trait Console: Send {
    /// Write one line of text
    fn show(&mut self, text: &str) -> Result<()>;

    /// Ask for a move for `side`; `None` means no more input.
    fn ask_move(&mut self, board: &Board, side: Side) -> Result<Option<String>>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Interactive console on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn show(&mut self, text: &str) -> Result<()> {
        println!("{text}");
        Ok(())
    }

    fn ask_move(&mut self, board: &Board, side: Side) -> Result<Option<String>> {
        let line = Input::<String>::new()
            .with_prompt("You")
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                if is_resignation(input) {
                    return Ok(());
                }
                parse_legal_move(board, side, input)
                    .map(|_| ())
                    .map_err(|err| err.to_string())
            })
            .interact_text()?;
        Ok(Some(line))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }
}

/// Learner adapter that asks a person for every move.
///
/// Shows the board and keeps asking until the answer names a legal move.
/// End of input or `resign` concedes the game.
pub struct HumanLearner<C> {
    name: String,
    console: C,
}

impl<C: Console> HumanLearner<C> {
    pub fn new(name: String, console: C) -> Self {
        Self { name, console }
    }

    pub fn console(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }
}

impl<C: Console> Learner for HumanLearner<C> {
    fn select_move(&mut self, board: &Board, side: Side) -> Result<Decision> {
        self.console.show(&render_board(board))?;
        loop {
            let Some(line) = self.console.ask_move(board, side)? else {
                debug!(%side, "input closed; resigning");
                return Ok(Decision::Resign);
            };
            if is_resignation(&line) {
                return Ok(Decision::Resign);
            }
            match parse_legal_move(board, side, &line) {
                Ok(action) => return Ok(Decision::Play(action)),
                Err(err) => self.console.show(&err.to_string())?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Console fed from a fixed list of answers, keeping everything shown.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedConsole {
    answers: std::collections::VecDeque<String>,
    pub(crate) transcript: String,
    pub(crate) prompts: usize,
}

#[cfg(test)]
impl ScriptedConsole {
    pub(crate) fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn show(&mut self, text: &str) -> Result<()> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }

    fn ask_move(&mut self, _board: &Board, _side: Side) -> Result<Option<String>> {
        self.prompts += 1;
        Ok(self.answers.pop_front())
    }

    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(self
            .answers
            .pop_front()
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_notations() {
        let expected = Move::new((2, 0), (1, 0));
        assert_eq!(parse_move("20 10").unwrap(), expected);
        assert_eq!(parse_move("  2,0   1,0 ").unwrap(), expected);
        assert_eq!(parse_move("12,3 11,3").unwrap(), Move::new((12, 3), (11, 3)));
    }

    #[test]
    fn test_parse_move_rejects_malformed_input() {
        for input in ["", "20", "20 10 00", "2a 10", "200 10", "2, 10"] {
            assert!(
                matches!(parse_move(input), Err(Error::InvalidMoveNotation { .. })),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_legal_move_checks_the_board() {
        let board = Board::initial(3, 3).unwrap();
        assert_eq!(
            parse_legal_move(&board, Side::White, "21 11").unwrap(),
            Move::new((2, 1), (1, 1))
        );
        assert!(matches!(
            parse_legal_move(&board, Side::White, "20 00"),
            Err(Error::IllegalMove { .. })
        ));
        assert!(parse_legal_move(&board, Side::Black, "21 11").is_err());
    }

    #[test]
    fn test_human_reprompts_until_legal() {
        let board = Board::initial(3, 3).unwrap();
        let console = ScriptedConsole::new(&["hello", "20 00", "21 11"]);
        let mut human = HumanLearner::new("You".to_string(), console);

        let decision = human.select_move(&board, Side::White).unwrap();
        assert_eq!(decision, Decision::Play(Move::new((2, 1), (1, 1))));

        let console = human.into_console();
        assert_eq!(console.prompts, 3);
        assert!(console.transcript.contains("invalid move notation 'hello'"));
    }

    #[test]
    fn test_human_resigns_on_request_or_end_of_input() {
        let board = Board::initial(3, 3).unwrap();
        for answers in [&["Resign"][..], &[][..]] {
            let mut human = HumanLearner::new("You".to_string(), ScriptedConsole::new(answers));
            assert_eq!(
                human.select_move(&board, Side::White).unwrap(),
                Decision::Resign
            );
        }
    }
}
