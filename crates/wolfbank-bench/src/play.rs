use std::io::{self, BufRead, Write};

use wolfbank_bot::{Policy, StopReason, run_auto_turns};
use wolfbank_core::{BankId, Game, Outcome, TableView};

use crate::render::{LEGEND, render_bank, render_log, render_table};

/// One line typed by the human seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based slot on the named bank.
    Pick { bank: BankId, slot: usize },
    Acknowledge,
    View(BankId),
    Log,
    Json,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["ok"] => Ok(Command::Acknowledge),
            ["log"] => Ok(Command::Log),
            ["json"] => Ok(Command::Json),
            ["help"] | ["?"] => Ok(Command::Help),
            ["quit"] | ["q"] | ["exit"] => Ok(Command::Quit),
            ["view", bank] => bank
                .parse::<BankId>()
                .map(Command::View)
                .map_err(|err| err.to_string()),
            [bank, slot] => {
                let bank = bank.parse::<BankId>().map_err(|err| err.to_string())?;
                let slot = slot
                    .parse::<usize>()
                    .ok()
                    .and_then(|slot| slot.checked_sub(1))
                    .ok_or_else(|| format!("slot must be 1..9, got {slot}"))?;
                Ok(Command::Pick { bank, slot })
            }
            [] => Err("empty command".to_string()),
            _ => Err(format!("unknown command: {}", line.trim())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver,
    Quit,
    InputClosed,
    /// The CPU seats hit the safety cap without handing the turn back.
    Stalled,
}

const HELP: &str = "commands: <bank> <slot> (e.g. `4 7`), ok, view <bank>, log, json, quit";

/// Interactive loop for the human seat.
///
/// CPU seats are drained after every command; new log lines and the table are
/// printed before each prompt.
pub fn run_session<P, R, W>(
    game: &mut Game,
    policy: &mut P,
    input: R,
    out: &mut W,
) -> io::Result<SessionEnd>
where
    P: Policy + ?Sized,
    R: BufRead,
    W: Write,
{
    let viewer = game.human_seat().unwrap_or(BankId::P1);
    let mut shown = 0usize;
    let mut lines = input.lines();

    writeln!(out, "{HELP}")?;
    writeln!(out, "{LEGEND}")?;

    loop {
        let report = run_auto_turns(game, policy);
        write!(out, "{}", render_log(game.log().since(shown)))?;
        shown = game.log().len();

        let view = TableView::project(game, viewer);
        write!(out, "{}", render_table(&view))?;

        match report.stop {
            StopReason::GameOver => return Ok(SessionEnd::GameOver),
            StopReason::SafetyCap => return Ok(SessionEnd::Stalled),
            StopReason::HumanTurn => {}
        }

        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                return Ok(SessionEnd::InputClosed);
            };
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(out, "{message}")?;
                    continue;
                }
            };
            let result = match command {
                Command::Pick { bank, slot } => game.apply_human_input(bank, slot),
                Command::Acknowledge => game.acknowledge_absence(),
                Command::View(bank) => {
                    let view = TableView::project(game, viewer);
                    writeln!(out, "{}", render_bank(&view, bank))?;
                    continue;
                }
                Command::Log => {
                    write!(out, "{}", render_log(game.log().entries()))?;
                    continue;
                }
                Command::Json => {
                    let json = TableView::project(game, viewer)
                        .to_json()
                        .map_err(io::Error::other)?;
                    writeln!(out, "{json}")?;
                    continue;
                }
                Command::Help => {
                    writeln!(out, "{HELP}")?;
                    writeln!(out, "{LEGEND}")?;
                    continue;
                }
                Command::Quit => return Ok(SessionEnd::Quit),
            };
            match result {
                Ok(Outcome::Skipped(reason)) => writeln!(out, "passed: {reason}")?,
                Ok(Outcome::Resolved(_)) => {}
                Err(rejected) => {
                    writeln!(out, "refused: {rejected}")?;
                    continue;
                }
            }
            break;
        }
    }
}
