mod summary;

pub use summary::SummaryTable;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};
use wolfbank_bot::{HeuristicPolicy, StopReason, run_auto_turns};
use wolfbank_core::{BankId, Game};

use crate::config::{ResolvedOutputs, SimulationConfig};

/// Mixed into each game seed so the CPU tie-breaks do not replay the shuffle stream.
const POLICY_SALT: u64 = 0x5eed_b0a7_d00d_cafe;

/// Runs a batch of all-CPU games and writes one JSONL row per game.
pub struct SimulationRunner {
    config: SimulationConfig,
    outputs: ResolvedOutputs,
}

/// Summary details returned after a run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub games_played: usize,
    pub rows_written: usize,
    pub wins: [usize; 4],
    pub capped: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
}

/// What one finished game contributes to the JSONL file and the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub game_index: usize,
    pub seed: u64,
    pub winners: Vec<BankId>,
    pub steps: usize,
    pub bite_attempts: u32,
    pub slots_dead: usize,
    pub banks_alive: usize,
    pub stop: StopReason,
}

#[derive(Debug, Serialize)]
struct GameLogRow<'a> {
    run_id: &'a str,
    game_index: usize,
    seed: u64,
    winners: Vec<String>,
    steps: usize,
    bite_attempts: u32,
    slots_dead: usize,
    banks_alive: usize,
    stop: &'static str,
}

impl SimulationRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: SimulationConfig, outputs: ResolvedOutputs) -> Self {
        Self { config, outputs }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play every configured game, streaming rows to disk, then write the summary.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut seeds = StdRng::seed_from_u64(self.config.games.seed.unwrap_or(0));
        let mut table = SummaryTable::new(&self.config.run_id, self.config.games.seed);
        let mut rows_written = 0usize;

        for game_index in 0..self.config.games.count {
            let record = self.play_game(game_index, seeds.next_u64());
            write_game_row(&mut writer, &self.config.run_id, &record)?;
            rows_written += 1;
            table.record(&record);
        }

        writer.flush()?;
        table.write_markdown(&self.outputs.summary_md)?;

        Ok(RunSummary {
            games_played: table.games(),
            rows_written,
            wins: table.wins(),
            capped: table.capped(),
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
        })
    }

    /// Deal from `seed` and let the CPU seats play until the game ends or the cap trips.
    pub fn play_game(&self, game_index: usize, seed: u64) -> GameRecord {
        let mut game = Game::with_seed(seed, self.config.table_config());
        let mut policy = HeuristicPolicy::with_seed(seed ^ POLICY_SALT);
        let report = run_auto_turns(&mut game, &mut policy);
        let record = GameRecord::from_game(game_index, seed, &game, report.steps, report.stop);

        event!(
            target: "wolfbank_bench::game",
            Level::INFO,
            run_id = %self.config.run_id,
            game_index = game_index as u64,
            seed,
            winner = %winners_label(&record.winners),
            steps = record.steps as u64,
            bite_attempts = record.bite_attempts,
            stop = stop_label(record.stop)
        );
        if record.stop == StopReason::SafetyCap {
            event!(
                target: "wolfbank_bench::game",
                Level::WARN,
                run_id = %self.config.run_id,
                game_index = game_index as u64,
                seed,
                phase = %game.phase(),
                turn = %game.turn(),
                "game stopped by safety cap"
            );
        }
        record
    }
}

impl GameRecord {
    pub fn from_game(
        game_index: usize,
        seed: u64,
        game: &Game,
        steps: usize,
        stop: StopReason,
    ) -> Self {
        let slots_dead = game
            .banks()
            .iter()
            .flat_map(|bank| bank.slots().iter())
            .filter(|slot| slot.is_dead())
            .count();
        Self {
            game_index,
            seed,
            winners: game.winners().to_vec(),
            steps,
            bite_attempts: game.bite_no(),
            slots_dead,
            banks_alive: game.alive_count(),
            stop,
        }
    }
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn write_game_row(
    writer: &mut impl Write,
    run_id: &str,
    record: &GameRecord,
) -> Result<(), RunnerError> {
    let row = GameLogRow {
        run_id,
        game_index: record.game_index,
        seed: record.seed,
        winners: record.winners.iter().map(ToString::to_string).collect(),
        steps: record.steps,
        bite_attempts: record.bite_attempts,
        slots_dead: record.slots_dead,
        banks_alive: record.banks_alive,
        stop: stop_label(record.stop),
    };
    serde_json::to_writer(&mut *writer, &row)?;
    writer.write_all(b"\n")?;
    Ok(())
}

pub fn stop_label(stop: StopReason) -> &'static str {
    match stop {
        StopReason::GameOver => "game_over",
        StopReason::SafetyCap => "safety_cap",
        StopReason::HumanTurn => "human_turn",
    }
}

fn winners_label(winners: &[BankId]) -> String {
    if winners.is_empty() {
        return "-".to_string();
    }
    winners
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize log row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}
