use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use wolfbank_bench::config::SimulationConfig;
use wolfbank_bench::logging::{init_console_logging, init_logging};
use wolfbank_bench::play::{SessionEnd, run_session};
use wolfbank_bench::simulation::SimulationRunner;
use wolfbank_bot::HeuristicPolicy;
use wolfbank_core::{AppInfo, BankId, Game, TableConfig};

/// Headless harness for the four-bank werewolf table.
#[derive(Debug, Parser)]
#[command(
    name = "wolfbank-bench",
    author,
    version,
    about = "Batch simulation and terminal play for Wolf Bank"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a batch of all-CPU games and write JSONL rows plus a Markdown summary.
    Simulate {
        /// Path to the YAML configuration file.
        #[arg(short, long, value_name = "FILE", default_value = "bench/simulate.yaml")]
        config: PathBuf,

        /// Override the run identifier (substitutes {run_id} templates).
        #[arg(long, value_name = "RUN_ID")]
        run_id: Option<String>,

        /// Override the number of games to play.
        #[arg(long, value_name = "GAMES")]
        games: Option<usize>,

        /// Override the master seed.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Exit after validating the configuration (no games are played).
        #[arg(long)]
        validate_only: bool,
    },
    /// Play one seat in the terminal against three CPU banks.
    Play {
        /// Seed for the deal and the CPU tie-breaks; random when omitted.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Human seat (1-4 or P1-P4); `none` watches an all-CPU game.
        /// Falls back to WB_HUMAN_SEAT, then P1.
        #[arg(long, value_name = "SEAT")]
        seat: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Simulate {
            config,
            run_id,
            games,
            seed,
            validate_only,
        } => simulate(config, run_id, games, seed, validate_only),
        Command::Play { seed, seat } => play(seed, seat),
    }
}

fn simulate(
    path: PathBuf,
    run_id: Option<String>,
    games: Option<usize>,
    seed: Option<u64>,
    validate_only: bool,
) -> anyhow::Result<()> {
    let mut config = SimulationConfig::from_path(&path)?;

    if let Some(run_id) = run_id {
        config.run_id = run_id;
    }
    if let Some(games) = games {
        config.games.count = games;
    }
    if let Some(seed) = seed {
        config.games.seed = Some(seed);
    }

    config
        .validate()
        .with_context(|| format!("validating overrides for {}", path.display()))?;

    let outputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let count = config.games.count;
    println!(
        "Loaded configuration '{run_id}' ({count} game{}, safety cap {} steps)",
        if count == 1 { "" } else { "s" },
        config.table.safety_steps
    );

    if validate_only {
        println!("Validation-only mode: simulation skipped.");
        return Ok(());
    }

    let logging_guard = init_logging(&config.logging, &outputs)?;
    let runner = SimulationRunner::new(config, outputs);
    let summary = runner
        .run()
        .with_context(|| format!("running simulation '{run_id}'"))?;

    println!(
        "Simulation complete for '{run_id}': {} games -> {} rows at {}",
        summary.games_played,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    for id in BankId::LOOP {
        println!("  {id}: {} wins", summary.wins[id.index()]);
    }
    if summary.capped > 0 {
        println!("  {} games stopped by the safety cap", summary.capped);
    }
    println!("Summary table: {}", summary.summary_path.display());
    if let Some(guard) = logging_guard.as_ref() {
        println!("Telemetry log: {}", guard.telemetry_path.display());
    }

    Ok(())
}

fn play(seed: Option<u64>, seat: Option<String>) -> anyhow::Result<()> {
    init_console_logging();

    let mut table = TableConfig::from_env();
    if let Some(seat) = seat {
        table = table.with_human_seat(parse_seat(&seat)?);
    }
    let seed = seed.unwrap_or_else(rand::random);

    println!("{} {} ({}), seed {seed}", AppInfo::name(), AppInfo::version(), AppInfo::codename());
    let mut game = Game::with_seed(seed, table);
    let mut policy = HeuristicPolicy::with_seed(seed);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let end = run_session(&mut game, &mut policy, stdin.lock(), &mut stdout)
        .context("terminal session failed")?;

    match end {
        SessionEnd::GameOver | SessionEnd::Quit | SessionEnd::InputClosed => {}
        SessionEnd::Stalled => println!("CPU seats stopped at the safety cap; game left unfinished."),
    }
    Ok(())
}

fn parse_seat(value: &str) -> anyhow::Result<Option<BankId>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" | "cpu" | "off" => Ok(None),
        other => other
            .parse::<BankId>()
            .map(Some)
            .with_context(|| format!("invalid --seat value '{value}'")),
    }
}
