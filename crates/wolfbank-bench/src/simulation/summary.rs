use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use wolfbank_bot::StopReason;
use wolfbank_core::BankId;

use super::GameRecord;

/// Running totals for the Markdown summary.
#[derive(Debug, Clone)]
pub struct SummaryTable {
    run_id: String,
    seed: Option<u64>,
    games: usize,
    wins: [usize; 4],
    capped: usize,
    total_steps: usize,
    total_bites: u64,
    shortest: Option<usize>,
    longest: usize,
}

impl SummaryTable {
    pub fn new(run_id: &str, seed: Option<u64>) -> Self {
        Self {
            run_id: run_id.to_string(),
            seed,
            games: 0,
            wins: [0; 4],
            capped: 0,
            total_steps: 0,
            total_bites: 0,
            shortest: None,
            longest: 0,
        }
    }

    pub fn record(&mut self, record: &GameRecord) {
        self.games += 1;
        for winner in &record.winners {
            self.wins[winner.index()] += 1;
        }
        if record.stop == StopReason::SafetyCap {
            self.capped += 1;
        }
        self.total_steps += record.steps;
        self.total_bites += u64::from(record.bite_attempts);
        self.shortest = Some(self.shortest.map_or(record.steps, |s| s.min(record.steps)));
        self.longest = self.longest.max(record.steps);
    }

    pub fn games(&self) -> usize {
        self.games
    }

    pub fn wins(&self) -> [usize; 4] {
        self.wins
    }

    pub fn capped(&self) -> usize {
        self.capped
    }

    pub fn average_steps(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_steps as f64 / self.games as f64
        }
    }

    pub fn average_bites(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_bites as f64 / self.games as f64
        }
    }

    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("# Simulation Summary\n\n");
        let seed = self
            .seed
            .map_or_else(|| "unset (0)".to_string(), |seed| seed.to_string());
        let _ = writeln!(out, "Run `{}`, master seed {seed}.\n", self.run_id);

        out.push_str("| Seat | Wins | Win % |\n");
        out.push_str("|------|------|-------|\n");
        for id in BankId::LOOP {
            let wins = self.wins[id.index()];
            let rate = if self.games == 0 {
                0.0
            } else {
                wins as f64 * 100.0 / self.games as f64
            };
            let _ = writeln!(out, "| {id} | {wins} | {rate:.1}% |");
        }

        let _ = writeln!(out, "\nGames: {}", self.games);
        let _ = writeln!(
            out,
            "Average length: {:.1} steps ({} to {})",
            self.average_steps(),
            self.shortest.unwrap_or(0),
            self.longest
        );
        let _ = writeln!(out, "Average bite attempts: {:.1}", self.average_bites());
        let _ = writeln!(out, "Stopped by safety cap: {}", self.capped);
        out
    }

    pub fn write_markdown(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path.as_ref(), self.render_markdown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(winner: Option<BankId>, steps: usize, stop: StopReason) -> GameRecord {
        GameRecord {
            game_index: 0,
            seed: 0,
            winners: winner.into_iter().collect(),
            steps,
            bite_attempts: 4,
            slots_dead: 0,
            banks_alive: 1,
            stop,
        }
    }

    #[test]
    fn tallies_wins_and_lengths() {
        let mut table = SummaryTable::new("t", Some(1));
        table.record(&record(Some(BankId::P2), 100, StopReason::GameOver));
        table.record(&record(Some(BankId::P2), 200, StopReason::GameOver));
        table.record(&record(None, 30, StopReason::SafetyCap));

        assert_eq!(table.games(), 3);
        assert_eq!(table.wins(), [0, 2, 0, 0]);
        assert_eq!(table.capped(), 1);
        assert_eq!(table.average_steps(), 110.0);
        assert_eq!(table.average_bites(), 4.0);

        let md = table.render_markdown();
        assert!(md.contains("| P2 | 2 | 66.7% |"));
        assert!(md.contains("| P1 | 0 | 0.0% |"));
        assert!(md.contains("Average length: 110.0 steps (30 to 200)"));
        assert!(md.contains("Stopped by safety cap: 1"));
    }

    #[test]
    fn empty_table_renders_zeroes() {
        let md = SummaryTable::new("t", None).render_markdown();
        assert!(md.contains("master seed unset (0)"));
        assert!(md.contains("Games: 0"));
        assert!(md.contains("Average length: 0.0 steps (0 to 0)"));
    }
}
