use crate::model::seat::BankId;

pub const DEFAULT_AUTO_SAFETY_STEPS: usize = 800;

/// Table-level knobs: which seat a person controls and how long the CPU driver may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub human_seat: Option<BankId>,
    pub auto_safety_steps: usize,
}

impl TableConfig {
    pub const fn new(human_seat: Option<BankId>, auto_safety_steps: usize) -> Self {
        Self {
            human_seat,
            auto_safety_steps,
        }
    }

    /// Every seat is driven by the CPU.
    pub const fn all_cpu() -> Self {
        Self::new(None, DEFAULT_AUTO_SAFETY_STEPS)
    }

    pub fn with_human_seat(mut self, seat: Option<BankId>) -> Self {
        self.human_seat = seat;
        self
    }

    pub fn with_safety_steps(mut self, steps: usize) -> Self {
        self.auto_safety_steps = steps;
        self
    }

    pub fn is_human(&self, bank: BankId) -> bool {
        self.human_seat == Some(bank)
    }

    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let human_seat = match read("WB_HUMAN_SEAT") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "none" | "cpu" | "off" => None,
                other => other.parse::<BankId>().ok().or(defaults.human_seat),
            },
            None => defaults.human_seat,
        };

        let auto_safety_steps = read("WB_AUTO_SAFETY_STEPS")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|steps| *steps > 0)
            .unwrap_or(defaults.auto_safety_steps);

        Self {
            human_seat,
            auto_safety_steps,
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(Some(BankId::P1), DEFAULT_AUTO_SAFETY_STEPS)
    }
}
