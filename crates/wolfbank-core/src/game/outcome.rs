use crate::model::phase::Phase;
use crate::model::role::Role;
use crate::model::seat::BankId;
use crate::model::slot::Verdict;
use core::fmt;

/// What a resolver changed on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Verdict {
        target: BankId,
        slot: usize,
        verdict: Verdict,
        inverted: bool,
    },
    Killed {
        bank: BankId,
        slot: usize,
    },
    BiteFailed {
        bank: BankId,
        slot: usize,
    },
    InvertSet {
        slot: usize,
    },
    GuardSet {
        slot: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No other bank is alive to aim at.
    NoTarget,
    /// The acting bank has no living card for this phase's ability.
    AbsentRole(Role),
    /// The Mad flip already fired.
    AbilityConsumed,
    /// The ability exists but nothing on the table qualifies.
    NothingToChoose,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoTarget => f.write_str("no target"),
            SkipReason::AbsentRole(role) => write!(f, "no {role}"),
            SkipReason::AbilityConsumed => f.write_str("already used"),
            SkipReason::NothingToChoose => f.write_str("nothing to choose"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Resolved(Effect),
    Skipped(SkipReason),
}

impl Outcome {
    pub fn effect(&self) -> Option<Effect> {
        match self {
            Outcome::Resolved(effect) => Some(*effect),
            Outcome::Skipped(_) => None,
        }
    }
}

/// Why an action was ignored. The table is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    GameOver,
    OutOfTurn {
        expected: BankId,
        actual: BankId,
    },
    WrongPhase {
        phase: Phase,
    },
    WrongBank {
        expected: Option<BankId>,
        actual: BankId,
    },
    SlotOutOfRange(usize),
    SlotDead {
        bank: BankId,
        slot: usize,
    },
    Unguardable {
        slot: usize,
        role: Role,
    },
    NotHumanTurn,
    HumanRetired,
    NotAbsent,
    /// Seer, Lynch and Bite cannot be passed while a target exists.
    TargetRequired {
        phase: Phase,
    },
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::GameOver => f.write_str("game is over"),
            Rejected::OutOfTurn { expected, actual } => {
                write!(f, "it is {expected}'s turn, not {actual}'s")
            }
            Rejected::WrongPhase { phase } => write!(f, "action does not belong to {phase} phase"),
            Rejected::WrongBank {
                expected: Some(expected),
                actual,
            } => write!(f, "target must be {expected}, got {actual}"),
            Rejected::WrongBank {
                expected: None,
                actual,
            } => write!(f, "{actual} is not a valid target"),
            Rejected::SlotOutOfRange(slot) => write!(f, "slot index {slot} is out of range"),
            Rejected::SlotDead { bank, slot } => write!(f, "{bank} S{} is dead", slot + 1),
            Rejected::Unguardable { slot, .. } => {
                write!(f, "S{} cannot be guarded", slot + 1)
            }
            Rejected::NotHumanTurn => f.write_str("not the human seat's turn"),
            Rejected::HumanRetired => f.write_str("human seat has retired"),
            Rejected::NotAbsent => f.write_str("the role for this phase is still alive"),
            Rejected::TargetRequired { phase } => write!(f, "{phase} phase needs a target"),
        }
    }
}

impl std::error::Error for Rejected {}
