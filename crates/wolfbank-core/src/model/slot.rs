use crate::model::role::Role;
use crate::model::seat::BankId;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    White,
    Black,
}

impl Verdict {
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Wolf => Verdict::Black,
            _ => Verdict::White,
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Verdict::White => Verdict::Black,
            Verdict::Black => Verdict::White,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::White => f.write_str("white"),
            Verdict::Black => f.write_str("black"),
        }
    }
}

/// Public colour of a slot: the latest seer verdict, or grey when unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Grey,
    White,
    Black,
}

impl From<Option<Verdict>> for Mark {
    fn from(value: Option<Verdict>) -> Self {
        match value {
            None => Mark::Grey,
            Some(Verdict::White) => Mark::White,
            Some(Verdict::Black) => Mark::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeerRecord {
    pub last: Option<Verdict>,
    pub changed_last: bool,
    pub by: Option<BankId>,
}

#[derive(Debug, Clone, Copy)]
pub struct Slot {
    role: Role,
    dead: bool,
    seer: SeerRecord,
    bite_fail_count: u32,
    bite_fail_turn: Option<u32>,
}

impl Slot {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            dead: false,
            seer: SeerRecord::default(),
            bite_fail_count: 0,
            bite_fail_turn: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    pub fn is_alive_as(&self, role: Role) -> bool {
        !self.dead && self.role == role
    }

    pub fn seer_record(&self) -> SeerRecord {
        self.seer
    }

    pub fn mark(&self) -> Mark {
        Mark::from(self.seer.last)
    }

    pub fn bite_fail_count(&self) -> u32 {
        self.bite_fail_count
    }

    pub fn bite_fail_turn(&self) -> Option<u32> {
        self.bite_fail_turn
    }

    /// True when the latest failed bite happened no more than `window` bites before `now`.
    pub fn recently_failed_bite(&self, now: u32, window: u32) -> bool {
        self.bite_fail_turn
            .is_some_and(|turn| now.saturating_sub(turn) <= window)
    }

    /// Returns false when the slot was already dead.
    pub(crate) fn kill(&mut self) -> bool {
        if self.dead {
            return false;
        }
        self.dead = true;
        true
    }

    /// Stores a verdict and reports whether it differs from a previous one.
    pub(crate) fn record_verdict(&mut self, verdict: Verdict, by: BankId) -> bool {
        let changed_last = self.seer.last.is_some_and(|prev| prev != verdict);
        self.seer = SeerRecord {
            last: Some(verdict),
            changed_last,
            by: Some(by),
        };
        changed_last
    }

    pub(crate) fn record_bite_failure(&mut self, bite_no: u32) {
        self.bite_fail_count += 1;
        self.bite_fail_turn = Some(bite_no);
    }
}
