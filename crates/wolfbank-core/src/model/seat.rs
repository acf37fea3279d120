use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum BankId {
    P1 = 0,
    P2 = 1,
    P3 = 2,
    P4 = 3,
}

impl BankId {
    pub const COUNT: usize = 4;

    pub const LOOP: [BankId; 4] = [BankId::P1, BankId::P2, BankId::P3, BankId::P4];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(BankId::P1),
            1 => Some(BankId::P2),
            2 => Some(BankId::P3),
            3 => Some(BankId::P4),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-based seat number as printed in logs.
    pub const fn number(self) -> usize {
        self as usize + 1
    }

    pub const fn next(self) -> BankId {
        match self {
            BankId::P1 => BankId::P2,
            BankId::P2 => BankId::P3,
            BankId::P3 => BankId::P4,
            BankId::P4 => BankId::P1,
        }
    }

    pub const fn previous(self) -> BankId {
        match self {
            BankId::P1 => BankId::P4,
            BankId::P2 => BankId::P1,
            BankId::P3 => BankId::P2,
            BankId::P4 => BankId::P3,
        }
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBankIdError(String);

impl fmt::Display for ParseBankIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid bank '{}': expected 1-4 or P1-P4", self.0)
    }
}

impl std::error::Error for ParseBankIdError {}

impl FromStr for BankId {
    type Err = ParseBankIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('P')
            .or_else(|| trimmed.strip_prefix('p'))
            .unwrap_or(trimmed);
        digits
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(BankId::from_index)
            .ok_or_else(|| ParseBankIdError(s.to_string()))
    }
}
