use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Wolf,
    Mad,
    Seer,
    Guard,
    Medium,
    Villager,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Wolf,
        Role::Mad,
        Role::Seer,
        Role::Guard,
        Role::Medium,
        Role::Villager,
    ];

    /// Seer, Guard and Medium: the roles counted as a bank's village abilities.
    pub const fn is_village_ability(self) -> bool {
        matches!(self, Role::Seer | Role::Guard | Role::Medium)
    }

    /// A bank can never protect its own Guard or Wolf cards.
    pub const fn is_guardable(self) -> bool {
        !matches!(self, Role::Guard | Role::Wolf)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Wolf => "wolf",
            Role::Mad => "mad",
            Role::Seer => "seer",
            Role::Guard => "guard",
            Role::Medium => "medium",
            Role::Villager => "villager",
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Role::Wolf => 'W',
            Role::Mad => 'M',
            Role::Seer => 'S',
            Role::Guard => 'G',
            Role::Medium => 'D',
            Role::Villager => 'V',
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
