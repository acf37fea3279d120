use crate::model::role::Role;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Round0Mad,
    Round0Guard,
    Seer,
    Lynch,
    Mad,
    Guard,
    Bite,
    End,
}

impl Phase {
    pub const PLAY_CYCLE: [Phase; 5] = [
        Phase::Seer,
        Phase::Lynch,
        Phase::Mad,
        Phase::Guard,
        Phase::Bite,
    ];

    pub const fn is_setup(self) -> bool {
        matches!(self, Phase::Round0Mad | Phase::Round0Guard)
    }

    pub const fn is_play(self) -> bool {
        matches!(
            self,
            Phase::Seer | Phase::Lynch | Phase::Mad | Phase::Guard | Phase::Bite
        )
    }

    /// The role whose absence lets the acting bank pass this phase.
    pub const fn ability(self) -> Option<Role> {
        match self {
            Phase::Seer => Some(Role::Seer),
            Phase::Round0Mad | Phase::Mad => Some(Role::Mad),
            Phase::Round0Guard | Phase::Guard => Some(Role::Guard),
            Phase::Lynch | Phase::Bite | Phase::End => None,
        }
    }

    /// Following play phase; `None` for Bite (turn passes) and non-play phases.
    pub const fn next_in_cycle(self) -> Option<Phase> {
        match self {
            Phase::Seer => Some(Phase::Lynch),
            Phase::Lynch => Some(Phase::Mad),
            Phase::Mad => Some(Phase::Guard),
            Phase::Guard => Some(Phase::Bite),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Round0Mad => "round0 mad",
            Phase::Round0Guard => "round0 guard",
            Phase::Seer => "seer",
            Phase::Lynch => "lynch",
            Phase::Mad => "mad",
            Phase::Guard => "guard",
            Phase::Bite => "bite",
            Phase::End => "end",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
