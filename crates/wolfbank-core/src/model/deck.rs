use crate::model::role::Role;
use crate::model::seat::BankId;
use crate::rng::shuffle;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

pub const SLOTS_PER_BANK: usize = 9;

/// The nine cards every bank is dealt, in canonical order.
pub const COMPOSITION: [Role; SLOTS_PER_BANK] = [
    Role::Wolf,
    Role::Wolf,
    Role::Mad,
    Role::Seer,
    Role::Guard,
    Role::Medium,
    Role::Villager,
    Role::Villager,
    Role::Villager,
];

pub type BankRoles = [Role; SLOTS_PER_BANK];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    hands: [BankRoles; 4],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    Composition { bank: BankId },
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::Composition { bank } => write!(
                f,
                "{bank} must hold 2 wolf, 1 mad, 1 seer, 1 guard, 1 medium and 3 villager cards"
            ),
        }
    }
}

impl std::error::Error for DealError {}

impl Deal {
    /// Every bank holds the composition in canonical order.
    pub fn standard() -> Self {
        Self {
            hands: [COMPOSITION; 4],
        }
    }

    /// Each bank receives an independent shuffle of the composition.
    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let hands = std::array::from_fn(|_| {
            let roles = shuffle(&COMPOSITION, &mut *rng);
            let mut hand = COMPOSITION;
            hand.copy_from_slice(&roles);
            hand
        });
        Self { hands }
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Fixed assignment, checked against the composition.
    pub fn from_roles(hands: [BankRoles; 4]) -> Result<Self, DealError> {
        for bank in BankId::LOOP {
            if !is_standard_composition(&hands[bank.index()]) {
                return Err(DealError::Composition { bank });
            }
        }
        Ok(Self { hands })
    }

    pub fn hand(&self, bank: BankId) -> &BankRoles {
        &self.hands[bank.index()]
    }
}

pub fn is_standard_composition(roles: &[Role]) -> bool {
    roles.len() == SLOTS_PER_BANK
        && Role::ALL.iter().all(|role| {
            let expected = COMPOSITION.iter().filter(|r| *r == role).count();
            roles.iter().filter(|r| *r == role).count() == expected
        })
}
