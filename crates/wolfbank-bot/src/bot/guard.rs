use super::{BotContext, pick_from_first_tier};
use rand::Rng;
use wolfbank_core::model::seat::BankId;
use wolfbank_core::rng::pick;
use wolfbank_core::{Game, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardBucket {
    /// Seer whose position has not been revealed.
    PrivateSeer,
    UnusedMad,
    Medium,
    /// Villagers and a Mad whose flip is spent.
    Commoner,
    /// Seer exposed by its own black verdict.
    PublicSeer,
}

/// Bucket priority. In a duel the exposed Seer is the obvious bite and goes first.
pub fn guard_order(alive_banks: usize) -> [GuardBucket; 5] {
    if alive_banks == 2 {
        [
            GuardBucket::PublicSeer,
            GuardBucket::PrivateSeer,
            GuardBucket::UnusedMad,
            GuardBucket::Medium,
            GuardBucket::Commoner,
        ]
    } else {
        [
            GuardBucket::PrivateSeer,
            GuardBucket::UnusedMad,
            GuardBucket::Medium,
            GuardBucket::Commoner,
            GuardBucket::PublicSeer,
        ]
    }
}

/// `None` for slots a Guard may not protect.
pub fn guard_bucket(game: &Game, bank: BankId, slot: usize) -> Option<GuardBucket> {
    let owner = game.bank(bank);
    let role = owner.slot(slot)?.role();
    match role {
        Role::Seer if game.is_public_seer_slot(bank, slot) => Some(GuardBucket::PublicSeer),
        Role::Seer => Some(GuardBucket::PrivateSeer),
        Role::Mad if !owner.mad_used() => Some(GuardBucket::UnusedMad),
        Role::Mad | Role::Villager => Some(GuardBucket::Commoner),
        Role::Medium => Some(GuardBucket::Medium),
        Role::Guard | Role::Wolf => None,
    }
}

pub struct GuardPlanner;

impl GuardPlanner {
    pub fn choose<R: Rng + ?Sized>(ctx: &BotContext<'_>, rng: &mut R) -> Option<usize> {
        let guardable = ctx.own_bank().guardable_slots();
        let tiers: Vec<Vec<usize>> = guard_order(ctx.game.alive_count())
            .iter()
            .map(|bucket| {
                guardable
                    .iter()
                    .copied()
                    .filter(|slot| guard_bucket(ctx.game, ctx.actor, *slot) == Some(*bucket))
                    .collect()
            })
            .collect();
        pick_from_first_tier(&tiers, rng).or_else(|| pick(&guardable, rng).copied())
    }
}
