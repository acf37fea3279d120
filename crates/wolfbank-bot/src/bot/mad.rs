use super::{BotContext, pick_from_first_tier};
use rand::Rng;
use wolfbank_core::Role;
use wolfbank_core::model::bank::Bank;

/// Preferred inversion target by card, when the bank can afford to hide a wolf elsewhere.
pub const MAD_BUCKET_ORDER: [Role; 6] = [
    Role::Villager,
    Role::Mad,
    Role::Medium,
    Role::Guard,
    Role::Seer,
    Role::Wolf,
];

/// Slots the Mad may invert, best tier first.
///
/// With a single wolf left the flip goes on that wolf; with none there is
/// nothing worth hiding.
pub fn mad_candidates(bank: &Bank) -> Vec<Vec<usize>> {
    let living_of = |role: Role| -> Vec<usize> {
        bank.alive_slots()
            .filter(|slot| bank.slots()[*slot].role() == role)
            .collect()
    };
    match bank.wolf_count() {
        0 => Vec::new(),
        1 => vec![living_of(Role::Wolf)],
        _ => MAD_BUCKET_ORDER.iter().map(|role| living_of(*role)).collect(),
    }
}

pub struct MadPlanner;

impl MadPlanner {
    pub fn choose<R: Rng + ?Sized>(ctx: &BotContext<'_>, rng: &mut R) -> Option<usize> {
        pick_from_first_tier(&mad_candidates(ctx.own_bank()), rng)
    }
}
