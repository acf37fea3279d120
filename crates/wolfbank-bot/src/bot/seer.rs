use super::{BotContext, pick_from_first_tier};
use rand::Rng;
use wolfbank_core::model::seat::BankId;
use wolfbank_core::model::slot::Mark;

/// Lower tier is checked first: unknown cards before confirmed ones.
pub const fn seer_tier(mark: Mark) -> usize {
    match mark {
        Mark::Grey => 0,
        Mark::White => 1,
        Mark::Black => 2,
    }
}

pub struct SeerPlanner;

impl SeerPlanner {
    pub fn choose<R: Rng + ?Sized>(
        ctx: &BotContext<'_>,
        rng: &mut R,
    ) -> Option<(BankId, usize)> {
        let target = ctx.left()?;
        let bank = ctx.game.bank(target);
        let mut tiers = vec![Vec::new(); 3];
        for slot in bank.alive_slots() {
            tiers[seer_tier(bank.slots()[slot].mark())].push(slot);
        }
        pick_from_first_tier(&tiers, rng).map(|slot| (target, slot))
    }
}
