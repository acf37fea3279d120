use super::{BotContext, pick_best};
use rand::Rng;
use wolfbank_core::model::seat::BankId;
use wolfbank_core::model::slot::{Mark, Slot};
use wolfbank_core::rng::pick;

/// Black over grey over white; a slot that shrugged off a bite gets half a tier.
pub fn lynch_rank(slot: &Slot) -> f64 {
    let base = match slot.mark() {
        Mark::Black => 2.0,
        Mark::Grey => 1.0,
        Mark::White => 0.0,
    };
    if slot.bite_fail_count() > 0 {
        base + 0.5
    } else {
        base
    }
}

pub struct LynchPlanner;

impl LynchPlanner {
    /// The left neighbor's exposed Seer is only lynched when nothing else lives.
    pub fn choose<R: Rng + ?Sized>(
        ctx: &BotContext<'_>,
        rng: &mut R,
    ) -> Option<(BankId, usize)> {
        let target = ctx.left()?;
        let bank = ctx.game.bank(target);
        let (public, rest): (Vec<usize>, Vec<usize>) = bank
            .alive_slots()
            .partition(|slot| ctx.game.is_public_seer_slot(target, *slot));

        let slot = if !rest.is_empty() {
            let scored: Vec<(usize, f64)> = rest
                .iter()
                .map(|slot| (*slot, lynch_rank(&bank.slots()[*slot])))
                .collect();
            pick_best(&scored, rng)
        } else {
            pick(&public, rng).copied()
        };
        slot.map(|slot| (target, slot))
    }
}
