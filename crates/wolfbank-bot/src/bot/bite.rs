use super::{BotContext, pick_best};
use rand::Rng;
use wolfbank_core::Role;
use wolfbank_core::model::seat::BankId;
use wolfbank_core::model::slot::{Mark, Slot};

/// A failed bite stays "recent" for this many bite numbers.
pub const BITE_RECENT_WINDOW: u32 = 2;

/// Confirmed whites are the safest kills; a white that just survived a bite is
/// likely guarded and drops to the grey level.
pub fn bite_score(slot: &Slot, now: u32) -> f64 {
    let recent_fail = slot.recently_failed_bite(now, BITE_RECENT_WINDOW);
    match slot.mark() {
        Mark::White if !recent_fail => 100.0,
        Mark::White | Mark::Grey => 80.0,
        Mark::Black => 50.0,
    }
}

/// The target's exposed Seer, when the biter has only a Seer left to protect its information.
pub fn silencing_target(ctx: &BotContext<'_>, target: BankId) -> Option<usize> {
    let own = ctx.own_bank();
    let only_seer = own.village_roles_alive() == 1
        && own.has_alive(Role::Seer)
        && !own.has_alive(Role::Guard)
        && !own.has_alive(Role::Medium);
    if !only_seer || !ctx.game.any_public_seer() {
        return None;
    }
    let slot = ctx.game.public_seer_reveal(target)?;
    ctx.game
        .bank(target)
        .slot(slot)
        .filter(|candidate| candidate.is_alive())
        .map(|_| slot)
}

pub struct BitePlanner;

impl BitePlanner {
    pub fn choose<R: Rng + ?Sized>(
        ctx: &BotContext<'_>,
        rng: &mut R,
    ) -> Option<(BankId, usize)> {
        let target = ctx.right()?;
        if let Some(slot) = silencing_target(ctx, target) {
            return Some((target, slot));
        }
        let bank = ctx.game.bank(target);
        let now = ctx.game.bite_no() + 1;
        let scored: Vec<(usize, f64)> = bank
            .alive_slots()
            .map(|slot| (slot, bite_score(&bank.slots()[slot], now)))
            .collect();
        pick_best(&scored, rng).map(|slot| (target, slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use wolfbank_core::model::deck::COMPOSITION;
    use wolfbank_core::model::phase::Phase;
    use wolfbank_core::{Game, TableConfig};

    // COMPOSITION order: W W M S G D V V V
    fn game() -> Game {
        Game::with_deal([COMPOSITION; 4], TableConfig::all_cpu()).expect("deal")
    }

    fn check(game: &mut Game, actor: BankId, target: BankId, slot: usize) {
        game.reposition(Phase::Seer, actor);
        game.resolve_seer(actor, target, slot).expect("seer check");
    }

    #[test]
    fn fresh_white_beats_grey_and_black() {
        let mut game = game();
        check(&mut game, BankId::P3, BankId::P2, 6);
        check(&mut game, BankId::P3, BankId::P2, 0);
        let bank = game.bank(BankId::P2);
        assert_eq!(bite_score(&bank.slots()[6], 1), 100.0);
        assert_eq!(bite_score(&bank.slots()[7], 1), 80.0);
        assert_eq!(bite_score(&bank.slots()[0], 1), 50.0);

        let ctx = BotContext::new(BankId::P1, &game);
        let mut rng = StdRng::seed_from_u64(13);
        assert_eq!(BitePlanner::choose(&ctx, &mut rng), Some((BankId::P2, 6)));
    }

    #[test]
    fn recently_failed_white_drops_to_grey_level() {
        let mut game = game();
        check(&mut game, BankId::P3, BankId::P2, 6);
        game.reposition(Phase::Guard, BankId::P2);
        game.resolve_guard(BankId::P2, 6).expect("guard");
        game.reposition(Phase::Bite, BankId::P1);
        game.resolve_bite(BankId::P1, BankId::P2, 6).expect("bite");

        let slot = game.bank(BankId::P2).slots()[6];
        assert_eq!(bite_score(&slot, 2), 80.0);
        assert_eq!(bite_score(&slot, 3), 80.0);
        assert_eq!(bite_score(&slot, 4), 100.0);
    }

    #[test]
    fn lone_seer_silences_exposed_seer() {
        let mut game = game();
        check(&mut game, BankId::P2, BankId::P1, 0);
        assert_eq!(game.public_seer_reveal(BankId::P2), Some(3));

        for slot in [4, 5] {
            game.reposition(Phase::Lynch, BankId::P2);
            game.resolve_lynch(BankId::P2, BankId::P1, slot).expect("lynch");
        }
        let ctx = BotContext::new(BankId::P1, &game);
        assert_eq!(silencing_target(&ctx, BankId::P2), Some(3));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(BitePlanner::choose(&ctx, &mut rng), Some((BankId::P2, 3)));
    }

    #[test]
    fn no_silencing_while_guard_lives() {
        let mut game = game();
        check(&mut game, BankId::P2, BankId::P1, 0);
        let ctx = BotContext::new(BankId::P1, &game);
        assert_eq!(silencing_target(&ctx, BankId::P2), None);
    }
}
