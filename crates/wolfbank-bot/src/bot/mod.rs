mod bite;
mod guard;
mod lynch;
mod mad;
mod seer;

pub use bite::{BITE_RECENT_WINDOW, BitePlanner, bite_score, silencing_target};
pub use guard::{GuardBucket, GuardPlanner, guard_bucket, guard_order};
pub use lynch::{LynchPlanner, lynch_rank};
pub use mad::{MAD_BUCKET_ORDER, MadPlanner, mad_candidates};
pub use seer::{SeerPlanner, seer_tier};

use rand::Rng;
use wolfbank_core::model::bank::Bank;
use wolfbank_core::model::seat::BankId;
use wolfbank_core::rng::{jitter, pick};
use wolfbank_core::Game;

/// What a CPU seat sees when it decides: its own seat and the table.
#[derive(Clone, Copy)]
pub struct BotContext<'a> {
    pub actor: BankId,
    pub game: &'a Game,
}

impl<'a> BotContext<'a> {
    pub fn new(actor: BankId, game: &'a Game) -> Self {
        Self { actor, game }
    }

    pub fn own_bank(&self) -> &'a Bank {
        self.game.bank(self.actor)
    }

    pub fn left(&self) -> Option<BankId> {
        self.game.left_of(self.actor)
    }

    pub fn right(&self) -> Option<BankId> {
        self.game.right_of(self.actor)
    }
}

/// Highest score after jitter; ties on the raw score are broken at random.
pub(crate) fn pick_best<R: Rng + ?Sized>(scored: &[(usize, f64)], rng: &mut R) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &(slot, score) in scored {
        let score = score + jitter(rng);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((slot, score));
        }
    }
    best.map(|(slot, _)| slot)
}

/// Uniform choice inside the first non-empty tier.
pub(crate) fn pick_from_first_tier<R: Rng + ?Sized>(
    tiers: &[Vec<usize>],
    rng: &mut R,
) -> Option<usize> {
    tiers
        .iter()
        .find(|tier| !tier.is_empty())
        .and_then(|tier| pick(tier, rng).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pick_best_prefers_clear_winner() {
        let mut rng = StdRng::seed_from_u64(5);
        let scored = [(0, 50.0), (4, 100.0), (7, 80.0)];
        assert_eq!(pick_best(&scored, &mut rng), Some(4));
        assert_eq!(pick_best(&[], &mut rng), None);
    }

    #[test]
    fn pick_best_spreads_exact_ties() {
        let mut rng = StdRng::seed_from_u64(11);
        let scored = [(1, 80.0), (2, 80.0)];
        let picks: Vec<usize> = (0..64)
            .filter_map(|_| pick_best(&scored, &mut rng))
            .collect();
        assert!(picks.contains(&1));
        assert!(picks.contains(&2));
    }

    #[test]
    fn first_tier_skips_empty_tiers() {
        let mut rng = StdRng::seed_from_u64(3);
        let tiers = vec![vec![], vec![6], vec![1, 2]];
        assert_eq!(pick_from_first_tier(&tiers, &mut rng), Some(6));
        assert_eq!(pick_from_first_tier(&[vec![], vec![]], &mut rng), None);
    }
}
