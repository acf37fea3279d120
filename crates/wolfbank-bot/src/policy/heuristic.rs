use super::{Decision, Policy};
use crate::bot::{
    BitePlanner, BotContext, GuardPlanner, LynchPlanner, MadPlanner, SeerPlanner,
    silencing_target,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{Level, event};
use wolfbank_core::{Game, Phase, SkipReason};

/// Priority-and-tie-break CPU built on the per-phase planners.
pub struct HeuristicPolicy<R = StdRng> {
    rng: R,
}

impl<R: Rng> HeuristicPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl HeuristicPolicy<StdRng> {
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> Policy for HeuristicPolicy<R> {
    fn decide(&mut self, game: &Game) -> Decision {
        let ctx = BotContext::new(game.turn(), game);

        if let Some(reason) = game.pending_skip() {
            let decision = Decision::Skip(reason);
            log_decision(&ctx, &decision);
            return decision;
        }

        let picked = match game.phase() {
            Phase::Seer => SeerPlanner::choose(&ctx, &mut self.rng)
                .map(|(bank, slot)| (bank, slot, "left neighbor by seer priority")),
            Phase::Lynch => LynchPlanner::choose(&ctx, &mut self.rng)
                .map(|(bank, slot)| (bank, slot, "left neighbor by lynch priority")),
            Phase::Bite => {
                let silencing = ctx
                    .right()
                    .is_some_and(|target| silencing_target(&ctx, target).is_some());
                let reason = if silencing {
                    "silence exposed seer"
                } else {
                    "right neighbor by bite priority"
                };
                BitePlanner::choose(&ctx, &mut self.rng).map(|(bank, slot)| (bank, slot, reason))
            }
            Phase::Round0Mad | Phase::Mad => MadPlanner::choose(&ctx, &mut self.rng)
                .map(|slot| (ctx.actor, slot, "inversion target (hidden)")),
            Phase::Round0Guard | Phase::Guard => GuardPlanner::choose(&ctx, &mut self.rng)
                .map(|slot| (ctx.actor, slot, "protection by priority (hidden)")),
            Phase::End => None,
        };

        let decision = match picked {
            Some((bank, slot, reason)) => Decision::Target { bank, slot, reason },
            None => Decision::Skip(SkipReason::NothingToChoose),
        };
        log_decision(&ctx, &decision);
        decision
    }
}

fn log_decision(ctx: &BotContext<'_>, decision: &Decision) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }
    let phase = ctx.game.phase();
    match decision {
        Decision::Target { bank, slot, reason } => event!(
            target: "wolfbank_bot::decision",
            Level::INFO,
            actor = %ctx.actor,
            phase = %phase,
            target_bank = %bank,
            slot = *slot + 1,
            reason = *reason
        ),
        Decision::Skip(skip) => event!(
            target: "wolfbank_bot::decision",
            Level::INFO,
            actor = %ctx.actor,
            phase = %phase,
            skip = %skip
        ),
    }
}
