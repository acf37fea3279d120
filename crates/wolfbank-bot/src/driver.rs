use crate::policy::{Decision, Policy};
use tracing::{Level, event};
use wolfbank_core::{Game, Outcome, Phase, Rejected};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    HumanTurn,
    GameOver,
    SafetyCap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRunReport {
    pub steps: usize,
    pub stop: StopReason,
}

/// Performs exactly one CPU transition for the bank holding the turn.
///
/// A pick the table refuses leaves it untouched and is returned as the error;
/// the auto-run loop retries and its safety cap bounds the retries.
pub fn cpu_step<P: Policy + ?Sized>(game: &mut Game, policy: &mut P) -> Result<Outcome, Rejected> {
    if game.is_over() {
        return Err(Rejected::GameOver);
    }
    let actor = game.turn();
    let phase = game.phase();

    match policy.decide(game) {
        Decision::Target { bank, slot, reason } => {
            if game.pending_skip().is_some() || game.legal_targets().contains(&(bank, slot)) {
                game.note(format!("CPU: {actor} {phase} -> {reason}"));
            }
            let result = match phase {
                Phase::Seer => game.resolve_seer(actor, bank, slot),
                Phase::Lynch => game.resolve_lynch(actor, bank, slot),
                Phase::Bite => game.resolve_bite(actor, bank, slot),
                Phase::Round0Mad | Phase::Mad => game.resolve_mad_pick(actor, slot),
                Phase::Round0Guard | Phase::Guard => game.resolve_guard(actor, slot),
                Phase::End => Err(Rejected::GameOver),
            };
            if let Err(rejected) = &result {
                event!(
                    target: "wolfbank_bot::driver",
                    Level::WARN,
                    actor = %actor,
                    phase = %phase,
                    rejected = %rejected,
                    "cpu pick refused"
                );
            }
            result
        }
        Decision::Skip(reason) => {
            let passable = game.pending_skip().is_some()
                || matches!(
                    phase,
                    Phase::Round0Mad | Phase::Mad | Phase::Round0Guard | Phase::Guard
                );
            if passable {
                game.note(format!("CPU: {actor} {phase} -> {reason}"));
            }
            game.forgo_action(actor)
        }
    }
}

/// Drains CPU turns until the human seat is up, the game ends, or the step cap trips.
pub fn run_auto_turns<P: Policy + ?Sized>(game: &mut Game, policy: &mut P) -> AutoRunReport {
    let cap = game.config().auto_safety_steps;
    let mut steps = 0;
    loop {
        if game.is_over() {
            return AutoRunReport {
                steps,
                stop: StopReason::GameOver,
            };
        }
        if game.is_human_turn() {
            return AutoRunReport {
                steps,
                stop: StopReason::HumanTurn,
            };
        }
        if steps >= cap {
            game.note(format!("auto-run stopped after {cap} steps (safety cap)"));
            event!(
                target: "wolfbank_bot::driver",
                Level::WARN,
                steps,
                phase = %game.phase(),
                turn = %game.turn(),
                "auto-run hit safety cap"
            );
            return AutoRunReport {
                steps,
                stop: StopReason::SafetyCap,
            };
        }
        steps += 1;
        if let Err(rejected) = cpu_step(game, policy) {
            event!(
                target: "wolfbank_bot::driver",
                Level::WARN,
                rejected = %rejected,
                "cpu step made no progress"
            );
        }
    }
}
