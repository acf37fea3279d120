use crate::game::outcome::{Effect, Outcome, Rejected, SkipReason};
use crate::game::state::Game;
use crate::model::deck::SLOTS_PER_BANK;
use crate::model::phase::Phase;
use crate::model::role::Role;
use crate::model::seat::BankId;
use crate::model::slot::Verdict;

const SEER_PHASES: &[Phase] = &[Phase::Seer];
const LYNCH_PHASES: &[Phase] = &[Phase::Lynch];
const MAD_PHASES: &[Phase] = &[Phase::Round0Mad, Phase::Mad];
const GUARD_PHASES: &[Phase] = &[Phase::Round0Guard, Phase::Guard];
const BITE_PHASES: &[Phase] = &[Phase::Bite];

impl Game {
    /// The skip the acting bank is entitled to in the current phase, if any.
    ///
    /// Seer, Lynch and Bite skip when no other bank is alive; Seer, Mad and Guard
    /// skip when the acting bank holds no living card for the ability; Mad also
    /// skips once its flip has fired.
    pub fn pending_skip(&self) -> Option<SkipReason> {
        if self.over {
            return None;
        }
        let actor = self.turn;
        let bank = self.bank(actor);
        let absent = self
            .current_ability()
            .filter(|role| !bank.has_alive(*role))
            .map(SkipReason::AbsentRole);
        match self.phase {
            Phase::Seer => {
                if self.left_of(actor).is_none() {
                    Some(SkipReason::NoTarget)
                } else {
                    absent
                }
            }
            Phase::Lynch => self.left_of(actor).is_none().then_some(SkipReason::NoTarget),
            Phase::Bite => self.right_of(actor).is_none().then_some(SkipReason::NoTarget),
            Phase::Round0Mad | Phase::Mad => {
                absent.or_else(|| bank.mad_used().then_some(SkipReason::AbilityConsumed))
            }
            Phase::Round0Guard | Phase::Guard => absent,
            Phase::End => None,
        }
    }

    /// Passes the acting bank's phase without a target.
    ///
    /// A pending skip is taken with its side effects. Without one, only the Mad
    /// and Guard phases may be passed as having nothing to choose; Seer, Lynch
    /// and Bite are refused.
    pub fn forgo_action(&mut self, actor: BankId) -> Result<Outcome, Rejected> {
        self.check_actor(actor, None)?;
        let reason = match self.pending_skip() {
            Some(reason) => reason,
            None if MAD_PHASES.contains(&self.phase) || GUARD_PHASES.contains(&self.phase) => {
                SkipReason::NothingToChoose
            }
            None => return Err(Rejected::TargetRequired { phase: self.phase }),
        };
        Ok(self.take_skip(actor, reason))
    }

    pub(crate) fn take_skip(&mut self, actor: BankId, reason: SkipReason) -> Outcome {
        let phase = self.phase;
        match reason {
            SkipReason::AbsentRole(Role::Mad) => {
                self.banks[actor.index()].set_invert_index(None);
            }
            SkipReason::AbsentRole(Role::Guard) => {
                self.banks[actor.index()].set_guard_index(None);
            }
            _ => {}
        }
        let line = match reason {
            SkipReason::NoTarget => format!("{actor} {phase}: no other bank alive, skipped"),
            SkipReason::AbsentRole(role) => format!("{actor} {phase}: no living {role}, ok"),
            SkipReason::AbilityConsumed => {
                format!("{actor} {phase}: inversion already fired, skipped")
            }
            SkipReason::NothingToChoose => format!("{actor} {phase}: nothing to choose, passed"),
        };
        self.log.push(line);
        self.advance_stage();
        Outcome::Skipped(reason)
    }

    pub fn resolve_seer(
        &mut self,
        actor: BankId,
        target: BankId,
        slot: usize,
    ) -> Result<Outcome, Rejected> {
        self.check_actor(actor, Some(SEER_PHASES))?;
        if let Some(reason) = self.pending_skip() {
            return Ok(self.take_skip(actor, reason));
        }
        self.check_target(self.left_of(actor), target)?;
        self.check_slot(target, slot)?;

        let target_bank = &mut self.banks[target.index()];
        let mut verdict = Verdict::for_role(target_bank.slots()[slot].role());
        let inverted = !target_bank.mad_used()
            && target_bank.has_alive(Role::Mad)
            && target_bank.invert_index() == Some(slot);
        if inverted {
            verdict = verdict.flipped();
            target_bank.consume_mad();
        }
        let changed = target_bank.slot_mut(slot).record_verdict(verdict, actor);
        if inverted {
            self.log.push(format!("{target} mad inversion fired (once only)"));
        }

        if verdict == Verdict::Black && self.public_seer_reveal[actor.index()].is_none() {
            self.public_seer_reveal[actor.index()] = self.bank(actor).find_role(Role::Seer);
        }

        let mut line = format!("{actor} seer -> {target} S{} = {verdict}", slot + 1);
        if changed {
            line.push_str(" (changed)");
        }
        if inverted {
            line.push_str(" (inverted)");
        }
        self.log.push(line);

        self.advance_play();
        Ok(Outcome::Resolved(Effect::Verdict {
            target,
            slot,
            verdict,
            inverted,
        }))
    }

    pub fn resolve_lynch(
        &mut self,
        actor: BankId,
        target: BankId,
        slot: usize,
    ) -> Result<Outcome, Rejected> {
        self.check_actor(actor, Some(LYNCH_PHASES))?;
        if let Some(reason) = self.pending_skip() {
            return Ok(self.take_skip(actor, reason));
        }
        self.check_target(self.left_of(actor), target)?;
        self.check_slot(target, slot)?;

        self.kill_slot(target, slot);
        self.log.push(format!(
            "{actor} lynch -> {target} S{} (card hidden, slot dead)",
            slot + 1
        ));
        self.settle_after_kill();
        self.advance_play();
        Ok(Outcome::Resolved(Effect::Killed { bank: target, slot }))
    }

    pub fn resolve_mad_pick(&mut self, actor: BankId, slot: usize) -> Result<Outcome, Rejected> {
        self.check_actor(actor, Some(MAD_PHASES))?;
        if let Some(reason) = self.pending_skip() {
            return Ok(self.take_skip(actor, reason));
        }
        self.check_slot(actor, slot)?;

        self.banks[actor.index()].set_invert_index(Some(slot));
        let phase = self.phase;
        self.log
            .push(format!("{actor} {phase}: inversion target set (hidden)"));
        self.advance_stage();
        Ok(Outcome::Resolved(Effect::InvertSet { slot }))
    }

    pub fn resolve_guard(&mut self, actor: BankId, slot: usize) -> Result<Outcome, Rejected> {
        self.check_actor(actor, Some(GUARD_PHASES))?;
        if let Some(reason) = self.pending_skip() {
            return Ok(self.take_skip(actor, reason));
        }
        self.check_slot(actor, slot)?;
        let role = self.bank(actor).slots()[slot].role();
        if !role.is_guardable() {
            return Err(Rejected::Unguardable { slot, role });
        }

        self.banks[actor.index()].set_guard_index(Some(slot));
        let phase = self.phase;
        self.log
            .push(format!("{actor} {phase}: protection set (hidden)"));
        self.advance_stage();
        Ok(Outcome::Resolved(Effect::GuardSet { slot }))
    }

    /// A bite on a wolf or on the guarded slot fails silently. The biter's own wolves are never checked.
    pub fn resolve_bite(
        &mut self,
        actor: BankId,
        target: BankId,
        slot: usize,
    ) -> Result<Outcome, Rejected> {
        self.check_actor(actor, Some(BITE_PHASES))?;
        if let Some(reason) = self.pending_skip() {
            return Ok(self.take_skip(actor, reason));
        }
        self.check_target(self.right_of(actor), target)?;
        self.check_slot(target, slot)?;

        self.bite_no += 1;
        let bite_no = self.bite_no;
        let target_bank = &self.banks[target.index()];
        let blocked =
            target_bank.slots()[slot].role() == Role::Wolf || target_bank.guard_index() == Some(slot);

        let effect = if blocked {
            self.banks[target.index()]
                .slot_mut(slot)
                .record_bite_failure(bite_no);
            self.log.push(format!(
                "{actor} bite -> {target} S{} (failed, reason hidden)",
                slot + 1
            ));
            Effect::BiteFailed { bank: target, slot }
        } else {
            self.kill_slot(target, slot);
            self.log.push(format!(
                "{actor} bite -> {target} S{} (dead, reason hidden)",
                slot + 1
            ));
            self.settle_after_kill();
            Effect::Killed { bank: target, slot }
        };

        self.advance_play();
        Ok(Outcome::Resolved(effect))
    }

    /// `phases` of `None` accepts any phase except End.
    pub(crate) fn check_actor(
        &self,
        actor: BankId,
        phases: Option<&[Phase]>,
    ) -> Result<(), Rejected> {
        if self.over {
            return Err(Rejected::GameOver);
        }
        if actor != self.turn {
            return Err(Rejected::OutOfTurn {
                expected: self.turn,
                actual: actor,
            });
        }
        let allowed = match phases {
            Some(phases) => phases.contains(&self.phase),
            None => self.phase != Phase::End,
        };
        if !allowed {
            return Err(Rejected::WrongPhase { phase: self.phase });
        }
        Ok(())
    }

    fn check_target(&self, expected: Option<BankId>, target: BankId) -> Result<(), Rejected> {
        if expected == Some(target) {
            Ok(())
        } else {
            Err(Rejected::WrongBank {
                expected,
                actual: target,
            })
        }
    }

    pub(crate) fn check_slot(&self, bank: BankId, slot: usize) -> Result<(), Rejected> {
        if slot >= SLOTS_PER_BANK {
            return Err(Rejected::SlotOutOfRange(slot));
        }
        if self.bank(bank).slots()[slot].is_dead() {
            return Err(Rejected::SlotDead { bank, slot });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::game::config::TableConfig;
    use crate::game::outcome::{Effect, Outcome, Rejected, SkipReason};
    use crate::game::state::Game;
    use crate::model::deck::COMPOSITION;
    use crate::model::phase::Phase;
    use crate::model::role::Role;
    use crate::model::seat::BankId;
    use crate::model::slot::{Mark, Verdict};

    // COMPOSITION order: W W M S G D V V V
    const WOLF: usize = 0;
    const MAD: usize = 2;
    const SEER: usize = 3;
    const GUARD: usize = 4;
    const VILLAGER: usize = 6;

    fn game_at(phase: Phase, turn: BankId) -> Game {
        let mut game = Game::with_deal([COMPOSITION; 4], TableConfig::all_cpu()).expect("deal");
        game.reposition(phase, turn);
        game
    }

    #[test]
    fn seer_reads_wolf_black_and_reveals_own_seer() {
        let mut game = game_at(Phase::Seer, BankId::P1);
        let outcome = game.resolve_seer(BankId::P1, BankId::P4, WOLF);
        assert_eq!(
            outcome,
            Ok(Outcome::Resolved(Effect::Verdict {
                target: BankId::P4,
                slot: WOLF,
                verdict: Verdict::Black,
                inverted: false,
            }))
        );
        assert_eq!(game.bank(BankId::P4).slots()[WOLF].mark(), Mark::Black);
        assert_eq!(game.public_seer_reveal(BankId::P1), Some(SEER));
        assert_eq!(game.phase(), Phase::Lynch);
    }

    #[test]
    fn seer_must_target_left_neighbor() {
        let mut game = game_at(Phase::Seer, BankId::P1);
        let before = game.log().len();
        assert_eq!(
            game.resolve_seer(BankId::P1, BankId::P2, WOLF),
            Err(Rejected::WrongBank {
                expected: Some(BankId::P4),
                actual: BankId::P2,
            })
        );
        assert_eq!(game.phase(), Phase::Seer);
        assert_eq!(game.log().len(), before);
    }

    #[test]
    fn seer_on_dead_slot_waits() {
        let mut game = game_at(Phase::Seer, BankId::P1);
        game.kill_slot(BankId::P4, VILLAGER);
        assert_eq!(
            game.resolve_seer(BankId::P1, BankId::P4, VILLAGER),
            Err(Rejected::SlotDead {
                bank: BankId::P4,
                slot: VILLAGER,
            })
        );
        assert_eq!(game.phase(), Phase::Seer);
    }

    #[test]
    fn mad_inversion_fires_once() {
        let mut game = game_at(Phase::Seer, BankId::P1);
        game.banks[BankId::P4.index()].set_invert_index(Some(WOLF));

        game.resolve_seer(BankId::P1, BankId::P4, WOLF).expect("first check");
        let slot = game.bank(BankId::P4).slots()[WOLF];
        assert_eq!(slot.mark(), Mark::White);
        assert!(game.bank(BankId::P4).mad_used());
        assert_eq!(game.public_seer_reveal(BankId::P1), None);

        game.reposition(Phase::Seer, BankId::P1);
        game.resolve_seer(BankId::P1, BankId::P4, WOLF).expect("second check");
        let record = game.bank(BankId::P4).slots()[WOLF].seer_record();
        assert_eq!(record.last, Some(Verdict::Black));
        assert!(record.changed_last);
    }

    #[test]
    fn dead_mad_does_not_invert() {
        let mut game = game_at(Phase::Seer, BankId::P1);
        game.banks[BankId::P4.index()].set_invert_index(Some(WOLF));
        game.banks[BankId::P4.index()].slot_mut(MAD).kill();
        game.resolve_seer(BankId::P1, BankId::P4, WOLF).expect("check");
        assert_eq!(game.bank(BankId::P4).slots()[WOLF].mark(), Mark::Black);
        assert!(!game.bank(BankId::P4).mad_used());
    }

    #[test]
    fn absent_seer_skips_and_advances() {
        let mut game = game_at(Phase::Seer, BankId::P2);
        game.banks[BankId::P2.index()].slot_mut(SEER).kill();
        assert_eq!(game.pending_skip(), Some(SkipReason::AbsentRole(Role::Seer)));
        let outcome = game.resolve_seer(BankId::P2, BankId::P1, WOLF);
        assert_eq!(outcome, Ok(Outcome::Skipped(SkipReason::AbsentRole(Role::Seer))));
        assert_eq!(game.phase(), Phase::Lynch);
        assert_eq!(game.bank(BankId::P1).slots()[WOLF].mark(), Mark::Grey);
    }

    #[test]
    fn out_of_turn_and_wrong_phase_are_rejected() {
        let mut game = game_at(Phase::Lynch, BankId::P3);
        assert_eq!(
            game.resolve_lynch(BankId::P1, BankId::P4, WOLF),
            Err(Rejected::OutOfTurn {
                expected: BankId::P3,
                actual: BankId::P1,
            })
        );
        assert_eq!(
            game.resolve_bite(BankId::P3, BankId::P4, WOLF),
            Err(Rejected::WrongPhase { phase: Phase::Lynch })
        );
        assert_eq!(
            game.resolve_lynch(BankId::P3, BankId::P2, 9),
            Err(Rejected::SlotOutOfRange(9))
        );
    }

    #[test]
    fn lynch_kills_and_advances() {
        let mut game = game_at(Phase::Lynch, BankId::P3);
        let outcome = game.resolve_lynch(BankId::P3, BankId::P2, VILLAGER);
        assert_eq!(
            outcome,
            Ok(Outcome::Resolved(Effect::Killed {
                bank: BankId::P2,
                slot: VILLAGER,
            }))
        );
        assert!(game.bank(BankId::P2).slots()[VILLAGER].is_dead());
        assert_eq!(game.phase(), Phase::Mad);
        let last = game.log().last().map(|entry| entry.text().to_string());
        assert_eq!(last.as_deref(), Some("P3 lynch -> P2 S7 (card hidden, slot dead)"));
    }

    #[test]
    fn mad_pick_sets_hidden_target() {
        let mut game = game_at(Phase::Mad, BankId::P2);
        game.resolve_mad_pick(BankId::P2, VILLAGER).expect("pick");
        assert_eq!(game.bank(BankId::P2).invert_index(), Some(VILLAGER));
        assert_eq!(game.phase(), Phase::Guard);
    }

    #[test]
    fn used_mad_skips_without_touching_target() {
        let mut game = game_at(Phase::Mad, BankId::P2);
        game.banks[BankId::P2.index()].set_invert_index(Some(7));
        game.banks[BankId::P2.index()].consume_mad();
        let outcome = game.resolve_mad_pick(BankId::P2, VILLAGER);
        assert_eq!(outcome, Ok(Outcome::Skipped(SkipReason::AbilityConsumed)));
        assert_eq!(game.bank(BankId::P2).invert_index(), Some(7));
    }

    #[test]
    fn absent_mad_clears_target() {
        let mut game = game_at(Phase::Round0Mad, BankId::P1);
        game.banks[0].set_invert_index(Some(7));
        game.banks[0].slot_mut(MAD).kill();
        let outcome = game.resolve_mad_pick(BankId::P1, VILLAGER);
        assert_eq!(outcome, Ok(Outcome::Skipped(SkipReason::AbsentRole(Role::Mad))));
        assert_eq!(game.bank(BankId::P1).invert_index(), None);
        assert_eq!(game.phase(), Phase::Round0Guard);
    }

    #[test]
    fn guard_refuses_wolf_and_guard_cards() {
        let mut game = game_at(Phase::Guard, BankId::P1);
        assert_eq!(
            game.resolve_guard(BankId::P1, WOLF),
            Err(Rejected::Unguardable {
                slot: WOLF,
                role: Role::Wolf,
            })
        );
        assert_eq!(
            game.resolve_guard(BankId::P1, GUARD),
            Err(Rejected::Unguardable {
                slot: GUARD,
                role: Role::Guard,
            })
        );
        game.resolve_guard(BankId::P1, SEER).expect("guard seer");
        assert_eq!(game.bank(BankId::P1).guard_index(), Some(SEER));
        assert_eq!(game.phase(), Phase::Bite);
    }

    #[test]
    fn bite_on_wolf_fails_and_records_bite_number() {
        let mut game = game_at(Phase::Bite, BankId::P1);
        let outcome = game.resolve_bite(BankId::P1, BankId::P2, WOLF);
        assert_eq!(
            outcome,
            Ok(Outcome::Resolved(Effect::BiteFailed {
                bank: BankId::P2,
                slot: WOLF,
            }))
        );
        let slot = game.bank(BankId::P2).slots()[WOLF];
        assert!(slot.is_alive());
        assert_eq!(slot.bite_fail_count(), 1);
        assert_eq!(slot.bite_fail_turn(), Some(1));
        assert_eq!(game.turn(), BankId::P2);
        assert_eq!(game.phase(), Phase::Seer);
    }

    #[test]
    fn bite_on_plain_slot_kills() {
        let mut game = game_at(Phase::Bite, BankId::P4);
        game.resolve_bite(BankId::P4, BankId::P1, VILLAGER).expect("bite");
        assert!(game.bank(BankId::P1).slots()[VILLAGER].is_dead());
        assert_eq!(game.bite_no(), 1);
        assert_eq!(game.turn(), BankId::P1);
    }

    #[test]
    fn forgo_passes_with_nothing_to_choose() {
        let mut game = game_at(Phase::Round0Mad, BankId::P1);
        let outcome = game.forgo_action(BankId::P1);
        assert_eq!(outcome, Ok(Outcome::Skipped(SkipReason::NothingToChoose)));
        assert_eq!(game.phase(), Phase::Round0Guard);
        assert_eq!(
            game.forgo_action(BankId::P2),
            Err(Rejected::OutOfTurn {
                expected: BankId::P1,
                actual: BankId::P2,
            })
        );
    }

    #[test]
    fn forgo_refuses_targeted_phases_while_a_target_lives() {
        for (phase, actor) in [
            (Phase::Seer, BankId::P1),
            (Phase::Lynch, BankId::P1),
            (Phase::Bite, BankId::P1),
        ] {
            let mut game = game_at(phase, actor);
            assert_eq!(
                game.forgo_action(actor),
                Err(Rejected::TargetRequired { phase })
            );
            assert_eq!(game.phase(), phase);
            assert_eq!(game.turn(), actor);
            assert_eq!(game.bite_no(), 0);
            assert!(game.log().is_empty());
        }
    }

    #[test]
    fn forgo_passes_play_guard_phase() {
        let mut game = game_at(Phase::Guard, BankId::P2);
        let outcome = game.forgo_action(BankId::P2);
        assert_eq!(outcome, Ok(Outcome::Skipped(SkipReason::NothingToChoose)));
        assert_eq!(game.phase(), Phase::Bite);
    }

    #[test]
    fn kill_notices_precede_the_lynch_line() {
        let mut game = game_at(Phase::Lynch, BankId::P3);
        game.resolve_lynch(BankId::P3, BankId::P2, MAD).expect("lynch");
        let texts: Vec<&str> = game.log().texts().collect();
        assert_eq!(
            texts,
            ["P2 mad ability lost", "P3 lynch -> P2 S3 (card hidden, slot dead)"]
        );
    }
}
