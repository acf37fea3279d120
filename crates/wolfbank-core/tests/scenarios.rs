use wolfbank_core::game::config::TableConfig;
use wolfbank_core::game::outcome::{Effect, Outcome, Rejected, SkipReason};
use wolfbank_core::game::state::Game;
use wolfbank_core::model::deck::COMPOSITION;
use wolfbank_core::model::phase::Phase;
use wolfbank_core::model::role::Role;
use wolfbank_core::model::seat::BankId;
use wolfbank_core::model::slot::{Mark, Verdict};

// COMPOSITION order: W W M S G D V V V
const WOLF_A: usize = 0;
const WOLF_B: usize = 1;
const MAD: usize = 2;
const SEER: usize = 3;
const GUARD: usize = 4;
const VILLAGER: usize = 6;

fn cpu_table() -> Game {
    Game::with_deal([COMPOSITION; 4], TableConfig::all_cpu()).expect("standard deal")
}

fn lynch(game: &mut Game, actor: BankId, target: BankId, slot: usize) {
    game.reposition(Phase::Lynch, actor);
    game.resolve_lynch(actor, target, slot)
        .expect("lynch resolves");
}

#[test]
fn setup_passes_reach_first_seer_phase_after_eight_resolutions() {
    let mut game = cpu_table();
    for _ in 0..8 {
        let actor = game.turn();
        assert!(game.phase().is_setup());
        game.forgo_action(actor).expect("setup pass");
    }
    assert_eq!(game.phase(), Phase::Seer);
    assert_eq!(game.turn(), BankId::P1);
    assert!(
        game.log()
            .texts()
            .any(|text| text == "setup finished, play begins")
    );
}

#[test]
fn setup_picks_store_hidden_targets() {
    let mut game = cpu_table();
    for id in BankId::LOOP {
        game.resolve_mad_pick(id, VILLAGER).expect("mad pick");
        game.resolve_guard(id, SEER).expect("guard pick");
    }
    for id in BankId::LOOP {
        assert_eq!(game.bank(id).invert_index(), Some(VILLAGER));
        assert_eq!(game.bank(id).guard_index(), Some(SEER));
    }
    assert_eq!(game.phase(), Phase::Seer);
}

#[test]
fn lynching_last_wolf_retires_bank_and_lone_survivor_wins() {
    let mut game = cpu_table();

    lynch(&mut game, BankId::P2, BankId::P1, WOLF_A);
    assert!(game.bank(BankId::P1).is_alive());
    lynch(&mut game, BankId::P2, BankId::P1, WOLF_B);
    let retired = game.bank(BankId::P1);
    assert!(!retired.is_alive());
    assert!(retired.slots().iter().all(|slot| slot.is_dead()));
    assert_eq!(retired.invert_index(), None);
    assert_eq!(retired.guard_index(), None);
    assert!(!game.is_over());

    lynch(&mut game, BankId::P4, BankId::P3, WOLF_A);
    lynch(&mut game, BankId::P4, BankId::P3, WOLF_B);
    assert_eq!(game.left_of(BankId::P2), Some(BankId::P4));

    lynch(&mut game, BankId::P2, BankId::P4, WOLF_A);
    lynch(&mut game, BankId::P2, BankId::P4, WOLF_B);

    assert!(game.is_over());
    assert_eq!(game.winners(), &[BankId::P2]);
    assert_eq!(game.phase(), Phase::End);
    assert_eq!(
        game.resolve_seer(BankId::P2, BankId::P1, 0),
        Err(Rejected::GameOver)
    );
}

#[test]
fn bite_on_guarded_slot_fails_and_stamps_bite_number() {
    let mut game = cpu_table();
    game.reposition(Phase::Guard, BankId::P2);
    game.resolve_guard(BankId::P2, VILLAGER).expect("guard");

    game.reposition(Phase::Bite, BankId::P1);
    game.resolve_bite(BankId::P1, BankId::P2, MAD).expect("first bite");
    game.reposition(Phase::Bite, BankId::P1);
    let outcome = game.resolve_bite(BankId::P1, BankId::P2, VILLAGER);
    assert_eq!(
        outcome,
        Ok(Outcome::Resolved(Effect::BiteFailed {
            bank: BankId::P2,
            slot: VILLAGER,
        }))
    );

    let slot = game.bank(BankId::P2).slots()[VILLAGER];
    assert!(slot.is_alive());
    assert_eq!(slot.bite_fail_count(), 1);
    assert_eq!(slot.bite_fail_turn(), Some(game.bite_no()));
    assert_eq!(game.bite_no(), 2);
    let last = game.log().last().map(|entry| entry.text().to_string());
    assert_eq!(
        last.as_deref(),
        Some("P1 bite -> P2 S7 (failed, reason hidden)")
    );
}

#[test]
fn guard_death_removes_protection() {
    let mut game = cpu_table();
    game.reposition(Phase::Guard, BankId::P2);
    game.resolve_guard(BankId::P2, VILLAGER).expect("guard");

    game.reposition(Phase::Bite, BankId::P1);
    game.resolve_bite(BankId::P1, BankId::P2, GUARD).expect("bite guard");
    assert_eq!(game.bank(BankId::P2).guard_index(), None);

    game.reposition(Phase::Bite, BankId::P1);
    game.resolve_bite(BankId::P1, BankId::P2, VILLAGER).expect("bite villager");
    assert!(game.bank(BankId::P2).slots()[VILLAGER].is_dead());
}

#[test]
fn mad_inversion_whitewashes_one_check_then_is_spent() {
    let mut game = cpu_table();
    game.reposition(Phase::Mad, BankId::P4);
    game.resolve_mad_pick(BankId::P4, WOLF_A).expect("mad pick");

    game.reposition(Phase::Seer, BankId::P1);
    let first = game.resolve_seer(BankId::P1, BankId::P4, WOLF_A);
    assert_eq!(
        first,
        Ok(Outcome::Resolved(Effect::Verdict {
            target: BankId::P4,
            slot: WOLF_A,
            verdict: Verdict::White,
            inverted: true,
        }))
    );
    assert!(game.bank(BankId::P4).mad_used());

    game.reposition(Phase::Mad, BankId::P4);
    assert_eq!(
        game.resolve_mad_pick(BankId::P4, WOLF_B),
        Ok(Outcome::Skipped(SkipReason::AbilityConsumed))
    );

    game.reposition(Phase::Seer, BankId::P1);
    game.resolve_seer(BankId::P1, BankId::P4, WOLF_A).expect("recheck");
    let record = game.bank(BankId::P4).slots()[WOLF_A].seer_record();
    assert_eq!(record.last, Some(Verdict::Black));
    assert!(record.changed_last);
    assert_eq!(record.by, Some(BankId::P1));
}

#[test]
fn public_reveal_is_set_once_to_own_seer_slot() {
    let mut game = cpu_table();
    game.reposition(Phase::Seer, BankId::P2);
    game.resolve_seer(BankId::P2, BankId::P1, VILLAGER).expect("white check");
    assert_eq!(game.public_seer_reveal(BankId::P2), None);

    game.reposition(Phase::Seer, BankId::P2);
    game.resolve_seer(BankId::P2, BankId::P1, WOLF_A).expect("black check");
    assert_eq!(game.public_seer_reveal(BankId::P2), Some(SEER));

    game.reposition(Phase::Seer, BankId::P2);
    game.resolve_seer(BankId::P2, BankId::P1, WOLF_B).expect("second black");
    assert_eq!(game.public_seer_reveal(BankId::P2), Some(SEER));
    assert_eq!(game.bank(BankId::P1).slots()[WOLF_B].mark(), Mark::Black);
}

#[test]
fn rejected_actions_leave_table_untouched() {
    let mut game = cpu_table();
    game.reposition(Phase::Lynch, BankId::P3);
    let log_len = game.log().len();

    let attempts = [
        game.resolve_lynch(BankId::P3, BankId::P4, VILLAGER),
        game.resolve_lynch(BankId::P3, BankId::P2, 12),
        game.resolve_lynch(BankId::P1, BankId::P4, VILLAGER),
        game.resolve_bite(BankId::P3, BankId::P4, VILLAGER),
    ];
    assert!(attempts.iter().all(Result::is_err));
    assert_eq!(game.log().len(), log_len);
    assert_eq!(game.phase(), Phase::Lynch);
    assert_eq!(game.turn(), BankId::P3);
    assert!(game.bank(BankId::P4).slots().iter().all(|slot| slot.is_alive()));
}

#[test]
fn absent_seer_is_acknowledged_by_human() {
    let mut game = Game::with_deal([COMPOSITION; 4], TableConfig::default()).expect("deal");
    game.reposition(Phase::Lynch, BankId::P2);
    game.resolve_lynch(BankId::P2, BankId::P1, SEER).expect("lynch seer");

    game.reposition(Phase::Seer, BankId::P1);
    assert!(game.is_human_turn());
    assert!(game.can_acknowledge_absence());
    assert_eq!(
        game.acknowledge_absence(),
        Ok(Outcome::Skipped(SkipReason::AbsentRole(Role::Seer)))
    );
    assert_eq!(game.phase(), Phase::Lynch);
}

#[test]
fn fixed_deal_with_bad_composition_is_refused() {
    let mut hands = [COMPOSITION; 4];
    hands[0][VILLAGER] = Role::Seer;
    assert!(Game::with_deal(hands, TableConfig::default()).is_err());
}
