use crate::game::state::Game;
use crate::model::phase::Phase;
use crate::model::role::Role;
use crate::model::seat::BankId;

impl Game {
    /// Kills one slot and applies the card's death effects. Ignored for retired banks and dead slots.
    pub(crate) fn kill_slot(&mut self, id: BankId, slot: usize) -> bool {
        let bank = &mut self.banks[id.index()];
        if !bank.is_alive() || !bank.slot_mut(slot).kill() {
            return false;
        }
        let role = bank.slots()[slot].role();

        if bank.invert_index() == Some(slot) {
            bank.set_invert_index(None);
            self.log.push(format!("{id} inversion target died, inversion cleared"));
        }

        match role {
            Role::Mad => {
                self.banks[id.index()].set_invert_index(None);
                self.log.push(format!("{id} mad ability lost"));
            }
            Role::Medium => {
                let counts = self.wolf_counts();
                if self.banks[id.index()].freeze_medium(counts) {
                    self.log.push(format!("{id} medium reading frozen"));
                }
            }
            Role::Guard => {
                self.banks[id.index()].set_guard_index(None);
                self.log.push(format!("{id} guard protection lost"));
            }
            Role::Wolf | Role::Seer | Role::Villager => {}
        }
        true
    }

    /// Retires wolfless banks, then declares winners if only wolf-holding banks remain.
    pub(crate) fn settle_after_kill(&mut self) {
        self.retire_wolfless();
        self.check_winners();
    }

    fn retire_wolfless(&mut self) {
        for id in BankId::LOOP {
            let bank = &self.banks[id.index()];
            if !bank.is_alive() || bank.wolf_count() > 0 {
                continue;
            }
            self.banks[id.index()].retire();
            self.log
                .push(format!("{id} has no wolves left and retires (all slots dead)"));
            let counts = self.wolf_counts();
            self.banks[id.index()].freeze_medium(counts);
        }
    }

    fn check_winners(&mut self) {
        let alive: Vec<BankId> = self.alive_banks().collect();
        if alive.is_empty() {
            return;
        }
        let winners: Vec<BankId> = alive
            .iter()
            .copied()
            .filter(|id| {
                self.alive_banks().all(|other| other == *id) && self.bank(*id).wolf_count() >= 1
            })
            .collect();
        if winners.is_empty() {
            return;
        }
        let names: Vec<String> = winners.iter().map(ToString::to_string).collect();
        self.log
            .push(format!("game over, winner: {}", names.join(", ")));
        self.winners = winners;
        self.over = true;
        self.phase = Phase::End;
    }
}
