use crate::game::state::Game;
use crate::model::phase::Phase;
use crate::model::seat::BankId;

impl Game {
    /// Setup stage: each bank in seat order picks Mad then Guard, then play begins with P1.
    pub(crate) fn advance_setup(&mut self) {
        if self.over {
            return;
        }
        match self.phase {
            Phase::Round0Mad => self.phase = Phase::Round0Guard,
            Phase::Round0Guard => {
                if self.turn == BankId::P4 {
                    self.turn = BankId::P1;
                    self.phase = Phase::Seer;
                    self.log.push("setup finished, play begins");
                } else {
                    self.turn = self.turn.next();
                    self.phase = Phase::Round0Mad;
                }
            }
            _ => {}
        }
    }

    /// Play stage: Seer through Guard step forward, Bite hands the turn to the next living bank.
    pub(crate) fn advance_play(&mut self) {
        if self.over {
            return;
        }
        if let Some(next) = self.phase.next_in_cycle() {
            self.phase = next;
        } else if self.phase == Phase::Bite {
            if let Some(next) = self.right_of(self.turn) {
                self.turn = next;
            }
            self.phase = Phase::Seer;
        }
    }

    pub(crate) fn advance_stage(&mut self) {
        if self.phase.is_setup() {
            self.advance_setup();
        } else {
            self.advance_play();
        }
    }
}
