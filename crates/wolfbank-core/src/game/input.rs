use crate::game::outcome::{Outcome, Rejected, SkipReason};
use crate::game::state::Game;
use crate::model::phase::Phase;
use crate::model::seat::BankId;

impl Game {
    /// Entry point for the human seat's table clicks.
    ///
    /// Any pending skip is taken regardless of the click; otherwise the click
    /// must land on the bank the current phase aims at.
    pub fn apply_human_input(&mut self, bank: BankId, slot: usize) -> Result<Outcome, Rejected> {
        let actor = self.human_actor()?;
        if let Some(reason) = self.pending_skip() {
            return Ok(self.take_skip(actor, reason));
        }
        match self.phase {
            Phase::Seer => self.resolve_seer(actor, bank, slot),
            Phase::Lynch => self.resolve_lynch(actor, bank, slot),
            Phase::Bite => self.resolve_bite(actor, bank, slot),
            Phase::Round0Mad | Phase::Mad => {
                ensure_own_bank(actor, bank)?;
                self.resolve_mad_pick(actor, slot)
            }
            Phase::Round0Guard | Phase::Guard => {
                ensure_own_bank(actor, bank)?;
                self.resolve_guard(actor, slot)
            }
            Phase::End => Err(Rejected::GameOver),
        }
    }

    /// True when the human seat may acknowledge that its bank lacks the current phase's card.
    pub fn can_acknowledge_absence(&self) -> bool {
        self.human_actor().is_ok()
            && matches!(self.pending_skip(), Some(SkipReason::AbsentRole(_)))
    }

    pub fn acknowledge_absence(&mut self) -> Result<Outcome, Rejected> {
        let actor = self.human_actor()?;
        match self.pending_skip() {
            Some(reason @ SkipReason::AbsentRole(_)) => Ok(self.take_skip(actor, reason)),
            _ => Err(Rejected::NotAbsent),
        }
    }

    fn human_actor(&self) -> Result<BankId, Rejected> {
        if self.over {
            return Err(Rejected::GameOver);
        }
        let seat = match self.human_seat() {
            Some(seat) if seat == self.turn => seat,
            _ => return Err(Rejected::NotHumanTurn),
        };
        if !self.bank(seat).is_alive() {
            return Err(Rejected::HumanRetired);
        }
        Ok(seat)
    }
}

fn ensure_own_bank(actor: BankId, bank: BankId) -> Result<(), Rejected> {
    if actor == bank {
        Ok(())
    } else {
        Err(Rejected::WrongBank {
            expected: Some(actor),
            actual: bank,
        })
    }
}
