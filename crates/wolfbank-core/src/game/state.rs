use crate::game::config::TableConfig;
use crate::game::log::EventLog;
use crate::model::bank::Bank;
use crate::model::deck::{BankRoles, Deal, DealError};
use crate::model::phase::Phase;
use crate::model::role::Role;
use crate::model::seat::BankId;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The whole table. Resolvers mutate it in place; everything else reads it.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) banks: [Bank; 4],
    pub(crate) phase: Phase,
    pub(crate) turn: BankId,
    pub(crate) winners: Vec<BankId>,
    pub(crate) over: bool,
    pub(crate) log: EventLog,
    pub(crate) public_seer_reveal: [Option<usize>; 4],
    pub(crate) bite_no: u32,
    config: TableConfig,
}

impl Game {
    pub fn new<R: rand::Rng + ?Sized>(config: TableConfig, rng: &mut R) -> Self {
        Self::from_deal(&Deal::shuffled(rng), config)
    }

    pub fn with_seed(seed: u64, config: TableConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(config, &mut rng)
    }

    /// Fixed 4x9 role assignment, rejected unless every bank holds the standard composition.
    pub fn with_deal(hands: [BankRoles; 4], config: TableConfig) -> Result<Self, DealError> {
        let deal = Deal::from_roles(hands)?;
        Ok(Self::from_deal(&deal, config))
    }

    pub fn from_deal(deal: &Deal, config: TableConfig) -> Self {
        let banks = BankId::LOOP.map(|id| Bank::deal(id, deal.hand(id)));
        Self {
            banks,
            phase: Phase::Round0Mad,
            turn: BankId::P1,
            winners: Vec::new(),
            over: false,
            log: EventLog::new(),
            public_seer_reveal: [None; 4],
            bite_no: 0,
            config,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn human_seat(&self) -> Option<BankId> {
        self.config.human_seat
    }

    pub fn banks(&self) -> &[Bank; 4] {
        &self.banks
    }

    pub fn bank(&self, id: BankId) -> &Bank {
        &self.banks[id.index()]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> BankId {
        self.turn
    }

    pub fn winners(&self) -> &[BankId] {
        &self.winners
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn bite_no(&self) -> u32 {
        self.bite_no
    }

    pub fn public_seer_reveal(&self, bank: BankId) -> Option<usize> {
        self.public_seer_reveal[bank.index()]
    }

    pub fn is_public_seer_slot(&self, bank: BankId, slot: usize) -> bool {
        self.public_seer_reveal(bank) == Some(slot)
    }

    pub fn any_public_seer(&self) -> bool {
        self.public_seer_reveal.iter().any(Option::is_some)
    }

    pub fn alive_banks(&self) -> impl Iterator<Item = BankId> + '_ {
        BankId::LOOP
            .into_iter()
            .filter(|id| self.bank(*id).is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.alive_banks().count()
    }

    /// Living wolves per bank, indexed by seat.
    pub fn wolf_counts(&self) -> [u8; 4] {
        self.banks.each_ref().map(|bank| bank.wolf_count() as u8)
    }

    /// Nearest other living bank counter-clockwise; Seer and Lynch aim here.
    pub fn left_of(&self, actor: BankId) -> Option<BankId> {
        self.nearest_alive(actor, BankId::previous)
    }

    /// Nearest other living bank clockwise; Bite aims here.
    pub fn right_of(&self, actor: BankId) -> Option<BankId> {
        self.nearest_alive(actor, BankId::next)
    }

    fn nearest_alive(&self, from: BankId, step: fn(BankId) -> BankId) -> Option<BankId> {
        let mut seat = from;
        for _ in 1..BankId::COUNT {
            seat = step(seat);
            if self.bank(seat).is_alive() {
                return Some(seat);
            }
        }
        None
    }

    /// True while the configured human seat is alive and holds the turn.
    pub fn is_human_turn(&self) -> bool {
        if self.over || self.phase == Phase::End {
            return false;
        }
        match self.config.human_seat {
            Some(seat) => self.bank(seat).is_alive() && self.turn == seat,
            None => false,
        }
    }

    /// Role whose absence would let the acting bank pass the current phase.
    pub fn current_ability(&self) -> Option<Role> {
        self.phase.ability()
    }

    /// Appends a free-form line to the table log.
    pub fn note(&mut self, text: impl Into<String>) {
        self.log.push(text);
    }

    /// Jumps straight to `phase` with `turn` acting. Intended for setting up scenarios.
    pub fn reposition(&mut self, phase: Phase, turn: BankId) {
        if self.over {
            return;
        }
        self.phase = phase;
        self.turn = turn;
    }
}
