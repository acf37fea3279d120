//! Per-viewer projection of the table.
//!
//! The projection is what a seat is allowed to know: its own cards, every
//! public seer mark, the revealed seer slots, and the wolf counts its own
//! Medium reports. Hidden cards of other banks only appear once the game ends.

use crate::game::state::Game;
use crate::model::phase::Phase;
use crate::model::role::Role;
use crate::model::seat::BankId;
use crate::model::slot::Mark;
use serde::Serialize;

impl Game {
    /// Every `(bank, slot)` the acting bank may pick right now.
    ///
    /// Empty once the game is over or while a skip is pending.
    pub fn legal_targets(&self) -> Vec<(BankId, usize)> {
        if self.over || self.pending_skip().is_some() {
            return Vec::new();
        }
        let actor = self.turn;
        let (bank, guard_only) = match self.phase {
            Phase::Seer | Phase::Lynch => (self.left_of(actor), false),
            Phase::Bite => (self.right_of(actor), false),
            Phase::Round0Mad | Phase::Mad => (Some(actor), false),
            Phase::Round0Guard | Phase::Guard => (Some(actor), true),
            Phase::End => (None, false),
        };
        let Some(bank) = bank else {
            return Vec::new();
        };
        let slots = if guard_only {
            self.bank(bank).guardable_slots()
        } else {
            self.bank(bank).alive_slots().collect()
        };
        slots.into_iter().map(|slot| (bank, slot)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediumDisplay {
    /// The viewer's Medium lives and reads current counts.
    Live,
    /// The viewer's Medium died; counts are the snapshot taken then.
    Frozen,
    Unavailable,
}

#[derive(Debug, Clone, Serialize)]
pub struct MediumReading {
    pub display: MediumDisplay,
    pub wolves: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotView {
    pub index: usize,
    pub dead: bool,
    pub role: Option<Role>,
    pub mark: Mark,
    pub changed_last: bool,
    pub public_seer: bool,
    pub guarded: bool,
    pub inverted: bool,
    pub targetable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BankView {
    pub id: BankId,
    pub label: String,
    pub alive: bool,
    pub medium: MediumReading,
    pub village_roles: usize,
    pub slots: Vec<SlotView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub viewer: BankId,
    pub phase: Phase,
    pub turn: BankId,
    pub over: bool,
    pub winners: Vec<BankId>,
    pub status: String,
    pub acting: String,
    pub human_can_act: bool,
    pub can_acknowledge_absence: bool,
    pub banks: Vec<BankView>,
    pub legal_targets: Vec<(BankId, usize)>,
}

impl TableView {
    pub fn project(game: &Game, viewer: BankId) -> Self {
        let over = game.is_over();
        let human_can_act = game.is_human_turn();
        let legal_targets = if human_can_act {
            game.legal_targets()
        } else {
            Vec::new()
        };

        let viewer_bank = game.bank(viewer);
        let (display, counts) = if viewer_bank.has_alive(Role::Medium) {
            (MediumDisplay::Live, Some(game.wolf_counts()))
        } else if let Some(snapshot) = viewer_bank.medium_snapshot() {
            (MediumDisplay::Frozen, Some(snapshot))
        } else {
            (MediumDisplay::Unavailable, None)
        };

        let banks = game
            .banks()
            .iter()
            .map(|bank| {
                let id = bank.id();
                let open = over || id == viewer;
                let slots = bank
                    .slots()
                    .iter()
                    .enumerate()
                    .map(|(index, slot)| SlotView {
                        index,
                        dead: slot.is_dead(),
                        role: open.then_some(slot.role()),
                        mark: slot.mark(),
                        changed_last: slot.seer_record().changed_last,
                        public_seer: game.is_public_seer_slot(id, index),
                        guarded: open && bank.guard_index() == Some(index),
                        inverted: open && !bank.mad_used() && bank.invert_index() == Some(index),
                        targetable: legal_targets.contains(&(id, index)),
                    })
                    .collect();
                BankView {
                    id,
                    label: id.to_string(),
                    alive: bank.is_alive(),
                    medium: MediumReading {
                        display,
                        wolves: counts.map(|counts| counts[id.index()]),
                    },
                    village_roles: bank.village_roles_alive(),
                    slots,
                }
            })
            .collect();

        let status = if over {
            let names: Vec<String> = game.winners().iter().map(ToString::to_string).collect();
            format!("game over, winner: {}", names.join(", "))
        } else {
            format!("turn {} / phase {}", game.turn(), game.phase())
        };
        let acting = if over {
            String::from("-")
        } else if human_can_act {
            String::from("your move")
        } else {
            format!("{} is acting", game.turn())
        };

        Self {
            viewer,
            phase: game.phase(),
            turn: game.turn(),
            over,
            winners: game.winners().to_vec(),
            status,
            acting,
            human_can_act,
            can_acknowledge_absence: game.can_acknowledge_absence(),
            banks,
            legal_targets,
        }
    }

    pub fn bank(&self, id: BankId) -> &BankView {
        &self.banks[id.index()]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
