use crate::model::deck::{BankRoles, SLOTS_PER_BANK};
use crate::model::role::Role;
use crate::model::seat::BankId;
use crate::model::slot::Slot;

/// One seat's nine cards plus the per-bank ability state.
#[derive(Debug, Clone)]
pub struct Bank {
    id: BankId,
    alive: bool,
    slots: [Slot; SLOTS_PER_BANK],
    invert_index: Option<usize>,
    mad_used: bool,
    guard_index: Option<usize>,
    medium_snapshot: Option<[u8; 4]>,
}

impl Bank {
    pub fn deal(id: BankId, roles: &BankRoles) -> Self {
        Self {
            id,
            alive: true,
            slots: roles.map(Slot::new),
            invert_index: None,
            mad_used: false,
            guard_index: None,
            medium_snapshot: None,
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn slots(&self) -> &[Slot; SLOTS_PER_BANK] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn invert_index(&self) -> Option<usize> {
        self.invert_index
    }

    pub fn mad_used(&self) -> bool {
        self.mad_used
    }

    pub fn guard_index(&self) -> Option<usize> {
        self.guard_index
    }

    /// Living-wolf counts frozen when this bank's Medium died.
    pub fn medium_snapshot(&self) -> Option<[u8; 4]> {
        self.medium_snapshot
    }

    pub fn count_alive(&self, role: Role) -> usize {
        self.slots.iter().filter(|slot| slot.is_alive_as(role)).count()
    }

    pub fn has_alive(&self, role: Role) -> bool {
        self.slots.iter().any(|slot| slot.is_alive_as(role))
    }

    pub fn wolf_count(&self) -> usize {
        self.count_alive(Role::Wolf)
    }

    pub fn village_roles_alive(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.is_alive() && slot.role().is_village_ability())
            .count()
    }

    /// First slot dealt `role`, whether or not it still lives.
    pub fn find_role(&self, role: Role) -> Option<usize> {
        self.slots.iter().position(|slot| slot.role() == role)
    }

    pub fn alive_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_alive())
            .map(|(index, _)| index)
    }

    pub fn guardable_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_alive() && slot.role().is_guardable())
            .map(|(index, _)| index)
            .collect()
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Slot {
        &mut self.slots[index]
    }

    pub(crate) fn set_invert_index(&mut self, index: Option<usize>) {
        self.invert_index = index;
    }

    pub(crate) fn set_guard_index(&mut self, index: Option<usize>) {
        self.guard_index = index;
    }

    pub(crate) fn consume_mad(&mut self) {
        self.mad_used = true;
    }

    /// Captures the snapshot only once; later calls are ignored.
    pub(crate) fn freeze_medium(&mut self, wolf_counts: [u8; 4]) -> bool {
        if self.medium_snapshot.is_some() {
            return false;
        }
        self.medium_snapshot = Some(wolf_counts);
        true
    }

    pub(crate) fn retire(&mut self) {
        self.alive = false;
        for slot in &mut self.slots {
            slot.kill();
        }
        self.invert_index = None;
        self.guard_index = None;
    }
}
