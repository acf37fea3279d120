//! Plain-text rendering of a [`TableView`] for the terminal session.
//!
//! One cell per slot: slot number, role letter (`?` when hidden), public mark
//! (`.` grey, `o` white, `x` black) and any flags from [`LEGEND`].

use std::fmt::Write as _;

use wolfbank_core::game::log::LogEntry;
use wolfbank_core::game::view::{BankView, MediumDisplay, SlotView};
use wolfbank_core::model::slot::Mark;
use wolfbank_core::{BankId, TableView};

pub const LEGEND: &str =
    "flags: ! revealed seer, * mark changed, g guarded, i inversion, + legal target";

fn mark_char(mark: Mark) -> char {
    match mark {
        Mark::Grey => '.',
        Mark::White => 'o',
        Mark::Black => 'x',
    }
}

pub fn slot_cell(slot: &SlotView) -> String {
    if slot.dead {
        let role = slot.role.map_or('-', |role| role.symbol());
        return format!("{}:{role}#", slot.index + 1);
    }
    let mut cell = format!(
        "{}:{}{}",
        slot.index + 1,
        slot.role.map_or('?', |role| role.symbol()),
        mark_char(slot.mark)
    );
    for (set, flag) in [
        (slot.public_seer, '!'),
        (slot.changed_last, '*'),
        (slot.guarded, 'g'),
        (slot.inverted, 'i'),
        (slot.targetable, '+'),
    ] {
        if set {
            cell.push(flag);
        }
    }
    cell
}

fn medium_text(bank: &BankView) -> String {
    match (bank.medium.display, bank.medium.wolves) {
        (MediumDisplay::Live, Some(wolves)) => format!("medium {wolves}W"),
        (MediumDisplay::Frozen, Some(wolves)) => format!("medium {wolves}W (frozen)"),
        _ => "medium -".to_string(),
    }
}

pub fn render_bank(view: &TableView, id: BankId) -> String {
    let bank = view.bank(id);
    let mut header = bank.label.clone();
    if id == view.viewer {
        header.push_str(" (you)");
    }
    if id == view.turn && !view.over {
        header.push_str(" <");
    }
    let state = if bank.alive { "" } else { " retired" };
    let cells: Vec<String> = bank.slots.iter().map(slot_cell).collect();
    format!(
        "{header:<12}{state} village {} | {} | {}",
        bank.village_roles,
        medium_text(bank),
        cells.join(" ")
    )
}

pub fn render_table(view: &TableView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} | {}", view.status, view.acting);
    for id in BankId::LOOP {
        let _ = writeln!(out, "{}", render_bank(view, id));
    }
    if view.can_acknowledge_absence {
        out.push_str("no card for this phase: type `ok` to continue\n");
    } else if view.human_can_act && !view.legal_targets.is_empty() {
        let targets: Vec<String> = view
            .legal_targets
            .iter()
            .map(|(bank, slot)| format!("{bank} {}", slot + 1))
            .collect();
        let _ = writeln!(out, "targets: {}", targets.join(", "));
    }
    out
}

pub fn render_log(entries: &[LogEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{entry}");
    }
    out
}
