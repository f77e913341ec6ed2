//! Narrative log lines.
//!
//! Every player-facing line the engine appends is built here so wording stays
//! consistent across resolution paths.

use crate::state::StatusEffectKind;

pub(crate) fn enemy_appears(enemy: &str) -> String {
    format!("{enemy} appears!")
}

pub(crate) fn turn_of(name: &str) -> String {
    format!("It's {name}'s turn.")
}

pub(crate) fn attacks(attacker: &str, target: &str, damage: u32) -> String {
    format!("{attacker} attacks {target} for {damage} damage!")
}

pub(crate) fn uses_ability(caster: &str, ability: &str) -> String {
    format!("{caster} uses {ability}!")
}

pub(crate) fn takes_damage(target: &str, damage: u32) -> String {
    format!("{target} takes {damage} damage!")
}

pub(crate) fn recovers_hp(target: &str, amount: u32) -> String {
    format!("{target} recovers {amount} HP!")
}

pub(crate) fn status_applied(target: &str, kind: StatusEffectKind) -> String {
    format!("{target} is now {kind}!")
}

pub(crate) fn buffs_removed(target: &str) -> String {
    format!("{target}'s optimizations were stripped away!")
}

pub(crate) fn stunned(target: &str) -> String {
    format!("{target} is stunned!")
}

pub(crate) fn weakness_revealed(target: &str) -> String {
    format!("{target}'s weaknesses are revealed!")
}

pub(crate) fn corruption_damage(name: &str, damage: u32) -> String {
    format!("{name} takes {damage} damage from corruption!")
}

pub(crate) fn frozen_solid(name: &str) -> String {
    format!("{name} is frozen solid.")
}

pub(crate) fn optimized(name: &str) -> String {
    format!("{name} is running optimized.")
}

pub(crate) fn encrypted(name: &str) -> String {
    format!("{name} is encrypted.")
}

pub(crate) fn no_longer(name: &str, kind: StatusEffectKind) -> String {
    format!("{name} is no longer {kind}.")
}

pub(crate) fn frozen_cannot_act(name: &str) -> String {
    format!("{name} is frozen and cannot act!")
}

pub(crate) fn restored_hp(name: &str, item: &str, amount: u32) -> String {
    format!("{name} used {item} and restored {amount} HP!")
}

pub(crate) fn restored_energy(name: &str, item: &str, amount: u32) -> String {
    format!("{name} used {item} and restored {amount} energy!")
}

pub(crate) fn item_no_effect(item: &str) -> String {
    format!("{item} has no effect in battle.")
}

pub(crate) fn fled(name: &str) -> String {
    format!("{name} escaped successfully!")
}

pub(crate) fn flee_failed(name: &str) -> String {
    format!("{name} failed to escape!")
}

pub(crate) fn enemy_defeated(enemy: &str) -> String {
    format!("{enemy} was defeated!")
}

pub(crate) fn victory(name: &str, exp: u32) -> String {
    format!("Victory! {name} gained {exp} experience.")
}

pub(crate) fn item_dropped(enemy: &str, item: &str) -> String {
    format!("{enemy} dropped {item}!")
}

pub(crate) fn defeat(name: &str) -> String {
    format!("{name} has been defeated...")
}

pub(crate) fn interrupted() -> String {
    "The battle was interrupted.".to_string()
}
