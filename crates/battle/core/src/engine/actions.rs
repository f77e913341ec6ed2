//! Basic attack, item use and flight.

use super::{narrative, validation};
use crate::combat::{calculate_damage, flee_chance};
use crate::env::{BattleEnv, RollContext, compute_seed};
use crate::error::BattleError;
use crate::state::{BattleSnapshot, EntityId, Item, ItemEffect};

/// Zero-cost attack without progression bonuses.
pub(crate) fn basic_attack(
    snapshot: &mut BattleSnapshot,
    attacker_id: EntityId,
    target_id: EntityId,
) -> Result<(), BattleError> {
    let attacker = validation::acting_entity(snapshot, attacker_id)?;
    if attacker_id == target_id {
        return Err(BattleError::SelfTarget {
            name: attacker.name.clone(),
        });
    }
    let target = validation::living_entity(snapshot, target_id)?;

    let damage = calculate_damage(attacker, target, None);
    let attacker_name = attacker.name.clone();

    let Some(target) = snapshot.entity_mut(target_id) else {
        return Err(BattleError::UnknownEntity { id: target_id });
    };
    target.take_damage(damage);
    let mut lines = vec![narrative::attacks(&attacker_name, &target.name, damage)];
    if !target.is_alive() && !target_id.is_player() {
        lines.push(narrative::enemy_defeated(&target.name));
    }

    snapshot.log.extend(lines);
    Ok(())
}

/// Consumes `item` on the player. The caller's inventory owner is notified.
pub(crate) fn use_item(
    snapshot: &mut BattleSnapshot,
    player_id: EntityId,
    item: &Item,
    env: &BattleEnv<'_>,
) -> Result<(), BattleError> {
    validation::acting_player(snapshot, player_id, "use items")?;

    let player = &mut snapshot.player;
    let line = match &item.effect {
        ItemEffect::RestoreHp(amount) => {
            let restored = player.heal(*amount);
            narrative::restored_hp(&player.name, &item.name, restored)
        }
        ItemEffect::RestoreEnergy(amount) => {
            let restored = player.restore_energy(*amount);
            narrative::restored_energy(&player.name, &item.name, restored)
        }
        ItemEffect::Utility(tag) => {
            tracing::debug!(item = %item.id, tag = %tag, "utility item used in battle");
            narrative::item_no_effect(&item.name)
        }
    };
    snapshot.push_log(line);

    env.observer().item_consumed(player_id, item);
    Ok(())
}

/// Outcome of a validated flee attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FleeResult {
    Escaped,
    Caught,
}

pub(crate) fn flee(
    snapshot: &mut BattleSnapshot,
    player_id: EntityId,
    player_speed: f64,
    enemy_speeds: &[f64],
    env: &BattleEnv<'_>,
) -> Result<FleeResult, BattleError> {
    let player = validation::acting_player(snapshot, player_id, "flee")?;
    let name = player.name.clone();

    let chance = flee_chance(player_speed, enemy_speeds, env.config());
    let seed = compute_seed(snapshot.seed, snapshot.nonce, player_id.0, RollContext::Flee);
    let escaped = env.rng().chance(seed, chance);
    tracing::debug!(chance, escaped, "flee attempt");

    if escaped {
        snapshot.push_log(narrative::fled(&name));
        Ok(FleeResult::Escaped)
    } else {
        snapshot.push_log(narrative::flee_failed(&name));
        Ok(FleeResult::Caught)
    }
}
