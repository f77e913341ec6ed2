//! Ability resolution.
//!
//! Resolution order for one invocation:
//!
//! 1. Validate caster, ability ownership, energy and target set
//! 2. Deduct energy and announce the ability
//! 3. Per target: damage, heal, status effect
//! 4. Progression special effects, each gated by one roll for the whole
//!    target set

use super::{narrative, validation};
use crate::combat::{calculate_damage, calculate_heal};
use crate::env::{BattleEnv, RollContext, compute_seed};
use crate::error::BattleError;
use crate::progression::{SpecialEffect, SpecialEffectKind};
use crate::state::{Ability, BattleSnapshot, EntityId, StatusEffect, StatusEffectKind, TargetScope};

/// Resolves `ability_id` cast by `caster_id`.
///
/// On error nothing has been mutated and no energy was spent.
pub(crate) fn resolve(
    snapshot: &mut BattleSnapshot,
    caster_id: EntityId,
    ability_id: &str,
    target: Option<EntityId>,
    env: &BattleEnv<'_>,
) -> Result<(), BattleError> {
    let caster = validation::acting_entity(snapshot, caster_id)?;
    let ability = caster
        .ability(ability_id)
        .cloned()
        .ok_or_else(|| BattleError::UnknownAbility {
            caster: caster.name.clone(),
            ability: ability_id.to_string(),
        })?;

    if caster.energy < ability.energy_cost {
        return Err(BattleError::NotEnoughEnergy {
            ability: ability.name.clone(),
            energy: caster.energy,
            cost: ability.energy_cost,
        });
    }

    let targets = resolve_targets(snapshot, caster_id, &ability, target)?;

    // Validation passed; from here on the action always completes.
    let caster = snapshot
        .entity_mut(caster_id)
        .ok_or(BattleError::UnknownEntity { id: caster_id })?;
    caster.spend_energy(ability.energy_cost);
    let caster = caster.clone();

    snapshot.push_log(narrative::uses_ability(&caster.name, &ability.name));
    tracing::debug!(
        caster = %caster_id,
        ability = %ability.id,
        targets = targets.len(),
        "resolving ability"
    );

    let heal = calculate_heal(&caster, &ability);
    let config = env.config();

    for &target_id in &targets {
        let Some(target) = snapshot.entity_mut(target_id) else {
            continue;
        };
        let mut lines = Vec::new();

        if ability.effect.damage.is_some() {
            let damage = calculate_damage(&caster, target, Some(&ability));
            let was_alive = target.is_alive();
            target.take_damage(damage);
            lines.push(narrative::takes_damage(&target.name, damage));
            if was_alive && !target.is_alive() && !target_id.is_player() {
                lines.push(narrative::enemy_defeated(&target.name));
            }
        }

        if let Some(amount) = heal {
            let restored = target.heal(amount);
            lines.push(narrative::recovers_hp(&target.name, restored));
        }

        if let Some(kind) = ability.effect.status_effect {
            let duration = ability
                .effect
                .duration
                .unwrap_or(config.default_status_duration);
            target
                .status_effects
                .apply(StatusEffect::from_ability(kind, duration, config));
            lines.push(narrative::status_applied(&target.name, kind));
        }

        snapshot.log.extend(lines);
    }

    if let Some(progression) = &caster.progression {
        let effects = progression.special_effects(&ability.id);
        resolve_special_effects(snapshot, caster_id, &ability, &effects, &targets, heal, env);
    }

    Ok(())
}

fn resolve_targets(
    snapshot: &BattleSnapshot,
    caster_id: EntityId,
    ability: &Ability,
    target: Option<EntityId>,
) -> Result<Vec<EntityId>, BattleError> {
    match ability.effect.target {
        TargetScope::Caster => Ok(vec![caster_id]),
        TargetScope::SingleEnemy => {
            let target = target.ok_or_else(|| BattleError::MissingTarget {
                ability: ability.name.clone(),
            })?;
            validation::living_entity(snapshot, target)?;
            Ok(vec![target])
        }
        TargetScope::AllEnemies => Ok(snapshot.living_opponents(caster_id)),
    }
}

fn resolve_special_effects(
    snapshot: &mut BattleSnapshot,
    caster_id: EntityId,
    ability: &Ability,
    effects: &[SpecialEffect],
    targets: &[EntityId],
    heal: Option<u32>,
    env: &BattleEnv<'_>,
) {
    for (effect, index) in effects.iter().zip(0u32..) {
        let Some(kind) = effect.kind() else {
            tracing::error!(
                effect = %effect.id,
                ability = %ability.id,
                "unknown special effect, ignoring"
            );
            continue;
        };

        if let Some(chance) = effect.chance {
            let seed = compute_seed(
                snapshot.seed,
                snapshot.nonce,
                caster_id.0,
                RollContext::SpecialEffect(index),
            );
            if !env.rng().chance(seed, chance) {
                tracing::debug!(effect = %kind, chance, "special effect did not trigger");
                continue;
            }
        }

        apply_special_effect(snapshot, kind, targets, heal, env);
    }
}

fn apply_special_effect(
    snapshot: &mut BattleSnapshot,
    kind: SpecialEffectKind,
    targets: &[EntityId],
    heal: Option<u32>,
    env: &BattleEnv<'_>,
) {
    let config = env.config();

    match kind {
        SpecialEffectKind::GroupHeal => {
            if let Some(amount) = heal {
                let player = &mut snapshot.player;
                let restored = player.heal(amount);
                let line = narrative::recovers_hp(&player.name, restored);
                snapshot.push_log(line);
            }
        }
        SpecialEffectKind::RemoveBuffs
        | SpecialEffectKind::Stun
        | SpecialEffectKind::RevealWeakness => {
            for &target_id in targets {
                let Some(target) = snapshot.entity_mut(target_id) else {
                    continue;
                };
                let line = match kind {
                    SpecialEffectKind::RemoveBuffs => target
                        .status_effects
                        .remove(StatusEffectKind::Optimized)
                        .map(|_| narrative::buffs_removed(&target.name)),
                    SpecialEffectKind::Stun => {
                        target
                            .status_effects
                            .apply(StatusEffect::frozen(config.stun_duration));
                        Some(narrative::stunned(&target.name))
                    }
                    SpecialEffectKind::RevealWeakness => {
                        target.status_effects.apply(StatusEffect::corrupted(
                            config.reveal_weakness_duration,
                            config.reveal_weakness_damage,
                        ));
                        Some(narrative::weakness_revealed(&target.name))
                    }
                    SpecialEffectKind::GroupHeal => None,
                };
                if let Some(line) = line {
                    snapshot.push_log(line);
                }
            }
        }
    }
}
