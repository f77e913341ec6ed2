//! Enemy turn policy.
//!
//! Enemies pick from three plans, in priority order:
//!
//! 1. Heal themselves when at or below `enemy_heal_threshold` of max HP and
//!    an affordable heal ability exists
//! 2. With probability `enemy_ability_chance`, use an affordable offensive
//!    ability on the player
//! 3. Basic attack on the player

use super::{abilities, actions, validation};
use crate::env::{BattleEnv, RollContext, compute_seed};
use crate::error::BattleError;
use crate::state::{Ability, AbilityCategory, BattleSnapshot, CombatEntity, EntityId, TargetScope};

/// Action an enemy decided to take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum EnemyPlan {
    Ability {
        ability_id: String,
        target: Option<EntityId>,
    },
    Attack {
        target: EntityId,
    },
}

pub(crate) fn take_turn(
    snapshot: &mut BattleSnapshot,
    enemy_id: EntityId,
    env: &BattleEnv<'_>,
) -> Result<(), BattleError> {
    let enemy = validation::acting_entity(snapshot, enemy_id)?;
    let plan = choose_plan(snapshot, enemy, env);
    tracing::debug!(enemy = %enemy_id, ?plan, "enemy turn");

    match plan {
        EnemyPlan::Ability { ability_id, target } => {
            abilities::resolve(snapshot, enemy_id, &ability_id, target, env)
        }
        EnemyPlan::Attack { target } => actions::basic_attack(snapshot, enemy_id, target),
    }
}

fn choose_plan(snapshot: &BattleSnapshot, enemy: &CombatEntity, env: &BattleEnv<'_>) -> EnemyPlan {
    let config = env.config();
    let player = snapshot.player.id;
    let affordable = |ability: &&Ability| ability.energy_cost <= enemy.energy;

    let wounded = f64::from(enemy.hp) <= f64::from(enemy.max_hp) * config.enemy_heal_threshold;
    if wounded {
        let heal = enemy.abilities.iter().filter(affordable).find(|a| {
            a.category == AbilityCategory::Heal && a.effect.target == TargetScope::Caster
        });
        if let Some(heal) = heal {
            return EnemyPlan::Ability {
                ability_id: heal.id.clone(),
                target: None,
            };
        }
    }

    let offensive: Vec<&Ability> = enemy
        .abilities
        .iter()
        .filter(affordable)
        .filter(|a| a.category.is_offensive())
        .collect();

    let seed = |context| compute_seed(snapshot.seed, snapshot.nonce, enemy.id.0, context);
    if !offensive.is_empty()
        && env
            .rng()
            .chance(seed(RollContext::EnemyPolicy), config.enemy_ability_chance)
    {
        let index = env
            .rng()
            .pick(seed(RollContext::EnemyAbilityPick), offensive.len());
        let ability = offensive[index];
        let target = match ability.effect.target {
            TargetScope::SingleEnemy => Some(player),
            TargetScope::Caster | TargetScope::AllEnemies => None,
        };
        return EnemyPlan::Ability {
            ability_id: ability.id.clone(),
            target,
        };
    }

    EnemyPlan::Attack { target: player }
}
