//! Per-turn status effect processing.
//!
//! Runs once when the scheduler hands an entity its turn, before the frozen
//! check. `frozen` is only reported here; its duration belongs to the
//! scheduler's skip logic so a frozen turn is counted exactly once.

use super::narrative;
use crate::state::{BattleSnapshot, EntityId, StatusEffectKind};

/// Applies and decays every status effect on `id`.
pub(crate) fn process_turn_start(snapshot: &mut BattleSnapshot, id: EntityId) {
    let Some(entity) = snapshot.entity_mut(id) else {
        return;
    };
    if entity.status_effects.is_empty() {
        return;
    }

    let name = entity.name.clone();
    let was_alive = entity.is_alive();
    let mut lines = Vec::new();
    let mut expired = Vec::new();

    for effect in entity.status_effects.iter_mut() {
        match effect.kind {
            StatusEffectKind::Corrupted => {
                let damage = effect.damage_per_turn.unwrap_or(0);
                entity.hp = entity.hp.saturating_sub(damage);
                lines.push(narrative::corruption_damage(&name, damage));
            }
            StatusEffectKind::Frozen => {
                lines.push(narrative::frozen_solid(&name));
                continue;
            }
            StatusEffectKind::Optimized => lines.push(narrative::optimized(&name)),
            StatusEffectKind::Encrypted => lines.push(narrative::encrypted(&name)),
        }

        effect.duration = effect.duration.saturating_sub(1);
        if effect.duration == 0 {
            expired.push(effect.kind);
        }
    }

    for kind in expired {
        entity.status_effects.remove(kind);
        lines.push(narrative::no_longer(&name, kind));
    }

    if was_alive && !entity.is_alive() && !id.is_player() {
        lines.push(narrative::enemy_defeated(&name));
    }

    tracing::debug!(entity = %id, lines = lines.len(), "processed status effects");
    snapshot.log.extend(lines);
}
