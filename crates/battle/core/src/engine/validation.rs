//! Pre-execution checks shared by every operation.
//!
//! Validation runs against the caller's snapshot before anything is cloned
//! or mutated, so a rejected operation never leaves partial changes behind.

use crate::error::BattleError;
use crate::state::{BattleSnapshot, CombatEntity, EntityId};

/// Actor exists, is alive and holds the current turn.
pub(crate) fn acting_entity(
    snapshot: &BattleSnapshot,
    id: EntityId,
) -> Result<&CombatEntity, BattleError> {
    let entity = living_entity(snapshot, id)?;

    if snapshot.current_turn != id {
        return Err(BattleError::NotYourTurn {
            name: entity.name.clone(),
        });
    }

    Ok(entity)
}

/// Entity exists and is alive.
pub(crate) fn living_entity(
    snapshot: &BattleSnapshot,
    id: EntityId,
) -> Result<&CombatEntity, BattleError> {
    let entity = snapshot
        .entity(id)
        .ok_or(BattleError::UnknownEntity { id })?;

    if !entity.is_alive() {
        return Err(BattleError::AlreadyDefeated {
            name: entity.name.clone(),
        });
    }

    Ok(entity)
}

/// Player-only operations (items, flight) on the player's own turn.
pub(crate) fn acting_player<'a>(
    snapshot: &'a BattleSnapshot,
    id: EntityId,
    action: &'static str,
) -> Result<&'a CombatEntity, BattleError> {
    if snapshot.entity(id).is_some() && !snapshot.is_player(id) {
        return Err(BattleError::PlayerOnly { action });
    }

    acting_entity(snapshot, id)
}
