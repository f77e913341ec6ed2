//! Battle snapshots: the value every engine operation reads and returns.

use super::entity::{CombatEntity, EntityId};
use super::record::{EnemyTemplate, PlayerProfile};
use crate::engine::narrative;

/// Complete state of one battle encounter.
///
/// Snapshots are values: engine operations read one and return a new one.
///
/// # Invariants
///
/// - `current_turn` is always a member of `turn_order`
/// - `turn_order` is fixed at creation; defeated entities are skipped, not removed
/// - `log` is append-only
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    pub player: CombatEntity,
    pub enemies: Vec<CombatEntity>,

    /// The entity whose action is expected next.
    pub current_turn: EntityId,

    /// Cyclic resolution order: the player, then enemies in seeding order.
    pub turn_order: Vec<EntityId>,

    /// Ordered narrative shown to the player.
    pub log: Vec<String>,

    /// Base seed for every random roll in this battle.
    pub seed: u64,

    /// Number of resolved actions; mixed into roll seeds so each action rolls
    /// independently.
    pub nonce: u64,
}

impl BattleSnapshot {
    /// Seeds a new battle from persistent records. The player acts first.
    pub fn start(player: &PlayerProfile, enemies: &[EnemyTemplate], seed: u64) -> Self {
        let enemies = enemies
            .iter()
            .zip(1u32..)
            .map(|(template, index)| template.to_combat_entity(EntityId(index)))
            .collect();

        Self::from_parts(player.to_combat_entity(), enemies, seed)
    }

    /// Builds a snapshot from already-projected combatants.
    pub fn from_parts(player: CombatEntity, enemies: Vec<CombatEntity>, seed: u64) -> Self {
        let turn_order: Vec<EntityId> = std::iter::once(player.id)
            .chain(enemies.iter().map(|e| e.id))
            .collect();

        debug_assert!(
            turn_order
                .iter()
                .enumerate()
                .all(|(i, id)| !turn_order[..i].contains(id)),
            "combatant ids must be unique"
        );

        let mut log: Vec<String> = enemies
            .iter()
            .map(|e| narrative::enemy_appears(&e.name))
            .collect();
        log.push(narrative::turn_of(&player.name));

        Self {
            current_turn: player.id,
            player,
            enemies,
            turn_order,
            log,
            seed,
            nonce: 0,
        }
    }

    pub fn entity(&self, id: EntityId) -> Option<&CombatEntity> {
        if self.player.id == id {
            return Some(&self.player);
        }
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut CombatEntity> {
        if self.player.id == id {
            return Some(&mut self.player);
        }
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    /// All combatants, player first.
    pub fn entities(&self) -> impl Iterator<Item = &CombatEntity> {
        std::iter::once(&self.player).chain(self.enemies.iter())
    }

    pub fn is_player(&self, id: EntityId) -> bool {
        self.player.id == id
    }

    /// Living combatants on the side opposing `id`.
    pub fn living_opponents(&self, id: EntityId) -> Vec<EntityId> {
        if self.is_player(id) {
            self.enemies
                .iter()
                .filter(|e| e.is_alive())
                .map(|e| e.id)
                .collect()
        } else if self.player.is_alive() {
            vec![self.player.id]
        } else {
            Vec::new()
        }
    }

    pub fn all_enemies_defeated(&self) -> bool {
        self.enemies.iter().all(|e| !e.is_alive())
    }

    pub fn defeated_enemy_ids(&self) -> Vec<EntityId> {
        self.enemies
            .iter()
            .filter(|e| !e.is_alive())
            .map(|e| e.id)
            .collect()
    }

    /// Name for narrative lines; falls back to the raw id.
    pub(crate) fn name_of(&self, id: EntityId) -> String {
        self.entity(id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub(crate) fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }
}
