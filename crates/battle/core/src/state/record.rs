//! Persistent records used to seed a battle.
//!
//! These are owned by the rest of the game. The engine reads them once in
//! [`BattleSnapshot::start`](super::BattleSnapshot::start) and never mutates
//! them; results flow back through the battle report.

use super::ability::Ability;
use super::entity::{CombatEntity, EntityId};
use super::status::StatusEffects;
use crate::progression::ProgressionRef;

/// The player's persistent combat-relevant state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerProfile {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub abilities: Vec<Ability>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub progression: Option<ProgressionRef>,
}

impl PlayerProfile {
    /// Projects the profile into a combatant with [`EntityId::PLAYER`].
    pub fn to_combat_entity(&self) -> CombatEntity {
        CombatEntity {
            id: EntityId::PLAYER,
            name: self.name.clone(),
            hp: self.hp.min(self.max_hp),
            max_hp: self.max_hp,
            energy: self.energy.min(self.max_energy),
            max_energy: self.max_energy,
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            abilities: self.abilities.clone(),
            status_effects: StatusEffects::empty(),
            exp_reward: None,
            progression: self.progression.clone(),
        }
    }

    /// Attaches a progression capability (builder pattern).
    #[must_use]
    pub fn with_progression(mut self, progression: ProgressionRef) -> Self {
        self.progression = Some(progression);
        self
    }
}

/// Enemy definition; every spawned enemy starts at full HP and energy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub max_hp: u32,
    pub max_energy: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<Ability>,
    pub exp_reward: u32,
}

impl EnemyTemplate {
    pub fn to_combat_entity(&self, id: EntityId) -> CombatEntity {
        CombatEntity::new(id, self.name.clone(), self.max_hp, self.max_energy)
            .with_stats(self.attack, self.defense, self.speed)
            .with_abilities(self.abilities.clone())
            .with_exp_reward(self.exp_reward)
    }
}
