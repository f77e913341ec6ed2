//! Combatants and their identifiers.

use std::fmt;

use super::ability::Ability;
use super::status::{StatusEffectKind, StatusEffects};
use crate::progression::ProgressionRef;

/// Identifier of a combatant within one battle.
///
/// The player is always [`EntityId::PLAYER`]; enemies are numbered from 1 in
/// the order they were seeded into the battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    pub const PLAYER: Self = Self(0);

    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Flattened, combat-only projection of a player or enemy.
///
/// `hp` and `energy` are kept within `[0, max]` by every mutator below.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatEntity {
    pub id: EntityId,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub abilities: Vec<Ability>,
    pub status_effects: StatusEffects,
    pub exp_reward: Option<u32>,
    /// Present when a progression system modifies this entity's abilities.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub progression: Option<ProgressionRef>,
}

impl CombatEntity {
    /// Creates an entity at full HP and energy with no abilities.
    pub fn new(id: EntityId, name: impl Into<String>, max_hp: u32, max_energy: u32) -> Self {
        Self {
            id,
            name: name.into(),
            hp: max_hp,
            max_hp,
            energy: max_energy,
            max_energy,
            attack: 0,
            defense: 0,
            speed: 0,
            abilities: Vec::new(),
            status_effects: StatusEffects::empty(),
            exp_reward: None,
            progression: None,
        }
    }

    #[must_use]
    pub fn with_stats(mut self, attack: u32, defense: u32, speed: u32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_abilities(mut self, abilities: Vec<Ability>) -> Self {
        self.abilities = abilities;
        self
    }

    #[must_use]
    pub fn with_exp_reward(mut self, exp_reward: u32) -> Self {
        self.exp_reward = Some(exp_reward);
        self
    }

    #[must_use]
    pub fn with_progression(mut self, progression: ProgressionRef) -> Self {
        self.progression = Some(progression);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn ability(&self, ability_id: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.id == ability_id)
    }

    /// Speed after the `optimized` multiplier, if any.
    pub fn effective_speed(&self) -> f64 {
        let multiplier = self
            .status_effects
            .get(StatusEffectKind::Optimized)
            .and_then(|e| e.speed_multiplier)
            .unwrap_or(1.0);
        f64::from(self.speed) * multiplier
    }

    /// Reduces HP (clamped to 0) and returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_sub(amount);
        before - self.hp
    }

    /// Restores HP (clamped to max) and returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Restores energy (clamped to max) and returns the energy actually restored.
    pub fn restore_energy(&mut self, amount: u32) -> u32 {
        let before = self.energy;
        self.energy = self.energy.saturating_add(amount).min(self.max_energy);
        self.energy - before
    }

    /// Spends energy if enough is available.
    pub fn spend_energy(&mut self, cost: u32) -> bool {
        match self.energy.checked_sub(cost) {
            Some(remaining) => {
                self.energy = remaining;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusEffect;

    #[test]
    fn resources_clamp_to_bounds() {
        let mut entity = CombatEntity::new(EntityId(1), "Bug", 30, 10);

        assert_eq!(entity.take_damage(50), 30);
        assert_eq!(entity.hp, 0);
        assert!(!entity.is_alive());

        assert_eq!(entity.heal(100), 30);
        assert_eq!(entity.hp, 30);

        assert!(!entity.spend_energy(11));
        assert!(entity.spend_energy(4));
        assert_eq!(entity.restore_energy(20), 4);
        assert_eq!(entity.energy, 10);
    }

    #[test]
    fn optimized_multiplies_speed() {
        let mut entity = CombatEntity::new(EntityId(1), "Bug", 30, 10).with_stats(5, 1, 10);
        assert_eq!(entity.effective_speed(), 10.0);

        entity.status_effects.apply(StatusEffect::optimized(2, 1.5));
        assert_eq!(entity.effective_speed(), 15.0);
    }
}
