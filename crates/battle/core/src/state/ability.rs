//! Usable abilities and their effect descriptors.

use super::status::StatusEffectKind;

/// Broad classification of an ability, used by enemy turn selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AbilityCategory {
    Attack,
    Heal,
    Utility,
    Buff,
    Debuff,
}

impl AbilityCategory {
    /// Abilities an AI should aim at the opposing side.
    pub const fn is_offensive(&self) -> bool {
        matches!(self, Self::Attack | Self::Debuff)
    }
}

/// Which combatants an ability resolves against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TargetScope {
    /// The caster only.
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    Caster,

    /// One explicitly chosen target.
    SingleEnemy,

    /// Every living combatant on the opposing side.
    AllEnemies,
}

/// What an ability does to each entity in its target set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityEffect {
    /// Added to the caster's attack before defense is subtracted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: Option<u32>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub heal: Option<u32>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub status_effect: Option<StatusEffectKind>,

    /// Duration of `status_effect`; falls back to the configured default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<u32>,

    pub target: TargetScope,
}

impl AbilityEffect {
    pub fn new(target: TargetScope) -> Self {
        Self {
            damage: None,
            heal: None,
            status_effect: None,
            duration: None,
            target,
        }
    }

    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    #[must_use]
    pub fn with_heal(mut self, heal: u32) -> Self {
        self.heal = Some(heal);
        self
    }

    #[must_use]
    pub fn with_status(mut self, kind: StatusEffectKind, duration: u32) -> Self {
        self.status_effect = Some(kind);
        self.duration = Some(duration);
        self
    }
}

/// An ability with an energy cost and an effect descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub category: AbilityCategory,
    pub energy_cost: u32,
    pub effect: AbilityEffect,
}

impl Ability {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: AbilityCategory,
        energy_cost: u32,
        effect: AbilityEffect,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            energy_cost,
            effect,
        }
    }
}
