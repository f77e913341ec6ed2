//! Status effect system for combatants.
//!
//! Status effects are timed modifiers measured in the affected entity's own
//! turns. An entity carries at most one effect per [`StatusEffectKind`];
//! applying a kind that is already present refreshes it in place.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;

/// Types of status effects.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumCount,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StatusEffectKind {
    /// Cannot act. Decays only when the scheduler skips the entity.
    Frozen,

    /// Loses `damage_per_turn` HP at the start of each turn.
    Corrupted,

    /// Speed buff (`speed_multiplier`).
    Optimized,

    /// Marker effect, no numeric impact yet.
    Encrypted,
}

/// A single status effect with its remaining duration in turns.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusEffectKind,
    pub duration: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_per_turn: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed_multiplier: Option<f64>,
}

impl StatusEffect {
    pub fn new(kind: StatusEffectKind, duration: u32) -> Self {
        Self {
            kind,
            duration,
            damage_per_turn: None,
            speed_multiplier: None,
        }
    }

    pub fn frozen(duration: u32) -> Self {
        Self::new(StatusEffectKind::Frozen, duration)
    }

    pub fn corrupted(duration: u32, damage_per_turn: u32) -> Self {
        Self {
            damage_per_turn: Some(damage_per_turn),
            ..Self::new(StatusEffectKind::Corrupted, duration)
        }
    }

    pub fn optimized(duration: u32, speed_multiplier: f64) -> Self {
        Self {
            speed_multiplier: Some(speed_multiplier),
            ..Self::new(StatusEffectKind::Optimized, duration)
        }
    }

    /// Builds the effect an ability applies, filling numeric fields from config.
    pub fn from_ability(kind: StatusEffectKind, duration: u32, config: &BattleConfig) -> Self {
        match kind {
            StatusEffectKind::Corrupted => {
                Self::corrupted(duration, config.corruption_damage_per_turn)
            }
            StatusEffectKind::Optimized => {
                Self::optimized(duration, config.optimized_speed_multiplier)
            }
            StatusEffectKind::Frozen | StatusEffectKind::Encrypted => Self::new(kind, duration),
        }
    }
}

/// Active status effects on a combatant.
///
/// Serialized as a plain list; deserializing goes through [`StatusEffects::apply`]
/// so repeated kinds collapse into one entry.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<StatusEffect>", into = "Vec<StatusEffect>")
)]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { BattleConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if a specific status effect is active.
    pub fn has(&self, kind: StatusEffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    pub fn get(&self, kind: StatusEffectKind) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    /// Adds a status effect, or refreshes duration and fields of an existing
    /// effect of the same kind.
    pub fn apply(&mut self, effect: StatusEffect) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            *existing = effect;
            return;
        }

        // One slot per kind, so this never overflows.
        let _ = self.effects.try_push(effect);
    }

    /// Removes a status effect immediately, returning it if it was present.
    pub fn remove(&mut self, kind: StatusEffectKind) -> Option<StatusEffect> {
        let index = self.effects.iter().position(|e| e.kind == kind)?;
        Some(self.effects.remove(index))
    }

    /// Decrements the duration of `kind` by one turn.
    ///
    /// Returns the remaining duration, or `None` if the effect is absent.
    /// Expired effects are left in place for the caller to remove and log.
    pub fn decrement(&mut self, kind: StatusEffectKind) -> Option<u32> {
        let effect = self.effects.iter_mut().find(|e| e.kind == kind)?;
        effect.duration = effect.duration.saturating_sub(1);
        Some(effect.duration)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut StatusEffect> {
        self.effects.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl FromIterator<StatusEffect> for StatusEffects {
    fn from_iter<T: IntoIterator<Item = StatusEffect>>(iter: T) -> Self {
        let mut effects = Self::empty();
        for effect in iter {
            effects.apply(effect);
        }
        effects
    }
}

impl From<Vec<StatusEffect>> for StatusEffects {
    fn from(effects: Vec<StatusEffect>) -> Self {
        effects.into_iter().collect()
    }
}

impl From<StatusEffects> for Vec<StatusEffect> {
    fn from(effects: StatusEffects) -> Self {
        effects.effects.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reapplying_refreshes_instead_of_stacking() {
        let mut effects = StatusEffects::empty();
        effects.apply(StatusEffect::corrupted(1, 3));
        effects.apply(StatusEffect::corrupted(4, 7));

        assert_eq!(effects.len(), 1);
        let corrupted = effects.get(StatusEffectKind::Corrupted).unwrap();
        assert_eq!(corrupted.duration, 4);
        assert_eq!(corrupted.damage_per_turn, Some(7));
    }

    #[test]
    fn repeated_kinds_collapse_on_conversion() {
        let effects = StatusEffects::from(vec![
            StatusEffect::frozen(1),
            StatusEffect::corrupted(2, 3),
            StatusEffect::frozen(5),
        ]);

        assert_eq!(effects.len(), 2);
        assert_eq!(effects.get(StatusEffectKind::Frozen).unwrap().duration, 5);
        assert_eq!(
            Vec::from(effects),
            vec![StatusEffect::frozen(5), StatusEffect::corrupted(2, 3)]
        );
    }

    #[test]
    fn every_kind_fits() {
        use strum::IntoEnumIterator;

        let effects: StatusEffects = StatusEffectKind::iter()
            .map(|kind| StatusEffect::new(kind, 2))
            .collect();

        assert_eq!(effects.len(), BattleConfig::MAX_STATUS_EFFECTS);
    }

    #[test]
    fn decrement_reports_remaining_turns() {
        let mut effects = StatusEffects::empty();
        effects.apply(StatusEffect::frozen(1));

        assert_eq!(effects.decrement(StatusEffectKind::Frozen), Some(0));
        assert!(effects.has(StatusEffectKind::Frozen));
        assert_eq!(effects.decrement(StatusEffectKind::Optimized), None);
    }

    #[test]
    fn kinds_render_lowercase() {
        assert_eq!(StatusEffectKind::Frozen.to_string(), "frozen");
        assert_eq!(
            "encrypted".parse::<StatusEffectKind>(),
            Ok(StatusEffectKind::Encrypted)
        );
    }
}
