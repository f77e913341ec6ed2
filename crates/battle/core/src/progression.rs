//! Progression capability consumed by the battle engine.
//!
//! Any persistent progression system (talent trees, gear sets, ...) can
//! influence ability outcomes by implementing [`Progression`]. A combatant
//! opts in by carrying a [`ProgressionRef`]; the engine checks for its
//! presence and never inspects what kind of record produced the entity.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Bonuses a progression system grants per ability id.
pub trait Progression: Send + Sync {
    /// Fractional damage bonus; `0.25` means +25%.
    fn damage_bonus(&self, ability_id: &str) -> f64;

    /// Fractional heal bonus; `0.25` means +25%.
    fn heal_bonus(&self, ability_id: &str) -> f64;

    /// Extra effects resolved after the ability's own effect.
    fn special_effects(&self, ability_id: &str) -> Vec<SpecialEffect>;
}

/// Shared, immutable handle to a progression capability.
///
/// Cloning shares the same capability; equality is identity.
#[derive(Clone)]
pub struct ProgressionRef(Arc<dyn Progression>);

impl ProgressionRef {
    pub fn new(progression: impl Progression + 'static) -> Self {
        Self(Arc::new(progression))
    }

    pub fn from_arc(progression: Arc<dyn Progression>) -> Self {
        Self(progression)
    }
}

impl Deref for ProgressionRef {
    type Target = dyn Progression;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for ProgressionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProgressionRef(..)")
    }
}

impl PartialEq for ProgressionRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A special effect bound to an ability by a progression system.
///
/// `id` stays a string so content can reference effects the engine does not
/// know yet; unknown ids are reported and skipped at resolution time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialEffect {
    pub id: String,
    /// Probability in `[0, 1]`; `None` always triggers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub chance: Option<f64>,
}

impl SpecialEffect {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            chance: None,
        }
    }

    #[must_use]
    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = Some(chance);
        self
    }

    /// Parses `id` into a known kind.
    pub fn kind(&self) -> Option<SpecialEffectKind> {
        self.id.parse().ok()
    }
}

/// Special effects the engine knows how to resolve.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SpecialEffectKind {
    /// Strips `optimized` from every target.
    RemoveBuffs,
    /// Heals the player by the ability's heal amount as well.
    GroupHeal,
    /// Freezes every target for one turn.
    Stun,
    /// Corrupts every target.
    RevealWeakness,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat;

    impl Progression for Flat {
        fn damage_bonus(&self, _ability_id: &str) -> f64 {
            0.5
        }

        fn heal_bonus(&self, _ability_id: &str) -> f64 {
            0.0
        }

        fn special_effects(&self, _ability_id: &str) -> Vec<SpecialEffect> {
            Vec::new()
        }
    }

    #[test]
    fn special_effect_ids_parse_snake_case() {
        assert_eq!(
            SpecialEffect::new("reveal_weakness").kind(),
            Some(SpecialEffectKind::RevealWeakness)
        );
        assert_eq!(SpecialEffect::new("teleport").kind(), None);
        assert_eq!(SpecialEffectKind::GroupHeal.as_ref(), "group_heal");
    }

    #[test]
    fn progression_refs_compare_by_identity() {
        let a = ProgressionRef::new(Flat);
        let b = a.clone();
        let c = ProgressionRef::new(Flat);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.damage_bonus("any"), 0.5);
    }
}
