//! Talent tree progression.
//!
//! A talent grants per-ability bonuses once unlocked. The tree is the
//! persistent progression system the battle engine consults through
//! [`Progression`]; the engine never mutates it.
//!
//! # Bonus aggregation
//!
//! - `damage_bonus` / `heal_bonus`: sum over every unlocked talent that
//!   targets the ability
//! - `special_effects`: concatenation in talent declaration order

use std::collections::BTreeSet;

use battle_core::{Progression, SpecialEffect};
use serde::{Deserialize, Serialize};

/// Bonus a talent grants to a single ability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TalentBonus {
    /// Ability id the bonus applies to.
    pub ability: String,

    /// Fractional damage bonus (`0.2` = +20%).
    #[serde(default)]
    pub damage: f64,

    /// Fractional heal bonus.
    #[serde(default)]
    pub heal: f64,

    #[serde(default)]
    pub special_effects: Vec<SpecialEffect>,
}

impl TalentBonus {
    pub fn new(ability: impl Into<String>) -> Self {
        Self {
            ability: ability.into(),
            damage: 0.0,
            heal: 0.0,
            special_effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_damage(mut self, damage: f64) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_heal(mut self, heal: f64) -> Self {
        self.heal = heal;
        self
    }

    #[must_use]
    pub fn with_special_effect(mut self, effect: SpecialEffect) -> Self {
        self.special_effects.push(effect);
        self
    }
}

/// Node of the talent tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    pub id: String,
    pub name: String,

    /// Talents that must be unlocked first.
    #[serde(default)]
    pub requires: Vec<String>,

    #[serde(default)]
    pub bonuses: Vec<TalentBonus>,
}

impl Talent {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            requires: Vec::new(),
            bonuses: Vec::new(),
        }
    }

    #[must_use]
    pub fn requiring(mut self, talent_id: impl Into<String>) -> Self {
        self.requires.push(talent_id.into());
        self
    }

    #[must_use]
    pub fn with_bonus(mut self, bonus: TalentBonus) -> Self {
        self.bonuses.push(bonus);
        self
    }

    fn bonuses_for<'a>(&'a self, ability_id: &'a str) -> impl Iterator<Item = &'a TalentBonus> {
        self.bonuses.iter().filter(move |b| b.ability == ability_id)
    }
}

/// Errors raised while unlocking talents.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TalentError {
    #[error("unknown talent '{0}'")]
    UnknownTalent(String),

    #[error("talent '{talent}' requires '{missing}' to be unlocked first")]
    MissingPrerequisite { talent: String, missing: String },
}

/// Talent definitions plus the set unlocked by the player.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TalentTree {
    talents: Vec<Talent>,
    unlocked: BTreeSet<String>,
}

impl TalentTree {
    pub fn new(talents: Vec<Talent>) -> Self {
        Self {
            talents,
            unlocked: BTreeSet::new(),
        }
    }

    pub fn talent(&self, id: &str) -> Option<&Talent> {
        self.talents.iter().find(|t| t.id == id)
    }

    pub fn talents(&self) -> &[Talent] {
        &self.talents
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    /// Unlocks `id`. Unlocking an already unlocked talent is a no-op.
    pub fn unlock(&mut self, id: &str) -> Result<(), TalentError> {
        let talent = self
            .talent(id)
            .ok_or_else(|| TalentError::UnknownTalent(id.to_string()))?;

        if let Some(missing) = talent.requires.iter().find(|r| !self.is_unlocked(r)) {
            return Err(TalentError::MissingPrerequisite {
                talent: id.to_string(),
                missing: missing.clone(),
            });
        }

        self.unlocked.insert(id.to_string());
        Ok(())
    }

    /// Unlocked talents in declaration order.
    pub fn unlocked_talents(&self) -> impl Iterator<Item = &Talent> {
        self.talents.iter().filter(|t| self.is_unlocked(&t.id))
    }

    fn bonuses_for<'a>(&'a self, ability_id: &'a str) -> impl Iterator<Item = &'a TalentBonus> {
        self.unlocked_talents()
            .flat_map(move |t| t.bonuses_for(ability_id))
    }
}

impl Progression for TalentTree {
    fn damage_bonus(&self, ability_id: &str) -> f64 {
        self.bonuses_for(ability_id).map(|b| b.damage).sum()
    }

    fn heal_bonus(&self, ability_id: &str) -> f64 {
        self.bonuses_for(ability_id).map(|b| b.heal).sum()
    }

    fn special_effects(&self, ability_id: &str) -> Vec<SpecialEffect> {
        self.bonuses_for(ability_id)
            .flat_map(|b| b.special_effects.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> TalentTree {
        TalentTree::new(vec![
            Talent::new("sharp_tools", "Sharp Tools")
                .with_bonus(TalentBonus::new("buffer_overflow").with_damage(0.2)),
            Talent::new("root_access", "Root Access")
                .requiring("sharp_tools")
                .with_bonus(
                    TalentBonus::new("buffer_overflow")
                        .with_damage(0.3)
                        .with_special_effect(SpecialEffect::new("stun").with_chance(0.25)),
                )
                .with_bonus(TalentBonus::new("patch").with_heal(0.5)),
        ])
    }

    #[test]
    fn locked_talents_grant_nothing() {
        let tree = tree();

        assert_eq!(tree.damage_bonus("buffer_overflow"), 0.0);
        assert!(tree.special_effects("buffer_overflow").is_empty());
    }

    #[test]
    fn bonuses_sum_over_unlocked_talents() {
        let mut tree = tree();
        tree.unlock("sharp_tools").unwrap();
        tree.unlock("root_access").unwrap();

        assert!((tree.damage_bonus("buffer_overflow") - 0.5).abs() < 1e-9);
        assert_eq!(tree.heal_bonus("patch"), 0.5);
        assert_eq!(tree.damage_bonus("patch"), 0.0);
        assert_eq!(
            tree.special_effects("buffer_overflow"),
            vec![SpecialEffect::new("stun").with_chance(0.25)]
        );
    }

    #[test]
    fn prerequisites_are_enforced() {
        let mut tree = tree();

        assert_eq!(
            tree.unlock("root_access"),
            Err(TalentError::MissingPrerequisite {
                talent: "root_access".to_string(),
                missing: "sharp_tools".to_string(),
            })
        );
        assert_eq!(
            tree.unlock("telepathy"),
            Err(TalentError::UnknownTalent("telepathy".to_string()))
        );
        assert!(!tree.is_unlocked("root_access"));
    }
}
