//! Damage and heal calculation.

use crate::state::{Ability, CombatEntity};

/// Calculate damage dealt by `attacker` to `target`.
///
/// # Formula
///
/// ```text
/// base   = attacker.attack + ability.damage
/// raw    = max(0, base - target.defense)
/// final  = round(raw * (1 + damage_bonus(ability.id)))
/// ```
///
/// The progression multiplier only applies when the attacker carries a
/// progression capability and an ability was used; basic attacks never
/// receive it.
pub fn calculate_damage(
    attacker: &CombatEntity,
    target: &CombatEntity,
    ability: Option<&Ability>,
) -> u32 {
    let ability_damage = ability.and_then(|a| a.effect.damage).unwrap_or(0);
    let base = attacker.attack.saturating_add(ability_damage);
    let raw = base.saturating_sub(target.defense);

    let multiplier = match (&attacker.progression, ability) {
        (Some(progression), Some(ability)) => 1.0 + progression.damage_bonus(&ability.id),
        _ => 1.0,
    };

    scale(raw, multiplier)
}

/// Calculate the heal an ability restores per target.
///
/// Returns `None` when the ability has no heal component.
pub fn calculate_heal(caster: &CombatEntity, ability: &Ability) -> Option<u32> {
    let heal = ability.effect.heal?;
    let multiplier = caster
        .progression
        .as_ref()
        .map_or(1.0, |p| 1.0 + p.heal_bonus(&ability.id));

    Some(scale(heal, multiplier))
}

fn scale(value: u32, multiplier: f64) -> u32 {
    (f64::from(value) * multiplier).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::{Progression, ProgressionRef, SpecialEffect};
    use crate::state::{AbilityCategory, AbilityEffect, EntityId, TargetScope};

    struct Bonus(f64);

    impl Progression for Bonus {
        fn damage_bonus(&self, ability_id: &str) -> f64 {
            if ability_id == "overclock" { self.0 } else { 0.0 }
        }

        fn heal_bonus(&self, _ability_id: &str) -> f64 {
            self.0
        }

        fn special_effects(&self, _ability_id: &str) -> Vec<SpecialEffect> {
            Vec::new()
        }
    }

    fn entity(attack: u32, defense: u32) -> CombatEntity {
        CombatEntity::new(EntityId(1), "E", 30, 10).with_stats(attack, defense, 5)
    }

    fn overclock() -> Ability {
        Ability::new(
            "overclock",
            "Overclock",
            AbilityCategory::Attack,
            5,
            AbilityEffect::new(TargetScope::SingleEnemy)
                .with_damage(4)
                .with_heal(10),
        )
    }

    #[test]
    fn basic_attack_subtracts_defense() {
        assert_eq!(calculate_damage(&entity(10, 0), &entity(0, 5), None), 5);
    }

    #[test]
    fn defense_above_attack_deals_nothing() {
        assert_eq!(calculate_damage(&entity(3, 0), &entity(0, 9), None), 0);
    }

    #[test]
    fn ability_damage_adds_to_attack() {
        let ability = overclock();
        assert_eq!(
            calculate_damage(&entity(10, 0), &entity(0, 5), Some(&ability)),
            9
        );
    }

    #[test]
    fn progression_bonus_applies_only_with_ability() {
        let attacker = entity(10, 0).with_progression(ProgressionRef::new(Bonus(0.25)));
        let target = entity(0, 5);
        let ability = overclock();

        // round(9 * 1.25) = round(11.25)
        assert_eq!(calculate_damage(&attacker, &target, Some(&ability)), 11);
        assert_eq!(calculate_damage(&attacker, &target, None), 5);
    }

    #[test]
    fn heal_scales_with_progression() {
        let ability = overclock();
        assert_eq!(calculate_heal(&entity(0, 0), &ability), Some(10));

        let caster = entity(0, 0).with_progression(ProgressionRef::new(Bonus(0.5)));
        assert_eq!(calculate_heal(&caster, &ability), Some(15));
    }
}
