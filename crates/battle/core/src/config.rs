use strum::EnumCount;

use crate::state::{ItemEffect, ItemTemplate, StatusEffectKind};

/// Battle configuration constants and tunable parameters.
///
/// Every field has a sensible default so content files only need to
/// override what they change.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Lower bound of the flee success probability.
    pub flee_min_chance: f64,
    /// Upper bound of the flee success probability.
    pub flee_max_chance: f64,
    /// Constant term added to the weighted speed ratio.
    pub flee_base_chance: f64,
    /// Weight applied to `player_speed / (player_speed + avg_enemy_speed)`.
    pub flee_speed_weight: f64,

    /// Independent drop rolls made for every defeated enemy.
    pub loot_table: Vec<LootEntry>,

    /// Duration used when an ability applies a status without naming one.
    pub default_status_duration: u32,
    /// Damage per turn for `corrupted` effects applied by abilities.
    pub corruption_damage_per_turn: u32,
    /// Speed multiplier for `optimized` effects applied by abilities.
    pub optimized_speed_multiplier: f64,

    /// Frozen duration applied by the `stun` special effect.
    pub stun_duration: u32,
    /// Corrupted duration applied by the `reveal_weakness` special effect.
    pub reveal_weakness_duration: u32,
    /// Corrupted damage per turn applied by the `reveal_weakness` special effect.
    pub reveal_weakness_damage: u32,

    /// Probability that an enemy reaches for an offensive ability instead of
    /// a basic attack.
    pub enemy_ability_chance: f64,
    /// HP fraction at or below which an enemy prefers a heal ability.
    pub enemy_heal_threshold: f64,

    /// The scheduler gives up after `turn_order.len() * factor` skips.
    pub turn_skip_guard_factor: usize,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// One slot per status effect type; re-application refreshes in place.
    pub const MAX_STATUS_EFFECTS: usize = StatusEffectKind::COUNT;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FLEE_MIN_CHANCE: f64 = 0.1;
    pub const DEFAULT_FLEE_MAX_CHANCE: f64 = 0.9;
    pub const DEFAULT_FLEE_BASE_CHANCE: f64 = 0.25;
    pub const DEFAULT_FLEE_SPEED_WEIGHT: f64 = 0.5;
    pub const DEFAULT_STATUS_DURATION: u32 = 3;
    pub const DEFAULT_CORRUPTION_DAMAGE: u32 = 5;
    pub const DEFAULT_OPTIMIZED_SPEED_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_STUN_DURATION: u32 = 1;
    pub const DEFAULT_REVEAL_WEAKNESS_DURATION: u32 = 2;
    pub const DEFAULT_REVEAL_WEAKNESS_DAMAGE: u32 = 5;
    pub const DEFAULT_ENEMY_ABILITY_CHANCE: f64 = 0.3;
    pub const DEFAULT_ENEMY_HEAL_THRESHOLD: f64 = 0.5;
    pub const DEFAULT_TURN_SKIP_GUARD_FACTOR: usize = 2;

    pub fn new() -> Self {
        Self {
            flee_min_chance: Self::DEFAULT_FLEE_MIN_CHANCE,
            flee_max_chance: Self::DEFAULT_FLEE_MAX_CHANCE,
            flee_base_chance: Self::DEFAULT_FLEE_BASE_CHANCE,
            flee_speed_weight: Self::DEFAULT_FLEE_SPEED_WEIGHT,
            loot_table: LootEntry::default_table(),
            default_status_duration: Self::DEFAULT_STATUS_DURATION,
            corruption_damage_per_turn: Self::DEFAULT_CORRUPTION_DAMAGE,
            optimized_speed_multiplier: Self::DEFAULT_OPTIMIZED_SPEED_MULTIPLIER,
            stun_duration: Self::DEFAULT_STUN_DURATION,
            reveal_weakness_duration: Self::DEFAULT_REVEAL_WEAKNESS_DURATION,
            reveal_weakness_damage: Self::DEFAULT_REVEAL_WEAKNESS_DAMAGE,
            enemy_ability_chance: Self::DEFAULT_ENEMY_ABILITY_CHANCE,
            enemy_heal_threshold: Self::DEFAULT_ENEMY_HEAL_THRESHOLD,
            turn_skip_guard_factor: Self::DEFAULT_TURN_SKIP_GUARD_FACTOR,
        }
    }

    /// Replaces the loot table (builder pattern).
    #[must_use]
    pub fn with_loot_table(mut self, loot_table: Vec<LootEntry>) -> Self {
        self.loot_table = loot_table;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One independent drop roll: `item` drops with probability `chance`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootEntry {
    pub item: ItemTemplate,
    pub chance: f64,
}

impl LootEntry {
    pub fn new(item: ItemTemplate, chance: f64) -> Self {
        Self { item, chance }
    }

    /// HealthPotion 30%, EnergyDrink 20%, DebugTool 10%.
    pub fn default_table() -> Vec<Self> {
        vec![
            Self::new(
                ItemTemplate::new("health_potion", "Health Potion", ItemEffect::RestoreHp(50)),
                0.3,
            ),
            Self::new(
                ItemTemplate::new("energy_drink", "Energy Drink", ItemEffect::RestoreEnergy(30)),
                0.2,
            ),
            Self::new(
                ItemTemplate::new(
                    "debug_tool",
                    "Debug Tool",
                    ItemEffect::Utility("debug".to_string()),
                ),
                0.1,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_loot_table_matches_drop_rates() {
        let config = BattleConfig::default();
        let rates: Vec<(&str, f64)> = config
            .loot_table
            .iter()
            .map(|entry| (entry.item.id.as_str(), entry.chance))
            .collect();

        assert_eq!(
            rates,
            vec![
                ("health_potion", 0.3),
                ("energy_drink", 0.2),
                ("debug_tool", 0.1)
            ]
        );
    }

    #[test]
    fn one_status_slot_per_kind() {
        assert_eq!(BattleConfig::MAX_STATUS_EFFECTS, 4);
    }
}
