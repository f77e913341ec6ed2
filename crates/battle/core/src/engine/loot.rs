//! Post-victory item drops.

use crate::env::{BattleEnv, RollContext, compute_seed};
use crate::state::{BattleSnapshot, CombatEntity, Item};

/// Rolls every loot table entry independently for one defeated enemy.
///
/// An enemy may drop anything from none to every entry in the table.
pub(crate) fn roll_drops(
    snapshot: &BattleSnapshot,
    enemy: &CombatEntity,
    env: &BattleEnv<'_>,
) -> Vec<Item> {
    env.config()
        .loot_table
        .iter()
        .zip(0u32..)
        .filter(|(entry, index)| {
            let seed = compute_seed(
                snapshot.seed,
                snapshot.nonce,
                enemy.id.0,
                RollContext::Loot(*index),
            );
            env.rng().chance(seed, entry.chance)
        })
        .map(|(entry, _)| {
            entry
                .item
                .instantiate(env.drop_ids().next_drop_id(&entry.item.id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;
    use crate::env::{NoopObserver, RngOracle, SequentialDropIds};
    use crate::state::EntityId;

    struct Fixed(u32);

    impl RngOracle for Fixed {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    fn snapshot() -> BattleSnapshot {
        BattleSnapshot::from_parts(
            CombatEntity::new(EntityId::PLAYER, "Ada", 50, 20),
            vec![CombatEntity::new(EntityId(1), "Bug", 10, 0)],
            3,
        )
    }

    #[test]
    fn low_roll_drops_everything_with_unique_ids() {
        let config = BattleConfig::default();
        let ids = SequentialDropIds::new();
        let env = BattleEnv::new(&config, &Fixed(0), &ids, &NoopObserver);
        let snapshot = snapshot();

        let drops = roll_drops(&snapshot, &snapshot.enemies[0], &env);
        let ids: Vec<&str> = drops.iter().map(|item| item.id.as_str()).collect();

        assert_eq!(ids, vec!["health_potion-1", "energy_drink-2", "debug_tool-3"]);
    }

    #[test]
    fn roll_between_rates_drops_only_common_items() {
        let config = BattleConfig::default();
        let ids = SequentialDropIds::new();
        // ~0.25: below 0.3, above 0.2 and 0.1
        let env = BattleEnv::new(&config, &Fixed(u32::MAX / 4), &ids, &NoopObserver);
        let snapshot = snapshot();

        let drops = roll_drops(&snapshot, &snapshot.enemies[0], &env);

        assert_eq!(drops.len(), 1);
        assert_eq!(drops[0].template, "health_potion");
    }

    #[test]
    fn high_roll_drops_nothing() {
        let config = BattleConfig::default();
        let ids = SequentialDropIds::new();
        let env = BattleEnv::new(&config, &Fixed(u32::MAX), &ids, &NoopObserver);
        let snapshot = snapshot();

        assert!(roll_drops(&snapshot, &snapshot.enemies[0], &env).is_empty());
    }
}
