//! Turn scheduling and battle termination.
//!
//! After every resolved action the scheduler first checks for a terminal
//! state, then walks `turn_order` cyclically to find the next entity able to
//! act:
//!
//! 1. All enemies defeated → [`BattleOutcome::Won`]
//! 2. Player defeated → [`BattleOutcome::Lost`]
//! 3. Otherwise skip dead entities, process status effects on the candidate,
//!    and skip it if frozen (consuming one frozen turn)
//! 4. Announce whose turn it is
//!
//! The walk is bounded to `turn_order.len() * turn_skip_guard_factor` steps;
//! tripping the bound is a structural error that aborts the battle.

use super::outcome::{BattleOutcome, BattleReport, BattleStep};
use super::{loot, narrative, status};
use crate::env::BattleEnv;
use crate::error::{BattleError, CombatError};
use crate::state::{BattleSnapshot, EntityId, StatusEffectKind};

/// Terminates the battle or hands the turn to the next entity able to act.
pub(crate) fn conclude_or_advance(mut snapshot: BattleSnapshot, env: &BattleEnv<'_>) -> BattleStep {
    if let Some(outcome) = terminal_outcome(&snapshot) {
        return finish(snapshot, outcome, env);
    }

    let order_len = snapshot.turn_order.len();
    let guard = order_len * env.config().turn_skip_guard_factor.max(1);
    let mut cursor = snapshot
        .turn_order
        .iter()
        .position(|&id| id == snapshot.current_turn)
        .unwrap_or(0);

    for _ in 0..guard {
        cursor = (cursor + 1) % order_len;
        let candidate = snapshot.turn_order[cursor];

        if !snapshot.entity(candidate).is_some_and(|e| e.is_alive()) {
            continue;
        }

        status::process_turn_start(&mut snapshot, candidate);
        if let Some(outcome) = terminal_outcome(&snapshot) {
            return finish(snapshot, outcome, env);
        }
        if !snapshot.entity(candidate).is_some_and(|e| e.is_alive()) {
            continue;
        }

        if skip_if_frozen(&mut snapshot, candidate) {
            continue;
        }

        snapshot.current_turn = candidate;
        let name = snapshot.name_of(candidate);
        snapshot.push_log(narrative::turn_of(&name));

        debug_assert!(snapshot.turn_order.contains(&snapshot.current_turn));
        return BattleStep::Continue(snapshot);
    }

    let error = BattleError::TurnGuardExceeded { iterations: guard };
    tracing::error!(
        code = error.error_code(),
        severity = error.severity().as_str(),
        nonce = snapshot.nonce,
        "{error}; forcing battle termination"
    );
    finish(snapshot, BattleOutcome::Aborted, env)
}

fn terminal_outcome(snapshot: &BattleSnapshot) -> Option<BattleOutcome> {
    if snapshot.all_enemies_defeated() {
        Some(BattleOutcome::Won)
    } else if !snapshot.player.is_alive() {
        Some(BattleOutcome::Lost)
    } else {
        None
    }
}

/// Consumes one frozen turn. Returns true if the entity must be skipped.
fn skip_if_frozen(snapshot: &mut BattleSnapshot, id: EntityId) -> bool {
    let Some(entity) = snapshot.entity_mut(id) else {
        return false;
    };
    if !entity.status_effects.has(StatusEffectKind::Frozen) {
        return false;
    }

    let name = entity.name.clone();
    let mut lines = vec![narrative::frozen_cannot_act(&name)];
    if entity.status_effects.decrement(StatusEffectKind::Frozen) == Some(0) {
        entity.status_effects.remove(StatusEffectKind::Frozen);
        lines.push(narrative::no_longer(&name, StatusEffectKind::Frozen));
    }

    snapshot.log.extend(lines);
    true
}

/// Builds the report, notifies the observer and ends the battle.
pub(crate) fn finish(
    mut snapshot: BattleSnapshot,
    outcome: BattleOutcome,
    env: &BattleEnv<'_>,
) -> BattleStep {
    let mut player_exp_gained = 0;
    let mut items_dropped = Vec::new();

    match outcome {
        BattleOutcome::Won => {
            player_exp_gained = snapshot
                .enemies
                .iter()
                .filter(|e| !e.is_alive())
                .filter_map(|e| e.exp_reward)
                .sum();

            let mut drop_lines = Vec::new();
            for enemy in snapshot.enemies.iter().filter(|e| !e.is_alive()) {
                for item in loot::roll_drops(&snapshot, enemy, env) {
                    drop_lines.push(narrative::item_dropped(&enemy.name, &item.name));
                    items_dropped.push(item);
                }
            }

            let line = narrative::victory(&snapshot.player.name, player_exp_gained);
            snapshot.push_log(line);
            snapshot.log.extend(drop_lines);
        }
        BattleOutcome::Lost => {
            let line = narrative::defeat(&snapshot.player.name);
            snapshot.push_log(line);
        }
        BattleOutcome::Fled => {}
        BattleOutcome::Aborted => snapshot.push_log(narrative::interrupted()),
    }

    let report = BattleReport {
        outcome,
        player_won: outcome == BattleOutcome::Won,
        player_exp_gained,
        items_dropped,
        defeated_enemy_ids: snapshot.defeated_enemy_ids(),
        player_combat_state: snapshot.player,
        log: snapshot.log,
    };

    tracing::info!(
        outcome = %report.outcome,
        exp = report.player_exp_gained,
        drops = report.items_dropped.len(),
        "battle ended"
    );
    env.observer().battle_ended(&report);

    BattleStep::Ended(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;
    use crate::env::{NoopObserver, RngOracle, SequentialDropIds};
    use crate::state::{CombatEntity, StatusEffect};

    struct Fixed(u32);

    impl RngOracle for Fixed {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    fn advance(snapshot: BattleSnapshot) -> BattleStep {
        let config = BattleConfig::default();
        let ids = SequentialDropIds::new();
        let env = BattleEnv::new(&config, &Fixed(u32::MAX), &ids, &NoopObserver);
        conclude_or_advance(snapshot, &env)
    }

    fn snapshot(player: CombatEntity, bug: CombatEntity) -> BattleSnapshot {
        let mut snapshot = BattleSnapshot::from_parts(player, vec![bug], 0);
        snapshot.log.clear();
        snapshot
    }

    fn tail(log: &[String], n: usize) -> Vec<&str> {
        log[log.len().saturating_sub(n)..]
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn everyone_frozen_aborts_the_battle() {
        let mut player = CombatEntity::new(EntityId::PLAYER, "Ada", 50, 20);
        let mut bug = CombatEntity::new(EntityId(1), "Bug", 10, 0);
        player.status_effects.apply(StatusEffect::frozen(3));
        bug.status_effects.apply(StatusEffect::frozen(3));

        let report = match advance(snapshot(player, bug)) {
            BattleStep::Ended(report) => report,
            BattleStep::Continue(_) => panic!("guard should end the battle"),
        };

        assert_eq!(report.outcome, BattleOutcome::Aborted);
        assert!(!report.player_won);
        assert_eq!(report.player_exp_gained, 0);
        assert_eq!(
            tail(&report.log, 3),
            vec![
                "Ada is frozen solid.",
                "Ada is frozen and cannot act!",
                "The battle was interrupted.",
            ]
        );
        // Two full cycles, each consuming one frozen turn per entity.
        assert_eq!(
            report
                .player_combat_state
                .status_effects
                .get(StatusEffectKind::Frozen)
                .map(|e| e.duration),
            Some(1)
        );
    }

    #[test]
    fn corruption_on_the_last_enemy_wins() {
        let player = CombatEntity::new(EntityId::PLAYER, "Ada", 50, 20);
        let mut bug = CombatEntity::new(EntityId(1), "Bug", 10, 0).with_exp_reward(12);
        bug.hp = 5;
        bug.status_effects.apply(StatusEffect::corrupted(2, 5));

        let report = advance(snapshot(player, bug)).report().cloned().unwrap();

        assert_eq!(report.outcome, BattleOutcome::Won);
        assert_eq!(report.player_exp_gained, 12);
        assert_eq!(report.defeated_enemy_ids, vec![EntityId(1)]);
        assert_eq!(
            report.log,
            vec![
                "Bug takes 5 damage from corruption!",
                "Bug was defeated!",
                "Victory! Ada gained 12 experience.",
            ]
        );
    }

    #[test]
    fn corruption_on_the_player_loses() {
        let mut player = CombatEntity::new(EntityId::PLAYER, "Ada", 50, 20);
        player.hp = 3;
        player.status_effects.apply(StatusEffect::corrupted(2, 5));
        let bug = CombatEntity::new(EntityId(1), "Bug", 10, 0);

        let mut snapshot = snapshot(player, bug);
        snapshot.current_turn = EntityId(1);

        let report = advance(snapshot).report().cloned().unwrap();

        assert_eq!(report.outcome, BattleOutcome::Lost);
        assert_eq!(report.player_combat_state.hp, 0);
        assert_eq!(
            report.log,
            vec![
                "Ada takes 5 damage from corruption!",
                "Ada has been defeated...",
            ]
        );
    }

    #[test]
    fn frozen_entity_is_passed_over() {
        let player = CombatEntity::new(EntityId::PLAYER, "Ada", 50, 20);
        let mut bug = CombatEntity::new(EntityId(1), "Bug", 10, 0);
        bug.status_effects.apply(StatusEffect::frozen(2));

        let next = advance(snapshot(player, bug)).into_snapshot().unwrap();

        assert_eq!(next.current_turn, EntityId::PLAYER);
        assert_eq!(
            next.enemies[0]
                .status_effects
                .get(StatusEffectKind::Frozen)
                .map(|e| e.duration),
            Some(1)
        );
        assert_eq!(
            next.log,
            vec![
                "Bug is frozen solid.",
                "Bug is frozen and cannot act!",
                "It's Ada's turn.",
            ]
        );
    }
}
