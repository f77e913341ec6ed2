//! Autopilot battle session.
//!
//! Plays the player's side with a simple policy and lets the engine resolve
//! enemy turns until the battle ends. [`SessionObserver`] is the persistent
//! state owner: it removes consumed items, merges drops and keeps the report.

use std::cell::RefCell;

use battle_core::{
    AbilityCategory, BattleEngine, BattleObserver, BattleReport, BattleSnapshot, BattleStep,
    CombatEntity, EntityId, Item, ItemEffect, PlayerProfile, TargetScope,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// HP fraction below which the autopilot tries to heal.
const HEAL_BELOW: f64 = 0.35;
/// HP fraction below which the autopilot runs when it cannot heal.
const FLEE_BELOW: f64 = 0.15;
/// Energy below which an energy item is worth a turn.
const RECHARGE_BELOW: u32 = 10;
/// Probability of preferring an affordable offensive ability over a basic attack.
const ABILITY_PREFERENCE: f64 = 0.6;

/// Persistent player data outside the battle.
#[derive(Clone, Debug)]
pub struct PlayerRecord {
    pub profile: PlayerProfile,
    pub experience: u32,
}

impl PlayerRecord {
    pub fn new(profile: PlayerProfile) -> Self {
        Self {
            profile,
            experience: 0,
        }
    }

    /// Commits a battle result: HP/energy sync and experience.
    pub fn settle(&mut self, report: &BattleReport) {
        let state = &report.player_combat_state;
        self.profile.hp = state.hp;
        self.profile.energy = state.energy;
        self.experience += report.player_exp_gained;
    }
}

/// Inventory owner notified by the engine.
#[derive(Debug, Default)]
pub struct SessionObserver {
    inventory: RefCell<Vec<Item>>,
    reports: RefCell<Vec<BattleReport>>,
}

impl SessionObserver {
    pub fn new(inventory: Vec<Item>) -> Self {
        Self {
            inventory: RefCell::new(inventory),
            reports: RefCell::new(Vec::new()),
        }
    }

    pub fn inventory(&self) -> Vec<Item> {
        self.inventory.borrow().clone()
    }

    /// Number of termination notifications received.
    pub fn reports_received(&self) -> usize {
        self.reports.borrow().len()
    }
}

impl BattleObserver for SessionObserver {
    fn item_consumed(&self, player: EntityId, item: &Item) {
        let mut inventory = self.inventory.borrow_mut();
        match inventory.iter().position(|i| i.id == item.id) {
            Some(index) => {
                inventory.remove(index);
                tracing::debug!(%player, item = %item.id, "item consumed");
            }
            None => tracing::warn!(item = %item.id, "consumed item was not in the inventory"),
        }
    }

    fn battle_ended(&self, report: &BattleReport) {
        let mut reports = self.reports.borrow_mut();
        if !reports.is_empty() {
            tracing::error!("battle ended twice; ignoring the second report");
            return;
        }
        self.inventory
            .borrow_mut()
            .extend(report.items_dropped.iter().cloned());
        reports.push(report.clone());
    }
}

/// A player decision.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerAction {
    Attack(EntityId),
    Ability {
        ability_id: String,
        target: Option<EntityId>,
    },
    UseItem(Item),
    Flee,
}

pub struct BattleSession<'a> {
    engine: BattleEngine<'a>,
    observer: &'a SessionObserver,
    rng: StdRng,
    max_actions: usize,
}

impl<'a> BattleSession<'a> {
    pub fn new(
        engine: BattleEngine<'a>,
        observer: &'a SessionObserver,
        seed: u64,
        max_actions: usize,
    ) -> Self {
        Self {
            engine,
            observer,
            rng: StdRng::seed_from_u64(seed),
            max_actions,
        }
    }

    /// Drives the battle to its end.
    pub fn run(&mut self, mut snapshot: BattleSnapshot) -> anyhow::Result<BattleReport> {
        for _ in 0..self.max_actions {
            let actor = snapshot.current_turn;
            let step = if snapshot.is_player(actor) {
                let action = self.choose_action(&snapshot);
                tracing::debug!(?action, "player action");
                self.perform(&snapshot, action)
            } else {
                self.engine.resolve_enemy_turn(&snapshot, actor)
            };

            match step {
                BattleStep::Continue(next) => snapshot = next,
                BattleStep::Ended(report) => return Ok(report),
            }
        }

        anyhow::bail!(
            "battle did not finish within {} actions (nonce {})",
            self.max_actions,
            snapshot.nonce
        )
    }

    fn perform(&self, snapshot: &BattleSnapshot, action: PlayerAction) -> BattleStep {
        let player = snapshot.player.id;
        match action {
            PlayerAction::Attack(target) => self.engine.attack(snapshot, player, target),
            PlayerAction::Ability { ability_id, target } => {
                self.engine
                    .use_ability(snapshot, player, &ability_id, target)
            }
            PlayerAction::UseItem(item) => self.engine.use_item(snapshot, player, &item),
            PlayerAction::Flee => {
                let enemy_speeds: Vec<f64> = snapshot
                    .enemies
                    .iter()
                    .filter(|e| e.is_alive())
                    .map(CombatEntity::effective_speed)
                    .collect();
                self.engine.flee(
                    snapshot,
                    player,
                    snapshot.player.effective_speed(),
                    &enemy_speeds,
                )
            }
        }
    }

    pub fn choose_action(&mut self, snapshot: &BattleSnapshot) -> PlayerAction {
        let player = &snapshot.player;
        let inventory = self.observer.inventory();
        let hp_fraction = f64::from(player.hp) / f64::from(player.max_hp.max(1));

        if hp_fraction < HEAL_BELOW {
            let heal = player.abilities.iter().find(|a| {
                a.category == AbilityCategory::Heal
                    && a.effect.target == TargetScope::Caster
                    && a.energy_cost <= player.energy
            });
            if let Some(heal) = heal {
                return PlayerAction::Ability {
                    ability_id: heal.id.clone(),
                    target: None,
                };
            }
            if let Some(potion) = find_item(&inventory, |e| matches!(e, ItemEffect::RestoreHp(_))) {
                return PlayerAction::UseItem(potion);
            }
            if hp_fraction < FLEE_BELOW {
                return PlayerAction::Flee;
            }
        }

        if player.energy < RECHARGE_BELOW {
            if let Some(drink) =
                find_item(&inventory, |e| matches!(e, ItemEffect::RestoreEnergy(_)))
            {
                return PlayerAction::UseItem(drink);
            }
        }

        let targets = snapshot.living_opponents(player.id);
        let offensive: Vec<_> = player
            .abilities
            .iter()
            .filter(|a| a.category.is_offensive() && a.energy_cost <= player.energy)
            .collect();

        if !offensive.is_empty() && self.rng.gen_bool(ABILITY_PREFERENCE) {
            if let Some(ability) = offensive.choose(&mut self.rng) {
                let target = match ability.effect.target {
                    TargetScope::SingleEnemy => targets.choose(&mut self.rng).copied(),
                    TargetScope::Caster | TargetScope::AllEnemies => None,
                };
                if target.is_some() || ability.effect.target != TargetScope::SingleEnemy {
                    return PlayerAction::Ability {
                        ability_id: ability.id.clone(),
                        target,
                    };
                }
            }
        }

        match targets.choose(&mut self.rng) {
            Some(&target) => PlayerAction::Attack(target),
            None => PlayerAction::Flee,
        }
    }
}

fn find_item(inventory: &[Item], matches: impl Fn(&ItemEffect) -> bool) -> Option<Item> {
    inventory.iter().find(|i| matches(&i.effect)).cloned()
}

#[cfg(test)]
mod tests {
    use battle_core::{
        BattleConfig, BattleEnv, BattleOutcome, EnemyTemplate, ItemTemplate, PcgRng,
        SequentialDropIds,
    };

    use super::*;

    fn profile() -> PlayerProfile {
        PlayerProfile {
            name: "Ada".to_string(),
            hp: 100,
            max_hp: 100,
            energy: 20,
            max_energy: 20,
            attack: 20,
            defense: 3,
            speed: 10,
            abilities: Vec::new(),
            progression: None,
        }
    }

    fn bug() -> EnemyTemplate {
        EnemyTemplate {
            name: "Bug".to_string(),
            max_hp: 5,
            max_energy: 0,
            attack: 4,
            defense: 0,
            speed: 3,
            abilities: Vec::new(),
            exp_reward: 9,
        }
    }

    fn potion(id: &str) -> Item {
        ItemTemplate::new("health_potion", "Health Potion", ItemEffect::RestoreHp(50))
            .instantiate(id.to_string())
    }

    #[test]
    fn session_runs_to_victory_and_settles() {
        let config = BattleConfig::default();
        let ids = SequentialDropIds::starting_at(100);
        let observer = SessionObserver::new(vec![potion("health_potion-1")]);
        let engine = BattleEngine::new(BattleEnv::new(&config, &PcgRng, &ids, &observer));

        let mut record = PlayerRecord::new(profile());
        let snapshot = BattleSnapshot::start(&record.profile, &[bug()], 3);
        let report = BattleSession::new(engine, &observer, 3, 50)
            .run(snapshot)
            .unwrap();

        assert_eq!(report.outcome, BattleOutcome::Won);
        assert_eq!(observer.reports_received(), 1);
        assert_eq!(
            observer.inventory().len(),
            1 + report.items_dropped.len()
        );

        record.settle(&report);
        assert_eq!(record.experience, 9);
        assert_eq!(record.profile.hp, 100);
    }

    #[test]
    fn wounded_player_drinks_a_potion() {
        let config = BattleConfig::default();
        let ids = SequentialDropIds::new();
        let observer = SessionObserver::new(vec![potion("health_potion-1")]);
        let engine = BattleEngine::new(BattleEnv::new(&config, &PcgRng, &ids, &observer));

        let mut wounded = profile();
        wounded.hp = 20;
        let snapshot = BattleSnapshot::start(&wounded, &[bug()], 3);
        let mut session = BattleSession::new(engine, &observer, 3, 50);

        let action = session.choose_action(&snapshot);
        assert_eq!(action, PlayerAction::UseItem(potion("health_potion-1")));

        let next = session
            .perform(&snapshot, action)
            .into_snapshot()
            .unwrap();
        assert_eq!(next.player.hp, 70);
        assert!(observer.inventory().is_empty());
    }

    #[test]
    fn desperate_player_without_heals_flees() {
        let config = BattleConfig::default();
        let ids = SequentialDropIds::new();
        let observer = SessionObserver::default();
        let engine = BattleEngine::new(BattleEnv::new(&config, &PcgRng, &ids, &observer));

        let mut wounded = profile();
        wounded.hp = 5;
        let snapshot = BattleSnapshot::start(&wounded, &[bug()], 3);

        let action = BattleSession::new(engine, &observer, 3, 50).choose_action(&snapshot);
        assert_eq!(action, PlayerAction::Flee);
    }
}
