//! Battle orchestration.
//!
//! [`BattleEngine`] is the public surface of the crate. Each operation:
//!
//! 1. Validates against the caller's snapshot
//! 2. Resolves the action on a private copy
//! 3. Hands the copy to the turn scheduler, which either terminates the
//!    battle or advances `current_turn`
//!
//! A rejected operation returns the caller's snapshot with one explanatory
//! log line appended: no turn advance, no resource consumed, no roll made.

mod abilities;
mod actions;
mod enemy;
mod loot;
pub(crate) mod narrative;
mod outcome;
mod status;
mod turns;
mod validation;

pub use outcome::{BattleOutcome, BattleReport, BattleStep, TurnPhase};

use actions::FleeResult;

use crate::env::BattleEnv;
use crate::error::{BattleError, CombatError};
use crate::state::{BattleSnapshot, EntityId, Item};

/// How a successfully resolved action continues.
enum Resolution {
    /// Hand over to the turn scheduler.
    Advance,
    /// End the battle immediately without advancing the turn.
    Escape,
}

/// Stateless orchestrator over injected capabilities.
#[derive(Clone, Copy, Debug)]
pub struct BattleEngine<'a> {
    env: BattleEnv<'a>,
}

impl<'a> BattleEngine<'a> {
    pub fn new(env: BattleEnv<'a>) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &BattleEnv<'a> {
        &self.env
    }

    /// Zero-cost basic attack from `attacker` on `target`.
    pub fn attack(
        &self,
        snapshot: &BattleSnapshot,
        attacker: EntityId,
        target: EntityId,
    ) -> BattleStep {
        self.run(snapshot, |next| {
            actions::basic_attack(next, attacker, target).map(|()| Resolution::Advance)
        })
    }

    /// Casts `ability_id`. `target` is required for single-target abilities.
    pub fn use_ability(
        &self,
        snapshot: &BattleSnapshot,
        caster: EntityId,
        ability_id: &str,
        target: Option<EntityId>,
    ) -> BattleStep {
        self.run(snapshot, |next| {
            abilities::resolve(next, caster, ability_id, target, &self.env)
                .map(|()| Resolution::Advance)
        })
    }

    /// Consumes `item` on the player and notifies the inventory owner.
    pub fn use_item(&self, snapshot: &BattleSnapshot, player: EntityId, item: &Item) -> BattleStep {
        self.run(snapshot, |next| {
            actions::use_item(next, player, item, &self.env).map(|()| Resolution::Advance)
        })
    }

    /// Attempts to escape. Success ends the battle on the spot.
    pub fn flee(
        &self,
        snapshot: &BattleSnapshot,
        player: EntityId,
        player_speed: f64,
        enemy_speeds: &[f64],
    ) -> BattleStep {
        self.run(snapshot, |next| {
            actions::flee(next, player, player_speed, enemy_speeds, &self.env).map(|result| {
                match result {
                    FleeResult::Escaped => Resolution::Escape,
                    FleeResult::Caught => Resolution::Advance,
                }
            })
        })
    }

    /// Lets `enemy` choose and resolve its action.
    pub fn resolve_enemy_turn(&self, snapshot: &BattleSnapshot, enemy: EntityId) -> BattleStep {
        self.run(snapshot, |next| {
            enemy::take_turn(next, enemy, &self.env).map(|()| Resolution::Advance)
        })
    }

    fn run(
        &self,
        snapshot: &BattleSnapshot,
        action: impl FnOnce(&mut BattleSnapshot) -> Result<Resolution, BattleError>,
    ) -> BattleStep {
        let mut next = snapshot.clone();

        match action(&mut next) {
            Ok(resolution) => {
                next.nonce += 1;
                match resolution {
                    Resolution::Advance => turns::conclude_or_advance(next, &self.env),
                    Resolution::Escape => turns::finish(next, BattleOutcome::Fled, &self.env),
                }
            }
            Err(error) => {
                tracing::warn!(
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "rejected battle action: {error}"
                );
                let mut unchanged = snapshot.clone();
                unchanged.push_log(error.to_string());
                BattleStep::Continue(unchanged)
            }
        }
    }
}
