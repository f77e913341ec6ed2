//! Results returned by engine operations.

use crate::state::{BattleSnapshot, CombatEntity, EntityId, Item};

/// Scheduler state after an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// The battle continues and the given entity acts next.
    Acting(EntityId),
    Won,
    Lost,
    Fled,
    /// Terminated because the scheduler could not find anyone able to act.
    Aborted,
}

impl TurnPhase {
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Acting(_))
    }
}

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BattleOutcome {
    Won,
    Lost,
    Fled,
    Aborted,
}

impl BattleOutcome {
    pub const fn phase(self) -> TurnPhase {
        match self {
            Self::Won => TurnPhase::Won,
            Self::Lost => TurnPhase::Lost,
            Self::Fled => TurnPhase::Fled,
            Self::Aborted => TurnPhase::Aborted,
        }
    }
}

/// Termination payload delivered once to the external state owner.
///
/// The owner alone applies it to permanent state: experience, inventory
/// merge and HP/energy sync from `player_combat_state`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub player_won: bool,
    pub player_exp_gained: u32,
    pub items_dropped: Vec<Item>,
    pub player_combat_state: CombatEntity,
    pub defeated_enemy_ids: Vec<EntityId>,
    /// Full narrative including the closing lines.
    pub log: Vec<String>,
}

/// Result of one engine operation.
#[derive(Clone, Debug, PartialEq)]
pub enum BattleStep {
    /// The battle continues with this snapshot.
    Continue(BattleSnapshot),
    /// The battle is over; no further operations are accepted.
    Ended(BattleReport),
}

impl BattleStep {
    pub fn phase(&self) -> TurnPhase {
        match self {
            Self::Continue(snapshot) => TurnPhase::Acting(snapshot.current_turn),
            Self::Ended(report) => report.outcome.phase(),
        }
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended(_))
    }

    pub fn snapshot(&self) -> Option<&BattleSnapshot> {
        match self {
            Self::Continue(snapshot) => Some(snapshot),
            Self::Ended(_) => None,
        }
    }

    pub fn into_snapshot(self) -> Option<BattleSnapshot> {
        match self {
            Self::Continue(snapshot) => Some(snapshot),
            Self::Ended(_) => None,
        }
    }

    pub fn report(&self) -> Option<&BattleReport> {
        match self {
            Self::Continue(_) => None,
            Self::Ended(report) => Some(report),
        }
    }
}
