//! Common error infrastructure for battle-core.
//!
//! Validation failures never abort a battle: the engine renders the error's
//! `Display` text into the narrative log and hands back the previous snapshot.
//! The wording of every variant is therefore part of the player-facing surface.
//!
//! # Design Principles
//!
//! - **Narrative-first**: `Display` output is the exact log line shown to players
//! - **Severity Classification**: errors are categorized for recovery strategies
//! - **Atomic**: an error leaves no partial mutation behind

use crate::state::EntityId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input, caller should retry with corrected input
/// - **Recoverable**: well-formed request the current state cannot afford
/// - **Internal**: scheduler inconsistency, battle is terminated defensively
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input. Examples: unknown combatant, missing target.
    Validation,

    /// Resource shortfall. Example: not enough energy.
    Recoverable,

    /// Unexpected state inconsistency that forces termination.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Recoverable => "recoverable",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all battle-core errors.
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for structured logging and assertions in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors surfaced while resolving a battle operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("No combatant with id {id} is part of this battle!")]
    UnknownEntity { id: EntityId },

    #[error("{name} has already been defeated!")]
    AlreadyDefeated { name: String },

    #[error("It's not {name}'s turn!")]
    NotYourTurn { name: String },

    #[error("{name} cannot target themselves!")]
    SelfTarget { name: String },

    #[error("{caster} doesn't know {ability}!")]
    UnknownAbility { caster: String, ability: String },

    #[error("{ability} needs a target!")]
    MissingTarget { ability: String },

    #[error("Not enough energy to use {ability}! ({energy}/{cost})")]
    NotEnoughEnergy {
        ability: String,
        energy: u32,
        cost: u32,
    },

    #[error("Only the player can {action}!")]
    PlayerOnly { action: &'static str },

    #[error("turn scheduler found no entity able to act after {iterations} steps")]
    TurnGuardExceeded { iterations: usize },
}

impl CombatError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotEnoughEnergy { .. } => ErrorSeverity::Recoverable,
            Self::TurnGuardExceeded { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEntity { .. } => "UNKNOWN_ENTITY",
            Self::AlreadyDefeated { .. } => "ALREADY_DEFEATED",
            Self::NotYourTurn { .. } => "NOT_YOUR_TURN",
            Self::SelfTarget { .. } => "SELF_TARGET",
            Self::UnknownAbility { .. } => "UNKNOWN_ABILITY",
            Self::MissingTarget { .. } => "MISSING_TARGET",
            Self::NotEnoughEnergy { .. } => "NOT_ENOUGH_ENERGY",
            Self::PlayerOnly { .. } => "PLAYER_ONLY",
            Self::TurnGuardExceeded { .. } => "TURN_GUARD_EXCEEDED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_shortfall_is_recoverable() {
        let error = BattleError::NotEnoughEnergy {
            ability: "Firewall".to_string(),
            energy: 5,
            cost: 10,
        };

        assert_eq!(error.severity(), ErrorSeverity::Recoverable);
        assert_eq!(error.to_string(), "Not enough energy to use Firewall! (5/10)");
    }

    #[test]
    fn guard_trip_is_internal() {
        let error = BattleError::TurnGuardExceeded { iterations: 6 };
        assert!(error.severity().is_internal());
        assert_eq!(error.error_code(), "TURN_GUARD_EXCEEDED");
    }
}
