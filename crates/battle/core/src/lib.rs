//! Deterministic turn-based battle resolution.
//!
//! `battle-core` owns the rules of a single encounter: damage, status effects,
//! abilities, turn order, flight and loot. Every operation on
//! [`engine::BattleEngine`] takes the current [`BattleSnapshot`] by reference
//! and returns a brand-new value, so callers never observe a half-applied
//! action. Persistent player and enemy records are only read when a battle
//! starts; the single [`BattleReport`] delivered on termination is the commit
//! boundary back to the rest of the game.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod progression;
pub mod state;

pub use config::{BattleConfig, LootEntry};
pub use engine::{BattleEngine, BattleOutcome, BattleReport, BattleStep, TurnPhase};
pub use env::{
    BattleEnv, BattleObserver, DropIdOracle, NoopObserver, PcgRng, RngOracle, RollContext,
    SequentialDropIds, compute_seed,
};
pub use error::{BattleError, CombatError, ErrorSeverity};
pub use progression::{Progression, ProgressionRef, SpecialEffect, SpecialEffectKind};
pub use state::{
    Ability, AbilityCategory, AbilityEffect, BattleSnapshot, CombatEntity, EnemyTemplate, EntityId,
    Item, ItemEffect, ItemTemplate, PlayerProfile, StatusEffect, StatusEffectKind, StatusEffects,
    TargetScope,
};
