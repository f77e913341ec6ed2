//! Battle state: combatants, abilities, status effects, items and the
//! snapshot that ties them together.
//!
//! Public types are re-exported from this module; submodules stay private.
mod ability;
mod entity;
mod item;
mod record;
mod snapshot;
mod status;

pub use ability::{Ability, AbilityCategory, AbilityEffect, TargetScope};
pub use entity::{CombatEntity, EntityId};
pub use item::{Item, ItemEffect, ItemTemplate};
pub use record::{EnemyTemplate, PlayerProfile};
pub use snapshot::BattleSnapshot;
pub use status::{StatusEffect, StatusEffectKind, StatusEffects};
