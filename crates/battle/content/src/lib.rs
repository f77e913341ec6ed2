//! Data-driven battle content and loaders.
//!
//! This crate reads RON/TOML data files into `battle-core` types:
//! - Ability catalogs (RON)
//! - Enemy templates referencing abilities by id (RON)
//! - Item catalogs (RON)
//! - The player profile (RON)
//! - Talent trees implementing [`battle_core::Progression`] (RON)
//! - Battle configuration (TOML)
//!
//! Content is consumed when a battle is seeded and never appears in the
//! battle snapshot itself.

pub mod loaders;
pub mod talents;

pub use loaders::{
    AbilityLoader, BattleContent, ConfigLoader, ContentFactory, EnemyLoader, EnemyTemplateSpec,
    ItemLoader, LoadResult, PlayerLoader, PlayerProfileSpec, TalentLoader,
};
pub use talents::{Talent, TalentBonus, TalentError, TalentTree};
