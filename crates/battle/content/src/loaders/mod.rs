//! Content loaders for reading battle data from files.
//!
//! Catalogs are RON, configuration is TOML. Enemies and the player reference
//! abilities by id; ids are resolved against the ability catalog at load time
//! so a typo fails loudly instead of producing an entity without abilities.

pub mod abilities;
pub mod config;
pub mod enemies;
pub mod factory;
pub mod items;
pub mod player;
pub mod talents;

pub use abilities::AbilityLoader;
pub use config::ConfigLoader;
pub use enemies::{EnemyLoader, EnemyTemplateSpec};
pub use factory::{BattleContent, ContentFactory};
pub use items::ItemLoader;
pub use player::{PlayerLoader, PlayerProfileSpec};
pub use talents::TalentLoader;

use std::path::Path;

use battle_core::Ability;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Looks up every id in `ids`, failing on the first unknown one.
pub(crate) fn resolve_abilities(
    ids: &[String],
    catalog: &[Ability],
    owner: &str,
) -> LoadResult<Vec<Ability>> {
    ids.iter()
        .map(|id| {
            catalog
                .iter()
                .find(|a| &a.id == id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Unknown ability '{}' for '{}'", id, owner))
        })
        .collect()
}
