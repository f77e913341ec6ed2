//! Content factory for loading a complete battle setup from a data directory.

use std::path::{Path, PathBuf};

use battle_core::{Ability, BattleConfig, EnemyTemplate, ItemTemplate, PlayerProfile, ProgressionRef};

use crate::loaders::{
    AbilityLoader, ConfigLoader, EnemyLoader, ItemLoader, LoadResult, PlayerLoader, TalentLoader,
};
use crate::talents::TalentTree;

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battle.toml
/// ├── abilities.ron
/// ├── enemies.ron
/// ├── items.ron
/// ├── player.ron
/// └── talents.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

/// Everything needed to seed battles.
#[derive(Clone, Debug)]
pub struct BattleContent {
    pub config: BattleConfig,
    pub abilities: Vec<Ability>,
    pub enemies: Vec<(String, EnemyTemplate)>,
    pub items: Vec<ItemTemplate>,
    /// Player profile with the talent tree attached as its progression.
    pub player: PlayerProfile,
}

impl BattleContent {
    pub fn enemy(&self, enemy_id: &str) -> Option<&EnemyTemplate> {
        self.enemies
            .iter()
            .find(|(id, _)| id == enemy_id)
            .map(|(_, template)| template)
    }

    pub fn item(&self, item_id: &str) -> Option<&ItemTemplate> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `battle.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("battle.toml"))
    }

    /// Load the ability catalog from `abilities.ron`.
    pub fn load_abilities(&self) -> LoadResult<Vec<Ability>> {
        AbilityLoader::load(&self.data_dir.join("abilities.ron"))
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self, abilities: &[Ability]) -> LoadResult<Vec<(String, EnemyTemplate)>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"), abilities)
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemTemplate>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load the player profile from `player.ron`, without progression.
    pub fn load_player(&self, abilities: &[Ability]) -> LoadResult<PlayerProfile> {
        PlayerLoader::load(&self.data_dir.join("player.ron"), abilities)
    }

    /// Load the talent tree from `talents.ron`.
    pub fn load_talents(&self) -> LoadResult<TalentTree> {
        TalentLoader::load(&self.data_dir.join("talents.ron"))
    }

    /// Load every file and wire the talent tree into the player profile.
    pub fn load_all(&self) -> LoadResult<BattleContent> {
        let config = self.load_config()?;
        let abilities = self.load_abilities()?;
        let enemies = self.load_enemies(&abilities)?;
        let items = self.load_items()?;
        let talents = self.load_talents()?;
        let player = self
            .load_player(&abilities)?
            .with_progression(ProgressionRef::new(talents));

        tracing::info!(
            data_dir = %self.data_dir.display(),
            abilities = abilities.len(),
            enemies = enemies.len(),
            items = items.len(),
            "loaded battle content"
        );

        Ok(BattleContent {
            config,
            abilities,
            enemies,
            items,
            player,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_directory_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path().join("absent"));

        let error = factory.load_all().unwrap_err().to_string();
        assert!(error.contains("battle.toml"), "{error}");
    }
}
