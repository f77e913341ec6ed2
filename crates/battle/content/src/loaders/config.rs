//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their [`BattleConfig::default`] values; a missing
    /// `loot_table` keeps the default table.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub(crate) fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        for (key, value) in [
            ("flee_min_chance", config.flee_min_chance),
            ("flee_max_chance", config.flee_max_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("{key} must be within [0, 1], got {value}");
            }
        }
        if config.flee_min_chance > config.flee_max_chance {
            anyhow::bail!(
                "flee_min_chance ({}) exceeds flee_max_chance ({})",
                config.flee_min_chance,
                config.flee_max_chance
            );
        }
        if config.turn_skip_guard_factor < 1 {
            anyhow::bail!(
                "turn_skip_guard_factor must be at least 1, got {}",
                config.turn_skip_guard_factor
            );
        }
        if let Some(entry) = config
            .loot_table
            .iter()
            .find(|e| !(0.0..=1.0).contains(&e.chance))
        {
            anyhow::bail!(
                "Loot chance for '{}' must be within [0, 1], got {}",
                entry.item.id,
                entry.chance
            );
        }

        Ok(config)
    }
}
