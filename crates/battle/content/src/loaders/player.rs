//! Player profile loader.

use std::path::Path;

use battle_core::{Ability, PlayerProfile};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file, resolve_abilities};

/// On-disk player profile. `hp` and `energy` default to their maxima.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfileSpec {
    pub name: String,
    pub max_hp: u32,
    #[serde(default)]
    pub hp: Option<u32>,
    pub max_energy: u32,
    #[serde(default)]
    pub energy: Option<u32>,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    #[serde(default)]
    pub abilities: Vec<String>,
}

/// Loader for the player profile from RON files.
pub struct PlayerLoader;

impl PlayerLoader {
    /// Load the player profile, resolving its abilities against `abilities`.
    ///
    /// The returned profile carries no progression; attach one with
    /// [`PlayerProfile::with_progression`].
    pub fn load(path: &Path, abilities: &[Ability]) -> LoadResult<PlayerProfile> {
        let content = read_file(path)?;
        let spec: PlayerProfileSpec = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse player profile RON: {}", e))?;

        Ok(PlayerProfile {
            abilities: resolve_abilities(&spec.abilities, abilities, &spec.name)?,
            hp: spec.hp.unwrap_or(spec.max_hp),
            energy: spec.energy.unwrap_or(spec.max_energy),
            name: spec.name,
            max_hp: spec.max_hp,
            max_energy: spec.max_energy,
            attack: spec.attack,
            defense: spec.defense,
            speed: spec.speed,
            progression: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_current_values_default_to_max() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(name: "Ada", max_hp: 100, max_energy: 40, energy: Some(12), attack: 10, defense: 3, speed: 10)"#
        )
        .unwrap();

        let profile = PlayerLoader::load(file.path(), &[]).unwrap();
        assert_eq!(profile.hp, 100);
        assert_eq!(profile.energy, 12);
        assert!(profile.abilities.is_empty());
        assert!(profile.progression.is_none());
    }
}
