//! Enemy catalog loader.
//!
//! Loads enemy templates from RON files, resolving ability ids against the
//! ability catalog.

use std::path::Path;

use battle_core::{Ability, EnemyTemplate};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file, resolve_abilities};

/// On-disk enemy definition. Abilities are referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplateSpec {
    pub name: String,
    pub max_hp: u32,
    #[serde(default)]
    pub max_energy: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    #[serde(default)]
    pub abilities: Vec<String>,
    pub exp_reward: u32,
}

impl EnemyTemplateSpec {
    fn resolve(self, enemy_id: &str, catalog: &[Ability]) -> LoadResult<EnemyTemplate> {
        if self.max_hp == 0 {
            anyhow::bail!("Enemy '{}' must have positive max_hp", enemy_id);
        }

        Ok(EnemyTemplate {
            abilities: resolve_abilities(&self.abilities, catalog, enemy_id)?,
            name: self.name,
            max_hp: self.max_hp,
            max_energy: self.max_energy,
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            exp_reward: self.exp_reward,
        })
    }
}

/// Loader for enemy catalogs from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load an enemy catalog from a RON file.
    ///
    /// RON format: `Vec<(String, EnemyTemplateSpec)>`
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file
    /// * `abilities` - Catalog the enemies' ability ids are resolved against
    ///
    /// # Returns
    ///
    /// Returns a Vec of (enemy_id, EnemyTemplate).
    pub fn load(path: &Path, abilities: &[Ability]) -> LoadResult<Vec<(String, EnemyTemplate)>> {
        let content = read_file(path)?;
        Self::parse(&content, abilities)
    }

    pub(crate) fn parse(
        content: &str,
        abilities: &[Ability],
    ) -> LoadResult<Vec<(String, EnemyTemplate)>> {
        let raw_data: Vec<(String, EnemyTemplateSpec)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        raw_data
            .into_iter()
            .map(|(enemy_id, spec)| {
                let template = spec.resolve(&enemy_id, abilities)?;
                Ok((enemy_id, template))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use battle_core::{AbilityCategory, AbilityEffect, TargetScope};

    use super::*;

    fn catalog() -> Vec<Ability> {
        vec![Ability::new(
            "segfault",
            "Segfault",
            AbilityCategory::Attack,
            5,
            AbilityEffect::new(TargetScope::SingleEnemy).with_damage(6),
        )]
    }

    #[test]
    fn resolves_ability_ids() {
        let enemies = EnemyLoader::parse(
            r#"[
                ("glitch", (name: "Glitch", max_hp: 30, attack: 6, defense: 2, speed: 9, exp_reward: 10)),
                ("daemon", (name: "Daemon", max_hp: 60, max_energy: 20, attack: 9, defense: 4,
                            speed: 5, abilities: ["segfault"], exp_reward: 25)),
            ]"#,
            &catalog(),
        )
        .unwrap();

        assert_eq!(enemies[0].0, "glitch");
        assert!(enemies[0].1.abilities.is_empty());
        assert_eq!(enemies[1].1.abilities, catalog());
        assert_eq!(enemies[1].1.max_energy, 20);
    }

    #[test]
    fn unknown_ability_is_an_error() {
        let error = EnemyLoader::parse(
            r#"[("daemon", (name: "Daemon", max_hp: 60, attack: 9, defense: 4, speed: 5,
                            abilities: ["kernel_panic"], exp_reward: 25))]"#,
            &catalog(),
        )
        .unwrap_err()
        .to_string();

        assert!(error.contains("kernel_panic"), "{error}");
    }
}
