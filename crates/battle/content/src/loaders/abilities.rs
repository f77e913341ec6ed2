//! Ability catalog loader.

use std::collections::HashSet;
use std::path::Path;

use battle_core::Ability;

use crate::loaders::{LoadResult, read_file};

/// Loader for ability catalogs from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load an ability catalog from a RON file.
    ///
    /// RON format: `Vec<Ability>`. Ability ids must be unique.
    pub fn load(path: &Path) -> LoadResult<Vec<Ability>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub(crate) fn parse(content: &str) -> LoadResult<Vec<Ability>> {
        let abilities: Vec<Ability> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        if let Some(duplicate) = abilities.iter().find(|a| !seen.insert(a.id.as_str())) {
            anyhow::bail!("Duplicate ability id '{}'", duplicate.id);
        }

        tracing::debug!(count = abilities.len(), "loaded ability catalog");
        Ok(abilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{AbilityCategory, StatusEffectKind, TargetScope};

    #[test]
    fn parses_all_target_scopes() {
        let abilities = AbilityLoader::parse(
            r#"[
                (
                    id: "firewall",
                    name: "Firewall",
                    category: buff,
                    energy_cost: 6,
                    effect: (status_effect: Some(optimized), duration: Some(2), target: self),
                ),
                (
                    id: "freeze_ray",
                    name: "Freeze Ray",
                    category: debuff,
                    energy_cost: 8,
                    effect: (status_effect: Some(frozen), target: singleEnemy),
                ),
                (
                    id: "fork_bomb",
                    name: "Fork Bomb",
                    category: attack,
                    energy_cost: 12,
                    effect: (damage: Some(4), target: allEnemies),
                ),
            ]"#,
        )
        .unwrap();

        assert_eq!(abilities.len(), 3);
        assert_eq!(abilities[0].category, AbilityCategory::Buff);
        assert_eq!(abilities[0].effect.target, TargetScope::Caster);
        assert_eq!(
            abilities[1].effect.status_effect,
            Some(StatusEffectKind::Frozen)
        );
        assert_eq!(abilities[1].effect.duration, None);
        assert_eq!(abilities[2].effect.target, TargetScope::AllEnemies);
        assert_eq!(abilities[2].effect.damage, Some(4));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = AbilityLoader::parse(
            r#"[
                (id: "patch", name: "Patch", category: heal, energy_cost: 4,
                 effect: (heal: Some(10), target: self)),
                (id: "patch", name: "Patch II", category: heal, energy_cost: 6,
                 effect: (heal: Some(20), target: self)),
            ]"#,
        );

        let error = result.unwrap_err().to_string();
        assert!(error.contains("Duplicate ability id 'patch'"), "{error}");
    }
}
