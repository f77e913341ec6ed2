//! Item catalog loader.

use std::path::Path;

use battle_core::ItemTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemTemplate>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    ///
    /// # Returns
    ///
    /// Returns a Vec of ItemTemplates.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemTemplate>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use battle_core::ItemEffect;

    use super::*;

    #[test]
    fn loads_catalog_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(items: [
                (id: "health_potion", name: "Health Potion", effect: RestoreHp(50)),
                (id: "map_fragment", name: "Map Fragment", effect: Utility("reveal_map")),
            ])"#
        )
        .unwrap();

        let items = ItemLoader::load(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].effect, ItemEffect::RestoreHp(50));
        assert_eq!(
            items[1].effect,
            ItemEffect::Utility("reveal_map".to_string())
        );
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.ron");

        let error = ItemLoader::load(&path).unwrap_err().to_string();
        assert!(error.contains("nope.ron"), "{error}");
    }
}
