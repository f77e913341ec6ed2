//! Talent tree loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::talents::{Talent, TalentTree};

/// Talent catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentCatalog {
    pub talents: Vec<Talent>,

    /// Talents the player has unlocked, in unlock order.
    #[serde(default)]
    pub unlocked: Vec<String>,
}

/// Loader for talent trees from RON files.
pub struct TalentLoader;

impl TalentLoader {
    /// Load a talent tree and replay its unlocks.
    ///
    /// Unlocks are replayed in file order, so prerequisites must be listed
    /// before the talents that need them.
    pub fn load(path: &Path) -> LoadResult<TalentTree> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub(crate) fn parse(content: &str) -> LoadResult<TalentTree> {
        let catalog: TalentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse talent catalog RON: {}", e))?;

        let mut tree = TalentTree::new(catalog.talents);
        for id in &catalog.unlocked {
            tree.unlock(id)
                .map_err(|e| anyhow::anyhow!("Failed to replay talent unlocks: {}", e))?;
        }

        tracing::debug!(
            talents = tree.talents().len(),
            unlocked = catalog.unlocked.len(),
            "loaded talent tree"
        );
        Ok(tree)
    }
}
