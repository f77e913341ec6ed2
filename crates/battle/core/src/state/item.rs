//! Consumable items as seen by the battle engine.
//!
//! The engine never stores inventory. Items are passed in by the caller when
//! used and handed back in the [`BattleReport`](crate::engine::BattleReport)
//! when dropped.

/// Effect of consuming an item during battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Restore health, clamped to max HP.
    RestoreHp(u32),

    /// Restore energy, clamped to max energy.
    RestoreEnergy(u32),

    /// Any effect the battle engine does not interpret (map tools, keys...).
    Utility(String),
}

/// Catalog entry from which concrete items are instantiated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub id: String,
    pub name: String,
    pub effect: ItemEffect,
}

impl ItemTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            effect,
        }
    }

    /// Creates a concrete item carrying a unique instance id.
    pub fn instantiate(&self, id: String) -> Item {
        Item {
            id,
            template: self.id.clone(),
            name: self.name.clone(),
            effect: self.effect.clone(),
        }
    }
}

/// A concrete item instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Unique per instance.
    pub id: String,
    /// Id of the [`ItemTemplate`] this item was created from.
    pub template: String,
    pub name: String,
    pub effect: ItemEffect,
}
