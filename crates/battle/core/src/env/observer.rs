//! Notifications to the owner of persistent state.

use crate::engine::BattleReport;
use crate::state::{EntityId, Item};

/// External state owner notified by the engine.
///
/// The engine calls `battle_ended` exactly once per battle, when it returns a
/// termination. `item_consumed` fires after an item was successfully used so
/// the inventory owner can remove it.
pub trait BattleObserver {
    fn item_consumed(&self, _player: EntityId, _item: &Item) {}

    fn battle_ended(&self, report: &BattleReport);
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl BattleObserver for NoopObserver {
    fn battle_ended(&self, _report: &BattleReport) {}
}
