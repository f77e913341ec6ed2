//! Capabilities injected into the engine.
//!
//! Oracles expose configuration, randomness, drop id generation and the
//! external observer. The [`BattleEnv`] aggregate bundles them so the engine
//! can reach everything it needs without coupling to concrete implementations.
mod ids;
mod observer;
mod rng;

pub use ids::{DropIdOracle, SequentialDropIds};
pub use observer::{BattleObserver, NoopObserver};
pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};

use crate::config::BattleConfig;

/// Aggregates the read-only capabilities required by the engine.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    config: &'a BattleConfig,
    rng: &'a dyn RngOracle,
    drop_ids: &'a dyn DropIdOracle,
    observer: &'a dyn BattleObserver,
}

impl<'a> BattleEnv<'a> {
    pub fn new(
        config: &'a BattleConfig,
        rng: &'a dyn RngOracle,
        drop_ids: &'a dyn DropIdOracle,
        observer: &'a dyn BattleObserver,
    ) -> Self {
        Self {
            config,
            rng,
            drop_ids,
            observer,
        }
    }

    pub fn config(&self) -> &'a BattleConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn drop_ids(&self) -> &'a dyn DropIdOracle {
        self.drop_ids
    }

    pub fn observer(&self) -> &'a dyn BattleObserver {
        self.observer
    }
}

impl std::fmt::Debug for BattleEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
