//! Drop id generation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Produces a unique id for every dropped item instance.
pub trait DropIdOracle: Send + Sync {
    fn next_drop_id(&self, template_id: &str) -> String;
}

/// Counter-based ids of the form `<template>-<n>`.
#[derive(Debug, Default)]
pub struct SequentialDropIds {
    next: AtomicU64,
}

impl SequentialDropIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Resumes numbering, e.g. after loading a save that already holds drops.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl DropIdOracle for SequentialDropIds {
    fn next_drop_id(&self, template_id: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{template_id}-{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        let ids = SequentialDropIds::new();

        assert_eq!(ids.next_drop_id("health_potion"), "health_potion-1");
        assert_eq!(ids.next_drop_id("health_potion"), "health_potion-2");
        assert_eq!(ids.next_drop_id("debug_tool"), "debug_tool-3");
    }
}
