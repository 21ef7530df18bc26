//! Read-only data the engine needs on every tick.

use crate::config::CombatConfig;
use crate::roster::{ArchetypeDefinition, ArchetypeId, RosterOracle};

/// Bundles the roster oracle with the combat tunables.
#[derive(Clone, Copy)]
pub struct MatchEnv<'a> {
    pub roster: &'a dyn RosterOracle,
    pub config: &'a CombatConfig,
}

impl<'a> MatchEnv<'a> {
    pub fn new(roster: &'a dyn RosterOracle, config: &'a CombatConfig) -> Self {
        Self { roster, config }
    }

    pub fn archetype(&self, id: ArchetypeId) -> Option<&'a ArchetypeDefinition> {
        self.roster.archetype(id)
    }
}

impl core::fmt::Debug for MatchEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MatchEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
