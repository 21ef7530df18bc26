//! Archetype roster loader.

use std::path::Path;

use duel_core::Roster;

use crate::loaders::{LoadResult, read_file};

/// Loader for the archetype roster from RON files.
///
/// File format: `(archetypes: [ArchetypeDefinition, ...])`. Every archetype
/// and attack is validated while parsing; duplicate archetypes are rejected.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid roster {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Roster> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))
    }
}
