//! Content factory for building the roster and tunables from data files.

use std::path::{Path, PathBuf};

use duel_core::{CombatConfig, Roster};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};

/// Everything a match needs from disk.
#[derive(Clone, Debug)]
pub struct GameContent {
    pub roster: Roster,
    pub config: CombatConfig,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── combat.toml
/// └── roster.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the files shipped with this crate.
    pub fn shipped() -> Self {
        Self::new(crate::shipped_data_dir())
    }

    /// Load combat tunables from `combat.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("combat.toml"))
    }

    /// Load the archetype roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    pub fn load(&self) -> LoadResult<GameContent> {
        Ok(GameContent {
            roster: self.load_roster()?,
            config: self.load_config()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
