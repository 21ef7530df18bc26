//! Data-driven content definitions and loaders.
//!
//! This crate ships the default content files and provides loaders for them:
//! - Archetype roster (data-driven via RON)
//! - Combat tunables (data-driven via TOML)
//!
//! Content is consumed through `duel_core::RosterOracle` and
//! `duel_core::CombatConfig`; it never appears in match state.

use std::path::{Path, PathBuf};

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, GameContent, LoadResult, RosterLoader};

/// Directory holding the content files that ship with this crate.
pub fn shipped_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
