//! Unified error types surfaced by the runtime API.
//!
//! Wraps content, scenario, and configuration failures so clients can bubble
//! them up with consistent context. Nothing that happens inside a running
//! match is an error; rejected requests are reported as combat events.
use std::path::PathBuf;

use duel_core::{ArchetypeId, ConfigError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to read scenario {path}")]
    ScenarioIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario")]
    ScenarioParse(#[from] ron::error::SpannedError),

    #[error("scenario '{scenario}' uses archetype {archetype}, which the roster does not define")]
    UnknownArchetype {
        scenario: String,
        archetype: ArchetypeId,
    },

    #[error("invalid combat config")]
    InvalidConfig(#[from] ConfigError),

    #[error("runtime requires content to be configured before building")]
    MissingContent,
}
