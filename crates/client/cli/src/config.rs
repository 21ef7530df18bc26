//! Runner configuration from the process environment.
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub scenario: Option<PathBuf>,
    pub content_dir: Option<PathBuf>,
    pub realtime: bool,
    pub max_frames: Option<u64>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_SCENARIO` - Scenario file to replay (default: built-in demo)
    /// - `DUEL_CONTENT_DIR` - Directory holding `combat.toml` and `roster.ron`
    ///   (default: shipped content)
    /// - `DUEL_REALTIME` - Pace frames by the wall clock (default: false)
    /// - `DUEL_MAX_FRAMES` - Step cap overriding the scenario's own
    pub fn from_env() -> Self {
        let mut config = Self {
            scenario: env::var_os("DUEL_SCENARIO").map(PathBuf::from),
            content_dir: env::var_os("DUEL_CONTENT_DIR").map(PathBuf::from),
            max_frames: read_env::<u64>("DUEL_MAX_FRAMES"),
            ..Self::default()
        };

        if let Some(enable) = read_env::<bool>("DUEL_REALTIME") {
            config.realtime = enable;
        } else if env::var("DUEL_REALTIME").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.realtime = true;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
