//! Combat configuration loader.

use std::path::Path;

use duel_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat tunables from TOML files.
///
/// Omitted top-level sections fall back to their defaults; a section that is
/// present must be complete.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a `CombatConfig` from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid combat config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [rounds]
            max_hp = 150
            wins_needed = 3
            ko_delay = 1.8
            countdown = 3.0
            spawn_x = [400.0, 880.0]
            min_spawn_distance = 120.0
            "#,
        )
        .expect("partial config");

        assert_eq!(config.rounds.max_hp, 150);
        assert_eq!(config.rounds.wins_needed, 3);
        assert_eq!(config.arena, CombatConfig::default().arena);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let error = ConfigLoader::parse(
            r#"
            [timing]
            tick_rate_hz = 0
            max_frame_dt = 0.033
            "#,
        )
        .expect_err("zero tick rate");
        assert!(error.to_string().contains("tick_rate_hz"));
    }

    #[test]
    fn load_reports_path_on_failure() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[arena]\nwidth = \"wide\"").expect("write");

        let error = ConfigLoader::load(file.path()).expect_err("bad width");
        assert!(error.to_string().contains(&file.path().display().to_string()));
    }
}
