//! Scripted matches loaded from RON.
//!
//! A scenario names the archetype each side plays and the keys each side
//! holds over time:
//!
//! ```ron
//! (
//!     name: "jab exchange",
//!     max_frames: Some(1200),
//!     a: (archetype: Thief, inputs: [(frames: 30, keys: (right: true))]),
//!     b: (archetype: Priest, inputs: []),
//! )
//! ```

use std::path::Path;

use duel_core::{ArchetypeId, RosterOracle};
use serde::{Deserialize, Serialize};

use crate::api::{InputSpan, Result, RuntimeError, ScriptedInput};

/// One side of a scenario.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideScript {
    pub archetype: ArchetypeId,
    #[serde(default)]
    pub inputs: Vec<InputSpan>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Upper bound on session steps; `None` runs until the match ends.
    #[serde(default)]
    pub max_frames: Option<u64>,
    pub a: SideScript,
    pub b: SideScript,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ScenarioIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    pub fn archetypes(&self) -> [ArchetypeId; 2] {
        [self.a.archetype, self.b.archetype]
    }

    /// Checks that every archetype the scenario uses exists in `roster`.
    pub fn validate(&self, roster: &dyn RosterOracle) -> Result<()> {
        let switches = [&self.a, &self.b]
            .into_iter()
            .flat_map(|side| side.inputs.iter().filter_map(|span| span.keys.switch_to));
        for archetype in self.archetypes().into_iter().chain(switches) {
            if roster.archetype(archetype).is_none() {
                return Err(RuntimeError::UnknownArchetype {
                    scenario: self.name.clone(),
                    archetype,
                });
            }
        }
        Ok(())
    }

    /// Input providers replaying each side's script.
    pub fn providers(&self) -> [ScriptedInput; 2] {
        [
            ScriptedInput::new(self.a.inputs.clone()),
            ScriptedInput::new(self.b.inputs.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{ArchetypeDefinition, Roster};
    use std::io::Write;

    const JAB: &str = r#"
    (
        name: "jab",
        max_frames: Some(600),
        a: (
            archetype: Thief,
            inputs: [
                (frames: 20, keys: (right: true)),
                (frames: 1, keys: (fast: true, combo_press: true)),
            ],
        ),
        b: (archetype: Fighter),
    )
    "#;

    #[test]
    fn parses_sides_and_defaults() {
        let scenario = Scenario::parse(JAB).expect("valid scenario");
        assert_eq!(scenario.archetypes(), [ArchetypeId::Thief, ArchetypeId::Fighter]);
        assert_eq!(scenario.max_frames, Some(600));
        assert!(scenario.b.inputs.is_empty());

        let [a, b] = scenario.providers();
        assert_eq!(a.len(), 21);
        assert!(b.is_empty());
    }

    #[test]
    fn unknown_archetype_is_rejected() {
        let scenario = Scenario::parse(JAB).expect("valid scenario");
        let roster = Roster::new(
            Roster::builtin()
                .iter()
                .filter(|definition| definition.id != ArchetypeId::Fighter)
                .cloned()
                .collect::<Vec<ArchetypeDefinition>>(),
        )
        .expect("roster");

        let error = scenario.validate(&roster).expect_err("fighter missing");
        assert!(matches!(
            error,
            RuntimeError::UnknownArchetype {
                archetype: ArchetypeId::Fighter,
                ..
            }
        ));
        assert!(scenario.validate(&Roster::builtin()).is_ok());
    }

    #[test]
    fn load_reads_file_and_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{JAB}").expect("write");
        assert_eq!(
            Scenario::load(file.path()).expect("load").name,
            "jab".to_string()
        );

        assert!(matches!(
            Scenario::parse("(name: 3)"),
            Err(RuntimeError::ScenarioParse(_))
        ));
        assert!(matches!(
            Scenario::load(Path::new("/definitely/missing.ron")),
            Err(RuntimeError::ScenarioIo { .. })
        ));
    }
}
