//! Archetype and attack tables.
//!
//! Per-archetype behaviour is pure data looked up through [`RosterOracle`];
//! nothing in the simulation branches on a concrete archetype.
mod archetype;
mod builtin;
mod moves;

pub use archetype::{ArchetypeDefinition, ArchetypeId, LocomotionTimelines};
pub use moves::{AttackDefinition, AttackStage, MoveHeight, MoveId, MoveStrength, Timeline};

use crate::error::RosterError;

/// Oracle providing archetype definitions.
pub trait RosterOracle: Send + Sync {
    fn archetype(&self, id: ArchetypeId) -> Option<&ArchetypeDefinition>;

    fn attack(&self, id: ArchetypeId, move_id: MoveId) -> Option<&AttackDefinition> {
        self.archetype(id)?.attack(move_id)
    }
}

/// Validated set of archetype definitions, at most one per id.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Roster {
    archetypes: Vec<ArchetypeDefinition>,
}

impl Roster {
    pub fn new(archetypes: Vec<ArchetypeDefinition>) -> Result<Self, RosterError> {
        for (index, definition) in archetypes.iter().enumerate() {
            definition.validate()?;
            if archetypes[..index].iter().any(|prior| prior.id == definition.id) {
                return Err(RosterError::DuplicateArchetype(definition.id));
            }
        }
        Ok(Self { archetypes })
    }

    /// The three shipped archetypes.
    pub fn builtin() -> Self {
        Self {
            archetypes: vec![builtin::priest(), builtin::thief(), builtin::fighter()],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArchetypeDefinition> {
        self.archetypes.iter()
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RosterOracle for Roster {
    fn archetype(&self, id: ArchetypeId) -> Option<&ArchetypeDefinition> {
        self.archetypes.iter().find(|definition| definition.id == id)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct RawRoster {
            archetypes: Vec<ArchetypeDefinition>,
        }

        let raw = RawRoster::deserialize(deserializer)?;
        Roster::new(raw.archetypes).map_err(serde::de::Error::custom)
    }
}
