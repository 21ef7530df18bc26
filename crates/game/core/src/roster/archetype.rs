use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::error::RosterError;
use crate::roster::{AttackDefinition, MoveId, Timeline};

/// Selectable character class.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArchetypeId {
    /// Slow, long-reaching strong attacks and the only rage move.
    #[default]
    Priest,
    /// Fast walker with two- and three-stage chains.
    Thief,
    /// Fast walker with the quickest jab chain.
    Fighter,
}

/// Looping animations played while not attacking, guarding, or hit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocomotionTimelines {
    pub idle: Timeline,
    pub walk: Timeline,
    pub back_walk: Timeline,
}

/// Archetypes are data: base speed, locomotion timing, and legal attacks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeDefinition {
    pub id: ArchetypeId,
    /// Horizontal walk speed in px/s before the walk/back-walk multiplier.
    pub move_speed: f32,
    pub locomotion: LocomotionTimelines,
    pub moves: ArrayVec<AttackDefinition, { CombatConfig::MAX_MOVES }>,
}

impl ArchetypeDefinition {
    pub fn attack(&self, move_id: MoveId) -> Option<&AttackDefinition> {
        self.moves.iter().find(|attack| attack.id == move_id)
    }

    pub fn can_use(&self, move_id: MoveId) -> bool {
        self.attack(move_id).is_some()
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        if !(self.move_speed > 0.0) {
            return Err(RosterError::NonPositiveSpeed {
                archetype: self.id,
                speed: self.move_speed,
            });
        }
        let timelines = [
            ("idle", self.locomotion.idle),
            ("walk", self.locomotion.walk),
            ("back_walk", self.locomotion.back_walk),
        ];
        for (name, timeline) in timelines {
            if !timeline.is_valid() {
                return Err(RosterError::EmptyTimeline {
                    archetype: self.id,
                    timeline: name,
                });
            }
        }
        for (index, attack) in self.moves.iter().enumerate() {
            attack.validate(self.id)?;
            if self.moves[..index].iter().any(|prior| prior.id == attack.id) {
                return Err(RosterError::DuplicateMove {
                    archetype: self.id,
                    move_id: attack.id,
                });
            }
        }
        Ok(())
    }
}
