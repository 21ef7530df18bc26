use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::error::RosterError;
use crate::roster::ArchetypeId;
use crate::state::Stance;

/// Attack identity: a button strength combined with a vertical height.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum MoveId {
    FastMiddle,
    FastLower,
    FastUpper,
    StrongMiddle,
    StrongUpper,
    StrongLower,
    Rage,
}

impl MoveId {
    pub const fn strength(self) -> MoveStrength {
        match self {
            Self::FastMiddle | Self::FastLower | Self::FastUpper => MoveStrength::Fast,
            Self::StrongMiddle | Self::StrongUpper | Self::StrongLower => MoveStrength::Strong,
            Self::Rage => MoveStrength::Rage,
        }
    }

    /// Vertical height of the move. Rage has none and cannot be guarded.
    pub const fn height(self) -> Option<MoveHeight> {
        match self {
            Self::FastUpper | Self::StrongUpper => Some(MoveHeight::Upper),
            Self::FastMiddle | Self::StrongMiddle => Some(MoveHeight::Middle),
            Self::FastLower | Self::StrongLower => Some(MoveHeight::Lower),
            Self::Rage => None,
        }
    }

    /// Stance a defender must hold to guard this move.
    pub const fn required_guard(self) -> Option<Stance> {
        match self.height() {
            Some(MoveHeight::Upper) => Some(Stance::High),
            Some(MoveHeight::Middle) => Some(Stance::Middle),
            Some(MoveHeight::Lower) => Some(Stance::Low),
            None => None,
        }
    }

    /// Lower moves launch grounded targets and may hit a downed one.
    pub const fn is_lower(self) -> bool {
        matches!(self.height(), Some(MoveHeight::Lower))
    }

    pub const fn from_parts(strength: MoveStrength, height: MoveHeight) -> Self {
        match (strength, height) {
            (MoveStrength::Rage, _) => Self::Rage,
            (MoveStrength::Fast, MoveHeight::Upper) => Self::FastUpper,
            (MoveStrength::Fast, MoveHeight::Middle) => Self::FastMiddle,
            (MoveStrength::Fast, MoveHeight::Lower) => Self::FastLower,
            (MoveStrength::Strong, MoveHeight::Upper) => Self::StrongUpper,
            (MoveStrength::Strong, MoveHeight::Middle) => Self::StrongMiddle,
            (MoveStrength::Strong, MoveHeight::Lower) => Self::StrongLower,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MoveStrength {
    Fast,
    Strong,
    Rage,
}

impl MoveStrength {
    /// Flat damage dealt by a clean hit of this strength.
    pub const fn base_damage(self) -> u32 {
        match self {
            Self::Fast => 10,
            Self::Strong => 20,
            Self::Rage => 30,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MoveHeight {
    Upper,
    Middle,
    Lower,
}

/// Frame count and total duration of one animated state.
///
/// Used for locomotion loops, attack stages, and the guard pose.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    pub frame_count: u8,
    pub duration: f32,
}

/// One stage of a combo chain.
pub type AttackStage = Timeline;

impl Timeline {
    pub const fn new(frame_count: u8, duration: f32) -> Self {
        Self {
            frame_count,
            duration,
        }
    }

    /// Builds a timeline from a sprite frame rate.
    pub fn at_fps(frame_count: u8, fps: f32) -> Self {
        Self::new(frame_count, frame_count as f32 / fps)
    }

    pub fn frame_time(&self) -> f32 {
        self.duration / self.frame_count.max(1) as f32
    }

    /// The single frame on which an attack stage may register its hit.
    pub const fn active_frame(&self) -> u8 {
        self.frame_count / 2
    }

    pub const fn last_frame(&self) -> u8 {
        self.frame_count.saturating_sub(1)
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.frame_count > 0 && self.duration > 0.0
    }
}

/// Static attack data for one archetype and move.
///
/// Stage `n + 1` is the combo successor of stage `n`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackDefinition {
    pub id: MoveId,
    pub damage: u32,
    /// Whether the first stage opens a combo-confirm window.
    pub chainable: bool,
    /// Scales the strength reach for this move only.
    #[cfg_attr(feature = "serde", serde(default = "default_reach_multiplier"))]
    pub reach_multiplier: f32,
    pub stages: ArrayVec<AttackStage, { CombatConfig::MAX_STAGES }>,
}

#[cfg(feature = "serde")]
fn default_reach_multiplier() -> f32 {
    1.0
}

impl AttackDefinition {
    /// Single-stage, non-chainable attack with the strength's base damage.
    pub fn single(id: MoveId, stage: AttackStage) -> Self {
        let mut stages = ArrayVec::new();
        stages.push(stage);
        Self {
            id,
            damage: id.strength().base_damage(),
            chainable: false,
            reach_multiplier: 1.0,
            stages,
        }
    }

    /// Chainable attack whose stages follow each other on combo confirm.
    ///
    /// Stages beyond `CombatConfig::MAX_STAGES` are dropped.
    pub fn chain(id: MoveId, stages: &[AttackStage]) -> Self {
        Self {
            id,
            damage: id.strength().base_damage(),
            chainable: true,
            reach_multiplier: 1.0,
            stages: stages.iter().copied().take(CombatConfig::MAX_STAGES).collect(),
        }
    }

    pub fn with_reach_multiplier(mut self, multiplier: f32) -> Self {
        self.reach_multiplier = multiplier;
        self
    }

    pub fn with_chainable(mut self, chainable: bool) -> Self {
        self.chainable = chainable;
        self
    }

    /// Looks up a 1-based stage.
    pub fn stage(&self, stage: u8) -> Option<&AttackStage> {
        let index = usize::from(stage).checked_sub(1)?;
        self.stages.get(index)
    }

    pub fn has_successor(&self, stage: u8) -> bool {
        usize::from(stage) < self.stages.len()
    }

    /// Whether entering `stage` leaves a combo window open.
    ///
    /// Stage 1 follows the `chainable` flag; later stages stay chainable
    /// while a further stage exists.
    pub fn opens_combo_window(&self, stage: u8) -> bool {
        if stage <= 1 {
            self.chainable
        } else {
            self.has_successor(stage)
        }
    }

    pub fn validate(&self, archetype: ArchetypeId) -> Result<(), RosterError> {
        if self.stages.is_empty() {
            return Err(RosterError::NoStages {
                archetype,
                move_id: self.id,
            });
        }
        for (index, stage) in self.stages.iter().enumerate() {
            let stage_number = index as u8 + 1;
            if stage.frame_count == 0 {
                return Err(RosterError::ZeroFrames {
                    archetype,
                    move_id: self.id,
                    stage: stage_number,
                });
            }
            if !stage.is_valid() {
                return Err(RosterError::NonPositiveDuration {
                    archetype,
                    move_id: self.id,
                    stage: stage_number,
                    duration: stage.duration,
                });
            }
        }
        Ok(())
    }
}
