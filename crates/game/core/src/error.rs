//! Common error infrastructure for duel-core.
//!
//! Illegal action requests (attacking while hit, asking for a move the
//! archetype does not have) are not errors: the simulation ignores them.
//! The enums here cover the few places where a caller genuinely needs to
//! know something was refused: archetype switches, roster data, and
//! tunables.

use crate::roster::{ArchetypeId, MoveId};
use crate::state::{HitKind, Side};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the same request may succeed later.
    ///
    /// Examples: switching archetype mid-attack
    Recoverable,

    /// Invalid input that should not be retried unchanged.
    ///
    /// Examples: unknown archetype, malformed roster entry
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,

    /// Unrecoverable; the simulation cannot continue.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all duel-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Archetype switch refused; the combatant keeps its current archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwitchError {
    #[error("archetype {requested} is not defined in the roster")]
    UnknownArchetype { side: Side, requested: ArchetypeId },

    #[error("side {side} cannot switch archetype outside neutral state")]
    NotNeutral { side: Side },
}

impl GameError for SwitchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownArchetype { .. } => ErrorSeverity::Validation,
            Self::NotNeutral { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownArchetype { .. } => "SWITCH_UNKNOWN_ARCHETYPE",
            Self::NotNeutral { .. } => "SWITCH_NOT_NEUTRAL",
        }
    }
}

/// Invalid archetype or attack definition.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RosterError {
    #[error("{archetype} defines {move_id} more than once")]
    DuplicateMove {
        archetype: ArchetypeId,
        move_id: MoveId,
    },

    #[error("{archetype} {move_id} has no stages")]
    NoStages {
        archetype: ArchetypeId,
        move_id: MoveId,
    },

    #[error("{archetype} {move_id} stage {stage} has zero frames")]
    ZeroFrames {
        archetype: ArchetypeId,
        move_id: MoveId,
        stage: u8,
    },

    #[error("{archetype} {move_id} stage {stage} has non-positive duration {duration}")]
    NonPositiveDuration {
        archetype: ArchetypeId,
        move_id: MoveId,
        stage: u8,
        duration: f32,
    },

    #[error("{archetype} has non-positive move speed {speed}")]
    NonPositiveSpeed { archetype: ArchetypeId, speed: f32 },

    #[error("{archetype} locomotion timeline {timeline} is empty")]
    EmptyTimeline {
        archetype: ArchetypeId,
        timeline: &'static str,
    },

    #[error("roster defines {0} more than once")]
    DuplicateArchetype(ArchetypeId),
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateMove { .. } => "ROSTER_DUPLICATE_MOVE",
            Self::NoStages { .. } => "ROSTER_NO_STAGES",
            Self::ZeroFrames { .. } => "ROSTER_ZERO_FRAMES",
            Self::NonPositiveDuration { .. } => "ROSTER_NON_POSITIVE_DURATION",
            Self::NonPositiveSpeed { .. } => "ROSTER_NON_POSITIVE_SPEED",
            Self::EmptyTimeline { .. } => "ROSTER_EMPTY_TIMELINE",
            Self::DuplicateArchetype(_) => "ROSTER_DUPLICATE_ARCHETYPE",
        }
    }
}

/// Invalid combat tunables.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("arena width {width} leaves no room inside edge margin {margin}")]
    ArenaTooNarrow { width: f32, margin: f32 },

    #[error("hit reaction {0} needs at least two frames and a positive duration")]
    InvalidHitReaction(HitKind),
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositive(_) => "CONFIG_NON_POSITIVE",
            Self::ArenaTooNarrow { .. } => "CONFIG_ARENA_TOO_NARROW",
            Self::InvalidHitReaction(_) => "CONFIG_INVALID_HIT_REACTION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_errors_classify_by_cause() {
        let busy = SwitchError::NotNeutral { side: Side::A };
        assert!(busy.severity().is_recoverable());
        assert_eq!(busy.error_code(), "SWITCH_NOT_NEUTRAL");

        let unknown = SwitchError::UnknownArchetype {
            side: Side::B,
            requested: ArchetypeId::Thief,
        };
        assert_eq!(unknown.severity(), ErrorSeverity::Validation);
        assert!(!unknown.severity().is_internal());
    }

    #[test]
    fn roster_error_messages_name_the_move() {
        let err = RosterError::ZeroFrames {
            archetype: ArchetypeId::Fighter,
            move_id: MoveId::FastLower,
            stage: 1,
        };
        assert_eq!(err.to_string(), "fighter fast_lower stage 1 has zero frames");
    }
}
