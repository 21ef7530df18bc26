//! Deterministic two-combatant fighting simulation.
//!
//! `duel-core` defines the canonical combat rules (input resolution, hit
//! reactions, frame timing, hit arbitration, round scoring) as pure APIs with
//! no I/O. All state mutation flows through [`engine::MatchEngine`], which
//! reports every observable transition as a [`CombatEvent`] in its
//! [`TickReport`]. Archetype data is read through [`RosterOracle`] so the
//! same rules run against built-in or loaded rosters.
pub mod animation;
pub mod body;
pub mod combat;
pub mod config;
pub mod controller;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod hit;
pub mod input;
pub mod roster;
pub mod round;
pub mod state;

pub use animation::{AnimationClock, ClockEdge};
pub use body::{CombatantBody, Hitbox, Vec2};
pub use config::{
    ArenaConfig, BodyConfig, CombatConfig, GuardConfig, HitProfile, HitReactionConfig, Knockback,
    KnockbackConfig, MovementConfig, ReachConfig, RoundConfig, TimingConfig,
};
pub use controller::ActionController;
pub use engine::{MatchEngine, TickReport};
pub use env::MatchEnv;
pub use error::{ConfigError, ErrorSeverity, GameError, RosterError, SwitchError};
pub use event::CombatEvent;
pub use hit::{Blow, HitOutcome, HitStateMachine};
pub use input::{AttackButton, FrameInputs, InputSnapshot, MoveDirection, RawInput};
pub use roster::{
    ArchetypeDefinition, ArchetypeId, AttackDefinition, AttackStage, LocomotionTimelines,
    MoveHeight, MoveId, MoveStrength, Roster, RosterOracle, Timeline,
};
pub use round::{RoundMatch, RoundOutcome};
pub use state::{
    ActionState, CombatFlags, Combatant, Facing, HitKind, MatchState, Side, Stance,
};
