//! Combat tunables shared by every component of the simulation.
//!
//! All values are plain data with defaults matching the shipped game. The
//! runtime may replace them wholesale from `combat.toml`; call
//! [`CombatConfig::validate`] on anything that did not come from
//! [`CombatConfig::default`].

use crate::error::ConfigError;
use crate::roster::MoveStrength;
use crate::state::HitKind;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    pub arena: ArenaConfig,
    pub timing: TimingConfig,
    pub body: BodyConfig,
    pub movement: MovementConfig,
    pub reach: ReachConfig,
    pub guard: GuardConfig,
    pub hit_reactions: HitReactionConfig,
    pub knockback: KnockbackConfig,
    pub rounds: RoundConfig,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of attacks an archetype may define (one per `MoveId`).
    pub const MAX_MOVES: usize = 7;
    /// Maximum number of combo stages per attack.
    pub const MAX_STAGES: usize = 3;

    pub fn new() -> Self {
        Self {
            arena: ArenaConfig::default(),
            timing: TimingConfig::default(),
            body: BodyConfig::default(),
            movement: MovementConfig::default(),
            reach: ReachConfig::default(),
            guard: GuardConfig::default(),
            hit_reactions: HitReactionConfig::default(),
            knockback: KnockbackConfig::default(),
            rounds: RoundConfig::default(),
        }
    }

    /// Checks every tunable for values the simulation cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.tick_rate_hz == 0 {
            return Err(ConfigError::NonPositive("timing.tick_rate_hz"));
        }
        if !(self.timing.max_frame_dt > 0.0) {
            return Err(ConfigError::NonPositive("timing.max_frame_dt"));
        }
        if self.arena.width <= self.arena.edge_margin * 2.0 {
            return Err(ConfigError::ArenaTooNarrow {
                width: self.arena.width,
                margin: self.arena.edge_margin,
            });
        }
        if !(self.arena.gravity > 0.0) {
            return Err(ConfigError::NonPositive("arena.gravity"));
        }
        if !(self.body.half_width > 0.0) || !(self.body.height > 0.0) {
            return Err(ConfigError::NonPositive("body"));
        }
        if !(self.guard.duration > 0.0) || self.guard.frame_count == 0 {
            return Err(ConfigError::NonPositive("guard.duration"));
        }
        for kind in HitKind::ALL {
            let profile = self.hit_reactions.profile(kind);
            if profile.frame_count < 2 || !(profile.duration > 0.0) {
                return Err(ConfigError::InvalidHitReaction(kind));
            }
        }
        if self.rounds.max_hp == 0 {
            return Err(ConfigError::NonPositive("rounds.max_hp"));
        }
        if self.rounds.wins_needed == 0 {
            return Err(ConfigError::NonPositive("rounds.wins_needed"));
        }
        // A launch that never leaves the ground never lands, and an
        // airborne hit reaction only ends on landing.
        if !self.knockback.launch.is_launch() {
            return Err(ConfigError::NonPositive("knockback.launch.vy"));
        }
        if !self.knockback.juggle.is_launch() {
            return Err(ConfigError::NonPositive("knockback.juggle.vy"));
        }
        Ok(())
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Horizontal arena and vertical physics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaConfig {
    pub width: f32,
    /// Distance from either wall a body centre must keep.
    pub edge_margin: f32,
    pub ground_level: f32,
    /// Downward acceleration applied while airborne (px/s²).
    pub gravity: f32,
}

impl ArenaConfig {
    pub fn min_x(&self) -> f32 {
        self.edge_margin
    }

    pub fn max_x(&self) -> f32 {
        self.width - self.edge_margin
    }

    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(self.min_x(), self.max_x())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            edge_margin: 60.0,
            ground_level: 0.0,
            gravity: 1800.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingConfig {
    pub tick_rate_hz: u32,
    /// Upper bound on a single step; longer frames are truncated.
    pub max_frame_dt: f32,
}

impl TimingConfig {
    /// Fixed simulation step for deterministic runs.
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz.max(1) as f32
    }

    /// Truncates a raw frame delta to `[0, max_frame_dt]`. Non-finite input is 0.
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_finite() && dt > 0.0 {
            dt.min(self.max_frame_dt)
        } else {
            0.0
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60,
            max_frame_dt: 1.0 / 30.0,
        }
    }
}

/// Body hitbox, anchored at the feet and centred horizontally.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyConfig {
    pub half_width: f32,
    pub height: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            half_width: 40.0,
            height: 180.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementConfig {
    pub walk_multiplier: f32,
    pub back_walk_multiplier: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_multiplier: 1.0,
            back_walk_multiplier: 0.5,
        }
    }
}

/// Attack reach beyond the body edge, per move strength.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachConfig {
    pub fast: f32,
    pub strong: f32,
    pub rage: f32,
}

impl ReachConfig {
    pub fn for_strength(&self, strength: MoveStrength) -> f32 {
        match strength {
            MoveStrength::Fast => self.fast,
            MoveStrength::Strong => self.strong,
            MoveStrength::Rage => self.rage,
        }
    }
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self {
            fast: 60.0,
            strong: 90.0,
            rage: 150.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardConfig {
    pub duration: f32,
    pub frame_count: u8,
    /// Time after a successful guard during which an attack counts as a counter.
    pub counter_window: f32,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            duration: 0.9,
            frame_count: 2,
            counter_window: 0.25,
        }
    }
}

/// Animation length of one hit reaction.
///
/// The lying and recovery markers are derived from the frame count rather
/// than stored, so reactions with more or fewer frames stay consistent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitProfile {
    pub frame_count: u8,
    pub duration: f32,
}

impl HitProfile {
    pub const fn new(frame_count: u8, duration: f32) -> Self {
        Self {
            frame_count,
            duration,
        }
    }

    /// Frame at which a knocked-down combatant lies waiting for get-up input.
    pub fn lying_frame(&self) -> u8 {
        self.frame_count.saturating_sub(2)
    }

    /// Frame a successful get-up jumps to before the reaction completes.
    pub fn recovery_frame(&self) -> u8 {
        self.frame_count.saturating_sub(1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitReactionConfig {
    pub fast: HitProfile,
    pub strong: HitProfile,
    pub airborne: HitProfile,
    pub down: HitProfile,
}

impl HitReactionConfig {
    pub fn profile(&self, kind: HitKind) -> HitProfile {
        match kind {
            HitKind::Fast => self.fast,
            HitKind::Strong => self.strong,
            HitKind::Airborne => self.airborne,
            HitKind::Down => self.down,
        }
    }
}

impl Default for HitReactionConfig {
    fn default() -> Self {
        Self {
            fast: HitProfile::new(3, 0.3),
            strong: HitProfile::new(5, 0.75),
            airborne: HitProfile::new(2, 0.3),
            down: HitProfile::new(4, 0.6),
        }
    }
}

/// Velocity handed to a victim's body, pointing away from the attacker.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knockback {
    pub vx: f32,
    pub vy: f32,
    /// Horizontal deceleration (px/s²) applied until the body stops sliding.
    pub deceleration: f32,
}

impl Knockback {
    pub const fn new(vx: f32, vy: f32, deceleration: f32) -> Self {
        Self {
            vx,
            vy,
            deceleration,
        }
    }

    pub fn is_launch(&self) -> bool {
        self.vy > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnockbackConfig {
    pub fast: Knockback,
    pub strong: Knockback,
    pub launch: Knockback,
    pub juggle: Knockback,
}

impl Default for KnockbackConfig {
    fn default() -> Self {
        Self {
            fast: Knockback::new(150.0, 0.0, 900.0),
            strong: Knockback::new(260.0, 0.0, 900.0),
            launch: Knockback::new(180.0, 720.0, 120.0),
            juggle: Knockback::new(120.0, 520.0, 60.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundConfig {
    pub max_hp: u32,
    pub wins_needed: u8,
    /// Delay between a knockout and the next round (runtime-owned).
    pub ko_delay: f32,
    /// Pre-round countdown (runtime-owned).
    pub countdown: f32,
    /// Spawn x for side A and side B.
    pub spawn_x: [f32; 2],
    pub min_spawn_distance: f32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            max_hp: 100,
            wins_needed: 2,
            ko_delay: 1.8,
            countdown: 3.0,
            spawn_x: [400.0, 880.0],
            min_spawn_distance: 120.0,
        }
    }
}
