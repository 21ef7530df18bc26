//! Canonical match state.
//!
//! [`MatchState`] owns both combatants and the round bookkeeping. It is
//! passed explicitly through every update; nothing in the crate keeps
//! module-level mutable state.
mod action;
mod combatant;

pub use action::{ActionState, Facing, HitKind, Stance};
pub use combatant::{CombatFlags, Combatant};

use crate::config::CombatConfig;
use crate::roster::ArchetypeId;
use crate::round::RoundMatch;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// A starts on the left facing right; B mirrors it.
    pub const fn initial_facing(self) -> Facing {
        match self {
            Self::A => Facing::Right,
            Self::B => Facing::Left,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub combatants: [Combatant; 2],
    pub round: RoundMatch,
    /// Number of engine ticks applied since the match started.
    pub frame: u64,
}

impl MatchState {
    pub fn new(archetypes: [ArchetypeId; 2], config: &CombatConfig) -> Self {
        let [a, b] = archetypes;
        let mut state = Self {
            combatants: [
                Combatant::spawn(Side::A, a, config.rounds.spawn_x[0], config),
                Combatant::spawn(Side::B, b, config.rounds.spawn_x[1], config),
            ],
            round: RoundMatch::new(config.rounds.wins_needed),
            frame: 0,
        };
        state.place_at_spawn(config);
        state
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    /// Mutable access to a combatant and its opponent at once.
    pub fn split_mut(&mut self, side: Side) -> (&mut Combatant, &mut Combatant) {
        let [a, b] = &mut self.combatants;
        match side {
            Side::A => (a, b),
            Side::B => (b, a),
        }
    }

    pub fn hp(&self) -> [u32; 2] {
        [self.combatants[0].hp(), self.combatants[1].hp()]
    }

    /// Restores HP, spawn positions, and neutral state for the next round.
    ///
    /// Round scores are kept; the pre-round countdown is the caller's job.
    pub fn reset_round(&mut self, config: &CombatConfig) {
        for (combatant, x) in self.combatants.iter_mut().zip(config.rounds.spawn_x) {
            combatant.reset_for_round(x, config);
        }
        self.place_at_spawn(config);
        self.round.begin_next_round();
    }

    /// Enforces the minimum spawn separation, then clamps both to the arena.
    fn place_at_spawn(&mut self, config: &CombatConfig) {
        let arena = &config.arena;
        let min_distance = config.rounds.min_spawn_distance;
        let [a, b] = &mut self.combatants;

        let gap = (b.body.position.x - a.body.position.x).abs();
        if gap < min_distance {
            let centre = (a.body.position.x + b.body.position.x) / 2.0;
            // Keep the configured left/right order; ties put A on the left.
            let a_side = if a.body.position.x <= b.body.position.x {
                -1.0
            } else {
                1.0
            };
            a.body.position.x = centre + a_side * min_distance / 2.0;
            b.body.position.x = centre - a_side * min_distance / 2.0;
        }
        a.body.position.x = arena.clamp_x(a.body.position.x);
        b.body.position.x = arena.clamp_x(b.body.position.x);
    }

    /// SHA-256 over the bincode encoding of the full state.
    #[cfg(feature = "serde")]
    pub fn compute_state_root(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        // Encoding plain structs into a Vec cannot fail.
        if let Ok(bytes) = bincode::serialize(self) {
            hasher.update(&bytes);
        }
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HitKind;

    #[test]
    fn new_match_spawns_apart_and_facing_each_other() {
        let config = CombatConfig::default();
        let state = MatchState::new([ArchetypeId::Priest, ArchetypeId::Fighter], &config);
        let a = state.combatant(Side::A);
        let b = state.combatant(Side::B);
        assert_eq!(a.body.position.x, 400.0);
        assert_eq!(b.body.position.x, 880.0);
        assert_eq!(a.facing, Facing::Right);
        assert_eq!(b.facing, Facing::Left);
        assert_eq!(state.hp(), [100, 100]);
    }

    #[test]
    fn close_spawns_are_pushed_to_minimum_distance() {
        let mut config = CombatConfig::default();
        config.rounds.spawn_x = [600.0, 640.0];
        let state = MatchState::new([ArchetypeId::Thief, ArchetypeId::Thief], &config);
        let gap = state.combatant(Side::B).body.position.x - state.combatant(Side::A).body.position.x;
        assert!((gap - 120.0).abs() < 1e-3);
    }

    #[test]
    fn close_spawns_keep_their_left_right_order() {
        let mut config = CombatConfig::default();
        config.rounds.spawn_x = [700.0, 650.0];
        let state = MatchState::new([ArchetypeId::Thief, ArchetypeId::Thief], &config);
        let a = state.combatant(Side::A).body.position.x;
        let b = state.combatant(Side::B).body.position.x;
        assert!((a - 735.0).abs() < 1e-3);
        assert!((b - 615.0).abs() < 1e-3);
    }

    #[test]
    fn reset_round_clears_combat_state() {
        let config = CombatConfig::default();
        let mut state = MatchState::new([ArchetypeId::Thief, ArchetypeId::Fighter], &config);
        {
            let a = state.combatant_mut(Side::A);
            a.hp = 10;
            a.action = ActionState::Hit(HitKind::Down);
            a.flags.insert(CombatFlags::CAN_GET_UP);
            a.body.apply_impulse(100.0, 300.0, 0.0);
            a.body.position.x = 900.0;
        }
        state.round.check_round_end(0, 50);

        state.reset_round(&config);

        let a = state.combatant(Side::A);
        assert_eq!(a.hp(), 100);
        assert_eq!(a.action, ActionState::Idle);
        assert!(a.flags.is_empty());
        assert!(a.body.grounded);
        assert_eq!(a.body.position.x, 400.0);
        assert!(!state.round.round_over);
        assert_eq!(state.round.rounds_won, [0, 1]);
    }

    #[test]
    fn split_mut_orders_self_then_opponent() {
        let config = CombatConfig::default();
        let mut state = MatchState::new([ArchetypeId::Priest, ArchetypeId::Thief], &config);
        let (me, them) = state.split_mut(Side::B);
        assert_eq!(me.side, Side::B);
        assert_eq!(them.side, Side::A);
    }
}
