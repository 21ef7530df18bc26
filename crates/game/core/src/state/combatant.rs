use bitflags::bitflags;

use crate::animation::AnimationClock;
use crate::body::{CombatantBody, Hitbox};
use crate::config::CombatConfig;
use crate::hit::HitStateMachine;
use crate::roster::{ArchetypeId, MoveId};
use crate::state::{ActionState, Facing, HitKind, Side, Stance};

bitflags! {
    /// Transient combat permissions orthogonal to [`ActionState`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CombatFlags: u8 {
        /// The current attack stage accepts a combo confirm.
        const CAN_COMBO              = 1 << 0;
        /// A combo confirm arrived; the next stage starts at cycle complete.
        const COMBO_RESERVED         = 1 << 1;
        /// The current attack activation already registered its hit.
        const ATTACK_HIT_PROCESSED   = 1 << 2;
        /// Set only on the tick the active frame is entered.
        const CAN_PROCESS_HIT        = 1 << 3;
        /// Post-guard counter window is open.
        const CAN_ATTACK_AFTER_GUARD = 1 << 4;
        /// Lying frame reached; get-up input is accepted.
        const CAN_GET_UP             = 1 << 5;

        const ATTACK = Self::CAN_COMBO.bits()
            | Self::COMBO_RESERVED.bits()
            | Self::ATTACK_HIT_PROCESSED.bits()
            | Self::CAN_PROCESS_HIT.bits();
    }
}

/// One side of the match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub side: Side,
    pub archetype: ArchetypeId,
    pub body: CombatantBody,
    pub facing: Facing,
    pub action: ActionState,
    pub(crate) hp: u32,
    pub max_hp: u32,
    pub stance: Stance,
    pub flags: CombatFlags,
    /// Seconds left in the post-guard counter window.
    pub guard_counter_timer: f32,
    pub clock: AnimationClock,
}

impl Combatant {
    pub fn spawn(side: Side, archetype: ArchetypeId, x: f32, config: &CombatConfig) -> Self {
        Self {
            side,
            archetype,
            body: CombatantBody::grounded_at(x, config.arena.ground_level),
            facing: side.initial_facing(),
            action: ActionState::Idle,
            hp: config.rounds.max_hp,
            max_hp: config.rounds.max_hp,
            stance: Stance::Middle,
            flags: CombatFlags::empty(),
            guard_counter_timer: 0.0,
            clock: AnimationClock::default(),
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn is_ko(&self) -> bool {
        self.hp == 0
    }

    /// The only operation that raises HP. Clamped to `max_hp`.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp
    }

    pub fn is_attacking(&self) -> bool {
        self.action.is_attacking()
    }

    pub fn is_guarding(&self) -> bool {
        self.action.is_guarding()
    }

    pub fn is_hit(&self) -> bool {
        self.action.is_hit()
    }

    pub fn hit_kind(&self) -> Option<HitKind> {
        self.action.hit_kind()
    }

    pub fn is_airborne(&self) -> bool {
        !self.body.grounded
    }

    pub fn can_combo(&self) -> bool {
        self.flags.contains(CombatFlags::CAN_COMBO)
    }

    pub fn combo_reserved(&self) -> bool {
        self.flags.contains(CombatFlags::COMBO_RESERVED)
    }

    pub fn can_get_up(&self) -> bool {
        self.flags.contains(CombatFlags::CAN_GET_UP)
    }

    pub fn current_frame(&self) -> u8 {
        self.clock.frame()
    }

    /// True iff the stance matches the move's guard height and the combatant
    /// is free to block. Rage moves are never guardable.
    pub fn can_guard_against(&self, move_id: MoveId) -> bool {
        if self.is_attacking() || self.is_hit() {
            return false;
        }
        move_id.required_guard() == Some(self.stance)
    }

    pub fn hit_state(&mut self) -> HitStateMachine<'_> {
        HitStateMachine::new(self)
    }

    pub fn hitbox(&self, config: &CombatConfig) -> Hitbox {
        self.body.hitbox(&config.body)
    }

    /// Restores the pre-round condition at `x`.
    pub fn reset_for_round(&mut self, x: f32, config: &CombatConfig) {
        self.max_hp = config.rounds.max_hp;
        self.hp = self.max_hp;
        self.body = CombatantBody::grounded_at(x, config.arena.ground_level);
        self.facing = self.side.initial_facing();
        self.stance = Stance::Middle;
        self.flags = CombatFlags::empty();
        self.guard_counter_timer = 0.0;
        self.hit_state().reset();
    }

    /// Opens the post-guard counter window.
    pub(crate) fn open_counter_window(&mut self, window: f32) {
        self.flags.insert(CombatFlags::CAN_ATTACK_AFTER_GUARD);
        self.guard_counter_timer = window;
    }

    pub(crate) fn tick_counter_window(&mut self, dt: f32) {
        if !self.flags.contains(CombatFlags::CAN_ATTACK_AFTER_GUARD) {
            return;
        }
        self.guard_counter_timer -= dt;
        if self.guard_counter_timer <= 0.0 {
            self.guard_counter_timer = 0.0;
            self.flags.remove(CombatFlags::CAN_ATTACK_AFTER_GUARD);
        }
    }

    pub fn counter_window_open(&self) -> bool {
        self.flags.contains(CombatFlags::CAN_ATTACK_AFTER_GUARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Combatant {
        Combatant::spawn(Side::A, ArchetypeId::Thief, 400.0, &CombatConfig::default())
    }

    #[test]
    fn guard_requires_matching_stance_and_free_state() {
        let mut combatant = fresh();
        assert!(combatant.can_guard_against(MoveId::StrongMiddle));
        assert!(!combatant.can_guard_against(MoveId::FastUpper));
        assert!(!combatant.can_guard_against(MoveId::Rage));

        combatant.stance = Stance::Low;
        assert!(combatant.can_guard_against(MoveId::FastLower));

        combatant.action = ActionState::attack(MoveId::FastMiddle, 1);
        assert!(!combatant.can_guard_against(MoveId::FastLower));

        combatant.action = ActionState::Hit(HitKind::Fast);
        assert!(!combatant.can_guard_against(MoveId::FastLower));
    }

    #[test]
    fn heal_is_clamped_to_max() {
        let mut combatant = fresh();
        combatant.hp = 40;
        assert_eq!(combatant.heal(25), 65);
        assert_eq!(combatant.heal(500), combatant.max_hp);
    }

    #[test]
    fn counter_window_expires() {
        let mut combatant = fresh();
        combatant.open_counter_window(0.25);
        assert!(combatant.counter_window_open());
        combatant.tick_counter_window(0.2);
        assert!(combatant.counter_window_open());
        combatant.tick_counter_window(0.1);
        assert!(!combatant.counter_window_open());
        assert_eq!(combatant.guard_counter_timer, 0.0);
    }
}
