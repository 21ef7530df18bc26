//! Hit reactions: damage intake, hit-kind tracking, and get-up gating.
//!
//! ```text
//! Neutral ─Fast──────▶ Hit(Fast) ─cycle complete─────────────────▶ Neutral
//! Neutral ─Strong────▶ Hit(Strong) ─lying frame─▶ wait ─get up───▶ Neutral
//! Neutral ─Lower─────▶ Hit(Airborne) ─landed─▶ Hit(Down) ─get up─▶ Neutral
//! ```

use crate::config::HitReactionConfig;
use crate::roster::MoveId;
use crate::state::{ActionState, CombatFlags, Combatant, HitKind};

/// A hit that passed range and guard checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blow {
    pub move_id: MoveId,
    pub damage: u32,
    pub kind: HitKind,
    pub attacker_x: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    Applied { remaining_hp: u32 },
    /// Target was already reacting to a hit this blow cannot interrupt.
    Ignored,
}

/// Mutable view over one combatant's hit reaction.
pub struct HitStateMachine<'a> {
    combatant: &'a mut Combatant,
}

impl<'a> HitStateMachine<'a> {
    pub fn new(combatant: &'a mut Combatant) -> Self {
        Self { combatant }
    }

    /// Whether a blow from `move_id` may land given the current reaction.
    pub fn accepts(&self, move_id: MoveId) -> bool {
        self.combatant.can_be_hit_by(move_id)
    }

    pub fn apply_hit(&mut self, blow: Blow) -> HitOutcome {
        if !self.accepts(blow.move_id) {
            return HitOutcome::Ignored;
        }
        if self.combatant.is_hit() {
            self.reset();
        }

        let combatant = &mut *self.combatant;
        combatant.hp = combatant.hp.saturating_sub(blow.damage);
        combatant.action = ActionState::Hit(blow.kind);
        combatant.flags.remove(CombatFlags::ATTACK | CombatFlags::CAN_GET_UP);
        combatant.facing = combatant
            .facing
            .toward(combatant.body.position.x, blow.attacker_x);
        combatant.clock.restart();

        HitOutcome::Applied {
            remaining_hp: combatant.hp,
        }
    }

    /// Jumps to the recovery frame if the combatant is lying and may get up.
    pub fn try_get_up(&mut self, reactions: &HitReactionConfig) -> bool {
        let Some(kind) = self.combatant.hit_kind() else {
            return false;
        };
        if !kind.requires_get_up() || !self.combatant.can_get_up() {
            return false;
        }
        self.combatant.flags.remove(CombatFlags::CAN_GET_UP);
        self.combatant
            .clock
            .jump_to(reactions.profile(kind).recovery_frame());
        true
    }

    /// Forces neutral regardless of timers.
    pub fn reset(&mut self) {
        let combatant = &mut *self.combatant;
        combatant.action = ActionState::Idle;
        combatant.flags.remove(CombatFlags::CAN_GET_UP | CombatFlags::ATTACK);
        combatant.clock.restart();
    }

    /// Body touched down: a launched combatant is now lying on the floor.
    pub fn on_landed(&mut self) -> bool {
        if self.combatant.hit_kind() != Some(HitKind::Airborne) {
            return false;
        }
        self.combatant.action = ActionState::Hit(HitKind::Down);
        true
    }
}

impl Combatant {
    /// Airborne targets can always be juggled; downed targets only by lower
    /// moves. Any other ongoing reaction ignores further hits.
    pub fn can_be_hit_by(&self, move_id: MoveId) -> bool {
        match self.action {
            ActionState::Hit(HitKind::Airborne) => true,
            ActionState::Hit(HitKind::Down) => move_id.is_lower(),
            ActionState::Hit(_) => false,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatConfig;
    use crate::roster::ArchetypeId;
    use crate::state::{Facing, Side};

    fn target() -> Combatant {
        Combatant::spawn(Side::B, ArchetypeId::Fighter, 600.0, &CombatConfig::default())
    }

    fn blow(move_id: MoveId, kind: HitKind) -> Blow {
        Blow {
            move_id,
            damage: move_id.strength().base_damage(),
            kind,
            attacker_x: 500.0,
        }
    }

    #[test]
    fn fast_hit_reduces_hp_and_sets_kind() {
        let mut combatant = target();
        let outcome = combatant
            .hit_state()
            .apply_hit(blow(MoveId::FastMiddle, HitKind::Fast));
        assert_eq!(outcome, HitOutcome::Applied { remaining_hp: 90 });
        assert_eq!(combatant.hit_kind(), Some(HitKind::Fast));
    }

    #[test]
    fn second_hit_ignored_unless_juggle_or_lower_on_down() {
        let mut combatant = target();
        combatant
            .hit_state()
            .apply_hit(blow(MoveId::StrongMiddle, HitKind::Strong));
        assert_eq!(
            combatant
                .hit_state()
                .apply_hit(blow(MoveId::FastMiddle, HitKind::Fast)),
            HitOutcome::Ignored
        );
        assert_eq!(combatant.hp(), 80);

        combatant.action = ActionState::Hit(HitKind::Airborne);
        assert!(matches!(
            combatant
                .hit_state()
                .apply_hit(blow(MoveId::FastMiddle, HitKind::Airborne)),
            HitOutcome::Applied { remaining_hp: 70 }
        ));

        combatant.action = ActionState::Hit(HitKind::Down);
        assert!(!combatant.hit_state().accepts(MoveId::StrongMiddle));
        assert!(combatant.hit_state().accepts(MoveId::StrongLower));
    }

    #[test]
    fn hp_saturates_at_zero() {
        let mut combatant = target();
        combatant.hp = 5;
        combatant
            .hit_state()
            .apply_hit(blow(MoveId::Rage, HitKind::Strong));
        assert_eq!(combatant.hp(), 0);
        assert!(combatant.is_ko());
    }

    #[test]
    fn get_up_requires_flag_and_knockdown_kind() {
        let reactions = HitReactionConfig::default();
        let mut combatant = target();
        combatant
            .hit_state()
            .apply_hit(blow(MoveId::FastMiddle, HitKind::Fast));
        combatant.flags.insert(CombatFlags::CAN_GET_UP);
        assert!(!combatant.hit_state().try_get_up(&reactions));

        combatant.hit_state().reset();
        combatant
            .hit_state()
            .apply_hit(blow(MoveId::StrongMiddle, HitKind::Strong));
        assert!(!combatant.hit_state().try_get_up(&reactions));

        combatant.flags.insert(CombatFlags::CAN_GET_UP);
        assert!(combatant.hit_state().try_get_up(&reactions));
        assert!(!combatant.can_get_up());
        assert_eq!(combatant.current_frame(), reactions.strong.recovery_frame());
    }

    #[test]
    fn landing_turns_airborne_into_down() {
        let mut combatant = target();
        combatant
            .hit_state()
            .apply_hit(blow(MoveId::FastLower, HitKind::Airborne));
        assert!(combatant.hit_state().on_landed());
        assert_eq!(combatant.hit_kind(), Some(HitKind::Down));
        assert!(!combatant.hit_state().on_landed());
    }

    #[test]
    fn victim_turns_toward_attacker() {
        let mut combatant = target();
        combatant.facing = Facing::Right;
        combatant
            .hit_state()
            .apply_hit(blow(MoveId::FastMiddle, HitKind::Fast));
        assert_eq!(combatant.facing, Facing::Left);
    }
}
