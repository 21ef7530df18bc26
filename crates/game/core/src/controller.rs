//! Per-combatant intent resolution.
//!
//! Each tick a combatant does at most one of: get up, guard-cancel, reserve a
//! combo, switch archetype, start an attack, or move. Requests that are not
//! legal in the current state are dropped without error.

use crate::env::MatchEnv;
use crate::error::SwitchError;
use crate::event::CombatEvent;
use crate::input::{InputSnapshot, MoveDirection};
use crate::roster::{ArchetypeDefinition, ArchetypeId, MoveId};
use crate::state::{ActionState, CombatFlags, Combatant};

/// Mutable view that applies one side's input.
pub struct ActionController<'a> {
    combatant: &'a mut Combatant,
}

impl<'a> ActionController<'a> {
    pub fn new(combatant: &'a mut Combatant) -> Self {
        Self { combatant }
    }

    pub fn update(
        &mut self,
        env: MatchEnv<'_>,
        input: &InputSnapshot,
        opponent_x: f32,
        dt: f32,
    ) -> Option<CombatEvent> {
        self.combatant.tick_counter_window(dt);
        self.combatant.stance = input.stance;

        if self.combatant.is_hit() {
            if input.getup && self.combatant.hit_state().try_get_up(&env.config.hit_reactions) {
                return Some(CombatEvent::GotUp {
                    side: self.combatant.side,
                });
            }
            return None;
        }

        let archetype = env.archetype(self.combatant.archetype)?;

        if self.combatant.is_guarding() {
            return self.guard_cancel(archetype, input);
        }

        if input.combo_confirm {
            if let Some(event) = self.reserve_combo() {
                return Some(event);
            }
        }

        if let Some(requested) = input.char_switch {
            return Some(self.switch_archetype(env, requested));
        }

        if self.combatant.is_attacking() {
            return None;
        }
        self.face(opponent_x);

        if let Some(move_id) = input.attack.filter(|id| archetype.can_use(*id)) {
            self.begin_attack(archetype, move_id);
            return Some(CombatEvent::AttackStarted {
                side: self.combatant.side,
                move_id,
            });
        }

        self.locomote(env, archetype, input.movement, opponent_x, dt);
        None
    }

    /// Drops the guard into the held attack, if it is legal for the archetype.
    ///
    /// Used both for player-initiated cancels and for the immediate counter
    /// after a successful guard.
    pub fn guard_cancel(
        &mut self,
        archetype: &ArchetypeDefinition,
        input: &InputSnapshot,
    ) -> Option<CombatEvent> {
        if !self.combatant.is_guarding() {
            return None;
        }
        let move_id = input.attack.filter(|id| archetype.can_use(*id))?;
        let counter = self.combatant.counter_window_open();
        self.begin_attack(archetype, move_id);
        Some(CombatEvent::GuardCancelled {
            side: self.combatant.side,
            move_id,
            counter,
        })
    }

    fn reserve_combo(&mut self) -> Option<CombatEvent> {
        let (move_id, stage) = self.combatant.action.current_attack()?;
        if !self.combatant.can_combo() || self.combatant.combo_reserved() {
            return None;
        }
        self.combatant.flags.insert(CombatFlags::COMBO_RESERVED);
        Some(CombatEvent::ComboReserved {
            side: self.combatant.side,
            move_id,
            stage,
        })
    }

    fn begin_attack(&mut self, archetype: &ArchetypeDefinition, move_id: MoveId) {
        let chainable = archetype
            .attack(move_id)
            .is_some_and(|attack| attack.opens_combo_window(1));
        let combatant = &mut *self.combatant;
        combatant.action = ActionState::attack(move_id, 1);
        combatant.flags.remove(CombatFlags::ATTACK);
        combatant.flags.set(CombatFlags::CAN_COMBO, chainable);
        combatant.clock.restart();
    }

    fn switch_archetype(
        &mut self,
        env: MatchEnv<'_>,
        requested: ArchetypeId,
    ) -> CombatEvent {
        let side = self.combatant.side;
        if !self.combatant.action.is_neutral() {
            return CombatEvent::SwitchRejected(SwitchError::NotNeutral { side });
        }
        if env.archetype(requested).is_none() {
            return CombatEvent::SwitchRejected(SwitchError::UnknownArchetype { side, requested });
        }
        let from = self.combatant.archetype;
        self.combatant.archetype = requested;
        self.combatant.action = ActionState::Idle;
        self.combatant.clock.restart();
        CombatEvent::ArchetypeSwitched {
            side,
            from,
            to: requested,
        }
    }

    fn face(&mut self, opponent_x: f32) {
        let combatant = &mut *self.combatant;
        combatant.facing = combatant
            .facing
            .toward(combatant.body.position.x, opponent_x);
    }

    fn locomote(
        &mut self,
        env: MatchEnv<'_>,
        archetype: &ArchetypeDefinition,
        movement: MoveDirection,
        opponent_x: f32,
        dt: f32,
    ) {
        let direction = match movement {
            MoveDirection::Left => -1.0,
            MoveDirection::Right => 1.0,
            MoveDirection::Up | MoveDirection::Down | MoveDirection::None => {
                self.combatant.action = ActionState::Idle;
                return;
            }
        };

        let toward = (opponent_x - self.combatant.body.position.x) * direction >= 0.0;
        let rules = &env.config.movement;
        let (state, multiplier) = if toward {
            (ActionState::Walk, rules.walk_multiplier)
        } else {
            (ActionState::BackWalk, rules.back_walk_multiplier)
        };

        let dx = archetype.move_speed * multiplier * dt * direction;
        self.combatant.body.walk(dx, &env.config.arena);
        self.combatant.action = state;
    }
}

impl Combatant {
    pub fn controller(&mut self) -> ActionController<'_> {
        ActionController::new(self)
    }
}
