//! Frame timing for every action state.
//!
//! The clock turns elapsed time into a frame index and raises the two edges
//! combat cares about: the active frame of an attack (the single tick on which
//! its hit may register) and cycle completion (combo continuation, guard
//! release, hit recovery). Locomotion simply loops.

use crate::config::CombatConfig;
use crate::roster::{ArchetypeDefinition, Timeline};
use crate::state::{ActionState, CombatFlags, Combatant, HitKind};

/// Frame cursor for the combatant's current action state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationClock {
    /// State the cursor belongs to. `None` forces a fresh start next tick.
    tracked: Option<ActionState>,
    frame: u8,
    timer: f32,
}

impl AnimationClock {
    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Rewinds to frame 0; the next tick re-enters it.
    pub fn restart(&mut self) {
        self.tracked = None;
        self.frame = 0;
        self.timer = 0.0;
    }

    /// Moves the cursor without treating it as a state change.
    pub fn jump_to(&mut self, frame: u8) {
        self.frame = frame;
        self.timer = 0.0;
    }

    fn begin(&mut self, state: ActionState) {
        self.tracked = Some(state);
        self.frame = 0;
        self.timer = 0.0;
    }
}

/// Edge raised while advancing the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockEdge {
    /// Attack active frame entered; the resolver may register the hit.
    ActiveFrame,
    /// A reserved combo moved the attack to `stage`.
    ComboAdvanced { stage: u8 },
    AttackFinished,
    GuardReleased,
    Recovered(HitKind),
    /// Lying frame reached; get-up input is now accepted.
    GetUpArmed,
}

/// Timeline driving `state`, or `None` when the data is missing.
pub fn timeline_for(
    state: ActionState,
    archetype: &ArchetypeDefinition,
    config: &CombatConfig,
) -> Option<Timeline> {
    match state {
        ActionState::Idle => Some(archetype.locomotion.idle),
        ActionState::Walk => Some(archetype.locomotion.walk),
        ActionState::BackWalk => Some(archetype.locomotion.back_walk),
        ActionState::Guard => Some(Timeline::new(
            config.guard.frame_count,
            config.guard.duration,
        )),
        ActionState::Hit(kind) => {
            let profile = config.hit_reactions.profile(kind);
            Some(Timeline::new(profile.frame_count, profile.duration))
        }
        ActionState::Attack { move_id, stage } => {
            archetype.attack(move_id)?.stage(stage).copied()
        }
    }
    .filter(|timeline| timeline.frame_count > 0)
}

/// Advances one combatant's clock by `dt`, applying cycle-complete transitions.
///
/// At most one frame step happens per call. A state without timeline data
/// holds its current frame.
pub fn advance(
    combatant: &mut Combatant,
    archetype: &ArchetypeDefinition,
    config: &CombatConfig,
    dt: f32,
) -> Option<ClockEdge> {
    combatant.flags.remove(CombatFlags::CAN_PROCESS_HIT);

    let state = combatant.action;
    let timeline = timeline_for(state, archetype, config)?;

    if combatant.clock.tracked != Some(state) {
        combatant.clock.begin(state);
        return enter_frame(combatant, archetype, config, 0);
    }

    if is_holding(combatant) {
        return None;
    }

    combatant.clock.timer += dt;
    if combatant.clock.timer < timeline.frame_time() {
        return None;
    }
    combatant.clock.timer = 0.0;

    let next = combatant.clock.frame.saturating_add(1);
    if next < timeline.frame_count {
        combatant.clock.frame = next;
        return enter_frame(combatant, archetype, config, next);
    }
    complete_cycle(combatant, archetype, config)
}

/// Launched combatants freeze until landing; knocked-down ones wait at the
/// lying frame for get-up input.
fn is_holding(combatant: &Combatant) -> bool {
    match combatant.action {
        ActionState::Hit(HitKind::Airborne) => true,
        ActionState::Hit(kind) if kind.requires_get_up() => combatant.can_get_up(),
        _ => false,
    }
}

fn enter_frame(
    combatant: &mut Combatant,
    archetype: &ArchetypeDefinition,
    config: &CombatConfig,
    frame: u8,
) -> Option<ClockEdge> {
    match combatant.action {
        ActionState::Attack { move_id, stage } => {
            let active = archetype.attack(move_id)?.stage(stage)?.active_frame();
            if frame == active {
                combatant.flags.insert(CombatFlags::CAN_PROCESS_HIT);
                return Some(ClockEdge::ActiveFrame);
            }
            None
        }
        ActionState::Hit(kind) if kind.requires_get_up() => {
            if frame == config.hit_reactions.profile(kind).lying_frame() {
                combatant.flags.insert(CombatFlags::CAN_GET_UP);
                return Some(ClockEdge::GetUpArmed);
            }
            None
        }
        _ => None,
    }
}

fn complete_cycle(
    combatant: &mut Combatant,
    archetype: &ArchetypeDefinition,
    config: &CombatConfig,
) -> Option<ClockEdge> {
    match combatant.action {
        ActionState::Idle | ActionState::Walk | ActionState::BackWalk => {
            combatant.clock.frame = 0;
            None
        }
        ActionState::Guard => {
            settle(combatant, ActionState::Idle);
            Some(ClockEdge::GuardReleased)
        }
        ActionState::Hit(kind) => {
            combatant.flags.remove(CombatFlags::CAN_GET_UP);
            settle(combatant, ActionState::Idle);
            Some(ClockEdge::Recovered(kind))
        }
        ActionState::Attack { move_id, stage } => {
            let successor = archetype
                .attack(move_id)
                .filter(|attack| combatant.combo_reserved() && attack.has_successor(stage))
                .map(|attack| (stage + 1, attack.opens_combo_window(stage + 1)));

            let Some((next, window)) = successor else {
                combatant.flags.remove(CombatFlags::ATTACK);
                settle(combatant, ActionState::Idle);
                return Some(ClockEdge::AttackFinished);
            };
            combatant
                .flags
                .remove(CombatFlags::COMBO_RESERVED | CombatFlags::ATTACK_HIT_PROCESSED);
            combatant.flags.set(CombatFlags::CAN_COMBO, window);
            settle(combatant, ActionState::attack(move_id, next));
            enter_frame(combatant, archetype, config, 0);
            Some(ClockEdge::ComboAdvanced { stage: next })
        }
    }
}

/// Switches state and starts its clock in the same tick.
fn settle(combatant: &mut Combatant, state: ActionState) {
    combatant.action = state;
    combatant.clock.begin(state);
}
