//! Frame-stepped match reducer.
//!
//! [`MatchEngine`] is the single entry point that mutates a [`MatchState`].
//! One call to [`MatchEngine::tick`] runs, in order: both controllers, body
//! integration and animation for side A then side B, body push-apart, one
//! resolver pass, and the round check. Ticks are atomic; nothing observes a
//! half-applied frame.

use crate::animation::{self, ClockEdge};
use crate::combat::{collision, resolver};
use crate::env::MatchEnv;
use crate::event::CombatEvent;
use crate::input::{FrameInputs, InputSnapshot};
use crate::round::RoundOutcome;
use crate::state::{ActionState, MatchState, Side};

/// Everything observable that happened during one tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// Frame number the tick produced.
    pub frame: u64,
    pub events: Vec<CombatEvent>,
}

impl TickReport {
    pub fn round_outcome(&self) -> Option<RoundOutcome> {
        self.events.iter().find_map(|event| match event {
            CombatEvent::RoundOver(outcome) => Some(*outcome),
            _ => None,
        })
    }

    pub fn match_winner(&self) -> Option<Side> {
        self.events.iter().find_map(|event| match event {
            CombatEvent::MatchOver { winner } => Some(*winner),
            _ => None,
        })
    }
}

pub struct MatchEngine<'a> {
    state: &'a mut MatchState,
}

impl<'a> MatchEngine<'a> {
    pub fn new(state: &'a mut MatchState) -> Self {
        Self { state }
    }

    /// Advances the match by one frame.
    ///
    /// `dt` is clamped to `[0, max_frame_dt]`. Once the round is over, inputs
    /// are replaced by neutral ones and no further hits or round checks run,
    /// but bodies and animations keep settling.
    pub fn tick(&mut self, env: MatchEnv<'_>, inputs: &FrameInputs, dt: f32) -> TickReport {
        let dt = env.config.timing.clamp_dt(dt);
        let live = !self.state.round.round_over && !self.state.round.match_over;
        let inputs = if live { *inputs } else { FrameInputs::NEUTRAL };

        let mut events = Vec::new();
        for side in Side::BOTH {
            self.update_side(env, side, inputs.side(side), dt, &mut events);
        }

        let [a, b] = &mut self.state.combatants;
        collision::separate(a, b, env.config);

        if live {
            events.extend(resolver::resolve(self.state, env, &inputs));
            events.extend(self.check_round());
        }

        self.state.frame += 1;
        TickReport {
            frame: self.state.frame,
            events,
        }
    }

    fn update_side(
        &mut self,
        env: MatchEnv<'_>,
        side: Side,
        input: &InputSnapshot,
        dt: f32,
        events: &mut Vec<CombatEvent>,
    ) {
        let opponent_x = self.state.combatant(side.opponent()).body.position.x;
        let combatant = self.state.combatant_mut(side);

        events.extend(combatant.controller().update(env, input, opponent_x, dt));

        if combatant.body.integrate(dt, &env.config.arena) {
            events.push(CombatEvent::Landed { side });
            combatant.hit_state().on_landed();
        }

        let Some(archetype) = env.archetype(combatant.archetype) else {
            return;
        };
        let before = combatant.action;
        let edge = animation::advance(combatant, archetype, env.config, dt);
        events.extend(edge.and_then(|edge| clock_event(side, before, edge)));
    }

    fn check_round(&mut self) -> Vec<CombatEvent> {
        let [hp_a, hp_b] = self.state.hp();
        let round = &mut self.state.round;
        let mut events = Vec::new();
        if let Some(outcome) = round.check_round_end(hp_a, hp_b) {
            events.push(CombatEvent::RoundOver(outcome));
            if let Some(winner) = round.check_match_end() {
                events.push(CombatEvent::MatchOver { winner });
            }
        }
        events
    }
}

/// Translates a clock edge into the event it reports, if any.
fn clock_event(side: Side, before: ActionState, edge: ClockEdge) -> Option<CombatEvent> {
    match edge {
        ClockEdge::ActiveFrame => None,
        ClockEdge::ComboAdvanced { stage } => {
            let (move_id, _) = before.current_attack()?;
            Some(CombatEvent::ComboAdvanced {
                side,
                move_id,
                stage,
            })
        }
        ClockEdge::AttackFinished => {
            let (move_id, _) = before.current_attack()?;
            Some(CombatEvent::AttackFinished { side, move_id })
        }
        ClockEdge::GuardReleased => Some(CombatEvent::GuardReleased { side }),
        ClockEdge::Recovered(kind) => Some(CombatEvent::Recovered { side, kind }),
        ClockEdge::GetUpArmed => Some(CombatEvent::GetUpArmed { side }),
    }
}
