//! Match flow around the combat core.
//!
//! ```text
//! Countdown ──(elapsed)──► Fighting ──(round over)──► KnockOut
//!     ▲                                                  │
//!     └────────── reset_round ◄──(match continues)───────┤
//!                                                        └──(match won)──► MatchOver
//! ```
//!
//! The engine does not tick during the countdown. During the knockout delay
//! it keeps ticking with neutral input so launched bodies land and settle.

use duel_core::{
    ArchetypeId, CombatConfig, FrameInputs, MatchEngine, MatchEnv, MatchState, RoundOutcome, Side,
    TickReport,
};
use serde::{Deserialize, Serialize};

use crate::events::FlowEvent;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchPhase {
    Countdown { remaining: f32 },
    Fighting,
    KnockOut { remaining: f32 },
    MatchOver { winner: Side },
}

impl MatchPhase {
    pub fn is_fighting(&self) -> bool {
        matches!(self, Self::Fighting)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Self::MatchOver { .. })
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Countdown { .. } => "countdown",
            Self::Fighting => "fighting",
            Self::KnockOut { .. } => "knock_out",
            Self::MatchOver { .. } => "match_over",
        }
    }
}

/// Result of one session step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStep {
    /// Present when the engine ticked.
    pub report: Option<TickReport>,
    pub flow: Vec<FlowEvent>,
}

/// Owns the match state and the phase it is in.
#[derive(Debug, Clone)]
pub struct MatchSession {
    state: MatchState,
    phase: MatchPhase,
    fighting_frames: u64,
}

impl MatchSession {
    pub fn new(archetypes: [ArchetypeId; 2], config: &CombatConfig) -> Self {
        Self {
            state: MatchState::new(archetypes, config),
            phase: MatchPhase::Countdown {
                remaining: config.rounds.countdown,
            },
            fighting_frames: 0,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Frames spent in the fighting phase; the index input providers see.
    pub fn fighting_frames(&self) -> u64 {
        self.fighting_frames
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Advances the session by `dt` seconds.
    ///
    /// `inputs` are only applied while fighting.
    pub fn step(&mut self, env: MatchEnv<'_>, inputs: &FrameInputs, dt: f32) -> SessionStep {
        let dt = env.config.timing.clamp_dt(dt);
        let mut step = SessionStep::default();

        match self.phase {
            MatchPhase::Countdown { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.enter(MatchPhase::Fighting, &mut step);
                } else {
                    self.phase = MatchPhase::Countdown { remaining };
                }
            }
            MatchPhase::Fighting => {
                self.fighting_frames += 1;
                let report = MatchEngine::new(&mut self.state).tick(env, inputs, dt);
                if let Some(outcome) = report.round_outcome() {
                    self.round_ended(outcome, &mut step);
                    self.enter(
                        MatchPhase::KnockOut {
                            remaining: env.config.rounds.ko_delay,
                        },
                        &mut step,
                    );
                }
                step.report = Some(report);
            }
            MatchPhase::KnockOut { remaining } => {
                let report = MatchEngine::new(&mut self.state).tick(env, &FrameInputs::NEUTRAL, dt);
                step.report = Some(report);

                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.phase = MatchPhase::KnockOut { remaining };
                } else if let Some(winner) = self.state.round.winner() {
                    step.flow.push(FlowEvent::MatchEnded {
                        frame: self.state.frame,
                        winner,
                    });
                    tracing::info!(%winner, frame = self.state.frame, "match over");
                    self.enter(MatchPhase::MatchOver { winner }, &mut step);
                } else {
                    self.state.reset_round(env.config);
                    let round = self.state.round.round_number;
                    tracing::info!(round, "round reset");
                    step.flow.push(FlowEvent::RoundStarted { round });
                    self.enter(
                        MatchPhase::Countdown {
                            remaining: env.config.rounds.countdown,
                        },
                        &mut step,
                    );
                }
            }
            MatchPhase::MatchOver { .. } => {}
        }
        step
    }

    fn round_ended(&self, outcome: RoundOutcome, step: &mut SessionStep) {
        let rounds_won = self.state.round.rounds_won;
        match outcome {
            RoundOutcome::Won(side) => {
                tracing::info!(winner = %side, ?rounds_won, "round over");
            }
            RoundOutcome::Draw => tracing::info!(?rounds_won, "round drawn by double knockout"),
        }
        step.flow.push(FlowEvent::RoundEnded {
            frame: self.state.frame,
            outcome,
            rounds_won,
        });
    }

    fn enter(&mut self, phase: MatchPhase, step: &mut SessionStep) {
        tracing::debug!(from = self.phase.label(), to = phase.label(), "phase change");
        self.phase = phase;
        step.flow.push(FlowEvent::PhaseChanged {
            frame: self.state.frame,
            phase,
        });
    }
}
