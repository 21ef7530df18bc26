//! High-level runtime orchestrator.
//!
//! The runtime owns the loaded content, the match session, one input provider
//! per side, and the event bus. It exposes a builder-based API and drives the
//! session either headless (fixed delta, as fast as possible) or in real time
//! on a tokio interval.

use duel_content::GameContent;
use duel_core::{ArchetypeId, CombatConfig, CombatEvent, FrameInputs, MatchEnv, Side};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::api::{IdleInput, InputProvider, Result, RuntimeError};
use crate::clock::FrameClock;
use crate::events::{Event, EventBus, Topic};
use crate::scenario::Scenario;
use crate::session::{MatchPhase, MatchSession, SessionStep};

/// Runtime configuration shared across the orchestrator and the bus.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 256,
        }
    }
}

/// Where a run stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner: Option<Side>,
    pub rounds_won: [u8; 2],
    /// Engine frames simulated.
    pub frames: u64,
    pub final_hp: [u32; 2],
    /// Hex-encoded SHA-256 of the final match state.
    pub state_root: String,
}

/// Main runtime that drives one match.
pub struct Runtime {
    content: GameContent,
    session: MatchSession,
    providers: [Box<dyn InputProvider>; 2],
    bus: EventBus,
    clock: FrameClock,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Builds a runtime that replays `scenario` against `content`.
    pub fn from_scenario(scenario: &Scenario, content: GameContent) -> Result<Self> {
        scenario.validate(&content.roster)?;
        let [a, b] = scenario.providers();
        Self::builder()
            .content(content)
            .archetypes(scenario.archetypes())
            .provider(Side::A, a)
            .provider(Side::B, b)
            .build()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Subscribe to one topic of runtime events
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    pub fn config(&self) -> &CombatConfig {
        &self.content.config
    }

    /// Advances the match by `dt` seconds and publishes what happened.
    ///
    /// Providers are only polled while fighting.
    pub fn step(&mut self, dt: f32) -> MatchPhase {
        let inputs = if self.session.phase().is_fighting() {
            let frame = self.session.fighting_frames();
            let [a, b] = &mut self.providers;
            FrameInputs::new(a.poll(Side::A, frame), b.poll(Side::B, frame))
        } else {
            FrameInputs::NEUTRAL
        };

        let env = MatchEnv::new(&self.content.roster, &self.content.config);
        let step = self.session.step(env, &inputs, dt);
        self.publish(step);
        self.session.phase()
    }

    fn publish(&self, step: SessionStep) {
        if let Some(report) = step.report {
            for event in report.events {
                // Round and match ends reach the bus as flow events.
                if event.is_flow() {
                    continue;
                }
                match event {
                    CombatEvent::HitLanded { .. }
                    | CombatEvent::Guarded { .. }
                    | CombatEvent::ComboAdvanced { .. }
                    | CombatEvent::GuardCancelled { counter: true, .. } => {
                        tracing::debug!(frame = report.frame, ?event, "combat");
                    }
                    _ => tracing::trace!(frame = report.frame, ?event, "combat"),
                }
                self.bus.publish(Event::Combat {
                    frame: report.frame,
                    event,
                });
            }
        }
        for event in step.flow {
            tracing::debug!(?event, "flow event");
            self.bus.publish(Event::Flow(event));
        }
    }

    /// Runs with the fixed delta until the match ends or `max_frames` steps
    /// have been taken.
    pub fn run_headless(&mut self, max_frames: Option<u64>) -> MatchSummary {
        let dt = self.clock.fixed_dt();
        let mut steps = 0u64;
        while !self.session.is_over() && max_frames.is_none_or(|max| steps < max) {
            self.step(dt);
            steps += 1;
        }
        tracing::info!(steps, "headless run finished");
        self.summary()
    }

    /// Runs paced by the wall clock, feeding each step the measured delta.
    pub async fn run_realtime(&mut self, max_frames: Option<u64>) -> MatchSummary {
        let mut interval = self.clock.interval();
        self.clock.reset();
        let mut steps = 0u64;
        while !self.session.is_over() && max_frames.is_none_or(|max| steps < max) {
            let now = interval.tick().await;
            let dt = self.clock.measure(now);
            self.step(dt);
            steps += 1;
        }
        tracing::info!(steps, "real-time run finished");
        self.summary()
    }

    pub fn summary(&self) -> MatchSummary {
        let state = self.session.state();
        MatchSummary {
            winner: state.round.winner(),
            rounds_won: state.round.rounds_won,
            frames: state.frame,
            final_hp: state.hp(),
            state_root: hex::encode(state.compute_state_root()),
        }
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    content: Option<GameContent>,
    archetypes: [ArchetypeId; 2],
    providers: [Box<dyn InputProvider>; 2],
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            content: None,
            archetypes: [ArchetypeId::default(); 2],
            providers: [Box::new(IdleInput), Box::new(IdleInput)],
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required roster and tunables
    pub fn content(mut self, content: GameContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn archetypes(mut self, archetypes: [ArchetypeId; 2]) -> Self {
        self.archetypes = archetypes;
        self
    }

    /// Set the input provider for one side; unset sides stay idle.
    pub fn provider(mut self, side: Side, provider: impl InputProvider + 'static) -> Self {
        self.providers[side.index()] = Box::new(provider);
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let content = self.content.ok_or(RuntimeError::MissingContent)?;
        content.config.validate()?;
        for archetype in self.archetypes {
            if content.roster.iter().all(|definition| definition.id != archetype) {
                return Err(RuntimeError::UnknownArchetype {
                    scenario: String::from("builder"),
                    archetype,
                });
            }
        }

        let session = MatchSession::new(self.archetypes, &content.config);
        let clock = FrameClock::new(content.config.timing);
        tracing::info!(a = %self.archetypes[0], b = %self.archetypes[1], "runtime built");

        Ok(Runtime {
            content,
            session,
            providers: self.providers,
            bus: EventBus::with_capacity(self.config.event_buffer_size),
            clock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::Roster;

    fn content() -> GameContent {
        GameContent {
            roster: Roster::builtin(),
            config: CombatConfig::default(),
        }
    }

    #[test]
    fn build_requires_content() {
        assert!(matches!(
            Runtime::builder().build(),
            Err(RuntimeError::MissingContent)
        ));
    }

    #[test]
    fn build_rejects_invalid_config() {
        let mut content = content();
        content.config.timing.tick_rate_hz = 0;
        assert!(matches!(
            Runtime::builder().content(content).build(),
            Err(RuntimeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn idle_match_never_ends_and_respects_frame_cap() {
        let mut runtime = Runtime::builder()
            .content(content())
            .archetypes([ArchetypeId::Thief, ArchetypeId::Fighter])
            .build()
            .expect("runtime");

        let summary = runtime.run_headless(Some(300));
        assert_eq!(summary.winner, None);
        assert_eq!(summary.final_hp, [100, 100]);
        assert_eq!(summary.state_root.len(), 64);
        assert!(summary.frames < 300);
    }
}
