//! Runtime orchestration for the deterministic combat simulation.
//!
//! This crate is the imperative shell around `duel-core`: it paces frames,
//! sources input, runs the match flow between rounds, and publishes what
//! happened. Consumers build a [`Runtime`], subscribe to the [`EventBus`],
//! and drive it headless or in real time.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes errors and the input provider abstraction
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`session`] runs countdown, knockout delay, and round resets
//! - [`clock`] clamps and paces frame deltas
//! - [`scenario`] loads scripted matches from RON
pub mod api;
pub mod clock;
pub mod events;
pub mod runtime;
pub mod scenario;
pub mod session;

pub use api::{IdleInput, InputProvider, InputSpan, Result, RuntimeError, ScriptedInput};
pub use clock::FrameClock;
pub use events::{Event, EventBus, FlowEvent, Topic};
pub use runtime::{MatchSummary, Runtime, RuntimeBuilder, RuntimeConfig};
pub use scenario::{Scenario, SideScript};
pub use session::{MatchPhase, MatchSession, SessionStep};
