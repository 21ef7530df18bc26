//! Topic-based event bus for runtime events.
//!
//! Combat detail (hits, guards, combos, get-ups) and match flow (phases,
//! rounds, match end) are published on separate topics so consumers only
//! receive what they care about.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::FlowEvent;
