//! Event types for the flow topic.

use duel_core::{RoundOutcome, Side};
use serde::{Deserialize, Serialize};

use crate::session::MatchPhase;

/// Match lifecycle as seen by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlowEvent {
    PhaseChanged { frame: u64, phase: MatchPhase },
    RoundStarted { round: u8 },
    RoundEnded {
        frame: u64,
        outcome: RoundOutcome,
        rounds_won: [u8; 2],
    },
    MatchEnded { frame: u64, winner: Side },
}
