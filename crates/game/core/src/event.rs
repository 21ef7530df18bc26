use crate::error::SwitchError;
use crate::roster::{ArchetypeId, MoveId};
use crate::round::RoundOutcome;
use crate::state::{HitKind, Side};

/// Observable transition produced by a tick.
///
/// The core never logs; the runtime turns these into traces and bus messages.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    AttackStarted {
        side: Side,
        move_id: MoveId,
    },
    /// Guard dropped straight into an attack. `counter` is set inside the
    /// post-guard window.
    GuardCancelled {
        side: Side,
        move_id: MoveId,
        counter: bool,
    },
    ComboReserved {
        side: Side,
        move_id: MoveId,
        stage: u8,
    },
    ComboAdvanced {
        side: Side,
        move_id: MoveId,
        stage: u8,
    },
    AttackFinished {
        side: Side,
        move_id: MoveId,
    },
    HitLanded {
        attacker: Side,
        move_id: MoveId,
        damage: u32,
        kind: HitKind,
        remaining_hp: u32,
    },
    Guarded {
        defender: Side,
        move_id: MoveId,
    },
    Landed {
        side: Side,
    },
    GetUpArmed {
        side: Side,
    },
    GotUp {
        side: Side,
    },
    Recovered {
        side: Side,
        kind: HitKind,
    },
    GuardReleased {
        side: Side,
    },
    ArchetypeSwitched {
        side: Side,
        from: ArchetypeId,
        to: ArchetypeId,
    },
    SwitchRejected(SwitchError),
    RoundOver(RoundOutcome),
    MatchOver {
        winner: Side,
    },
}

impl CombatEvent {
    /// Round and match lifecycle, as opposed to per-hit combat detail.
    pub fn is_flow(&self) -> bool {
        matches!(self, Self::RoundOver(_) | Self::MatchOver { .. })
    }
}
