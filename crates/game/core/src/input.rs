//! Normalized per-tick input.
//!
//! Devices produce a [`RawInput`] (held keys plus a combo press); everything
//! in the simulation consumes the [`InputSnapshot`] derived from it. The
//! key-chord to move mapping lives only in [`resolve_attack_chord`], which
//! both normal action selection and the post-guard counter go through.

use crate::roster::{ArchetypeId, MoveHeight, MoveId, MoveStrength};
use crate::state::{Side, Stance};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveDirection {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackButton {
    Fast,
    Strong,
    Rage,
}

impl AttackButton {
    const fn strength(self) -> MoveStrength {
        match self {
            Self::Fast => MoveStrength::Fast,
            Self::Strong => MoveStrength::Strong,
            Self::Rage => MoveStrength::Rage,
        }
    }
}

/// Maps a held attack button plus stance to a move.
///
/// Up selects the upper variant, down the lower one, no vertical input the
/// middle one. Rage ignores direction.
pub const fn resolve_attack_chord(button: AttackButton, stance: Stance) -> MoveId {
    let height = match stance {
        Stance::High => MoveHeight::Upper,
        Stance::Middle => MoveHeight::Middle,
        Stance::Low => MoveHeight::Lower,
    };
    MoveId::from_parts(button.strength(), height)
}

/// Input for one side on one tick, as the simulation sees it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputSnapshot {
    pub movement: MoveDirection,
    pub attack: Option<MoveId>,
    pub stance: Stance,
    pub combo_confirm: bool,
    pub getup: bool,
    pub char_switch: Option<ArchetypeId>,
}

impl InputSnapshot {
    pub const NEUTRAL: Self = Self {
        movement: MoveDirection::None,
        attack: None,
        stance: Stance::Middle,
        combo_confirm: false,
        getup: false,
        char_switch: None,
    };
}

/// Held keys for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fast: bool,
    pub strong: bool,
    pub rage: bool,
    /// An attack key went down this tick.
    pub combo_press: bool,
    pub switch_to: Option<ArchetypeId>,
}

impl RawInput {
    /// Up wins over down; neither is a middle stance.
    pub fn stance(&self) -> Stance {
        if self.up {
            Stance::High
        } else if self.down {
            Stance::Low
        } else {
            Stance::Middle
        }
    }

    pub fn movement(&self) -> MoveDirection {
        if self.up {
            MoveDirection::Up
        } else if self.down {
            MoveDirection::Down
        } else if self.left {
            MoveDirection::Left
        } else if self.right {
            MoveDirection::Right
        } else {
            MoveDirection::None
        }
    }

    /// Rage has priority, then fast, then strong.
    pub fn held_button(&self) -> Option<AttackButton> {
        if self.rage {
            Some(AttackButton::Rage)
        } else if self.fast {
            Some(AttackButton::Fast)
        } else if self.strong {
            Some(AttackButton::Strong)
        } else {
            None
        }
    }

    pub fn any_direction(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    pub fn snapshot(&self) -> InputSnapshot {
        let stance = self.stance();
        InputSnapshot {
            movement: self.movement(),
            attack: self
                .held_button()
                .map(|button| resolve_attack_chord(button, stance)),
            stance,
            combo_confirm: self.combo_press,
            getup: self.any_direction(),
            char_switch: self.switch_to,
        }
    }
}

impl From<RawInput> for InputSnapshot {
    fn from(raw: RawInput) -> Self {
        raw.snapshot()
    }
}

/// Both sides' input for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInputs {
    pub sides: [InputSnapshot; 2],
}

impl FrameInputs {
    pub const NEUTRAL: Self = Self {
        sides: [InputSnapshot::NEUTRAL; 2],
    };

    pub fn new(a: InputSnapshot, b: InputSnapshot) -> Self {
        Self { sides: [a, b] }
    }

    pub fn side(&self, side: Side) -> &InputSnapshot {
        &self.sides[side.index()]
    }
}
