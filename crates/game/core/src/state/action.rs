use crate::roster::MoveId;

/// Classification of a received hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum HitKind {
    /// Short flinch that recovers on its own.
    Fast,
    /// Knockdown that waits for get-up input.
    Strong,
    /// Launched; frozen until the body lands.
    Airborne,
    /// Landed after a launch; waits for get-up input.
    Down,
}

impl HitKind {
    pub const ALL: [HitKind; 4] = [Self::Fast, Self::Strong, Self::Airborne, Self::Down];

    /// Kinds that park at the lying frame until the player gets up.
    pub const fn requires_get_up(self) -> bool {
        matches!(self, Self::Strong | Self::Down)
    }
}

/// Guard height derived from held vertical input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Stance {
    High,
    #[default]
    Middle,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Direction from `from_x` toward `to_x`; ties keep `self`.
    pub fn toward(self, from_x: f32, to_x: f32) -> Self {
        if to_x > from_x {
            Self::Right
        } else if to_x < from_x {
            Self::Left
        } else {
            self
        }
    }
}

/// Top-level mode of a combatant.
///
/// Attacking, guarding, and being hit are variants, so no combatant can be in
/// two of them at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionState {
    #[default]
    Idle,
    Walk,
    BackWalk,
    Guard,
    Hit(HitKind),
    /// `stage` is the 1-based combo stage.
    Attack { move_id: MoveId, stage: u8 },
}

impl ActionState {
    pub const fn attack(move_id: MoveId, stage: u8) -> Self {
        Self::Attack { move_id, stage }
    }

    pub const fn is_attacking(&self) -> bool {
        matches!(self, Self::Attack { .. })
    }

    pub const fn is_guarding(&self) -> bool {
        matches!(self, Self::Guard)
    }

    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    /// Idle or moving: free to start any action.
    pub const fn is_neutral(&self) -> bool {
        matches!(self, Self::Idle | Self::Walk | Self::BackWalk)
    }

    pub const fn hit_kind(&self) -> Option<HitKind> {
        match self {
            Self::Hit(kind) => Some(*kind),
            _ => None,
        }
    }

    pub const fn current_attack(&self) -> Option<(MoveId, u8)> {
        match self {
            Self::Attack { move_id, stage } => Some((*move_id, *stage)),
            _ => None,
        }
    }
}
