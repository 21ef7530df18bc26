use crate::body::CombatantBody;
use crate::config::{Knockback, KnockbackConfig};
use crate::roster::{MoveId, MoveStrength};
use crate::state::{Facing, HitKind};

/// How a clean hit moves and classifies its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reaction {
    pub kind: HitKind,
    pub knockback: Knockback,
}

/// Classifies a hit from the move and whether the target was in the air.
///
/// Airborne targets are juggled; lower moves launch grounded targets; any
/// other hit slides the target along the floor.
pub fn classify(move_id: MoveId, target_airborne: bool, profiles: &KnockbackConfig) -> Reaction {
    if target_airborne {
        return Reaction {
            kind: HitKind::Airborne,
            knockback: profiles.juggle,
        };
    }
    if move_id.is_lower() {
        return Reaction {
            kind: HitKind::Airborne,
            knockback: profiles.launch,
        };
    }
    match move_id.strength() {
        MoveStrength::Fast => Reaction {
            kind: HitKind::Fast,
            knockback: profiles.fast,
        },
        MoveStrength::Strong | MoveStrength::Rage => Reaction {
            kind: HitKind::Strong,
            knockback: profiles.strong,
        },
    }
}

/// Pushes `body` along the attacker's facing.
pub fn apply(body: &mut CombatantBody, knockback: Knockback, attacker_facing: Facing) {
    let vx = knockback.vx * attacker_facing.sign();
    if knockback.is_launch() {
        body.apply_impulse(vx, knockback.vy, knockback.deceleration);
    } else {
        body.slide(vx, knockback.deceleration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_by_move_and_target() {
        let profiles = KnockbackConfig::default();
        assert_eq!(classify(MoveId::FastMiddle, false, &profiles).kind, HitKind::Fast);
        assert_eq!(classify(MoveId::StrongUpper, false, &profiles).kind, HitKind::Strong);
        assert_eq!(classify(MoveId::Rage, false, &profiles).kind, HitKind::Strong);

        let launch = classify(MoveId::FastLower, false, &profiles);
        assert_eq!(launch.kind, HitKind::Airborne);
        assert_eq!(launch.knockback, profiles.launch);

        let juggle = classify(MoveId::StrongMiddle, true, &profiles);
        assert_eq!(juggle.kind, HitKind::Airborne);
        assert!(juggle.knockback.deceleration < profiles.launch.deceleration);
    }

    #[test]
    fn launch_leaves_ground_and_slide_does_not() {
        let profiles = KnockbackConfig::default();
        let mut body = CombatantBody::grounded_at(500.0, 0.0);
        apply(&mut body, profiles.strong, Facing::Left);
        assert!(body.grounded);
        assert_eq!(body.velocity.x, -260.0);

        apply(&mut body, profiles.launch, Facing::Right);
        assert!(!body.grounded);
        assert_eq!(body.velocity.x, 180.0);
        assert_eq!(body.velocity.y, 720.0);
    }
}
