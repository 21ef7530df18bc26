use crate::config::CombatConfig;
use crate::state::Combatant;

/// Share of the overlap an attacking combatant yields to a non-attacker.
const ATTACKER_SHARE: f32 = 0.2;

/// Pushes overlapping bodies apart horizontally.
///
/// Nothing moves when both are hit or both are airborne. When only one is
/// hit or airborne, the other takes the whole push. Otherwise the overlap is
/// split, with an attacker yielding less ground than its target.
pub fn separate(a: &mut Combatant, b: &mut Combatant, config: &CombatConfig) {
    let overlap = a.hitbox(config).overlap_x(&b.hitbox(config));
    if overlap <= 0.0 {
        return;
    }

    let a_pinned = a.is_hit() || a.is_airborne();
    let b_pinned = b.is_hit() || b.is_airborne();
    if (a.is_hit() && b.is_hit()) || (a.is_airborne() && b.is_airborne()) {
        return;
    }

    let a_share = match (a_pinned, b_pinned) {
        (true, false) => 0.0,
        (false, true) => 1.0,
        _ => match (a.is_attacking(), b.is_attacking()) {
            (true, false) => ATTACKER_SHARE,
            (false, true) => 1.0 - ATTACKER_SHARE,
            _ => 0.5,
        },
    };

    // A on the left moves left; ties push A left.
    let direction = if a.body.position.x <= b.body.position.x {
        -1.0
    } else {
        1.0
    };
    let arena = &config.arena;
    a.body.position.x = arena.clamp_x(a.body.position.x + direction * overlap * a_share);
    b.body.position.x = arena.clamp_x(b.body.position.x - direction * overlap * (1.0 - a_share));
}
