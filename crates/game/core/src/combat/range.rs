use crate::body::Hitbox;
use crate::config::CombatConfig;
use crate::roster::AttackDefinition;
use crate::state::{Combatant, Facing};

/// Strike box extending from the attacker's body edge in the facing direction.
pub fn attack_box(attacker: &Combatant, attack: &AttackDefinition, config: &CombatConfig) -> Hitbox {
    let body = attacker.hitbox(config);
    let reach = config.reach.for_strength(attack.id.strength()) * attack.reach_multiplier;
    match attacker.facing {
        Facing::Right => Hitbox {
            left: body.right,
            right: body.right + reach,
            ..body
        },
        Facing::Left => Hitbox {
            left: body.left - reach,
            right: body.left,
            ..body
        },
    }
}

pub fn in_range(
    attacker: &Combatant,
    target: &Combatant,
    attack: &AttackDefinition,
    config: &CombatConfig,
) -> bool {
    attack_box(attacker, attack, config).overlaps(&target.hitbox(config))
}
