//! Cross-combatant hit arbitration.
//!
//! Both attackers are judged against the state as it stood after both
//! controllers and clocks ran; only then are the results applied. Mutual
//! hits on the same tick therefore both land.

use crate::combat::{knockback, range};
use crate::env::MatchEnv;
use crate::event::CombatEvent;
use crate::hit::{Blow, HitOutcome};
use crate::input::FrameInputs;
use crate::roster::MoveId;
use crate::state::{ActionState, CombatFlags, Combatant, Facing, MatchState, Side};

/// What an attacker's active frame does to its opponent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Judgment {
    Hit {
        blow: Blow,
        reaction: knockback::Reaction,
        attacker_facing: Facing,
    },
    Guarded {
        move_id: MoveId,
    },
}

/// Decides the outcome of `attacker`'s current attack without mutating anything.
///
/// `None` when the attack is not on its active frame, already landed, the
/// target cannot be hit right now, or the target is out of reach.
pub fn judge(attacker: &Combatant, defender: &Combatant, env: MatchEnv<'_>) -> Option<Judgment> {
    let (move_id, _) = attacker.action.current_attack()?;
    if !attacker.flags.contains(CombatFlags::CAN_PROCESS_HIT)
        || attacker.flags.contains(CombatFlags::ATTACK_HIT_PROCESSED)
    {
        return None;
    }
    if !defender.can_be_hit_by(move_id) {
        return None;
    }
    let attack = env.roster.attack(attacker.archetype, move_id)?;
    if !range::in_range(attacker, defender, attack, env.config) {
        return None;
    }

    let airborne = defender.is_airborne();
    if !airborne && defender.can_guard_against(move_id) {
        return Some(Judgment::Guarded { move_id });
    }

    let reaction = knockback::classify(move_id, airborne, &env.config.knockback);
    Some(Judgment::Hit {
        blow: Blow {
            move_id,
            damage: attack.damage,
            kind: reaction.kind,
            attacker_x: attacker.body.position.x,
        },
        reaction,
        attacker_facing: attacker.facing,
    })
}

/// Runs one resolver pass for both sides.
pub fn resolve(state: &mut MatchState, env: MatchEnv<'_>, inputs: &FrameInputs) -> Vec<CombatEvent> {
    let judgments = Side::BOTH.map(|side| {
        judge(
            state.combatant(side),
            state.combatant(side.opponent()),
            env,
        )
    });

    let mut events = Vec::new();
    for (side, judgment) in Side::BOTH.into_iter().zip(judgments) {
        let Some(judgment) = judgment else {
            continue;
        };
        state
            .combatant_mut(side)
            .flags
            .insert(CombatFlags::ATTACK_HIT_PROCESSED);

        let defender = state.combatant_mut(side.opponent());
        match judgment {
            Judgment::Hit {
                blow,
                reaction,
                attacker_facing,
            } => {
                if let HitOutcome::Applied { remaining_hp } = defender.hit_state().apply_hit(blow) {
                    knockback::apply(&mut defender.body, reaction.knockback, attacker_facing);
                    events.push(CombatEvent::HitLanded {
                        attacker: side,
                        move_id: blow.move_id,
                        damage: blow.damage,
                        kind: blow.kind,
                        remaining_hp,
                    });
                }
            }
            Judgment::Guarded { move_id } => {
                events.push(CombatEvent::Guarded {
                    defender: defender.side,
                    move_id,
                });
                guard(defender, env);
                if let Some(counter) = env
                    .archetype(defender.archetype)
                    .and_then(|archetype| {
                        defender
                            .controller()
                            .guard_cancel(archetype, inputs.side(side.opponent()))
                    })
                {
                    events.push(counter);
                }
            }
        }
    }
    events
}

/// Starts or extends the guard and opens the counter window.
fn guard(defender: &mut Combatant, env: MatchEnv<'_>) {
    defender.action = ActionState::Guard;
    defender.flags.remove(CombatFlags::ATTACK);
    defender.clock.restart();
    defender.open_counter_window(env.config.guard.counter_window);
}
