//! Property tests over arbitrary held-key scripts.

use duel_core::{
    ArchetypeId, CombatConfig, CombatEvent, FrameInputs, MatchEngine, MatchEnv, MatchState,
    MoveId, RawInput, Roster, Side,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

const DT: f32 = 1.0 / 60.0;

fn archetype() -> impl Strategy<Value = ArchetypeId> {
    prop::sample::select(vec![
        ArchetypeId::Priest,
        ArchetypeId::Thief,
        ArchetypeId::Fighter,
    ])
}

fn raw_input() -> impl Strategy<Value = RawInput> {
    (
        any::<[bool; 4]>(),
        any::<[bool; 4]>(),
        prop::option::weighted(0.05, archetype()),
    )
        .prop_map(|([up, down, left, right], [fast, strong, rage, combo_press], switch_to)| {
            RawInput {
                up,
                down,
                left,
                right,
                fast,
                strong,
                rage,
                combo_press,
                switch_to,
            }
        })
}

/// Each entry is held for a number of frames.
fn script() -> impl Strategy<Value = Vec<(RawInput, RawInput, usize)>> {
    prop::collection::vec((raw_input(), raw_input(), 1usize..20), 1..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn hp_only_falls_by_reported_damage(
        a in archetype(),
        b in archetype(),
        script in script(),
    ) {
        let roster = Roster::builtin();
        let config = CombatConfig::default();
        let env = MatchEnv::new(&roster, &config);
        let mut state = MatchState::new([a, b], &config);
        let max_hp = config.rounds.max_hp;

        for (raw_a, raw_b, frames) in script {
            let inputs = FrameInputs::new(raw_a.into(), raw_b.into());
            for _ in 0..frames {
                let before = state.hp();
                let report = MatchEngine::new(&mut state).tick(env, &inputs, DT);

                let mut expected = before;
                for event in &report.events {
                    if let CombatEvent::HitLanded { attacker, remaining_hp, .. } = event {
                        expected[attacker.opponent().index()] = *remaining_hp;
                    }
                }
                prop_assert_eq!(state.hp(), expected);
                for side in Side::BOTH {
                    let hp = state.combatant(side).hp();
                    prop_assert!(hp <= before[side.index()]);
                    prop_assert!(hp <= max_hp);
                }
            }
        }
    }

    #[test]
    fn combatants_stay_inside_arena_and_single_hit_per_activation(
        a in archetype(),
        b in archetype(),
        script in script(),
    ) {
        let roster = Roster::builtin();
        let config = CombatConfig::default();
        let env = MatchEnv::new(&roster, &config);
        let mut state = MatchState::new([a, b], &config);
        let (min_x, max_x) = (config.arena.min_x(), config.arena.max_x());
        let mut hits_this_activation = [0u32; 2];

        for (raw_a, raw_b, frames) in script {
            let inputs = FrameInputs::new(raw_a.into(), raw_b.into());
            for _ in 0..frames {
                let report = MatchEngine::new(&mut state).tick(env, &inputs, DT);

                for event in &report.events {
                    match event {
                        CombatEvent::AttackStarted { side, .. }
                        | CombatEvent::GuardCancelled { side, .. }
                        | CombatEvent::ComboAdvanced { side, .. } => {
                            hits_this_activation[side.index()] = 0;
                        }
                        CombatEvent::HitLanded { attacker, .. } => {
                            hits_this_activation[attacker.index()] += 1;
                        }
                        _ => {}
                    }
                }
                for side in Side::BOTH {
                    prop_assert!(hits_this_activation[side.index()] <= 1);
                    let combatant = state.combatant(side);
                    prop_assert!(combatant.body.position.x >= min_x);
                    prop_assert!(combatant.body.position.x <= max_x);
                    prop_assert!(combatant.body.position.y >= config.arena.ground_level);
                    let busy = [
                        combatant.is_attacking(),
                        combatant.is_guarding(),
                        combatant.is_hit(),
                    ];
                    prop_assert!(busy.iter().filter(|flag| **flag).count() <= 1);
                }
            }
        }
    }

    #[test]
    fn guard_requires_matching_stance_and_free_hands(
        a in archetype(),
        raw in raw_input(),
    ) {
        let config = CombatConfig::default();
        let mut state = MatchState::new([a, ArchetypeId::Priest], &config);
        let combatant = state.combatant_mut(Side::A);
        combatant.stance = raw.stance();

        for move_id in MoveId::iter() {
            let expected = move_id.required_guard() == Some(combatant.stance);
            prop_assert_eq!(combatant.can_guard_against(move_id), expected);
        }
        prop_assert!(!combatant.can_guard_against(MoveId::Rage));
    }
}
