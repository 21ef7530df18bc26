//! Determinism of scripted runs, checked through the state root.
#![cfg(feature = "serde")]

use duel_core::{
    ArchetypeId, CombatConfig, FrameInputs, MatchEngine, MatchEnv, MatchState, RawInput, Roster,
};

fn scripted_run(script: &[(RawInput, RawInput, usize)]) -> MatchState {
    let roster = Roster::builtin();
    let config = CombatConfig::default();
    let env = MatchEnv::new(&roster, &config);
    let mut state = MatchState::new([ArchetypeId::Fighter, ArchetypeId::Thief], &config);
    for (a, b, frames) in script {
        let inputs = FrameInputs::new((*a).into(), (*b).into());
        for _ in 0..*frames {
            MatchEngine::new(&mut state).tick(env, &inputs, config.timing.fixed_dt());
        }
    }
    state
}

fn script() -> Vec<(RawInput, RawInput, usize)> {
    let walk_in = RawInput {
        right: true,
        ..RawInput::default()
    };
    let step_in = RawInput {
        left: true,
        ..RawInput::default()
    };
    let sweep = RawInput {
        down: true,
        fast: true,
        combo_press: true,
        ..RawInput::default()
    };
    vec![
        (walk_in, step_in, 45),
        (sweep, RawInput::default(), 1),
        (RawInput::default(), RawInput::default(), 90),
    ]
}

#[test]
fn identical_scripts_produce_identical_roots() {
    let first = scripted_run(&script());
    let second = scripted_run(&script());
    assert_eq!(first, second);

    let root = first.compute_state_root();
    assert_eq!(root, second.compute_state_root());
    assert_eq!(hex::encode(root).len(), 64);
}

#[test]
fn diverging_scripts_produce_different_roots() {
    let mut shorter = script();
    shorter.pop();
    let full = scripted_run(&script()).compute_state_root();
    let cut = scripted_run(&shorter).compute_state_root();
    assert_ne!(hex::encode(full), hex::encode(cut));
}

#[test]
fn state_survives_bincode_round_trip() {
    let state = scripted_run(&script());
    let bytes = bincode::serialize(&state).expect("encode state");
    let decoded: MatchState = bincode::deserialize(&bytes).expect("decode state");
    assert_eq!(decoded.compute_state_root(), state.compute_state_root());
}
