//! End-to-end combat scenarios driven through `MatchEngine` with raw key input.

use duel_core::{
    ActionState, ArchetypeId, CombatConfig, CombatEvent, FrameInputs, HitKind, MatchEngine,
    MatchEnv, MatchState, MoveId, RawInput, Roster, RoundOutcome, Side, TickReport,
};

const DT: f32 = 1.0 / 60.0;

struct Duel {
    roster: Roster,
    config: CombatConfig,
    state: MatchState,
}

impl Duel {
    fn new(a: ArchetypeId, b: ArchetypeId) -> Self {
        Self::with_config(a, b, CombatConfig::default())
    }

    fn with_config(a: ArchetypeId, b: ArchetypeId, config: CombatConfig) -> Self {
        let mut state = MatchState::new([a, b], &config);
        state.combatant_mut(Side::A).body.position.x = 600.0;
        state.combatant_mut(Side::B).body.position.x = 700.0;
        Self {
            roster: Roster::builtin(),
            config,
            state,
        }
    }

    fn step(&mut self, a: RawInput, b: RawInput) -> TickReport {
        let env = MatchEnv::new(&self.roster, &self.config);
        let inputs = FrameInputs::new(a.into(), b.into());
        MatchEngine::new(&mut self.state).tick(env, &inputs, DT)
    }

    /// Steps until `done` matches an event or `limit` ticks pass.
    fn until(
        &mut self,
        a: RawInput,
        b: RawInput,
        limit: usize,
        done: impl Fn(&CombatEvent) -> bool,
    ) -> Vec<CombatEvent> {
        let mut seen = Vec::new();
        for _ in 0..limit {
            let report = self.step(a, b);
            let finished = report.events.iter().any(&done);
            seen.extend(report.events);
            if finished {
                return seen;
            }
        }
        panic!("condition not reached within {limit} ticks; saw {seen:?}");
    }

    fn idle(&mut self, ticks: usize) -> Vec<CombatEvent> {
        (0..ticks)
            .flat_map(|_| self.step(RawInput::default(), RawInput::default()).events)
            .collect()
    }
}

fn fast() -> RawInput {
    RawInput {
        fast: true,
        combo_press: true,
        ..RawInput::default()
    }
}

fn strong() -> RawInput {
    RawInput {
        strong: true,
        combo_press: true,
        ..RawInput::default()
    }
}

fn rage() -> RawInput {
    RawInput {
        rage: true,
        combo_press: true,
        ..RawInput::default()
    }
}

fn crouch() -> RawInput {
    RawInput {
        down: true,
        ..RawInput::default()
    }
}

fn hold_up() -> RawInput {
    RawInput {
        up: true,
        ..RawInput::default()
    }
}

fn is_hit(event: &CombatEvent) -> bool {
    matches!(event, CombatEvent::HitLanded { .. })
}

#[test]
fn fast_hit_recovers_without_get_up() {
    let mut duel = Duel::new(ArchetypeId::Thief, ArchetypeId::Priest);

    duel.step(fast(), hold_up());
    duel.until(RawInput::default(), hold_up(), 60, is_hit);

    let target = duel.state.combatant(Side::B);
    assert_eq!(target.hp(), 90);
    assert_eq!(target.hit_kind(), Some(HitKind::Fast));

    let events = duel.idle(60);
    assert!(events.contains(&CombatEvent::Recovered {
        side: Side::B,
        kind: HitKind::Fast,
    }));
    assert_eq!(duel.state.combatant(Side::B).action, ActionState::Idle);
}

#[test]
fn strong_hit_holds_until_get_up() {
    let mut duel = Duel::new(ArchetypeId::Priest, ArchetypeId::Thief);

    duel.step(strong(), hold_up());
    duel.until(RawInput::default(), hold_up(), 60, is_hit);
    assert_eq!(duel.state.combatant(Side::B).hp(), 80);

    let events = duel.idle(300);
    assert!(events.contains(&CombatEvent::GetUpArmed { side: Side::B }));
    let target = duel.state.combatant(Side::B);
    assert_eq!(target.hit_kind(), Some(HitKind::Strong));
    assert!(target.can_get_up());
    let lying = duel.config.hit_reactions.strong.lying_frame();
    assert_eq!(target.current_frame(), lying);

    let got_up = duel.step(RawInput::default(), crouch());
    assert!(got_up.events.contains(&CombatEvent::GotUp { side: Side::B }));
    let events = duel.idle(30);
    assert!(events.contains(&CombatEvent::Recovered {
        side: Side::B,
        kind: HitKind::Strong,
    }));
    assert!(!duel.state.combatant(Side::B).is_hit());
}

#[test]
fn lower_hit_launches_then_knocks_down() {
    let mut duel = Duel::new(ArchetypeId::Thief, ArchetypeId::Fighter);

    let sweep = RawInput {
        down: true,
        ..strong()
    };
    duel.step(sweep, RawInput::default());
    let events = duel.until(RawInput::default(), RawInput::default(), 60, is_hit);
    assert!(events.iter().any(|event| matches!(
        event,
        CombatEvent::HitLanded {
            move_id: MoveId::StrongLower,
            kind: HitKind::Airborne,
            ..
        }
    )));
    assert!(duel.state.combatant(Side::B).is_airborne());

    duel.until(RawInput::default(), RawInput::default(), 120, |event| {
        *event == CombatEvent::Landed { side: Side::B }
    });
    assert_eq!(duel.state.combatant(Side::B).hit_kind(), Some(HitKind::Down));

    duel.until(RawInput::default(), RawInput::default(), 60, |event| {
        *event == CombatEvent::GetUpArmed { side: Side::B }
    });
    assert!(duel.state.combatant(Side::B).can_get_up());
}

#[test]
fn middle_guard_blocks_until_rage() {
    let mut duel = Duel::new(ArchetypeId::Priest, ArchetypeId::Thief);

    duel.step(strong(), RawInput::default());
    let events = duel.until(RawInput::default(), RawInput::default(), 60, |event| {
        matches!(event, CombatEvent::Guarded { .. })
    });
    assert!(!events.iter().any(is_hit));
    assert_eq!(duel.state.combatant(Side::B).hp(), 100);
    assert!(duel.state.combatant(Side::B).is_guarding());

    duel.until(RawInput::default(), RawInput::default(), 120, |event| {
        matches!(event, CombatEvent::AttackFinished { side: Side::A, .. })
    });

    duel.step(rage(), RawInput::default());
    duel.until(RawInput::default(), RawInput::default(), 120, is_hit);
    let target = duel.state.combatant(Side::B);
    assert_eq!(target.hp(), 70);
    assert_eq!(target.hit_kind(), Some(HitKind::Strong));
}

#[test]
fn reserved_combo_chains_into_next_stage() {
    let mut duel = Duel::new(ArchetypeId::Thief, ArchetypeId::Priest);

    duel.step(fast(), hold_up());
    // A second press while the first stage runs reserves the follow-up.
    let reserve = duel.step(fast(), hold_up());
    assert!(reserve.events.contains(&CombatEvent::ComboReserved {
        side: Side::A,
        move_id: MoveId::FastMiddle,
        stage: 1,
    }));

    let events = duel.until(RawInput::default(), hold_up(), 120, |event| {
        matches!(event, CombatEvent::ComboAdvanced { stage: 2, .. })
    });
    assert_eq!(events.iter().filter(|event| is_hit(event)).count(), 1);
    assert_eq!(
        duel.state.combatant(Side::A).action,
        ActionState::attack(MoveId::FastMiddle, 2)
    );
}

#[test]
fn knockout_scores_the_standing_side() {
    let mut config = CombatConfig::default();
    config.rounds.max_hp = 10;
    let mut duel = Duel::with_config(ArchetypeId::Thief, ArchetypeId::Priest, config);

    duel.step(fast(), hold_up());
    let events = duel.until(RawInput::default(), hold_up(), 60, |event| {
        matches!(event, CombatEvent::RoundOver(_))
    });
    assert!(events.contains(&CombatEvent::RoundOver(RoundOutcome::Won(Side::A))));
    assert_eq!(duel.state.round.rounds_won, [1, 0]);

    duel.state.reset_round(&duel.config);
    assert_eq!(duel.state.hp(), [10, 10]);
    assert!(!duel.state.round.round_over);
    assert_eq!(duel.state.round.round_number, 2);
}

#[test]
fn illegal_requests_are_ignored() {
    let mut duel = Duel::new(ArchetypeId::Thief, ArchetypeId::Priest);

    // Thief has no rage move.
    let report = duel.step(rage(), RawInput::default());
    assert!(report.events.is_empty());
    assert_eq!(duel.state.combatant(Side::A).action, ActionState::Idle);

    let switch = RawInput {
        switch_to: Some(ArchetypeId::Fighter),
        ..RawInput::default()
    };
    let report = duel.step(switch, RawInput::default());
    assert_eq!(
        report.events,
        vec![CombatEvent::ArchetypeSwitched {
            side: Side::A,
            from: ArchetypeId::Thief,
            to: ArchetypeId::Fighter,
        }]
    );
}
