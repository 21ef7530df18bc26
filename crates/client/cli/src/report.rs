//! Stdout presentation of runtime events and the final summary.

use duel_core::RoundOutcome;
use duel_runtime::{Event, FlowEvent, MatchPhase, MatchSummary, Scenario};
use tokio::sync::broadcast::{self, error::RecvError};

/// Prints flow events until the bus closes.
pub async fn print_flow(mut events: broadcast::Receiver<Event>) {
    loop {
        match events.recv().await {
            Ok(Event::Flow(event)) => {
                if let Some(line) = describe(&event) {
                    println!("{line}");
                }
            }
            Ok(Event::Combat { .. }) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "flow printer fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

fn describe(event: &FlowEvent) -> Option<String> {
    match event {
        FlowEvent::PhaseChanged {
            frame,
            phase: MatchPhase::Fighting,
        } => Some(format!("[{frame:>6}] fight!")),
        FlowEvent::PhaseChanged { .. } => None,
        FlowEvent::RoundStarted { round } => Some(format!("-- round {round} --")),
        FlowEvent::RoundEnded {
            frame,
            outcome,
            rounds_won,
        } => {
            let result = match outcome {
                RoundOutcome::Won(side) => format!("side {side} takes the round"),
                RoundOutcome::Draw => "double knockout".to_string(),
            };
            Some(format!(
                "[{frame:>6}] {result} ({}-{})",
                rounds_won[0], rounds_won[1]
            ))
        }
        FlowEvent::MatchEnded { frame, winner } => {
            Some(format!("[{frame:>6}] side {winner} wins the match"))
        }
    }
}

pub fn print_summary(scenario: &Scenario, summary: &MatchSummary) {
    println!();
    println!("scenario   : {}", scenario.name);
    println!(
        "archetypes : {} vs {}",
        scenario.a.archetype, scenario.b.archetype
    );
    match summary.winner {
        Some(side) => println!("winner     : side {side}"),
        None => println!("winner     : none (frame cap reached)"),
    }
    println!(
        "rounds     : {}-{}",
        summary.rounds_won[0], summary.rounds_won[1]
    );
    println!("final hp   : {} / {}", summary.final_hp[0], summary.final_hp[1]);
    println!("frames     : {}", summary.frames);
    println!("state root : {}", summary.state_root);
}
