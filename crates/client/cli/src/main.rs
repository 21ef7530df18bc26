//! Headless match runner entry point.
//!
//! Loads content, replays a scenario, and prints how the match ended. Flow
//! events are printed as they arrive; combat detail goes to the log.
//!
//! ```bash
//! RUST_LOG=duel_runtime=debug DUEL_SCENARIO=my_match.ron cargo run -p duel-cli
//! ```
mod config;
mod report;

use anyhow::{Context, Result};
use config::CliConfig;
use duel_content::ContentFactory;
use duel_runtime::{Runtime, Scenario, Topic};

const DEMO_SCENARIO: &str = include_str!("../../../runtime/scenarios/demo.ron");

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();
    let config = CliConfig::from_env();

    let scenario = match &config.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::parse(DEMO_SCENARIO).context("parsing built-in demo scenario")?,
    };
    let factory = match &config.content_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::shipped(),
    };
    tracing::info!(scenario = %scenario.name, data = %factory.data_dir().display(), "loading content");
    let content = factory.load()?;

    let mut runtime = Runtime::from_scenario(&scenario, content)?;
    let printer = tokio::spawn(report::print_flow(runtime.subscribe(Topic::Flow)));

    let max_frames = config.max_frames.or(scenario.max_frames);
    let summary = if config.realtime {
        runtime.run_realtime(max_frames).await
    } else {
        runtime.run_headless(max_frames)
    };

    // Closing the bus ends the printer.
    drop(runtime);
    printer.await?;

    report::print_summary(&scenario, &summary);
    Ok(())
}

/// Logs to stderr so stdout carries only the match report.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
