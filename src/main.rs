mod action;
mod content;
mod engine;
mod inventory;
mod save;
mod story;

use std::io;

use anyhow::{Context, Result};
use log::info;

use engine::{Game, RunOutcome};
use inventory::Inventory;
use save::NoStore;

fn main() -> Result<()> {
    // Initialize logging. Control verbosity with RUST_LOG env var:
    //   RUST_LOG=info   cargo run           # node transitions
    //   RUST_LOG=debug  cargo run           # + raw input and action outcomes
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().collect();
    let name = args.get(1).map(String::as_str).unwrap_or("river");

    let scenario = content::scenario(name).with_context(|| {
        format!(
            "unknown scenario '{name}'\n\
             \n\
             Usage: wayfarer [scenario]\n\
             Available scenarios: {}",
            content::SCENARIO_NAMES.join(", ")
        )
    })?;

    let stdin = io::stdin();
    let mut game = Game::new(scenario.title, stdin.lock(), io::stdout());

    let mut store = NoStore;
    let resume = game.init(&mut store)?;
    let (mut inventory, start) = match resume {
        Some(saved) => (saved.inventory, saved.node),
        None => (Inventory::new(), scenario.root),
    };

    match game.run(&scenario.graph, start, &mut inventory)? {
        RunOutcome::Finished { steps } => info!("finished after {steps} steps"),
        RunOutcome::Quit => info!("player quit"),
    }

    Ok(())
}
