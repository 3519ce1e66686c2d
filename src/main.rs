use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use treasure_hunt::prelude::*;
use treasure_hunt::world::parse_scenario;

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Parse the map and its adventurers
    let mut world =
        parse_scenario(&args.input).map_err(|e| format!("{}: {e}", args.input.display()))?;

    // Run simulation
    let engine = SimulationEngine::new(args.suppress_events);
    let report = engine.run(&mut world)?;

    // Write the final map, then print results
    std::fs::write(&args.output, world.to_string())?;
    engine.print_summary(&world, &report);

    Ok(())
}
