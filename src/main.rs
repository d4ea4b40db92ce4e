use ant_ecosystem::prelude::*;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ant_ecosystem=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    tracing::info!(seed, scenario = %args.scenario, "starting");

    // Build one simulation per replica from the same scenario
    let scenario = ScenarioConfig::from_file(&args.scenario)?;
    let mut store = SimulationStore::with_seed(seed);
    let watched = store.create_with(|id| scenario.build(id))?;
    for _ in 1..args.replicas {
        store.create_with(|id| scenario.build(id))?;
    }

    let mut engine = SimulationEngine::new(args);
    let elapsed = engine.run(&mut store, watched, args.ticks)?;

    let sim = store.get(watched)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    } else {
        engine.print_summary(sim, store.len(), elapsed);
    }

    Ok(())
}
