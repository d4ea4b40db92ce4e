use clap::Parser;

/// CLI arguments for the ecosystem runner
#[derive(Parser, Debug)]
#[command(name = "ant_ecosystem", about = "🐜 Ant colonies, pheromone trails and ant-eaters on a grid")]
pub struct Args {
    /// Path to the scenario TOML file
    #[arg(short = 's', long = "scenario")]
    pub scenario: String,

    /// Number of ticks to run
    #[arg(short = 't', long, default_value_t = 100)]
    pub ticks: u64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Independent copies of the scenario, advanced in parallel
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub replicas: u32,

    /// Sleep the scenario's tick_ms between ticks
    #[arg(long, default_value_t = false)]
    pub realtime: bool,

    /// Print the final state of the first replica as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Suppress per-tick event lines
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}
