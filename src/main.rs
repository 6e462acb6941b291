use clap::{Parser, Subcommand};
use pokemon_counter_graph::team::DEFAULT_TEAM_SIZE;
use pokemon_counter_graph::{run, CliOptions, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Find type-based counters in a Pokemon roster
#[derive(Parser, Debug)]
#[command(name = "counter-graph")]
struct Args {
    /// Roster snapshot (JSON, {"pokemon": [...]})
    #[arg(long, default_value = "roster.json")]
    roster: PathBuf,

    /// Seed for team sampling
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Strongest counter against each target (identifier or name)
    Counter {
        #[arg(required = true)]
        targets: Vec<String>,
    },
    /// Random team from the roster
    Team {
        #[arg(long, default_value_t = DEFAULT_TEAM_SIZE)]
        size: usize,
    },
    /// Random rival team and a team favored against it
    CounterTeam {
        #[arg(long, default_value_t = DEFAULT_TEAM_SIZE)]
        size: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pokemon_counter_graph=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "using seed");
    let command = match args.command {
        Cmd::Counter { targets } => Command::Counter { targets },
        Cmd::Team { size } => Command::Team { size },
        Cmd::CounterTeam { size } => Command::CounterTeam { size },
    };
    run(CliOptions {
        roster_path: args.roster,
        seed,
        command,
    })
}
