pub mod effectiveness;
pub mod error;
pub mod favorable;
pub mod graph;
pub mod model;
pub mod store;
pub mod team;
pub mod types;

pub use crate::effectiveness::compute_multiplier;
pub use crate::error::CounterError;
pub use crate::favorable::{favorable_types, opposing_types};
pub use crate::graph::{Counter, CounterGraph, CounterLookup};
pub use crate::model::{Entity, TypeSet};
pub use crate::store::{load_roster, MemoryRoster, RosterStore};
pub use crate::team::{counter_team, random_team, TeamMember};
pub use crate::types::{effect_class, EffectClass, Type};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Command {
    /// Best counter for each target, looked up by identifier or name.
    Counter { targets: Vec<String> },
    Team { size: usize },
    CounterTeam { size: usize },
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub roster_path: PathBuf,
    pub seed: u64,
    pub command: Command,
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let store = MemoryRoster::from_file(&opts.roster_path)?;
    let mut rng = SmallRng::seed_from_u64(opts.seed);
    match opts.command {
        Command::Counter { targets } => {
            println!("Building counter graph...");
            let roster = store.all()?;
            let graph = CounterGraph::build(&roster)?;
            println!(
                "Graph built: {} nodes, {} edges",
                graph.node_count(),
                graph.edge_count()
            );
            for target in &targets {
                println!("{}", describe_counter(&graph, target));
            }
        }
        Command::Team { size } => {
            let team = random_team(&store, size, &mut rng)?;
            print_team("Random team", &team, true);
        }
        Command::CounterTeam { size } => {
            let rival = random_team(&store, size, &mut rng)?;
            let counters = counter_team(&store, &rival, size, &mut rng)?;
            print_team("Rival team", &rival, false);
            print_team("Best team", &counters, true);
        }
    }
    Ok(())
}

/// Resolves `target` as an identifier first, then as a display name.
pub fn describe_counter(graph: &CounterGraph, target: &str) -> String {
    let id = match graph.node(target).or_else(|| graph.find_by_name(target)) {
        Some(node) => node.id.clone(),
        None => return format!("'{target}' is not in the roster."),
    };
    match graph.strongest_counter_against(&id) {
        CounterLookup::Found(counter) => format!(
            "The strongest counter against '{target}' is '{}' with effectiveness {:.2}.",
            counter.name, counter.weight
        ),
        CounterLookup::NoEffectiveCounter => {
            format!("No effective attackers found against '{target}'.")
        }
        CounterLookup::NotInRoster => format!("'{target}' is not in the roster."),
    }
}

fn print_team(title: &str, team: &[TeamMember], details: bool) {
    println!("\n{title}:");
    if team.is_empty() {
        println!("(no candidates)");
    }
    for member in team {
        println!("{} - Types: {}", member.entity.name, member.entity.types.join(", "));
        if !details {
            continue;
        }
        println!("  Ability: {}", member.ability.as_deref().unwrap_or("-"));
        println!("  Moves: {}", member.moves.join(", "));
        println!("  Stats:");
        for (stat, value) in &member.entity.stats {
            println!("    {stat}: {value}");
        }
    }
}
