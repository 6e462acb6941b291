use crate::effectiveness::compute_multiplier;
use crate::error::{CounterError, Result};
use crate::model::{Entity, TypeSet};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub types: TypeSet,
}

/// Directed edge `from -> to`; indices refer to roster order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    pub id: String,
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CounterLookup {
    Found(Counter),
    /// The target is in the roster but nothing hits it for more than 0.
    NoEffectiveCounter,
    NotInRoster,
}

/// Complete "attacker beats defender" graph over one roster snapshot.
///
/// Only positive weights are stored and there are no self-loops. The graph is
/// immutable once built; a changed roster needs a fresh `build`.
#[derive(Debug, Clone)]
pub struct CounterGraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    // edge positions grouped by destination, ascending source index
    incoming: Vec<Vec<usize>>,
}

impl CounterGraph {
    pub fn build(roster: &[Entity]) -> Result<CounterGraph> {
        let started = Instant::now();
        let mut nodes = Vec::with_capacity(roster.len());
        let mut index = HashMap::with_capacity(roster.len());
        for entity in roster {
            let types = entity.type_set()?;
            if index.insert(entity.id.clone(), nodes.len()).is_some() {
                return Err(CounterError::DuplicateEntity(entity.id.clone()));
            }
            nodes.push(Node {
                id: entity.id.clone(),
                name: entity.name.clone(),
                types,
            });
        }

        let rows: Vec<Vec<Edge>> = (0..nodes.len())
            .into_par_iter()
            .map(|from| {
                let attacker = nodes[from].types.as_slice();
                nodes
                    .iter()
                    .enumerate()
                    .filter(|(to, _)| *to != from)
                    .filter_map(|(to, defender)| {
                        let weight = compute_multiplier(attacker, defender.types.as_slice());
                        (weight > 0.0).then_some(Edge { from, to, weight })
                    })
                    .collect()
            })
            .collect();
        let edges: Vec<Edge> = rows.into_iter().flatten().collect();

        let mut incoming = vec![Vec::new(); nodes.len()];
        for (pos, edge) in edges.iter().enumerate() {
            incoming[edge.to].push(pos);
        }

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built counter graph"
        );
        Ok(CounterGraph {
            nodes,
            index,
            edges,
            incoming,
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// First node in roster order whose name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Node> {
        let wanted = name.trim();
        self.nodes
            .iter()
            .find(|node| node.name.eq_ignore_ascii_case(wanted))
    }

    /// Edges ordered by source, then destination, in roster order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        let from = *self.index.get(from)?;
        let to = *self.index.get(to)?;
        self.incoming[to]
            .iter()
            .map(|&pos| &self.edges[pos])
            .find(|edge| edge.from == from)
            .map(|edge| edge.weight)
    }

    /// Attackers with a positive weight against `id`, in roster order.
    pub fn predecessors(&self, id: &str) -> Vec<(&Node, f64)> {
        let Some(&target) = self.index.get(id) else {
            return Vec::new();
        };
        self.incoming[target]
            .iter()
            .map(|&pos| {
                let edge = &self.edges[pos];
                (&self.nodes[edge.from], edge.weight)
            })
            .collect()
    }

    /// Highest-weight predecessor of `target`. Ties go to the attacker that
    /// appears first in the roster.
    pub fn strongest_counter_against(&self, target: &str) -> CounterLookup {
        let Some(&target) = self.index.get(target) else {
            return CounterLookup::NotInRoster;
        };
        let mut best: Option<&Edge> = None;
        for &pos in &self.incoming[target] {
            let edge = &self.edges[pos];
            if best.map_or(true, |b| edge.weight > b.weight) {
                best = Some(edge);
            }
        }
        match best {
            Some(edge) => {
                let node = &self.nodes[edge.from];
                CounterLookup::Found(Counter {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    weight: edge.weight,
                })
            }
            None => CounterLookup::NoEffectiveCounter,
        }
    }
}
