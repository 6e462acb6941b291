use pokemon_counter_graph::graph::{Counter, CounterGraph, CounterLookup};
use pokemon_counter_graph::model::Entity;
use pokemon_counter_graph::types::Type;
use pokemon_counter_graph::{compute_multiplier, describe_counter, CounterError};
use proptest::prelude::*;

fn mon(id: &str, types: &[&str]) -> Entity {
    Entity::new(id, id.to_lowercase(), types)
}

#[test]
fn fire_grass_water_triangle() {
    let roster = vec![mon("A", &["fire"]), mon("B", &["grass"]), mon("C", &["water"])];
    let graph = CounterGraph::build(&roster).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 6);
    assert!(graph.contains("A") && graph.contains("C"));
    assert!(!graph.contains("a"));
    let order: Vec<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(order, vec!["A", "B", "C"]);
    assert_eq!(graph.weight("A", "B"), Some(2.0));
    assert_eq!(graph.weight("B", "C"), Some(2.0));
    assert_eq!(graph.weight("C", "A"), Some(2.0));
    assert_eq!(graph.weight("A", "C"), Some(0.5));
    assert_eq!(graph.weight("B", "A"), Some(0.5));
    assert_eq!(graph.weight("C", "B"), Some(0.5));

    assert_eq!(
        graph.strongest_counter_against("B"),
        CounterLookup::Found(Counter {
            id: "A".to_string(),
            name: "a".to_string(),
            weight: 2.0,
        })
    );
}

#[test]
fn mutual_immunity_leaves_no_counter() {
    // ghost and normal cannot touch each other
    let roster = vec![mon("X", &["ghost"]), mon("Y", &["normal"])];
    let graph = CounterGraph::build(&roster).unwrap();
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.strongest_counter_against("X"), CounterLookup::NoEffectiveCounter);
    assert_eq!(graph.strongest_counter_against("Y"), CounterLookup::NoEffectiveCounter);
}

#[test]
fn one_way_immunity_omits_only_that_edge() {
    let roster = vec![mon("E", &["electric"]), mon("G", &["ground"])];
    let graph = CounterGraph::build(&roster).unwrap();
    assert_eq!(graph.weight("E", "G"), None);
    assert_eq!(graph.weight("G", "E"), Some(2.0));
    assert_eq!(graph.strongest_counter_against("E"), CounterLookup::Found(Counter {
        id: "G".to_string(),
        name: "g".to_string(),
        weight: 2.0,
    }));
    assert_eq!(graph.strongest_counter_against("G"), CounterLookup::NoEffectiveCounter);
}

#[test]
fn unknown_target_is_not_in_roster() {
    let graph = CounterGraph::build(&[mon("A", &["fire"])]).unwrap();
    assert!(!graph.contains("nope"));
    assert_eq!(graph.strongest_counter_against("nope"), CounterLookup::NotInRoster);
    // single node: no self-loop, so nothing counters it
    assert_eq!(graph.strongest_counter_against("A"), CounterLookup::NoEffectiveCounter);
}

#[test]
fn ties_go_to_earliest_roster_entry() {
    let roster = vec![
        mon("T", &["grass"]),
        mon("F1", &["fire"]),
        mon("F2", &["fire"]),
        mon("I", &["ice"]),
    ];
    let graph = CounterGraph::build(&roster).unwrap();
    match graph.strongest_counter_against("T") {
        CounterLookup::Found(counter) => {
            assert_eq!(counter.id, "F1");
            assert_eq!(counter.weight, 2.0);
        }
        other => panic!("expected a counter, got {other:?}"),
    }
}

#[test]
fn picks_highest_weight_over_roster_order() {
    let roster = vec![
        mon("T", &["grass", "steel"]),
        mon("R", &["rock"]),
        mon("F", &["fire"]),
    ];
    let graph = CounterGraph::build(&roster).unwrap();
    match graph.strongest_counter_against("T") {
        CounterLookup::Found(counter) => {
            assert_eq!(counter.id, "F");
            assert_eq!(counter.weight, 4.0);
        }
        other => panic!("expected a counter, got {other:?}"),
    }
}

#[test]
fn shared_names_stay_distinct_nodes() {
    let roster = vec![
        Entity::new("1", "twin", &["fire"]),
        Entity::new("2", "twin", &["water"]),
    ];
    let graph = CounterGraph::build(&roster).unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.weight("2", "1"), Some(2.0));
    assert_eq!(graph.find_by_name("TWIN").map(|n| n.id.as_str()), Some("1"));
}

#[test]
fn rejects_invalid_roster_before_building() {
    let bad_type = vec![mon("A", &["fire"]), mon("B", &["plasma"])];
    assert!(matches!(
        CounterGraph::build(&bad_type),
        Err(CounterError::InvalidTypeSet { ref entity, .. }) if entity == "B"
    ));

    let no_types = vec![mon("A", &[])];
    assert!(matches!(
        CounterGraph::build(&no_types),
        Err(CounterError::InvalidTypeSet { .. })
    ));

    let duplicate = vec![mon("A", &["fire"]), mon("A", &["water"])];
    assert_eq!(
        CounterGraph::build(&duplicate).unwrap_err(),
        CounterError::DuplicateEntity("A".to_string())
    );
}

#[test]
fn describe_counter_resolves_names() {
    let roster = vec![
        Entity::new("4", "charmander", &["fire"]),
        Entity::new("7", "squirtle", &["water"]),
    ];
    let graph = CounterGraph::build(&roster).unwrap();
    let text = describe_counter(&graph, "Charmander");
    assert!(text.contains("'squirtle'"), "{text}");
    assert!(text.contains("2.00"), "{text}");
    assert!(describe_counter(&graph, "mew").contains("not in the roster"));
}

fn type_name() -> impl Strategy<Value = &'static str> {
    (0..Type::ALL.len()).prop_map(|idx| Type::ALL[idx].as_str())
}

fn roster_strategy() -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::vec((type_name(), prop::option::of(type_name())), 0..24).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(idx, (first, second))| {
                let mut types = vec![first];
                if let Some(second) = second.filter(|s| *s != first) {
                    types.push(second);
                }
                Entity::new(idx.to_string(), format!("mon{idx}"), &types)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn graph_edges_match_calculator(roster in roster_strategy()) {
        let graph = CounterGraph::build(&roster).unwrap();
        for from in &roster {
            for to in &roster {
                let edge = graph.weight(&from.id, &to.id);
                if from.id == to.id {
                    prop_assert_eq!(edge, None);
                    continue;
                }
                let expected = compute_multiplier(
                    from.type_set().unwrap().as_slice(),
                    to.type_set().unwrap().as_slice(),
                );
                if expected > 0.0 {
                    prop_assert_eq!(edge, Some(expected));
                } else {
                    prop_assert_eq!(edge, None);
                }
            }
        }
    }

    #[test]
    fn strongest_counter_has_max_incoming_weight(roster in roster_strategy()) {
        let graph = CounterGraph::build(&roster).unwrap();
        for target in &roster {
            let preds = graph.predecessors(&target.id);
            match graph.strongest_counter_against(&target.id) {
                CounterLookup::Found(counter) => {
                    prop_assert!(preds.iter().all(|(_, w)| *w <= counter.weight));
                    prop_assert_eq!(graph.weight(&counter.id, &target.id), Some(counter.weight));
                }
                CounterLookup::NoEffectiveCounter => prop_assert!(preds.is_empty()),
                CounterLookup::NotInRoster => prop_assert!(false, "target missing"),
            }
        }
    }

    #[test]
    fn rebuilding_is_deterministic(roster in roster_strategy()) {
        let first = CounterGraph::build(&roster).unwrap();
        let second = CounterGraph::build(&roster).unwrap();
        prop_assert_eq!(first.edges(), second.edges());
    }
}
