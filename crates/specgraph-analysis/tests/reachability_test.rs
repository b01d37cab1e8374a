//! Reachability tests: reflexive closures, cycle behavior, depth limits.

use specgraph_analysis::graph::builder::build_graph;
use specgraph_analysis::graph::reachability::{
    dependency_chain, downstream, downstream_within, upstream, upstream_within,
};
use specgraph_core::Spec;

fn make_spec(id: &str, deps: &[&str]) -> Spec {
    Spec {
        id: id.to_string(),
        title: format!("Spec {}", id),
        status: "planned".to_string(),
        phase: 1,
        dependencies: deps.iter().map(|d| d.to_string()).collect(),
        tags: Vec::new(),
        content: String::new(),
    }
}

#[test]
fn closures_are_reflexive() {
    let specs = vec![make_spec("1", &[])];
    let graph = build_graph(&specs, &[]);

    assert_eq!(upstream(&graph, "1").len(), 1);
    assert!(upstream(&graph, "1").contains("1"));
    assert!(downstream(&graph, "1").contains("1"));
}

#[test]
fn chain_closures() {
    //  3 → 2 → 1
    let specs = vec![
        make_spec("1", &[]),
        make_spec("2", &["1"]),
        make_spec("3", &["2"]),
    ];
    let graph = build_graph(&specs, &[]);

    let up = upstream(&graph, "3");
    assert_eq!(up.len(), 3);

    let down = downstream(&graph, "1");
    assert_eq!(down.len(), 3);

    assert_eq!(upstream(&graph, "1").len(), 1);
    assert_eq!(downstream(&graph, "3").len(), 1);
}

#[test]
fn intersection_is_just_the_node_outside_cycles() {
    let specs = vec![
        make_spec("1", &[]),
        make_spec("2", &["1"]),
        make_spec("3", &["2"]),
    ];
    let graph = build_graph(&specs, &[]);

    for id in ["1", "2", "3"] {
        let up = upstream(&graph, id);
        let down = downstream(&graph, id);
        let intersection: Vec<&String> = up.intersection(&down).collect();
        assert_eq!(intersection, vec![id]);
    }
}

#[test]
fn cycle_members_see_each_other_in_both_directions() {
    //  1 → 2 → 3 → 1
    let specs = vec![
        make_spec("1", &["2"]),
        make_spec("2", &["3"]),
        make_spec("3", &["1"]),
    ];
    let graph = build_graph(&specs, &[]);

    let up = upstream(&graph, "2");
    let down = downstream(&graph, "2");
    assert_eq!(up.len(), 3);
    assert_eq!(down.len(), 3);

    let intersection: Vec<&String> = up.intersection(&down).collect();
    assert_eq!(intersection.len(), 3);
}

#[test]
fn unknown_id_yields_empty_sets() {
    let specs = vec![make_spec("1", &[])];
    let graph = build_graph(&specs, &[]);

    assert!(upstream(&graph, "404").is_empty());
    assert!(downstream(&graph, "404").is_empty());
    assert!(dependency_chain(&graph, "404").is_empty());
}

#[test]
fn unresolved_nodes_are_reachable() {
    // A dangling dependency still shows up in the closure so broken
    // chains stay visible for highlighting.
    let specs = vec![make_spec("1", &["999"])];
    let graph = build_graph(&specs, &[]);

    assert!(upstream(&graph, "1").contains("999"));
    assert!(downstream(&graph, "999").contains("1"));
}

#[test]
fn depth_limits() {
    //  3 → 2 → 1
    let specs = vec![
        make_spec("1", &[]),
        make_spec("2", &["1"]),
        make_spec("3", &["2"]),
    ];
    let graph = build_graph(&specs, &[]);

    assert_eq!(upstream_within(&graph, "3", 0).len(), 1);
    assert_eq!(upstream_within(&graph, "3", 1).len(), 2);
    assert_eq!(upstream_within(&graph, "3", 2).len(), 3);
    assert_eq!(downstream_within(&graph, "1", 1).len(), 2);

    // Depth-limited results are subsets of the full closure.
    let full = upstream(&graph, "3");
    for id in upstream_within(&graph, "3", 1) {
        assert!(full.contains(&id));
    }
}

#[test]
fn chain_is_union_of_both_closures() {
    //  4 → 3 → 2 → 1, chain of "2" covers everything
    let specs = vec![
        make_spec("1", &[]),
        make_spec("2", &["1"]),
        make_spec("3", &["2"]),
        make_spec("4", &["3"]),
    ];
    let graph = build_graph(&specs, &[]);

    let chain = dependency_chain(&graph, "2");
    assert_eq!(chain.len(), 4);
}
