//! Graph builder tests: node/edge construction, unresolved endpoints,
//! duplicate-edge merging, and the end-to-end snapshot scenario.

use specgraph_analysis::graph::builder::build_graph;
use specgraph_analysis::graph::cycles::find_cycles;
use specgraph_analysis::graph::reachability::{downstream, upstream};
use specgraph_core::{Link, LinkType, Spec};

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

fn make_link(source: &str, target: &str, link_type: LinkType) -> Link {
    Link {
        source: source.to_string(),
        target: target.to_string(),
        link_type,
        is_auto_detected: false,
        context: None,
    }
}

#[test]
fn one_node_per_spec() {
    let specs = vec![make_spec("1", &[]), make_spec("2", &[]), make_spec("3", &[])];
    let graph = build_graph(&specs, &[]);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.contains("1"));
    assert!(graph.contains("2"));
    assert!(graph.contains("3"));
}

#[test]
fn dangling_dependency_becomes_unresolved_node() {
    let specs = vec![make_spec("1", &["999"])];
    let graph = build_graph(&specs, &[]);

    assert_eq!(graph.node_count(), 2);
    let view = graph.to_view();
    let dangling = view.nodes.iter().find(|n| n.id == "999").unwrap();
    assert!(dangling.unresolved);
    let own = view.nodes.iter().find(|n| n.id == "1").unwrap();
    assert!(!own.unresolved);
}

#[test]
fn dangling_link_endpoints_become_unresolved_nodes() {
    let specs = vec![make_spec("1", &[])];
    let links = vec![make_link("1", "42", LinkType::Related)];
    let graph = build_graph(&specs, &links);

    let view = graph.to_view();
    assert!(view.nodes.iter().any(|n| n.id == "42" && n.unresolved));
}

#[test]
fn duplicate_dependency_entries_collapse_to_one_edge() {
    let specs = vec![make_spec("1", &["2", "2", "2"]), make_spec("2", &[])];
    let graph = build_graph(&specs, &[]);

    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn dependency_and_link_between_same_pair_merge_types() {
    let specs = vec![make_spec("1", &["2"]), make_spec("2", &[])];
    let links = vec![make_link("1", "2", LinkType::Related)];
    let graph = build_graph(&specs, &links);

    assert_eq!(graph.edge_count(), 1);
    let view = graph.to_view();
    let edge = &view.edges[0];
    assert_eq!(edge.source, "1");
    assert_eq!(edge.target, "2");
    assert!(edge.types.contains(&LinkType::DependsOn));
    assert!(edge.types.contains(&LinkType::Related));
}

#[test]
fn same_link_type_twice_is_not_duplicated() {
    let specs = vec![make_spec("1", &[]), make_spec("2", &[])];
    let links = vec![
        make_link("1", "2", LinkType::Blocks),
        make_link("1", "2", LinkType::Blocks),
    ];
    let graph = build_graph(&specs, &links);

    let view = graph.to_view();
    assert_eq!(view.edges.len(), 1);
    assert_eq!(view.edges[0].types, vec![LinkType::Blocks]);
}

#[test]
fn opposite_directions_stay_separate_edges() {
    let specs = vec![make_spec("1", &["2"]), make_spec("2", &["1"])];
    let graph = build_graph(&specs, &[]);

    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn empty_snapshot_builds_empty_graph() {
    let graph = build_graph(&[], &[]);
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn view_serializes_for_the_ui() {
    let specs = vec![make_spec("1", &["2"]), make_spec("2", &[])];
    let graph = build_graph(&specs, &[]);

    let json = serde_json::to_string(&graph.to_view()).unwrap();
    assert!(json.contains("\"depends_on\""));
    assert!(json.contains("\"unresolved\":false"));
}

// End-to-end snapshot scenario:
//   1 ← 2 ← 3  (3 also depends on 1 directly)
#[test]
fn end_to_end_snapshot_scenario() {
    let specs = vec![
        make_spec("1", &[]),
        make_spec("2", &["1"]),
        make_spec("3", &["1", "2"]),
    ];
    let graph = build_graph(&specs, &[]);

    let up = upstream(&graph, "3");
    assert_eq!(up.len(), 3);
    assert!(up.contains("1") && up.contains("2") && up.contains("3"));

    let down = downstream(&graph, "1");
    assert_eq!(down.len(), 3);
    assert!(down.contains("1") && down.contains("2") && down.contains("3"));

    assert!(find_cycles(&graph).is_empty());
}
