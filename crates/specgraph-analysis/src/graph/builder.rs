//! Builds the spec graph from a snapshot plus the explicit link table.

use specgraph_core::{Link, LinkType, Spec};

use super::types::SpecGraph;

/// Build the dependency/link graph for a snapshot.
///
/// Phase 1: one node per snapshot spec, in snapshot order.
/// Phase 2: one `DependsOn` edge per dependency entry; endpoints without a
/// backing spec become unresolved nodes so broken references stay visible.
/// Phase 3: one typed edge per explicit link, merged with any existing
/// edge for the same ordered pair.
///
/// Deterministic, pure, O(V+E). Never errors: malformed data is the
/// validation pipeline's concern, not the builder's.
pub fn build_graph(specs: &[Spec], links: &[Link]) -> SpecGraph {
    let mut graph = SpecGraph::new();

    for spec in specs {
        graph.add_spec_node(&spec.id);
    }

    for spec in specs {
        for dep in &spec.dependencies {
            graph.add_typed_edge(&spec.id, dep, LinkType::DependsOn);
        }
    }

    for link in links {
        graph.add_typed_edge(&link.source, &link.target, link.link_type);
    }

    graph
}
