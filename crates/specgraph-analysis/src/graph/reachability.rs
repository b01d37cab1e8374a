//! Upstream/downstream reachability over dependency edges.
//!
//! Both closures are reflexive — a node is in its own upstream and
//! downstream — so a highlight chain is simply `upstream ∪ downstream`.
//! A node inside a cycle sees every other cycle member as both ancestor
//! and descendant; that is intended behavior, not a defect.

use std::collections::VecDeque;

use petgraph::Direction;

use specgraph_core::FxHashSet;

use super::types::SpecGraph;

/// Everything `id` transitively depends on, including itself.
/// Unknown IDs yield an empty set.
pub fn upstream(graph: &SpecGraph, id: &str) -> FxHashSet<String> {
    reach(graph, id, Direction::Outgoing, None)
}

/// Everything that transitively depends on `id`, including itself.
pub fn downstream(graph: &SpecGraph, id: &str) -> FxHashSet<String> {
    reach(graph, id, Direction::Incoming, None)
}

/// Depth-limited variant of [`upstream`]. Depth 0 yields just the node.
pub fn upstream_within(graph: &SpecGraph, id: &str, max_depth: usize) -> FxHashSet<String> {
    reach(graph, id, Direction::Outgoing, Some(max_depth))
}

/// Depth-limited variant of [`downstream`].
pub fn downstream_within(graph: &SpecGraph, id: &str, max_depth: usize) -> FxHashSet<String> {
    reach(graph, id, Direction::Incoming, Some(max_depth))
}

/// The full highlight chain through `id`: ancestors ∪ descendants.
pub fn dependency_chain(graph: &SpecGraph, id: &str) -> FxHashSet<String> {
    let mut chain = upstream(graph, id);
    chain.extend(downstream(graph, id));
    chain
}

/// Generic BFS over dependency edges in a given direction.
fn reach(
    graph: &SpecGraph,
    id: &str,
    direction: Direction,
    max_depth: Option<usize>,
) -> FxHashSet<String> {
    let mut result = FxHashSet::default();
    let Some(start) = graph.node_index(id) else {
        return result;
    };

    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back((start, 0usize));

    while let Some((node, depth)) = queue.pop_front() {
        result.insert(graph.id_of(node).to_string());

        if let Some(max) = max_depth {
            if depth >= max {
                continue;
            }
        }

        for neighbor in graph.dependency_neighbors(node, direction) {
            if visited.insert(neighbor) {
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    result
}
