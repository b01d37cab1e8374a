//! Dependency cycle detection.
//!
//! DFS with an explicit recursion stack over dependency-typed edges only —
//! `related`/`references` links carry no ordering and never form cycles.
//! Roots are taken in node insertion order, so which node starts a printed
//! cycle is a stated convention, not an accident.

use petgraph::graph::NodeIndex;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use specgraph_core::{FxHashMap, FxHashSet};

use super::types::SpecGraph;

/// One dependency cycle: the ordered node IDs from the repeated node back
/// to itself. A self-loop is a cycle of length 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    pub path: Vec<String>,
    /// Advisory edges to break, lowest impact first. Cycles are never
    /// auto-fixed; choosing the edge to remove is a human decision.
    pub break_suggestions: Vec<CycleBreakSuggestion>,
}

/// A dependency edge inside a cycle that could be removed to break it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleBreakSuggestion {
    pub from: String,
    pub to: String,
    /// 1.0 when `to` has no other dependents inside the cycle, else the
    /// inverse of its in-degree within the cycle. Lower = easier to break.
    pub impact_score: f64,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

struct Frame {
    node: NodeIndex,
    neighbors: Vec<NodeIndex>,
    cursor: usize,
}

/// Find every dependency cycle in the graph.
///
/// The graph may be disconnected; DFS restarts from each unvisited node.
/// A back edge to a node on the current stack closes a cycle, which is
/// reconstructed by slicing the stack from the repeated node onward.
/// Each back edge reports exactly once.
pub fn find_cycles(graph: &SpecGraph) -> Vec<Cycle> {
    let mut color = vec![Color::White; graph.node_count()];
    let mut cycles = Vec::new();

    for root in graph.graph.node_indices() {
        if color[root.index()] != Color::White {
            continue;
        }

        let mut stack: Vec<Frame> = Vec::new();
        let mut path: Vec<NodeIndex> = Vec::new();
        let mut path_position: FxHashMap<NodeIndex, usize> = FxHashMap::default();

        color[root.index()] = Color::Gray;
        path_position.insert(root, 0);
        path.push(root);
        stack.push(Frame {
            node: root,
            neighbors: graph.dependency_neighbors(root, Direction::Outgoing),
            cursor: 0,
        });

        loop {
            let next = match stack.last_mut() {
                Some(frame) => {
                    let next = frame.neighbors.get(frame.cursor).copied();
                    if next.is_some() {
                        frame.cursor += 1;
                    }
                    next
                }
                None => break,
            };

            match next {
                Some(next) => match color[next.index()] {
                    Color::White => {
                        color[next.index()] = Color::Gray;
                        path_position.insert(next, path.len());
                        path.push(next);
                        stack.push(Frame {
                            node: next,
                            neighbors: graph.dependency_neighbors(next, Direction::Outgoing),
                            cursor: 0,
                        });
                    }
                    Color::Gray => {
                        let start = path_position[&next];
                        cycles.push(build_cycle(graph, &path[start..]));
                    }
                    Color::Black => {}
                },
                None => {
                    if let Some(frame) = stack.pop() {
                        color[frame.node.index()] = Color::Black;
                        path_position.remove(&frame.node);
                        path.pop();
                    }
                }
            }
        }
    }

    cycles
}

/// Run [`find_cycles`] and tag every implicated node and dependency edge
/// `is_circular` for the caller to render. Returns the cycles found.
pub fn mark_cycles(graph: &mut SpecGraph) -> Vec<Cycle> {
    let cycles = find_cycles(graph);

    for cycle in &cycles {
        let len = cycle.path.len();
        for (i, id) in cycle.path.iter().enumerate() {
            let Some(idx) = graph.node_index(id) else { continue };
            graph.graph[idx].is_circular = true;

            let next_id = &cycle.path[(i + 1) % len];
            let Some(next_idx) = graph.node_index(next_id) else { continue };
            if let Some(edge) = graph.graph.find_edge(idx, next_idx) {
                if graph.graph[edge].is_dependency() {
                    graph.graph[edge].is_circular = true;
                }
            }
        }
    }

    cycles
}

fn build_cycle(graph: &SpecGraph, members: &[NodeIndex]) -> Cycle {
    let path = members
        .iter()
        .map(|&node| graph.id_of(node).to_string())
        .collect();
    Cycle {
        path,
        break_suggestions: suggest_cycle_breaks(graph, members),
    }
}

/// Score every dependency edge inside the cycle by the in-degree of its
/// target among cycle members. An edge into a node with other dependents
/// is cheaper to remove, so it sorts first.
fn suggest_cycle_breaks(graph: &SpecGraph, members: &[NodeIndex]) -> Vec<CycleBreakSuggestion> {
    let member_set: FxHashSet<NodeIndex> = members.iter().copied().collect();
    let mut suggestions = Vec::new();

    for &node in members {
        for target in graph.dependency_neighbors(node, Direction::Outgoing) {
            if !member_set.contains(&target) {
                continue;
            }
            let in_degree = graph
                .dependency_neighbors(target, Direction::Incoming)
                .into_iter()
                .filter(|source| member_set.contains(source))
                .count();
            let impact_score = if in_degree <= 1 {
                1.0
            } else {
                1.0 / in_degree as f64
            };
            suggestions.push(CycleBreakSuggestion {
                from: graph.id_of(node).to_string(),
                to: graph.id_of(target).to_string(),
                impact_score,
            });
        }
    }

    suggestions.sort_by(|a, b| {
        a.impact_score
            .partial_cmp(&b.impact_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions
}
