//! The spec graph — petgraph `DiGraph` wrapped with an ID index.

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use specgraph_core::{FxHashMap, LinkType};

/// A node in the spec graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    /// True when the ID was only ever seen as a dependency/link endpoint
    /// and has no backing spec in the snapshot.
    pub unresolved: bool,
    /// Set by [`super::cycles::mark_cycles`] when the node sits on a cycle.
    pub is_circular: bool,
}

/// An edge in the spec graph. One edge per ordered pair of nodes; an edge
/// can carry several relation types at once (a declared dependency that is
/// also an explicit "related" link).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub types: SmallVec<[LinkType; 2]>,
    pub is_circular: bool,
}

impl GraphEdge {
    /// Whether this edge carries dependency semantics (and so participates
    /// in cycle detection and reachability).
    pub fn is_dependency(&self) -> bool {
        self.types.contains(&LinkType::DependsOn)
    }
}

/// Directed graph over spec IDs: nodes are specs (or unresolved endpoints),
/// edges are dependency/link relations. Derived from a snapshot, never
/// stored. Node and edge iteration order is insertion order, which the
/// builder keeps deterministic.
#[derive(Debug, Clone, Default)]
pub struct SpecGraph {
    pub graph: DiGraph<GraphNode, GraphEdge>,
    node_map: FxHashMap<String, NodeIndex>,
}

impl SpecGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or upgrade) a node backed by a snapshot spec.
    pub fn add_spec_node(&mut self, id: &str) -> NodeIndex {
        match self.node_map.get(id) {
            Some(&idx) => {
                self.graph[idx].unresolved = false;
                idx
            }
            None => self.insert_node(id, false),
        }
    }

    /// Ensure a node exists for an ID seen only as an endpoint. Newly
    /// created nodes are marked unresolved.
    pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
        match self.node_map.get(id) {
            Some(&idx) => idx,
            None => self.insert_node(id, true),
        }
    }

    fn insert_node(&mut self, id: &str, unresolved: bool) -> NodeIndex {
        let idx = self.graph.add_node(GraphNode {
            id: id.to_string(),
            unresolved,
            is_circular: false,
        });
        self.node_map.insert(id.to_string(), idx);
        idx
    }

    /// Add a typed edge, merging into an existing edge for the same
    /// ordered pair instead of duplicating it.
    pub fn add_typed_edge(&mut self, source: &str, target: &str, link_type: LinkType) -> EdgeIndex {
        let src = self.ensure_node(source);
        let dst = self.ensure_node(target);
        match self.graph.find_edge(src, dst) {
            Some(edge) => {
                let weight = &mut self.graph[edge];
                if !weight.types.contains(&link_type) {
                    weight.types.push(link_type);
                }
                edge
            }
            None => self.graph.add_edge(
                src,
                dst,
                GraphEdge {
                    types: SmallVec::from_elem(link_type, 1),
                    is_circular: false,
                },
            ),
        }
    }

    /// Look up a node index by spec ID.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    /// The spec ID of a node.
    pub fn id_of(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].id
    }

    /// Whether an ID is present (as a spec or an unresolved endpoint).
    pub fn contains(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Neighbors across dependency-typed edges only, in the given
    /// direction. `Outgoing` walks toward what a spec depends on,
    /// `Incoming` toward its dependents.
    pub fn dependency_neighbors(&self, idx: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
        self.graph
            .edges_directed(idx, direction)
            .filter(|edge| edge.weight().is_dependency())
            .map(|edge| match direction {
                Direction::Outgoing => edge.target(),
                Direction::Incoming => edge.source(),
            })
            .collect()
    }

    /// Export the graph in the flat shape the visualization UI consumes.
    pub fn to_view(&self) -> GraphView {
        let nodes = self
            .graph
            .node_indices()
            .map(|idx| {
                let node = &self.graph[idx];
                NodeView {
                    id: node.id.clone(),
                    unresolved: node.unresolved,
                    is_circular: node.is_circular,
                }
            })
            .collect();
        let edges = self
            .graph
            .edge_references()
            .map(|edge| EdgeView {
                source: self.graph[edge.source()].id.clone(),
                target: self.graph[edge.target()].id.clone(),
                types: edge.weight().types.to_vec(),
                is_circular: edge.weight().is_circular,
            })
            .collect();
        GraphView { nodes, edges }
    }
}

/// Serializable graph snapshot for the UI. Layout is not computed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphView {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: String,
    pub unresolved: bool,
    pub is_circular: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeView {
    pub source: String,
    pub target: String,
    pub types: Vec<LinkType>,
    pub is_circular: bool,
}
