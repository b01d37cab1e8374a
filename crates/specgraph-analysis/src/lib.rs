//! # specgraph-analysis
//!
//! The spec relationship & validation engine. Turns an immutable snapshot
//! of specs plus an explicit link table into a directed graph, detects
//! cycles and dangling references, computes reachability closures for
//! chain highlighting, and produces ranked link suggestions and
//! broken-reference reports.
//!
//! Every entry point is a pure, synchronous function of its inputs; the
//! caller owns scheduling (debounce, supersede) and all persistence.

pub mod graph;
pub mod references;
pub mod suggest;
pub mod validation;

pub use graph::builder::build_graph;
pub use graph::cycles::{find_cycles, mark_cycles, Cycle, CycleBreakSuggestion};
pub use graph::reachability::{dependency_chain, downstream, upstream};
pub use graph::types::{EdgeView, GraphEdge, GraphNode, GraphView, NodeView, SpecGraph};
pub use references::ReferenceScanner;
pub use suggest::SuggestionEngine;
pub use validation::{CorpusReport, RuleRegistry, ValidationRule, Validator};
