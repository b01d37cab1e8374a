//! # specgraph-core
//!
//! Foundation crate for the specgraph engine.
//! Defines the spec/link domain types, the validation issue model with
//! quick fixes, engine configuration, and errors.
//! The analysis crate depends on this; this crate holds no algorithms.

pub mod config;
pub mod errors;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::ConfigError;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::issue::{FixOp, IssueLocation, QuickFix, Severity, ValidationIssue};
pub use types::link::{Link, LinkType};
pub use types::reference::BrokenLink;
pub use types::spec::{Spec, SpecStatus};
pub use types::suggestion::LinkSuggestion;
