//! The rule seam of the validation pipeline.

use specgraph_core::{Spec, ValidationIssue};

/// A single validation rule: a pure check of one spec against the full
/// snapshot. Rules are values behind one interface rather than a fixed
/// enum, so callers can append their own without touching the built-ins.
///
/// `Send + Sync` so corpus passes can fan rules out across threads.
pub trait ValidationRule: Send + Sync {
    /// Dot-separated rule identifier, e.g. `dependencies.circular`.
    /// Also the handle for enabling/disabling the rule.
    fn code(&self) -> &'static str;

    /// Check one spec. Data problems become issues, never panics or
    /// errors; the spec may be arbitrarily malformed.
    fn check(&self, spec: &Spec, all_specs: &[Spec]) -> Vec<ValidationIssue>;
}
