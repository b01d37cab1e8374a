//! Confidence-scored link suggestions.

use serde::{Deserialize, Serialize};

use super::link::LinkType;

/// A proposed link from the suggestion engine. Confidence is the sum of
/// matched signal weights, always within [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSuggestion {
    pub target_spec_id: String,
    pub link_type: LinkType,
    pub confidence: f64,
    /// Human-readable summary of the signals that matched.
    pub reason: String,
    /// First content line that mentioned the target, when that signal fired.
    pub context: Option<String>,
}
