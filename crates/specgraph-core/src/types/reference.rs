//! Broken textual spec references.

use serde::{Deserialize, Serialize};

/// A textual reference in a spec's content whose target ID does not exist
/// in the known ID universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenLink {
    /// Spec whose content holds the reference.
    pub spec_id: String,
    /// The literal matched text, e.g. `Spec 999`.
    pub link_text: String,
    /// The extracted target ID, e.g. `999`.
    pub target_reference: String,
    /// 1-based line number within the content.
    pub line_number: u32,
}
