//! The built-in validation rules.

pub mod content;
pub mod dependencies;
pub mod identity;

use specgraph_core::{IssueLocation, Severity, ValidationIssue};

/// Construct an issue with the common shape; rules adjust `id`, line, or
/// fixes afterwards where they need to.
pub(crate) fn make_issue(
    severity: Severity,
    code: &'static str,
    spec_id: &str,
    field: Option<&str>,
    message: String,
) -> ValidationIssue {
    ValidationIssue {
        id: format!("{}#{}", code, spec_id),
        severity,
        code: code.to_string(),
        message,
        location: Some(IssueLocation {
            spec_id: spec_id.to_string(),
            line: None,
            field: field.map(str::to_string),
        }),
        fixes: Vec::new(),
    }
}
