//! Validation issues and their attached quick fixes.

use serde::{Deserialize, Serialize};

use super::spec::{Spec, SpecStatus};

/// Issue severity, ordered so that sorting ascending puts errors first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Suggestion,
}

impl Severity {
    /// Severity name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Suggestion => "suggestion",
        }
    }
}

/// Where an issue was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLocation {
    pub spec_id: String,
    /// 1-based line number within `content`, when the issue is textual.
    pub line: Option<u32>,
    /// Field name the issue refers to (`id`, `status`, `dependencies`, ...).
    pub field: Option<String>,
}

/// A single validation finding — the universal output of the rule pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Opaque, stable identifier for this finding.
    pub id: String,
    pub severity: Severity,
    /// Dot-separated rule identifier, e.g. `dependencies.circular`.
    pub code: String,
    pub message: String,
    pub location: Option<IssueLocation>,
    pub fixes: Vec<QuickFix>,
}

/// A proposed edit that resolves one validation issue.
///
/// Modeled as a tagged operation rather than a closure so fixes stay
/// serializable; `apply` dispatches on the tag. Applying a fix twice
/// yields the same spec as applying it once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickFix {
    pub title: String,
    pub description: String,
    pub op: FixOp,
}

/// The fix operations the engine knows how to propose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FixOp {
    /// Strip non-digits from the ID and truncate to 4 characters.
    NormalizeId,
    /// Reset an unrecognized status to `planned`.
    ResetStatus,
    /// Clamp phase into the valid 1–99 range.
    ClampPhase,
    /// Remove every occurrence of one dependency ID, keeping the rest in order.
    RemoveDependency { target: String },
    /// Append a missing section header to the end of the content.
    AppendSection { header: String },
}

impl QuickFix {
    /// Apply this fix to a spec, returning the fixed copy.
    pub fn apply(&self, spec: &Spec) -> Spec {
        self.op.apply(spec)
    }
}

impl FixOp {
    /// Apply the operation. Pure and idempotent: re-applying to an
    /// already-fixed spec is a no-op.
    pub fn apply(&self, spec: &Spec) -> Spec {
        let mut fixed = spec.clone();
        match self {
            Self::NormalizeId => {
                fixed.id = spec.id.chars().filter(char::is_ascii_digit).take(4).collect();
            }
            Self::ResetStatus => {
                if SpecStatus::parse_str(&fixed.status).is_none() {
                    fixed.status = SpecStatus::Planned.name().to_string();
                }
            }
            Self::ClampPhase => {
                fixed.phase = spec.phase.clamp(1, 99);
            }
            Self::RemoveDependency { target } => {
                fixed.dependencies.retain(|dep| dep != target);
            }
            Self::AppendSection { header } => {
                let present = fixed
                    .content
                    .lines()
                    .any(|line| line.trim_start().starts_with(header.as_str()));
                if !present {
                    if !fixed.content.is_empty() && !fixed.content.ends_with('\n') {
                        fixed.content.push('\n');
                    }
                    fixed.content.push('\n');
                    fixed.content.push_str(header);
                    fixed.content.push('\n');
                }
            }
        }
        fixed
    }
}
