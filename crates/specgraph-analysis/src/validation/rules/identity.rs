//! Identity rules — ID, title, status, phase.

use specgraph_core::{FixOp, QuickFix, Severity, Spec, SpecStatus, ValidationIssue};

use crate::validation::rule::ValidationRule;

use super::make_issue;

/// Valid phase range, inclusive.
const PHASE_RANGE: std::ops::RangeInclusive<i64> = 1..=99;

fn is_canonical_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= 4 && id.bytes().all(|b| b.is_ascii_digit())
}

/// `spec.required-id` — a spec without an ID cannot be referenced at all.
pub struct RequiredId;

impl ValidationRule for RequiredId {
    fn code(&self) -> &'static str {
        "spec.required-id"
    }

    fn check(&self, spec: &Spec, _all_specs: &[Spec]) -> Vec<ValidationIssue> {
        if !spec.id.trim().is_empty() {
            return Vec::new();
        }
        vec![make_issue(
            Severity::Error,
            self.code(),
            &spec.id,
            Some("id"),
            "Spec ID is required".to_string(),
        )]
    }
}

/// `spec.required-title`
pub struct RequiredTitle;

impl ValidationRule for RequiredTitle {
    fn code(&self) -> &'static str {
        "spec.required-title"
    }

    fn check(&self, spec: &Spec, _all_specs: &[Spec]) -> Vec<ValidationIssue> {
        if !spec.title.trim().is_empty() {
            return Vec::new();
        }
        vec![make_issue(
            Severity::Error,
            self.code(),
            &spec.id,
            Some("title"),
            "Spec title is required".to_string(),
        )]
    }
}

/// `spec.id-format` — canonical IDs are 1–4 digit numerals. Empty IDs are
/// `spec.required-id`'s concern and not reported twice.
pub struct IdFormat;

impl ValidationRule for IdFormat {
    fn code(&self) -> &'static str {
        "spec.id-format"
    }

    fn check(&self, spec: &Spec, _all_specs: &[Spec]) -> Vec<ValidationIssue> {
        if spec.id.trim().is_empty() || is_canonical_id(&spec.id) {
            return Vec::new();
        }
        let mut issue = make_issue(
            Severity::Error,
            self.code(),
            &spec.id,
            Some("id"),
            format!("Spec ID \"{}\" is not a 1–4 digit numeral", spec.id),
        );
        issue.fixes.push(QuickFix {
            title: "Normalize ID".to_string(),
            description: "Strip non-digit characters and truncate to 4 digits".to_string(),
            op: FixOp::NormalizeId,
        });
        vec![issue]
    }
}

/// `spec.unique-id` — duplicate IDs are reported on every holder, with no
/// fix: the engine cannot know which spec is the right one.
pub struct UniqueId;

impl ValidationRule for UniqueId {
    fn code(&self) -> &'static str {
        "spec.unique-id"
    }

    fn check(&self, spec: &Spec, all_specs: &[Spec]) -> Vec<ValidationIssue> {
        if spec.id.trim().is_empty() {
            return Vec::new();
        }
        let holders = all_specs.iter().filter(|other| other.id == spec.id).count();
        if holders <= 1 {
            return Vec::new();
        }
        vec![make_issue(
            Severity::Error,
            self.code(),
            &spec.id,
            Some("id"),
            format!("Duplicate spec ID: {} specs share ID {}", holders, spec.id),
        )]
    }
}

/// `spec.valid-status`
pub struct ValidStatus;

impl ValidationRule for ValidStatus {
    fn code(&self) -> &'static str {
        "spec.valid-status"
    }

    fn check(&self, spec: &Spec, _all_specs: &[Spec]) -> Vec<ValidationIssue> {
        if SpecStatus::parse_str(&spec.status).is_some() {
            return Vec::new();
        }
        let valid: Vec<&str> = SpecStatus::all().iter().map(|s| s.name()).collect();
        let mut issue = make_issue(
            Severity::Error,
            self.code(),
            &spec.id,
            Some("status"),
            format!(
                "Unknown status \"{}\" (valid: {})",
                spec.status,
                valid.join(", ")
            ),
        );
        issue.fixes.push(QuickFix {
            title: "Reset status".to_string(),
            description: "Set status to \"planned\"".to_string(),
            op: FixOp::ResetStatus,
        });
        vec![issue]
    }
}

/// `spec.valid-phase`
pub struct ValidPhase;

impl ValidationRule for ValidPhase {
    fn code(&self) -> &'static str {
        "spec.valid-phase"
    }

    fn check(&self, spec: &Spec, _all_specs: &[Spec]) -> Vec<ValidationIssue> {
        if PHASE_RANGE.contains(&spec.phase) {
            return Vec::new();
        }
        let mut issue = make_issue(
            Severity::Error,
            self.code(),
            &spec.id,
            Some("phase"),
            format!("Phase {} is outside the valid range 1–99", spec.phase),
        );
        issue.fixes.push(QuickFix {
            title: "Clamp phase".to_string(),
            description: "Clamp phase into the 1–99 range".to_string(),
            op: FixOp::ClampPhase,
        });
        vec![issue]
    }
}
