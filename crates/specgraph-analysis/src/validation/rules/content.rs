//! Content-quality heuristics. Everything here is informational and any
//! fix is non-destructive.

use specgraph_core::{FixOp, QuickFix, Severity, Spec, ValidationIssue};

use crate::validation::rule::ValidationRule;

use super::make_issue;

/// `content.context-format` — content is expected to open with a markdown
/// heading so the rendered panel has a title line.
pub struct ContextFormat;

impl ValidationRule for ContextFormat {
    fn code(&self) -> &'static str {
        "content.context-format"
    }

    fn check(&self, spec: &Spec, _all_specs: &[Spec]) -> Vec<ValidationIssue> {
        let Some(first) = spec.content.lines().find(|line| !line.trim().is_empty()) else {
            return Vec::new();
        };
        if first.trim_start().starts_with('#') {
            return Vec::new();
        }
        let mut issue = make_issue(
            Severity::Info,
            self.code(),
            &spec.id,
            Some("content"),
            "Content should open with a markdown heading".to_string(),
        );
        if let Some(location) = issue.location.as_mut() {
            location.line = Some(1);
        }
        vec![issue]
    }
}

/// `content.required-sections` — one issue per missing configured section
/// header; the fix appends the header at the end of the content.
pub struct RequiredSections {
    sections: Vec<String>,
}

impl RequiredSections {
    pub fn new(sections: Vec<String>) -> Self {
        Self { sections }
    }
}

impl ValidationRule for RequiredSections {
    fn code(&self) -> &'static str {
        "content.required-sections"
    }

    fn check(&self, spec: &Spec, _all_specs: &[Spec]) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for section in &self.sections {
            let present = spec
                .content
                .lines()
                .any(|line| line.trim_start().starts_with(section.as_str()));
            if present {
                continue;
            }
            let mut issue = make_issue(
                Severity::Warning,
                self.code(),
                &spec.id,
                Some("content"),
                format!("Missing section \"{}\"", section),
            );
            issue.id = format!("{}#{}#{}", self.code(), spec.id, section);
            issue.fixes.push(QuickFix {
                title: format!("Add \"{}\"", section),
                description: format!("Append a \"{}\" section header", section),
                op: FixOp::AppendSection {
                    header: section.clone(),
                },
            });
            issues.push(issue);
        }
        issues
    }
}

/// `content.criteria-format` — list items under the acceptance-criteria
/// section should be checkboxes so progress is trackable.
pub struct CriteriaFormat {
    section: String,
}

impl CriteriaFormat {
    pub fn new(section: String) -> Self {
        Self { section }
    }
}

impl ValidationRule for CriteriaFormat {
    fn code(&self) -> &'static str {
        "content.criteria-format"
    }

    fn check(&self, spec: &Spec, _all_specs: &[Spec]) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut in_section = false;

        for (line_idx, line) in spec.content.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with(self.section.as_str()) {
                in_section = true;
                continue;
            }
            if in_section && trimmed.starts_with("## ") {
                in_section = false;
            }
            if !in_section {
                continue;
            }

            let is_list_item = trimmed.starts_with("- ") || trimmed.starts_with("* ");
            let is_checkbox = trimmed.starts_with("- [") || trimmed.starts_with("* [");
            if is_list_item && !is_checkbox {
                let mut issue = make_issue(
                    Severity::Suggestion,
                    self.code(),
                    &spec.id,
                    Some("content"),
                    "Criteria items should be checkboxes (`- [ ]`)".to_string(),
                );
                let line_number = (line_idx + 1) as u32;
                issue.id = format!("{}#{}#{}", self.code(), spec.id, line_number);
                if let Some(location) = issue.location.as_mut() {
                    location.line = Some(line_number);
                }
                issues.push(issue);
            }
        }

        issues
    }
}

/// `content.length` — suspiciously short content.
pub struct ContentLength {
    min_length: usize,
}

impl ContentLength {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl ValidationRule for ContentLength {
    fn code(&self) -> &'static str {
        "content.length"
    }

    fn check(&self, spec: &Spec, _all_specs: &[Spec]) -> Vec<ValidationIssue> {
        let length = spec.content.trim().len();
        if length >= self.min_length {
            return Vec::new();
        }
        vec![make_issue(
            Severity::Info,
            self.code(),
            &spec.id,
            Some("content"),
            format!(
                "Content is {} characters; specs are expected to carry at least {}",
                length, self.min_length
            ),
        )]
    }
}
