//! The validation pipeline: rule trait, registry, and the validator facade.

pub mod registry;
pub mod rule;
pub mod rules;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use specgraph_core::{EngineConfig, Severity, Spec, ValidationIssue};

pub use registry::{default_registry, RuleRegistry};
pub use rule::ValidationRule;

/// Facade over the rule registry. Pure and idempotent: the same snapshot
/// always yields list-equal results, and applying an issue's quick fix
/// then re-validating removes that issue.
pub struct Validator {
    registry: RuleRegistry,
}

impl Validator {
    /// Validator with the canonical rule set.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            registry: default_registry(config),
        }
    }

    /// Validator over a caller-assembled registry.
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Mutable access to the registry, for registering custom rules or
    /// toggling built-ins.
    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Validate one spec against the snapshot. Issues come back sorted by
    /// severity, errors first.
    pub fn validate(&self, spec: &Spec, all_specs: &[Spec]) -> Vec<ValidationIssue> {
        self.registry.run_all(spec, all_specs)
    }

    /// Validate the whole snapshot, one entry per spec in snapshot order.
    /// Specs validate in parallel; each still sees the full snapshot.
    pub fn validate_corpus(&self, all_specs: &[Spec]) -> CorpusReport {
        let per_spec: Vec<SpecIssues> = all_specs
            .par_iter()
            .map(|spec| SpecIssues {
                spec_id: spec.id.clone(),
                issues: self.registry.run_all(spec, all_specs),
            })
            .collect();

        let mut report = CorpusReport {
            per_spec,
            error_count: 0,
            warning_count: 0,
            info_count: 0,
            suggestion_count: 0,
        };
        for entry in &report.per_spec {
            for issue in &entry.issues {
                match issue.severity {
                    Severity::Error => report.error_count += 1,
                    Severity::Warning => report.warning_count += 1,
                    Severity::Info => report.info_count += 1,
                    Severity::Suggestion => report.suggestion_count += 1,
                }
            }
        }

        tracing::debug!(
            specs = all_specs.len(),
            errors = report.error_count,
            warnings = report.warning_count,
            "corpus validation pass complete"
        );
        report
    }
}

/// Issues for one spec of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecIssues {
    pub spec_id: String,
    pub issues: Vec<ValidationIssue>,
}

/// Whole-snapshot validation result with per-severity counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    pub per_spec: Vec<SpecIssues>,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    pub suggestion_count: usize,
}

impl CorpusReport {
    /// Total issues across the snapshot.
    pub fn total(&self) -> usize {
        self.error_count + self.warning_count + self.info_count + self.suggestion_count
    }

    /// Whether the snapshot is free of error-severity issues. Warnings do
    /// not block; the caller decides what blocks a save.
    pub fn is_error_free(&self) -> bool {
        self.error_count == 0
    }
}
