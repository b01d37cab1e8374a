//! RuleRegistry — register, enable/disable, run with panic containment.

use std::panic::{catch_unwind, AssertUnwindSafe};

use specgraph_core::{EngineConfig, FxHashSet, Spec, ValidationIssue};

use super::rule::ValidationRule;
use super::rules::{content, dependencies, identity};

/// Registry of validation rules. Rules run in registration order; output
/// order is a property of the severity sort, not of evaluation order.
pub struct RuleRegistry {
    rules: Vec<Box<dyn ValidationRule>>,
    disabled: FxHashSet<String>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            disabled: FxHashSet::default(),
        }
    }

    /// Register a rule. Appending is the extension point for custom rules.
    pub fn register(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Disable a specific rule by code.
    pub fn disable(&mut self, code: &str) {
        self.disabled.insert(code.to_string());
    }

    /// Enable a previously disabled rule.
    pub fn enable(&mut self, code: &str) {
        self.disabled.remove(code);
    }

    /// Total number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Number of enabled rules.
    pub fn enabled_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|rule| !self.disabled.contains(rule.code()))
            .count()
    }

    /// Run all enabled rules over one spec and sort the concatenated
    /// issues by severity (errors first; the sort is stable, so rule
    /// order is preserved within a severity).
    ///
    /// A panicking rule is logged and skipped so one bad custom rule
    /// cannot poison the whole pass.
    pub fn run_all(&self, spec: &Spec, all_specs: &[Spec]) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for rule in &self.rules {
            if self.disabled.contains(rule.code()) {
                continue;
            }
            let result = catch_unwind(AssertUnwindSafe(|| rule.check(spec, all_specs)));
            match result {
                Ok(found) => issues.extend(found),
                Err(_) => {
                    tracing::error!(
                        rule = rule.code(),
                        spec = %spec.id,
                        "validation rule panicked during check"
                    );
                }
            }
        }
        issues.sort_by_key(|issue| issue.severity);
        issues
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a registry with the canonical rule set, in canonical order.
pub fn default_registry(config: &EngineConfig) -> RuleRegistry {
    let mut registry = RuleRegistry::new();

    registry.register(Box::new(identity::RequiredId));
    registry.register(Box::new(identity::RequiredTitle));
    registry.register(Box::new(identity::IdFormat));
    registry.register(Box::new(identity::UniqueId));
    registry.register(Box::new(identity::ValidStatus));
    registry.register(Box::new(identity::ValidPhase));
    registry.register(Box::new(dependencies::DependenciesExist));
    registry.register(Box::new(dependencies::SelfDependency));
    registry.register(Box::new(dependencies::CircularDependencies));
    registry.register(Box::new(content::ContextFormat));
    registry.register(Box::new(content::RequiredSections::new(
        config.required_sections.clone(),
    )));
    registry.register(Box::new(content::CriteriaFormat::new(
        config.criteria_section.clone(),
    )));
    registry.register(Box::new(content::ContentLength::new(
        config.min_content_length,
    )));

    registry
}
