//! Dependency rules — resolution, self-reference, cycles.

use specgraph_core::{FixOp, FxHashSet, QuickFix, Severity, Spec, ValidationIssue};

use crate::graph::builder::build_graph;
use crate::graph::cycles::find_cycles;
use crate::validation::rule::ValidationRule;

use super::make_issue;

/// `dependencies.exist` — every dependency ID must resolve against the
/// snapshot. One issue per unresolved ID; the fix removes exactly that ID
/// and keeps the order and count of the rest.
pub struct DependenciesExist;

impl ValidationRule for DependenciesExist {
    fn code(&self) -> &'static str {
        "dependencies.exist"
    }

    fn check(&self, spec: &Spec, all_specs: &[Spec]) -> Vec<ValidationIssue> {
        let known: FxHashSet<&str> = all_specs.iter().map(|s| s.id.as_str()).collect();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut issues = Vec::new();

        for dep in &spec.dependencies {
            if known.contains(dep.as_str()) || !seen.insert(dep.as_str()) {
                continue;
            }
            let mut issue = make_issue(
                Severity::Error,
                self.code(),
                &spec.id,
                Some("dependencies"),
                format!("Dependency \"{}\" does not resolve to any spec", dep),
            );
            issue.id = format!("{}#{}#{}", self.code(), spec.id, dep);
            issue.fixes.push(QuickFix {
                title: format!("Remove dependency {}", dep),
                description: format!("Remove the unresolved dependency \"{}\"", dep),
                op: FixOp::RemoveDependency {
                    target: dep.clone(),
                },
            });
            issues.push(issue);
        }

        issues
    }
}

/// `dependencies.self`
pub struct SelfDependency;

impl ValidationRule for SelfDependency {
    fn code(&self) -> &'static str {
        "dependencies.self"
    }

    fn check(&self, spec: &Spec, _all_specs: &[Spec]) -> Vec<ValidationIssue> {
        if spec.id.is_empty() || !spec.dependencies.iter().any(|dep| dep == &spec.id) {
            return Vec::new();
        }
        let mut issue = make_issue(
            Severity::Error,
            self.code(),
            &spec.id,
            Some("dependencies"),
            format!("Spec {} depends on itself", spec.id),
        );
        issue.fixes.push(QuickFix {
            title: "Remove self-dependency".to_string(),
            description: format!("Remove \"{}\" from its own dependency list", spec.id),
            op: FixOp::RemoveDependency {
                target: spec.id.clone(),
            },
        });
        vec![issue]
    }
}

/// `dependencies.circular` — builds the dependency graph over the whole
/// snapshot and reports every cycle this spec participates in, with the
/// full cycle path in the message. No fix: which edge to break is a human
/// decision, so the cycle's break suggestions stay advisory.
pub struct CircularDependencies;

impl ValidationRule for CircularDependencies {
    fn code(&self) -> &'static str {
        "dependencies.circular"
    }

    fn check(&self, spec: &Spec, all_specs: &[Spec]) -> Vec<ValidationIssue> {
        let graph = build_graph(all_specs, &[]);
        let mut issues = Vec::new();

        for cycle in find_cycles(&graph) {
            if !cycle.path.iter().any(|id| id == &spec.id) {
                continue;
            }
            let mut rendered = cycle.path.join(" → ");
            if let Some(first) = cycle.path.first() {
                rendered.push_str(" → ");
                rendered.push_str(first);
            }
            let mut issue = make_issue(
                Severity::Error,
                self.code(),
                &spec.id,
                Some("dependencies"),
                format!("Circular dependency: {}", rendered),
            );
            issue.id = format!("{}#{}#{}", self.code(), spec.id, cycle.path.join("-"));
            issues.push(issue);
        }

        issues
    }
}
