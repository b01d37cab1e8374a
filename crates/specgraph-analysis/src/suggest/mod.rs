//! Heuristic link suggestions.
//!
//! Best-effort scoring from three signals: literal ID mentions in content,
//! title overlap, and shared tags. Confidence is the sum of matched signal
//! weights capped at 1.0 — never more, and never for the spec itself, a
//! dismissed target, or a target that is already linked.

use std::cmp::Ordering;

use specgraph_core::{EngineConfig, FxHashMap, FxHashSet, Link, LinkSuggestion, LinkType, Spec};

use crate::references::ReferenceScanner;

/// The suggestion engine. Holds the compiled reference patterns and the
/// configured signal weights.
pub struct SuggestionEngine {
    scanner: ReferenceScanner,
    id_mention_weight: f64,
    title_overlap_weight: f64,
    shared_tag_weight: f64,
    title_overlap_threshold: f64,
    cap: usize,
}

impl SuggestionEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            scanner: ReferenceScanner::new(),
            id_mention_weight: config.id_mention_weight,
            title_overlap_weight: config.title_overlap_weight,
            shared_tag_weight: config.shared_tag_weight,
            title_overlap_threshold: config.title_overlap_threshold,
            cap: config.suggestion_cap,
        }
    }

    /// Suggest links for `spec`, excluding dismissed targets.
    pub fn suggest(
        &self,
        spec: &Spec,
        all_specs: &[Spec],
        dismissed: &FxHashSet<String>,
    ) -> Vec<LinkSuggestion> {
        self.suggest_with_links(spec, all_specs, &[], dismissed)
    }

    /// Like [`Self::suggest`], but also excludes targets the spec already
    /// links to explicitly.
    pub fn suggest_with_links(
        &self,
        spec: &Spec,
        all_specs: &[Spec],
        links: &[Link],
        dismissed: &FxHashSet<String>,
    ) -> Vec<LinkSuggestion> {
        let mut existing: FxHashSet<&str> =
            spec.dependencies.iter().map(String::as_str).collect();
        existing.extend(
            links
                .iter()
                .filter(|link| link.source == spec.id)
                .map(|link| link.target.as_str()),
        );

        // First mentioning line per referenced ID.
        let lines: Vec<&str> = spec.content.lines().collect();
        let mut mentions: FxHashMap<String, &str> = FxHashMap::default();
        for reference in self.scanner.references_in(&spec.content) {
            mentions
                .entry(reference.id)
                .or_insert_with(|| lines[(reference.line - 1) as usize]);
        }

        let spec_tokens = title_tokens(&spec.title);
        let spec_tags: FxHashSet<&str> = spec.tags.iter().map(String::as_str).collect();

        let mut suggestions = Vec::new();
        for other in all_specs {
            if other.id == spec.id
                || dismissed.contains(&other.id)
                || existing.contains(other.id.as_str())
            {
                continue;
            }

            let mut confidence = 0.0;
            let mut reasons: Vec<String> = Vec::new();
            let mut context = None;
            let mut link_type = LinkType::Related;

            if let Some(&line) = mentions.get(&other.id) {
                confidence += self.id_mention_weight;
                reasons.push(format!("content mentions Spec {}", other.id));
                context = Some(line.trim().to_string());
                link_type = LinkType::References;
            }

            if self.titles_overlap(&spec.title, &spec_tokens, &other.title) {
                confidence += self.title_overlap_weight;
                reasons.push("similar title".to_string());
            }

            let shared: Vec<&str> = other
                .tags
                .iter()
                .map(String::as_str)
                .filter(|tag| spec_tags.contains(tag))
                .collect();
            if !shared.is_empty() {
                confidence += self.shared_tag_weight;
                reasons.push(format!("shared tags: {}", shared.join(", ")));
            }

            if confidence > 0.0 {
                suggestions.push(LinkSuggestion {
                    target_spec_id: other.id.clone(),
                    link_type,
                    confidence: confidence.min(1.0),
                    reason: reasons.join("; "),
                    context,
                });
            }
        }

        suggestions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
                .then_with(|| id_order(&a.target_spec_id, &b.target_spec_id))
        });
        suggestions.truncate(self.cap);
        suggestions
    }

    fn titles_overlap(&self, title: &str, tokens: &FxHashSet<String>, other_title: &str) -> bool {
        let title = title.trim().to_lowercase();
        let other = other_title.trim().to_lowercase();
        if title.is_empty() || other.is_empty() {
            return false;
        }
        if title.contains(&other) || other.contains(&title) {
            return true;
        }

        let other_tokens = title_tokens(&other);
        if tokens.is_empty() || other_tokens.is_empty() {
            return false;
        }
        let shared = tokens.intersection(&other_tokens).count();
        let smaller = tokens.len().min(other_tokens.len());
        shared as f64 / smaller as f64 >= self.title_overlap_threshold
    }
}

/// Lowercased alphanumeric title tokens of at least 4 characters —
/// short connective words carry no similarity signal.
fn title_tokens(title: &str) -> FxHashSet<String> {
    title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= 4)
        .map(str::to_string)
        .collect()
}

/// Ascending ID order, numeric when both sides are canonical numerals.
fn id_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u32>(), b.parse::<u32>()) {
        (Ok(a_num), Ok(b_num)) => a_num.cmp(&b_num),
        _ => a.cmp(b),
    }
}
