//! Line-oriented scanning for spec references in markdown content.
//!
//! Pure text scanning against the global ID universe — the dependency
//! graph is never consulted, since a reference can be informational
//! without being a formal dependency.

use regex::Regex;

use specgraph_core::{BrokenLink, FxHashSet, Spec};

/// The literal token form: `Spec 42`, `spec #042`.
const TOKEN_PATTERN: &str = r"(?i)\bspec\s+#?(\d{1,4})\b";
/// The markdown link form: `[title](#spec-42)` or `[title](spec-42)`.
const MARKDOWN_PATTERN: &str = r"\[[^\]]+\]\(#?spec-(\d{1,4})\)";

/// One reference found in content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecReference {
    /// The extracted target ID.
    pub id: String,
    /// The literal matched text.
    pub text: String,
    /// 1-based line number.
    pub line: u32,
}

/// Scanner with its reference patterns compiled once at construction.
pub struct ReferenceScanner {
    token: Regex,
    markdown: Regex,
}

impl ReferenceScanner {
    pub fn new() -> Self {
        Self {
            token: Regex::new(TOKEN_PATTERN).expect("token pattern compiles"),
            markdown: Regex::new(MARKDOWN_PATTERN).expect("markdown pattern compiles"),
        }
    }

    /// Every spec reference in `content`, ordered by line, then by column
    /// within the line.
    pub fn references_in(&self, content: &str) -> Vec<SpecReference> {
        let mut references = Vec::new();

        for (line_idx, line) in content.lines().enumerate() {
            let line_number = (line_idx + 1) as u32;
            let mut in_line: Vec<(usize, SpecReference)> = Vec::new();

            for caps in self.token.captures_iter(line) {
                let whole = caps.get(0).expect("match group 0 exists");
                in_line.push((
                    whole.start(),
                    SpecReference {
                        id: caps[1].to_string(),
                        text: whole.as_str().to_string(),
                        line: line_number,
                    },
                ));
            }
            for caps in self.markdown.captures_iter(line) {
                let whole = caps.get(0).expect("match group 0 exists");
                in_line.push((
                    whole.start(),
                    SpecReference {
                        id: caps[1].to_string(),
                        text: whole.as_str().to_string(),
                        line: line_number,
                    },
                ));
            }

            in_line.sort_by_key(|(start, _)| *start);
            references.extend(in_line.into_iter().map(|(_, reference)| reference));
        }

        references
    }

    /// Resolve every reference in the spec's content against the known ID
    /// universe, reporting the ones that do not resolve.
    pub fn find_broken_links(&self, spec: &Spec, known_ids: &FxHashSet<String>) -> Vec<BrokenLink> {
        self.references_in(&spec.content)
            .into_iter()
            .filter(|reference| !known_ids.contains(&reference.id))
            .map(|reference| BrokenLink {
                spec_id: spec.id.clone(),
                link_text: reference.text,
                target_reference: reference.id,
                line_number: reference.line,
            })
            .collect()
    }
}

impl Default for ReferenceScanner {
    fn default() -> Self {
        Self::new()
    }
}
