//! Explicit typed links between specs.

use serde::{Deserialize, Serialize};

/// A directed relation between two specs, created by a user or accepted
/// from a suggestion. Independent of the `dependencies` array, but both
/// contribute edges to the same graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub link_type: LinkType,
    pub is_auto_detected: bool,
    /// Source text that prompted an auto-detected link, if any.
    pub context: Option<String>,
}

/// The closed set of link types. Only `DependsOn` implies ordering;
/// the rest are informational and never participate in cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    DependsOn,
    Blocks,
    Related,
    Implements,
    Extends,
    References,
}

impl LinkType {
    /// All link types.
    pub fn all() -> &'static [LinkType] {
        &[
            Self::DependsOn,
            Self::Blocks,
            Self::Related,
            Self::Implements,
            Self::Extends,
            Self::References,
        ]
    }

    /// Type name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DependsOn => "depends_on",
            Self::Blocks => "blocks",
            Self::Related => "related",
            Self::Implements => "implements",
            Self::Extends => "extends",
            Self::References => "references",
        }
    }

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "depends_on" => Some(Self::DependsOn),
            "blocks" => Some(Self::Blocks),
            "related" => Some(Self::Related),
            "implements" => Some(Self::Implements),
            "extends" => Some(Self::Extends),
            "references" => Some(Self::References),
            _ => None,
        }
    }
}
