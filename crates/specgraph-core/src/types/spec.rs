//! The spec record and its status lifecycle.

use serde::{Deserialize, Serialize};

/// A single specification document as supplied by the storage collaborator.
///
/// `status` and `phase` are kept raw rather than strongly typed: the editor
/// hands the engine snapshots mid-edit, so any field may be transiently
/// invalid. Validity is enforced by validation rules, not by this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spec {
    /// Identity. Canonical form is a 1–4 digit numeral.
    pub id: String,
    pub title: String,
    /// Raw status string; see [`SpecStatus`] for the valid set.
    pub status: String,
    /// Raw phase number; valid range is 1–99.
    pub phase: i64,
    /// Ordered dependency IDs. Duplicates are allowed but collapse to one edge.
    pub dependencies: Vec<String>,
    /// Tag set (order is not meaningful).
    pub tags: Vec<String>,
    /// Raw markdown body.
    pub content: String,
}

/// The closed set of valid spec statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecStatus {
    Planned,
    InProgress,
    Implemented,
    Tested,
    Deprecated,
}

impl SpecStatus {
    /// All valid statuses, in lifecycle order.
    pub fn all() -> &'static [SpecStatus] {
        &[
            Self::Planned,
            Self::InProgress,
            Self::Implemented,
            Self::Tested,
            Self::Deprecated,
        ]
    }

    /// Status name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in-progress",
            Self::Implemented => "implemented",
            Self::Tested => "tested",
            Self::Deprecated => "deprecated",
        }
    }

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "planned" => Some(Self::Planned),
            "in-progress" => Some(Self::InProgress),
            "implemented" => Some(Self::Implemented),
            "tested" => Some(Self::Tested),
            "deprecated" => Some(Self::Deprecated),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_name() {
        for status in SpecStatus::all() {
            assert_eq!(SpecStatus::parse_str(status.name()), Some(*status));
        }
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&SpecStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn unknown_status_does_not_parse() {
        assert_eq!(SpecStatus::parse_str("done"), None);
        assert_eq!(SpecStatus::parse_str(""), None);
        assert_eq!(SpecStatus::parse_str("Planned"), None);
    }
}
