//! Data model for bulk resume ranking.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One uploaded document before text extraction.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// One resume after extraction: the unit the prompt builder and the
/// normalizer work with. Built fresh per ranking request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeInput {
    pub name: String,
    pub content: String,
}

impl ResumeInput {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A structurally guaranteed ranking result.
///
/// Deserializing into this struct IS the structural validation: the value
/// must be a JSON object carrying a `rankings` array. Entries are kept as
/// raw JSON values on purpose — the model's per-entry output is tolerated
/// as-is, malformed fields included. Use [`RankingResult::entries`] for a
/// typed, lenient view suitable for display and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub rankings: Vec<Value>,
}

impl RankingResult {
    /// Typed view of the rankings. Never fails: missing or mistyped fields
    /// fall back to defaults per entry, without touching the stored values.
    pub fn entries(&self) -> Vec<RankingEntry> {
        self.rankings.iter().map(RankingEntry::from_value).collect()
    }
}

/// The typed shape of one ranking entry.
///
/// `match_percentage` is 0–100 and `rank` starts at 1 when the model
/// follows the schema; a parsed result is passed through without rank or
/// name correction, so consumers of [`RankingResult::entries`] should treat
/// these as best-effort rather than enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub resume_name: String,
    pub match_percentage: u32,
    pub rank: u32,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}

impl RankingEntry {
    /// Lenient conversion from a raw entry value. Tolerates anything.
    pub fn from_value(value: &Value) -> Self {
        Self {
            resume_name: value
                .get("resume_name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            match_percentage: value
                .get("match_percentage")
                .and_then(Value::as_u64)
                .unwrap_or(0) as u32,
            rank: value.get("rank").and_then(Value::as_u64).unwrap_or(0) as u32,
            strengths: string_seq(value.get("strengths")),
            gaps: string_seq(value.get("gaps")),
        }
    }

    /// The synthesized entry used when a resume could not be analyzed.
    /// `index` is the resume's position in input order, starting at 0.
    pub fn unanalyzed(resume_name: &str, index: usize) -> Self {
        Self {
            resume_name: resume_name.to_string(),
            match_percentage: 0,
            rank: index as u32 + 1,
            strengths: vec!["Unable to analyze strengths".to_string()],
            gaps: vec!["Unable to analyze gaps".to_string()],
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

fn string_seq(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ranking_result_requires_rankings_sequence() {
        assert!(serde_json::from_str::<RankingResult>(r#"{"rankings": []}"#).is_ok());
        assert!(serde_json::from_str::<RankingResult>(r#"{"rankings": {}}"#).is_err());
        assert!(serde_json::from_str::<RankingResult>(r#"{"other": []}"#).is_err());
        assert!(serde_json::from_str::<RankingResult>(r#"[1, 2, 3]"#).is_err());
    }

    #[test]
    fn test_ranking_result_tolerates_malformed_entries() {
        let raw = r#"{"rankings": [42, "text", {"rank": "first"}]}"#;
        let result: RankingResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.rankings.len(), 3);
        // Entries pass through untouched
        assert_eq!(result.rankings[0], json!(42));
    }

    #[test]
    fn test_entry_from_well_formed_value() {
        let value = json!({
            "resume_name": "alice.pdf",
            "match_percentage": 85,
            "rank": 1,
            "strengths": ["Rust", "distributed systems"],
            "gaps": ["Kubernetes"]
        });
        let entry = RankingEntry::from_value(&value);
        assert_eq!(entry.resume_name, "alice.pdf");
        assert_eq!(entry.match_percentage, 85);
        assert_eq!(entry.rank, 1);
        assert_eq!(entry.strengths, vec!["Rust", "distributed systems"]);
        assert_eq!(entry.gaps, vec!["Kubernetes"]);
    }

    #[test]
    fn test_entry_from_malformed_value_uses_defaults() {
        let value = json!({"match_percentage": "eighty", "strengths": "not a list"});
        let entry = RankingEntry::from_value(&value);
        assert_eq!(entry.resume_name, "");
        assert_eq!(entry.match_percentage, 0);
        assert_eq!(entry.rank, 0);
        assert!(entry.strengths.is_empty());
        assert!(entry.gaps.is_empty());
    }

    #[test]
    fn test_unanalyzed_entry_shape() {
        let entry = RankingEntry::unanalyzed("bob.pdf", 2);
        assert_eq!(entry.resume_name, "bob.pdf");
        assert_eq!(entry.match_percentage, 0);
        assert_eq!(entry.rank, 3);
        assert_eq!(entry.strengths, vec!["Unable to analyze strengths"]);
        assert_eq!(entry.gaps, vec!["Unable to analyze gaps"]);
    }

    #[test]
    fn test_entry_value_round_trip() {
        let entry = RankingEntry::unanalyzed("carol.pdf", 0);
        let back = RankingEntry::from_value(&entry.to_value());
        assert_eq!(back, entry);
    }
}
