//! Ranking response normalizer — turns an arbitrary, possibly malformed,
//! model response into a structurally guaranteed [`RankingResult`].
//!
//! Parse strategies are an ordered first-success-wins chain:
//! 1. direct parse of the response (after stripping markdown code fences),
//! 2. substring extraction from the first `{` to the last `}`,
//! 3. fallback synthesis of one zero-scored entry per input resume.
//!
//! A strategy succeeds only if its text parses as a JSON object with a
//! `rankings` array (structural validation). Per-entry malformation is
//! tolerated and passed through; see [`RankingResult`].

use serde_json::Value;
use tracing::{debug, warn};

use crate::ranking::models::{RankingEntry, RankingResult, ResumeInput};

/// Normalizes a raw model response against the resumes that were ranked.
/// Infallible: unusable input yields the synthesized fallback result.
pub fn normalize(raw: &str, resumes: &[ResumeInput]) -> RankingResult {
    const STRATEGIES: &[(&str, fn(&str) -> Option<RankingResult>)] =
        &[("direct", parse_direct), ("embedded", parse_embedded)];

    for (name, strategy) in STRATEGIES {
        if let Some(result) = strategy(raw) {
            debug!("Normalized ranking response via {name} parse");
            return result;
        }
    }

    warn!(
        "Could not recover structured rankings from model response ({} bytes); synthesizing fallback for {} resumes",
        raw.len(),
        resumes.len()
    );
    fallback_result(resumes)
}

/// Strategy 1: parse the whole response, minus any markdown code fences.
fn parse_direct(raw: &str) -> Option<RankingResult> {
    parse_structured(strip_json_fences(raw))
}

/// Strategy 2: parse the inclusive substring from the first `{` to the
/// last `}`. Recovers JSON embedded in conversational prose.
fn parse_embedded(raw: &str) -> Option<RankingResult> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if start >= end {
        return None;
    }
    parse_structured(&raw[start..=end])
}

/// Structural validation: a JSON object whose `rankings` key holds an
/// array. Nothing deeper is checked.
fn parse_structured(text: &str) -> Option<RankingResult> {
    let value: Value = serde_json::from_str(text).ok()?;
    if !value.get("rankings")?.is_array() {
        return None;
    }
    serde_json::from_value(value).ok()
}

/// Strategy 3: one entry per input resume, in input order, ranks 1..=N,
/// zero match percentage.
pub fn fallback_result(resumes: &[ResumeInput]) -> RankingResult {
    RankingResult {
        rankings: resumes
            .iter()
            .enumerate()
            .map(|(index, resume)| RankingEntry::unanalyzed(&resume.name, index).to_value())
            .collect(),
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
