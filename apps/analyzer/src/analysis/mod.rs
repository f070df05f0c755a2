//! Single-resume analysis: one resume against one job description, four
//! analysis modes, raw model text surfaced unmodified.
//!
//! Deliberately thin — only the bulk ranking path needs structural
//! guarantees, so there is no normalization or recovery here and a service
//! failure propagates to the caller.

pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::AiClient;

/// The analysis mode, selecting the instruction template sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Comprehensive review with strengths and recommendations.
    Review,
    /// Missing skills, certifications, and experience gaps.
    SkillGap,
    /// Missing keywords, categorized.
    Keywords,
    /// Detailed match-percentage breakdown.
    Match,
}

impl AnalysisMode {
    pub fn template(self) -> &'static str {
        match self {
            AnalysisMode::Review => prompts::REVIEW_PROMPT,
            AnalysisMode::SkillGap => prompts::SKILL_GAP_PROMPT,
            AnalysisMode::Keywords => prompts::KEYWORDS_PROMPT,
            AnalysisMode::Match => prompts::MATCH_PROMPT,
        }
    }
}

/// Runs one analysis mode over a resume and returns the raw model text.
pub async fn analyze_resume(
    client: &dyn AiClient,
    mode: AnalysisMode,
    job_description: &str,
    resume_text: &str,
) -> Result<String, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description cannot be empty".to_string(),
        ));
    }

    let response = client
        .generate(job_description, resume_text, mode.template())
        .await?;

    Ok(response)
}
