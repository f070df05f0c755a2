//! Bulk resume ranking: extraction, prompt assembly, one AI call covering
//! every resume, and normalization of the response.

pub mod models;
pub mod normalizer;
pub mod prompts;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::llm_client::AiClient;
use crate::ranking::models::{RankingResult, ResumeDocument, ResumeInput};
use crate::ranking::normalizer::{fallback_result, normalize};
use crate::ranking::prompts::{build_ranking_prompt, RANK_PROMPT};

/// Ranks already-extracted resumes against a job description.
///
/// Issues exactly one AI call for the whole set. The result always carries
/// a valid structure: a parse failure is absorbed by the normalizer, and an
/// AI service failure bypasses the normalizer entirely and returns the full
/// fallback result. The only error is an empty resume set.
pub async fn rank_resumes(
    client: &dyn AiClient,
    job_description: &str,
    resumes: &[ResumeInput],
) -> Result<RankingResult, AppError> {
    if resumes.is_empty() {
        return Err(AppError::Validation(
            "No resumes available for ranking".to_string(),
        ));
    }

    let combined_prompt = build_ranking_prompt(job_description, resumes);

    match client.generate(&combined_prompt, "", RANK_PROMPT).await {
        Ok(raw) => Ok(normalize(&raw, resumes)),
        Err(e) => {
            warn!("AI ranking call failed, returning fallback result: {e}");
            Ok(fallback_result(resumes))
        }
    }
}

/// Ranks uploaded documents: extracts text from each, skips documents that
/// fail extraction, and ranks the survivors. Errors only if no document
/// yields text (ranking does not proceed on an empty set).
pub async fn rank_documents(
    client: &dyn AiClient,
    job_description: &str,
    documents: &[ResumeDocument],
) -> Result<RankingResult, AppError> {
    let mut resumes = Vec::with_capacity(documents.len());
    for document in documents {
        match extract_text(&document.bytes) {
            Ok(content) => resumes.push(ResumeInput::new(document.name.clone(), content)),
            Err(e) => {
                warn!("Skipping {}: {e}", document.name);
            }
        }
    }

    if resumes.is_empty() {
        return Err(AppError::Validation(
            "No resumes could be processed".to_string(),
        ));
    }

    info!(
        "Ranking {} of {} uploaded resumes",
        resumes.len(),
        documents.len()
    );

    rank_resumes(client, job_description, &resumes).await
}
