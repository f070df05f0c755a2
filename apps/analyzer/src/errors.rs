use thiserror::Error;

use crate::extract::ExtractionError;
use crate::llm_client::ServiceError;

/// Application-level error type.
/// The bulk ranking path absorbs `Service` errors into fallback results;
/// the single-resume path propagates them to the caller unchanged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
