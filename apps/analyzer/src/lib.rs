//! JobFit Analyzer — resume evaluation against job descriptions via a hosted
//! generative-AI model.
//!
//! The crate is the pipeline behind the UI, not the UI itself: prompt
//! assembly, the Gemini client, PDF text extraction, the ranking response
//! normalizer, and export formatting. Callers (web frontend, desktop shell)
//! own presentation and file downloads.
//!
//! Two flows:
//! - **Single resume** ([`analysis`]): one resume vs one JD, four analysis
//!   modes, raw model text returned as-is.
//! - **Bulk ranking** ([`ranking`]): many resumes vs one JD in a single
//!   model call; the free-form response is normalized into a guaranteed
//!   [`ranking::models::RankingResult`], falling back to a synthesized
//!   result when the model output is unusable.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extract;
pub mod llm_client;
pub mod ranking;
pub mod report;

pub use analysis::{analyze_resume, AnalysisMode};
pub use config::Config;
pub use errors::AppError;
pub use extract::{extract_text, ExtractionError};
pub use llm_client::{AiClient, GeminiClient, ServiceError};
pub use ranking::models::{RankingEntry, RankingResult, ResumeDocument, ResumeInput};
pub use ranking::normalizer::normalize;
pub use ranking::{rank_documents, rank_resumes};
