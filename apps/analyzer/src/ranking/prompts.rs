//! Prompt constants and prompt assembly for bulk resume ranking.

use crate::ranking::models::ResumeInput;

/// Instruction template for the ranking call. Asks for the exact
/// `rankings` JSON schema the normalizer validates against.
pub const RANK_PROMPT: &str = r#"You are an expert HR manager. Analyze the following resumes and rank them from best to worst match for the job description.
For each resume, provide:
1. Match percentage (0-100)
2. Key strengths
3. Major gaps
4. Overall ranking (1 being best)

Format your response as a JSON with the following structure:
{
    "rankings": [
        {
            "resume_name": "filename.pdf",
            "match_percentage": 85,
            "rank": 1,
            "strengths": ["skill1", "skill2"],
            "gaps": ["gap1", "gap2"]
        }
    ]
}"#;

/// Assembles the combined ranking prompt: job description first, then each
/// resume under its name in input order, separated by `---`.
///
/// Pure string assembly. Resume text is embedded verbatim (no trimming, no
/// normalization); empty inputs simply embed as empty sections.
pub fn build_ranking_prompt(job_description: &str, resumes: &[ResumeInput]) -> String {
    let mut prompt = format!("Job Description:\n{job_description}\n\nResumes to analyze:\n");
    for resume in resumes {
        prompt.push_str(&format!("\nResume: {}\n{}\n---\n", resume.name, resume.content));
    }
    prompt
}
