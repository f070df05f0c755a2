// Instruction templates for the four single-resume analysis modes.
// The bulk ranking template lives in `ranking::prompts` alongside its
// normalizer; these modes return free-form text and need no schema.

/// Comprehensive review by a "Technical HR Manager" persona.
pub const REVIEW_PROMPT: &str = "You are an experienced Technical Human Resource Manager. Review the resume against the job description and provide:
    1. Overall match percentage
    2. Key strengths
    3. Areas for improvement
    4. Specific recommendations
    Format your response in clear sections with bullet points.";

/// Skill-gap analysis by an "ATS scanner" persona.
pub const SKILL_GAP_PROMPT: &str = "You are a skilled ATS scanner. Analyze the resume and provide:
    1. Missing technical skills
    2. Required certifications
    3. Experience gaps
    4. Actionable improvement steps
    Format your response in clear sections.";

/// Missing-keyword identification and categorization.
pub const KEYWORDS_PROMPT: &str = "Identify and categorize missing keywords from the resume based on the job description:
    1. Technical skills
    2. Soft skills
    3. Tools and technologies
    4. Industry-specific terms
    Format as a bulleted list.";

/// Detailed match-percentage analysis.
pub const MATCH_PROMPT: &str = "Provide a detailed match analysis:
    1. Overall match percentage
    2. Missing keywords
    3. Strengths
    4. Areas for improvement
    5. Final recommendations
    Format with clear sections and bullet points.";
