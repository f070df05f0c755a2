//! Export formatting: Markdown analysis reports and ranking CSVs.
//!
//! These produce strings; the caller owns writing them to disk or serving
//! them as downloads.

use chrono::Local;

use crate::ranking::models::RankingResult;

/// Builds a Markdown report embedding the job description, resume text,
/// and the raw analysis response.
pub fn analysis_report(analysis: &str, job_description: &str, resume_content: &str) -> String {
    format!(
        "# Resume Analysis Report\nGenerated on: {}\n\n\
         ## Job Description\n{job_description}\n\n\
         ## Resume Content\n{resume_content}\n\n\
         ## Analysis Results\n{analysis}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

/// Default download filename for an analysis report.
pub fn analysis_report_filename() -> String {
    format!(
        "resume_analysis_{}.md",
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Renders a ranking result as CSV with columns
/// `resume_name,match_percentage,rank,strengths,gaps`.
///
/// Rows go through the lenient typed view, so malformed entries render
/// with defaults rather than failing. List fields are joined with `"; "`.
pub fn rankings_csv(result: &RankingResult) -> String {
    let mut csv = String::from("resume_name,match_percentage,rank,strengths,gaps\n");
    for entry in result.entries() {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            escape_csv_field(&entry.resume_name),
            entry.match_percentage,
            entry.rank,
            escape_csv_field(&entry.strengths.join("; ")),
            escape_csv_field(&entry.gaps.join("; ")),
        ));
    }
    csv
}

/// Default download filename for a ranking CSV.
pub fn rankings_csv_filename() -> String {
    format!(
        "resume_rankings_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Escapes CSV field values to handle commas, quotes, and newlines.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
