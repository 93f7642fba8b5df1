// src/extractors/education.rs
use crate::models::EducationEntry;

/// Splits an education section into entries by pairing consecutive non-empty
/// lines: line 0 is an institution, line 1 its details, line 2 the next
/// institution, and so on.
///
/// An odd trailing line with no pairing partner is silently dropped; that is
/// the documented behavior, not an error. The pairing assumes exactly one
/// institution line followed by exactly one details line.
pub fn parse_education_section(education_text: &str) -> Vec<EducationEntry> {
    let lines: Vec<&str> = education_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() % 2 != 0 {
        tracing::debug!(
            "Education section has an unpaired trailing line, dropping: {:?}",
            lines.last()
        );
    }

    lines
        .chunks_exact(2)
        .map(|pair| EducationEntry {
            institution: pair[0].to_string(),
            details: pair[1].to_string(),
        })
        .collect()
}
