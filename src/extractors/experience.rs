// src/extractors/experience.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ExperienceEntry;

// One entry is: a company-name line, the date range "DD Mon, YYYY - DD Mon,
// YYYY" (or "- Present") on the same or the following line, then the job
// title on the next line. Entries whose date range does not parse simply do
// not match; no partial entry is emitted.
static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<company>[^\n]+)\s+(?P<start_date>\d{2} \w{3}, \d{4})\s+-\s+(?P<end_date>Present|\d{2} \w{3}, \d{4})\n(?P<job_title>[^\n]+)",
    )
    .expect("Failed to compile EXPERIENCE_RE")
});

/// Scans an experience section for non-overlapping entry matches, left to
/// right, and returns them in document order. Dates are kept verbatim.
///
/// Known limitation: entries whose company or title spans multiple lines
/// yield zero matches.
pub fn parse_experience_section(experience_text: &str) -> Vec<ExperienceEntry> {
    let entries: Vec<ExperienceEntry> = EXPERIENCE_RE
        .captures_iter(experience_text)
        .map(|caps| ExperienceEntry {
            company: caps["company"].trim().to_string(),
            job_title: caps["job_title"].trim().to_string(),
            start_date: caps["start_date"].trim().to_string(),
            end_date: caps["end_date"].trim().to_string(),
        })
        .collect();

    tracing::debug!("Matched {} experience entr(ies)", entries.len());
    entries
}
