// src/pipeline.rs
use std::path::PathBuf;

use crate::config::SectionMarkers;
use crate::document;
use crate::extractors::{
    extract_contact_info, extract_first_match, parse_education_section,
    parse_experience_section, parse_skills,
};
use crate::models::ResumeRecord;
use crate::output;
use crate::utils::error::AppError;

/// Everything one extraction run needs, resolved before the pipeline starts.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    /// `None` writes the record to standard output.
    pub output: Option<PathBuf>,
    pub markers: SectionMarkers,
}

/// Pure text-to-record pipeline: contact info over the full text, then each
/// section segmented through its marker-fallback chain and handed to its
/// extractor. A section absent after all fallbacks leaves its field `None`;
/// nothing in here fails.
pub fn parse_text(text: &str, markers: &SectionMarkers) -> ResumeRecord {
    let contact_information = extract_contact_info(text);

    let skills = extract_first_match(text, "skills", &markers.skills)
        .map(|section| parse_skills(&section));

    let education = extract_first_match(text, "education", &markers.education)
        .map(|section| parse_education_section(&section));

    let experience = extract_first_match(text, "experience", &markers.experience)
        .map(|section| parse_experience_section(&section));

    ResumeRecord {
        contact_information,
        skills,
        education,
        experience,
    }
}

/// Runs the whole pipeline: acquire text, parse, write the record.
/// Acquisition failure aborts with no output at all; every later step
/// completes with absent fields instead of failing.
pub fn run(config: &PipelineConfig) -> Result<(), AppError> {
    let text = document::load_text(&config.input)?;
    let record = parse_text(&text, &config.markers);

    tracing::info!(
        "Extraction complete: email={} phone={} skills={} education entries={:?} experience entries={:?}",
        record.contact_information.email.is_some(),
        record.contact_information.phone.is_some(),
        record.skills.is_some(),
        record.education.as_ref().map(Vec::len),
        record.experience.as_ref().map(Vec::len),
    );

    output::write_record(&record, config.output.as_deref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESUME: &str = "\
Ananya K
a.b@x.com | (555) 123-4567

KEY EXPERTISE
Python, Java
SQL

EDUCATION
MIT
BS Computer Science
Harvard
MA Statistics

AWARDS AND SCHOLARSHIPS
Dean's List

INTERNSHIPS
Acme Corp 01 Jan, 2020 - Present
Software Engineer
Globex 05 Feb, 2018 - 30 Nov, 2019
Intern

PROJECTS
A side project.
";

    #[test]
    fn full_resume_produces_every_field() {
        let record = parse_text(FULL_RESUME, &SectionMarkers::default());

        assert_eq!(record.contact_information.email.as_deref(), Some("a.b@x.com"));
        assert_eq!(record.contact_information.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(record.skills.as_deref(), Some("Python, Java, SQL"));

        let education = record.education.unwrap();
        assert_eq!(education.len(), 2);
        assert_eq!(education[0].institution, "MIT");
        assert_eq!(education[1].details, "MA Statistics");

        let experience = record.experience.unwrap();
        assert_eq!(experience.len(), 2);
        assert_eq!(experience[0].company, "Acme Corp");
        assert_eq!(experience[0].end_date, "Present");
        assert_eq!(experience[1].job_title, "Intern");
    }

    #[test]
    fn skills_fall_back_to_end_of_text_when_education_header_is_missing() {
        let text = "intro\nKEY EXPERTISE\nPython\nRust\n";
        let record = parse_text(text, &SectionMarkers::default());
        assert_eq!(record.skills.as_deref(), Some("Python, Rust"));
    }

    #[test]
    fn education_falls_back_to_internships_end_marker() {
        let text = "EDUCATION\nMIT\nBS CS\nINTERNSHIPS\nAcme Corp 01 Jan, 2020 - Present\nEngineer\n";
        let record = parse_text(text, &SectionMarkers::default());

        let education = record.education.unwrap();
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].institution, "MIT");

        // Neither experience pair matches (no PROJECTS or KEY EXPERTISE
        // end marker), so the field stays absent.
        assert_eq!(record.experience, None);
    }

    #[test]
    fn adjacent_markers_retry_the_start_only_fallback() {
        // "KEY EXPERTISE" immediately followed by "EDUCATION" makes the
        // primary skills pair capture an empty span; the start-only
        // fallback must then take over, never leaving skills as "".
        let text = "KEY EXPERTISE\nEDUCATION\nMIT\nBS CS";
        let record = parse_text(text, &SectionMarkers::default());
        assert_eq!(record.skills.as_deref(), Some("EDUCATION, MIT, BS, CS"));
    }

    #[test]
    fn sections_empty_under_every_pair_stay_null() {
        // Every marker present but nothing between any of them
        let text = "EDUCATION\nINTERNSHIPS\nKEY EXPERTISE";
        let record = parse_text(text, &SectionMarkers::default());
        assert_eq!(record.skills, None);
        assert_eq!(record.education, None);
        assert_eq!(record.experience, None);
    }

    #[test]
    fn markerless_text_yields_null_sections_without_error() {
        let record = parse_text("just a plain paragraph, nothing labeled", &SectionMarkers::default());
        assert_eq!(record.skills, None);
        assert_eq!(record.education, None);
        assert_eq!(record.experience, None);
        assert_eq!(record.contact_information.email, None);
        assert_eq!(record.contact_information.phone, None);
    }

    #[test]
    fn found_but_empty_sections_yield_empty_values() {
        let text = "EDUCATION\nsingle unpaired line\nINTERNSHIPS\nnothing structured\nPROJECTS\n";
        let record = parse_text(text, &SectionMarkers::default());

        // Section located, but one line cannot be paired
        assert_eq!(record.education, Some(vec![]));
        // Section located, but no entry pattern matches
        assert_eq!(record.experience, Some(vec![]));
    }
}
