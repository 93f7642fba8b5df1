// src/models.rs
use serde::Serialize;

/// Contact details scraped from the full document text.
/// First pattern match wins; absence is a valid, non-error state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// One degree/qualification: an institution line paired with the line
/// immediately following it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub institution: String,
    pub details: String,
}

/// One position held. Dates are kept verbatim as "DD Mon, YYYY" strings
/// (or the literal "Present") with no date validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub job_title: String,
    pub start_date: String,
    pub end_date: String,
}

/// The assembled output record. Built once per run, immutable afterwards.
/// A section that was never found serializes as `null`, not as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeRecord {
    pub contact_information: ContactInfo,
    pub skills: Option<String>,
    pub education: Option<Vec<EducationEntry>>,
    pub experience: Option<Vec<ExperienceEntry>>,
}
