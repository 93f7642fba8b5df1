// src/extractors/mod.rs
pub mod contact;
pub mod education;
pub mod experience;
pub mod section;
pub mod skills;

// Re-export the extraction entry points the pipeline drives
pub use self::{
    contact::extract_contact_info,
    education::parse_education_section,
    experience::parse_experience_section,
    section::extract_first_match,
    skills::parse_skills,
};
