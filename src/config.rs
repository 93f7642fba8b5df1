// src/config.rs
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::utils::error::AppError;

/// One candidate (start, end) marker pair for locating a section.
/// `end: None` means "capture from the start marker to end-of-text".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkerPair {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

impl MarkerPair {
    pub fn new(start: &str, end: Option<&str>) -> Self {
        Self {
            start: start.to_string(),
            end: end.map(str::to_string),
        }
    }
}

/// The marker-fallback table: for each section, an ordered list of candidate
/// pairs tried in sequence until one matches. The built-in default targets
/// the resume layout the original tooling was written for; other layouts are
/// supported by loading a replacement table from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionMarkers {
    pub skills: Vec<MarkerPair>,
    pub education: Vec<MarkerPair>,
    pub experience: Vec<MarkerPair>,
}

impl Default for SectionMarkers {
    fn default() -> Self {
        Self {
            skills: vec![
                MarkerPair::new("KEY EXPERTISE", Some("EDUCATION")),
                // No end marker: capture through end-of-text
                MarkerPair::new("KEY EXPERTISE", None),
            ],
            education: vec![
                MarkerPair::new("EDUCATION", Some("AWARDS AND SCHOLARSHIPS")),
                MarkerPair::new("EDUCATION", Some("INTERNSHIPS")),
            ],
            experience: vec![
                MarkerPair::new("INTERNSHIPS", Some("PROJECTS")),
                MarkerPair::new("INTERNSHIPS", Some("KEY EXPERTISE")),
            ],
        }
    }
}

impl SectionMarkers {
    /// Loads a marker table from a JSON file, replacing the built-in default.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let markers: SectionMarkers = serde_json::from_str(&contents)
            .map_err(|e| AppError::Config(format!("Invalid marker file {}: {}", path.display(), e)))?;

        tracing::debug!(
            "Loaded marker table from {}: {} skills / {} education / {} experience pairs",
            path.display(),
            markers.skills.len(),
            markers.education.len(),
            markers.experience.len()
        );

        Ok(markers)
    }
}
