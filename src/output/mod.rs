// src/output/mod.rs
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::models::ResumeRecord;
use crate::utils::error::OutputError;

/// Renders the record as 4-space-indented JSON.
pub fn render_json(record: &ResumeRecord) -> Result<String, OutputError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut serializer)?;

    // serde_json emits valid UTF-8
    Ok(String::from_utf8(buf).expect("JSON output was not UTF-8"))
}

/// Writes the rendered record to the given file, or to standard output when
/// no destination is configured.
pub fn write_record(record: &ResumeRecord, destination: Option<&Path>) -> Result<(), OutputError> {
    let rendered = render_json(record)?;

    match destination {
        Some(path) => {
            fs::write(path, &rendered)?;
            tracing::info!("Saved record to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", rendered)?;
        }
    }

    Ok(())
}
