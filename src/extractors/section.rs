// src/extractors/section.rs

// --- Imports ---
use regex::Regex;

use crate::config::MarkerPair;

/// Extracts the text span between the first case-insensitive occurrence of
/// `start_marker` and the first subsequent occurrence of `end_marker`, or to
/// end-of-text when no end marker is given. The returned span is trimmed of
/// leading/trailing whitespace.
///
/// Returns `None` when `start_marker` does not occur, and also when an end
/// marker was requested but never occurs after the matched start; the caller
/// is expected to retry with the next fallback pair rather than treat either
/// case as a failure.
pub fn extract_section(text: &str, start_marker: &str, end_marker: Option<&str>) -> Option<String> {
    // Markers are literal header strings, so escape them and let the regex
    // handle case-insensitivity (i) and newline-spanning capture (s).
    let pattern = match end_marker {
        Some(end) => format!(
            "(?is){}(.*?){}",
            regex::escape(start_marker),
            regex::escape(end)
        ),
        None => format!("(?is){}(.*)", regex::escape(start_marker)),
    };

    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("Failed to compile marker pattern {:?}: {}", pattern, e);
            return None;
        }
    };

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Runs an ordered list of candidate marker pairs through `extract_section`
/// and returns the first non-empty hit. `section_name` is only used for
/// logging.
///
/// A pair whose markers are adjacent in the text captures an empty span;
/// that counts as a miss so the next fallback pair gets its turn, and a
/// section that stays empty under every pair is reported absent, never as
/// an empty string.
pub fn extract_first_match(
    text: &str,
    section_name: &str,
    pairs: &[MarkerPair],
) -> Option<String> {
    for pair in pairs {
        match extract_section(text, &pair.start, pair.end.as_deref()) {
            Some(span) if span.is_empty() => {
                tracing::trace!(
                    "Section '{}' markers ({:?} -> {:?}) matched an empty span, trying next pair",
                    section_name,
                    pair.start,
                    pair.end
                );
            }
            Some(span) => {
                tracing::debug!(
                    "Section '{}' matched markers ({:?} -> {:?}), {} bytes",
                    section_name,
                    pair.start,
                    pair.end,
                    span.len()
                );
                return Some(span);
            }
            None => {
                tracing::trace!(
                    "Section '{}' markers ({:?} -> {:?}) did not match",
                    section_name,
                    pair.start,
                    pair.end
                );
            }
        }
    }

    tracing::debug!(
        "Section '{}' not found after {} marker pair(s)",
        section_name,
        pairs.len()
    );
    None
}
