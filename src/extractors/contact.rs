// src/extractors/contact.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ContactInfo;

// --- Regex Patterns (Lazy Static) ---
// Shape-only checks: no domain or check-digit validation.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w.-]+@[\w.-]+").expect("Failed to compile EMAIL_RE")
});

// Optional parenthesized 3-digit area code, then 3-3-4 digit groups with
// space/dot/dash/no separators.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("Failed to compile PHONE_RE")
});

/// Scans the entire document text (not a segmented section) for the first
/// email-shaped and first phone-shaped token. Either or both may be absent.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let email = EMAIL_RE.find(text).map(|m| m.as_str().to_string());
    let phone = PHONE_RE.find(text).map(|m| m.as_str().to_string());

    if email.is_none() {
        tracing::debug!("No email pattern found in document text");
    }
    if phone.is_none() {
        tracing::debug!("No phone pattern found in document text");
    }

    ContactInfo { email, phone }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_email_and_phone_in_prose() {
        let info = extract_contact_info("Reach me at a.b@x.com or (555) 123-4567");
        assert_eq!(info.email.as_deref(), Some("a.b@x.com"));
        assert_eq!(info.phone.as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn first_match_wins() {
        let info = extract_contact_info("one@example.com then two@example.org\n555.123.4567 and 111-222-3333");
        assert_eq!(info.email.as_deref(), Some("one@example.com"));
        assert_eq!(info.phone.as_deref(), Some("555.123.4567"));
    }

    #[test]
    fn accepts_unseparated_digits() {
        let info = extract_contact_info("call 5551234567");
        assert_eq!(info.phone.as_deref(), Some("5551234567"));
    }

    #[test]
    fn absence_is_not_an_error() {
        let info = extract_contact_info("no contact details here");
        assert_eq!(info.email, None);
        assert_eq!(info.phone, None);
    }
}
