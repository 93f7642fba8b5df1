// src/extractors/skills.rs
use once_cell::sync::Lazy;
use regex::Regex;

// Any run of commas and/or whitespace (including newlines) is one delimiter.
static DELIMITER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[,\s]+").expect("Failed to compile DELIMITER_RE")
});

/// Normalizes a skills section of arbitrary delimiter style (newlines,
/// commas, mixed) into one canonical comma-separated string. Empty tokens
/// are discarded; no deduplication or reordering happens.
pub fn parse_skills(skills_text: &str) -> String {
    let tokens: Vec<&str> = DELIMITER_RE
        .split(skills_text)
        .filter(|token| !token.is_empty())
        .collect();

    tokens.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_mixed_delimiters() {
        assert_eq!(parse_skills("Python, Java\nSQL"), "Python, Java, SQL");
    }

    #[test]
    fn newline_separated_list() {
        assert_eq!(parse_skills("Python\nJava\nSQL"), "Python, Java, SQL");
    }

    #[test]
    fn no_empty_tokens_from_leading_or_doubled_delimiters() {
        assert_eq!(parse_skills(", ,Python,,  Java , "), "Python, Java");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(parse_skills(""), "");
        assert_eq!(parse_skills(" , \n , "), "");
    }
}
