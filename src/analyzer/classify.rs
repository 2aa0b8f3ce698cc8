//! Line Classification
//!
//! Classifies one raw line into exactly one of: blank, opening marker,
//! closing marker, bad markup, or text.
//!
//! Classification follows this specific order (important for correctness):
//! 1. Blank lines (empty after trimming)
//! 2. Lines not starting with `<` are text, verbatim after trimming
//! 3. Lines starting with `<` must match a marker pattern exactly over the
//!    whole trimmed line; anything else (attributes, self-closing syntax,
//!    stray brackets) is bad markup

use once_cell::sync::Lazy;
use regex::Regex;

/// A tag name is one ASCII letter followed by ASCII letters/digits,
/// case-sensitive, anchored over the whole trimmed line.
static OPEN_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<([A-Za-z][A-Za-z0-9]*)>$").unwrap());
static CLOSE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^</([A-Za-z][A-Za-z0-9]*)>$").unwrap());

/// The classification of a single trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Empty after trimming; skipped entirely.
    Blank,
    /// `<name>` and nothing else; carries the tag name.
    OpenTag(String),
    /// `</name>` and nothing else; carries the tag name.
    CloseTag(String),
    /// Starts with `<` but is neither marker form.
    BadMarkup,
    /// Anything else; carries the trimmed content verbatim.
    Text(String),
}

/// Classify one raw line. Pure; the caller applies stack/candidate mutations.
pub fn classify_line(raw: &str) -> LineClass {
    let line = raw.trim();
    if line.is_empty() {
        return LineClass::Blank;
    }

    if !line.starts_with('<') {
        return LineClass::Text(line.to_string());
    }

    if let Some(caps) = OPEN_TAG.captures(line) {
        return LineClass::OpenTag(caps[1].to_string());
    }
    if let Some(caps) = CLOSE_TAG.captures(line) {
        return LineClass::CloseTag(caps[1].to_string());
    }

    LineClass::BadMarkup
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineClass::Blank)]
    #[case("   ", LineClass::Blank)]
    #[case("\t \t", LineClass::Blank)]
    fn classifies_blank_lines(#[case] raw: &str, #[case] expected: LineClass) {
        assert_eq!(classify_line(raw), expected);
    }

    #[rstest]
    #[case("<a>", "a")]
    #[case("<div>", "div")]
    #[case("  <html>  ", "html")]
    #[case("<H1>", "H1")]
    #[case("<a1b2>", "a1b2")]
    fn classifies_opening_markers(#[case] raw: &str, #[case] tag: &str) {
        assert_eq!(classify_line(raw), LineClass::OpenTag(tag.to_string()));
    }

    #[rstest]
    #[case("</a>", "a")]
    #[case("  </body>", "body")]
    #[case("</X9>", "X9")]
    fn classifies_closing_markers(#[case] raw: &str, #[case] tag: &str) {
        assert_eq!(classify_line(raw), LineClass::CloseTag(tag.to_string()));
    }

    #[rstest]
    #[case("<a href=\"x\">")]
    #[case("<br/>")]
    #[case("<>")]
    #[case("</>")]
    #[case("<1a>")]
    #[case("<a b>")]
    #[case("<a> trailing")]
    #[case("<!-- comment -->")]
    #[case("<")]
    #[case("<a")]
    fn rejects_non_marker_bracket_lines(#[case] raw: &str) {
        assert_eq!(classify_line(raw), LineClass::BadMarkup);
    }

    #[rstest]
    #[case("hello", "hello")]
    #[case("  padded text  ", "padded text")]
    #[case("a < b", "a < b")]
    #[case("ends with <", "ends with <")]
    fn classifies_text_lines(#[case] raw: &str, #[case] content: &str) {
        assert_eq!(classify_line(raw), LineClass::Text(content.to_string()));
    }

    #[test]
    fn tag_names_are_case_sensitive_forms() {
        // Both cases are valid names; they are distinct, not normalized.
        assert_eq!(classify_line("<A>"), LineClass::OpenTag("A".to_string()));
        assert_eq!(classify_line("<a>"), LineClass::OpenTag("a".to_string()));
    }
}
