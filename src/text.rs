use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapses every whitespace run (spaces, tabs, newlines) to a single space
/// and trims both ends. Idempotent.
pub fn clean_text(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// True when `text` contains any of `keywords`, case-insensitively.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(clean_text("  a\t\tb\n\nc  "), "a b c");
    }

    #[test]
    fn empty_maps_to_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \n\t "), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = ["", "  x ", "a\r\n b\t c", "already clean", "\u{a0}nbsp"];
        for s in samples {
            let once = clean_text(s);
            assert_eq!(clean_text(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn contains_any_is_case_insensitive() {
        assert!(contains_any("We use AGILE ceremonies", &["agile", "scrum"]));
        assert!(!contains_any("waterfall only", &["agile", "scrum"]));
    }
}
