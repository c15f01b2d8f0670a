//! Text normalization shared by every matcher.
//!
//! All comparisons run over normalized text: lowercased, every
//! non-alphanumeric character replaced by a space, whitespace collapsed.
//! "DCGS-A" and "dcgs a" therefore compare equal.

use std::collections::BTreeSet;

const STOPWORDS: &[&str] = &[
    "and", "the", "for", "with", "of", "to", "in", "on", "at", "by", "an", "or", "sr", "jr",
    "senior", "junior", "level", "mid", "iii", "ii", "all", "program", "support", "services",
];

/// Minimum token length considered a keyword.
pub const MIN_KEYWORD_LEN: usize = 3;

pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for segment in raw
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
    {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(segment.chars().flat_map(char::to_lowercase));
    }
    out
}

/// Normalize an optional field, mapping blank values to `None`.
pub fn normalize_opt(raw: Option<&str>) -> Option<String> {
    raw.map(normalize).filter(|s| !s.is_empty())
}

/// Word-boundary containment over normalized strings.
///
/// `contains_phrase("wright patterson afb", "patterson afb")` is true,
/// `contains_phrase("dcgs army", "dcgs a")` is not.
pub fn contains_phrase(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() || haystack.is_empty() {
        return false;
    }
    if haystack == needle {
        return true;
    }
    let padded_haystack = format!(" {haystack} ");
    let padded_needle = format!(" {needle} ");
    padded_haystack.contains(&padded_needle)
}

/// Either string contains the other as a phrase.
pub fn phrase_overlap(a: &str, b: &str) -> bool {
    contains_phrase(a, b) || contains_phrase(b, a)
}

/// Both present and equal after normalization.
pub fn same_text(a: Option<&str>, b: Option<&str>) -> bool {
    match (normalize_opt(a), normalize_opt(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Keyword set of a text: normalized tokens minus stopwords and short tokens.
pub fn keywords(raw: &str) -> BTreeSet<String> {
    normalize(raw)
        .split(' ')
        .filter(|t| t.chars().count() >= MIN_KEYWORD_LEN && !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Keywords collected across several optional fields.
pub fn keywords_of<'a>(fields: impl IntoIterator<Item = Option<&'a str>>) -> BTreeSet<String> {
    fields
        .into_iter()
        .flatten()
        .flat_map(keywords)
        .collect()
}

/// Jaccard similarity of two keyword sets; 0.0 when either is empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    shared as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("DCGS-A"), "dcgs a");
        assert_eq!(normalize("  Wright-Patterson   AFB, OH "), "wright patterson afb oh");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn phrase_containment_respects_word_boundaries() {
        assert!(contains_phrase("wright patterson afb", "patterson afb"));
        assert!(!contains_phrase("dcgs army", "dcgs a"));
        assert!(!contains_phrase("army", ""));
        assert!(phrase_overlap("army", "us army"));
    }

    #[test]
    fn keywords_drop_stopwords_and_short_tokens() {
        let kw = keywords("Senior Systems Engineer for the C2 Program");
        assert!(kw.contains("systems"));
        assert!(kw.contains("engineer"));
        assert!(!kw.contains("senior"));
        assert!(!kw.contains("the"));
        assert!(!kw.contains("c2"));
    }

    #[test]
    fn jaccard_of_disjoint_and_identical_sets() {
        let a = keywords("network engineer");
        let b = keywords("network engineer");
        let c = keywords("data scientist");
        assert_eq!(jaccard(&a, &b), 1.0);
        assert_eq!(jaccard(&a, &c), 0.0);
        assert_eq!(jaccard(&a, &BTreeSet::new()), 0.0);
    }

    #[test]
    fn same_text_requires_both_sides() {
        assert!(same_text(Some("Leidos"), Some("LEIDOS")));
        assert!(!same_text(Some("Leidos"), None));
        assert!(!same_text(Some("  "), Some("  ")));
    }
}
