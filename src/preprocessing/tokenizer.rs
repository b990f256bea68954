use std::collections::BTreeSet;
use std::sync::LazyLock;
use regex::Regex;

// Leading or trailing runs of ASCII punctuation and whitespace.
static EDGE_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:punct:][:space:]]+|[[:punct:][:space:]]+$").expect("edge pattern is valid")
});

/// Normalizes a single word into an indexable token.
///
/// Punctuation and whitespace are stripped from both ends independently and
/// the remainder is lowercased. Inner punctuation and digits survive, so
/// `"I'm"` becomes `"i'm"`. Returns `None` when no ASCII letter is left.
///
/// Character classes are ASCII only: non-ASCII characters are neither
/// trimmed, counted as letters, nor case-folded.
pub fn normalize(word: &str) -> Option<String> {
    let stripped = EDGE_NOISE.replace_all(word, "");

    if !stripped.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some(stripped.to_ascii_lowercase())
}

/// Splits `text` on ASCII whitespace and collects the distinct tokens it
/// contains.
pub fn extract_tokens(text: &str) -> BTreeSet<String> {
    text.split_ascii_whitespace()
        .filter_map(normalize)
        .collect()
}
