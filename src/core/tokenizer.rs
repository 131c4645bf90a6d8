// File: src/core/tokenizer.rs
use once_cell::sync::Lazy;
use regex::Regex;

// Anything that is not an ASCII letter or a plain space.
static NON_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z ]").unwrap());

/// Splits raw text into alphabetic words.
///
/// Every character other than `a-z`, `A-Z` and the space character is deleted
/// first, then the remainder is split on runs of spaces. Newlines and tabs are
/// deleted too, so words on either side of a line break are joined.
/// Case is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    NON_ALPHA
        .replace_all(text, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
