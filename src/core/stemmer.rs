// File: src/core/stemmer.rs

/// A suffix rewrite: a word ending in `suffix` gets `replacement` appended
/// after its trailing suffix characters are stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InflectionRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
}

const fn rule(suffix: &'static str, replacement: &'static str) -> InflectionRule {
    InflectionRule { suffix, replacement }
}

/// Evaluated top to bottom, first match wins. Reordering changes output.
pub const INFLECTION_RULES: [InflectionRule; 7] = [
    rule("EZL", "R"),
    rule("PZL", "AZ"),
    rule("ZL", "A"),
    rule("ZQ", ""),
    rule("EVM", ""),
    rule("LZ", ""),
    rule("L", ""),
];

impl InflectionRule {
    pub fn matches(&self, word: &str) -> bool {
        word.ends_with(self.suffix)
    }

    /// Strips every trailing character that occurs anywhere in the suffix, not
    /// just one copy of the suffix, then appends the replacement.
    /// `"CALLZL"` under `ZL -> A` loses `L,Z,L,L` and becomes `"CAA"`.
    pub fn apply(&self, word: &str) -> String {
        let stem = word.trim_end_matches(|c: char| self.suffix.contains(c));
        let mut out = String::with_capacity(stem.len() + self.replacement.len());
        out.push_str(stem);
        out.push_str(self.replacement);
        out
    }
}

/// Rewrites a single word with the first matching rule, or returns it unchanged.
pub fn normalize_word(word: &str) -> String {
    INFLECTION_RULES
        .iter()
        .find(|rule| rule.matches(word))
        .map(|rule| rule.apply(word))
        .unwrap_or_else(|| word.to_string())
}

/// Same length and order as the input.
/// Not idempotent in general: a rewritten word can end in another rule's suffix.
/// A word can also be rewritten to the empty string (`"L"` -> `""`).
pub fn normalize(words: Vec<String>) -> Vec<String> {
    words.iter().map(|w| normalize_word(w)).collect()
}
