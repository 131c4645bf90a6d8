// File: src/core/stopwords.rs
use crate::core::reader::read_text;
use crate::core::types::Decoding;
use crate::errors::Result;
use std::collections::HashSet;
use std::path::Path;

/// An exact, case-sensitive exclusion list.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Splits `text` on whitespace. No case folding or punctuation stripping is applied.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn load(path: &Path, decoding: Decoding) -> Result<Self> {
        Ok(Self::from_text(&read_text(path, decoding)?))
    }

    /// `None` means no stopword source was given, which is an empty set.
    pub fn load_optional(path: Option<&Path>, decoding: Decoding) -> Result<Self> {
        match path {
            Some(path) => Self::load(path, decoding),
            None => Ok(Self::empty()),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Keeps the tokens that are not stopwords, in their original order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        if self.words.is_empty() {
            return tokens;
        }
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }
}
