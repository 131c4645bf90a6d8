use crate::core::frequency::{count_words, top_words};
use crate::core::reader::read_text;
use crate::core::stemmer;
use crate::core::stopwords::StopwordSet;
use crate::core::tokenizer::tokenize;
use crate::core::types::{CountOptions, Decoding, TopWords, DEFAULT_TOP};
use crate::errors::Result;
use std::path::Path;
use tracing::debug;

// The counting pipeline: tokenize -> drop stopwords -> (stem) -> count -> top K.
pub struct WordCounter {
    stopwords: StopwordSet,
    word_stems: bool,
    top: usize,
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new(StopwordSet::empty(), false, DEFAULT_TOP)
    }
}

impl WordCounter {
    pub fn new(stopwords: StopwordSet, word_stems: bool, top: usize) -> Self {
        Self { stopwords, word_stems, top }
    }

    /// Loads the stopword list named in `options`, if any.
    pub fn from_options(options: &CountOptions) -> Result<Self> {
        let stopwords =
            StopwordSet::load_optional(options.stopword_path.as_deref(), options.decoding)?;
        Ok(Self::new(stopwords, options.word_stems, options.top))
    }

    pub fn count_text(&self, text: &str) -> TopWords {
        let tokens = tokenize(text);
        let total = tokens.len();

        // Stopwords are removed before stemming, so they match the raw tokens.
        let mut tokens = self.stopwords.filter(tokens);
        debug!(total, kept = tokens.len(), "filtered stopwords");

        if self.word_stems {
            tokens = stemmer::normalize(tokens);
        }

        let counts = count_words(&tokens);
        debug!(distinct = counts.len(), top = self.top, "counted words");
        top_words(&counts, self.top)
    }

    pub fn count_file(&self, path: &Path, decoding: Decoding) -> Result<TopWords> {
        let text = read_text(path, decoding)?;
        debug!(path = %path.display(), bytes = text.len(), "read source file");
        Ok(self.count_text(&text))
    }
}
