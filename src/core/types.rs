// src/core/types.rs
use indexmap::IndexMap;
use std::path::PathBuf;

/// Default number of words reported by a run.
pub const DEFAULT_TOP: usize = 25;

/// Default location of the history log.
pub const DEFAULT_RESULTS_PATH: &str = "out/results.json";

/// Maps a word to the number of times it was seen.
/// Keys keep the order in which each word was first counted.
pub type WordCounts = IndexMap<String, u64>;

/// The top-K words of a run, highest count first.
/// This is the "results" mapping stored in every history record.
pub type TopWords = IndexMap<String, u64>;

/// How bytes that are not valid UTF-8 are handled when reading a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoding {
    /// Replace every invalid sequence with U+FFFD and keep going.
    #[default]
    Lossy,
    /// Fail with an `InvalidData` I/O error.
    Strict,
}

/// Everything a single `word-count` run needs, validated once at the command boundary.
#[derive(Debug, Clone)]
pub struct CountOptions {
    /// File to count words from. Required.
    pub filepath: PathBuf,
    /// Whitespace separated stopword list. `None` means no stopwords.
    pub stopword_path: Option<PathBuf>,
    /// Collapse inflections with the suffix rule table. Defaults to `false`.
    pub word_stems: bool,
    /// Append the run to the history log. Defaults to `true`.
    pub save: bool,
    /// History log location. Defaults to [`DEFAULT_RESULTS_PATH`].
    pub results_path: PathBuf,
    /// Number of words to report. Defaults to [`DEFAULT_TOP`].
    pub top: usize,
    pub decoding: Decoding,
}

impl CountOptions {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
            stopword_path: None,
            word_stems: false,
            save: true,
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            top: DEFAULT_TOP,
            decoding: Decoding::Lossy,
        }
    }
}
