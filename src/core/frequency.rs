// File: src/core/frequency.rs
use crate::core::types::{TopWords, WordCounts};

/// Builds a map of word -> count in one pass.
/// Keys keep the order in which each word was first seen.
pub fn count_words<S: AsRef<str>>(words: &[S]) -> WordCounts {
    let mut counts = WordCounts::new();
    for word in words {
        *counts.entry(word.as_ref().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Returns the `top` highest counts, descending.
///
/// The sort is stable over the counting order, so words with equal counts
/// come out in first-occurrence order.
pub fn top_words(counts: &WordCounts, top: usize) -> TopWords {
    let mut entries: Vec<(&String, &u64)> = counts.iter().collect();
    entries.sort_by_key(|&(_, &count)| std::cmp::Reverse(count));
    entries
        .into_iter()
        .take(top)
        .map(|(word, &count)| (word.clone(), count))
        .collect()
}
