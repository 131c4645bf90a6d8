// File: src/commands.rs
use crate::core::engine::WordCounter;
use crate::core::types::{CountOptions, TopWords};
use crate::errors::Result;
use crate::persistence::{HistoryRecord, HistoryStore};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Runs the pipeline over `options.filepath`, writes the ranking to `out`
/// and, when `options.save` is set, appends the run to the history log.
///
/// All reads happen before anything is written to the log, so a failed read
/// never leaves a partial record behind.
pub fn word_count<W: Write>(options: &CountOptions, out: &mut W) -> Result<TopWords> {
    let counter = WordCounter::from_options(options)?;
    let top = counter.count_file(&options.filepath, options.decoding)?;

    write_top_words(&top, out)?;
    out.flush()?;

    if options.save {
        let record = HistoryRecord::new(
            &options.filepath,
            options.stopword_path.as_deref(),
            options.word_stems,
            top.clone(),
        );
        debug!(id = %record.id(), "appending history record");
        HistoryStore::new(&options.results_path).save(record)?;
    } else {
        debug!("saving disabled, results not recorded");
    }

    Ok(top)
}

/// Prints the whole history log, or "No results exist".
pub fn review<W: Write>(results_path: &Path, out: &mut W) -> Result<()> {
    let text = HistoryStore::new(results_path).review()?;
    writeln!(out, "{}", text.trim_end())?;
    out.flush()?;
    Ok(())
}

/// One `word: count` line per entry, in rank order.
pub fn write_top_words<W: Write>(top: &TopWords, out: &mut W) -> Result<()> {
    let width = top.keys().map(|w| w.len()).max().unwrap_or(0);
    for (word, count) in top {
        writeln!(out, "{:<width$}  {}", word, count, width = width)?;
    }
    Ok(())
}
