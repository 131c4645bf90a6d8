// File: src/persistence.rs
use crate::core::types::TopWords;
use crate::errors::{Result, WordFreqError};
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;
use uuid::Uuid;

/// Most records kept in the log. Older ones are dropped on save.
pub const HISTORY_CAP: usize = 10;

pub const NO_RESULTS: &str = "No results exist";

/// One saved run. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    id: Uuid,
    filepath: String,
    #[serde(rename = "stopword-path")]
    stopword_path: Option<String>,
    #[serde(rename = "word-stems")]
    word_stems: bool,
    results: TopWords,
    #[serde(with = "iso_micros")]
    timestamp: NaiveDateTime,
}

/// `YYYY-MM-DDTHH:MM:SS.ffffff`, always six fractional digits on write.
/// Reads accept any fraction width, or none.
mod iso_micros {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<NaiveDateTime>().map_err(de::Error::custom)
    }
}

impl HistoryRecord {
    /// Stamps a fresh random id and the current local time.
    /// Paths are stored as text; non-UTF-8 parts are replaced with U+FFFD.
    pub fn new(
        filepath: &Path,
        stopword_path: Option<&Path>,
        word_stems: bool,
        results: TopWords,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            filepath: filepath.to_string_lossy().into_owned(),
            stopword_path: stopword_path.map(|p| p.to_string_lossy().into_owned()),
            word_stems,
            results,
            // Microsecond precision.
            timestamp: Local::now().naive_local().trunc_subsecs(6),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn filepath(&self) -> &str {
        &self.filepath
    }

    pub fn stopword_path(&self) -> Option<&str> {
        self.stopword_path.as_deref()
    }

    pub fn word_stems(&self) -> bool {
        self.word_stems
    }

    pub fn results(&self) -> &TopWords {
        &self.results
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

/// A capped, most-recent-first log of runs stored as pretty JSON.
///
/// Writes go through a temp file in the same directory and a rename, so a
/// crash never leaves a truncated log. Concurrent writers are not coordinated:
/// two runs saving at once can lose one of the records.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Missing or blank file -> empty log. Anything else must parse.
    pub fn load(&self) -> Result<Vec<HistoryRecord>> {
        let contents = match self.read_contents()? {
            Some(contents) => contents,
            None => return Ok(Vec::new()),
        };
        if contents.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        // Bad encoding is a parse failure too, not a read failure.
        serde_json::from_slice(&contents).map_err(|source| WordFreqError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Prepends `record`, keeps the newest [`HISTORY_CAP`] and rewrites the file.
    /// Returns the log as written.
    pub fn save(&self, record: HistoryRecord) -> Result<Vec<HistoryRecord>> {
        let previous = self.load()?;
        let mut history = Vec::with_capacity(HISTORY_CAP);
        history.push(record);
        history.extend(previous.into_iter().take(HISTORY_CAP - 1));

        self.write_all(&history)?;
        info!(
            path = %self.path.display(),
            records = history.len(),
            "saved results"
        );
        Ok(history)
    }

    /// Human-readable dump of the log, or [`NO_RESULTS`] when there is nothing to show.
    pub fn review(&self) -> Result<String> {
        let history = self.load()?;
        if history.is_empty() {
            return Ok(NO_RESULTS.to_string());
        }
        render_history(&history)
    }

    fn read_contents(&self) -> Result<Option<Vec<u8>>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let contents = fs::read(&self.path).map_err(|source| WordFreqError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(contents))
    }

    fn write_all(&self, history: &[HistoryRecord]) -> Result<()> {
        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer_pretty(&mut writer, history)
                .map_err(WordFreqError::Serialize)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }

        temp_file.persist(&self.path).map_err(io::Error::from)?;
        Ok(())
    }
}

/// Newest first, each record under a numbered header.
pub fn render_history(history: &[HistoryRecord]) -> Result<String> {
    let mut out = String::new();
    for (i, record) in history.iter().enumerate() {
        let body = serde_json::to_string_pretty(record).map_err(WordFreqError::Serialize)?;
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("#{} {}\n{}\n", i + 1, record.timestamp, body));
    }
    Ok(out)
}
