use std::fs;
use std::path::Path;

use wordfreq_core::persistence::{HISTORY_CAP, NO_RESULTS};
use wordfreq_core::{HistoryRecord, HistoryStore, TopWords, WordFreqError};

fn record(tag: &str) -> HistoryRecord {
    let mut results = TopWords::new();
    results.insert(tag.to_string(), 1);
    HistoryRecord::new(Path::new(&format!("{tag}.txt")), None, false, results)
}

#[test]
fn missing_store_loads_empty() {
    let temp = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(temp.path().join("results.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn blank_store_loads_empty() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("results.json");
    fs::write(&path, "").unwrap();
    assert!(HistoryStore::new(&path).load().unwrap().is_empty());
    fs::write(&path, "  \n").unwrap();
    assert!(HistoryStore::new(&path).load().unwrap().is_empty());
}

#[test]
fn save_creates_parent_dirs_and_prepends() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("out").join("results.json");
    let store = HistoryStore::new(&path);

    store.save(record("first")).unwrap();
    store.save(record("second")).unwrap();

    let history = store.load().unwrap();
    let files: Vec<&str> = history.iter().map(|r| r.filepath()).collect();
    assert_eq!(files, vec!["second.txt", "first.txt"]);
}

#[test]
fn twelve_saves_keep_the_newest_ten() {
    let temp = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(temp.path().join("results.json"));

    let mut ids = Vec::new();
    for i in 0..12 {
        let rec = record(&format!("run{i}"));
        ids.push(rec.id());
        store.save(rec).unwrap();
    }

    let history = store.load().unwrap();
    assert_eq!(history.len(), HISTORY_CAP);
    assert_eq!(history[0].filepath(), "run11.txt");
    assert_eq!(history[9].filepath(), "run2.txt");

    let kept: Vec<_> = history.iter().map(|r| r.id()).collect();
    assert!(!kept.contains(&ids[0]));
    assert!(!kept.contains(&ids[1]));
    let newest_first: Vec<_> = ids[2..].iter().rev().copied().collect();
    assert_eq!(kept, newest_first);
}

#[test]
fn saved_records_round_trip_unchanged() {
    let temp = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(temp.path().join("results.json"));
    let mut results = TopWords::new();
    results.insert("The".to_string(), 2);
    results.insert("cat".to_string(), 2);
    results.insert("sat".to_string(), 1);
    let rec = HistoryRecord::new(
        Path::new("in.txt"),
        Some(Path::new("stop.txt")),
        true,
        results,
    );

    let written = store.save(rec.clone()).unwrap();
    assert_eq!(written, vec![rec.clone()]);
    assert_eq!(store.load().unwrap(), vec![rec]);
}

#[test]
fn store_is_pretty_json_with_expected_keys() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("results.json");
    HistoryStore::new(&path).save(record("a")).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.starts_with("[\n"));
    for key in ["\"id\"", "\"filepath\"", "\"stopword-path\"", "\"word-stems\"", "\"results\"", "\"timestamp\""] {
        assert!(raw.contains(key), "missing {key} in {raw}");
    }
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
}

#[test]
fn corrupt_store_is_a_parse_error_and_is_left_alone() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("results.json");
    fs::write(&path, "{not json").unwrap();
    let store = HistoryStore::new(&path);

    assert!(matches!(store.load(), Err(WordFreqError::Parse { .. })));
    assert!(matches!(store.save(record("x")), Err(WordFreqError::Parse { .. })));
    assert!(matches!(store.review(), Err(WordFreqError::Parse { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
}

#[test]
fn invalid_utf8_store_is_a_parse_error() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("results.json");
    fs::write(&path, b"\xff\xfe[]").unwrap();
    let store = HistoryStore::new(&path);

    assert!(matches!(store.load(), Err(WordFreqError::Parse { .. })));
    assert!(matches!(store.review(), Err(WordFreqError::Parse { .. })));
    assert_eq!(fs::read(&path).unwrap(), b"\xff\xfe[]");
}

#[test]
fn wrong_shape_is_a_parse_error() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("results.json");
    fs::write(&path, r#"[{"id": "abc"}]"#).unwrap();
    assert!(matches!(
        HistoryStore::new(&path).load(),
        Err(WordFreqError::Parse { .. })
    ));
}

#[test]
fn review_reports_no_results() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("results.json");
    assert_eq!(HistoryStore::new(&path).review().unwrap(), NO_RESULTS);
    fs::write(&path, "").unwrap();
    assert_eq!(HistoryStore::new(&path).review().unwrap(), NO_RESULTS);
}

#[test]
fn review_lists_newest_first() {
    let temp = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(temp.path().join("results.json"));
    store.save(record("older")).unwrap();
    store.save(record("newer")).unwrap();

    let text = store.review().unwrap();
    let newer = text.find("newer.txt").unwrap();
    let older = text.find("older.txt").unwrap();
    assert!(newer < older);
    assert!(text.starts_with("#1 "));
}

#[test]
fn no_temp_files_left_behind() {
    let temp = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(temp.path().join("results.json"));
    store.save(record("a")).unwrap();
    store.save(record("b")).unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
