#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::Category;
use chrono::NaiveDate;

fn temp_log() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expenses.txt");
    (dir, path)
}

fn fields(r: &Record) -> Vec<&str> {
    r.fields().iter().map(String::as_str).collect()
}

// ── load ──────────────────────────────────────────────────────

#[test]
fn test_load_missing_file_is_empty() {
    let (_dir, path) = temp_log();
    assert!(load(&path).unwrap().is_empty());
}

#[test]
fn test_load_empty_file() {
    let (_dir, path) = temp_log();
    fs::write(&path, "").unwrap();
    assert!(load(&path).unwrap().is_empty());
}

#[test]
fn test_load_splits_on_tabs() {
    let (_dir, path) = temp_log();
    fs::write(&path, "2024-01-01\t20.0\tFood\tlunch\n").unwrap();
    let records = load(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(fields(&records[0]), vec!["2024-01-01", "20.0", "Food", "lunch"]);
}

#[test]
fn test_load_skips_blank_lines() {
    let (_dir, path) = temp_log();
    fs::write(&path, "\nFood\t100\n   \n\nHousing\t900\n").unwrap();
    let records = load(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(fields(&records[1]), vec!["Housing", "900"]);
}

#[test]
fn test_load_keeps_malformed_lines() {
    let (_dir, path) = temp_log();
    fs::write(&path, "just one field\n2024-01-01\tabc\tFood\tx\ta\tb\n").unwrap();
    let records = load(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].fields().len(), 1);
    assert_eq!(records[1].fields().len(), 6);
}

#[test]
fn test_load_handles_crlf() {
    let (_dir, path) = temp_log();
    fs::write(&path, "Food\t100\r\nHousing\t900\r\n").unwrap();
    let records = load(&path).unwrap();
    assert_eq!(fields(&records[0]), vec!["Food", "100"]);
    assert_eq!(fields(&records[1]), vec!["Housing", "900"]);
}

#[test]
fn test_load_quotes_are_literal() {
    let (_dir, path) = temp_log();
    fs::write(&path, "2024-01-01\t5\tFood\t\"the\" diner\n").unwrap();
    let records = load(&path).unwrap();
    assert_eq!(records[0].description(), Some("\"the\" diner"));
}

#[test]
fn test_load_keeps_empty_trailing_description() {
    let (_dir, path) = temp_log();
    fs::write(&path, "2024-01-01\t5\tFood\t\n").unwrap();
    let records = load(&path).unwrap();
    assert_eq!(records[0].fields().len(), 4);
    assert_eq!(records[0].description(), Some(""));
}

// ── append ────────────────────────────────────────────────────

#[test]
fn test_append_creates_file() {
    let (_dir, path) = temp_log();
    append(&path, &["Food", "100"]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Food\t100\n");
}

#[test]
fn test_append_then_load_preserves_order() {
    let (_dir, path) = temp_log();
    let rows = [
        ["2024-01-01", "20.0", "Food", "lunch"],
        ["2024-01-02", "15.0", "Food", "dinner"],
        ["2024-01-03", "900", "Housing", "rent"],
        ["2024-01-04", "3.5", "Transportation", "bus \"express\""],
    ];
    for row in &rows {
        append(&path, row).unwrap();
    }

    let records = load(&path).unwrap();
    assert_eq!(records.len(), rows.len());
    for (record, row) in records.iter().zip(rows.iter()) {
        assert_eq!(fields(record), row.to_vec());
    }
}

#[test]
fn test_append_does_not_touch_existing_lines() {
    let (_dir, path) = temp_log();
    fs::write(&path, "garbage line\n").unwrap();
    append(&path, &["Food", "10"]).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "garbage line\nFood\t10\n"
    );
}

#[test]
fn test_append_expense() {
    let (_dir, path) = temp_log();
    let expense = Expense::new(
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        12.25,
        Category::Entertainment,
        "cinema".into(),
    )
    .unwrap();
    append_expense(&path, &expense).unwrap();

    let records = load(&path).unwrap();
    assert_eq!(records[0].category(), Some(Category::Entertainment));
    assert_eq!(records[0].amount(), Some(12.25));
    assert_eq!(records[0].fields()[0], "2024-03-09");
}

#[test]
fn test_append_budget() {
    let (_dir, path) = temp_log();
    append_budget(&path, &BudgetLimit::new("Food".into(), 250.5).unwrap()).unwrap();
    let records = load(&path).unwrap();
    assert_eq!(records[0].budget_limit(), Some(("Food", 250.5)));
}

// ── ensure_exists ─────────────────────────────────────────────

#[test]
fn test_ensure_exists_creates_empty_file_and_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("budget.txt");
    ensure_exists(&path).unwrap();
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_ensure_exists_keeps_content() {
    let (_dir, path) = temp_log();
    fs::write(&path, "Food\t100\n").unwrap();
    ensure_exists(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Food\t100\n");
}

#[test]
fn test_load_survives_invalid_utf8_line() {
    let (_dir, path) = temp_log();
    let mut content = b"2024-01-01\t20.0\tFood\tlunch\n2024-01-02\t4.5\tFood\tcaf".to_vec();
    content.push(0xe9);
    content.extend_from_slice(b"\n2024-01-03\t2.75\tTransportation\tbus\n");
    fs::write(&path, content).unwrap();

    let records = load(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].description(), Some("caf\u{FFFD}"));
    assert_eq!(records[1].amount(), Some(4.5));
    assert_eq!(records[2].description(), Some("bus"));
}
