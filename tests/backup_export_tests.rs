// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetbuddy::app::App;
use budgetbuddy::backup;
use budgetbuddy::budget::Allocation;
use budgetbuddy::error::BudgetError;
use budgetbuddy::export;
use budgetbuddy::store::{MemoryStore, SqliteStore, Store};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::fs;
use tempfile::tempdir;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn at(y: i32, m: u32, day: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    d(y, m, day).and_hms_opt(h, min, s).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn populated(store: Box<dyn Store>) -> App {
    let mut app = App::load(store).with_clock(|| d(2025, 3, 15));
    app.set_budget(dec("2000"), Allocation::default());
    app.add_expense("rent", dec("800"), "march", Some(d(2025, 3, 1)));
    app.add_expense("dining", dec("12.5"), "", Some(d(2025, 3, 2)));
    app.add_income("Acme", dec("2000"), "salary", "", Some(d(2025, 3, 1)));
    app.add_goal("Laptop", dec("1500"), None, "");
    app
}

#[test]
fn json_export_round_trips_snapshot() {
    let app = populated(Box::new(MemoryStore::new()));
    let snapshot = app.snapshot();
    let mut buf = Vec::new();
    export::write_json(&mut buf, &snapshot, at(2025, 3, 15, 9, 30, 0)).unwrap();

    let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(v["exported_at"], "2025-03-15T09:30:00");
    assert_eq!(v["expenses"].as_array().unwrap().len(), 2);

    let back = export::read_json(buf.as_slice()).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn csv_export_has_headers_and_rows() {
    let app = populated(Box::new(MemoryStore::new()));
    let mut buf = Vec::new();
    export::write_expenses_csv(&mut buf, &app.ledger.expenses).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "date,category,amount,description");
    assert_eq!(lines[1], "2025-03-01,rent,800,march");
    assert_eq!(lines.len(), 3);

    let dir = tempdir().unwrap();
    let paths = export::export_csv_to_dir(dir.path(), &app.snapshot(), d(2025, 3, 15)).unwrap();
    assert!(paths[0].ends_with("expenses_20250315.csv"));
    let incomes = fs::read_to_string(&paths[1]).unwrap();
    assert!(incomes.starts_with("date,source,amount,category,description"));
}

#[test]
fn import_replaces_all_state() {
    let dir = tempdir().unwrap();
    let source = populated(Box::new(MemoryStore::new()));
    let path =
        export::export_json_to_dir(dir.path(), &source.snapshot(), at(2025, 3, 15, 8, 0, 0))
            .unwrap();
    assert!(path.ends_with("export_20250315.json"));

    let mut target = App::load(Box::new(MemoryStore::new()));
    target.add_expense("shopping", dec("99"), "", Some(d(2024, 1, 1)));
    assert!(target.import_json(&path).unwrap());
    assert_eq!(target.snapshot(), source.snapshot());
    assert_eq!(target.store().load_expenses().unwrap().len(), 2);
}

#[test]
fn backup_and_restore() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("backups");
    let mut app = populated(Box::new(SqliteStore::in_memory().unwrap()));
    let before = app.snapshot();

    let first = app.create_backup(&root, at(2025, 3, 15, 10, 0, 0)).unwrap();
    assert!(first.ends_with("backup_20250315_100000"));
    assert!(first.join("expenses.json").exists());
    let second = app.create_backup(&root, at(2025, 3, 16, 10, 0, 0)).unwrap();
    assert_eq!(backup::list_backups(&root).unwrap(), vec![second, first.clone()]);

    app.delete_expense(0);
    app.update_goal_progress("Laptop", dec("1500"));
    assert!(app.restore_backup(&first).unwrap());
    assert_eq!(app.snapshot(), before);
    assert_eq!(app.store().load_expenses().unwrap().len(), 2);
}

#[test]
fn restore_with_missing_kind_file_empties_that_kind() {
    let dir = tempdir().unwrap();
    let mut app = populated(Box::new(MemoryStore::new()));
    let path = app.create_backup(dir.path(), at(2025, 3, 15, 10, 0, 0)).unwrap();
    fs::remove_file(path.join("goals.json")).unwrap();

    assert!(app.restore_backup(&path).unwrap());
    assert!(app.goals.goals.is_empty());
    assert_eq!(app.ledger.expenses.len(), 2);
}

#[test]
fn restore_from_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let mut app = populated(Box::new(MemoryStore::new()));
    let err = app.restore_backup(&dir.path().join("backup_nope")).unwrap_err();
    assert!(matches!(err, BudgetError::BackupNotFound(_)));
    assert_eq!(app.ledger.expenses.len(), 2);
    assert!(backup::list_backups(&dir.path().join("absent")).unwrap().is_empty());
}
