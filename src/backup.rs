// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Timestamped snapshot directories holding one JSON file per record kind.

use crate::error::{BudgetError, Result};
use crate::export::Snapshot;
use crate::store::{RecordKind, Store};
use chrono::NaiveDateTime;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const BACKUP_PREFIX: &str = "backup_";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

fn write_kind<T: Serialize>(dir: &Path, kind: RecordKind, value: &T) -> Result<()> {
    let data = serde_json::to_string_pretty(value)?;
    fs::write(dir.join(kind.file_name()), data)?;
    Ok(())
}

fn read_kind<T: DeserializeOwned + Default>(dir: &Path, kind: RecordKind) -> Result<T> {
    let path = dir.join(kind.file_name());
    if !path.exists() {
        warn!(%kind, path = %path.display(), "backup has no file for kind, restoring empty");
        return Ok(T::default());
    }
    Ok(serde_json::from_str(&fs::read_to_string(&path)?)?)
}

/// Copies what the store currently holds into `root/backup_<timestamp>/`.
pub fn create_backup(store: &dyn Store, root: &Path, now: NaiveDateTime) -> Result<PathBuf> {
    let dir = root.join(format!("{}{}", BACKUP_PREFIX, now.format(BACKUP_TIMESTAMP_FORMAT)));
    fs::create_dir_all(&dir)?;
    write_kind(&dir, RecordKind::Expenses, &store.load_expenses()?)?;
    write_kind(&dir, RecordKind::Incomes, &store.load_incomes()?)?;
    write_kind(&dir, RecordKind::Budget, &store.load_budget()?)?;
    write_kind(&dir, RecordKind::Categories, &store.load_categories()?)?;
    write_kind(&dir, RecordKind::Goals, &store.load_goals()?)?;
    info!(path = %dir.display(), "backup created");
    Ok(dir)
}

/// Snapshot directories under `root`, newest first.
pub fn list_backups(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Ok(Vec::new());
    }
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        let is_backup = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(BACKUP_PREFIX));
        if path.is_dir() && is_backup {
            dirs.push(path);
        }
    }
    // timestamps sort lexicographically
    dirs.sort_by(|a, b| b.cmp(a));
    Ok(dirs)
}

pub fn read_backup(dir: &Path) -> Result<Snapshot> {
    if !dir.is_dir() {
        return Err(BudgetError::BackupNotFound(dir.to_path_buf()));
    }
    Ok(Snapshot {
        expenses: read_kind(dir, RecordKind::Expenses)?,
        incomes: read_kind(dir, RecordKind::Incomes)?,
        budget: read_kind(dir, RecordKind::Budget)?,
        categories: read_kind(dir, RecordKind::Categories)?,
        goals: read_kind(dir, RecordKind::Goals)?,
    })
}
