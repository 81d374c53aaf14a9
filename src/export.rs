// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Whole-state JSON documents and flat CSV tables.

use crate::error::Result;
use crate::models::{Budget, Category, Expense, Goal, Income};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Every record the application holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub budget: Option<Budget>,
    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
    pub categories: Vec<Category>,
    pub goals: Vec<Goal>,
}

/// On-disk layout of a JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub exported_at: NaiveDateTime,
    pub budget: Option<Budget>,
    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl ExportDocument {
    pub fn new(snapshot: Snapshot, exported_at: NaiveDateTime) -> Self {
        Self {
            exported_at,
            budget: snapshot.budget,
            expenses: snapshot.expenses,
            incomes: snapshot.incomes,
            categories: snapshot.categories,
            goals: snapshot.goals,
        }
    }

    pub fn into_snapshot(self) -> Snapshot {
        Snapshot {
            budget: self.budget,
            expenses: self.expenses,
            incomes: self.incomes,
            categories: self.categories,
            goals: self.goals,
        }
    }
}

pub fn write_json<W: Write>(w: W, snapshot: &Snapshot, exported_at: NaiveDateTime) -> Result<()> {
    let doc = ExportDocument::new(snapshot.clone(), exported_at);
    serde_json::to_writer_pretty(w, &doc)?;
    Ok(())
}

pub fn read_json<R: Read>(r: R) -> Result<Snapshot> {
    let doc: ExportDocument = serde_json::from_reader(r)?;
    Ok(doc.into_snapshot())
}

pub fn import_json_file(path: &Path) -> Result<Snapshot> {
    read_json(std::io::BufReader::new(File::open(path)?))
}

pub fn write_expenses_csv<W: Write>(w: W, expenses: &[Expense]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["date", "category", "amount", "description"])?;
    for e in expenses {
        wtr.write_record([
            e.date.to_string(),
            e.category.clone(),
            e.amount.to_string(),
            e.description.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_incomes_csv<W: Write>(w: W, incomes: &[Income]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["date", "source", "amount", "category", "description"])?;
    for i in incomes {
        wtr.write_record([
            i.date.to_string(),
            i.source.clone(),
            i.amount.to_string(),
            i.category.clone(),
            i.description.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `export_<YYYYMMDD>.json` into `dir` and returns its path.
pub fn export_json_to_dir(dir: &Path, snapshot: &Snapshot, now: NaiveDateTime) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("export_{}.json", now.format("%Y%m%d")));
    write_json(File::create(&path)?, snapshot, now)?;
    Ok(path)
}

/// Writes `expenses_<YYYYMMDD>.csv` and `incomes_<YYYYMMDD>.csv` into `dir`.
pub fn export_csv_to_dir(dir: &Path, snapshot: &Snapshot, day: NaiveDate) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let stamp = day.format("%Y%m%d");
    let expenses_path = dir.join(format!("expenses_{}.csv", stamp));
    write_expenses_csv(File::create(&expenses_path)?, &snapshot.expenses)?;
    let incomes_path = dir.join(format!("incomes_{}.csv", stamp));
    write_incomes_csv(File::create(&incomes_path)?, &snapshot.incomes)?;
    Ok(vec![expenses_path, incomes_path])
}
