// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com", "BudgetBuddy", "budgetbuddy"));

pub const DATA_DIR_ENV: &str = "BUDGETBUDDY_DATA_DIR";
const DB_FILE: &str = "budgetbuddy.sqlite";

/// Resolved on-disk locations.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// `--data-dir` wins over `BUDGETBUDDY_DATA_DIR`, which wins over the
    /// platform data directory.
    pub fn resolve(flag: Option<&str>) -> Result<Self> {
        let env = std::env::var(DATA_DIR_ENV).ok();
        let data_dir = match flag.or(env.as_deref()).map(str::trim) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => ProjectDirs::from(APP.0, APP.1, APP.2)
                .context("Could not determine platform-specific data dir")?
                .data_dir()
                .to_path_buf(),
        };
        Ok(Self::at(data_dir))
    }

    pub fn at(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [self.data_dir.clone(), self.backup_dir(), self.export_dir()] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        Ok(())
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.data_dir.join("backups")
    }

    pub fn export_dir(&self) -> PathBuf {
        self.data_dir.join("exports")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
