// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

/// Errors surfaced by the budgeting core and its record store.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    #[error("No budget set. Please set up your budget first.")]
    NoBudget,

    #[error("Not enough expense history to predict (need {required} expenses, have {found})")]
    InsufficientHistory { required: usize, found: usize },

    #[error("No expenses recorded for {period}")]
    NoExpenses { period: String },

    #[error("Backup '{}' not found", .0.display())]
    BackupNotFound(PathBuf),

    #[error("Invalid stored {kind} value '{value}'")]
    Corrupt { kind: &'static str, value: String },

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BudgetError>;
