// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::utils::arg;
use anyhow::{Context, Result};
use std::path::Path;

/// Replaces every record kind with the contents of a JSON export.
pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    let path = arg(m, "path")?;
    let saved = app
        .import_json(Path::new(path))
        .with_context(|| format!("Import {}", path))?;
    println!(
        "Imported {} expenses, {} incomes, {} goals from {}",
        app.ledger.expenses.len(),
        app.ledger.incomes.len(),
        app.goals.goals.len(),
        path
    );
    if !saved {
        eprintln!("Warning: some records could not be written to storage");
    }
    Ok(())
}
