// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::config::Config;
use crate::export;
use anyhow::{Result, bail};
use std::path::PathBuf;

pub fn handle(app: &App, config: &Config, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m
        .get_one::<String>("format")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|| "json".into());
    let out = m
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.export_dir());
    let now = chrono::Local::now().naive_local();
    let snapshot = app.snapshot();

    match fmt.as_str() {
        "json" => {
            let path = export::export_json_to_dir(&out, &snapshot, now)?;
            println!("Exported all data to {}", path.display());
        }
        "csv" => {
            for path in export::export_csv_to_dir(&out, &snapshot, now.date())? {
                println!("Exported {}", path.display());
            }
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    Ok(())
}
