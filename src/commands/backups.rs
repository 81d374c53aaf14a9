// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::backup;
use crate::config::Config;
use crate::utils::{arg, opt_arg, pretty_table};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

fn backup_root(config: &Config, sub: &clap::ArgMatches) -> PathBuf {
    opt_arg(sub, "dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.backup_dir())
}

pub fn handle(app: &mut App, config: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("create", sub)) => {
            let now = chrono::Local::now().naive_local();
            let dir = app.create_backup(&backup_root(config, sub), now)?;
            println!("Backup written to {}", dir.display());
        }
        Some(("list", sub)) => {
            let dirs = backup::list_backups(&backup_root(config, sub))?;
            if dirs.is_empty() {
                println!("No backups found");
            } else {
                let rows = dirs
                    .into_iter()
                    .map(|d| {
                        let name = d
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        vec![name, d.display().to_string()]
                    })
                    .collect();
                println!("{}", pretty_table(&["Backup", "Path"], rows));
            }
        }
        Some(("restore", sub)) => {
            let path = arg(sub, "path")?;
            let saved = app
                .restore_backup(Path::new(path))
                .with_context(|| format!("Restore {}", path))?;
            println!("Restored backup {}", path);
            if !saved {
                eprintln!("Warning: some records could not be written to storage");
            }
        }
        _ => {}
    }
    Ok(())
}
