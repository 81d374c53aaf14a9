// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use budgetbuddy::app::App;
use budgetbuddy::config::Config;
use budgetbuddy::store::SqliteStore;
use budgetbuddy::{cli, commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = Config::resolve(matches.get_one::<String>("data_dir").map(String::as_str))?;
    config.ensure_dirs()?;
    let store = SqliteStore::open(&config.db_path())?;
    let mut app = App::load(Box::new(store));

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", config.db_path().display());
        }
        Some(("budget", sub)) => commands::budgets::handle(&mut app, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&mut app, sub)?,
        Some(("income", sub)) => commands::incomes::handle(&mut app, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut app, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut app, sub)?,
        Some(("report", sub)) => commands::reports::handle(&app, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&app, &config, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut app, sub)?,
        Some(("backup", sub)) => commands::backups::handle(&mut app, &config, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&app)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
