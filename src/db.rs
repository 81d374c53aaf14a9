// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

pub fn open_or_init(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    debug!(path = %path.display(), "opened record store");
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS expenses(
        position INTEGER PRIMARY KEY,
        date TEXT NOT NULL,
        category TEXT NOT NULL,
        amount TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT ''
    );
    CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);

    CREATE TABLE IF NOT EXISTS incomes(
        position INTEGER PRIMARY KEY,
        date TEXT NOT NULL,
        source TEXT NOT NULL,
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT ''
    );

    -- at most one row; the current budget replaces any previous one
    CREATE TABLE IF NOT EXISTS budget(
        id INTEGER PRIMARY KEY CHECK(id = 1),
        month TEXT NOT NULL,
        total_income TEXT NOT NULL,
        needs_percentage TEXT NOT NULL,
        wants_percentage TEXT NOT NULL,
        savings_percentage TEXT NOT NULL,
        needs_amount TEXT NOT NULL,
        wants_amount TEXT NOT NULL,
        savings_amount TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS categories(
        name TEXT PRIMARY KEY,
        color TEXT NOT NULL,
        icon TEXT NOT NULL,
        budget_type TEXT NOT NULL CHECK(budget_type IN ('needs','wants','savings'))
    );

    CREATE TABLE IF NOT EXISTS goals(
        position INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        target_amount TEXT NOT NULL,
        current_amount TEXT NOT NULL,
        deadline TEXT,
        description TEXT NOT NULL DEFAULT '',
        is_completed INTEGER NOT NULL DEFAULT 0
    );
    "#,
    )
}
