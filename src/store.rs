// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Record store: load/save for each of the five record kinds.
//!
//! A save replaces everything previously stored for that kind. There is no
//! locking; two processes sharing one store file lose updates (last save wins).

use crate::db;
use crate::error::{BudgetError, Result};
use crate::models::{Budget, BudgetType, Category, Expense, Goal, Income};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Expenses,
    Incomes,
    Budget,
    Categories,
    Goals,
}

impl RecordKind {
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Expenses,
        RecordKind::Incomes,
        RecordKind::Budget,
        RecordKind::Categories,
        RecordKind::Goals,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Expenses => "expenses",
            RecordKind::Incomes => "incomes",
            RecordKind::Budget => "budget",
            RecordKind::Categories => "categories",
            RecordKind::Goals => "goals",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait Store {
    fn load_expenses(&self) -> Result<Vec<Expense>>;
    fn save_expenses(&mut self, items: &[Expense]) -> Result<()>;
    fn load_incomes(&self) -> Result<Vec<Income>>;
    fn save_incomes(&mut self, items: &[Income]) -> Result<()>;
    fn load_budget(&self) -> Result<Option<Budget>>;
    fn save_budget(&mut self, budget: Option<&Budget>) -> Result<()>;
    fn load_categories(&self) -> Result<Vec<Category>>;
    fn save_categories(&mut self, items: &[Category]) -> Result<()>;
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn save_goals(&mut self, items: &[Goal]) -> Result<()>;
}

fn decimal(kind: &'static str, s: &str) -> Result<Decimal> {
    s.parse::<Decimal>().map_err(|_| BudgetError::Corrupt {
        kind,
        value: s.to_string(),
    })
}

/// SQLite-backed store, one table per record kind.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            conn: db::open_or_init(path)?,
        })
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: db::open_in_memory()?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Store for SqliteStore {
    fn load_expenses(&self) -> Result<Vec<Expense>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, category, amount, description FROM expenses ORDER BY position",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, NaiveDate>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (date, category, amount, description) = row?;
            out.push(Expense {
                date,
                category,
                amount: decimal("expense amount", &amount)?,
                description,
            });
        }
        Ok(out)
    }

    fn save_expenses(&mut self, items: &[Expense]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM expenses", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO expenses(position, date, category, amount, description)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (i, e) in items.iter().enumerate() {
                stmt.execute(params![
                    i as i64,
                    e.date,
                    e.category,
                    e.amount.to_string(),
                    e.description
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn load_incomes(&self) -> Result<Vec<Income>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, source, amount, category, description FROM incomes ORDER BY position",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, NaiveDate>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (date, source, amount, category, description) = row?;
            out.push(Income {
                date,
                source,
                amount: decimal("income amount", &amount)?,
                category,
                description,
            });
        }
        Ok(out)
    }

    fn save_incomes(&mut self, items: &[Income]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM incomes", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO incomes(position, date, source, amount, category, description)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for (i, inc) in items.iter().enumerate() {
                stmt.execute(params![
                    i as i64,
                    inc.date,
                    inc.source,
                    inc.amount.to_string(),
                    inc.category,
                    inc.description
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn load_budget(&self) -> Result<Option<Budget>> {
        let row = self
            .conn
            .query_row(
                "SELECT month, total_income, needs_percentage, wants_percentage, savings_percentage,
                        needs_amount, wants_amount, savings_amount
                 FROM budget WHERE id=1",
                [],
                |r| {
                    let mut cols = Vec::with_capacity(8);
                    for i in 0..8 {
                        cols.push(r.get::<_, String>(i)?);
                    }
                    Ok(cols)
                },
            )
            .optional()?;
        let Some(cols) = row else {
            return Ok(None);
        };
        let d = |i: usize| decimal("budget", &cols[i]);
        Ok(Some(Budget {
            month: cols[0].clone(),
            total_income: d(1)?,
            needs_percentage: d(2)?,
            wants_percentage: d(3)?,
            savings_percentage: d(4)?,
            needs_amount: d(5)?,
            wants_amount: d(6)?,
            savings_amount: d(7)?,
        }))
    }

    fn save_budget(&mut self, budget: Option<&Budget>) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM budget", [])?;
        if let Some(b) = budget {
            tx.execute(
                "INSERT INTO budget(id, month, total_income, needs_percentage, wants_percentage,
                                    savings_percentage, needs_amount, wants_amount, savings_amount)
                 VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    b.month,
                    b.total_income.to_string(),
                    b.needs_percentage.to_string(),
                    b.wants_percentage.to_string(),
                    b.savings_percentage.to_string(),
                    b.needs_amount.to_string(),
                    b.wants_amount.to_string(),
                    b.savings_amount.to_string()
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, color, icon, budget_type FROM categories ORDER BY name")?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, String>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (name, color, icon, budget_type) = row?;
            let budget_type = budget_type
                .parse::<BudgetType>()
                .map_err(|_| BudgetError::Corrupt {
                    kind: "category budget type",
                    value: budget_type.clone(),
                })?;
            out.push(Category {
                name,
                color,
                icon,
                budget_type,
            });
        }
        Ok(out)
    }

    fn save_categories(&mut self, items: &[Category]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM categories", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO categories(name, color, icon, budget_type) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for c in items {
                stmt.execute(params![c.name, c.color, c.icon, c.budget_type.as_str()])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn load_goals(&self) -> Result<Vec<Goal>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, target_amount, current_amount, deadline, description, is_completed
             FROM goals ORDER BY position",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, String>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, Option<String>>(3)?,
                r.get::<_, String>(4)?,
                r.get::<_, bool>(5)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (name, target, current, deadline, description, is_completed) = row?;
            out.push(Goal {
                name,
                target_amount: decimal("goal target", &target)?,
                current_amount: decimal("goal progress", &current)?,
                deadline,
                description,
                is_completed,
            });
        }
        Ok(out)
    }

    fn save_goals(&mut self, items: &[Goal]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM goals", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO goals(position, name, target_amount, current_amount, deadline,
                                   description, is_completed)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for (i, g) in items.iter().enumerate() {
                stmt.execute(params![
                    i as i64,
                    g.name,
                    g.target_amount.to_string(),
                    g.current_amount.to_string(),
                    g.deadline,
                    g.description,
                    g.is_completed
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

/// Store that keeps everything in memory; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    expenses: Vec<Expense>,
    incomes: Vec<Income>,
    budget: Option<Budget>,
    categories: Vec<Category>,
    goals: Vec<Goal>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.expenses.clone())
    }

    fn save_expenses(&mut self, items: &[Expense]) -> Result<()> {
        self.expenses = items.to_vec();
        Ok(())
    }

    fn load_incomes(&self) -> Result<Vec<Income>> {
        Ok(self.incomes.clone())
    }

    fn save_incomes(&mut self, items: &[Income]) -> Result<()> {
        self.incomes = items.to_vec();
        Ok(())
    }

    fn load_budget(&self) -> Result<Option<Budget>> {
        Ok(self.budget.clone())
    }

    fn save_budget(&mut self, budget: Option<&Budget>) -> Result<()> {
        self.budget = budget.cloned();
        Ok(())
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn save_categories(&mut self, items: &[Category]) -> Result<()> {
        self.categories = items.to_vec();
        Ok(())
    }

    fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.goals.clone())
    }

    fn save_goals(&mut self, items: &[Goal]) -> Result<()> {
        self.goals = items.to_vec();
        Ok(())
    }
}
