// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory expense and income log.
//!
//! Records are identified by their position. Deleting a record shifts every
//! later index down by one, so indices must not be cached across mutations.

use crate::models::{Expense, Income};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// True when the ISO rendering of `date` starts with `prefix` ("2025", "2025-08", ...).
pub fn date_has_prefix(date: &NaiveDate, prefix: &str) -> bool {
    date.format("%Y-%m-%d").to_string().starts_with(prefix)
}

/// Fields to overwrite on an existing expense; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeSummary {
    pub month: String,
    pub total_income: Decimal,
    pub source_totals: BTreeMap<String, Decimal>,
    pub category_totals: BTreeMap<String, Decimal>,
    pub income_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
}

impl Ledger {
    pub fn new(expenses: Vec<Expense>, incomes: Vec<Income>) -> Self {
        Self { expenses, incomes }
    }

    pub fn add_expense(&mut self, expense: Expense) -> Expense {
        self.expenses.push(expense.clone());
        expense
    }

    /// Expenses newest first, paired with their ledger index. Equal dates keep
    /// insertion order.
    pub fn list_expenses(
        &self,
        prefix: Option<&str>,
        limit: Option<usize>,
    ) -> Vec<(usize, &Expense)> {
        let mut rows: Vec<(usize, &Expense)> = self
            .expenses
            .iter()
            .enumerate()
            .filter(|(_, e)| prefix.is_none_or(|p| date_has_prefix(&e.date, p)))
            .collect();
        rows.sort_by(|a, b| b.1.date.cmp(&a.1.date));
        if let Some(n) = limit {
            rows.truncate(n);
        }
        rows
    }

    pub fn edit_expense(&mut self, index: usize, patch: ExpensePatch) -> Option<&Expense> {
        let expense = self.expenses.get_mut(index)?;
        if let Some(date) = patch.date {
            expense.date = date;
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }
        if let Some(description) = patch.description {
            expense.description = description;
        }
        Some(expense)
    }

    pub fn delete_expense(&mut self, index: usize) -> bool {
        if index < self.expenses.len() {
            self.expenses.remove(index);
            true
        } else {
            false
        }
    }

    pub fn expenses_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses
            .iter()
            .filter(move |e| date_has_prefix(&e.date, prefix))
    }

    /// Inclusive on both ends.
    pub fn expenses_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &Expense> {
        self.expenses
            .iter()
            .filter(move |e| start <= e.date && e.date <= end)
    }

    /// The `n` most recent expenses across the whole ledger.
    pub fn recent_expenses(&self, n: usize) -> Vec<&Expense> {
        self.list_expenses(None, Some(n))
            .into_iter()
            .map(|(_, e)| e)
            .collect()
    }

    pub fn add_income(&mut self, income: Income) -> Income {
        self.incomes.push(income.clone());
        income
    }

    pub fn list_incomes(&self, prefix: Option<&str>, limit: Option<usize>) -> Vec<&Income> {
        let mut rows: Vec<&Income> = self
            .incomes
            .iter()
            .filter(|i| prefix.is_none_or(|p| date_has_prefix(&i.date, p)))
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        if let Some(n) = limit {
            rows.truncate(n);
        }
        rows
    }

    pub fn income_summary(&self, month: &str) -> IncomeSummary {
        let mut source_totals = BTreeMap::new();
        let mut category_totals = BTreeMap::new();
        let mut total_income = Decimal::ZERO;
        let mut income_count = 0;
        for income in self
            .incomes
            .iter()
            .filter(|i| date_has_prefix(&i.date, month))
        {
            *source_totals
                .entry(income.source.clone())
                .or_insert(Decimal::ZERO) += income.amount;
            *category_totals
                .entry(income.category.clone())
                .or_insert(Decimal::ZERO) += income.amount;
            total_income += income.amount;
            income_count += 1;
        }
        IncomeSummary {
            month: month.to_string(),
            total_income,
            source_totals,
            category_totals,
            income_count,
        }
    }
}
