// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Month, week and year aggregation over the ledger.

use crate::error::{BudgetError, Result};
use crate::ledger::{Ledger, date_has_prefix};
use crate::models::Expense;
use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: String,
    pub total_spent: Decimal,
    pub category_totals: BTreeMap<String, Decimal>,
    pub expense_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_spent: Decimal,
    pub category_totals: BTreeMap<String, Decimal>,
    pub expense_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlySummary {
    pub year: i32,
    pub total_spent: Decimal,
    pub category_totals: BTreeMap<String, Decimal>,
    pub monthly_totals: BTreeMap<String, Decimal>,
    pub expense_count: usize,
    pub average_monthly: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAmount {
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_spent: Decimal,
    pub expense_count: usize,
    pub average_expense: Decimal,
    pub median_expense: Decimal,
    pub largest_expense: Expense,
    pub most_frequent_category: CategoryCount,
    pub top_category: CategoryAmount,
}

pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Monday on or before `date`.
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn totals<'a>(
    expenses: impl Iterator<Item = &'a Expense>,
) -> (Decimal, BTreeMap<String, Decimal>, usize) {
    let mut total = Decimal::ZERO;
    let mut by_category = BTreeMap::new();
    let mut count = 0;
    for e in expenses {
        *by_category
            .entry(e.category.clone())
            .or_insert(Decimal::ZERO) += e.amount;
        total += e.amount;
        count += 1;
    }
    (total, by_category, count)
}

/// Category strings are bucketed verbatim; "Groceries" and "groceries" stay apart.
pub fn monthly_summary(ledger: &Ledger, month: &str) -> MonthlySummary {
    let (total_spent, category_totals, expense_count) = totals(ledger.expenses_with_prefix(month));
    MonthlySummary {
        month: month.to_string(),
        total_spent,
        category_totals,
        expense_count,
    }
}

pub fn weekly_summary(ledger: &Ledger, week_start: NaiveDate) -> WeeklySummary {
    let week_end = week_start + Duration::days(6);
    let (total_spent, category_totals, expense_count) =
        totals(ledger.expenses_between(week_start, week_end));
    WeeklySummary {
        week_start,
        week_end,
        total_spent,
        category_totals,
        expense_count,
    }
}

/// `average_monthly` always divides by 12, whatever the number of months with data.
pub fn yearly_summary(ledger: &Ledger, year: i32) -> YearlySummary {
    let prefix = format!("{:04}", year);
    let mut monthly_totals = BTreeMap::new();
    for e in ledger.expenses_with_prefix(&prefix) {
        *monthly_totals
            .entry(month_key(e.date))
            .or_insert(Decimal::ZERO) += e.amount;
    }
    let (total_spent, category_totals, expense_count) =
        totals(ledger.expenses_with_prefix(&prefix));
    YearlySummary {
        year,
        total_spent,
        category_totals,
        monthly_totals,
        expense_count,
        average_monthly: total_spent / Decimal::from(12),
    }
}

/// Descriptive statistics over every expense, or those whose date has `prefix`.
pub fn statistics(ledger: &Ledger, prefix: Option<&str>) -> Result<Statistics> {
    let selected: Vec<&Expense> = ledger
        .expenses
        .iter()
        .filter(|e| prefix.is_none_or(|p| date_has_prefix(&e.date, p)))
        .collect();
    let Some(first) = selected.first() else {
        return Err(BudgetError::NoExpenses {
            period: prefix.unwrap_or("any period").to_string(),
        });
    };

    let total_spent: Decimal = selected.iter().map(|e| e.amount).sum();
    let expense_count = selected.len();
    let average_expense = total_spent / Decimal::from(expense_count);

    let mut amounts: Vec<Decimal> = selected.iter().map(|e| e.amount).collect();
    amounts.sort();
    let mid = expense_count / 2;
    let median_expense = if expense_count % 2 == 0 {
        (amounts[mid - 1] + amounts[mid]) / Decimal::from(2)
    } else {
        amounts[mid]
    };

    let mut largest = *first;
    for e in &selected {
        if e.amount > largest.amount {
            largest = *e;
        }
    }

    // First-seen order decides ties.
    let mut per_category: Vec<(&str, usize, Decimal)> = Vec::new();
    for e in &selected {
        match per_category.iter_mut().find(|entry| entry.0 == e.category) {
            Some(entry) => {
                entry.1 += 1;
                entry.2 += e.amount;
            }
            None => per_category.push((e.category.as_str(), 1, e.amount)),
        }
    }
    let mut most_frequent = per_category[0];
    let mut top = per_category[0];
    for entry in &per_category[1..] {
        if entry.1 > most_frequent.1 {
            most_frequent = *entry;
        }
        if entry.2 > top.2 {
            top = *entry;
        }
    }

    Ok(Statistics {
        total_spent,
        expense_count,
        average_expense,
        median_expense,
        largest_expense: largest.clone(),
        most_frequent_category: CategoryCount {
            name: most_frequent.0.to_string(),
            count: most_frequent.1,
        },
        top_category: CategoryAmount {
            name: top.0.to_string(),
            amount: top.2,
        },
    })
}
