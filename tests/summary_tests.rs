// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetbuddy::error::BudgetError;
use budgetbuddy::ledger::Ledger;
use budgetbuddy::models::Expense;
use budgetbuddy::summary;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn exp(date: NaiveDate, category: &str, amount: &str) -> Expense {
    Expense {
        date,
        category: category.into(),
        amount: dec(amount),
        description: String::new(),
    }
}

fn ledger() -> Ledger {
    Ledger::new(
        vec![
            exp(d(2025, 3, 3), "groceries", "10"),
            exp(d(2025, 3, 9), "dining", "30"),
            exp(d(2025, 3, 10), "groceries", "20"),
            exp(d(2025, 3, 16), "dining", "40"),
            exp(d(2025, 1, 5), "rent", "800"),
            exp(d(2024, 12, 1), "rent", "750"),
        ],
        Vec::new(),
    )
}

#[test]
fn monthly_summary_uses_date_prefix() {
    let s = summary::monthly_summary(&ledger(), "2025-03");
    assert_eq!(s.total_spent, dec("100"));
    assert_eq!(s.expense_count, 4);
    assert_eq!(s.category_totals["groceries"], dec("30"));
    assert_eq!(s.category_totals["dining"], dec("70"));
}

#[test]
fn weekly_summary_covers_seven_days_inclusive() {
    let start = summary::week_start_for(d(2025, 3, 15));
    assert_eq!(start, d(2025, 3, 10));
    let s = summary::weekly_summary(&ledger(), start);
    assert_eq!(s.week_end, d(2025, 3, 16));
    assert_eq!(s.expense_count, 2);
    assert_eq!(s.total_spent, dec("60"));
}

#[test]
fn yearly_average_always_divides_by_twelve() {
    let s = summary::yearly_summary(&ledger(), 2025);
    assert_eq!(s.total_spent, dec("900"));
    assert_eq!(s.monthly_totals.len(), 2);
    assert_eq!(s.monthly_totals["2025-01"], dec("800"));
    assert_eq!(s.average_monthly, dec("75"));
}

#[test]
fn statistics_median_and_first_seen_ties() {
    let stats = summary::statistics(&ledger(), Some("2025-03")).unwrap();
    assert_eq!(stats.expense_count, 4);
    assert_eq!(stats.average_expense, dec("25"));
    assert_eq!(stats.median_expense, dec("25"));
    assert_eq!(stats.largest_expense.amount, dec("40"));
    // two each; groceries was seen first
    assert_eq!(stats.most_frequent_category.name, "groceries");
    assert_eq!(stats.most_frequent_category.count, 2);
    assert_eq!(stats.top_category.name, "dining");
    assert_eq!(stats.top_category.amount, dec("70"));
}

#[test]
fn statistics_on_empty_period_errors() {
    let err = summary::statistics(&ledger(), Some("2023-01")).unwrap_err();
    assert!(matches!(err, BudgetError::NoExpenses { .. }));
}

#[test]
fn category_case_makes_separate_buckets() {
    let ledger = Ledger::new(
        vec![
            exp(d(2025, 3, 1), "Groceries", "12"),
            exp(d(2025, 3, 2), "groceries", "8"),
        ],
        Vec::new(),
    );
    let s = summary::monthly_summary(&ledger, "2025-03");
    assert_eq!(s.category_totals.len(), 2);
    assert_eq!(s.category_totals["Groceries"], dec("12"));
    assert_eq!(s.category_totals["groceries"], dec("8"));
}
