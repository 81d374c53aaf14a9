// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetbuddy::app::App;
use budgetbuddy::budget::Allocation;
use budgetbuddy::error::BudgetError;
use budgetbuddy::models::BudgetType;
use budgetbuddy::progress::Suggestion;
use budgetbuddy::store::{MemoryStore, Store};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn app() -> App {
    App::load(Box::new(MemoryStore::new())).with_clock(|| d(2025, 3, 15))
}

#[test]
fn default_split_is_fifty_thirty_twenty() {
    let mut app = app();
    let b = app.set_budget(dec("2000"), Allocation::default());
    assert_eq!(b.month, "2025-03");
    assert_eq!(b.needs_amount, dec("1000"));
    assert_eq!(b.wants_amount, dec("600"));
    assert_eq!(b.savings_amount, dec("400"));
    assert_eq!(app.store().load_budget().unwrap(), Some(b));
}

#[test]
fn custom_split_not_summing_to_hundred_is_kept() {
    let mut app = app();
    let split = Allocation::new(dec("60"), dec("30"), dec("20"));
    assert!(!split.sums_to_hundred());
    let b = app.set_budget(dec("1000"), split);
    assert_eq!(b.needs_amount, dec("600"));
    assert_eq!(b.allocation().total(), dec("110"));
}

#[test]
fn progress_without_budget_errors() {
    let app = app();
    assert!(matches!(app.budget_progress(None), Err(BudgetError::NoBudget)));
    assert_eq!(app.check_overspending(None), vec![Suggestion::NoBudget]);
}

#[test]
fn overspending_reports_total_and_needs() {
    let mut app = app();
    app.set_budget(dec("1000"), Allocation::default());
    app.add_expense("rent", dec("800"), "", Some(d(2025, 3, 1)));
    app.add_expense("groceries", dec("150"), "", Some(d(2025, 3, 5)));
    app.add_expense("dining", dec("150"), "", Some(d(2025, 3, 6)));

    let suggestions = app.check_overspending(None);
    assert_eq!(
        suggestions,
        vec![
            Suggestion::Overspent { excess: dec("100") },
            Suggestion::NeedsExceeded { excess: dec("450") },
        ]
    );
    assert_eq!(
        suggestions[0].to_string(),
        "You've overspent by 100.00 this month!"
    );

    let p = app.budget_progress(None).unwrap();
    assert_eq!(p.total.spent, dec("1100"));
    assert_eq!(p.total.remaining, Decimal::ZERO);
    assert_eq!(p.total.percent, Decimal::ONE_HUNDRED);
    assert_eq!(p.wants.spent, dec("150"));
    assert_eq!(p.wants.percent, dec("50"));
}

#[test]
fn on_track_when_nothing_exceeded() {
    let mut app = app();
    app.set_budget(dec("3000"), Allocation::default());
    app.add_expense("groceries", dec("40"), "", Some(d(2025, 3, 5)));
    assert_eq!(app.check_overspending(None), vec![Suggestion::OnTrack]);
}

#[test]
fn high_spending_pattern_needs_five_expenses() {
    let mut app = app();
    app.set_budget(dec("10000"), Allocation::default());
    for day in 1..=4 {
        app.add_expense("shopping", dec("80"), "", Some(d(2025, 3, day)));
    }
    assert_eq!(app.check_overspending(None), vec![Suggestion::OnTrack]);

    app.add_expense("groceries", dec("10"), "", Some(d(2025, 3, 5)));
    let suggestions = app.check_overspending(None);
    assert_eq!(
        suggestions,
        vec![Suggestion::HighSpending {
            category: "shopping".into(),
            average: dec("80"),
        }]
    );
}

#[test]
fn budget_vs_actual_floors_savings() {
    let mut app = app();
    app.set_budget(dec("1000"), Allocation::default());
    app.add_expense("rent", dec("700"), "", Some(d(2025, 3, 1)));
    app.add_expense("shopping", dec("400"), "", Some(d(2025, 3, 2)));
    let rows = app.budget_vs_actual(None).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].bucket, BudgetType::Needs);
    assert_eq!(rows[0].actual, dec("700"));
    assert_eq!(rows[1].actual, dec("400"));
    assert_eq!(rows[2].bucket, BudgetType::Savings);
    assert_eq!(rows[2].actual, Decimal::ZERO);
}

#[test]
fn category_breakdown_and_trend() {
    let mut app = app();
    app.add_expense("dining", dec("30"), "", Some(d(2025, 3, 1)));
    app.add_expense("rent", dec("800"), "", Some(d(2025, 3, 1)));
    app.add_expense("rent", dec("800"), "", Some(d(2025, 1, 1)));

    let points = app.category_breakdown(None);
    assert_eq!(points[0].label, "rent");
    assert_eq!(points[1].label, "dining");

    let trend = app.monthly_trend(3);
    let periods: Vec<&str> = trend.iter().map(|t| t.period.as_str()).collect();
    assert_eq!(periods, vec!["2025-01", "2025-02", "2025-03"]);
    assert_eq!(trend[1].total, Decimal::ZERO);
    assert_eq!(trend[2].total, dec("830"));
}

#[test]
fn wants_overspend_is_case_sensitive() {
    let mut app = app();
    app.set_budget(dec("1000"), Allocation::default());
    // "Shopping" counts toward the total only
    app.add_expense("Shopping", dec("700"), "", Some(d(2025, 3, 1)));
    app.add_expense("shopping", dec("301"), "", Some(d(2025, 3, 2)));
    assert_eq!(
        app.check_overspending(None),
        vec![
            Suggestion::Overspent { excess: dec("1") },
            Suggestion::WantsExceeded { excess: dec("1") },
        ]
    );
}

#[test]
fn pattern_window_is_ten_most_recent_across_ledger() {
    let mut app = app();
    app.set_budget(dec("1000"), Allocation::default());
    app.add_expense("hobbies", dec("500"), "", Some(d(2025, 1, 1)));
    for day in 2..=11 {
        app.add_expense("dining", dec("60"), "", Some(d(2025, 1, day)));
    }
    // nothing spent in March; the January history still drives patterns
    assert_eq!(
        app.check_overspending(None),
        vec![Suggestion::HighSpending {
            category: "dining".into(),
            average: dec("60"),
        }]
    );
}

#[test]
fn patterns_follow_first_seen_order_in_window() {
    let mut app = app();
    app.set_budget(dec("10000"), Allocation::default());
    app.add_expense("groceries", dec("10"), "", Some(d(2025, 1, 1)));
    app.add_expense("hobbies", dec("90"), "", Some(d(2025, 2, 1)));
    app.add_expense("dining", dec("70"), "", Some(d(2025, 2, 2)));
    app.add_expense("hobbies", dec("90"), "", Some(d(2025, 3, 5)));
    app.add_expense("dining", dec("70"), "", Some(d(2025, 3, 10)));
    assert_eq!(
        app.check_overspending(None),
        vec![
            Suggestion::HighSpending {
                category: "dining".into(),
                average: dec("70"),
            },
            Suggestion::HighSpending {
                category: "hobbies".into(),
                average: dec("90"),
            },
        ]
    );
}

#[test]
fn zero_budget_reports_zero_percent() {
    let mut app = app();
    app.set_budget(Decimal::ZERO, Allocation::default());
    app.add_expense("rent", dec("10"), "", Some(d(2025, 3, 1)));
    let p = app.budget_progress(None).unwrap();
    assert_eq!(p.needs.spent, dec("10"));
    assert_eq!(p.needs.percent, Decimal::ZERO);
    assert_eq!(p.needs.remaining, Decimal::ZERO);
    assert_eq!(p.total.percent, Decimal::ZERO);
}
